//! Error types surfaced by the session.
//!
//! All of these are local rejections: the state is unchanged when one is
//! returned. Bankruptcy is not among them because it is resolved inside
//! the engine by elimination.

use thiserror::Error;

use super::config::ConfigError;
use super::money::Money;
use super::player::PlayerId;
use crate::board::SpaceIndex;
use crate::ledger::ConstructionError;

/// Why a request to the session was rejected.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("response {got} does not answer pending prompt {expected}")]
    InvalidDecision {
        expected: &'static str,
        got: &'static str,
    },

    #[error("{0} is not a valid destination")]
    InvalidDestination(SpaceIndex),

    #[error("{player} cannot afford {amount}")]
    InsufficientFunds { player: PlayerId, amount: Money },

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error("the game is over")]
    GameOver,

    #[error("no prompt is pending")]
    NoPendingPrompt,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("snapshot failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("snapshot refers to {0}, who has no seat")]
    UnknownPlayer(PlayerId),
}

/// An involuntary debt the payer cannot cover.
///
/// Always resolved by eliminating `debtor`; `creditor` is `None` for the bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{debtor} is bankrupt")]
pub struct Bankruptcy {
    pub debtor: PlayerId,
    pub creditor: Option<PlayerId>,
}
