//! Responses a host submits to answer the pending prompt.
//!
//! Each variant answers exactly one kind of prompt; the session rejects a
//! response that does not match with [`GameError::InvalidDecision`](super::GameError).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::SpaceIndex;
use crate::ledger::Buildings;

/// A player's answer to the pending prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Response {
    /// Roll the dice.
    Roll,
    /// Whether to spend the escape ticket before rolling.
    UseEscapeTicket(bool),
    /// Where to fly from the space station.
    StationDestination(SpaceIndex),
    /// Buy the property just landed on.
    Buy(bool),
    /// Pay rent, or waive it with a complimentary ticket.
    RentPayment { use_ticket: bool },
    /// New building counts for an owned city; `None` leaves them as they are.
    BuildCounts(Option<Buildings>),
    WelfareTaxConfirm,
    /// Pay the fee and board the space station.
    StationEntry(bool),
    GoldenKeyAck,
    /// Dismiss an informational decision (payouts, Deserted Island, taxes).
    Acknowledge,
    /// The host finished showing the world tour.
    WorldTourComplete,
}

impl Response {
    /// Short name for error messages and logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Response::Roll => "Roll",
            Response::UseEscapeTicket(_) => "UseEscapeTicket",
            Response::StationDestination(_) => "StationDestination",
            Response::Buy(_) => "Buy",
            Response::RentPayment { .. } => "RentPayment",
            Response::BuildCounts(_) => "BuildCounts",
            Response::WelfareTaxConfirm => "WelfareTaxConfirm",
            Response::StationEntry(_) => "StationEntry",
            Response::GoldenKeyAck => "GoldenKeyAck",
            Response::Acknowledge => "Acknowledge",
            Response::WorldTourComplete => "WorldTourComplete",
        }
    }
}

/// A response that was accepted, kept in the game history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub response: Response,
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, response: Response, turn: u32) -> Self {
        Self {
            player,
            response,
            turn,
        }
    }
}
