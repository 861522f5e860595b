//! # blue-marble
//!
//! Turn and economy engine for Blue Marble, a Monopoly-style board game.
//!
//! ## Design Principles
//!
//! 1. **Pure simulation**: a response goes in, a new state and a list of
//!    typed events come out. No rendering, audio or timers.
//!
//! 2. **One pending prompt**: the engine suspends at every decision point
//!    and resumes only when the host submits the matching response.
//!
//! 3. **Exact money**: balances are fixed-point integers, and every payment
//!    is applied in full or not at all.
//!
//! ## Modules
//!
//! - `core`: money, players, RNG, configuration, responses, errors, state
//! - `board`: the 40-space board and its layout listing
//! - `cards`: Golden Key cards and the circular deck
//! - `ledger`: property ownership, buildings and rent
//! - `players`: per-player accounts
//! - `turn`: dice, turn order and movement
//! - `effects`: Golden Key effect descriptors and their resolver
//! - `rules`: landing rules, decisions, payments and bankruptcy
//! - `events`: the event stream for hosts
//! - `session`: the request/response facade

pub mod core;
pub mod board;
pub mod cards;
pub mod ledger;
pub mod players;
pub mod turn;
pub mod effects;
pub mod rules;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Bankruptcy, BuildingPrices, ConfigError, DeckOrder, GameConfig, GameError, GameRng,
    GameState, Money, PlayerId, PlayerMap, Response,
};

pub use crate::board::{Board, BoardError, SpaceIndex, SpaceKind};

pub use crate::cards::{GoldenKey, GoldenKeyDeck};

pub use crate::ledger::{Buildings, ConstructionError, PropertyLedger};

pub use crate::players::{PlayerAccount, PlayerProfile};

pub use crate::turn::{DiceRoll, DiceSource, MoveOutcome, ScriptedDice, TurnEngine};

pub use crate::effects::{CardEffect, EffectCategory, EffectResolver};

pub use crate::rules::Decision;

pub use crate::events::{EventLog, GameEvent, Ticket};

pub use crate::session::{GameSession, Prompt, Transition};
