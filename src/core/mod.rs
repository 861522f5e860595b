//! Shared building blocks: money, players, RNG, configuration, responses,
//! errors and the game state itself.

pub mod money;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;

pub use money::Money;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{BuildingPrices, ConfigError, DeckOrder, GameConfig};
pub use action::{ActionRecord, Response};
pub use error::{Bankruptcy, GameError};
pub use state::GameState;
