//! Game configuration.
//!
//! The engine never hardcodes amounts. Hosts start from
//! `GameConfig::default()` (the classic Blue Marble values) and override
//! with the `with_*` builders:
//!
//! ```
//! use blue_marble::core::{GameConfig, Money};
//!
//! let config = GameConfig::new(7)
//!     .with_starting_money(Money::millions(10))
//!     .with_welfare_tax(Money::cents(200));
//!
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;
use crate::cards::DECK_SIZE;

/// Per-unit construction prices and the sell-back rate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingPrices {
    /// Unit price for `[house, office, hotel]`.
    pub unit: [Money; 3],
    /// Percentage of the unit price refunded when a building is sold.
    pub sell_back_percent: u8,
}

impl Default for BuildingPrices {
    fn default() -> Self {
        Self {
            unit: [Money::cents(50), Money::cents(100), Money::cents(150)],
            sell_back_percent: 50,
        }
    }
}

/// How the Golden Key deck is ordered at game start.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckOrder {
    /// All cards, shuffled once with the session RNG.
    #[default]
    Shuffled,
    /// Exactly these card ids, top first. Used for replays and scripted games.
    Fixed(Vec<u8>),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for turn order, deck shuffle and dice.
    pub seed: u64,
    pub starting_money: Money,
    /// Paid when a player lands exactly on GO.
    pub go_payout: Money,
    /// Donation charged at the Welfare Tax space.
    pub welfare_tax: Money,
    /// Charged by generic tax spaces on custom boards.
    pub tax: Money,
    /// Space station entry fee, paid to the shuttle owner or the bank.
    pub space_station_fee: Money,
    /// Turns a stranded player must sit out.
    pub deserted_island_turns: u8,
    pub building_prices: BuildingPrices,
    pub min_players: usize,
    pub max_players: usize,
    pub deck_order: DeckOrder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            starting_money: Money::millions(20),
            go_payout: Money::millions(2),
            welfare_tax: Money::cents(150),
            tax: Money::millions(1),
            space_station_fee: Money::millions(2),
            deserted_island_turns: 3,
            building_prices: BuildingPrices::default(),
            min_players: 2,
            max_players: 8,
            deck_order: DeckOrder::Shuffled,
        }
    }
}

impl GameConfig {
    /// Default configuration with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_starting_money(mut self, amount: Money) -> Self {
        self.starting_money = amount;
        self
    }

    #[must_use]
    pub fn with_go_payout(mut self, amount: Money) -> Self {
        self.go_payout = amount;
        self
    }

    #[must_use]
    pub fn with_welfare_tax(mut self, amount: Money) -> Self {
        self.welfare_tax = amount;
        self
    }

    #[must_use]
    pub fn with_tax(mut self, amount: Money) -> Self {
        self.tax = amount;
        self
    }

    #[must_use]
    pub fn with_space_station_fee(mut self, amount: Money) -> Self {
        self.space_station_fee = amount;
        self
    }

    #[must_use]
    pub fn with_deserted_island_turns(mut self, turns: u8) -> Self {
        self.deserted_island_turns = turns;
        self
    }

    #[must_use]
    pub fn with_building_prices(mut self, prices: BuildingPrices) -> Self {
        self.building_prices = prices;
        self
    }

    /// Deal the Golden Key deck in exactly this order instead of shuffling.
    #[must_use]
    pub fn with_fixed_deck(mut self, ids: impl IntoIterator<Item = u8>) -> Self {
        self.deck_order = DeckOrder::Fixed(ids.into_iter().collect());
        self
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let amounts = [
            ("starting_money", self.starting_money),
            ("go_payout", self.go_payout),
            ("welfare_tax", self.welfare_tax),
            ("tax", self.tax),
            ("space_station_fee", self.space_station_fee),
        ];
        if let Some((field, _)) = amounts.iter().find(|(_, amount)| amount.is_negative()) {
            return Err(ConfigError::NegativeAmount(*field));
        }
        if self.building_prices.unit.iter().any(|p| p.is_negative()) {
            return Err(ConfigError::NegativeAmount("building_prices"));
        }
        if self.building_prices.sell_back_percent > 100 {
            return Err(ConfigError::SellBackPercent(self.building_prices.sell_back_percent));
        }
        if self.min_players < 2 || self.min_players > self.max_players || self.max_players > 255 {
            return Err(ConfigError::PlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if let DeckOrder::Fixed(ids) = &self.deck_order {
            if ids.is_empty() {
                return Err(ConfigError::EmptyDeck);
            }
            let mut seen = [false; DECK_SIZE];
            for &id in ids {
                let slot = seen
                    .get_mut(id as usize)
                    .ok_or(ConfigError::UnknownCard(id))?;
                if *slot {
                    return Err(ConfigError::DuplicateCard(id));
                }
                *slot = true;
            }
        }
        Ok(())
    }

    /// Check that a lobby roster fits the configured player bounds.
    pub fn validate_roster(&self, player_count: usize) -> Result<(), ConfigError> {
        if player_count < self.min_players || player_count > self.max_players {
            return Err(ConfigError::PlayerCount {
                count: player_count,
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }
}

/// Configuration problems detected before a game starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must not be negative")]
    NegativeAmount(&'static str),

    #[error("sell-back percent {0} exceeds 100")]
    SellBackPercent(u8),

    #[error("invalid player bounds {min}..={max}")]
    PlayerBounds { min: usize, max: usize },

    #[error("{count} players not allowed, expected {min}..={max}")]
    PlayerCount { count: usize, min: usize, max: usize },

    #[error("fixed deck order is empty")]
    EmptyDeck,

    #[error("golden key {0} does not exist")]
    UnknownCard(u8),

    #[error("golden key {0} appears twice in the deck order")]
    DuplicateCard(u8),
}
