//! Per-player money, position and status flags.

use serde::{Deserialize, Serialize};

use crate::board::SpaceIndex;
use crate::core::{Money, PlayerId};

/// What the lobby supplies for each seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    /// Opaque identity tag for the host (piece colour).
    pub color: String,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A player's account.
///
/// Between resolved actions `money` is never negative: debts that cannot
/// be paid end in elimination instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAccount {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub money: Money,
    pub position: SpaceIndex,
    /// Owned properties in acquisition order.
    pub properties: Vec<SpaceIndex>,
    /// Parked on the space station; picks a destination next turn.
    pub on_space_station: bool,
    /// Turns still to skip on the Deserted Island.
    pub deserted_island_turns: u8,
    pub has_escape_ticket: bool,
    /// Each one waives a single rent payment.
    pub complimentary_tickets: u32,
    pub eliminated: bool,
}

impl PlayerAccount {
    #[must_use]
    pub fn new(id: PlayerId, profile: PlayerProfile, starting_money: Money) -> Self {
        Self {
            id,
            name: profile.name,
            color: profile.color,
            money: starting_money,
            position: SpaceIndex::GO,
            properties: Vec::new(),
            on_space_station: false,
            deserted_island_turns: 0,
            has_escape_ticket: false,
            complimentary_tickets: 0,
            eliminated: false,
        }
    }

    #[must_use]
    pub fn can_afford(&self, amount: Money) -> bool {
        self.money >= amount
    }

    #[must_use]
    pub fn is_stranded(&self) -> bool {
        self.deserted_island_turns > 0
    }

    #[must_use]
    pub fn owns(&self, property: SpaceIndex) -> bool {
        self.properties.contains(&property)
    }

    pub fn add_property(&mut self, property: SpaceIndex) {
        if !self.owns(property) {
            self.properties.push(property);
        }
    }

    pub fn remove_property(&mut self, property: SpaceIndex) {
        self.properties.retain(|&p| p != property);
    }

    /// Use one complimentary ticket, if any.
    pub fn take_complimentary_ticket(&mut self) -> bool {
        if self.complimentary_tickets == 0 {
            return false;
        }
        self.complimentary_tickets -= 1;
        true
    }

    /// Use the escape ticket, clearing the Deserted Island hold.
    pub fn take_escape_ticket(&mut self) -> bool {
        if !self.has_escape_ticket {
            return false;
        }
        self.has_escape_ticket = false;
        self.deserted_island_turns = 0;
        true
    }
}
