//! Golden Key cards and their effect table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::SpaceIndex;
use crate::core::Money;
use crate::effects::CardEffect;

/// Number of distinct Golden Key cards.
pub const DECK_SIZE: usize = 30;

/// A Golden Key card, identified by its printed id (0-29).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GoldenKey(u8);

/// A card id outside the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no golden key with id {0}")]
pub struct UnknownCard(pub u8);

impl GoldenKey {
    /// Card with the given id, or `None` for ids outside the deck.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < DECK_SIZE {
            Some(Self(id))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// Every card in id order.
    pub fn all() -> impl Iterator<Item = GoldenKey> {
        (0..DECK_SIZE as u8).map(GoldenKey)
    }

    /// What drawing this card does.
    #[must_use]
    pub fn effect(self) -> CardEffect {
        EFFECTS[self.0 as usize]
    }
}

impl TryFrom<u8> for GoldenKey {
    type Error = UnknownCard;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id).ok_or(UnknownCard(id))
    }
}

impl From<GoldenKey> for u8 {
    fn from(card: GoldenKey) -> u8 {
        card.0
    }
}

impl std::fmt::Display for GoldenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Golden Key {}", self.0)
    }
}

const fn at(index: u8) -> SpaceIndex {
    SpaceIndex::fixed(index)
}

const EFFECTS: [CardEffect; DECK_SIZE] = [
    CardEffect::CollectFromOpponents(Money::cents(5)),
    CardEffect::PayBank(Money::cents(50)),
    CardEffect::Receive(Money::millions(1)),
    CardEffect::Receive(Money::millions(2)),
    CardEffect::GrantEscapeTicket,
    CardEffect::Strand,
    CardEffect::Teleport(at(25)),
    CardEffect::Teleport(at(5)),
    CardEffect::PayBank(Money::cents(50)),
    CardEffect::PayBank(Money::millions(1)),
    // 10
    CardEffect::Receive(Money::cents(50)),
    CardEffect::MoveBy(-2),
    CardEffect::MoveBy(-3),
    CardEffect::Teleport(at(0)),
    CardEffect::GrantComplimentaryTicket,
    CardEffect::GrantComplimentaryTicket,
    CardEffect::RideToll {
        operator: at(15),
        fare: Money::millions(3),
        destination: at(1),
    },
    CardEffect::BuildingFee([Money::cents(10), Money::cents(30), Money::cents(50)]),
    CardEffect::Receive(Money::millions(1)),
    CardEffect::WorldTour,
    // 20
    CardEffect::BuildingFee([Money::cents(30), Money::cents(60), Money::millions(1)]),
    CardEffect::Receive(Money::millions(3)),
    CardEffect::SellMostExpensive,
    CardEffect::SellMostExpensive,
    CardEffect::Teleport(at(39)),
    CardEffect::BuildingFee([Money::cents(50), Money::millions(1), Money::cents(150)]),
    CardEffect::Teleport(at(20)),
    CardEffect::SpaceStationPass,
    CardEffect::SpaceStationPass,
    CardEffect::RideToll {
        operator: at(28),
        fare: Money::cents(250),
        destination: at(3),
    },
];
