//! Space and property definitions.

use serde::{Deserialize, Serialize};

use super::BoardError;
use crate::core::Money;

/// Number of spaces around the board.
pub const BOARD_SIZE: u8 = 40;

/// Position on the board, always in `0..BOARD_SIZE`.
///
/// Deserialization goes through [`SpaceIndex::new`], so loaded data cannot
/// point off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SpaceIndex(u8);

impl SpaceIndex {
    /// The GO space.
    pub const GO: SpaceIndex = SpaceIndex(0);

    /// Create an index, or `None` if it is off the board.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create an index for fixed board data.
    ///
    /// Panics if the index is off the board, so only use it with constants.
    #[must_use]
    pub const fn fixed(index: u8) -> Self {
        assert!(index < BOARD_SIZE, "space index off the board");
        Self(index)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index `steps` spaces ahead (or behind, when negative), wrapping around.
    ///
    /// ```
    /// use blue_marble::board::SpaceIndex;
    ///
    /// assert_eq!(SpaceIndex::fixed(38).advance(5), SpaceIndex::fixed(3));
    /// assert_eq!(SpaceIndex::fixed(1).advance(-3), SpaceIndex::fixed(38));
    /// ```
    #[must_use]
    pub fn advance(self, steps: i32) -> Self {
        Self((self.0 as i32 + steps).rem_euclid(BOARD_SIZE as i32) as u8)
    }

    /// All indices in board order.
    pub fn all() -> impl Iterator<Item = SpaceIndex> {
        (0..BOARD_SIZE).map(SpaceIndex)
    }
}

impl TryFrom<u8> for SpaceIndex {
    type Error = BoardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(BoardError::IndexOutOfRange(index))
    }
}

impl From<SpaceIndex> for u8 {
    fn from(index: SpaceIndex) -> u8 {
        index.0
    }
}

impl std::fmt::Display for SpaceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a space does when a player lands on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceKind {
    Go,
    Property,
    DesertedIsland,
    Welfare,
    SpaceStation,
    WelfareTax,
    GoldenKey,
    Tax,
}

/// Colour group of regular properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u8);

/// How rent is computed for a property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentSchedule {
    /// Special properties: a fixed rent, no construction.
    Flat(Money),
    /// Regular cities: land rent plus a per-building rent for each tier.
    Tiered {
        land: Money,
        per_building: [Money; 3],
    },
}

/// Static data of an ownable space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    pub price: Money,
    pub rent: RentSchedule,
    pub group: Option<GroupId>,
}

impl PropertyDef {
    /// A special property with a flat rent.
    #[must_use]
    pub fn special(price: Money, rent: Money) -> Self {
        Self {
            price,
            rent: RentSchedule::Flat(rent),
            group: None,
        }
    }

    /// A regular city whose rents scale with its price.
    ///
    /// Land rent is a tenth of the price; each house, office and hotel adds
    /// 30%, 60% and 100% of the price respectively.
    #[must_use]
    pub fn city(price: Money, group: GroupId) -> Self {
        Self {
            price,
            rent: RentSchedule::Tiered {
                land: price.percent(10),
                per_building: [price.percent(30), price.percent(60), price],
            },
            group: Some(group),
        }
    }

    /// Whether buildings can be constructed here.
    #[must_use]
    pub fn is_buildable(&self) -> bool {
        matches!(self.rent, RentSchedule::Tiered { .. })
    }
}

/// One space of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub index: SpaceIndex,
    pub name: String,
    pub kind: SpaceKind,
    /// Present exactly when `kind` is `Property`.
    pub property: Option<PropertyDef>,
}

impl Space {
    /// A non-ownable space.
    pub fn new(index: SpaceIndex, name: impl Into<String>, kind: SpaceKind) -> Self {
        Self {
            index,
            name: name.into(),
            kind,
            property: None,
        }
    }

    /// An ownable space.
    pub fn property(index: SpaceIndex, name: impl Into<String>, def: PropertyDef) -> Self {
        Self {
            index,
            name: name.into(),
            kind: SpaceKind::Property,
            property: Some(def),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_index_bounds() {
        assert!(SpaceIndex::new(39).is_some());
        assert!(SpaceIndex::new(40).is_none());
        assert_eq!(SpaceIndex::all().count(), 40);
    }

    #[test]
    fn test_advance_wraps_both_ways() {
        assert_eq!(SpaceIndex::fixed(0).advance(40), SpaceIndex::fixed(0));
        assert_eq!(SpaceIndex::fixed(35).advance(12), SpaceIndex::fixed(7));
        assert_eq!(SpaceIndex::fixed(2).advance(-2), SpaceIndex::GO);
        assert_eq!(SpaceIndex::fixed(2).advance(-3), SpaceIndex::fixed(39));
    }

    #[test]
    fn test_city_rents() {
        let def = PropertyDef::city(Money::millions(2), GroupId(0));
        assert!(def.is_buildable());
        assert_eq!(
            def.rent,
            RentSchedule::Tiered {
                land: Money::cents(20),
                per_building: [Money::cents(60), Money::cents(120), Money::millions(2)],
            }
        );
    }

    #[test]
    fn test_special_not_buildable() {
        let def = PropertyDef::special(Money::millions(5), Money::cents(60));
        assert!(!def.is_buildable());
        assert_eq!(def.group, None);
    }
}
