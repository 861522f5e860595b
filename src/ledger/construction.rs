//! Building counts and construction pricing.
//!
//! Construction is voluntary: a request that breaks the rules or that the
//! owner cannot pay for is rejected with a [`ConstructionError`] and nothing
//! changes. It never leads to bankruptcy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::SpaceIndex;
use crate::core::{BuildingPrices, Money};

/// Most buildings of one tier a property can hold.
pub const MAX_PER_TIER: u8 = 2;

/// Building tiers, cheapest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingTier {
    House,
    Office,
    Hotel,
}

impl BuildingTier {
    pub const ALL: [BuildingTier; 3] = [BuildingTier::House, BuildingTier::Office, BuildingTier::Hotel];

    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// Building counts `[houses, offices, hotels]` on one property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Buildings([u8; 3]);

impl Buildings {
    pub const NONE: Buildings = Buildings([0; 3]);

    #[must_use]
    pub const fn new(houses: u8, offices: u8, hotels: u8) -> Self {
        Self([houses, offices, hotels])
    }

    #[must_use]
    pub const fn count(self, tier: BuildingTier) -> u8 {
        self.0[tier.slot()]
    }

    #[must_use]
    pub const fn counts(self) -> [u8; 3] {
        self.0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == [0; 3]
    }

    /// Weighted sum: `count(tier) * rates[tier]` over all tiers.
    #[must_use]
    pub fn weighted(self, rates: &[Money; 3]) -> Money {
        BuildingTier::ALL
            .iter()
            .map(|&tier| rates[tier.slot()] * i64::from(self.count(tier)))
            .sum()
    }

    /// Check the per-tier cap and that every tier sits on the one below it.
    pub fn validate(self) -> Result<(), ConstructionError> {
        if let Some(&tier) = BuildingTier::ALL.iter().find(|&&t| self.count(t) > MAX_PER_TIER) {
            return Err(ConstructionError::ExceedsCap {
                tier,
                requested: self.count(tier),
            });
        }
        let [houses, offices, hotels] = self.0;
        if offices > 0 && houses == 0 {
            return Err(ConstructionError::MissingLowerTier(BuildingTier::Office));
        }
        if hotels > 0 && offices == 0 {
            return Err(ConstructionError::MissingLowerTier(BuildingTier::Hotel));
        }
        Ok(())
    }
}

impl From<[u8; 3]> for Buildings {
    fn from(counts: [u8; 3]) -> Self {
        Self(counts)
    }
}

/// A validated change of buildings and what it costs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionPlan {
    pub property: SpaceIndex,
    pub from: Buildings,
    pub to: Buildings,
    /// Positive: the owner pays. Negative: the owner is refunded.
    pub net_cost: Money,
}

impl ConstructionPlan {
    /// Price the move from `from` to `to`.
    ///
    /// New buildings cost the full unit price; removed buildings refund
    /// `sell_back_percent` of it.
    pub fn new(
        property: SpaceIndex,
        from: Buildings,
        to: Buildings,
        prices: &BuildingPrices,
    ) -> Result<Self, ConstructionError> {
        to.validate()?;

        let net_cost = BuildingTier::ALL
            .iter()
            .map(|&tier| {
                let unit = prices.unit[tier.slot()];
                let delta = i64::from(to.count(tier)) - i64::from(from.count(tier));
                if delta >= 0 {
                    unit * delta
                } else {
                    -(unit.percent(i64::from(prices.sell_back_percent)) * -delta)
                }
            })
            .sum();

        Ok(Self {
            property,
            from,
            to,
            net_cost,
        })
    }

    /// Whether the plan changes nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Why a construction request was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("space {0} is not a property")]
    NotAProperty(SpaceIndex),

    #[error("property {0} does not allow buildings")]
    NotBuildable(SpaceIndex),

    #[error("property {0} has no owner")]
    Unowned(SpaceIndex),

    #[error("{requested} buildings of tier {tier:?} exceed the cap of 2")]
    ExceedsCap { tier: BuildingTier, requested: u8 },

    #[error("tier {0:?} needs at least one building of the tier below")]
    MissingLowerTier(BuildingTier),

    #[error("construction costs {needed} but only {available} is available")]
    InsufficientFunds { needed: Money, available: Money },
}
