//! Property ledger: ownership, buildings and rent for every ownable space.
//!
//! Uses `FxHashMap` keyed by space index. Only spaces with a
//! [`PropertyDef`](crate::board::PropertyDef) have an entry.

mod construction;

pub use construction::{BuildingTier, Buildings, ConstructionError, ConstructionPlan, MAX_PER_TIER};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, GroupId, RentSchedule, SpaceIndex};
use crate::core::{BuildingPrices, Money, PlayerId};

/// Mutable state of one property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyState {
    pub owner: Option<PlayerId>,
    pub buildings: Buildings,
}

/// Ownership and construction state for every property on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyLedger {
    entries: FxHashMap<SpaceIndex, PropertyState>,
}

impl PropertyLedger {
    /// Every property of the board, unowned and empty.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        Self {
            entries: board
                .properties()
                .map(|(index, _)| (index, PropertyState::default()))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, property: SpaceIndex) -> Option<&PropertyState> {
        self.entries.get(&property)
    }

    #[must_use]
    pub fn owner(&self, property: SpaceIndex) -> Option<PlayerId> {
        self.entries.get(&property).and_then(|s| s.owner)
    }

    #[must_use]
    pub fn buildings(&self, property: SpaceIndex) -> Buildings {
        self.entries
            .get(&property)
            .map(|s| s.buildings)
            .unwrap_or_default()
    }

    /// Set the owner, keeping buildings. Returns false for non-properties.
    pub fn set_owner(&mut self, property: SpaceIndex, owner: PlayerId) -> bool {
        match self.entries.get_mut(&property) {
            Some(state) => {
                state.owner = Some(owner);
                true
            }
            None => false,
        }
    }

    /// Return a property to the bank: no owner, no buildings.
    pub fn release(&mut self, property: SpaceIndex) {
        if let Some(state) = self.entries.get_mut(&property) {
            *state = PropertyState::default();
        }
    }

    /// Whether `player` owns every member of a colour group.
    #[must_use]
    pub fn owns_group(&self, board: &Board, group: GroupId, player: PlayerId) -> bool {
        board
            .group_members(group)
            .all(|member| self.owner(member) == Some(player))
    }

    /// Rent due for landing on `property`, or `None` if it is unowned.
    ///
    /// Cities charge their land rent, doubled when the owner holds the whole
    /// colour group with nothing built, plus the per-building rent of each
    /// tier.
    #[must_use]
    pub fn rent(&self, board: &Board, property: SpaceIndex) -> Option<Money> {
        let def = board.property(property)?;
        let state = self.entries.get(&property)?;
        let owner = state.owner?;

        let rent = match &def.rent {
            RentSchedule::Flat(amount) => *amount,
            RentSchedule::Tiered { land, per_building } => {
                let monopoly = def
                    .group
                    .is_some_and(|group| self.owns_group(board, group, owner));
                let land = if monopoly && state.buildings.is_empty() {
                    *land * 2
                } else {
                    *land
                };
                land + state.buildings.weighted(per_building)
            }
        };
        Some(rent)
    }

    /// Change the buildings on an owned city.
    ///
    /// The request is checked against the cap, the tier order and the
    /// owner's `funds` before anything changes; on success the new counts
    /// are committed and the returned plan says what to charge or refund.
    pub fn build(
        &mut self,
        board: &Board,
        property: SpaceIndex,
        desired: Buildings,
        prices: &BuildingPrices,
        funds: Money,
    ) -> Result<ConstructionPlan, ConstructionError> {
        let def = board
            .property(property)
            .ok_or(ConstructionError::NotAProperty(property))?;
        if !def.is_buildable() {
            return Err(ConstructionError::NotBuildable(property));
        }
        let state = self
            .entries
            .get_mut(&property)
            .ok_or(ConstructionError::NotAProperty(property))?;
        if state.owner.is_none() {
            return Err(ConstructionError::Unowned(property));
        }

        let plan = ConstructionPlan::new(property, state.buildings, desired, prices)?;
        if plan.net_cost > funds {
            return Err(ConstructionError::InsufficientFunds {
                needed: plan.net_cost,
                available: funds,
            });
        }

        state.buildings = desired;
        Ok(plan)
    }

    /// Total building count per tier over everything `player` owns.
    #[must_use]
    pub fn building_totals(&self, player: PlayerId) -> Buildings {
        let mut totals = [0u8; 3];
        for state in self.entries.values().filter(|s| s.owner == Some(player)) {
            for (total, count) in totals.iter_mut().zip(state.buildings.counts()) {
                *total = total.saturating_add(count);
            }
        }
        Buildings::from(totals)
    }

    /// The owned property with the highest price.
    ///
    /// Candidates are scanned in `order`; on ties the first one wins.
    #[must_use]
    pub fn most_expensive(&self, board: &Board, order: &[SpaceIndex]) -> Option<SpaceIndex> {
        let mut best: Option<(SpaceIndex, Money)> = None;
        for &index in order {
            let Some(def) = board.property(index) else { continue };
            if best.map_or(true, |(_, price)| def.price > price) {
                best = Some((index, def.price));
            }
        }
        best.map(|(index, _)| index)
    }
}
