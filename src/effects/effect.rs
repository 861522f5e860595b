//! Golden Key effect descriptors.
//!
//! Thirty cards collapse into a handful of parameterised effects. Each card
//! id maps to one [`CardEffect`] in the card table; one resolver interprets
//! them all.

use serde::{Deserialize, Serialize};

use crate::board::SpaceIndex;
use crate::core::Money;

/// What a Golden Key does when drawn.
///
/// ## Transfers
/// - `Receive`, `PayBank`: money from or to the bank
/// - `CollectFromOpponents`: every other active player pays the drawer
/// - `SellMostExpensive`: the priciest owned property goes back to the bank
///   for half its price
///
/// ## Movement
/// - `Teleport`, `MoveBy`: relocate, then resolve the landing there
/// - `RideToll`: pay the operator's owner, then teleport
/// - `WorldTour`: a full lap collecting the welfare pool
/// - `SpaceStationPass`: fly to the space station with free entry
///
/// ## Status grants
/// - `GrantEscapeTicket`, `GrantComplimentaryTicket`, `Strand`
///
/// ## Proportional fees
/// - `BuildingFee`: a rate per house, office and hotel owned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    Receive(Money),
    PayBank(Money),
    CollectFromOpponents(Money),
    GrantEscapeTicket,
    GrantComplimentaryTicket,
    /// Sent to the Deserted Island without resolving a landing.
    Strand,
    Teleport(SpaceIndex),
    /// Relative move; negative goes backwards.
    MoveBy(i8),
    /// `fare` is owed only if `operator` has an owner.
    RideToll {
        operator: SpaceIndex,
        fare: Money,
        destination: SpaceIndex,
    },
    /// Rate per building of each tier `[house, office, hotel]`.
    BuildingFee([Money; 3]),
    SellMostExpensive,
    WorldTour,
    SpaceStationPass,
}

/// Broad grouping of effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectCategory {
    Transfer,
    Movement,
    StatusGrant,
    ProportionalFee,
}

impl CardEffect {
    #[must_use]
    pub fn category(self) -> EffectCategory {
        match self {
            CardEffect::Receive(_)
            | CardEffect::PayBank(_)
            | CardEffect::CollectFromOpponents(_)
            | CardEffect::SellMostExpensive => EffectCategory::Transfer,
            CardEffect::Teleport(_)
            | CardEffect::MoveBy(_)
            | CardEffect::RideToll { .. }
            | CardEffect::WorldTour
            | CardEffect::SpaceStationPass => EffectCategory::Movement,
            CardEffect::GrantEscapeTicket
            | CardEffect::GrantComplimentaryTicket
            | CardEffect::Strand => EffectCategory::StatusGrant,
            CardEffect::BuildingFee(_) => EffectCategory::ProportionalFee,
        }
    }
}
