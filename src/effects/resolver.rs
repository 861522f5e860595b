//! Applying Golden Key effects to the game state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CardEffect;
use crate::board::{SpaceIndex, SpaceKind, BOARD_SIZE};
use crate::core::{GameState, Money, PlayerId};
use crate::events::{EventLog, GameEvent};
use crate::rules::payment::{credit, pay_or_eliminate};
use crate::turn::MoveOutcome;

/// What the session has to do after an effect is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectOutcome {
    /// Nothing further; the turn can move on.
    Settled,
    /// The player was moved and must resolve a landing at this space.
    Relocated(SpaceIndex),
    /// Suspended until the host reports the tour finished.
    WorldTour,
    /// The drawer went bankrupt and is out of the game.
    Bankrupt,
}

/// Figures shown alongside a card before the player acknowledges it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPreview {
    /// Total of a building fee.
    pub fee: Option<Money>,
    /// Property a sell-off card would take.
    pub most_expensive: Option<SpaceIndex>,
}

/// Interprets every [`CardEffect`].
pub struct EffectResolver;

impl EffectResolver {
    /// What the effect would cost or take, computed without changing state.
    #[must_use]
    pub fn preview(state: &GameState, player: PlayerId, effect: CardEffect) -> CardPreview {
        match effect {
            CardEffect::BuildingFee(rates) => CardPreview {
                fee: Some(Self::building_fee(state, player, &rates)),
                most_expensive: None,
            },
            CardEffect::SellMostExpensive => CardPreview {
                fee: None,
                most_expensive: Self::most_expensive(state, player),
            },
            _ => CardPreview::default(),
        }
    }

    /// Apply `effect` for the player who drew it.
    pub fn apply(
        state: &mut GameState,
        player: PlayerId,
        effect: CardEffect,
        events: &mut EventLog,
    ) -> EffectOutcome {
        debug!(player = %player, ?effect, "applying golden key");

        match effect {
            CardEffect::Receive(amount) => {
                credit(state, player, amount, events);
                EffectOutcome::Settled
            }
            CardEffect::PayBank(amount) => Self::charge(state, player, None, amount, events),
            CardEffect::CollectFromOpponents(amount) => {
                let opponents: Vec<PlayerId> =
                    state.turn.order().filter(|&p| p != player).collect();
                for opponent in opponents {
                    pay_or_eliminate(state, opponent, Some(player), amount, events);
                }
                EffectOutcome::Settled
            }
            CardEffect::GrantEscapeTicket => {
                if let Some(account) = state.account_mut(player) {
                    account.has_escape_ticket = true;
                }
                EffectOutcome::Settled
            }
            CardEffect::GrantComplimentaryTicket => {
                if let Some(account) = state.account_mut(player) {
                    account.complimentary_tickets += 1;
                }
                EffectOutcome::Settled
            }
            CardEffect::Strand => {
                if let Some(island) = state.board.find_kind(SpaceKind::DesertedIsland) {
                    relocate(state, player, island, true, events);
                }
                strand(state, player, events);
                EffectOutcome::Settled
            }
            CardEffect::Teleport(destination) => {
                relocate(state, player, destination, false, events);
                EffectOutcome::Relocated(destination)
            }
            CardEffect::MoveBy(steps) => {
                let Some(position) = state.account(player).map(|a| a.position) else {
                    return EffectOutcome::Settled;
                };
                let destination = position.advance(i32::from(steps));
                relocate(state, player, destination, false, events);
                EffectOutcome::Relocated(destination)
            }
            CardEffect::RideToll {
                operator,
                fare,
                destination,
            } => {
                let owner = state.ledger.owner(operator).filter(|&o| o != player);
                if owner.is_some() && !pay_or_eliminate(state, player, owner, fare, events) {
                    return EffectOutcome::Bankrupt;
                }
                relocate(state, player, destination, false, events);
                EffectOutcome::Relocated(destination)
            }
            CardEffect::BuildingFee(rates) => {
                let fee = Self::building_fee(state, player, &rates);
                Self::charge(state, player, None, fee, events)
            }
            CardEffect::SellMostExpensive => {
                if let Some(property) = Self::most_expensive(state, player) {
                    let price = state
                        .board
                        .property(property)
                        .map_or(Money::ZERO, |def| def.price);
                    state.ledger.release(property);
                    if let Some(account) = state.account_mut(player) {
                        account.remove_property(property);
                    }
                    events.push(GameEvent::PropertyChanged {
                        property,
                        owner: None,
                        buildings: state.ledger.buildings(property),
                    });
                    credit(state, player, price.half(), events);
                }
                EffectOutcome::Settled
            }
            CardEffect::WorldTour => {
                state.world_tour_active = true;
                if let Some(position) = state.account(player).map(|a| a.position) {
                    // A full lap ends where it started.
                    relocate(state, player, position.advance(i32::from(BOARD_SIZE)), false, events);
                }
                let pool = std::mem::replace(&mut state.welfare_pool, Money::ZERO);
                credit(state, player, pool, events);
                events.push(GameEvent::WelfarePoolChanged { pool: Money::ZERO });
                events.push(GameEvent::WorldTourStarted { player });
                EffectOutcome::WorldTour
            }
            CardEffect::SpaceStationPass => {
                state.free_space_station_pass = true;
                match state.board.find_kind(SpaceKind::SpaceStation) {
                    Some(station) => {
                        relocate(state, player, station, false, events);
                        EffectOutcome::Relocated(station)
                    }
                    None => EffectOutcome::Settled,
                }
            }
        }
    }

    fn charge(
        state: &mut GameState,
        player: PlayerId,
        payee: Option<PlayerId>,
        amount: Money,
        events: &mut EventLog,
    ) -> EffectOutcome {
        if pay_or_eliminate(state, player, payee, amount, events) {
            EffectOutcome::Settled
        } else {
            EffectOutcome::Bankrupt
        }
    }

    fn building_fee(state: &GameState, player: PlayerId, rates: &[Money; 3]) -> Money {
        state.ledger.building_totals(player).weighted(rates)
    }

    /// Scans in acquisition order; ties keep the first found.
    fn most_expensive(state: &GameState, player: PlayerId) -> Option<SpaceIndex> {
        let account = state.account(player)?;
        state.ledger.most_expensive(&state.board, &account.properties)
    }
}

/// Put a player on `destination` and report the move.
pub(crate) fn relocate(
    state: &mut GameState,
    player: PlayerId,
    destination: SpaceIndex,
    counts_as_roll: bool,
    events: &mut EventLog,
) {
    let Some(account) = state.accounts.get_mut(player) else {
        return;
    };
    if let MoveOutcome::Moved { from, to } = state.turn.direct_move(account, destination, counts_as_roll) {
        events.push(GameEvent::PlayerMoved { player, from, to });
    }
}

/// Start a Deserted Island stay. Any double rolled this turn is lost.
pub(crate) fn strand(state: &mut GameState, player: PlayerId, events: &mut EventLog) {
    let turns = state.config.deserted_island_turns;
    if let Some(account) = state.accounts.get_mut(player) {
        account.deserted_island_turns = turns;
    }
    state.turn.clear_double();
    events.push(GameEvent::Stranded { player, turns });
}
