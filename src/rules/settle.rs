//! Applying a player's answer to a landing decision.
//!
//! Every check happens before the first mutation, so a rejected answer
//! leaves the state untouched and the decision still pending.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::decision::Decision;
use super::payment::{credit, pay, pay_or_eliminate};
use crate::board::SpaceIndex;
use crate::core::{GameError, GameState, Money, PlayerId, Response};
use crate::effects::{strand, EffectOutcome, EffectResolver};
use crate::events::{EventLog, GameEvent, Ticket};

/// Where the turn goes after a decision is settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Settlement {
    /// The landing is finished.
    Done,
    /// The player was moved and lands again at this space.
    Relocated(SpaceIndex),
    /// Wait for the host to finish the world tour.
    WorldTour,
}

/// Settle `decision` for `player` with `response`.
pub fn settle(
    state: &mut GameState,
    player: PlayerId,
    decision: &Decision,
    response: Response,
    events: &mut EventLog,
) -> Result<Settlement, GameError> {
    let mismatch = || GameError::InvalidDecision {
        expected: decision.expected_response(),
        got: response.name(),
    };

    match (decision, response) {
        (
            Decision::Payout { .. } | Decision::NoAction,
            Response::Acknowledge,
        )
        | (Decision::ChooseBuyOrSkip { .. }, Response::Buy(false))
        | (Decision::EnterSpaceStationPrompt { .. }, Response::StationEntry(false))
        | (Decision::BuildOrSkip { .. }, Response::BuildCounts(None)) => {}

        (Decision::ChooseBuyOrSkip { property, price }, Response::Buy(true)) => {
            buy(state, player, *property, *price, events)?;
        }

        (
            Decision::PayRent {
                owner,
                amount,
                ticket_available,
                ..
            },
            Response::RentPayment { use_ticket },
        ) => {
            if use_ticket {
                if !ticket_available {
                    return Err(mismatch());
                }
                let used = state
                    .account_mut(player)
                    .is_some_and(|a| a.take_complimentary_ticket());
                if !used {
                    return Err(mismatch());
                }
                events.push(GameEvent::TicketUsed {
                    player,
                    ticket: Ticket::Complimentary,
                });
            } else {
                pay_or_eliminate(state, player, Some(*owner), *amount, events);
            }
        }

        (Decision::DonateToWelfare { amount }, Response::WelfareTaxConfirm) => {
            // The bank tops up the pool even when the donor goes under.
            pay_or_eliminate(state, player, None, *amount, events);
            state.welfare_pool += *amount;
            events.push(GameEvent::WelfarePoolChanged {
                pool: state.welfare_pool,
            });
        }

        (Decision::DrawGoldenKey { card, .. }, Response::GoldenKeyAck) => {
            return Ok(match EffectResolver::apply(state, player, card.effect(), events) {
                EffectOutcome::Settled | EffectOutcome::Bankrupt => Settlement::Done,
                EffectOutcome::Relocated(space) => Settlement::Relocated(space),
                EffectOutcome::WorldTour => Settlement::WorldTour,
            });
        }

        (Decision::EnterSpaceStationPrompt { fee, payee }, Response::StationEntry(true)) => {
            enter_space_station(state, player, *fee, *payee, events)?;
        }

        (Decision::BuildOrSkip { property, .. }, Response::BuildCounts(Some(desired))) => {
            let funds = state
                .account(player)
                .map_or(Money::ZERO, |a| a.money);
            let plan = state.ledger.build(
                &state.board,
                *property,
                desired,
                &state.config.building_prices,
                funds,
            )?;
            if plan.is_noop() {
                return Ok(Settlement::Done);
            }
            if plan.net_cost.is_negative() {
                credit(state, player, -plan.net_cost, events);
            } else if pay(state, player, None, plan.net_cost, events).is_err() {
                // Funds were checked by the ledger.
                return Err(GameError::InsufficientFunds {
                    player,
                    amount: plan.net_cost,
                });
            }
            debug!(player = %player, property = %plan.property, cost = %plan.net_cost, "construction");
            events.push(GameEvent::PropertyChanged {
                property: plan.property,
                owner: Some(player),
                buildings: plan.to,
            });
        }

        (Decision::Strand { .. }, Response::Acknowledge) => {
            strand(state, player, events);
        }

        (Decision::PayTax { amount }, Response::Acknowledge) => {
            pay_or_eliminate(state, player, None, *amount, events);
        }

        _ => return Err(mismatch()),
    }
    Ok(Settlement::Done)
}

fn buy(
    state: &mut GameState,
    player: PlayerId,
    property: SpaceIndex,
    price: Money,
    events: &mut EventLog,
) -> Result<(), GameError> {
    pay(state, player, None, price, events).map_err(|_| GameError::InsufficientFunds {
        player,
        amount: price,
    })?;
    state.ledger.set_owner(property, player);
    if let Some(account) = state.account_mut(player) {
        account.add_property(property);
    }
    events.push(GameEvent::PropertyChanged {
        property,
        owner: Some(player),
        buildings: state.ledger.buildings(property),
    });
    Ok(())
}

fn enter_space_station(
    state: &mut GameState,
    player: PlayerId,
    fee: Money,
    payee: Option<PlayerId>,
    events: &mut EventLog,
) -> Result<(), GameError> {
    let payee = payee.filter(|&p| p != player);
    pay(state, player, payee, fee, events).map_err(|_| GameError::InsufficientFunds {
        player,
        amount: fee,
    })?;
    if let Some(account) = state.account_mut(player) {
        account.on_space_station = true;
    }
    events.push(GameEvent::EnteredSpaceStation { player, fee });
    Ok(())
}
