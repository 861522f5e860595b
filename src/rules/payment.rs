//! Money transfers, bankruptcy and elimination.
//!
//! [`pay`] is the only path for involuntary payments (rent, taxes, card
//! fees, fares). It checks the balance before touching anything, so a failed
//! payment leaves both accounts exactly as they were.

use tracing::info;

use crate::core::{Bankruptcy, GameState, Money, PlayerId};
use crate::events::{EventLog, GameEvent};

/// Add `amount` to a player's balance.
pub fn credit(state: &mut GameState, player: PlayerId, amount: Money, events: &mut EventLog) {
    if amount.is_zero() {
        return;
    }
    if let Some(account) = state.account_mut(player) {
        account.money += amount;
        events.push(GameEvent::MoneyChanged {
            player,
            delta: amount,
            balance: account.money,
        });
    }
}

/// Move `amount` from `payer` to `payee` (`None` is the bank).
///
/// Fails with [`Bankruptcy`] without changing anything when the payer
/// cannot cover the whole amount.
pub fn pay(
    state: &mut GameState,
    payer: PlayerId,
    payee: Option<PlayerId>,
    amount: Money,
    events: &mut EventLog,
) -> Result<(), Bankruptcy> {
    let bankruptcy = Bankruptcy {
        debtor: payer,
        creditor: payee,
    };
    let account = state.account_mut(payer).ok_or(bankruptcy)?;
    if !account.can_afford(amount) {
        return Err(bankruptcy);
    }
    if amount.is_zero() {
        return Ok(());
    }

    account.money -= amount;
    events.push(GameEvent::MoneyChanged {
        player: payer,
        delta: -amount,
        balance: account.money,
    });
    if let Some(payee) = payee {
        credit(state, payee, amount, events);
    }
    Ok(())
}

/// [`pay`], eliminating the payer on bankruptcy. Returns whether the
/// payment went through.
pub fn pay_or_eliminate(
    state: &mut GameState,
    payer: PlayerId,
    payee: Option<PlayerId>,
    amount: Money,
    events: &mut EventLog,
) -> bool {
    match pay(state, payer, payee, amount, events) {
        Ok(()) => true,
        Err(bankruptcy) => {
            eliminate(state, bankruptcy.debtor, bankruptcy.creditor, events);
            false
        }
    }
}

/// Remove a bankrupt player from the game.
///
/// Owed to the bank, every property returns unowned with its buildings
/// cleared. Owed to a player (the shark), that player takes every property
/// as it stands plus the loser's remaining money. When one player is left
/// they win.
pub fn eliminate(
    state: &mut GameState,
    loser: PlayerId,
    creditor: Option<PlayerId>,
    events: &mut EventLog,
) {
    let shark = creditor.filter(|&s| s != loser && state.turn.is_active(s));
    let Some(account) = state.account_mut(loser) else {
        return;
    };
    if account.eliminated {
        return;
    }

    let properties = std::mem::take(&mut account.properties);
    let remaining = std::mem::replace(&mut account.money, Money::ZERO);
    account.eliminated = true;
    account.on_space_station = false;
    account.deserted_island_turns = 0;
    if !remaining.is_zero() {
        events.push(GameEvent::MoneyChanged {
            player: loser,
            delta: -remaining,
            balance: Money::ZERO,
        });
    }

    match shark {
        Some(shark) => {
            for &property in &properties {
                state.ledger.set_owner(property, shark);
                if let Some(account) = state.account_mut(shark) {
                    account.add_property(property);
                }
                events.push(GameEvent::PropertyChanged {
                    property,
                    owner: Some(shark),
                    buildings: state.ledger.buildings(property),
                });
            }
            credit(state, shark, remaining, events);
        }
        None => {
            for &property in &properties {
                state.ledger.release(property);
                events.push(GameEvent::PropertyChanged {
                    property,
                    owner: None,
                    buildings: state.ledger.buildings(property),
                });
            }
        }
    }

    state.turn.remove_player(loser);
    info!(player = %loser, creditor = ?shark, properties = properties.len(), "player eliminated");
    events.push(GameEvent::PlayerEliminated {
        loser,
        creditor: shark,
    });

    if state.turn.active_count() == 1 {
        if let Some(winner) = state.turn.order().next() {
            state.winner = Some(winner);
            info!(winner = %winner, "game over");
            events.push(GameEvent::GameOver { winner });
        }
    }
}
