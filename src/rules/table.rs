//! Landing rules, one handler per space kind.
//!
//! Handlers run when a player comes to rest on a space. Some effects apply
//! right away (GO and Welfare payouts, drawing a Golden Key, a free space
//! station entry); the rest wait for the player's answer to the returned
//! [`Decision`].

use tracing::debug;

use super::decision::Decision;
use super::payment::credit;
use crate::board::{SpaceIndex, SpaceKind};
use crate::core::{GameState, Money, PlayerId};
use crate::effects::EffectResolver;
use crate::events::{EventLog, GameEvent, Ticket};

/// A landing handler.
pub type LandingRule = fn(&mut GameState, PlayerId, SpaceIndex, &mut EventLog) -> Decision;

/// Handler for every space kind.
pub const RULES: [(SpaceKind, LandingRule); 8] = [
    (SpaceKind::Go, land_on_go),
    (SpaceKind::Property, land_on_property),
    (SpaceKind::DesertedIsland, land_on_deserted_island),
    (SpaceKind::Welfare, land_on_welfare),
    (SpaceKind::SpaceStation, land_on_space_station),
    (SpaceKind::WelfareTax, land_on_welfare_tax),
    (SpaceKind::GoldenKey, land_on_golden_key),
    (SpaceKind::Tax, land_on_tax),
];

#[must_use]
pub fn rule_for(kind: SpaceKind) -> LandingRule {
    RULES
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(no_action as LandingRule, |&(_, rule)| rule)
}

/// Resolve a landing on `space`.
///
/// Returns `None` when an active world tour swallows the landing; the tour
/// flag is cleared and the turn should simply move on.
pub fn resolve_landing(
    state: &mut GameState,
    player: PlayerId,
    space: SpaceIndex,
    events: &mut EventLog,
) -> Option<Decision> {
    if state.world_tour_active {
        state.world_tour_active = false;
        return None;
    }
    let kind = state.board.space(space).kind;
    let decision = rule_for(kind)(state, player, space, events);
    debug!(player = %player, space = %space, ?kind, ?decision, "landing resolved");
    Some(decision)
}

fn no_action(_: &mut GameState, _: PlayerId, _: SpaceIndex, _: &mut EventLog) -> Decision {
    Decision::NoAction
}

fn land_on_go(state: &mut GameState, player: PlayerId, _: SpaceIndex, events: &mut EventLog) -> Decision {
    let amount = state.config.go_payout;
    credit(state, player, amount, events);
    Decision::Payout { amount }
}

fn land_on_property(
    state: &mut GameState,
    player: PlayerId,
    space: SpaceIndex,
    _: &mut EventLog,
) -> Decision {
    let Some(def) = state.board.property(space) else {
        return Decision::NoAction;
    };

    match state.ledger.owner(space) {
        None => Decision::ChooseBuyOrSkip {
            property: space,
            price: def.price,
        },
        Some(owner) if owner != player => Decision::PayRent {
            property: space,
            owner,
            amount: state.ledger.rent(&state.board, space).unwrap_or(Money::ZERO),
            ticket_available: state
                .account(player)
                .is_some_and(|a| a.complimentary_tickets > 0),
        },
        Some(_) if def.is_buildable() => Decision::BuildOrSkip {
            property: space,
            current: state.ledger.buildings(space),
        },
        Some(_) => Decision::NoAction,
    }
}

fn land_on_deserted_island(
    state: &mut GameState,
    _: PlayerId,
    _: SpaceIndex,
    _: &mut EventLog,
) -> Decision {
    Decision::Strand {
        turns: state.config.deserted_island_turns,
    }
}

fn land_on_welfare(
    state: &mut GameState,
    player: PlayerId,
    _: SpaceIndex,
    events: &mut EventLog,
) -> Decision {
    let amount = std::mem::replace(&mut state.welfare_pool, Money::ZERO);
    credit(state, player, amount, events);
    events.push(GameEvent::WelfarePoolChanged { pool: Money::ZERO });
    Decision::Payout { amount }
}

fn land_on_space_station(
    state: &mut GameState,
    player: PlayerId,
    _: SpaceIndex,
    events: &mut EventLog,
) -> Decision {
    if state.free_space_station_pass {
        state.free_space_station_pass = false;
        if let Some(account) = state.account_mut(player) {
            account.on_space_station = true;
        }
        events.push(GameEvent::TicketUsed {
            player,
            ticket: Ticket::SpaceStationPass,
        });
        events.push(GameEvent::EnteredSpaceStation {
            player,
            fee: Money::ZERO,
        });
        return Decision::NoAction;
    }

    let payee = state
        .board
        .station_operator()
        .and_then(|operator| state.ledger.owner(operator));
    let fee = if payee == Some(player) {
        Money::ZERO
    } else {
        state.config.space_station_fee
    };
    Decision::EnterSpaceStationPrompt { fee, payee }
}

fn land_on_welfare_tax(
    state: &mut GameState,
    _: PlayerId,
    _: SpaceIndex,
    _: &mut EventLog,
) -> Decision {
    Decision::DonateToWelfare {
        amount: state.config.welfare_tax,
    }
}

fn land_on_golden_key(
    state: &mut GameState,
    player: PlayerId,
    _: SpaceIndex,
    events: &mut EventLog,
) -> Decision {
    let Some(card) = state.deck.draw() else {
        return Decision::NoAction;
    };
    events.push(GameEvent::GoldenKeyDrawn { player, card });
    Decision::DrawGoldenKey {
        card,
        preview: EffectResolver::preview(state, player, card.effect()),
    }
}

fn land_on_tax(state: &mut GameState, _: PlayerId, _: SpaceIndex, _: &mut EventLog) -> Decision {
    Decision::PayTax {
        amount: state.config.tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::cards::{GoldenKey, GoldenKeyDeck};
    use crate::core::GameConfig;
    use crate::ledger::Buildings;
    use crate::players::PlayerProfile;

    const P0: PlayerId = PlayerId(0);
    const P1: PlayerId = PlayerId(1);

    fn state() -> GameState {
        GameState::new(
            GameConfig::default(),
            Board::standard(),
            vec![PlayerProfile::new("A", "red"), PlayerProfile::new("B", "blue")],
            [P0, P1],
            GoldenKeyDeck::from_order([GoldenKey::new(4).unwrap(), GoldenKey::new(9).unwrap()]),
        )
    }

    fn land(state: &mut GameState, player: PlayerId, space: u8) -> Option<Decision> {
        let mut events = EventLog::new();
        resolve_landing(state, player, SpaceIndex::fixed(space), &mut events)
    }

    #[test]
    fn test_every_kind_has_a_rule() {
        let kinds = [
            SpaceKind::Go,
            SpaceKind::Property,
            SpaceKind::DesertedIsland,
            SpaceKind::Welfare,
            SpaceKind::SpaceStation,
            SpaceKind::WelfareTax,
            SpaceKind::GoldenKey,
            SpaceKind::Tax,
        ];
        assert!(kinds.iter().all(|k| RULES.iter().any(|(r, _)| r == k)));
    }

    #[test]
    fn test_go_pays_immediately() {
        let mut s = state();
        assert_eq!(land(&mut s, P0, 0), Some(Decision::Payout { amount: Money::millions(2) }));
        assert_eq!(s.accounts[P0].money, Money::millions(22));
    }

    #[test]
    fn test_property_decisions() {
        let mut s = state();
        assert_eq!(
            land(&mut s, P0, 5),
            Some(Decision::ChooseBuyOrSkip {
                property: SpaceIndex::fixed(5),
                price: Money::millions(2)
            })
        );

        s.ledger.set_owner(SpaceIndex::fixed(5), P1);
        s.accounts[P0].complimentary_tickets = 1;
        assert_eq!(
            land(&mut s, P0, 5),
            Some(Decision::PayRent {
                property: SpaceIndex::fixed(5),
                owner: P1,
                amount: Money::cents(30),
                ticket_available: true
            })
        );
        assert_eq!(land(&mut s, P1, 5), Some(Decision::NoAction));

        s.ledger.set_owner(SpaceIndex::fixed(1), P1);
        assert_eq!(
            land(&mut s, P1, 1),
            Some(Decision::BuildOrSkip {
                property: SpaceIndex::fixed(1),
                current: Buildings::NONE
            })
        );
    }

    #[test]
    fn test_welfare_empties_pool() {
        let mut s = state();
        s.welfare_pool = Money::cents(450);
        assert_eq!(land(&mut s, P1, 20), Some(Decision::Payout { amount: Money::cents(450) }));
        assert_eq!(s.welfare_pool, Money::ZERO);
        assert_eq!(s.accounts[P1].money, Money::cents(2450));
    }

    #[test]
    fn test_space_station_fee() {
        let mut s = state();
        assert_eq!(
            land(&mut s, P0, 30),
            Some(Decision::EnterSpaceStationPrompt {
                fee: Money::millions(2),
                payee: None
            })
        );

        s.ledger.set_owner(SpaceIndex::fixed(32), P0);
        assert_eq!(
            land(&mut s, P0, 30),
            Some(Decision::EnterSpaceStationPrompt {
                fee: Money::ZERO,
                payee: Some(P0)
            })
        );
        assert_eq!(
            land(&mut s, P1, 30),
            Some(Decision::EnterSpaceStationPrompt {
                fee: Money::millions(2),
                payee: Some(P0)
            })
        );
    }

    #[test]
    fn test_free_pass_enters_directly() {
        let mut s = state();
        s.free_space_station_pass = true;
        assert_eq!(land(&mut s, P0, 30), Some(Decision::NoAction));
        assert!(s.accounts[P0].on_space_station);
        assert!(!s.free_space_station_pass);
    }

    #[test]
    fn test_golden_key_draws_in_order() {
        let mut s = state();
        let first = land(&mut s, P0, 2);
        assert!(matches!(first, Some(Decision::DrawGoldenKey { card, .. }) if card.id() == 4));
        let second = land(&mut s, P0, 35);
        assert!(matches!(second, Some(Decision::DrawGoldenKey { card, .. }) if card.id() == 9));
    }

    #[test]
    fn test_world_tour_suppresses_one_landing() {
        let mut s = state();
        s.world_tour_active = true;
        assert_eq!(land(&mut s, P0, 0), None);
        assert_eq!(s.accounts[P0].money, Money::millions(20));
        assert!(land(&mut s, P0, 0).is_some());
    }

    #[test]
    fn test_island_and_tax() {
        let mut s = state();
        assert_eq!(land(&mut s, P0, 10), Some(Decision::Strand { turns: 3 }));
        assert_eq!(
            land(&mut s, P0, 38),
            Some(Decision::DonateToWelfare { amount: Money::cents(150) })
        );
    }
}
