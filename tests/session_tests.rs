//! End-to-end game scenarios driven through the session API.
//!
//! Dice are scripted and the Golden Key deck is dealt in a fixed order, so
//! every scenario is fully deterministic. Turn order still comes from the
//! seed, so tests read it back instead of assuming it.

use blue_marble::board::SpaceIndex;
use blue_marble::core::{GameConfig, GameError, Money, PlayerId, Response};
use blue_marble::events::{GameEvent, Ticket};
use blue_marble::ledger::{Buildings, ConstructionError};
use blue_marble::players::PlayerProfile;
use blue_marble::rules::Decision;
use blue_marble::session::{GameSession, Prompt};
use blue_marble::turn::ScriptedDice;

fn roster(n: usize) -> Vec<PlayerProfile> {
    ["Ann", "Bo", "Cy", "Di"]
        .iter()
        .take(n)
        .map(|name| PlayerProfile::new(*name, "grey"))
        .collect()
}

/// Two-player session; returns it with the players in turn order.
fn start(config: GameConfig, rolls: &[(u8, u8)]) -> (GameSession<ScriptedDice>, PlayerId, PlayerId) {
    let session = GameSession::begin_game_with_dice(
        config,
        roster(2),
        ScriptedDice::new(rolls.iter().copied()),
    )
    .unwrap();
    let order: Vec<PlayerId> = session.state().active_players().collect();
    (session, order[0], order[1])
}

fn at(i: u8) -> SpaceIndex {
    SpaceIndex::fixed(i)
}

fn money(session: &GameSession<ScriptedDice>, player: PlayerId) -> Money {
    session.state().accounts[player].money
}

#[test]
fn test_buy_unowned_property() {
    let config = GameConfig::new(3).with_starting_money(Money::millions(3));
    let (mut session, a, b) = start(config, &[(2, 3)]);

    let t = session.submit(Response::Roll).unwrap();
    assert!(t.events.contains(&GameEvent::PlayerMoved {
        player: a,
        from: at(0),
        to: at(5)
    }));
    assert_eq!(
        t.next,
        Some(Prompt::Landing {
            player: a,
            decision: Decision::ChooseBuyOrSkip {
                property: at(5),
                price: Money::millions(2)
            }
        })
    );

    let t = session.submit(Response::Buy(true)).unwrap();
    assert_eq!(money(&session, a), Money::millions(1));
    assert_eq!(session.state().ledger.owner(at(5)), Some(a));
    assert!(t.events.contains(&GameEvent::TurnAdvanced { player: b }));
    assert_eq!(t.next, Some(Prompt::Roll { player: b }));
}

#[test]
fn test_doubles_keep_the_turn() {
    let config = GameConfig::new(5).with_fixed_deck([2]);
    let (mut session, a, _) = start(config, &[(1, 1), (2, 3)]);

    session.submit(Response::Roll).unwrap();
    assert!(matches!(
        session.pending(),
        Some(Prompt::Landing { decision: Decision::DrawGoldenKey { .. }, .. })
    ));

    let t = session.submit(Response::GoldenKeyAck).unwrap();
    assert_eq!(money(&session, a), Money::millions(21));
    assert!(t.events.contains(&GameEvent::TurnAdvanced { player: a }));
    assert_eq!(t.next, Some(Prompt::Roll { player: a }));

    // The second roll is not a double, so the turn passes.
    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(false)).unwrap();
    assert_ne!(session.current_player(), Some(a));
}

#[test]
fn test_bankruptcy_to_bank_ends_game() {
    let config = GameConfig::new(8)
        .with_starting_money(Money::cents(30))
        .with_fixed_deck([1]);
    let (mut session, a, b) = start(config, &[(1, 1)]);

    session.submit(Response::Roll).unwrap();
    let t = session.submit(Response::GoldenKeyAck).unwrap();

    assert!(t.events.contains(&GameEvent::PlayerEliminated {
        loser: a,
        creditor: None
    }));
    assert_eq!(t.events.last(), Some(&GameEvent::GameOver { winner: b }));
    assert_eq!(t.next, None);
    assert_eq!(session.is_game_over(), Some(b));
    assert!(matches!(session.submit(Response::Roll), Err(GameError::GameOver)));
}

#[test]
fn test_bankruptcy_to_shark() {
    let config = GameConfig::new(13)
        .with_starting_money(Money::cents(210))
        .with_fixed_deck([16]);
    let (mut session, a, b) = start(config, &[(2, 3), (3, 3), (4, 5), (1, 1)]);

    // a buys Jeju.
    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(true)).unwrap();
    // b skips Singapore, rolls again on the double and buys Concorde.
    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(false)).unwrap();
    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(true)).unwrap();
    assert_eq!(session.state().ledger.owner(at(15)), Some(b));

    // a draws the Concorde fare and cannot pay it.
    session.submit(Response::Roll).unwrap();
    let t = session.submit(Response::GoldenKeyAck).unwrap();

    assert!(t.events.contains(&GameEvent::PlayerEliminated {
        loser: a,
        creditor: Some(b)
    }));
    assert_eq!(session.is_game_over(), Some(b));
    assert_eq!(session.state().ledger.owner(at(5)), Some(b));
    assert_eq!(session.state().accounts[b].properties, vec![at(15), at(5)]);
    assert_eq!(money(&session, b), Money::cents(20));
    assert_eq!(money(&session, a), Money::ZERO);
}

#[test]
fn test_world_tour_skips_landing() {
    let config = GameConfig::new(21).with_fixed_deck([19]);
    let (mut session, a, b) = start(config, &[(3, 4)]);

    session.submit(Response::Roll).unwrap();
    let t = session.submit(Response::GoldenKeyAck).unwrap();
    assert!(t.events.contains(&GameEvent::WorldTourStarted { player: a }));
    assert_eq!(t.next, Some(Prompt::WorldTour { player: a }));

    // Anything but the completion signal is rejected while touring.
    assert!(session.submit(Response::Roll).is_err());

    let t = session.submit(Response::WorldTourComplete).unwrap();
    assert!(!t
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::GoldenKeyDrawn { .. })));
    assert!(!session.state().world_tour_active);
    assert_eq!(session.state().accounts[a].position, at(7));
    assert_eq!(t.next, Some(Prompt::Roll { player: b }));
}

#[test]
fn test_space_station_pass_and_travel() {
    let config = GameConfig::new(34).with_fixed_deck([27]);
    let (mut session, a, _) = start(config, &[(1, 1)]);

    session.submit(Response::Roll).unwrap();
    let t = session.submit(Response::GoldenKeyAck).unwrap();
    assert!(t.events.contains(&GameEvent::TicketUsed {
        player: a,
        ticket: Ticket::SpaceStationPass
    }));
    assert!(session.state().accounts[a].on_space_station);
    assert_eq!(money(&session, a), Money::millions(20));

    // The double still counts: a goes again, from the station.
    let destinations = match session.pending() {
        Some(Prompt::StationDestination { player, destinations }) => {
            assert_eq!(*player, a);
            destinations.clone()
        }
        other => panic!("expected a station prompt, got {other:?}"),
    };
    assert_eq!(destinations.len(), 39);
    assert!(!destinations.contains(&at(30)));

    assert!(matches!(
        session.submit(Response::StationDestination(at(30))),
        Err(GameError::InvalidDestination(_))
    ));

    let t = session.submit(Response::StationDestination(at(39))).unwrap();
    assert!(!session.state().accounts[a].on_space_station);
    assert_eq!(
        t.next,
        Some(Prompt::Landing {
            player: a,
            decision: Decision::ChooseBuyOrSkip {
                property: at(39),
                price: Money::millions(10)
            }
        })
    );
}

#[test]
fn test_rent_waived_with_ticket() {
    let config = GameConfig::new(55).with_fixed_deck([14]);
    let (mut session, a, b) = start(config, &[(1, 1), (1, 2), (4, 5), (1, 3)]);

    // a draws a complimentary ticket, rolls again and skips Jeju.
    session.submit(Response::Roll).unwrap();
    session.submit(Response::GoldenKeyAck).unwrap();
    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(false)).unwrap();
    // b buys Istanbul.
    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(true)).unwrap();

    session.submit(Response::Roll).unwrap();
    assert_eq!(
        session.pending(),
        Some(&Prompt::Landing {
            player: a,
            decision: Decision::PayRent {
                property: at(9),
                owner: b,
                amount: Money::cents(12),
                ticket_available: true
            }
        })
    );

    session
        .submit(Response::RentPayment { use_ticket: true })
        .unwrap();
    assert_eq!(session.state().accounts[a].complimentary_tickets, 0);
    assert_eq!(money(&session, a), Money::millions(20));
    assert_eq!(money(&session, b), Money::millions(20) - Money::cents(120));
}

#[test]
fn test_construction_rejections_keep_decision() {
    let config = GameConfig::new(89).with_fixed_deck([12]);
    let (mut session, a, _) = start(config, &[(1, 3), (1, 2), (1, 2)]);

    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(true)).unwrap();
    session.submit(Response::Roll).unwrap();
    session.submit(Response::Buy(false)).unwrap();

    // a lands on a Golden Key that moves them back onto Manila.
    session.submit(Response::Roll).unwrap();
    let t = session.submit(Response::GoldenKeyAck).unwrap();
    let build_prompt = Prompt::Landing {
        player: a,
        decision: Decision::BuildOrSkip {
            property: at(4),
            current: Buildings::NONE,
        },
    };
    assert_eq!(t.next, Some(build_prompt.clone()));

    let over_cap = session.submit(Response::BuildCounts(Some(Buildings::new(3, 0, 0))));
    assert!(matches!(
        over_cap,
        Err(GameError::Construction(ConstructionError::ExceedsCap { .. }))
    ));
    let out_of_order = session.submit(Response::BuildCounts(Some(Buildings::new(0, 1, 0))));
    assert!(matches!(
        out_of_order,
        Err(GameError::Construction(ConstructionError::MissingLowerTier(_)))
    ));
    assert_eq!(session.pending(), Some(&build_prompt));
    assert_eq!(money(&session, a), Money::cents(1920));

    session
        .submit(Response::BuildCounts(Some(Buildings::new(2, 0, 0))))
        .unwrap();
    assert_eq!(session.state().ledger.buildings(at(4)), Buildings::new(2, 0, 0));
    assert_eq!(money(&session, a), Money::cents(1820));
}

#[test]
fn test_three_players_continue_after_elimination() {
    let config = GameConfig::new(2)
        .with_starting_money(Money::cents(30))
        .with_fixed_deck([1]);
    let mut session = GameSession::begin_game_with_dice(
        config,
        roster(3),
        ScriptedDice::new([(1, 1)]),
    )
    .unwrap();
    let order: Vec<PlayerId> = session.state().active_players().collect();

    session.submit(Response::Roll).unwrap();
    let t = session.submit(Response::GoldenKeyAck).unwrap();

    assert_eq!(session.is_game_over(), None);
    assert_eq!(session.state().turn.active_count(), 2);
    assert!(session.state().accounts[order[0]].eliminated);
    // The double died with its roller; the follower takes over.
    assert_eq!(t.next, Some(Prompt::Roll { player: order[1] }));
}

#[test]
fn test_history_records_accepted_responses() {
    let (mut session, a, _) = start(GameConfig::new(4), &[(2, 3)]);
    session.submit(Response::Roll).unwrap();
    assert!(session.submit(Response::Roll).is_err());
    session.submit(Response::Buy(false)).unwrap();

    let history: Vec<_> = session.state().history.iter().map(|r| (r.player, r.response)).collect();
    assert_eq!(history, vec![(a, Response::Roll), (a, Response::Buy(false))]);
}
