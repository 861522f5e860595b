//! Complete game state.
//!
//! `GameState` is everything a snapshot needs to resume a game: the board,
//! ownership, accounts, turn order, deck, shared pools and the prompt that
//! is waiting for an answer. The dice source lives outside it, in the
//! session.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionRecord, Response};
use super::config::GameConfig;
use super::money::Money;
use super::player::{PlayerId, PlayerMap};
use crate::board::Board;
use crate::cards::GoldenKeyDeck;
use crate::ledger::PropertyLedger;
use crate::players::{PlayerAccount, PlayerProfile};
use crate::session::Prompt;
use crate::turn::TurnEngine;

/// Authoritative state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub board: Board,
    pub ledger: PropertyLedger,

    /// Every seated player, eliminated ones included.
    pub accounts: PlayerMap<PlayerAccount>,
    /// Active players and whose turn it is.
    pub turn: TurnEngine,
    pub deck: GoldenKeyDeck,

    /// Accumulated welfare taxes, paid out on the Welfare space.
    pub welfare_pool: Money,
    /// Next space station entry is free (Golden Keys 27 and 28).
    pub free_space_station_pass: bool,
    /// The next landing is skipped.
    pub world_tour_active: bool,
    pub winner: Option<PlayerId>,

    pub pending: Option<Prompt>,
    /// Starts at 1 and counts turn changes, repeats after doubles included.
    pub turn_number: u32,
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Seat the roster in `order`; everyone starts on GO with the
    /// configured money.
    #[must_use]
    pub fn new(
        config: GameConfig,
        board: Board,
        roster: Vec<PlayerProfile>,
        order: impl IntoIterator<Item = PlayerId>,
        deck: GoldenKeyDeck,
    ) -> Self {
        let mut profiles = roster.into_iter();
        let starting_money = config.starting_money;
        let accounts = PlayerMap::new(profiles.len(), |id| {
            let profile = profiles
                .next()
                .unwrap_or_else(|| PlayerProfile::new(id.to_string(), ""));
            PlayerAccount::new(id, profile, starting_money)
        });

        Self {
            ledger: PropertyLedger::new(&board),
            board,
            config,
            accounts,
            turn: TurnEngine::new(order),
            deck,
            welfare_pool: Money::ZERO,
            free_space_station_pass: false,
            world_tour_active: false,
            winner: None,
            pending: None,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// First player referenced by the turn order, the pending prompt or the
    /// winner slot who has no account. `None` for a consistent state.
    #[must_use]
    pub fn unseated_player(&self) -> Option<PlayerId> {
        self.turn
            .order()
            .chain(self.pending.as_ref().map(|p| p.player()))
            .chain(self.winner)
            .find(|&p| self.accounts.get(p).is_none())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.accounts.player_count()
    }

    #[must_use]
    pub fn account(&self, player: PlayerId) -> Option<&PlayerAccount> {
        self.accounts.get(player)
    }

    pub fn account_mut(&mut self, player: PlayerId) -> Option<&mut PlayerAccount> {
        self.accounts.get_mut(player)
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turn.current_player()
    }

    /// Players still in the game, in turn order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.turn.order()
    }

    #[must_use]
    pub fn is_game_over(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Record an accepted response.
    pub fn record(&mut self, player: PlayerId, response: Response) {
        self.history
            .push_back(ActionRecord::new(player, response, self.turn_number));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<PlayerProfile> {
        vec![PlayerProfile::new("Ann", "red"), PlayerProfile::new("Bo", "blue")]
    }

    #[test]
    fn test_new_state() {
        let board = Board::standard();
        let state = GameState::new(
            GameConfig::default(),
            board,
            roster(),
            [PlayerId(1), PlayerId(0)],
            GoldenKeyDeck::from_order([]),
        );

        assert_eq!(state.player_count(), 2);
        assert_eq!(state.current_player(), Some(PlayerId(1)));
        assert_eq!(state.account(PlayerId(0)).map(|a| a.name.as_str()), Some("Ann"));
        assert_eq!(state.account(PlayerId(1)).map(|a| a.money), Some(Money::millions(20)));
        assert_eq!(state.is_game_over(), None);
        assert_eq!(state.active_players().count(), 2);
    }

    #[test]
    fn test_record_history() {
        let mut state = GameState::new(
            GameConfig::default(),
            Board::standard(),
            roster(),
            [PlayerId(0), PlayerId(1)],
            GoldenKeyDeck::from_order([]),
        );
        state.record(PlayerId(0), Response::Roll);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].turn, 1);
    }
}
