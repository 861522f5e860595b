//! The game session: one authoritative state, one pending prompt.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::prompt::{Prompt, Transition};
use crate::board::{Board, SpaceIndex, SpaceKind};
use crate::cards::{GoldenKey, GoldenKeyDeck};
use crate::core::{DeckOrder, GameConfig, GameError, GameRng, GameState, PlayerId, Response};
use crate::effects::relocate;
use crate::events::{EventLog, GameEvent, Ticket};
use crate::players::PlayerProfile;
use crate::rules::{resolve_landing, settle, Decision, Settlement};
use crate::turn::{DiceSource, MoveOutcome};

/// A running game.
///
/// The host reads [`pending`](Self::pending), asks the right player, and
/// feeds the answer to [`submit`](Self::submit). State changes only through
/// accepted responses; a rejected one leaves everything as it was.
///
/// ```
/// use blue_marble::core::{GameConfig, Response};
/// use blue_marble::players::PlayerProfile;
/// use blue_marble::session::{GameSession, Prompt};
///
/// let roster = vec![PlayerProfile::new("Ann", "red"), PlayerProfile::new("Bo", "blue")];
/// let mut session = GameSession::begin_game(GameConfig::new(7), roster).unwrap();
///
/// assert!(matches!(session.pending(), Some(Prompt::Roll { .. })));
/// let transition = session.submit(Response::Roll).unwrap();
/// assert!(!transition.events.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct GameSession<D: DiceSource = GameRng> {
    state: GameState,
    dice: D,
}

impl GameSession<GameRng> {
    /// Start a game on the standard board with seeded dice.
    pub fn begin_game(config: GameConfig, roster: Vec<PlayerProfile>) -> Result<Self, GameError> {
        let dice = GameRng::new(config.seed).for_context("dice");
        Self::begin_game_with_dice(config, roster, dice)
    }
}

impl<D: DiceSource> GameSession<D> {
    /// Start a game on the standard board with the given dice.
    pub fn begin_game_with_dice(
        config: GameConfig,
        roster: Vec<PlayerProfile>,
        dice: D,
    ) -> Result<Self, GameError> {
        Self::begin_game_on_board(config, Board::standard(), roster, dice)
    }

    /// Start a game on a custom board.
    ///
    /// The turn order is shuffled and the deck dealt from the config seed.
    pub fn begin_game_on_board(
        config: GameConfig,
        board: Board,
        roster: Vec<PlayerProfile>,
        dice: D,
    ) -> Result<Self, GameError> {
        config.validate()?;
        config.validate_roster(roster.len())?;

        let rng = GameRng::new(config.seed);
        let mut order: Vec<PlayerId> = PlayerId::all(roster.len()).collect();
        rng.for_context("turn_order").shuffle(&mut order);

        let deck = match &config.deck_order {
            DeckOrder::Shuffled => GoldenKeyDeck::shuffled(&mut rng.for_context("deck")),
            DeckOrder::Fixed(ids) => {
                GoldenKeyDeck::from_order(ids.iter().filter_map(|&id| GoldenKey::new(id)))
            }
        };

        info!(players = roster.len(), seed = config.seed, "game started");
        let mut state = GameState::new(config, board, roster, order, deck);
        state.pending = state.current_player().map(|p| start_prompt(&state, p));

        Ok(Self { state, dice })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn pending(&self) -> Option<&Prompt> {
        self.state.pending.as_ref()
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.current_player()
    }

    /// The winner, once only one player is left.
    #[must_use]
    pub fn is_game_over(&self) -> Option<PlayerId> {
        self.state.is_game_over()
    }

    /// The dice, e.g. to script more rolls.
    pub fn dice_mut(&mut self) -> &mut D {
        &mut self.dice
    }

    /// Answer the pending prompt.
    pub fn submit(&mut self, response: Response) -> Result<Transition, GameError> {
        if self.state.winner.is_some() {
            return Err(GameError::GameOver);
        }
        let prompt = self.state.pending.clone().ok_or(GameError::NoPendingPrompt)?;
        let player = prompt.player();

        let mut events = EventLog::new();
        if let Err(err) = self.apply(prompt, response, &mut events) {
            warn!(player = %player, response = response.name(), error = %err, "response rejected");
            return Err(err);
        }

        self.state.record(player, response);
        Ok(Transition {
            events,
            next: self.state.pending.clone(),
        })
    }

    fn apply(
        &mut self,
        prompt: Prompt,
        response: Response,
        events: &mut EventLog,
    ) -> Result<(), GameError> {
        match (prompt, response) {
            (Prompt::Roll { player }, Response::Roll) => self.roll(player, events),

            (Prompt::UseEscapeTicket { player }, Response::UseEscapeTicket(use_it)) => {
                let used = use_it
                    && self
                        .state
                        .account_mut(player)
                        .is_some_and(|a| a.take_escape_ticket());
                if used {
                    events.push(GameEvent::TicketUsed {
                        player,
                        ticket: Ticket::EscapeDesertedIsland,
                    });
                }
                self.state.pending = Some(Prompt::Roll { player });
            }

            (
                Prompt::StationDestination {
                    player,
                    destinations,
                },
                Response::StationDestination(destination),
            ) => {
                if !destinations.contains(&destination) {
                    return Err(GameError::InvalidDestination(destination));
                }
                if let Some(account) = self.state.account_mut(player) {
                    account.on_space_station = false;
                }
                relocate(&mut self.state, player, destination, true, events);
                self.land(player, destination, events);
            }

            (Prompt::Landing { player, decision }, response) => {
                match settle(&mut self.state, player, &decision, response, events)? {
                    Settlement::Done => self.end_turn(events),
                    Settlement::Relocated(space) => self.land(player, space, events),
                    Settlement::WorldTour => {
                        self.state.pending = Some(Prompt::WorldTour { player });
                    }
                }
            }

            (Prompt::WorldTour { player }, Response::WorldTourComplete) => {
                let position = self
                    .state
                    .account(player)
                    .map_or(SpaceIndex::GO, |a| a.position);
                self.land(player, position, events);
            }

            (prompt, response) => {
                return Err(GameError::InvalidDecision {
                    expected: prompt.expected_response(),
                    got: response.name(),
                })
            }
        }
        Ok(())
    }

    fn roll(&mut self, player: PlayerId, events: &mut EventLog) {
        let roll = self.state.turn.roll_dice(&mut self.dice);
        debug!(player = %player, die1 = roll.die1, die2 = roll.die2, "dice rolled");
        events.push(GameEvent::DiceRolled {
            player,
            die1: roll.die1,
            die2: roll.die2,
        });

        let Some(account) = self.state.accounts.get_mut(player) else {
            self.end_turn(events);
            return;
        };
        match self
            .state
            .turn
            .move_player(account, i32::from(roll.total()), roll.is_double())
        {
            MoveOutcome::Held { turns_left } => {
                events.push(GameEvent::DesertedIslandHeld { player, turns_left });
                self.end_turn(events);
            }
            MoveOutcome::Moved { from, to } => {
                events.push(GameEvent::PlayerMoved { player, from, to });
                self.land(player, to, events);
            }
        }
    }

    /// Resolve a landing and either prompt for the decision or end the turn.
    fn land(&mut self, player: PlayerId, space: SpaceIndex, events: &mut EventLog) {
        if self.state.winner.is_some() || !self.state.turn.is_active(player) {
            self.end_turn(events);
            return;
        }
        match resolve_landing(&mut self.state, player, space, events) {
            None | Some(Decision::NoAction) => self.end_turn(events),
            Some(decision) => {
                self.state.pending = Some(Prompt::Landing { player, decision });
            }
        }
    }

    fn end_turn(&mut self, events: &mut EventLog) {
        if self.state.winner.is_some() {
            self.state.pending = None;
            return;
        }
        match self.state.turn.advance_turn() {
            Some(next) => {
                self.state.turn_number += 1;
                debug!(player = %next, turn = self.state.turn_number, "turn advanced");
                events.push(GameEvent::TurnAdvanced { player: next });
                self.state.pending = Some(start_prompt(&self.state, next));
            }
            None => self.state.pending = None,
        }
    }
}

impl<D: DiceSource + Serialize + DeserializeOwned> GameSession<D> {
    /// Serialize the full state and the dice with `bincode`.
    pub fn snapshot(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(&(&self.state, &self.dice))?)
    }

    /// Resume a game from [`snapshot`](Self::snapshot) bytes.
    ///
    /// Off-board indices and unknown card ids fail to decode; players without
    /// a seat are rejected afterwards.
    pub fn restore(bytes: &[u8]) -> Result<Self, GameError> {
        let (state, dice): (GameState, D) = bincode::deserialize(bytes)?;
        if let Some(player) = state.unseated_player() {
            return Err(GameError::UnknownPlayer(player));
        }
        Ok(Self { state, dice })
    }
}

/// The prompt that opens `player`'s turn.
fn start_prompt(state: &GameState, player: PlayerId) -> Prompt {
    match state.account(player) {
        Some(account) if account.on_space_station => Prompt::StationDestination {
            player,
            destinations: SpaceIndex::all()
                .filter(|&i| state.board.space(i).kind != SpaceKind::SpaceStation)
                .collect(),
        },
        Some(account) if account.is_stranded() && account.has_escape_ticket => {
            Prompt::UseEscapeTicket { player }
        }
        _ => Prompt::Roll { player },
    }
}
