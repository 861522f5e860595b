//! Turn order, the doubles rule and movement.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::dice::{DiceRoll, DiceSource};
use crate::board::SpaceIndex;
use crate::core::PlayerId;
use crate::players::PlayerAccount;

/// Result of trying to move a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved { from: SpaceIndex, to: SpaceIndex },
    /// Stuck on the Deserted Island; `turns_left` after this one.
    Held { turns_left: u8 },
}

/// Whose turn it is, in what order, and whether they rolled a double.
///
/// Removing a player keeps `current` pointing at the same player, or, when
/// the current player is the one removed, at whoever followed them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEngine {
    order: Vector<PlayerId>,
    current: usize,
    got_double: bool,
    /// Current player was removed; the next advance must not skip ahead.
    current_removed: bool,
}

impl TurnEngine {
    /// Turn order as given; the first player starts.
    pub fn new(order: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            order: order.into_iter().collect(),
            current: 0,
            got_double: false,
            current_removed: false,
        }
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        if self.current_removed {
            return None;
        }
        self.order.get(self.current).copied()
    }

    /// Active players in turn order.
    pub fn order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.order.contains(&player)
    }

    #[must_use]
    pub fn got_double(&self) -> bool {
        self.got_double
    }

    pub fn clear_double(&mut self) {
        self.got_double = false;
    }

    /// Roll two dice and remember whether they matched.
    pub fn roll_dice<D: DiceSource + ?Sized>(&mut self, dice: &mut D) -> DiceRoll {
        let roll = dice.roll();
        self.got_double = roll.is_double();
        roll
    }

    /// Pass the turn on, unless the last roll was a double.
    ///
    /// A double is consumed by the call that honours it.
    pub fn advance_turn(&mut self) -> Option<PlayerId> {
        if self.order.is_empty() {
            return None;
        }
        if self.current_removed {
            self.current_removed = false;
            self.got_double = false;
        } else if self.got_double {
            self.got_double = false;
        } else {
            self.current = (self.current + 1) % self.order.len();
        }
        self.current_player()
    }

    /// Move `steps` spaces (backwards when negative), wrapping at the board
    /// edge. Passing GO pays nothing.
    ///
    /// A stranded player does not move: one turn is used up instead, and a
    /// double rolled while stranded is forfeited.
    pub fn move_player(
        &mut self,
        account: &mut PlayerAccount,
        steps: i32,
        is_double_roll: bool,
    ) -> MoveOutcome {
        if account.deserted_island_turns > 0 {
            account.deserted_island_turns -= 1;
            if is_double_roll {
                self.got_double = false;
            }
            return MoveOutcome::Held {
                turns_left: account.deserted_island_turns,
            };
        }

        let from = account.position;
        account.position = from.advance(steps);
        MoveOutcome::Moved {
            from,
            to: account.position,
        }
    }

    /// Put a player straight onto `destination`.
    ///
    /// With `counts_as_roll` the move replaces this turn's roll, so a pending
    /// double no longer earns another turn.
    pub fn direct_move(
        &mut self,
        account: &mut PlayerAccount,
        destination: SpaceIndex,
        counts_as_roll: bool,
    ) -> MoveOutcome {
        if counts_as_roll {
            self.got_double = false;
        }
        let from = account.position;
        account.position = destination;
        MoveOutcome::Moved {
            from,
            to: destination,
        }
    }

    /// Take a player out of the turn order. Returns false if they were not in it.
    pub fn remove_player(&mut self, player: PlayerId) -> bool {
        let Some(index) = self.order.index_of(&player) else {
            return false;
        };
        self.order.remove(index);

        if index < self.current {
            self.current -= 1;
        } else if index == self.current {
            self.current_removed = true;
            self.got_double = false;
            if self.current >= self.order.len() {
                self.current = 0;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Money;
    use crate::players::PlayerProfile;
    use crate::turn::ScriptedDice;

    fn engine(n: u8) -> TurnEngine {
        TurnEngine::new((0..n).map(PlayerId))
    }

    fn account() -> PlayerAccount {
        PlayerAccount::new(PlayerId(0), PlayerProfile::new("A", "red"), Money::millions(20))
    }

    #[test]
    fn test_advance_wraps() {
        let mut turns = engine(3);
        assert_eq!(turns.current_player(), Some(PlayerId(0)));
        assert_eq!(turns.advance_turn(), Some(PlayerId(1)));
        assert_eq!(turns.advance_turn(), Some(PlayerId(2)));
        assert_eq!(turns.advance_turn(), Some(PlayerId(0)));
    }

    #[test]
    fn test_double_keeps_player_once() {
        let mut turns = engine(2);
        let mut dice = ScriptedDice::new([(3, 3)]);
        assert!(turns.roll_dice(&mut dice).is_double());

        assert_eq!(turns.advance_turn(), Some(PlayerId(0)));
        assert!(!turns.got_double());
        assert_eq!(turns.advance_turn(), Some(PlayerId(1)));
    }

    #[test]
    fn test_move_wraps_without_payout() {
        let mut turns = engine(2);
        let mut a = account();
        a.position = SpaceIndex::fixed(38);

        let outcome = turns.move_player(&mut a, 5, false);
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: SpaceIndex::fixed(38),
                to: SpaceIndex::fixed(3)
            }
        );
        assert_eq!(a.money, Money::millions(20));
    }

    #[test]
    fn test_move_backwards() {
        let mut turns = engine(2);
        let mut a = account();
        a.position = SpaceIndex::fixed(1);
        turns.move_player(&mut a, -3, false);
        assert_eq!(a.position, SpaceIndex::fixed(38));
    }

    #[test]
    fn test_stranded_player_is_held() {
        let mut turns = engine(2);
        let mut dice = ScriptedDice::new([(2, 2)]);
        let roll = turns.roll_dice(&mut dice);
        let mut a = account();
        a.position = SpaceIndex::fixed(10);
        a.deserted_island_turns = 3;

        let outcome = turns.move_player(&mut a, i32::from(roll.total()), roll.is_double());
        assert_eq!(outcome, MoveOutcome::Held { turns_left: 2 });
        assert_eq!(a.position, SpaceIndex::fixed(10));
        assert!(!turns.got_double());
    }

    #[test]
    fn test_direct_move_counts_as_roll() {
        let mut turns = engine(2);
        turns.roll_dice(&mut ScriptedDice::new([(5, 5)]));
        let mut a = account();

        turns.direct_move(&mut a, SpaceIndex::fixed(20), false);
        assert!(turns.got_double());
        turns.direct_move(&mut a, SpaceIndex::fixed(25), true);
        assert!(!turns.got_double());
        assert_eq!(a.position, SpaceIndex::fixed(25));
    }

    #[test]
    fn test_remove_before_current() {
        let mut turns = engine(4);
        turns.advance_turn();
        turns.advance_turn();
        assert_eq!(turns.current_player(), Some(PlayerId(2)));

        assert!(turns.remove_player(PlayerId(0)));
        assert_eq!(turns.current_player(), Some(PlayerId(2)));
        assert_eq!(turns.advance_turn(), Some(PlayerId(3)));
    }

    #[test]
    fn test_remove_current_passes_to_follower() {
        let mut turns = engine(3);
        turns.advance_turn();
        turns.roll_dice(&mut ScriptedDice::new([(1, 1)]));

        assert!(turns.remove_player(PlayerId(1)));
        assert_eq!(turns.current_player(), None);
        assert_eq!(turns.advance_turn(), Some(PlayerId(2)));
    }

    #[test]
    fn test_remove_last_current_wraps() {
        let mut turns = engine(3);
        turns.advance_turn();
        turns.advance_turn();

        turns.remove_player(PlayerId(2));
        assert_eq!(turns.advance_turn(), Some(PlayerId(0)));
        assert_eq!(turns.active_count(), 2);
        assert!(!turns.remove_player(PlayerId(2)));
    }
}
