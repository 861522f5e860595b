//! Dice rolls and where they come from.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::GameRng;

/// A roll of two six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub die1: u8,
    pub die2: u8,
}

impl DiceRoll {
    /// A roll with both faces in `1..=6`, or `None`.
    #[must_use]
    pub fn new(die1: u8, die2: u8) -> Option<Self> {
        let face = 1..=6;
        (face.contains(&die1) && face.contains(&die2)).then_some(Self { die1, die2 })
    }

    #[must_use]
    pub fn is_double(self) -> bool {
        self.die1 == self.die2
    }

    #[must_use]
    pub fn total(self) -> u8 {
        self.die1 + self.die2
    }
}

/// Anything that can produce dice rolls.
pub trait DiceSource {
    fn roll(&mut self) -> DiceRoll;
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> DiceRoll {
        DiceRoll {
            die1: self.roll_die(),
            die2: self.roll_die(),
        }
    }
}

/// Replays a fixed list of rolls, then falls back to a seeded RNG.
///
/// ```
/// use blue_marble::turn::{DiceRoll, DiceSource, ScriptedDice};
///
/// let mut dice = ScriptedDice::new([(3, 3), (1, 2)]);
/// assert!(dice.roll().is_double());
/// assert_eq!(dice.roll().total(), 3);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScriptedDice {
    queue: VecDeque<DiceRoll>,
    fallback: GameRng,
}

impl ScriptedDice {
    /// Script the given `(die1, die2)` pairs. Faces outside `1..=6` are
    /// clamped into range.
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            queue: rolls
                .into_iter()
                .map(|(a, b)| DiceRoll {
                    die1: a.clamp(1, 6),
                    die2: b.clamp(1, 6),
                })
                .collect(),
            fallback: GameRng::new(0),
        }
    }

    /// Append more scripted rolls.
    pub fn push(&mut self, die1: u8, die2: u8) {
        self.queue.push_back(DiceRoll {
            die1: die1.clamp(1, 6),
            die2: die2.clamp(1, 6),
        });
    }

    /// Scripted rolls not yet used.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        match self.queue.pop_front() {
            Some(roll) => roll,
            None => self.fallback.roll(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_roll_bounds() {
        assert!(DiceRoll::new(1, 6).is_some());
        assert!(DiceRoll::new(0, 3).is_none());
        assert!(DiceRoll::new(4, 7).is_none());
    }

    #[test]
    fn test_double() {
        assert!(DiceRoll::new(4, 4).unwrap().is_double());
        assert!(!DiceRoll::new(4, 5).unwrap().is_double());
        assert_eq!(DiceRoll::new(4, 5).unwrap().total(), 9);
    }

    #[test]
    fn test_rng_rolls_in_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let roll = rng.roll();
            assert!(DiceRoll::new(roll.die1, roll.die2).is_some());
        }
    }

    #[test]
    fn test_scripted_then_fallback() {
        let mut dice = ScriptedDice::new([(2, 5), (9, 0)]);
        assert_eq!(dice.roll(), DiceRoll { die1: 2, die2: 5 });
        assert_eq!(dice.roll(), DiceRoll { die1: 6, die2: 1 });
        assert_eq!(dice.remaining(), 0);

        let roll = dice.roll();
        assert!((2..=12).contains(&roll.total()));
    }
}
