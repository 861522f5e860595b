//! Turn engine: dice, turn order and movement.

mod dice;
mod engine;

pub use dice::{DiceRoll, DiceSource, ScriptedDice};
pub use engine::{MoveOutcome, TurnEngine};
