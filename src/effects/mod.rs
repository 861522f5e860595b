//! Golden Key effects.
//!
//! - `CardEffect`: the descriptor a card id maps to
//! - `EffectResolver`: applies any descriptor to the game state

mod effect;
mod resolver;

pub use effect::{CardEffect, EffectCategory};
pub use resolver::{CardPreview, EffectOutcome, EffectResolver};

pub(crate) use resolver::{relocate, strand};
