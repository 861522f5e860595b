//! Golden Key cards.
//!
//! - `GoldenKey`: card identity and its entry in the effect table
//! - `GoldenKeyDeck`: the circular deck, shuffled once at deal time

mod golden_key;
mod deck;

pub use golden_key::{GoldenKey, UnknownCard, DECK_SIZE};
pub use deck::GoldenKeyDeck;
