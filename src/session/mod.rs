//! Game session: the request/response facade over the engine.

mod game;
mod prompt;

pub use game::GameSession;
pub use prompt::{Prompt, Transition};
