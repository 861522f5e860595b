//! Player accounts.

mod account;

pub use account::{PlayerAccount, PlayerProfile};
