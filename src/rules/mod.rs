//! Landing rules, decisions and payments.
//!
//! - `table`: which decision a landing produces, one handler per space kind
//! - `settle`: applying the player's answer to a decision
//! - `payment`: transfers, bankruptcy and elimination
//!
//! All involuntary payments go through [`payment::pay`], so bankruptcy is
//! detected in one place.

mod decision;
mod settle;
mod table;
pub mod payment;

pub use decision::Decision;
pub use payment::{eliminate, pay};
pub use settle::{settle, Settlement};
pub use table::{resolve_landing, rule_for, LandingRule, RULES};
