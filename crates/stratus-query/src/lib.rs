//! Stratus Query - Filter building and paginated remote fetching
//!
//! The two moving parts behind every resource grid:
//!
//! - [`FilterRuleBuilder`] - Turns named filter values into a normalized
//!   [`QuerySpec`], pruning empty entries
//! - [`PaginatedQueryController`] - Owns page/sort state, issues the
//!   count+data fetch pair against the [`Transport`] collaborator, and
//!   discards out-of-order responses via sequence tokens
//!
//! [`QuerySpec`]: stratus_core::QuerySpec
//! [`Transport`]: stratus_core::Transport

mod builder;
mod controller;

pub use builder::*;
pub use controller::*;
