//! Stratus Columns - Column specifications for the console's resource grids
//!
//! Every list view in the console renders through the same generic grid;
//! what differs per resource is the ordered column list. This crate holds
//! those lists, keyed by [`ResourceKind`] so a missing arm is a compile
//! error instead of a silent empty grid.
//!
//! - [`ColumnDescriptor`] - One column: field, label, renderer flag, visibility flags
//! - [`ResourceKind`] - Which resource's schema to use
//! - [`resolve`] / [`resolve_key`] - Context-filtered column lookup
//! - [`generate_settings`] - Derive the user-togglable column settings

mod descriptor;
mod registry;
mod settings;
mod specs;

pub use descriptor::*;
pub use registry::*;
pub use settings::*;
