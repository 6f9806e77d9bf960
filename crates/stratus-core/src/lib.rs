//! Stratus Core - Core types and traits for the remote data-grid
//!
//! This crate provides the fundamental types that all other Stratus
//! crates depend on. It defines:
//!
//! - `Transport` - Trait the backend HTTP client implements
//! - `Envelope` - Response envelope with configurable data-path extraction
//! - `Row` / `RowIdentity` - Position-independent row addressing
//! - Wire types like `QuerySpec`, `QueryRule`, `PageState`, `FilterOperator`

mod envelope;
mod error;
mod row;
mod transport;
mod wire;

pub use envelope::*;
pub use error::*;
pub use row::*;
pub use transport::*;
pub use wire::*;
