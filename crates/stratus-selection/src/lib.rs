//! Stratus Selection - Cross-page row selection
//!
//! Selections are keyed by [`RowIdentity`], not row position: navigating
//! pages, re-sorting or refetching never implicitly clears them. Every
//! insertion passes through one injected [`Eligibility`] capability so a
//! view's "which rows may be acted on" rule lives in exactly one place.
//!
//! [`RowIdentity`]: stratus_core::RowIdentity

mod eligibility;
mod tracker;

pub use eligibility::*;
pub use tracker::*;
