//! Row eligibility capability

use stratus_core::Row;

/// Decides whether a row may enter a selection set.
///
/// Injected into [`SelectionTracker`] at construction; single selects
/// and bulk select-all both consult it, so a row failing the predicate
/// can never be selected through any path.
///
/// `is_check_all` is true when the caller requested "select everything
/// currently eligible" - predicates may be stricter for bulk adds (for
/// example, skipping rows already tied to a pending operation rather
/// than surfacing a per-row error).
///
/// [`SelectionTracker`]: crate::SelectionTracker
pub trait Eligibility: Send + Sync {
    fn is_eligible(&self, row: &Row, is_check_all: bool) -> bool;
}

impl<F> Eligibility for F
where
    F: Fn(&Row, bool) -> bool + Send + Sync,
{
    fn is_eligible(&self, row: &Row, is_check_all: bool) -> bool {
        self(row, is_check_all)
    }
}

/// Every row is eligible - the default for grids without bulk-action
/// restrictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysEligible;

impl Eligibility for AlwaysEligible {
    fn is_eligible(&self, _row: &Row, _is_check_all: bool) -> bool {
        true
    }
}
