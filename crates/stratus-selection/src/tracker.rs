//! Selection tracking across page and filter changes

use crate::Eligibility;
use indexmap::IndexMap;
use std::sync::Arc;
use stratus_core::{Row, RowIdentity};

/// Tracks selected row identities for one grid view.
///
/// Entries survive page navigation and refetches; only [`clear_all`]
/// (typically wired to the view's filter-change hook) empties the set.
/// The stored snapshot is the row as it looked when selected - an
/// identity reappearing in a later fetch with different data does not
/// refresh it, selection is by identity only.
///
/// [`clear_all`]: Self::clear_all
pub struct SelectionTracker {
    identity_field: String,
    eligibility: Arc<dyn Eligibility>,
    entries: IndexMap<RowIdentity, Row>,
}

impl SelectionTracker {
    /// Create a tracker keyed by `identity_field` (`"id"`, `"cloud_id"`, ...)
    pub fn new(identity_field: impl Into<String>, eligibility: Arc<dyn Eligibility>) -> Self {
        Self {
            identity_field: identity_field.into(),
            eligibility,
            entries: IndexMap::new(),
        }
    }

    /// The identity of a row under this tracker's key field
    pub fn identity_of(&self, row: &Row) -> Option<RowIdentity> {
        row.identity(&self.identity_field)
    }

    /// Select one row. Ineligible rows are ignored; selecting an
    /// already-present identity keeps the original snapshot.
    pub fn select(&mut self, id: RowIdentity, row: Row) {
        if !self.eligibility.is_eligible(&row, false) {
            tracing::debug!(%id, "ignoring select of ineligible row");
            return;
        }
        self.entries.entry(id).or_insert(row);
    }

    /// Deselect one row; unknown identities are a no-op
    pub fn deselect(&mut self, id: &RowIdentity) {
        self.entries.shift_remove(id);
    }

    /// Toggle a row's selection, returning whether it is now selected
    pub fn toggle(&mut self, row: Row) -> bool {
        let Some(id) = self.identity_of(&row) else {
            tracing::warn!(
                identity_field = %self.identity_field,
                "row has no identity, cannot toggle selection"
            );
            return false;
        };
        if self.entries.shift_remove(&id).is_some() {
            false
        } else {
            self.select(id.clone(), row);
            self.is_selected(&id)
        }
    }

    /// Bulk-add every eligible row from `rows`.
    ///
    /// `is_check_all` is forwarded to the eligibility predicate; rows
    /// without an identity or failing the predicate are skipped. The
    /// working set is whatever the caller hands in - the current page,
    /// or all matching identities fetched through a separate call.
    pub fn select_all(&mut self, rows: &[Row], is_check_all: bool) {
        let mut added = 0usize;
        let mut skipped = 0usize;

        for row in rows {
            let Some(id) = self.identity_of(row) else {
                skipped += 1;
                continue;
            };
            if !self.eligibility.is_eligible(row, is_check_all) {
                skipped += 1;
                continue;
            }
            if self.entries.contains_key(&id) {
                continue;
            }
            self.entries.insert(id, row.clone());
            added += 1;
        }

        tracing::debug!(added, skipped, total = self.entries.len(), "bulk select");
    }

    /// Remove every entry
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Whether an identity is currently selected
    pub fn is_selected(&self, id: &RowIdentity) -> bool {
        self.entries.contains_key(id)
    }

    /// Snapshots of all selected rows, in selection order
    pub fn all(&self) -> Vec<Row> {
        self.entries.values().cloned().collect()
    }

    /// Selected identities, in selection order
    pub fn identities(&self) -> Vec<RowIdentity> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for SelectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionTracker")
            .field("identity_field", &self.identity_field)
            .field("selected", &self.entries.len())
            .finish_non_exhaustive()
    }
}
