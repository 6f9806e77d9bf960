//! Stratus Lookup - id→label resolvers for row rendering
//!
//! Cell renderers resolve opaque ids (region codes, business ids, cloud
//! areas) to display labels. The maps are fetched once per session by
//! the application shell and consulted synchronously during rendering -
//! never during fetch or selection logic.
//!
//! These used to be ambient module-level maps; here each cache has an
//! explicit lifecycle: [`init`](LabelCache::init) populates it exactly
//! once, [`invalidate`](LabelCache::invalidate) empties it so the next
//! `init` takes effect again.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

struct CacheInner {
    labels: HashMap<String, String>,
    populated_at: DateTime<Utc>,
}

/// An init-once id→label map.
///
/// Lookups before `init` (or after `invalidate`) resolve to `None`;
/// renderers fall back to showing the raw id, so a missing cache
/// degrades the display without breaking it.
pub struct LabelCache {
    name: &'static str,
    inner: RwLock<Option<CacheInner>>,
}

impl LabelCache {
    /// Create an empty cache; `name` only appears in logs
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(None),
        }
    }

    /// Populate the cache. The first call wins; repeat calls are
    /// ignored until [`invalidate`](Self::invalidate).
    pub fn init<I, K, V>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut inner = self.inner.write();
        if inner.is_some() {
            tracing::debug!(cache = self.name, "ignoring repeat init");
            return;
        }

        let labels: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        tracing::info!(cache = self.name, entries = labels.len(), "lookup cache populated");

        *inner = Some(CacheInner {
            labels,
            populated_at: Utc::now(),
        });
    }

    /// Resolve an id to its label
    pub fn label(&self, id: &str) -> Option<String> {
        self.inner
            .read()
            .as_ref()
            .and_then(|inner| inner.labels.get(id).cloned())
    }

    /// Resolve an id, falling back to the id itself
    pub fn label_or_id(&self, id: &str) -> String {
        self.label(id).unwrap_or_else(|| id.to_string())
    }

    /// Drop the cached map; the next [`init`](Self::init) repopulates
    pub fn invalidate(&self) {
        let mut inner = self.inner.write();
        if inner.take().is_some() {
            tracing::info!(cache = self.name, "lookup cache invalidated");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.read().is_some()
    }

    /// When the current map was populated
    pub fn populated_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().as_ref().map(|inner| inner.populated_at)
    }
}

impl std::fmt::Debug for LabelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelCache")
            .field("name", &self.name)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

/// Region code → display name (`"ap-guangzhou"` → `"Guangzhou"`)
pub static REGION_NAMES: Lazy<LabelCache> = Lazy::new(|| LabelCache::new("region_names"));

/// Business id → business name
pub static BUSINESS_NAMES: Lazy<LabelCache> = Lazy::new(|| LabelCache::new("business_names"));

/// Cloud-area id → cloud-area name
pub static CLOUD_AREA_NAMES: Lazy<LabelCache> = Lazy::new(|| LabelCache::new("cloud_area_names"));

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_before_init_is_none() {
        let cache = LabelCache::new("test");
        assert!(!cache.is_initialized());
        assert_eq!(cache.label("ap-guangzhou"), None);
        assert_eq!(cache.label_or_id("ap-guangzhou"), "ap-guangzhou");
    }

    #[test]
    fn test_first_init_wins() {
        let cache = LabelCache::new("test");
        cache.init([("ap-guangzhou", "Guangzhou")]);
        cache.init([("ap-guangzhou", "Somewhere Else")]);

        assert_eq!(cache.label("ap-guangzhou"), Some("Guangzhou".to_string()));
    }

    #[test]
    fn test_invalidate_allows_reinit() {
        let cache = LabelCache::new("test");
        cache.init([("100", "Payments")]);
        cache.invalidate();

        assert!(!cache.is_initialized());
        assert_eq!(cache.label("100"), None);

        cache.init([("100", "Billing")]);
        assert_eq!(cache.label("100"), Some("Billing".to_string()));
    }

    #[test]
    fn test_populated_at_tracks_init() {
        let cache = LabelCache::new("test");
        assert_eq!(cache.populated_at(), None);

        cache.init([("a", "A")]);
        assert!(cache.populated_at().is_some());
    }
}
