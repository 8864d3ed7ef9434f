//! Identifier → label cache used by property resolution.
//!
//! Entries are never invalidated: a label, once fetched for the configured
//! language, is reused for the lifetime of the cache. Clones share the same
//! storage, so one cache can back any number of clients.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static SHARED: OnceLock<PropertyCache> = OnceLock::new();

/// Thread-safe map from property/item identifier to its label.
#[derive(Debug, Clone, Default)]
pub struct PropertyCache {
    labels: Arc<RwLock<HashMap<String, String>>>,
}

impl PropertyCache {
    /// Creates an empty cache not shared with anything else.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to the process-wide cache.
    pub fn shared() -> Self {
        SHARED.get_or_init(Self::new).clone()
    }

    /// Looks up the label for `id`.
    pub fn get(&self, id: &str) -> Option<String> {
        self.labels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Stores the label for `id`, replacing any previous entry.
    pub fn insert(&self, id: impl Into<String>, label: impl Into<String>) {
        self.labels
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), label.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.labels
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.labels.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.labels
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
