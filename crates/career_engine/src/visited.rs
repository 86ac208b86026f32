use career_core::VisitedSet;
use career_logging::{career_debug, career_error, career_warn};

use crate::store::{KeyValueStore, StoreError};

/// Storage key of the visited/applied record.
pub const VISITED_KEY: &str = "appliedCompanies";

/// Visited/applied marks backed by a [`KeyValueStore`].
///
/// The record is a JSON array of career URLs in the order they were marked.
/// Unreadable or malformed records are treated as empty. There is no locking:
/// two processes sharing the same store race and the last write wins.
pub struct VisitedStore<S> {
    store: S,
}

impl<S: KeyValueStore> VisitedStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn snapshot(&self) -> VisitedSet {
        let raw = match self.store.get(VISITED_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return VisitedSet::new(),
            Err(err) => {
                career_warn!("Failed to read visited record: {}", err);
                return VisitedSet::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(keys) => keys.into_iter().collect(),
            Err(err) => {
                career_warn!("Malformed visited record treated as empty: {}", err);
                VisitedSet::new()
            }
        }
    }

    pub fn is_visited(&self, key: &str) -> bool {
        self.snapshot().contains(key)
    }

    /// Idempotent: writes only when the record actually changes.
    pub fn set_visited(&self, key: &str, visited: bool) {
        let mut set = self.snapshot();
        if !set.set(key, visited) {
            career_debug!("Visited mark for {} unchanged ({})", key, visited);
            return;
        }
        if let Err(err) = self.write(&set) {
            career_error!("Failed to persist visited mark for {}: {}", key, err);
        }
    }

    /// Removes the whole record.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(VISITED_KEY) {
            career_error!("Failed to clear visited record: {}", err);
        }
    }

    fn write(&self, set: &VisitedSet) -> Result<(), StoreError> {
        let content = serde_json::to_string(&set.to_vec())?;
        self.store.set(VISITED_KEY, &content)
    }
}
