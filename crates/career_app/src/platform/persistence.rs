use std::path::Path;

use career_core::VisitedSet;
use career_engine::{ensure_state_dir, FileKvStore, VisitedStore};
use career_logging::{career_info, career_warn};

pub(crate) type AppVisitedStore = VisitedStore<FileKvStore>;

/// Opens the visited record under `state_dir`, creating the directory when possible.
///
/// An unusable directory is only logged: reads then come back empty and
/// writes log an error.
pub(crate) fn open_visited_store(state_dir: &Path) -> AppVisitedStore {
    if let Err(err) = ensure_state_dir(state_dir) {
        career_warn!("State directory {:?} unavailable: {}", state_dir, err);
    }
    VisitedStore::new(FileKvStore::new(state_dir))
}

pub(crate) fn restore_visited(store: &AppVisitedStore) -> VisitedSet {
    let visited = store.snapshot();
    career_info!("Restored {} visited marks", visited.len());
    visited
}
