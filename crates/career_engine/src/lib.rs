//! Career directory engine: source loading, persisted state and effect execution.
mod engine;
mod fetch;
mod loader;
mod persist;
mod source;
mod store;
mod types;
mod visited;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{parse_document, DirectoryLoader, LoadError};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use source::{Source, DEFAULT_SOURCES};
pub use store::{FileKvStore, KeyValueStore, MemoryKvStore, StoreError};
pub use types::{EngineEvent, FailureKind, FetchError, LoadedDirectory};
pub use visited::{VisitedStore, VISITED_KEY};
