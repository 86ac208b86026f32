use career_core::{prepare, Company, DirectoryDocument};
use career_logging::{career_debug, career_info, career_warn};

use crate::fetch::Fetcher;
use crate::{FailureKind, FetchError, LoadedDirectory, Source};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("no candidate sources configured")]
    NoSources,
    #[error("all {attempts} candidate sources failed; last was {location}: {last}")]
    AllSourcesFailed {
        attempts: usize,
        location: Source,
        #[source]
        last: FetchError,
    },
}

/// Tries candidate sources strictly in order and keeps the first usable document.
pub struct DirectoryLoader<F> {
    fetcher: F,
}

impl<F: Fetcher> DirectoryLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub async fn load(&self, sources: &[Source]) -> Result<LoadedDirectory, LoadError> {
        let mut last_failure = None;

        for (attempt, source) in sources.iter().enumerate() {
            career_debug!("Trying directory source #{} {}", attempt + 1, source);
            let result = match self.fetcher.fetch(source).await {
                Ok(bytes) => parse_document(&bytes),
                Err(err) => Err(err),
            };
            match result {
                Ok(raw) => {
                    let raw_len = raw.len();
                    let companies = prepare(raw);
                    let duplicates_dropped = raw_len - companies.len();
                    career_info!(
                        "Loaded {} companies from {} ({} duplicates dropped)",
                        companies.len(),
                        source,
                        duplicates_dropped
                    );
                    return Ok(LoadedDirectory {
                        companies,
                        source: source.clone(),
                        duplicates_dropped,
                    });
                }
                Err(err) => {
                    career_warn!("Directory source {} failed: {}", source, err);
                    last_failure = Some((source.clone(), err));
                }
            }
        }

        match last_failure {
            Some((location, last)) => Err(LoadError::AllSourcesFailed {
                attempts: sources.len(),
                location,
                last,
            }),
            None => Err(LoadError::NoSources),
        }
    }
}

/// Parses the `{ "companies": [...] }` document, tolerating a UTF-8 BOM.
pub fn parse_document(bytes: &[u8]) -> Result<Vec<Company>, FetchError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    serde_json::from_slice::<DirectoryDocument>(bytes)
        .map(|doc| doc.companies)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))
}
