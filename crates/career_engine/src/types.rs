use std::fmt;

use career_core::Company;

use crate::{LoadError, Source};

#[derive(Debug)]
pub enum EngineEvent {
    DirectoryLoaded(LoadedDirectory),
    LoadFailed(LoadError),
}

/// A successful load: the de-duplicated list and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDirectory {
    pub companies: Vec<Company>,
    pub source: Source,
    pub duplicates_dropped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    NotFound,
    Io,
    Parse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::Parse => write!(f, "invalid directory document"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
