use std::fmt;
use std::path::PathBuf;

/// Candidate locations tried when no sources are configured.
pub const DEFAULT_SOURCES: &[&str] = &[
    "companies.json",
    "../companies.json",
    "docs/companies.json",
    "docs/assets/companies.json",
];

/// One candidate location for the directory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Path(PathBuf),
}

impl Source {
    /// `http://` and `https://` strings become URLs; anything else is a filesystem path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    pub fn parse_all<I, S>(raw: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .map(|s| Self::parse(&s))
            .collect()
    }

    pub fn defaults() -> Vec<Self> {
        Self::parse_all(DEFAULT_SOURCES.iter().copied())
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{url}"),
            Source::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_urls_and_paths() {
        assert_eq!(
            Source::parse(" HTTPS://example.com/companies.json "),
            Source::Url("HTTPS://example.com/companies.json".to_string())
        );
        assert_eq!(
            Source::parse("docs/companies.json"),
            Source::Path(PathBuf::from("docs/companies.json"))
        );
    }

    #[test]
    fn parse_all_skips_blank_entries() {
        let sources = Source::parse_all(["a.json", "  ", "http://x/y.json"]);
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn defaults_keep_configured_order() {
        let rendered: Vec<String> = Source::defaults().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, DEFAULT_SOURCES);
    }
}
