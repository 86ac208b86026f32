use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use career_core::{EmptySelection, SortOrder, ViewQuery};
use career_engine::{FetchSettings, Source, DEFAULT_SOURCES};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::app_dirs;
use crate::cli::{CliArgs, Mode};

pub const SETTINGS_FILENAME: &str = "settings.ron";
pub const LOG_FILENAME: &str = "career-directory.log";

/// Contents of `settings.ron`; every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub sources: Vec<String>,
    pub state_dir: Option<PathBuf>,
    pub default_sort: SortOrder,
    pub empty_selection: EmptySelection,
    pub hide_visited: bool,
    pub log_level: String,
    pub fetch: FetchConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            state_dir: None,
            default_sort: SortOrder::default(),
            empty_selection: EmptySelection::default(),
            hide_visited: false,
            log_level: "info".to_string(),
            fetch: FetchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let defaults = FetchSettings::default();
        Self {
            connect_timeout_secs: defaults.connect_timeout.as_secs(),
            request_timeout_secs: defaults.request_timeout.as_secs(),
            max_bytes: defaults.max_bytes,
        }
    }
}

impl FetchConfig {
    pub fn to_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }
}

impl Settings {
    /// Reads `path`; a missing file yields defaults unless `required` is set.
    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound && !required => {
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading settings {}", path.display()))
            }
        };
        ron::from_str(&content).with_context(|| format!("parsing settings {}", path.display()))
    }
}

/// Fully resolved startup configuration: settings file plus command-line overrides.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub sources: Vec<Source>,
    pub state_dir: PathBuf,
    pub query: ViewQuery,
    pub fetch: FetchSettings,
    pub log_level: LevelFilter,
}

impl RunConfig {
    pub fn log_path(&self) -> PathBuf {
        self.state_dir.join(LOG_FILENAME)
    }
}

pub fn resolve(args: &CliArgs) -> Result<RunConfig> {
    let settings = match &args.config {
        Some(path) => Settings::load_from(path, true)?,
        None => Settings::load_from(&app_dirs::config_dir()?.join(SETTINGS_FILENAME), false)?,
    };
    let state_dir = match args.state_dir.clone().or_else(|| settings.state_dir.clone()) {
        Some(dir) => dir,
        None => app_dirs::state_dir()?,
    };
    apply(args, settings, state_dir)
}

/// Merges `args` over `settings`; command-line values win.
pub fn apply(args: &CliArgs, settings: Settings, state_dir: PathBuf) -> Result<RunConfig> {
    let sort = match args.sort.as_deref() {
        Some(raw) => SortOrder::parse(raw)
            .ok_or_else(|| anyhow!("unknown sort order {raw:?}; expected az, za or industry"))?,
        None => settings.default_sort,
    };
    let sources = if args.sources.is_empty() {
        Source::parse_all(&settings.sources)
    } else {
        Source::parse_all(&args.sources)
    };
    let log_level = if args.verbose {
        LevelFilter::Debug
    } else {
        career_logging::parse_level(&settings.log_level)
    };

    let query = ViewQuery {
        search: args.search.clone().unwrap_or_default(),
        selected_industries: args
            .industries
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>(),
        sort,
        empty_selection: settings.empty_selection,
        hide_visited: settings.hide_visited,
    };

    Ok(RunConfig {
        mode: args.mode(),
        sources,
        state_dir,
        query,
        fetch: settings.fetch.to_settings(),
        log_level,
    })
}
