use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug, Default)]
#[command(
    name = "career-directory",
    version,
    about = "Browse a company directory, filter by industry and track visited career pages"
)]
/// Command-line arguments accepted by the `career-directory` binary.
pub struct CliArgs {
    /// Settings file (RON). Defaults to `settings.ron` in the config directory.
    #[arg(short, long = "config", value_name = "FILE", env = "CAREER_DIRECTORY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Candidate directory source (URL or path), tried in the given order.
    /// Replaces the configured list when given.
    #[arg(short, long = "source", value_name = "URL|PATH", action = ArgAction::Append)]
    pub sources: Vec<String>,

    /// Directory holding the visited record and the log file.
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    /// Initial sort order: az, za or industry.
    #[arg(long, value_name = "ORDER")]
    pub sort: Option<String>,

    /// Initial search text.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Pre-select an industry filter (repeatable).
    #[arg(long = "industry", value_name = "NAME", action = ArgAction::Append)]
    pub industries: Vec<String>,

    /// Print the filtered, sorted directory and exit.
    #[arg(long)]
    pub list: bool,

    /// Mark a career URL as visited and exit.
    #[arg(long, value_name = "URL", conflicts_with_all = ["unmark", "clear_visited"])]
    pub mark: Option<String>,

    /// Remove the visited mark of a career URL and exit.
    #[arg(long, value_name = "URL", conflicts_with = "clear_visited")]
    pub unmark: Option<String>,

    /// Remove every visited mark and exit.
    #[arg(long)]
    pub clear_visited: bool,

    /// Log at debug level regardless of the configured level.
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the binary does after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    List,
    Mark { key: String, visited: bool },
    ClearVisited,
}

impl CliArgs {
    pub fn mode(&self) -> Mode {
        if let Some(url) = &self.mark {
            Mode::Mark {
                key: url.trim().to_string(),
                visited: true,
            }
        } else if let Some(url) = &self.unmark {
            Mode::Mark {
                key: url.trim().to_string(),
                visited: false,
            }
        } else if self.clear_visited {
            Mode::ClearVisited
        } else if self.list {
            Mode::List
        } else {
            Mode::Interactive
        }
    }
}
