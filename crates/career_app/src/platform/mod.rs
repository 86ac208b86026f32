mod app;
mod effects;
mod list;
pub mod logging;
mod persistence;
pub mod ui;

use anyhow::Result;

use crate::cli::Mode;
use crate::settings::RunConfig;
use logging::LogDestination;

pub fn run(config: RunConfig) -> Result<()> {
    match config.mode.clone() {
        Mode::Interactive => {
            let log_path = config.log_path();
            logging::initialize(LogDestination::File(&log_path), config.log_level);
            app::run_interactive(config)
        }
        Mode::List => {
            logging::initialize(LogDestination::Terminal, config.log_level);
            list::run_list(&config)
        }
        Mode::Mark { key, visited } => {
            logging::initialize(LogDestination::Terminal, config.log_level);
            list::run_mark(&config, &key, visited)
        }
        Mode::ClearVisited => {
            logging::initialize(LogDestination::Terminal, config.log_level);
            list::run_clear(&config)
        }
    }
}
