//! Resolve configuration and state directories for `career-directory`.
//!
//! Environment overrides win; otherwise the platform locations provided by
//! the `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "career-directory";
const APPLICATION: &str = "career-directory";

const CONFIG_DIR_ENV: &str = "CAREER_DIRECTORY_CONFIG_DIR";
const STATE_DIR_ENV: &str = "CAREER_DIRECTORY_STATE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| anyhow!("unable to determine project directories"))
}

/// An empty variable counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
    let value = env::var_os(name)?;
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
        return Ok(dir);
    }
    Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Where the visited record and the log file live.
pub fn state_dir() -> Result<PathBuf> {
    if let Some(dir) = dir_from_env(STATE_DIR_ENV) {
        return Ok(dir);
    }
    Ok(project_dirs()?.data_local_dir().to_path_buf())
}
