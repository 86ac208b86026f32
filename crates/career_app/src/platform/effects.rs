use std::process::{Command, Stdio};

use career_core::{Effect, VisitedSet};
use career_logging::{career_debug, career_info, career_warn};

use super::persistence::{restore_visited, AppVisitedStore};

/// Executes the effects returned by `update` on the UI thread.
pub struct EffectRunner {
    visited: AppVisitedStore,
}

impl EffectRunner {
    pub fn new(visited: AppVisitedStore) -> Self {
        Self { visited }
    }

    pub fn restore(&self) -> VisitedSet {
        restore_visited(&self.visited)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PersistVisited { key, visited } => {
                    career_info!("PersistVisited visited={} key={}", visited, key);
                    self.visited.set_visited(&key, visited);
                }
                Effect::ClearVisited => {
                    career_info!("ClearVisited");
                    self.visited.clear();
                }
                Effect::OpenUrl { url } => open_url(&url),
            }
        }
    }
}

fn open_url(url: &str) {
    let lower = url.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        career_warn!("Refusing to open non-http career URL {}", url);
        return;
    }
    let mut command = opener_command(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    match command.spawn() {
        Ok(_) => career_debug!("Opened {}", url),
        Err(err) => career_warn!("Failed to open {}: {}", url, err),
    }
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
