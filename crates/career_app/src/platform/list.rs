use std::io::{self, Write};

use anyhow::{anyhow, Result};
use career_core::{compute_view, DirectoryView};
use career_engine::{EngineEvent, EngineHandle};
use career_logging::career_error;

use super::persistence::{open_visited_store, restore_visited};
use super::ui::constants::NO_RESULTS_TEXT;
use super::ui::render::format_row;
use crate::settings::RunConfig;

/// Loads the directory once and prints the computed view to stdout.
pub fn run_list(config: &RunConfig) -> Result<()> {
    let store = open_visited_store(&config.state_dir);
    let visited = restore_visited(&store);

    let engine = EngineHandle::new(config.fetch.clone());
    engine.load(config.sources.clone());
    let loaded = match engine.recv() {
        Some(EngineEvent::DirectoryLoaded(loaded)) => loaded,
        Some(EngineEvent::LoadFailed(err)) => {
            career_error!("Directory load failed: {}", err);
            return Err(anyhow!(err).context("could not load the company directory"));
        }
        None => return Err(anyhow!("directory engine stopped before reporting")),
    };

    let view = compute_view(&loaded.companies, &config.query, &visited);
    let stdout = io::stdout();
    write_view(&mut stdout.lock(), &view)
}

pub fn write_view(out: &mut impl Write, view: &DirectoryView) -> Result<()> {
    match view {
        DirectoryView::Empty => writeln!(out, "{NO_RESULTS_TEXT}")?,
        DirectoryView::Rows(rows) => {
            for row in rows {
                writeln!(out, "{}  {}", format_row(row), row.company.career_url)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Edits the visited record without loading the directory.
pub fn run_mark(config: &RunConfig, key: &str, visited: bool) -> Result<()> {
    if key.is_empty() {
        return Err(anyhow!("career URL must not be empty"));
    }
    let store = open_visited_store(&config.state_dir);
    store.set_visited(key, visited);
    let state = if store.is_visited(key) { "visited" } else { "not visited" };
    println!("{key}: {state}");
    Ok(())
}

pub fn run_clear(config: &RunConfig) -> Result<()> {
    let store = open_visited_store(&config.state_dir);
    let count = store.snapshot().len();
    store.clear();
    println!("Cleared {count} visited marks");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_core::{Company, ViewQuery, VisitedSet};

    #[test]
    fn empty_view_prints_placeholder() {
        let mut out = Vec::new();
        write_view(&mut out, &DirectoryView::Empty).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_RESULTS_TEXT}\n"));
    }

    #[test]
    fn rows_print_mark_name_and_url() {
        let companies = vec![
            Company::new("Beta", "https://beta.example").with_industry("Finance"),
            Company::new("Acme", "https://acme.example"),
        ];
        let visited: VisitedSet = ["https://beta.example"].into_iter().collect();
        let view = compute_view(&companies, &ViewQuery::default(), &visited);

        let mut out = Vec::new();
        write_view(&mut out, &view).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[ ] Acme  https://acme.example\n[x] Beta (Finance)  https://beta.example\n"
        );
    }
}
