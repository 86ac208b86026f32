use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DirectoryLoaded(companies) => {
            state.set_loaded(companies);
            Vec::new()
        }
        Msg::DirectoryFailed(reason) => {
            state.set_failed(reason);
            Vec::new()
        }
        Msg::VisitedRestored(visited) => {
            state.set_visited(visited);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
        // A failed or pending load blocks every interaction.
        _ if !state.is_ready() => Vec::new(),
        Msg::SearchChanged(text) => {
            if state.query().search != text {
                state.query_mut().search = text;
            }
            Vec::new()
        }
        Msg::SearchCleared => {
            if !state.query().search.is_empty() {
                state.query_mut().search.clear();
            }
            Vec::new()
        }
        Msg::IndustryToggled(industry) => {
            toggle_industry(&mut state, industry);
            Vec::new()
        }
        Msg::FacetCursorMoved(delta) => {
            state.move_facet_cursor(delta);
            Vec::new()
        }
        Msg::FocusedIndustryToggled => {
            if let Some(industry) = state.focused_industry() {
                toggle_industry(&mut state, industry);
            }
            Vec::new()
        }
        Msg::FiltersCleared => {
            let query = state.query_mut();
            query.search.clear();
            query.selected_industries.clear();
            Vec::new()
        }
        Msg::EmptySelectionToggled => {
            let query = state.query_mut();
            query.empty_selection = query.empty_selection.toggled();
            Vec::new()
        }
        Msg::SortChanged(order) => {
            if state.query().sort != order {
                state.query_mut().sort = order;
            }
            Vec::new()
        }
        Msg::SortCycled => {
            let query = state.query_mut();
            query.sort = query.sort.next();
            Vec::new()
        }
        Msg::HideVisitedToggled => {
            let query = state.query_mut();
            query.hide_visited = !query.hide_visited;
            Vec::new()
        }
        Msg::VisitedMarked { key, visited } => mark_visited(&mut state, key, visited),
        Msg::VisitedToggled { key } => {
            let visited = !state.visited().contains(&key);
            mark_visited(&mut state, key, visited)
        }
        Msg::SelectedVisitedToggled => match state.selected() {
            Some((key, _)) => {
                let visited = !state.visited().contains(&key);
                mark_visited(&mut state, key, visited)
            }
            None => Vec::new(),
        },
        Msg::VisitedCleared => {
            if state.visited().is_empty() {
                Vec::new()
            } else {
                state.visited_mut().clear();
                state.mark_dirty();
                vec![Effect::ClearVisited]
            }
        }
        Msg::CursorMoved(delta) => {
            state.move_cursor(delta);
            Vec::new()
        }
        Msg::OpenSelected => match state.selected() {
            Some((_, company)) => vec![Effect::OpenUrl {
                url: company.career_url,
            }],
            None => Vec::new(),
        },
    };

    (state, effects)
}

fn toggle_industry(state: &mut AppState, industry: String) {
    let selected = &mut state.query_mut().selected_industries;
    if !selected.remove(&industry) {
        selected.insert(industry);
    }
}

// Re-marking an already visited key is a no-op: no dirty flag, no write.
fn mark_visited(state: &mut AppState, key: String, visited: bool) -> Vec<Effect> {
    if !state.visited_mut().set(key.clone(), visited) {
        return Vec::new();
    }
    state.mark_dirty();
    vec![Effect::PersistVisited { key, visited }]
}
