use career_core::{AppViewModel, CompanyRow, EmptySelection, FacetView, LoadPhase};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::constants::*;

const HIGHLIGHT_SYMBOL: &str = "> ";

/// Draws the whole screen from the view model.
pub fn render(frame: &mut Frame, view: &AppViewModel, log_path: &str) {
    let [main, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

    match &view.phase {
        LoadPhase::Loading => render_message(frame, main, LOADING_TEXT),
        LoadPhase::Failed(reason) => render_error(frame, main, reason, log_path),
        LoadPhase::Ready => render_directory(frame, main, view),
    }

    frame.render_widget(Paragraph::new(status_text(view)), status);
}

fn render_directory(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let [search_area, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [facet_area, list_area] = Layout::horizontal([
        Constraint::Length(FACET_PANE_WIDTH),
        Constraint::Min(0),
    ])
    .areas(body);

    let search = Paragraph::new(format!("{}_", view.search))
        .block(Block::default().borders(Borders::ALL).title(SEARCH_TITLE));
    frame.render_widget(search, search_area);

    render_facets(frame, facet_area, &view.facets);
    render_rows(frame, list_area, view);
}

fn render_facets(frame: &mut Frame, area: Rect, facets: &[FacetView]) {
    let block = Block::default().borders(Borders::ALL).title(FACETS_TITLE);
    if facets.is_empty() {
        frame.render_widget(Paragraph::new(NO_FACETS_TEXT).block(block), area);
        return;
    }
    let items: Vec<ListItem> = facets
        .iter()
        .map(|facet| {
            let style = if facet.focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(format_facet(facet))).style(style)
        })
        .collect();
    let mut state = ListState::default().with_selected(facets.iter().position(|f| f.focused));
    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}

fn render_rows(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let title = format!("{LIST_TITLE}({} of {}) ", view.shown(), view.total);
    let block = Block::default().borders(Borders::ALL).title(title);

    if view.result.is_empty() {
        let placeholder = Paragraph::new(NO_RESULTS_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|row| {
            let style = if row.visited {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format_row(row), style),
                Span::styled(
                    format!("  {}", row.company.career_url),
                    Style::default().fg(Color::Blue),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(view.cursor);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_message(frame: &mut Frame, area: Rect, text: &str) {
    let block = Block::default().borders(Borders::ALL).title(APP_TITLE);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_error(frame: &mut Frame, area: Rect, reason: &str, log_path: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(ERROR_TITLE)
        .border_style(Style::default().fg(Color::Red));
    let lines = error_lines(reason, log_path)
        .into_iter()
        .map(Line::from)
        .collect::<Vec<_>>();
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

pub fn error_lines(reason: &str, log_path: &str) -> Vec<String> {
    vec![
        reason.to_string(),
        String::new(),
        format!("Every candidate source was tried; see {log_path} for details."),
        "Press Esc or q to quit.".to_string(),
    ]
}

/// `[x] Name (Industry)`; URL is rendered separately.
pub fn format_row(row: &CompanyRow) -> String {
    let mark = if row.visited { "[x]" } else { "[ ]" };
    match &row.company.industry {
        Some(industry) => format!("{mark} {} ({industry})", row.company.name),
        None => format!("{mark} {}", row.company.name),
    }
}

pub fn format_facet(facet: &FacetView) -> String {
    let mark = if facet.selected { "[x]" } else { "[ ]" };
    format!("{mark} {} ({})", facet.name, facet.count)
}

pub fn status_text(view: &AppViewModel) -> String {
    match &view.phase {
        LoadPhase::Loading => LOADING_TEXT.to_string(),
        LoadPhase::Failed(_) => "Load failed | Esc quit".to_string(),
        LoadPhase::Ready => {
            let selected = view.facets.iter().filter(|f| f.selected).count();
            let industries = match (selected, view.empty_selection) {
                (0, EmptySelection::ShowAll) => "all".to_string(),
                (0, EmptySelection::ShowNone) => "none".to_string(),
                (n, _) => n.to_string(),
            };
            let hidden = if view.hide_visited { " | unvisited only" } else { "" };
            format!(
                "Shown {}/{} | Visited {} | Sort {} | Industries {}{} | {}",
                view.shown(),
                view.total,
                view.visited_count,
                view.sort.label(),
                industries,
                hidden,
                KEY_HINTS
            )
        }
    }
}
