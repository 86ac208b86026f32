use career_core::{AppViewModel, LoadPhase, Msg};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::constants::PAGE_ROWS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Dispatch(Msg),
}

/// Translates a key press into an action given the currently displayed view.
pub fn map_key(key: KeyEvent, view: &AppViewModel) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    if view.phase != LoadPhase::Ready {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    if ctrl {
        let msg = match key.code {
            KeyCode::Char('v') => Msg::SelectedVisitedToggled,
            KeyCode::Char('f') => Msg::FocusedIndustryToggled,
            KeyCode::Char('r') => Msg::FiltersCleared,
            KeyCode::Char('o') => Msg::HideVisitedToggled,
            KeyCode::Char('e') => Msg::EmptySelectionToggled,
            KeyCode::Char('x') => Msg::VisitedCleared,
            _ => return None,
        };
        return Some(KeyAction::Dispatch(msg));
    }

    let msg = match key.code {
        KeyCode::Esc if view.search.is_empty() => return Some(KeyAction::Quit),
        KeyCode::Esc => Msg::SearchCleared,
        KeyCode::Up => Msg::CursorMoved(-1),
        KeyCode::Down => Msg::CursorMoved(1),
        KeyCode::PageUp => Msg::CursorMoved(-PAGE_ROWS),
        KeyCode::PageDown => Msg::CursorMoved(PAGE_ROWS),
        KeyCode::Home => Msg::CursorMoved(i32::MIN),
        KeyCode::End => Msg::CursorMoved(i32::MAX),
        KeyCode::Left => Msg::FacetCursorMoved(-1),
        KeyCode::Right => Msg::FacetCursorMoved(1),
        KeyCode::Enter => Msg::OpenSelected,
        KeyCode::Tab => Msg::SortCycled,
        KeyCode::Backspace => {
            let mut search = view.search.clone();
            search.pop()?;
            Msg::SearchChanged(search)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut search = view.search.clone();
            search.push(c);
            Msg::SearchChanged(search)
        }
        _ => return None,
    };
    Some(KeyAction::Dispatch(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(search: &str) -> AppViewModel {
        AppViewModel {
            phase: LoadPhase::Ready,
            search: search.to_string(),
            ..AppViewModel::default()
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn typing_extends_search() {
        assert_eq!(
            map_key(press(KeyCode::Char('h')), &ready("tec")),
            Some(KeyAction::Dispatch(Msg::SearchChanged("tech".to_string())))
        );
        assert_eq!(
            map_key(
                KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT),
                &ready("")
            ),
            Some(KeyAction::Dispatch(Msg::SearchChanged("S".to_string())))
        );
    }

    #[test]
    fn backspace_on_empty_search_does_nothing() {
        assert_eq!(map_key(press(KeyCode::Backspace), &ready("")), None);
        assert_eq!(
            map_key(press(KeyCode::Backspace), &ready("ab")),
            Some(KeyAction::Dispatch(Msg::SearchChanged("a".to_string())))
        );
    }

    #[test]
    fn escape_clears_search_before_quitting() {
        assert_eq!(
            map_key(press(KeyCode::Esc), &ready("x")),
            Some(KeyAction::Dispatch(Msg::SearchCleared))
        );
        assert_eq!(map_key(press(KeyCode::Esc), &ready("")), Some(KeyAction::Quit));
    }

    #[test]
    fn control_chords_map_to_commands() {
        let view = ready("");
        assert_eq!(
            map_key(ctrl('v'), &view),
            Some(KeyAction::Dispatch(Msg::SelectedVisitedToggled))
        );
        assert_eq!(
            map_key(ctrl('x'), &view),
            Some(KeyAction::Dispatch(Msg::VisitedCleared))
        );
        assert_eq!(map_key(ctrl('c'), &view), Some(KeyAction::Quit));
        assert_eq!(map_key(ctrl('z'), &view), None);
    }

    #[test]
    fn only_quit_keys_work_before_ready() {
        let failed = AppViewModel {
            phase: LoadPhase::Failed("no sources".to_string()),
            ..AppViewModel::default()
        };
        assert_eq!(map_key(press(KeyCode::Char('a')), &failed), None);
        assert_eq!(map_key(press(KeyCode::Char('q')), &failed), Some(KeyAction::Quit));
    }
}
