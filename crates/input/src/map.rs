//! Key mapping from terminal events to viewer actions.

use crate::types::ViewerAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to viewer actions.
pub fn handle_key_event(key: KeyEvent) -> Option<ViewerAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Some(ViewerAction::TogglePause)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') | KeyCode::Right => {
            Some(ViewerAction::Step)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ViewerAction::Reset),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(ViewerAction::Reverse),
        _ => None,
    }
}

/// Check if key should quit the viewer.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
