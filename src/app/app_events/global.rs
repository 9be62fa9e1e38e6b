use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;

/// Keys that act regardless of dropdown state
///
/// Returns true when the key was consumed.
pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('u') => {
            app.search.on_clear();
            app.sync_field();
            true
        }
        // Newline keys; the field is single-line
        KeyCode::Char('m') | KeyCode::Char('j') => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
