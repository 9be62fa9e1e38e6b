//! Shared test utilities for the terminal front-end
//!
//! Builds apps wired to a scripted search source so render and event tests
//! never touch the network.

#[cfg(test)]
pub mod test_helpers {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::navigation::RouteHistory;
    use crate::search::SearchController;
    use crate::search::debouncer::Debouncer;
    use crate::search::dispatcher::QueryDispatcher;
    use crate::search::test_support::ScriptedSource;

    /// App backed by a source that answers every query with nothing
    pub fn test_app() -> App {
        app_with_source(ScriptedSource::new())
    }

    /// App backed by `source`, with the debounce delay removed so a single
    /// tick dispatches the query
    pub fn app_with_source(source: ScriptedSource) -> App {
        let controller = SearchController::with_parts(
            QueryDispatcher::spawn(source),
            Debouncer::with_delay(Duration::ZERO),
            RouteHistory::new(),
        );
        App::with_controller(controller)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type `text` one key at a time, the way a user would
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Tick until no query is pending or running
    pub fn settle(app: &mut App) {
        for _ in 0..300 {
            app.tick();
            if !app.search.is_busy() {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("search never settled");
    }

    /// Type `text` and wait for its suggestions
    pub fn type_and_settle(app: &mut App, text: &str) {
        type_text(app, text);
        settle(app);
    }
}
