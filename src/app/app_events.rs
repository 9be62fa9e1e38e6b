use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use super::mouse_events;
use crate::search::SearchKey;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);
const ANIMATION_POLL_TIMEOUT: Duration = Duration::from_millis(16);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.tick();

        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Mouse(mouse) => {
                    mouse_events::handle_mouse_event(self, mouse);
                }
                Event::FocusGained => {
                    self.focus_field();
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// How long to block on terminal input before the next tick is due
    pub(crate) fn poll_timeout(&self, now: Instant) -> Duration {
        if self.search.snapshot().is_loading || self.search.is_busy() {
            return ANIMATION_POLL_TIMEOUT;
        }
        self.search
            .next_deadline_at(now)
            .map_or(EVENT_POLL_TIMEOUT, |d| d.min(EVENT_POLL_TIMEOUT))
    }

    pub(crate) fn handle_paste_event(&mut self, text: String) {
        // Single-line field
        let text = text.replace(['\r', '\n'], " ");
        self.focus_field();
        self.input.textarea.insert_str(&text);
        self.text_edited();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        if !self.input.focused {
            self.focus_field();
        }

        let search_key = match key.code {
            KeyCode::Up => Some(SearchKey::Up),
            KeyCode::Down => Some(SearchKey::Down),
            KeyCode::Enter => Some(SearchKey::Enter),
            KeyCode::Esc => Some(SearchKey::Escape),
            KeyCode::Tab | KeyCode::BackTab => return,
            _ => None,
        };

        if let Some(search_key) = search_key {
            let route = self.search.on_key_down(search_key);
            self.after_commit(route);
            return;
        }

        if self.input.textarea.input(key) {
            self.text_edited();
        } else {
            // Cursor movement still needs a redraw
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
