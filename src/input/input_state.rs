use tui_textarea::{CursorMove, TextArea};

/// Single-line editing buffer behind the search box
///
/// The text here mirrors `InputState::text` of the search controller. Edits
/// happen here first, then the new text is reported to the controller; when
/// the controller resets (clear, commit) the field is synced back.
pub struct SearchField {
    pub textarea: TextArea<'static>,
    pub scroll_offset: usize,
    pub focused: bool,
}

impl SearchField {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(ratatui::style::Style::default());

        Self {
            textarea,
            scroll_offset: 0,
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the whole text, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        if self.text() == text {
            return;
        }
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
        self.scroll_offset = 0;
    }

    pub fn cursor_column(&self) -> usize {
        self.textarea.cursor().1
    }

    /// Keep the cursor visible inside a viewport of `viewport_width` chars
    pub fn calculate_scroll_offset(&mut self, viewport_width: usize) {
        if viewport_width == 0 {
            self.scroll_offset = 0;
            return;
        }

        let cursor_col = self.cursor_column();
        let text_length = self.text().chars().count();
        let mut new_scroll = self.scroll_offset;

        if cursor_col < new_scroll {
            new_scroll = cursor_col;
        } else if cursor_col >= new_scroll + viewport_width {
            new_scroll = cursor_col + 1 - viewport_width;
        }

        if text_length < new_scroll + viewport_width {
            let min_scroll = text_length.saturating_sub(viewport_width);
            let max_scroll_for_cursor = cursor_col.saturating_sub(viewport_width - 1);
            new_scroll = new_scroll.min(min_scroll.max(max_scroll_for_cursor));
        }

        self.scroll_offset = new_scroll;
    }

    /// Move cursor to a specific column position
    pub fn set_cursor_column(&mut self, target_col: usize) {
        let current_col = self.cursor_column();
        let target_col = target_col.min(self.text().chars().count());

        match target_col.cmp(&current_col) {
            std::cmp::Ordering::Less => {
                for _ in 0..(current_col - target_col) {
                    self.textarea.move_cursor(CursorMove::Back);
                }
            }
            std::cmp::Ordering::Greater => {
                for _ in 0..(target_col - current_col) {
                    self.textarea.move_cursor(CursorMove::Forward);
                }
            }
            std::cmp::Ordering::Equal => {}
        }
    }
}

impl Default for SearchField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
