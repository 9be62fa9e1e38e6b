use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::theme;

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const PLACEHOLDER: &str = "City, make or model";

/// Spinner glyph for the given render frame; advances every 8 frames
pub fn get_spinner(frame_count: u64) -> char {
    let index = (frame_count / 8) % SPINNER_CHARS.len() as u64;
    SPINNER_CHARS[index as usize]
}

/// Split `visible` into spans with the char under `cursor` reversed
///
/// A cursor past the end renders as a reversed blank.
fn spans_with_cursor(visible: &str, cursor: usize) -> Vec<Span<'static>> {
    let chars: Vec<char> = visible.chars().collect();
    let mut spans = Vec::with_capacity(3);

    if cursor >= chars.len() {
        if !chars.is_empty() {
            spans.push(Span::raw(visible.to_string()));
        }
        spans.push(Span::styled(" ", theme::input::CURSOR));
        return spans;
    }

    if cursor > 0 {
        spans.push(Span::raw(chars[..cursor].iter().collect::<String>()));
    }
    spans.push(Span::styled(chars[cursor].to_string(), theme::input::CURSOR));
    if cursor + 1 < chars.len() {
        spans.push(Span::raw(chars[cursor + 1..].iter().collect::<String>()));
    }
    spans
}

pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) -> Rect {
    let viewport_width = area.width.saturating_sub(2) as usize;
    app.input.calculate_scroll_offset(viewport_width);

    let border_color = if app.input.focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let mut title_spans = vec![Span::raw(" Search ")];
    if app.search.snapshot().is_loading {
        title_spans.push(Span::styled(
            format!("{} ", get_spinner(app.frame_count)),
            Style::default().fg(theme::input::SPINNER),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(title_spans))
        .border_style(Style::default().fg(border_color));

    let text = app.input.text();
    let scroll_offset = app.input.scroll_offset;
    let visible: String = text.chars().skip(scroll_offset).take(viewport_width).collect();

    let mut spans = if app.input.focused {
        let cursor_in_viewport = app.input.cursor_column().saturating_sub(scroll_offset);
        spans_with_cursor(&visible, cursor_in_viewport)
    } else {
        vec![Span::raw(visible)]
    };

    if text.is_empty() {
        spans.push(Span::styled(
            PLACEHOLDER,
            Style::default().fg(theme::input::PLACEHOLDER),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
    area
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
