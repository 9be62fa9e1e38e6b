use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::search::Phase;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.search.phase() {
        Phase::HasResults => {
            hints!["↑/↓" => "Select", "Enter" => "Open", "Esc" => "Close", "Ctrl+U" => "Clear", "Ctrl+C" => "Quit"]
        }
        Phase::Typing | Phase::NoResults | Phase::ErrorShown => {
            hints!["Enter" => "Search", "Esc" => "Close", "Ctrl+U" => "Clear", "Ctrl+C" => "Quit"]
        }
        Phase::Dismissed => {
            hints!["Enter" => "Search", "Ctrl+U" => "Clear", "Ctrl+C" => "Quit"]
        }
        Phase::Idle => hints!["Type 3+ chars" => "Suggest", "Ctrl+C" => "Quit"],
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = build_styled_spans(&get_context_hints(app));

    if let Some(route) = app.last_route() {
        spans.push(Span::styled(" \u{2502} ", Style::default().fg(theme::help_line::SEPARATOR)));
        spans.push(Span::styled(
            route.to_string(),
            Style::default().fg(theme::help_line::ROUTE),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
