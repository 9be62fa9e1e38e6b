use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::app::App;
use crate::search::{InputState, Phase, Suggestion};
use crate::theme;
use crate::widgets::popup;

pub const EMPTY_STATE_TEXT: &str = "No suggestion found";
const SEARCHING_TEXT: &str = "Searching...";

const POPUP_BORDER_HEIGHT: u16 = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// Render the dropdown for the current phase below `field_area`
///
/// Returns the area drawn, or None when the dropdown is closed. Rows that
/// hold a suggestion are recorded in the layout regions for hit testing.
pub fn render_dropdown(app: &mut App, frame: &mut Frame, field_area: Rect) -> Option<Rect> {
    let state = app.search.snapshot();

    match state.phase() {
        Phase::Idle | Phase::Dismissed => None,
        Phase::ErrorShown => {
            let message = state.error_message.clone().unwrap_or_default();
            Some(render_message_panel(
                frame,
                field_area,
                &message,
                theme::dropdown::ERROR_TEXT,
                theme::dropdown::ERROR_BORDER,
            ))
        }
        Phase::NoResults if state.shows_empty_state() => Some(render_message_panel(
            frame,
            field_area,
            EMPTY_STATE_TEXT,
            theme::dropdown::EMPTY_TEXT,
            theme::dropdown::BORDER,
        )),
        Phase::NoResults => None,
        Phase::Typing => Some(render_message_panel(
            frame,
            field_area,
            SEARCHING_TEXT,
            theme::dropdown::EMPTY_TEXT,
            theme::dropdown::BORDER,
        )),
        Phase::HasResults => {
            let (area, rows) = render_list(state, frame, field_area);
            app.layout_regions.rendered_suggestions =
                state.suggestions.iter().take(rows.len()).cloned().collect();
            app.layout_regions.suggestion_rows = rows;
            Some(area)
        }
    }
}

fn render_message_panel(
    frame: &mut Frame,
    field_area: Rect,
    message: &str,
    text_color: ratatui::style::Color,
    border_color: ratatui::style::Color,
) -> Rect {
    let area = popup::popup_below_anchor(field_area, frame.area(), 1 + POPUP_BORDER_HEIGHT);
    popup::clear_area(frame, area);

    let paragraph = Paragraph::new(Span::styled(
        format!(" {}", message),
        Style::default().fg(text_color),
    ))
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme::dropdown::BACKGROUND)),
    );

    frame.render_widget(paragraph, area);
    area
}

fn render_list(state: &InputState, frame: &mut Frame, field_area: Rect) -> (Rect, Vec<u16>) {
    let height = state.suggestions.len() as u16 + POPUP_BORDER_HEIGHT;
    let area = popup::popup_below_anchor(field_area, frame.area(), height);
    let visible_rows = area.height.saturating_sub(POPUP_BORDER_HEIGHT) as usize;

    let label_width = state
        .suggestions
        .iter()
        .map(|s| s.primary_label().chars().count())
        .max()
        .unwrap_or(0);

    let items: Vec<ListItem> = state
        .suggestions
        .iter()
        .take(visible_rows)
        .enumerate()
        .map(|(i, suggestion)| {
            ListItem::new(suggestion_line(
                suggestion,
                state.selected_index == Some(i),
                label_width,
            ))
        })
        .collect();

    let rows = (0..items.len() as u16)
        .map(|i| area.y + 1 + i)
        .collect::<Vec<_>>();

    popup::clear_area(frame, area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Suggestions ")
            .border_style(Style::default().fg(theme::dropdown::BORDER))
            .style(Style::default().bg(theme::dropdown::BACKGROUND)),
    );
    frame.render_widget(list, area);

    (area, rows)
}

fn suggestion_line(suggestion: &Suggestion, selected: bool, label_width: usize) -> Line<'static> {
    let label = suggestion.primary_label();
    let padding = " ".repeat(label_width.saturating_sub(label.chars().count()));

    if selected {
        let style = Style::default()
            .fg(theme::dropdown::ITEM_SELECTED_FG)
            .bg(theme::dropdown::ITEM_SELECTED_BG);
        let mut spans = vec![Span::styled(
            format!("{}{}{}", SELECTED_MARKER, label, padding),
            style.add_modifier(theme::dropdown::ITEM_SELECTED_MODIFIER),
        )];
        if let Some(secondary) = suggestion.secondary_label() {
            spans.push(Span::styled(format!("  {}", secondary), style));
        }
        spans.push(Span::styled(
            format!("  [{}]", suggestion.kind_label()),
            style,
        ));
        return Line::from(spans);
    }

    let kind_color = if suggestion.is_location() {
        theme::dropdown::KIND_LOCATION
    } else {
        theme::dropdown::KIND_LISTING
    };

    let mut spans = vec![Span::styled(
        format!("{}{}{}", UNSELECTED_MARKER, label, padding),
        Style::default().fg(theme::dropdown::ITEM_NORMAL_FG),
    )];
    if let Some(secondary) = suggestion.secondary_label() {
        spans.push(Span::styled(
            format!("  {}", secondary),
            Style::default().fg(theme::dropdown::PRICE),
        ));
    }
    spans.push(Span::styled(
        format!("  [{}]", suggestion.kind_label()),
        Style::default().fg(kind_color),
    ));
    Line::from(spans)
}

#[cfg(test)]
#[path = "dropdown_render_tests.rs"]
mod dropdown_render_tests;
