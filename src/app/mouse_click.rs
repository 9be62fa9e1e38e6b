//! Mouse click handling
//!
//! Clicks on a dropdown row commit that suggestion, clicks in the field
//! focus it or move the cursor, and clicks anywhere else close the dropdown.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::layout::{Region, row_at};

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Dropdown) => click_dropdown(app, mouse),
        Some(Region::SearchField) => click_search_field(app, mouse),
        Some(Region::HelpLine) | None => app.blur_field(),
    }
}

fn click_dropdown(app: &mut App, mouse: MouseEvent) {
    // Border, empty-state and error rows are part of the search box
    let Some(index) = row_at(&app.layout_regions, mouse.column, mouse.row) else {
        return;
    };
    let Some(suggestion) = app.layout_regions.rendered_suggestions.get(index).cloned() else {
        return;
    };

    let route = app.search.on_suggestion_activate(suggestion);
    app.after_commit(route);
}

fn click_search_field(app: &mut App, mouse: MouseEvent) {
    // If unfocused, just focus and return (don't move cursor)
    if !app.input.focused {
        app.focus_field();
        return;
    }

    let Some(field_rect) = app.layout_regions.search_field else {
        return;
    };

    // Inner area is inside the border
    let inner_x = field_rect.x.saturating_add(1);
    let inner_width = field_rect.width.saturating_sub(2);

    if mouse.column < inner_x || mouse.column >= inner_x.saturating_add(inner_width) {
        return;
    }

    let relative_x = (mouse.column - inner_x) as usize;
    app.input.set_cursor_column(app.input.scroll_offset + relative_x);
    app.mark_dirty();
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
