//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

use crate::search::Suggestion;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchField,
    /// Suggestion dropdown (or its error / empty panel)
    Dropdown,
    HelpLine,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
/// Used by mouse event handlers to determine which component is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub search_field: Option<Rect>,
    pub dropdown: Option<Rect>,
    pub help_line: Option<Rect>,
    /// Screen row of each rendered suggestion, in list order
    pub suggestion_rows: Vec<u16>,
    /// Suggestions as drawn on those rows; clicks activate these, not the
    /// live list, which may have changed since the frame was drawn
    pub rendered_suggestions: Vec<Suggestion>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a point lies inside the search component (field or dropdown)
    pub fn is_inside_search(&self, x: u16, y: u16) -> bool {
        matches!(
            super::region_at(self, x, y),
            Some(Region::SearchField | Region::Dropdown)
        )
    }
}
