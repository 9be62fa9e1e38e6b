use crate::input::SearchField;
use crate::layout::LayoutRegions;
use crate::navigation::{Route, RouteHistory};
use crate::notification::NotificationState;
use crate::search::{SearchController, SearchSource};

pub struct App {
    pub search: SearchController<RouteHistory>,
    pub input: SearchField,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub frame_count: u64,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new<S>(source: S) -> Self
    where
        S: SearchSource + Send + 'static,
    {
        Self::with_controller(SearchController::new(source, RouteHistory::new()))
    }

    pub fn with_controller(search: SearchController<RouteHistory>) -> Self {
        Self {
            search,
            input: SearchField::new(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            frame_count: 0,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    /// Routes committed during this session, oldest first
    pub fn routes(&self) -> &[Route] {
        self.search.navigator().routes()
    }

    pub fn last_route(&self) -> Option<&Route> {
        self.search.navigator().last()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Redraw when something changed or an animation is running
    pub fn should_render(&self) -> bool {
        self.needs_render
            || self.search.snapshot().is_loading
            || self.notification.current().is_some()
    }

    /// Drive debounce and worker responses
    pub fn tick(&mut self) {
        if self.search.tick() {
            self.mark_dirty();
        }
    }

    /// Report the field's current text to the search controller
    pub(crate) fn text_edited(&mut self) {
        let text = self.input.text().to_string();
        if text != self.search.snapshot().text {
            self.search.on_text_change(&text);
        }
        self.mark_dirty();
    }

    /// Pull the controller's text back into the field after a reset
    pub(crate) fn sync_field(&mut self) {
        let text = self.search.snapshot().text.clone();
        self.input.set_text(&text);
        self.mark_dirty();
    }

    pub(crate) fn focus_field(&mut self) {
        if !self.input.focused {
            self.input.focused = true;
            self.search.on_focus();
        }
        self.mark_dirty();
    }

    pub(crate) fn blur_field(&mut self) {
        self.input.focused = false;
        self.search.on_blur_outside();
        self.mark_dirty();
    }

    /// Follow-up after an action that may have navigated
    pub(crate) fn after_commit(&mut self, route: Option<Route>) {
        if let Some(route) = route {
            log::debug!("Navigated to {}", route);
            self.notification.show(&format!("Navigated to {}", route));
        }
        self.sync_field();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
