//! Dropdown and selection state machine
//!
//! [`InputState`] is the only mutable state of the search box. It changes
//! exclusively through [`transition`], a pure function from a state and an
//! event to the next state plus the side effects the caller must run
//! (arming the debounce timer, cancelling work, committing). Nothing here
//! touches timers, channels or the network.

use serde::Serialize;

use super::commit::CommitTarget;
use super::is_queryable;
use super::suggestion::Suggestion;

/// Snapshot of the search box, as seen by the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputState {
    pub text: String,
    pub is_open: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub suggestions: Vec<Suggestion>,
    /// Highlighted entry (None = nothing highlighted)
    pub selected_index: Option<usize>,
}

/// Coarse state of the dropdown, derived from [`InputState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Closed with an empty field
    Idle,
    /// Closed while the field still holds text (escape, blur, short input)
    Dismissed,
    /// Open and waiting for the first results of a query
    Typing,
    HasResults,
    NoResults,
    ErrorShown,
}

impl InputState {
    pub fn phase(&self) -> Phase {
        if !self.is_open {
            return if self.text.is_empty() {
                Phase::Idle
            } else {
                Phase::Dismissed
            };
        }

        if self.error_message.is_some() {
            Phase::ErrorShown
        } else if !self.suggestions.is_empty() {
            Phase::HasResults
        } else if self.is_loading {
            Phase::Typing
        } else {
            Phase::NoResults
        }
    }

    /// The highlighted suggestion, if the highlight points at one
    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.selected_index.and_then(|i| self.suggestions.get(i))
    }

    /// Whether arrow keys currently move the highlight
    pub fn can_navigate(&self) -> bool {
        self.is_open && !self.suggestions.is_empty()
    }

    /// Whether the "No suggestion found" panel applies
    pub fn shows_empty_state(&self) -> bool {
        self.phase() == Phase::NoResults && is_queryable(&self.text)
    }
}

/// Keys the search box reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Up,
    Down,
    Enter,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    TextChanged(String),
    Key(SearchKey),
    /// Click or tap on a dropdown entry
    Activate(Suggestion),
    Clear,
    Focus,
    BlurOutside,
    /// Results of the current query; `refresh_pending` is set when a newer
    /// query is already waiting in the debouncer
    ResultsReady {
        suggestions: Vec<Suggestion>,
        refresh_pending: bool,
    },
    QueryFailed {
        message: String,
        refresh_pending: bool,
    },
}

/// Work the caller must perform after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the debounce timer for this text
    ScheduleQuery(String),
    /// Drop the pending timer and cancel any in-flight query
    CancelQuery,
    /// Hand the target to the commit resolver
    Commit(CommitTarget),
}

/// Compute the next state and the effects for `event`
pub fn transition(state: &InputState, event: SearchEvent) -> (InputState, Vec<Effect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match event {
        SearchEvent::TextChanged(text) => {
            if is_queryable(&text) {
                next.is_open = true;
                next.is_loading = true;
                next.error_message = None;
                next.selected_index = None;
                effects.push(Effect::ScheduleQuery(text.clone()));
            } else {
                next.is_open = false;
                next.is_loading = false;
                next.error_message = None;
                next.suggestions.clear();
                next.selected_index = None;
                effects.push(Effect::CancelQuery);
            }
            next.text = text;
        }

        SearchEvent::Key(key) => match key {
            SearchKey::Down if state.can_navigate() => {
                let last = state.suggestions.len() - 1;
                next.selected_index = Some(match state.selected_index {
                    None => 0,
                    Some(i) => (i + 1).min(last),
                });
            }
            SearchKey::Up if state.can_navigate() => {
                next.selected_index = match state.selected_index {
                    None | Some(0) => None,
                    Some(i) => Some(i - 1),
                };
            }
            SearchKey::Up | SearchKey::Down => {}
            SearchKey::Enter => {
                let target = match state.selected_suggestion() {
                    Some(suggestion) if state.is_open => {
                        CommitTarget::Suggestion(suggestion.clone())
                    }
                    _ => CommitTarget::Text(state.text.clone()),
                };
                effects.push(Effect::Commit(target));
            }
            SearchKey::Escape => {
                next.is_open = false;
                next.selected_index = None;
            }
        },

        SearchEvent::Activate(suggestion) => {
            effects.push(Effect::Commit(CommitTarget::Suggestion(suggestion)));
        }

        SearchEvent::Clear => {
            next = InputState::default();
            effects.push(Effect::CancelQuery);
        }

        SearchEvent::Focus => {
            if is_queryable(&state.text) && !state.is_open {
                next.is_open = true;
                next.selected_index = None;
            }
        }

        SearchEvent::BlurOutside => {
            next.is_open = false;
            next.selected_index = None;
        }

        SearchEvent::ResultsReady {
            suggestions,
            refresh_pending,
        } => {
            next.suggestions = suggestions;
            next.is_open = true;
            next.is_loading = refresh_pending;
            next.error_message = None;
            next.selected_index = None;
        }

        SearchEvent::QueryFailed {
            message,
            refresh_pending,
        } => {
            next.suggestions.clear();
            next.is_open = true;
            next.is_loading = refresh_pending;
            next.error_message = Some(message);
            next.selected_index = None;
        }
    }

    (next, effects)
}

#[cfg(test)]
#[path = "machine_tests.rs"]
mod machine_tests;
