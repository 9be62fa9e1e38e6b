//! Search controller
//!
//! Owns the [`InputState`] and drives the other pieces: input handlers feed
//! events through the state machine, effects arm the debouncer or cancel
//! work, [`tick`](SearchController::tick) fires ready queries and applies
//! worker results, and commits go out through the [`Navigator`].

use std::time::{Duration, Instant};

use super::SUGGESTIONS_FAILED_MESSAGE;
use super::commit::{CommitResolver, CommitTarget};
use super::debouncer::Debouncer;
use super::dispatcher::{QueryDispatcher, QueryOutcome};
use super::machine::{Effect, InputState, Phase, SearchEvent, SearchKey, transition};
use super::source::SearchSource;
use super::suggestion::Suggestion;
use crate::navigation::{Navigator, Route};

pub struct SearchController<N: Navigator> {
    state: InputState,
    debouncer: Debouncer,
    dispatcher: QueryDispatcher,
    resolver: CommitResolver,
    navigator: N,
}

impl<N: Navigator> SearchController<N> {
    /// Spawn a search worker for `source` and build a controller around it
    pub fn new<S>(source: S, navigator: N) -> Self
    where
        S: SearchSource + Send + 'static,
    {
        Self::with_parts(QueryDispatcher::spawn(source), Debouncer::new(), navigator)
    }

    pub fn with_parts(dispatcher: QueryDispatcher, debouncer: Debouncer, navigator: N) -> Self {
        Self {
            state: InputState::default(),
            debouncer,
            dispatcher,
            resolver: CommitResolver::new(),
            navigator,
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> &InputState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn on_text_change(&mut self, text: &str) {
        self.on_text_change_at(text, Instant::now());
    }

    pub fn on_text_change_at(&mut self, text: &str, now: Instant) {
        self.apply(SearchEvent::TextChanged(text.to_string()), now);
    }

    /// Returns the route when the key committed something
    pub fn on_key_down(&mut self, key: SearchKey) -> Option<Route> {
        self.apply(SearchEvent::Key(key), Instant::now())
    }

    pub fn on_suggestion_activate(&mut self, suggestion: Suggestion) -> Option<Route> {
        self.apply(SearchEvent::Activate(suggestion), Instant::now())
    }

    pub fn on_clear(&mut self) {
        self.apply(SearchEvent::Clear, Instant::now());
    }

    pub fn on_focus(&mut self) {
        self.apply(SearchEvent::Focus, Instant::now());
    }

    pub fn on_blur_outside(&mut self) {
        self.apply(SearchEvent::BlurOutside, Instant::now());
    }

    /// Drive timers and worker responses; call once per UI loop iteration
    ///
    /// Returns true when the snapshot changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some(text) = self.debouncer.take_ready_at(now) {
            log::debug!("Debounce fired for {:?}", text);
            if !self.dispatcher.dispatch_at(&text, now) {
                self.apply_outcome(
                    QueryOutcome::Failed {
                        query: text,
                        message: SUGGESTIONS_FAILED_MESSAGE.to_string(),
                    },
                    now,
                );
                changed = true;
            }
        }

        if let Some(outcome) = self.dispatcher.poll() {
            self.apply_outcome(outcome, now);
            changed = true;
        }

        changed
    }

    /// Time until the pending debounce fires, for sizing the event poll
    pub fn next_deadline_at(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready_at(now)
    }

    /// Whether a query is waiting in the debouncer or running
    pub fn is_busy(&self) -> bool {
        self.debouncer.has_pending() || self.dispatcher.is_in_flight()
    }

    /// Cancel the timer and any in-flight query and stop the worker
    pub fn shutdown(&mut self) {
        self.debouncer.cancel();
        self.dispatcher.shutdown();
    }

    fn apply_outcome(&mut self, outcome: QueryOutcome, now: Instant) {
        let refresh_pending = self.debouncer.has_pending();
        let event = match outcome {
            QueryOutcome::Suggestions { query, suggestions } => {
                log::debug!("{} suggestions for {:?}", suggestions.len(), query);
                SearchEvent::ResultsReady {
                    suggestions,
                    refresh_pending,
                }
            }
            QueryOutcome::Failed { query, message } => {
                log::debug!("Suggestions failed for {:?}", query);
                SearchEvent::QueryFailed {
                    message,
                    refresh_pending,
                }
            }
        };
        self.apply(event, now);
    }

    fn apply(&mut self, event: SearchEvent, now: Instant) -> Option<Route> {
        let (next, effects) = transition(&self.state, event);
        self.state = next;

        let mut committed = None;
        for effect in effects {
            match effect {
                Effect::ScheduleQuery(text) => {
                    self.debouncer.schedule_at(&text, now);
                }
                Effect::CancelQuery => {
                    self.debouncer.cancel();
                    self.dispatcher.cancel_in_flight();
                }
                Effect::Commit(target) => {
                    committed = self.commit(target, now);
                }
            }
        }
        committed
    }

    fn commit(&mut self, target: CommitTarget, now: Instant) -> Option<Route> {
        let route = self.resolver.resolve(target)?;
        log::debug!("Committing search: {}", route);

        self.navigator.navigate(route.clone());
        self.apply(SearchEvent::Clear, now);
        Some(route)
    }
}

impl<N: Navigator> Drop for SearchController<N> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
