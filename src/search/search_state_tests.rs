//! End-to-end tests for the search controller against a scripted source

use super::*;
use crate::navigation::RouteHistory;
use crate::search::source::SourceKind;
use crate::search::test_support::{Reply, ScriptedSource, listing_payload, location_payload};
use serde_json::json;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(500);

fn controller(source: &ScriptedSource) -> SearchController<RouteHistory> {
    SearchController::new(source.clone(), RouteHistory::new())
}

/// Tick with a fixed clock until a worker response has been applied
fn settle(search: &mut SearchController<RouteHistory>, now: Instant) {
    for _ in 0..300 {
        if search.tick_at(now) && !search.snapshot().is_loading {
            return;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    panic!("search never settled");
}

/// Type `text`, let the debounce elapse and wait for the results
fn type_and_settle(search: &mut SearchController<RouteHistory>, text: &str) -> Instant {
    let start = Instant::now();
    search.on_text_change_at(text, start);
    let fired = start + DELAY;
    settle(search, fired);
    fired
}

#[test]
fn test_short_input_never_queries() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("be", start);
    search.tick_at(start + Duration::from_secs(2));
    std::thread::sleep(Duration::from_millis(30));
    search.tick_at(start + Duration::from_secs(2));

    assert!(source.calls().is_empty());
    assert!(search.snapshot().suggestions.is_empty());
    assert!(!search.snapshot().is_loading);
    assert!(!search.snapshot().is_open);
}

#[test]
fn test_loading_starts_before_debounce_fires() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);

    search.on_text_change_at("bmw", Instant::now());

    assert!(search.snapshot().is_loading);
    assert!(search.snapshot().is_open);
    assert!(search.is_busy());
}

#[test]
fn test_burst_dispatches_once_with_last_text() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("be", start);
    search.on_text_change_at("bmw", start + Duration::from_millis(100));
    search.on_text_change_at("bmw ", start + Duration::from_millis(200));
    search.on_text_change_at("bmw x", start + Duration::from_millis(300));

    // 500ms after the first keystroke but not after the last
    search.tick_at(start + Duration::from_millis(600));
    assert!(source.calls().is_empty());

    settle(&mut search, start + Duration::from_millis(800));

    assert_eq!(source.queries(SourceKind::Locations), vec!["bmw x"]);
    assert_eq!(source.queries(SourceKind::Listings), vec!["bmw x"]);
}

#[test]
fn test_be_then_bmw_dispatches_bmw_only() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("be", start);
    search.on_text_change_at("bmw", start + Duration::from_millis(50));
    settle(&mut search, start + Duration::from_millis(550));

    assert_eq!(source.queries(SourceKind::Locations), vec!["bmw"]);
    assert_eq!(source.queries(SourceKind::Listings), vec!["bmw"]);
}

#[test]
fn test_one_location_and_seven_listings_show_six() {
    let source = ScriptedSource::new()
        .locations("bmw", Reply::ok(location_payload(1)))
        .listings("bmw", Reply::ok(listing_payload(7)));
    let mut search = controller(&source);

    type_and_settle(&mut search, "bmw");

    let state = search.snapshot();
    assert_eq!(state.suggestions.len(), 6);
    assert!(state.suggestions[0].is_location());
    assert!(state.is_open);
    assert!(!state.is_loading);
    assert_eq!(state.selected_index, None);
    assert_eq!(search.phase(), Phase::HasResults);
}

#[test]
fn test_total_failure_shows_error() {
    let source = ScriptedSource::new()
        .locations("bmw", Reply::network_error(SourceKind::Locations))
        .listings("bmw", Reply::network_error(SourceKind::Listings));
    let mut search = controller(&source);

    type_and_settle(&mut search, "bmw");

    let state = search.snapshot();
    assert_eq!(
        state.error_message.as_deref(),
        Some("Failed to load suggestions.")
    );
    assert!(state.suggestions.is_empty());
    assert!(!state.is_loading);
    assert_eq!(search.phase(), Phase::ErrorShown);
}

#[test]
fn test_partial_failure_shows_remaining_results() {
    let source = ScriptedSource::new()
        .locations("bmw", Reply::ok(location_payload(2)))
        .listings("bmw", Reply::network_error(SourceKind::Listings));
    let mut search = controller(&source);

    type_and_settle(&mut search, "bmw");

    assert_eq!(search.snapshot().suggestions.len(), 2);
    assert_eq!(search.snapshot().error_message, None);
}

#[test]
fn test_malformed_payloads_show_empty_state() {
    let source = ScriptedSource::new()
        .locations("zzz", Reply::ok(json!({"detail": "nope"})))
        .listings("zzz", Reply::ok(json!("garbage")));
    let mut search = controller(&source);

    type_and_settle(&mut search, "zzz");

    assert_eq!(search.phase(), Phase::NoResults);
    assert!(search.snapshot().shows_empty_state());
}

#[test]
fn test_slow_earlier_query_never_overwrites_later_one() {
    let source = ScriptedSource::new()
        .listings("abc", Reply::ok(listing_payload(4)).after(Duration::from_millis(300)))
        .listings("abcd", Reply::ok(listing_payload(1)));
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("abc", start);
    search.tick_at(start + DELAY);
    search.on_text_change_at("abcd", start + DELAY);
    settle(&mut search, start + DELAY * 2);

    assert_eq!(search.snapshot().suggestions.len(), 1);

    // Give the superseded request time to finish if it were still running
    std::thread::sleep(Duration::from_millis(400));
    search.tick_at(start + DELAY * 3);

    assert_eq!(search.snapshot().suggestions.len(), 1);
    assert_eq!(search.snapshot().text, "abcd");
}

#[test]
fn test_results_while_typing_keep_loading_flag() {
    let source = ScriptedSource::new()
        .listings("abc", Reply::ok(listing_payload(2)).after(Duration::from_millis(50)));
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("abc", start);
    search.tick_at(start + DELAY);
    // Newer text is still debouncing when the first results land
    search.on_text_change_at("abcd", start + DELAY);

    for _ in 0..300 {
        if search.tick_at(start + DELAY) {
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    assert_eq!(search.snapshot().suggestions.len(), 2);
    assert!(search.snapshot().is_loading);
}

#[test]
fn test_clear_resets_and_drops_in_flight_results() {
    let source = ScriptedSource::new()
        .listings("bmw", Reply::ok(listing_payload(3)).after(Duration::from_millis(100)));
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("bmw", start);
    search.tick_at(start + DELAY);
    search.on_clear();

    assert_eq!(search.snapshot(), &InputState::default());
    assert!(!search.is_busy());

    std::thread::sleep(Duration::from_millis(250));
    search.tick_at(start + DELAY * 2);

    assert_eq!(search.snapshot(), &InputState::default());
}

#[test]
fn test_clear_cancels_pending_debounce() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("bmw", start);
    search.on_clear();
    search.tick_at(start + Duration::from_secs(1));
    std::thread::sleep(Duration::from_millis(30));
    search.tick_at(start + Duration::from_secs(1));

    assert!(source.calls().is_empty());
}

#[test]
fn test_shortening_input_cancels_query() {
    let source = ScriptedSource::new()
        .listings("bmw", Reply::ok(listing_payload(3)).after(Duration::from_millis(100)));
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("bmw", start);
    search.tick_at(start + DELAY);
    search.on_text_change_at("bm", start + DELAY);

    std::thread::sleep(Duration::from_millis(250));
    search.tick_at(start + DELAY * 2);

    assert!(!search.snapshot().is_open);
    assert!(search.snapshot().suggestions.is_empty());
}

#[test]
fn test_arrow_and_enter_open_listing_then_reset() {
    let source = ScriptedSource::new()
        .locations("bmw", Reply::ok(location_payload(1)))
        .listings("bmw", Reply::ok(listing_payload(3)));
    let mut search = controller(&source);
    type_and_settle(&mut search, "bmw");

    search.on_key_down(SearchKey::Down);
    search.on_key_down(SearchKey::Down);
    let route = search.on_key_down(SearchKey::Enter);

    assert_eq!(route, Some(Route::Listing { id: 1 }));
    assert_eq!(search.navigator().last(), Some(&Route::Listing { id: 1 }));
    assert_eq!(search.snapshot(), &InputState::default());
}

#[test]
fn test_activating_location_searches_its_place() {
    let source = ScriptedSource::new().locations(
        "berlin",
        Reply::ok(json!({
            "results": [{
                "display_name": "Berlin, Germany",
                "address": {"city": "Berlin", "country": "Germany"}
            }]
        })),
    );
    let mut search = controller(&source);
    type_and_settle(&mut search, "berlin");

    let berlin = search.snapshot().suggestions[0].clone();
    let route = search.on_suggestion_activate(berlin);

    match route {
        Some(Route::ListingSearch { search: text, .. }) => assert_eq!(text, "Berlin, Germany"),
        other => panic!("Expected listing search, got {:?}", other),
    }
    assert_eq!(search.navigator().len(), 1);
    assert_eq!(search.phase(), Phase::Idle);
}

#[test]
fn test_enter_without_results_searches_typed_text() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);

    search.on_text_change("  golf  ");
    let route = search.on_key_down(SearchKey::Enter);

    match route {
        Some(Route::ListingSearch { search: text, .. }) => assert_eq!(text, "golf"),
        other => panic!("Expected listing search, got {:?}", other),
    }
    assert_eq!(search.snapshot(), &InputState::default());
    assert!(!search.is_busy());
}

#[test]
fn test_enter_on_blank_text_does_nothing() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);

    search.on_text_change("  ");
    let before = search.snapshot().clone();
    let route = search.on_key_down(SearchKey::Enter);

    assert_eq!(route, None);
    assert!(search.navigator().is_empty());
    assert_eq!(search.snapshot(), &before);
}

#[test]
fn test_repeated_search_is_not_a_noop() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);

    search.on_text_change("audi");
    let first = search.on_key_down(SearchKey::Enter);
    search.on_text_change("audi");
    let second = search.on_key_down(SearchKey::Enter);

    assert!(first.is_some());
    assert_ne!(first, second);
}

#[test]
fn test_escape_then_focus_reopens_without_query() {
    let source = ScriptedSource::new().listings("bmw", Reply::ok(listing_payload(2)));
    let mut search = controller(&source);
    type_and_settle(&mut search, "bmw");
    let calls_before = source.calls().len();

    search.on_key_down(SearchKey::Escape);
    assert!(!search.snapshot().is_open);
    assert_eq!(search.snapshot().text, "bmw");

    search.on_focus();
    assert!(search.snapshot().is_open);
    assert_eq!(search.snapshot().suggestions.len(), 2);
    assert!(!search.is_busy());
    assert_eq!(source.calls().len(), calls_before);
}

#[test]
fn test_blur_outside_closes_keeping_text() {
    let source = ScriptedSource::new().listings("bmw", Reply::ok(listing_payload(2)));
    let mut search = controller(&source);
    type_and_settle(&mut search, "bmw");
    search.on_key_down(SearchKey::Down);

    search.on_blur_outside();

    assert!(!search.snapshot().is_open);
    assert_eq!(search.snapshot().selected_index, None);
    assert_eq!(search.snapshot().text, "bmw");
}

#[test]
fn test_next_deadline_tracks_debounce() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);
    let start = Instant::now();

    assert_eq!(search.next_deadline_at(start), None);

    search.on_text_change_at("bmw", start);
    assert_eq!(
        search.next_deadline_at(start + Duration::from_millis(200)),
        Some(Duration::from_millis(300))
    );
}

#[test]
fn test_shutdown_stops_pending_work() {
    let source = ScriptedSource::new();
    let mut search = controller(&source);
    let start = Instant::now();

    search.on_text_change_at("bmw", start);
    search.shutdown();
    search.tick_at(start + Duration::from_secs(1));

    assert!(source.calls().is_empty());
}
