//! Tests for global key handling

use super::*;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app, type_text};

#[test]
fn test_ctrl_c_quits() {
    let mut app = test_app();
    assert!(handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL)
    ));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_q_quits() {
    let mut app = test_app();
    handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn test_plain_q_is_not_global() {
    let mut app = test_app();
    assert!(!handle_global_keys(&mut app, key(KeyCode::Char('q'))));
    assert!(!app.should_quit());
}

#[test]
fn test_ctrl_u_clears_field_and_search() {
    let mut app = test_app();
    type_text(&mut app, "bmw x5");
    assert!(app.search.snapshot().is_loading);

    handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL),
    );

    assert_eq!(app.text(), "");
    assert_eq!(app.search.snapshot(), &crate::search::InputState::default());
    assert!(!app.search.is_busy());
}

#[test]
fn test_ctrl_m_swallowed() {
    let mut app = test_app();
    type_text(&mut app, "bmw");

    assert!(handle_global_keys(
        &mut app,
        key_with_mods(KeyCode::Char('m'), KeyModifiers::CONTROL)
    ));
    assert_eq!(app.text(), "bmw");
}
