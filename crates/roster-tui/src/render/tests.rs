//! Full-screen rendering tests

use super::view;
use crate::test_utils::{create_test_state, TestTerminal};
use roster_app::{process_message, AppState, Message, SelectionMode};
use roster_core::RecordId;

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn id(s: &str) -> RecordId {
    RecordId::new(s)
}

#[test]
fn test_initial_screen_shows_header_toolbar_and_list() {
    let state = create_test_state(SelectionMode::Multi);
    let term = render_screen(&state);

    assert!(term.buffer_contains("Altan Sadik"));
    assert!(term.buffer_contains("Assigned roles (3)"));
    assert!(term.buffer_contains("Product Owner"));
    assert!(term.buffer_contains("QA Engineer"));
    assert!(!term.buffer_contains(" Role "));
}

#[test]
fn test_activating_row_opens_primary_panel() {
    let mut state = create_test_state(SelectionMode::Multi);
    process_message(&mut state, Message::ActivateRow(id("r2")));
    let term = render_screen(&state);

    assert!(term.buffer_contains(" Role "));
    assert!(term.buffer_contains("Start date"));
    assert!(!term.buffer_contains(" Details "));
}

#[test]
fn test_nested_panel_renders_beside_primary() {
    let mut state = create_test_state(SelectionMode::Multi);
    process_message(&mut state, Message::ActivateRow(id("r1")));
    process_message(&mut state, Message::RevealNested);
    let term = render_screen(&state);

    assert!(term.buffer_contains(" Role "));
    assert!(term.buffer_contains(" Details "));

    let line = term.find_line(" Role ").expect("primary title row");
    assert!(term.line_contains(line, " Details "));
}

#[test]
fn test_dismiss_closes_panels() {
    let mut state = create_test_state(SelectionMode::Multi);
    process_message(&mut state, Message::ActivateRow(id("r1")));
    process_message(&mut state, Message::RevealNested);
    process_message(&mut state, Message::DismissNested);
    process_message(&mut state, Message::Escape);
    let term = render_screen(&state);

    assert!(!term.buffer_contains(" Role "));
    assert!(!term.buffer_contains(" Details "));
}

#[test]
fn test_removal_dialog_overlays_screen() {
    let mut state = create_test_state(SelectionMode::Multi);
    process_message(&mut state, Message::ToggleChecked(id("r3")));
    process_message(&mut state, Message::RequestRemoval);
    let term = render_screen(&state);

    assert!(term.buffer_contains("Remove role?"));
    assert!(term.buffer_contains("QA Engineer"));
}

#[test]
fn test_single_mode_list_has_no_checkboxes() {
    let state = create_test_state(SelectionMode::Single);
    let term = render_screen(&state);
    assert!(!term.buffer_contains("[ ]"));
    assert!(term.buffer_contains("Mode: single"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut state = create_test_state(SelectionMode::Multi);
    process_message(&mut state, Message::ActivateRow(id("r1")));
    process_message(&mut state, Message::RevealNested);

    let mut term = TestTerminal::with_size(20, 8);
    term.draw_with(|frame| view(frame, &state));
}
