//! Key event handlers for different UI modes

use crate::disclosure::DismissTrigger;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::ConfirmRemoval => handle_key_confirm_removal(state, key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

fn handle_key_confirm_removal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') => Some(Message::ConfirmRemoval),
        InputKey::Enter => state
            .confirm_dialog_state
            .as_ref()
            .and_then(|dialog| dialog.chosen()),
        InputKey::Tab | InputKey::BackTab | InputKey::Left | InputKey::Right => {
            Some(Message::DialogNext)
        }
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelRemoval),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let disclosure = state.coordinator.state();
    let form_open = state.form.is_open();

    match key {
        // Quit
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // List navigation
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::CursorTop),
        InputKey::End | InputKey::Char('G') => Some(Message::CursorBottom),
        InputKey::Enter => Some(Message::ActivateCursorRow),
        InputKey::Char(' ') => Some(Message::ToggleCursorRow),

        // Panels
        InputKey::Char('e') if disclosure.primary_panel_open() => {
            if disclosure.nested_panel_open() {
                Some(Message::DismissNested)
            } else {
                Some(Message::RevealNested)
            }
        }
        InputKey::Esc => Some(Message::Escape),
        InputKey::Char('x') if disclosure.primary_panel_open() => {
            Some(Message::DismissPrimary(DismissTrigger::CloseButton))
        }

        // Form
        InputKey::Char('s') if form_open => Some(Message::Save),
        InputKey::Char('c') if form_open => Some(Message::Cancel),
        InputKey::Tab if form_open => Some(Message::FocusNextField),
        InputKey::BackTab if form_open => Some(Message::FocusPrevField),
        InputKey::Right | InputKey::Char('+') if form_open => Some(Message::AdjustField(1)),
        InputKey::Left | InputKey::Char('-') if form_open => Some(Message::AdjustField(-1)),
        InputKey::Delete | InputKey::Backspace if form_open => Some(Message::ClearField),

        // Toolbar
        InputKey::Char('m') => Some(Message::CycleSelectionMode),
        InputKey::Char('d') => Some(Message::RequestRemoval),
        InputKey::Char('a') => Some(Message::AddRecord),

        _ => None,
    }
}
