//! Main update function - handles state transitions (TEA pattern)

use roster_core::prelude::*;
use roster_core::{FormField, RecordId};

use crate::confirm_dialog::ConfirmDialogState;
use crate::disclosure::{DismissTrigger, Transition};
use crate::message::Message;
use crate::selection::SelectionMode;
use crate::state::{AppPhase, AppState, NotificationLevel, UiMode};

use super::{form, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message, the coordinator transition and any
/// error the coordinator reported
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::DialogNext => {
            if let Some(dialog) = &mut state.confirm_dialog_state {
                dialog.select_next();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // List Navigation
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
            UpdateResult::none()
        }
        Message::CursorDown => {
            let len = state.records().len();
            if state.cursor + 1 < len {
                state.cursor += 1;
            }
            UpdateResult::none()
        }
        Message::CursorTop => {
            state.cursor = 0;
            UpdateResult::none()
        }
        Message::CursorBottom => {
            state.cursor = state.records().len().saturating_sub(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Disclosure Messages
        // ─────────────────────────────────────────────────────────
        Message::ActivateRow(id) => {
            move_cursor_to(state, &id);
            let result = state.coordinator.row_activated(&id);
            finish(state, result)
        }
        Message::ActivateCursorRow => match state.cursor_record_id() {
            Some(id) => UpdateResult::message(Message::ActivateRow(id)),
            None => UpdateResult::none(),
        },
        Message::ToggleChecked(id) => {
            move_cursor_to(state, &id);
            let result = state.coordinator.toggle_checked(&id);
            finish(state, result)
        }
        Message::ToggleCursorRow => match state.cursor_record_id() {
            Some(id) => UpdateResult::message(Message::ToggleChecked(id)),
            None => UpdateResult::none(),
        },
        Message::DismissPrimary(trigger) => {
            let transition = state.coordinator.dismiss_primary(trigger);
            finish(state, Ok(transition))
        }
        Message::RevealNested => {
            let result = state.coordinator.reveal_nested();
            finish(state, result)
        }
        Message::DismissNested => {
            let transition = state.coordinator.dismiss_nested();
            finish(state, Ok(transition))
        }
        Message::Escape => {
            let disclosure = state.coordinator.state();
            if disclosure.nested_panel_open() {
                UpdateResult::message(Message::DismissNested)
            } else if disclosure.primary_panel_open() {
                UpdateResult::message(Message::DismissPrimary(DismissTrigger::Escape))
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::Save => handle_save(state),
        Message::Cancel => {
            if !state.coordinator.state().primary_panel_open() {
                return UpdateResult::none();
            }
            let transition = state.coordinator.dismiss_primary(DismissTrigger::Cancel);
            state.notify(NotificationLevel::Info, "Changes cancelled");
            finish(state, Ok(transition))
        }
        Message::FocusNextField => {
            if let Some(focus) = state.form.focus {
                state.form.focus = Some(focus.next());
            }
            UpdateResult::none()
        }
        Message::FocusPrevField => {
            if let Some(focus) = state.form.focus {
                state.form.focus = Some(focus.prev());
            }
            UpdateResult::none()
        }
        Message::AdjustField(delta) => {
            if let Some(field) = state.form.focus {
                form::adjust_field(
                    &mut state.form.draft,
                    field,
                    delta,
                    state.settings.ui.utilization_step,
                    &state.reasons,
                    state.today,
                );
                state.form.error = None;
            }
            UpdateResult::none()
        }
        Message::ClearField => {
            if let Some(field) = state.form.focus {
                form::clear_field(&mut state.form.draft, field);
                state.form.error = None;
            }
            UpdateResult::none()
        }
        Message::SetDraftDate { field, value } => {
            if state.form.is_open() {
                match field {
                    FormField::Start => state.form.draft.start = value,
                    FormField::End => state.form.draft.end = value,
                    other => warn!("SetDraftDate ignored for non-date field {:?}", other),
                }
                state.form.error = None;
            }
            UpdateResult::none()
        }
        Message::SetDraftUtilization(value) => {
            if state.form.is_open() {
                state.form.draft.utilization = value;
                state.form.error = None;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Selection / Removal Messages
        // ─────────────────────────────────────────────────────────
        Message::SetSelectionMode(mode) => {
            let transition = state.coordinator.set_selection_mode(mode);
            state.notify(
                NotificationLevel::Info,
                format!("Selection mode: {}", mode.label()),
            );
            finish(state, Ok(transition))
        }
        Message::CycleSelectionMode => {
            let next: SelectionMode = state.coordinator.mode().toggle();
            UpdateResult::message(Message::SetSelectionMode(next))
        }
        Message::RequestRemoval => handle_request_removal(state),
        Message::ConfirmRemoval => {
            let Some(request) = state.pending_removal.take() else {
                state.close_dialog();
                return UpdateResult::none();
            };
            let transition = state.coordinator.confirm_removal(&request);
            state.close_dialog();
            state.notify(
                NotificationLevel::Success,
                format!("Removed {} role(s)", request.count()),
            );
            finish(state, Ok(transition))
        }
        Message::CancelRemoval => {
            state.pending_removal = None;
            state.close_dialog();
            UpdateResult::none()
        }
        Message::AddRecord => {
            state.notify(
                NotificationLevel::Info,
                "Add role is not available in this demo",
            );
            UpdateResult::none()
        }
    }
}

fn move_cursor_to(state: &mut AppState, id: &RecordId) {
    if let Some(idx) = state.records().iter().position(|r| &r.id == id) {
        state.cursor = idx;
    }
}

/// Apply a coordinator result to state
fn finish(state: &mut AppState, result: Result<Transition>) -> UpdateResult {
    match result {
        Ok(transition) => {
            state.apply_transition(&transition);
            UpdateResult::transition(transition)
        }
        Err(e) => {
            if e.is_fatal() {
                error!("Coordinator rejected operation: {}", e);
            } else {
                warn!("Operation failed: {}", e);
            }
            state.notify(NotificationLevel::Error, e.to_string());
            UpdateResult::error(e)
        }
    }
}

fn handle_save(state: &mut AppState) -> UpdateResult {
    if !state.form.is_open() {
        return UpdateResult::error(Error::invalid_state("commit", "no record is disclosed"));
    }

    let draft = state.form.draft.clone();
    match state.coordinator.commit_draft(&draft) {
        Ok(transition) => {
            state.apply_transition(&transition);
            state.notify(NotificationLevel::Success, "Role saved");
            UpdateResult::transition(transition)
        }
        Err(e) => {
            if let Some(field) = e.focus_field() {
                state.form.focus = Some(field);
                state.form.error = Some(e.to_string());
                debug!("Validation failed on {:?}: {}", field, e);
            } else {
                warn!("Save failed: {}", e);
            }
            state.notify(NotificationLevel::Error, e.to_string());
            UpdateResult::error(e)
        }
    }
}

fn handle_request_removal(state: &mut AppState) -> UpdateResult {
    let Some(request) = state.coordinator.prepare_removal() else {
        state.notify(NotificationLevel::Info, "No roles selected");
        return UpdateResult::none();
    };
    debug!("{}", request.summary());

    if state.settings.behavior.confirm_removal {
        state.confirm_dialog_state = Some(ConfirmDialogState::removal_confirmation(&request));
        state.pending_removal = Some(request);
        state.ui_mode = UiMode::ConfirmRemoval;
        UpdateResult::none()
    } else {
        state.pending_removal = Some(request);
        UpdateResult::message(Message::ConfirmRemoval)
    }
}
