//! Headless mode runner - command loop without the TUI

use std::io::{BufRead, Write};

use roster_app::{process_message, AppState, Message, UiMode};
use roster_core::prelude::*;

use super::{parse_command, HeadlessCommand, HeadlessEvent};

/// Run commands from `input` against `state`, writing events to `out`.
///
/// Stops at `quit` or end of input.
pub fn run_headless(
    state: &mut AppState,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    info!("Roster starting in headless mode");
    state_event(state).emit(out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(HeadlessCommand::Quit)) => {
                info!("Quit requested");
                break;
            }
            Ok(Some(HeadlessCommand::State)) => state_event(state).emit(out)?,
            Ok(Some(HeadlessCommand::Send(message))) => {
                debug!("Headless command: {:?}", message);
                run_message(state, message, out)?;
            }
            Err(e) => {
                warn!("Rejected stdin command {:?}: {}", line.trim(), e);
                HeadlessEvent::command_error(&e).emit(out)?;
            }
        }
    }

    info!("Roster headless mode exiting");
    Ok(())
}

fn run_message(state: &mut AppState, message: Message, out: &mut impl Write) -> Result<()> {
    // No ticks run here, so drop the previous notification explicitly
    state.notification = None;
    let processed = process_message(state, message);

    for directive in processed.transition.directives {
        HeadlessEvent::Directive(directive).emit(out)?;
    }
    for error in &processed.errors {
        HeadlessEvent::error(error).emit(out)?;
    }

    if state.ui_mode == UiMode::ConfirmRemoval {
        if let Some(dialog) = &state.confirm_dialog_state {
            HeadlessEvent::Dialog {
                title: dialog.title.clone(),
                message: dialog.message.clone(),
            }
            .emit(out)?;
        }
    }

    if let Some(note) = &state.notification {
        if processed.errors.is_empty() {
            HeadlessEvent::Notification {
                message: note.message.clone(),
            }
            .emit(out)?;
        }
    }

    state_event(state).emit(out)
}

fn state_event(state: &AppState) -> HeadlessEvent {
    let coordinator = &state.coordinator;
    let selected = coordinator.store().selected_ids();
    HeadlessEvent::State {
        mode: coordinator.mode(),
        remove_enabled: !selected.is_empty(),
        selected,
        records: state.records().len(),
        disclosure: coordinator.state().snapshot(),
    }
}
