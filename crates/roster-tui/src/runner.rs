//! Main TUI runner - entry point and event loop

use roster_app::{process_message, AppState};
use roster_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI over `state` until the user quits
pub fn run(state: &mut AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    info!(
        "Roster started with {} role(s) in {} mode",
        state.records().len(),
        state.coordinator.mode()
    );

    let result = run_loop(&mut term, state);

    ratatui::restore();
    info!("Roster stopped");
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            let processed = process_message(state, message);
            for error in &processed.errors {
                debug!("Message produced error: {}", error);
            }
        }
    }

    Ok(())
}
