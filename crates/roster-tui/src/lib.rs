//! roster-tui - Terminal UI for Roster
//!
//! This crate provides the ratatui-based presentation shell. It drives an
//! [`roster_app::AppState`] from terminal events and draws the list, the
//! primary and nested panels, and modal dialogs from that state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
