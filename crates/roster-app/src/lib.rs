//! roster-app - Disclosure coordination and application state for Roster
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management.
//! The [`DisclosureCoordinator`] is the only writer of panel visibility and of the
//! record store's active/selected flags; shells (the terminal UI and the headless
//! runner) turn raw input into [`Message`]s, feed them through [`handler::update`],
//! and apply the [`Transition`]s that come back.

pub mod config;
pub mod confirm_dialog;
pub mod content;
pub mod disclosure;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod selection;
pub mod state;
pub mod store;

// Re-export primary types
pub use content::{Facet, PanelContent, PanelContentProvider, PanelSection, RolePanelProvider};
pub use disclosure::{
    DisclosureCoordinator, DisclosureSnapshot, DisclosureState, DismissTrigger, PanelPhase,
    ShellDirective, Transition,
};
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use process::{process_message, Processed};
pub use selection::{RemovalRequest, SelectionMode};
pub use state::{AppPhase, AppState, FormState, Notification, NotificationLevel, PanelView, UiMode};
pub use store::{InMemoryRecordStore, RecordStore};
