//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `form`: Role form field editing

pub(crate) mod form;
pub(crate) mod keys;
pub(crate) mod update;


use roster_core::Error;

use crate::disclosure::Transition;
use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Directives and dirty rows produced by the coordinator
    pub transition: Transition,
    /// Failure reported by the coordinator, already reflected in state
    pub error: Option<Error>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    pub fn transition(transition: Transition) -> Self {
        Self {
            transition,
            ..Self::default()
        }
    }

    pub fn error(error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}
