//! Message processing
//!
//! Runs a message and every follow-up message it produces through
//! [`handler::update`], collecting what the shell needs to apply.

use roster_core::prelude::*;

use crate::disclosure::Transition;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Combined outcome of a message and its follow-ups
#[derive(Debug, Default)]
pub struct Processed {
    pub transition: Transition,
    pub errors: Vec<Error>,
}

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) -> Processed {
    let mut processed = Processed::default();

    let mut msg = Some(message);
    while let Some(m) = msg {
        trace!("Processing {:?}", m);
        let result = handler::update(state, m);
        processed.transition.merge(result.transition);
        if let Some(error) = result.error {
            processed.errors.push(error);
        }
        msg = result.message;
    }

    processed
}
