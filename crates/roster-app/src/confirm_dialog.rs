//! Confirmation dialog state (removal and quit confirmation)

use crate::message::Message;
use crate::selection::RemovalRequest;

/// State for a modal yes/no dialog
#[derive(Debug, Clone)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub options: Vec<(String, Message)>,
    /// Index of the highlighted option
    pub selected: usize,
}

impl ConfirmDialogState {
    /// Create a generic confirmation dialog
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        options: Vec<(&str, Message)>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options: options
                .into_iter()
                .map(|(label, msg)| (label.to_string(), msg))
                .collect(),
            selected: 0,
        }
    }

    /// Dialog asking whether to remove the records in `request`
    pub fn removal_confirmation(request: &RemovalRequest) -> Self {
        let title = if request.count() == 1 {
            "Remove role?".to_string()
        } else {
            format!("Remove {} roles?", request.count())
        };
        Self::new(
            title,
            request.summary(),
            vec![
                ("Remove", Message::ConfirmRemoval),
                ("Cancel", Message::CancelRemoval),
            ],
        )
    }

    /// Create a quit confirmation dialog state
    pub fn quit_confirmation(unsaved_form: bool) -> Self {
        Self::new(
            "Quit Roster?",
            if unsaved_form {
                "The open role has unsaved changes."
            } else {
                "Do you want to quit?"
            },
            vec![("Quit", Message::ConfirmQuit), ("Cancel", Message::CancelQuit)],
        )
    }

    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Message bound to the highlighted option
    pub fn chosen(&self) -> Option<Message> {
        self.options.get(self.selected).map(|(_, msg)| msg.clone())
    }
}
