//! Headless command parser

use chrono::NaiveDate;
use roster_app::{DismissTrigger, Message, SelectionMode};
use roster_core::{FormField, RecordId};
use thiserror::Error;

/// A parsed stdin command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    /// Feed a message to the coordinator
    Send(Message),
    /// Report the current state without changing it
    State,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Command '{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Invalid value '{value}' for '{command}'")]
    InvalidArgument { command: &'static str, value: String },
}

/// Parse one line of input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<HeadlessCommand>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let msg = match verb {
        "open" => Message::ActivateRow(record_id("open", arg)?),
        "check" => Message::ToggleChecked(record_id("check", arg)?),
        "nested" => Message::RevealNested,
        "close-nested" => Message::DismissNested,
        "close" => Message::DismissPrimary(DismissTrigger::CloseButton),
        "backdrop" => Message::DismissPrimary(DismissTrigger::Backdrop),
        "escape" => Message::Escape,
        "mode" => Message::SetSelectionMode(selection_mode(arg)?),
        "remove" => Message::RequestRemoval,
        "confirm" => Message::ConfirmRemoval,
        "reject" => Message::CancelRemoval,
        "save" => Message::Save,
        "cancel" => Message::Cancel,
        "set" => set_field(arg, words.next())?,
        "state" => return Ok(Some(HeadlessCommand::State)),
        "q" | "quit" => return Ok(Some(HeadlessCommand::Quit)),
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(HeadlessCommand::Send(msg)))
}

fn record_id(command: &'static str, arg: Option<&str>) -> Result<RecordId, CommandError> {
    arg.map(RecordId::from).ok_or(CommandError::MissingArgument {
        command,
        expected: "a record id",
    })
}

fn selection_mode(arg: Option<&str>) -> Result<SelectionMode, CommandError> {
    let value = arg.ok_or(CommandError::MissingArgument {
        command: "mode",
        expected: "single or multi",
    })?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command: "mode",
        value: value.to_string(),
    })
}

fn set_field(field: Option<&str>, value: Option<&str>) -> Result<Message, CommandError> {
    let missing = CommandError::MissingArgument {
        command: "set",
        expected: "a field (start, end, utilization) and a value",
    };
    let (Some(field), Some(value)) = (field, value) else {
        return Err(missing);
    };
    let clear = value == "none";

    match field {
        "start" | "end" => {
            let date = if clear {
                None
            } else {
                Some(NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                    CommandError::InvalidArgument {
                        command: "set",
                        value: value.to_string(),
                    }
                })?)
            };
            let field = if field == "start" {
                FormField::Start
            } else {
                FormField::End
            };
            Ok(Message::SetDraftDate { field, value: date })
        }
        "utilization" => {
            let util = if clear {
                None
            } else {
                Some(
                    value
                        .parse::<i32>()
                        .map_err(|_| CommandError::InvalidArgument {
                            command: "set",
                            value: value.to_string(),
                        })?,
                )
            };
            Ok(Message::SetDraftUtilization(util))
        }
        other => Err(CommandError::InvalidArgument {
            command: "set",
            value: other.to_string(),
        }),
    }
}
