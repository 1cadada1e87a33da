//! Headless mode - line commands in, JSON events out
//!
//! Reads one command per line and writes NDJSON (newline-delimited JSON)
//! events, one per line, each tagged with an `"event"` field. This drives
//! the same coordinator as the terminal UI without drawing anything.
//!
//! # Example
//!
//! ```text
//! > open r2
//! {"event":"directive","directive":"show_primary","content":{...}}
//! {"event":"state","mode":"multi","selected":[],"remove_enabled":false,...}
//! ```

pub mod command;
pub mod runner;

use std::io::Write;

use roster_app::{DisclosureSnapshot, SelectionMode, ShellDirective};
use roster_core::prelude::*;
use roster_core::RecordId;
use serde::Serialize;

pub use command::{parse_command, CommandError, HeadlessCommand};
pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A directive the coordinator issued to the shell
    Directive(ShellDirective),

    /// Disclosure and selection state after a command
    State {
        mode: SelectionMode,
        selected: Vec<RecordId>,
        remove_enabled: bool,
        records: usize,
        disclosure: DisclosureSnapshot,
    },

    /// A confirmation is pending; answer with `confirm` or `reject`
    Dialog { title: String, message: String },

    /// User-facing notification text
    Notification { message: String },

    /// Rejected command or failed operation
    Error {
        message: String,
        field: Option<&'static str>,
        fatal: bool,
    },
}

impl HeadlessEvent {
    pub fn error(e: &Error) -> Self {
        Self::Error {
            message: e.to_string(),
            field: e.focus_field().map(|f| f.as_str()),
            fatal: e.is_fatal(),
        }
    }

    pub fn command_error(e: &CommandError) -> Self {
        Self::Error {
            message: e.to_string(),
            field: None,
            fatal: false,
        }
    }

    /// Write this event as a single JSON line
    pub fn emit(&self, out: &mut impl Write) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_app::PanelPhase;

    fn emit_to_string(event: &HeadlessEvent) -> String {
        let mut out = Vec::new();
        event.emit(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_directive_event_is_flat() {
        let line = emit_to_string(&HeadlessEvent::Directive(ShellDirective::HideNested));
        assert_eq!(line, "{\"event\":\"directive\",\"directive\":\"hide_nested\"}\n");
    }

    #[test]
    fn test_error_event_carries_field() {
        let err = Error::Validation(vec![roster_core::ValidationError::MissingRequiredField {
            field: roster_core::FormField::End,
        }]);
        let line = emit_to_string(&HeadlessEvent::error(&err));
        assert!(line.contains("\"event\":\"error\""));
        assert!(line.contains("\"field\":\"end\""));
    }

    #[test]
    fn test_state_event_serializes_snapshot() {
        let event = HeadlessEvent::State {
            mode: SelectionMode::Single,
            selected: vec![RecordId::new("r1")],
            remove_enabled: true,
            records: 3,
            disclosure: DisclosureSnapshot {
                phase: PanelPhase::PrimaryOnly,
                active_record_id: Some(RecordId::new("r1")),
                primary_panel_open: true,
                nested_panel_open: false,
            },
        };
        let line = emit_to_string(&event);
        assert!(line.contains("\"mode\":\"single\""));
        assert!(line.contains("\"active_record_id\":\"r1\""));
        assert!(line.contains("\"primary_panel_open\":true"));
    }
}
