//! Message types for the application (TEA pattern)

use chrono::NaiveDate;
use roster_core::{FormField, RecordId};

use crate::disclosure::DismissTrigger;
use crate::input_key::InputKey;
use crate::selection::SelectionMode;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notification expiry)
    Tick,

    /// Request to quit (may show confirmation dialog)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    /// Move the highlight to the next dialog option
    DialogNext,

    // ─────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────
    CursorUp,
    CursorDown,
    CursorTop,
    CursorBottom,

    // ─────────────────────────────────────────────────────────
    // Disclosure Messages
    // ─────────────────────────────────────────────────────────
    /// Row clicked / activated
    ActivateRow(RecordId),
    /// Activate whatever row the cursor is on
    ActivateCursorRow,
    /// Row checkbox toggled
    ToggleChecked(RecordId),
    ToggleCursorRow,
    /// Close the primary panel
    DismissPrimary(DismissTrigger),
    /// Open the nested detail panel
    RevealNested,
    /// Close the nested detail panel
    DismissNested,
    /// Esc: close the innermost open panel
    Escape,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// Validate and persist the open role
    Save,
    /// Discard form edits and close the panels
    Cancel,
    FocusNextField,
    FocusPrevField,
    /// Step the focused field by the given amount
    AdjustField(i32),
    /// Clear the focused field
    ClearField,
    SetDraftDate {
        field: FormField,
        value: Option<NaiveDate>,
    },
    SetDraftUtilization(Option<i32>),

    // ─────────────────────────────────────────────────────────
    // Selection / Removal Messages
    // ─────────────────────────────────────────────────────────
    SetSelectionMode(SelectionMode),
    CycleSelectionMode,
    /// Ask for confirmation to remove the selected batch
    RequestRemoval,
    ConfirmRemoval,
    CancelRemoval,
    /// Add role (not available, shows a notice)
    AddRecord,
}
