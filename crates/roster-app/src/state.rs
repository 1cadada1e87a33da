//! Application state (Model in TEA pattern)

use chrono::NaiveDate;
use roster_core::{Employee, FormField, Record, RecordId, RoleDraft};

use crate::config::{RecordsFile, Settings};
use crate::confirm_dialog::ConfirmDialogState;
use crate::content::{PanelContent, RolePanelProvider};
use crate::disclosure::{DisclosureCoordinator, ShellDirective, Transition};
use crate::selection::{RemovalRequest, SelectionMode};
use crate::store::InMemoryRecordStore;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// List with optional detail panels
    #[default]
    Normal,

    /// Removal confirmation dialog
    ConfirmRemoval,

    /// Quit confirmation dialog
    ConfirmQuit,
}

/// Whether the app is running or shutting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel View
// ─────────────────────────────────────────────────────────────────────────────

/// What the shell currently shows, rebuilt only from [`ShellDirective`]s
#[derive(Debug, Clone, Default)]
pub struct PanelView {
    pub primary: Option<PanelContent>,
    pub nested: Option<PanelContent>,
    pub remove_enabled: bool,
    /// Rows touched by the last transition
    pub dirty_rows: Vec<RecordId>,
}

impl PanelView {
    pub fn apply(&mut self, transition: &Transition) {
        for directive in &transition.directives {
            match directive {
                ShellDirective::ShowPrimary { content } => self.primary = Some(content.clone()),
                ShellDirective::HidePrimary => self.primary = None,
                ShellDirective::ShowNested { content } => self.nested = Some(content.clone()),
                ShellDirective::HideNested => self.nested = None,
                ShellDirective::SetRemoveEnabled { enabled } => self.remove_enabled = *enabled,
                ShellDirective::RemoveRows { .. } => {}
            }
        }
        self.dirty_rows = transition.dirty_rows.clone();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Form State
// ─────────────────────────────────────────────────────────────────────────────

/// Editable copy of the disclosed record
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub record_id: Option<RecordId>,
    pub draft: RoleDraft,
    pub focus: Option<FormField>,
    /// Inline error under the focused field
    pub error: Option<String>,
}

impl FormState {
    /// Load `record` into the form, dropping pending edits
    pub fn load(&mut self, record: &Record) {
        self.record_id = Some(record.id.clone());
        self.draft = RoleDraft::from_record(record);
        self.focus = Some(FormField::Start);
        self.error = None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_open(&self) -> bool {
        self.record_id.is_some()
    }

    /// Whether the draft differs from `record`
    pub fn is_dirty(&self, record: &Record) -> bool {
        self.record_id.as_ref() == Some(&record.id) && self.draft != RoleDraft::from_record(record)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Transient message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Ticks until the notification disappears
    pub ttl: u16,
}

/// Roughly three seconds at the runner's tick rate
const NOTIFICATION_TTL: u16 = 30;

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level,
            ttl: NOTIFICATION_TTL,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode/screen
    pub ui_mode: UiMode,

    /// Owner of disclosure state and the record store
    pub coordinator: DisclosureCoordinator,

    /// Person whose roles are listed
    pub employee: Employee,

    /// Application settings from config file
    pub settings: Settings,

    /// Reasons offered by the form
    pub reasons: Vec<String>,

    /// Index of the highlighted list row
    pub cursor: usize,

    pub view: PanelView,

    pub form: FormState,

    /// Confirmation dialog state
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    /// Batch captured when removal was requested
    pub pending_removal: Option<RemovalRequest>,

    pub notification: Option<Notification>,

    pub phase: AppPhase,

    /// Date used when a cleared date field is stepped
    pub today: NaiveDate,
}

impl AppState {
    pub fn new(
        coordinator: DisclosureCoordinator,
        employee: Employee,
        settings: Settings,
        reasons: Vec<String>,
    ) -> Self {
        let remove_enabled = coordinator.remove_enabled();
        Self {
            ui_mode: UiMode::Normal,
            coordinator,
            employee,
            settings,
            reasons,
            cursor: 0,
            view: PanelView {
                remove_enabled,
                ..PanelView::default()
            },
            form: FormState::default(),
            confirm_dialog_state: None,
            pending_removal: None,
            notification: None,
            phase: AppPhase::Running,
            today: chrono::Local::now().date_naive(),
        }
    }

    /// Build state over an in-memory store holding `file`'s records.
    ///
    /// `mode` overrides the configured default selection mode.
    pub fn from_records(
        file: RecordsFile,
        settings: Settings,
        mode: Option<SelectionMode>,
    ) -> Self {
        let mode = mode.unwrap_or(settings.behavior.default_selection_mode);
        let provider = RolePanelProvider::new(settings.ui.date_format.clone());
        let coordinator = DisclosureCoordinator::new(
            Box::new(InMemoryRecordStore::new(file.records)),
            Box::new(provider),
            mode,
        );
        Self::new(coordinator, file.employee, settings, file.reasons)
    }

    pub fn records(&self) -> Vec<Record> {
        self.coordinator.records()
    }

    /// Record under the list cursor
    pub fn cursor_record_id(&self) -> Option<RecordId> {
        self.records().get(self.cursor).map(|r| r.id.clone())
    }

    /// Apply a coordinator transition to the view, the form and the cursor
    pub fn apply_transition(&mut self, transition: &Transition) {
        self.view.apply(transition);

        for directive in &transition.directives {
            match directive {
                ShellDirective::ShowPrimary { content } => {
                    if let Some(record) = self.coordinator.store().get(&content.record_id) {
                        self.form.load(&record);
                    }
                }
                ShellDirective::HidePrimary => self.form.clear(),
                _ => {}
            }
        }

        let len = self.coordinator.store().list().len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification::new(level, message));
    }

    /// Expire the notification after its ttl
    pub fn tick(&mut self) {
        if let Some(notification) = &mut self.notification {
            notification.ttl = notification.ttl.saturating_sub(1);
            if notification.ttl == 0 {
                self.notification = None;
            }
        }
    }

    /// Request quit, with a confirmation dialog when configured
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            let unsaved = self
                .coordinator
                .active_record()
                .is_some_and(|record| self.form.is_dirty(&record));
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(unsaved));
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.close_dialog();
    }

    pub fn close_dialog(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ValidityWindow;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state() -> AppState {
        let records = vec![
            Record::new("r1", "Product Owner", ValidityWindow::new(date(2024, 1, 1), None)),
            Record::new("r2", "Scrum Master", ValidityWindow::new(date(2024, 2, 1), None)),
        ];
        let file = RecordsFile {
            employee: Employee::default(),
            records,
            reasons: vec!["Good employee".into()],
        };
        AppState::from_records(file, Settings::default(), Some(SelectionMode::Single))
    }

    #[test]
    fn test_from_records_uses_mode_override() {
        let state = state();
        assert_eq!(state.coordinator.mode(), SelectionMode::Single);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(!state.view.remove_enabled);
    }

    #[test]
    fn test_single_mode_drops_fixture_selections() {
        let mut file = RecordsFile::demo(date(2024, 6, 1));
        file.records[0].selected = true;
        file.records[1].selected = true;

        let single =
            AppState::from_records(file.clone(), Settings::default(), Some(SelectionMode::Single));
        assert!(single.coordinator.store().selected_ids().is_empty());
        assert!(!single.view.remove_enabled);

        let multi =
            AppState::from_records(file, Settings::default(), Some(SelectionMode::Multi));
        assert_eq!(multi.coordinator.store().selected_ids().len(), 2);
        assert!(multi.view.remove_enabled);
    }

    #[test]
    fn test_show_primary_loads_form_and_hide_clears_it() {
        let mut state = state();
        let t = state.coordinator.select_record(&"r2".into()).unwrap();
        state.apply_transition(&t);

        assert_eq!(state.form.record_id, Some(RecordId::from("r2")));
        assert_eq!(state.form.draft.start, Some(date(2024, 2, 1)));
        assert_eq!(state.form.focus, Some(FormField::Start));
        assert!(state.view.primary.is_some());

        let t = state
            .coordinator
            .dismiss_primary(crate::disclosure::DismissTrigger::CloseButton);
        state.apply_transition(&t);

        assert!(!state.form.is_open());
        assert!(state.view.primary.is_none());
    }

    #[test]
    fn test_notification_expires_after_ttl() {
        let mut state = state();
        state.notify(NotificationLevel::Success, "Role saved");
        for _ in 0..NOTIFICATION_TTL - 1 {
            state.tick();
        }
        assert!(state.notification.is_some());
        state.tick();
        assert!(state.notification.is_none());
    }

    #[test]
    fn test_request_quit_without_confirmation() {
        let mut state = state();
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_request_quit_with_confirmation() {
        let mut state = state();
        state.settings.behavior.confirm_quit = true;
        state.request_quit();
        assert!(!state.should_quit());
        assert_eq!(state.ui_mode, UiMode::ConfirmQuit);
        state.cancel_quit();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.confirm_dialog_state.is_none());
    }
}
