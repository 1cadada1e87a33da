//! Disclosure coordinator: which panels are open and which record drives them
//!
//! The panel pair is a small state machine:
//!
//! ```text
//! Closed ──select──▶ PrimaryOnly ──reveal_nested──▶ PrimaryAndNested
//!   ▲                   │   ▲                            │
//!   │                   │   └──────dismiss_nested────────┘
//!   └──dismiss_primary / commit (from either open state)──┘
//! ```
//!
//! Every transition returns a [`Transition`] listing the directives the
//! shell must apply and the rows whose rendering went stale.

use std::fmt;

use roster_core::prelude::*;
use roster_core::{Record, RecordId, RoleDraft, SaveError, ValidationError};
use serde::Serialize;

use crate::content::{PanelContent, PanelContentProvider};
use crate::selection::SelectionMode;
use crate::store::RecordStore;

/// Coarse phase of the panel pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelPhase {
    #[default]
    Closed,
    PrimaryOnly,
    PrimaryAndNested,
}

/// Visibility of the primary and nested panels plus the active record.
///
/// Each variant carries exactly what it needs, so the nesting invariants
/// (nested implies primary, primary implies an active record, closed implies
/// neither) cannot be violated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisclosureState {
    #[default]
    Closed,
    PrimaryOnly(RecordId),
    PrimaryAndNested(RecordId),
}

impl DisclosureState {
    pub fn active_record_id(&self) -> Option<&RecordId> {
        match self {
            DisclosureState::Closed => None,
            DisclosureState::PrimaryOnly(id) | DisclosureState::PrimaryAndNested(id) => Some(id),
        }
    }

    pub fn primary_panel_open(&self) -> bool {
        !matches!(self, DisclosureState::Closed)
    }

    pub fn nested_panel_open(&self) -> bool {
        matches!(self, DisclosureState::PrimaryAndNested(_))
    }

    pub fn phase(&self) -> PanelPhase {
        match self {
            DisclosureState::Closed => PanelPhase::Closed,
            DisclosureState::PrimaryOnly(_) => PanelPhase::PrimaryOnly,
            DisclosureState::PrimaryAndNested(_) => PanelPhase::PrimaryAndNested,
        }
    }

    pub fn snapshot(&self) -> DisclosureSnapshot {
        DisclosureSnapshot {
            phase: self.phase(),
            active_record_id: self.active_record_id().cloned(),
            primary_panel_open: self.primary_panel_open(),
            nested_panel_open: self.nested_panel_open(),
        }
    }
}

/// Flat, serializable view of a [`DisclosureState`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosureSnapshot {
    pub phase: PanelPhase,
    pub active_record_id: Option<RecordId>,
    pub primary_panel_open: bool,
    pub nested_panel_open: bool,
}

/// What caused the primary panel to close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    Escape,
    Cancel,
    Commit,
    Removal,
}

/// Instruction for the presentation shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum ShellDirective {
    ShowPrimary { content: PanelContent },
    HidePrimary,
    ShowNested { content: PanelContent },
    HideNested,
    SetRemoveEnabled { enabled: bool },
    RemoveRows { ids: Vec<RecordId> },
}

/// Outcome of a coordinator operation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Transition {
    pub directives: Vec<ShellDirective>,
    /// Rows whose active/selected marker changed; only these need a redraw
    pub dirty_rows: Vec<RecordId>,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.directives.is_empty() && self.dirty_rows.is_empty()
    }

    pub fn push(&mut self, directive: ShellDirective) {
        self.directives.push(directive);
    }

    pub fn mark_dirty(&mut self, id: &RecordId) {
        if !self.dirty_rows.contains(id) {
            self.dirty_rows.push(id.clone());
        }
    }

    /// Append `other`, keeping directive order and de-duplicating dirty rows
    pub fn merge(&mut self, other: Transition) {
        self.directives.extend(other.directives);
        for id in &other.dirty_rows {
            self.mark_dirty(id);
        }
    }
}

/// Single writer of disclosure state and of the store's active/selected flags
pub struct DisclosureCoordinator {
    pub(crate) state: DisclosureState,
    pub(crate) mode: SelectionMode,
    pub(crate) store: Box<dyn RecordStore>,
    provider: Box<dyn PanelContentProvider>,
}

impl fmt::Debug for DisclosureCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureCoordinator")
            .field("state", &self.state)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl DisclosureCoordinator {
    pub fn new(
        store: Box<dyn RecordStore>,
        provider: Box<dyn PanelContentProvider>,
        mode: SelectionMode,
    ) -> Self {
        let mut coordinator = Self {
            state: DisclosureState::Closed,
            mode,
            store,
            provider,
        };
        // Single mode never starts with a selection it did not disclose
        if mode == SelectionMode::Single {
            for id in coordinator.store.selected_ids() {
                coordinator.store.set_selected(&id, false);
            }
        }
        coordinator
    }

    pub fn state(&self) -> &DisclosureState {
        &self.state
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Read-only access for rendering
    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn records(&self) -> Vec<Record> {
        self.store.list()
    }

    /// The disclosed record, if any
    pub fn active_record(&self) -> Option<Record> {
        self.state
            .active_record_id()
            .and_then(|id| self.store.get(id))
    }

    fn require_record(&self, id: &RecordId) -> Result<Record> {
        self.store
            .get(id)
            .ok_or_else(|| Error::unknown_record(id.clone()))
    }

    /// Disclose `id` in the primary panel.
    ///
    /// Closes the nested panel when the active record changes. Reselecting
    /// the active record only rebuilds the primary content.
    pub fn select_record(&mut self, id: &RecordId) -> Result<Transition> {
        let record = self.require_record(id)?;
        let mut transition = Transition::none();

        let previous = self.state.active_record_id().cloned();
        if previous.as_ref() == Some(id) {
            debug!("Reselected active record {}, refreshing content", id);
            transition.push(ShellDirective::ShowPrimary {
                content: self.provider.build_primary(&record),
            });
            return Ok(transition);
        }

        if let Some(prev) = &previous {
            self.store.set_active(prev, false);
            transition.mark_dirty(prev);
        }
        let nested_was_open = self.state.nested_panel_open();

        self.store.set_active(id, true);
        transition.mark_dirty(id);
        self.state = DisclosureState::PrimaryOnly(id.clone());

        if nested_was_open {
            transition.push(ShellDirective::HideNested);
        }
        transition.push(ShellDirective::ShowPrimary {
            content: self.provider.build_primary(&record),
        });

        info!("Disclosed record {} (previous: {:?})", id, previous);
        Ok(transition)
    }

    /// Close both panels and clear the active record. No-op when closed.
    ///
    /// Single mode also drops the record from the selection.
    pub fn dismiss_primary(&mut self, trigger: DismissTrigger) -> Transition {
        let mut transition = Transition::none();
        let Some(previous) = self.state.active_record_id().cloned() else {
            trace!("dismiss_primary({:?}) ignored, already closed", trigger);
            return transition;
        };

        if self.state.nested_panel_open() {
            transition.push(ShellDirective::HideNested);
        }
        transition.push(ShellDirective::HidePrimary);

        self.state = DisclosureState::Closed;
        self.store.set_active(&previous, false);
        transition.mark_dirty(&previous);

        // In single mode the selection is the disclosed row
        if self.mode == SelectionMode::Single {
            self.store.set_selected(&previous, false);
            transition.push(self.remove_enabled_directive());
        }

        info!("Closed primary panel for {} ({:?})", previous, trigger);
        transition
    }

    /// Open the nested panel on top of the primary one.
    ///
    /// Calling this without an open primary panel is a caller bug and
    /// returns [`Error::InvalidState`].
    pub fn reveal_nested(&mut self) -> Result<Transition> {
        let id = match &self.state {
            DisclosureState::Closed => {
                return Err(Error::invalid_state(
                    "reveal_nested",
                    "primary panel is not open",
                ))
            }
            DisclosureState::PrimaryOnly(id) | DisclosureState::PrimaryAndNested(id) => id.clone(),
        };
        let record = self.require_record(&id)?;

        self.state = DisclosureState::PrimaryAndNested(id.clone());
        debug!("Revealed nested panel for {}", id);

        let mut transition = Transition::none();
        transition.push(ShellDirective::ShowNested {
            content: self.provider.build_nested(&record),
        });
        Ok(transition)
    }

    /// Close only the nested panel. No-op when it is not open.
    pub fn dismiss_nested(&mut self) -> Transition {
        let mut transition = Transition::none();
        if let DisclosureState::PrimaryAndNested(id) = &self.state {
            debug!("Dismissed nested panel for {}", id);
            self.state = DisclosureState::PrimaryOnly(id.clone());
            transition.push(ShellDirective::HideNested);
        }
        transition
    }

    /// Validate, persist the active record, then close like
    /// [`dismiss_primary`](Self::dismiss_primary).
    ///
    /// Validation and save failures leave the disclosure state untouched so
    /// the user can fix the form and retry.
    pub fn commit<F>(&mut self, validate: F) -> Result<Transition>
    where
        F: FnOnce() -> std::result::Result<(), Vec<ValidationError>>,
    {
        let id = self.open_record_id("commit")?;
        validate().map_err(Error::Validation)?;

        let record = self
            .store
            .get(&id)
            .ok_or_else(|| SaveError::NotFound(id.clone()))?;
        self.persist(&record)
    }

    /// Form-level commit: run the validation gate on `draft`, copy it onto
    /// the active record and persist.
    pub fn commit_draft(&mut self, draft: &RoleDraft) -> Result<Transition> {
        let id = self.open_record_id("commit")?;
        let record = self
            .store
            .get(&id)
            .ok_or_else(|| SaveError::NotFound(id.clone()))?;
        let updated = draft.apply_to(&record).map_err(Error::Validation)?;
        self.persist(&updated)
    }

    fn open_record_id(&self, operation: &'static str) -> Result<RecordId> {
        self.state
            .active_record_id()
            .cloned()
            .ok_or_else(|| Error::invalid_state(operation, "no record is disclosed"))
    }

    fn persist(&mut self, record: &Record) -> Result<Transition> {
        if let Err(e) = self.store.save(record) {
            warn!("Saving record {} failed: {}", record.id, e);
            return Err(e.into());
        }
        info!("Saved record {}", record.id);
        Ok(self.dismiss_primary(DismissTrigger::Commit))
    }
}
