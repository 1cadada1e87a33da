//! Selection modes and batch removal
//!
//! Selection (membership in a removal batch) and disclosure (which record the
//! primary panel shows) are separate concepts. In single mode they coincide;
//! in multi mode a row click only discloses and the checkbox toggles
//! membership.

use std::fmt;
use std::str::FromStr;

use roster_core::prelude::*;
use roster_core::RecordId;
use serde::{Deserialize, Serialize};

use crate::disclosure::{DisclosureCoordinator, DismissTrigger, ShellDirective, Transition};

/// How row activation affects batch selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    #[default]
    Multi,
}

impl SelectionMode {
    pub fn label(&self) -> &'static str {
        match self {
            SelectionMode::Single => "single",
            SelectionMode::Multi => "multi",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SelectionMode::Single => SelectionMode::Multi,
            SelectionMode::Multi => SelectionMode::Single,
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SelectionMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "singleselect" => Ok(SelectionMode::Single),
            "multi" | "multiselect" => Ok(SelectionMode::Multi),
            other => Err(Error::config(format!("unknown selection mode '{other}'"))),
        }
    }
}

/// Records the user asked to remove, captured before confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalRequest {
    pub ids: Vec<RecordId>,
    pub names: Vec<String>,
}

impl RemovalRequest {
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// "Selected 2 role(s) for removal: A, B"
    pub fn summary(&self) -> String {
        format!(
            "Selected {} role(s) for removal: {}",
            self.count(),
            self.names.join(", ")
        )
    }
}

impl DisclosureCoordinator {
    /// Whether the remove action should be enabled
    pub fn remove_enabled(&self) -> bool {
        !self.store.selected_ids().is_empty()
    }

    pub(crate) fn remove_enabled_directive(&self) -> ShellDirective {
        ShellDirective::SetRemoveEnabled {
            enabled: self.remove_enabled(),
        }
    }

    /// A row was clicked or activated with Enter.
    ///
    /// Single mode replaces the batch with this row before disclosing it.
    /// Multi mode only discloses.
    pub fn row_activated(&mut self, id: &RecordId) -> Result<Transition> {
        if self.store.get(id).is_none() {
            return Err(Error::unknown_record(id.clone()));
        }

        let mut transition = Transition::none();
        if self.mode == SelectionMode::Single {
            for selected in self.store.selected_ids() {
                if &selected != id {
                    self.store.set_selected(&selected, false);
                    transition.mark_dirty(&selected);
                }
            }
            if !self.store.get(id).is_some_and(|r| r.selected) {
                self.store.set_selected(id, true);
                transition.mark_dirty(id);
            }
        }

        transition.merge(self.select_record(id)?);
        transition.push(self.remove_enabled_directive());
        Ok(transition)
    }

    /// The row checkbox was toggled.
    ///
    /// In single mode there is no independent checkbox, so this behaves like
    /// [`row_activated`](Self::row_activated).
    pub fn toggle_checked(&mut self, id: &RecordId) -> Result<Transition> {
        if self.mode == SelectionMode::Single {
            return self.row_activated(id);
        }

        let record = self
            .store
            .get(id)
            .ok_or_else(|| Error::unknown_record(id.clone()))?;
        self.store.set_selected(id, !record.selected);
        debug!(
            "Toggled selection of {} to {}",
            id,
            if record.selected { "off" } else { "on" }
        );

        let mut transition = Transition::none();
        transition.mark_dirty(id);
        transition.push(self.remove_enabled_directive());
        Ok(transition)
    }

    /// Switch selection mode. The current batch is always cleared; the
    /// disclosed record stays open.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) -> Transition {
        let mut transition = Transition::none();
        for id in self.store.selected_ids() {
            self.store.set_selected(&id, false);
            transition.mark_dirty(&id);
        }
        if self.mode != mode {
            info!("Selection mode changed: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        transition.push(ShellDirective::SetRemoveEnabled { enabled: false });
        transition
    }

    /// Capture the current batch for confirmation, or `None` if it is empty
    pub fn prepare_removal(&self) -> Option<RemovalRequest> {
        let ids = self.store.selected_ids();
        if ids.is_empty() {
            return None;
        }
        let names = ids
            .iter()
            .filter_map(|id| self.store.get(id))
            .map(|r| r.name)
            .collect();
        Some(RemovalRequest { ids, names })
    }

    /// Remove every record in `request`.
    ///
    /// When the disclosed record is part of the batch, the panels close first
    /// so no panel ever shows a record that has left the store.
    pub fn confirm_removal(&mut self, request: &RemovalRequest) -> Transition {
        let mut transition = Transition::none();

        let disclosed_in_batch = self
            .state
            .active_record_id()
            .is_some_and(|active| request.ids.contains(active));
        if disclosed_in_batch {
            transition.merge(self.dismiss_primary(DismissTrigger::Removal));
        }

        let removed: Vec<RecordId> = request
            .ids
            .iter()
            .filter(|id| self.store.remove(id).is_some())
            .cloned()
            .collect();

        // Removed rows are gone, not stale
        transition.dirty_rows.retain(|id| !removed.contains(id));

        info!("Removed {} record(s): {:?}", removed.len(), removed);
        transition.push(ShellDirective::RemoveRows { ids: removed });
        transition.push(self.remove_enabled_directive());
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RolePanelProvider;
    use crate::disclosure::{DisclosureState, PanelPhase};
    use crate::store::InMemoryRecordStore;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use roster_core::{Record, ValidityWindow};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn coordinator(mode: SelectionMode) -> DisclosureCoordinator {
        let records = ["r1", "r2", "r3", "r4"]
            .into_iter()
            .map(|id| {
                Record::new(
                    id,
                    format!("Role {id}"),
                    ValidityWindow::new(date(2024, 1, 1), None),
                )
            })
            .collect();
        DisclosureCoordinator::new(
            Box::new(InMemoryRecordStore::new(records)),
            Box::new(RolePanelProvider::with_today("%d.%m.%Y", date(2024, 6, 1))),
            mode,
        )
    }

    fn selected(c: &DisclosureCoordinator) -> Vec<RecordId> {
        c.store().selected_ids()
    }

    #[test]
    fn test_selection_mode_parse_and_toggle() {
        assert_eq!("single".parse::<SelectionMode>().unwrap(), SelectionMode::Single);
        assert_eq!("Multi".parse::<SelectionMode>().unwrap(), SelectionMode::Multi);
        assert!("both".parse::<SelectionMode>().is_err());
        assert_eq!(SelectionMode::Single.toggle(), SelectionMode::Multi);
        assert_eq!(SelectionMode::default(), SelectionMode::Multi);
    }

    #[test]
    fn test_single_mode_selection_follows_disclosure() {
        let mut c = coordinator(SelectionMode::Single);
        c.row_activated(&"r1".into()).unwrap();
        let t = c.row_activated(&"r3".into()).unwrap();

        assert_eq!(selected(&c), vec![RecordId::from("r3")]);
        assert_eq!(c.state().active_record_id(), Some(&RecordId::from("r3")));
        assert!(t.dirty_rows.contains(&RecordId::from("r1")));
        assert!(t.dirty_rows.contains(&RecordId::from("r3")));
        assert_eq!(
            t.directives.last(),
            Some(&ShellDirective::SetRemoveEnabled { enabled: true })
        );
    }

    #[test]
    fn test_single_mode_dismiss_clears_selection() {
        for trigger in [
            DismissTrigger::Escape,
            DismissTrigger::Backdrop,
            DismissTrigger::Cancel,
        ] {
            let mut c = coordinator(SelectionMode::Single);
            c.row_activated(&"r1".into()).unwrap();
            assert!(c.remove_enabled());

            let t = c.dismiss_primary(trigger);

            assert_eq!(c.state(), &DisclosureState::Closed);
            assert!(selected(&c).is_empty());
            assert!(!c.remove_enabled());
            assert_eq!(t.dirty_rows, vec![RecordId::from("r1")]);
            assert_eq!(
                t.directives,
                vec![
                    ShellDirective::HidePrimary,
                    ShellDirective::SetRemoveEnabled { enabled: false },
                ]
            );
        }
    }

    #[test]
    fn test_multi_mode_dismiss_keeps_batch() {
        let mut c = coordinator(SelectionMode::Multi);
        c.row_activated(&"r1".into()).unwrap();
        c.toggle_checked(&"r1".into()).unwrap();

        let t = c.dismiss_primary(DismissTrigger::Escape);

        assert_eq!(selected(&c), vec![RecordId::from("r1")]);
        assert_eq!(t.directives, vec![ShellDirective::HidePrimary]);
    }

    #[test]
    fn test_single_mode_starts_without_preselected_records() {
        let records: Vec<Record> = ["r1", "r2", "r3"]
            .into_iter()
            .map(|id| {
                let mut record = Record::new(
                    id,
                    format!("Role {id}"),
                    ValidityWindow::new(date(2024, 1, 1), None),
                );
                record.selected = true;
                record
            })
            .collect();
        let build = |mode| {
            DisclosureCoordinator::new(
                Box::new(InMemoryRecordStore::new(records.clone())),
                Box::new(RolePanelProvider::with_today("%d.%m.%Y", date(2024, 6, 1))),
                mode,
            )
        };

        let single = build(SelectionMode::Single);
        assert!(selected(&single).is_empty());
        assert!(!single.remove_enabled());

        let multi = build(SelectionMode::Multi);
        assert_eq!(selected(&multi).len(), 3);
    }

    #[test]
    fn test_multi_mode_checkbox_does_not_change_disclosure() {
        let mut c = coordinator(SelectionMode::Multi);
        c.row_activated(&"r1".into()).unwrap();

        c.toggle_checked(&"r2".into()).unwrap();
        c.toggle_checked(&"r4".into()).unwrap();

        assert_eq!(selected(&c), vec![RecordId::from("r2"), RecordId::from("r4")]);
        assert_eq!(c.state().active_record_id(), Some(&RecordId::from("r1")));
        assert!(c.remove_enabled());
    }

    #[test]
    fn test_multi_mode_row_click_leaves_batch_alone() {
        let mut c = coordinator(SelectionMode::Multi);
        c.toggle_checked(&"r2".into()).unwrap();
        c.row_activated(&"r3".into()).unwrap();
        assert_eq!(selected(&c), vec![RecordId::from("r2")]);
        assert_eq!(c.state().active_record_id(), Some(&RecordId::from("r3")));
    }

    #[test]
    fn test_toggle_twice_clears_membership_and_disables_remove() {
        let mut c = coordinator(SelectionMode::Multi);
        c.toggle_checked(&"r2".into()).unwrap();
        let t = c.toggle_checked(&"r2".into()).unwrap();
        assert!(selected(&c).is_empty());
        assert_eq!(
            t.directives,
            vec![ShellDirective::SetRemoveEnabled { enabled: false }]
        );
    }

    #[test]
    fn test_switching_mode_clears_selection_but_keeps_disclosure() {
        let mut c = coordinator(SelectionMode::Multi);
        c.row_activated(&"r1".into()).unwrap();
        c.toggle_checked(&"r2".into()).unwrap();
        c.toggle_checked(&"r3".into()).unwrap();

        let t = c.set_selection_mode(SelectionMode::Single);

        assert!(selected(&c).is_empty());
        assert_eq!(c.mode(), SelectionMode::Single);
        assert_eq!(c.state().active_record_id(), Some(&RecordId::from("r1")));
        assert_eq!(t.dirty_rows, vec![RecordId::from("r2"), RecordId::from("r3")]);
        assert_eq!(
            t.directives,
            vec![ShellDirective::SetRemoveEnabled { enabled: false }]
        );
    }

    #[test]
    fn test_prepare_removal_empty_batch() {
        let c = coordinator(SelectionMode::Multi);
        assert_eq!(c.prepare_removal(), None);
    }

    #[test]
    fn test_removing_disclosed_record_closes_panels_first() {
        let mut c = coordinator(SelectionMode::Multi);
        c.row_activated(&"r2".into()).unwrap();
        c.reveal_nested().unwrap();
        c.toggle_checked(&"r2".into()).unwrap();
        c.toggle_checked(&"r3".into()).unwrap();

        let request = c.prepare_removal().unwrap();
        assert_eq!(request.summary(), "Selected 2 role(s) for removal: Role r2, Role r3");

        let t = c.confirm_removal(&request);

        assert_eq!(c.state(), &DisclosureState::Closed);
        assert_eq!(
            &t.directives[..3],
            &[
                ShellDirective::HideNested,
                ShellDirective::HidePrimary,
                ShellDirective::RemoveRows {
                    ids: vec!["r2".into(), "r3".into()]
                },
            ]
        );
        assert!(t.dirty_rows.is_empty());
        assert!(c.store().get(&"r2".into()).is_none());
        assert_eq!(c.records().len(), 2);
        assert!(!c.remove_enabled());
    }

    #[test]
    fn test_removing_other_records_keeps_disclosure() {
        let mut c = coordinator(SelectionMode::Multi);
        c.row_activated(&"r1".into()).unwrap();
        c.toggle_checked(&"r4".into()).unwrap();

        let request = c.prepare_removal().unwrap();
        let t = c.confirm_removal(&request);

        assert_eq!(c.state().phase(), PanelPhase::PrimaryOnly);
        assert!(!t.directives.contains(&ShellDirective::HidePrimary));
        assert!(c.store().get(&"r1".into()).unwrap().active);
    }

    #[test]
    fn test_row_activated_unknown_record() {
        let mut c = coordinator(SelectionMode::Single);
        assert!(matches!(
            c.row_activated(&"nope".into()),
            Err(Error::UnknownRecord { .. })
        ));
        assert!(selected(&c).is_empty());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Activate(usize),
        Toggle(usize),
        RevealNested,
        DismissNested,
        DismissPrimary,
        SwitchMode,
        Remove,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..5).prop_map(Op::Activate),
            (0usize..5).prop_map(Op::Toggle),
            Just(Op::RevealNested),
            Just(Op::DismissNested),
            Just(Op::DismissPrimary),
            Just(Op::SwitchMode),
            Just(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn prop_disclosure_invariants_hold(
            start_single in any::<bool>(),
            ops in prop::collection::vec(op_strategy(), 0..40),
        ) {
            let start = if start_single { SelectionMode::Single } else { SelectionMode::Multi };
            let mut c = coordinator(start);
            let ids = ["r1", "r2", "r3", "r4", "missing"];

            for op in ops {
                match op {
                    Op::Activate(i) => { let _ = c.row_activated(&ids[i].into()); }
                    Op::Toggle(i) => { let _ = c.toggle_checked(&ids[i].into()); }
                    Op::RevealNested => { let _ = c.reveal_nested(); }
                    Op::DismissNested => { c.dismiss_nested(); }
                    Op::DismissPrimary => { c.dismiss_primary(DismissTrigger::CloseButton); }
                    Op::SwitchMode => { let next = c.mode().toggle(); c.set_selection_mode(next); }
                    Op::Remove => {
                        if let Some(req) = c.prepare_removal() {
                            c.confirm_removal(&req);
                        }
                    }
                }

                let state = c.state();
                // nested implies primary, primary iff active record
                prop_assert!(!state.nested_panel_open() || state.primary_panel_open());
                prop_assert_eq!(state.primary_panel_open(), state.active_record_id().is_some());

                let active: Vec<RecordId> = c
                    .records()
                    .into_iter()
                    .filter(|r| r.active)
                    .map(|r| r.id)
                    .collect();
                prop_assert_eq!(active, state.active_record_id().cloned().into_iter().collect::<Vec<_>>());

                if let Some(id) = state.active_record_id() {
                    prop_assert!(c.store().get(id).is_some());
                }
                prop_assert_eq!(c.remove_enabled(), !c.store().selected_ids().is_empty());
                if c.mode() == SelectionMode::Single {
                    prop_assert!(c.store().selected_ids().len() <= 1);
                    // selection never outlives the disclosure
                    if state.phase() == PanelPhase::Closed {
                        prop_assert!(c.store().selected_ids().is_empty());
                    }
                }
            }
        }
    }
}
