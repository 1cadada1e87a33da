//! Tests to verify the shipped records fixture parses correctly

use std::path::Path;

use chrono::NaiveDate;
use roster_app::config::{load_records, Settings};
use roster_app::{AppState, SelectionMode};
use roster_core::RoleStatus;

fn fixture() -> roster_app::config::RecordsFile {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/records.toml");
    load_records(&path).expect("demo fixture loads")
}

#[test]
fn test_demo_fixture_parses() {
    let file = fixture();
    assert_eq!(file.employee.full_name(), "Altan Sadik");
    assert_eq!(file.records.len(), 4);
    assert_eq!(file.reasons.len(), 4);
    assert!(file.records.iter().all(|r| !r.active && !r.selected));
}

#[test]
fn test_demo_fixture_covers_every_status() {
    let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let statuses: Vec<RoleStatus> = fixture()
        .records
        .iter()
        .map(|r| r.status_on(today))
        .collect();

    assert!(statuses.contains(&RoleStatus::Ongoing));
    assert!(statuses.contains(&RoleStatus::Active));
    assert!(statuses.contains(&RoleStatus::Completed));
}

#[test]
fn test_demo_fixture_builds_state() {
    let state = AppState::from_records(fixture(), Settings::default(), Some(SelectionMode::Single));
    assert_eq!(state.records().len(), 4);
    assert_eq!(state.coordinator.mode(), SelectionMode::Single);
    assert!(!state.view.remove_enabled);
}
