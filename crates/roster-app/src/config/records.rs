//! Records fixture: the employee and the role assignments listed for them

use std::collections::HashSet;
use std::path::Path;

use chrono::{Days, NaiveDate};
use roster_core::prelude::*;
use roster_core::{Employee, Record, RecordId, ValidityWindow};
use serde::Deserialize;

/// Reasons offered by the form when the fixture does not list its own
pub const DEFAULT_REASONS: &[&str] = &[
    "Good employee",
    "Excellent performance",
    "Team leadership skills",
    "Technical expertise",
    "Project requirements",
];

const DEMO_ROLE_NAMES: &[&str] = &[
    "Product Owner",
    "Scrum Master",
    "UX Designer",
    "UI Designer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "QA Engineer",
    "Test Automation Engineer",
    "Business Analyst",
    "Data Analyst",
    "Data Scientist",
    "ML Engineer",
    "Solution Architect",
    "Technical Lead",
    "Engineering Manager",
    "Project Manager",
];

/// Contents of a records TOML file
///
/// ```toml
/// reasons = ["Good employee", "Technical expertise"]
///
/// [employee]
/// first_name = "Altan"
/// last_name = "Sadik"
/// personal_number = "42786"
///
/// [[record]]
/// id = "1"
/// name = "Product Owner"
/// start = "2024-01-15"
/// end = "2025-06-30"
/// utilization = 80
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsFile {
    #[serde(default)]
    pub employee: Employee,

    #[serde(default, rename = "record")]
    pub records: Vec<Record>,

    #[serde(default = "default_reasons")]
    pub reasons: Vec<String>,
}

fn default_reasons() -> Vec<String> {
    DEFAULT_REASONS.iter().map(|s| s.to_string()).collect()
}

impl RecordsFile {
    /// Built-in sample data used when no fixture exists.
    ///
    /// Deterministic for a given `today`: roles cycle through ongoing, active
    /// and completed windows.
    pub fn demo(today: NaiveDate) -> Self {
        let records = (0..DEMO_ROLE_NAMES.len() as u64 * 2)
            .map(|i| {
                let idx = i as usize;
                let base = DEMO_ROLE_NAMES[idx % DEMO_ROLE_NAMES.len()];
                let name = if idx >= DEMO_ROLE_NAMES.len() {
                    format!("{} {}", base, idx / DEMO_ROLE_NAMES.len() + 1)
                } else {
                    base.to_string()
                };

                let start = today - Days::new(30 + (i * 37) % 1000);
                let end = match i % 3 {
                    0 => None,
                    1 => Some(today + Days::new(14 + (i * 53) % 700)),
                    _ => Some(start + Days::new(1 + (i * 11) % 25)),
                };

                let mut record = Record::new(i + 1, name, ValidityWindow::new(start, end))
                    .with_utilization(10 + ((i * 29) % 91) as u8)
                    .with_reason(DEFAULT_REASONS[idx % DEFAULT_REASONS.len()]);
                record.head_office = i % 4 != 3;
                record.team_lead = i % 5 == 0;
                record
            })
            .collect();

        Self {
            employee: Employee {
                first_name: "Altan".to_string(),
                last_name: "Sadik".to_string(),
                personal_number: "42786".to_string(),
                status: "Active".to_string(),
            },
            records,
            reasons: default_reasons(),
        }
    }

    fn check_unique_ids(&self) -> std::result::Result<(), String> {
        let mut seen: HashSet<&RecordId> = HashSet::new();
        for record in &self.records {
            if !seen.insert(&record.id) {
                return Err(format!("duplicate record id '{}'", record.id));
            }
        }
        Ok(())
    }
}

/// Load and check a records fixture
pub fn load_records(path: &Path) -> Result<RecordsFile> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::records_load(path, e.to_string()))?;

    let mut file: RecordsFile =
        toml::from_str(&content).map_err(|e| Error::records_load(path, e.to_string()))?;
    file.check_unique_ids()
        .map_err(|message| Error::records_load(path, message))?;

    // Fixtures describe data, not view state
    for record in &mut file.records {
        record.active = false;
    }

    info!(
        "Loaded {} record(s) for '{}' from {:?}",
        file.records.len(),
        file.employee.full_name(),
        path
    );
    Ok(file)
}
