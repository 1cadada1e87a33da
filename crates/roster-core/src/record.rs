//! Record model: role assignments listed in the master view

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque identity of a record in the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Period during which a role assignment is valid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    pub start: NaiveDate,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

impl ValidityWindow {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Format as `start - end`, or `start -` for open-ended windows
    pub fn date_range(&self, format: &str) -> String {
        let start = self.start.format(format);
        match self.end {
            Some(end) => format!("{} - {}", start, end.format(format)),
            None => format!("{} -", start),
        }
    }

    /// Status of the assignment as seen on `today`
    pub fn status_on(&self, today: NaiveDate) -> RoleStatus {
        match self.end {
            None => RoleStatus::Ongoing,
            Some(end) if end > today => RoleStatus::Active,
            Some(_) => RoleStatus::Completed,
        }
    }
}

/// Lifecycle status shown next to each role in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoleStatus {
    /// No end date
    Ongoing,
    /// End date in the future
    Active,
    /// End date today or earlier
    Completed,
}

impl RoleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RoleStatus::Ongoing => "Ongoing",
            RoleStatus::Active => "Active",
            RoleStatus::Completed => "Completed",
        }
    }
}

/// A selectable role assignment.
///
/// `active` marks the record currently disclosed in the primary panel and is
/// view-scoped, so it is never read from or written to fixtures. `selected`
/// marks membership in a multi-select batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub window: ValidityWindow,
    /// Utilization percentage (0-100)
    #[serde(default)]
    pub utilization: Option<u8>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub head_office: bool,
    #[serde(default)]
    pub team_lead: bool,
    #[serde(skip)]
    pub active: bool,
    #[serde(default)]
    pub selected: bool,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, window: ValidityWindow) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            window,
            utilization: None,
            reason: None,
            head_office: false,
            team_lead: false,
            active: false,
            selected: false,
        }
    }

    pub fn with_utilization(mut self, utilization: u8) -> Self {
        self.utilization = Some(utilization);
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn status_on(&self, today: NaiveDate) -> RoleStatus {
        self.window.status_on(today)
    }
}

/// The person whose role assignments are listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub personal_number: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "Active".to_string()
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Uppercased first letters of first and last name
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Default for Employee {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            personal_number: String::new(),
            status: default_status(),
        }
    }
}
