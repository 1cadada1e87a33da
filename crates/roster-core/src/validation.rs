//! Save-time validation gate for the role form
//!
//! Rules run in a fixed order and stop at the first failure, so callers can
//! focus exactly one field:
//! 1. start date present
//! 2. end date present
//! 3. end date not before start date
//! 4. utilization, when given, within 0..=100

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::record::{Record, ValidityWindow};

/// Fields of the role form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Start,
    End,
    Utilization,
    Reason,
    HeadOffice,
    TeamLead,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Start,
        FormField::End,
        FormField::Utilization,
        FormField::Reason,
        FormField::HeadOffice,
        FormField::TeamLead,
    ];

    /// Stable key used in error payloads and the headless protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Start => "start",
            FormField::End => "end",
            FormField::Utilization => "utilization",
            FormField::Reason => "reason",
            FormField::HeadOffice => "head_office",
            FormField::TeamLead => "team_lead",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Start => "Start date",
            FormField::End => "End date",
            FormField::Utilization => "Utilization rate",
            FormField::Reason => "Reason",
            FormField::HeadOffice => "Head office",
            FormField::TeamLead => "Team lead",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A single validation failure, pointing at the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("{} is required", .field.label())]
    MissingRequiredField { field: FormField },

    #[error("End date must be after start date")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Utilization rate must be between 0 and 100")]
    OutOfBounds { value: i32 },
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            ValidationError::MissingRequiredField { field } => *field,
            ValidationError::InvalidRange { .. } => FormField::End,
            ValidationError::OutOfBounds { .. } => FormField::Utilization,
        }
    }
}

/// Form-level copy of a record's editable fields.
///
/// Values may be missing or out of range while the user edits; only
/// [`validate_draft`] decides whether they can reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RoleDraft {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub utilization: Option<i32>,
    pub reason: Option<String>,
    pub head_office: bool,
    pub team_lead: bool,
}

impl RoleDraft {
    pub fn from_record(record: &Record) -> Self {
        Self {
            start: Some(record.window.start),
            end: record.window.end,
            utilization: record.utilization.map(i32::from),
            reason: record.reason.clone(),
            head_office: record.head_office,
            team_lead: record.team_lead,
        }
    }

    /// Copy the draft onto `record`.
    ///
    /// Returns the validation errors instead when the draft does not pass
    /// the gate. A missing utilization is stored as 0.
    pub fn apply_to(&self, record: &Record) -> Result<Record, Vec<ValidationError>> {
        validate_draft(self)?;
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(vec![ValidationError::MissingRequiredField { field: FormField::Start }]);
        };

        let utilization = self.utilization.unwrap_or(0).clamp(0, 100) as u8;
        Ok(Record {
            window: ValidityWindow::new(start, Some(end)),
            utilization: Some(utilization),
            reason: self.reason.clone(),
            head_office: self.head_office,
            team_lead: self.team_lead,
            ..record.clone()
        })
    }
}

/// Run the ordered validation rules against a draft
pub fn validate_draft(draft: &RoleDraft) -> Result<(), Vec<ValidationError>> {
    let Some(start) = draft.start else {
        return Err(vec![ValidationError::MissingRequiredField { field: FormField::Start }]);
    };
    let Some(end) = draft.end else {
        return Err(vec![ValidationError::MissingRequiredField { field: FormField::End }]);
    };
    if end < start {
        return Err(vec![ValidationError::InvalidRange { start, end }]);
    }
    if let Some(value) = draft.utilization {
        if !(0..=100).contains(&value) {
            return Err(vec![ValidationError::OutOfBounds { value }]);
        }
    }
    Ok(())
}
