//! Panel content: what the primary and nested panels show for a record
//!
//! The coordinator asks a [`PanelContentProvider`] for content whenever a
//! panel opens or is refreshed, and passes it to the shell untouched.

use chrono::NaiveDate;
use roster_core::{Record, RecordId};
use serde::Serialize;

/// A key/value pair rendered as a stacked facet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub key: String,
    pub value: String,
}

impl Facet {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A titled group of facets
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelSection {
    pub heading: String,
    pub facets: Vec<Facet>,
}

/// Materialized content of a single panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelContent {
    pub record_id: RecordId,
    pub title: String,
    pub subtitle: Option<String>,
    pub badges: Vec<String>,
    pub sections: Vec<PanelSection>,
}

/// Builds panel content for the active record
#[cfg_attr(test, mockall::automock)]
pub trait PanelContentProvider {
    fn build_primary(&self, record: &Record) -> PanelContent;
    fn build_nested(&self, record: &Record) -> PanelContent;
}

/// Default provider for role assignments
#[derive(Debug, Clone)]
pub struct RolePanelProvider {
    date_format: String,
    today: NaiveDate,
}

impl RolePanelProvider {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self::with_today(date_format, chrono::Local::now().date_naive())
    }

    /// Provider with a fixed "today", for deterministic status labels
    pub fn with_today(date_format: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            date_format: date_format.into(),
            today,
        }
    }

    fn format_date(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| d.format(&self.date_format).to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl PanelContentProvider for RolePanelProvider {
    fn build_primary(&self, record: &Record) -> PanelContent {
        let mut badges = Vec::new();
        if record.team_lead {
            badges.push("Team lead".to_string());
        }
        if record.head_office {
            badges.push("Head office".to_string());
        }
        badges.push(record.status_on(self.today).label().to_string());

        PanelContent {
            record_id: record.id.clone(),
            title: record.name.clone(),
            subtitle: Some(record.window.date_range(&self.date_format)),
            badges,
            sections: vec![PanelSection {
                heading: "Assignment".to_string(),
                facets: vec![
                    Facet::new("Start", self.format_date(Some(record.window.start))),
                    Facet::new("End", self.format_date(record.window.end)),
                    Facet::new(
                        "Utilization",
                        record
                            .utilization
                            .map(|u| format!("{u}%"))
                            .unwrap_or_else(|| "—".to_string()),
                    ),
                    Facet::new("Reason", record.reason.as_deref().unwrap_or("—")),
                ],
            }],
        }
    }

    fn build_nested(&self, record: &Record) -> PanelContent {
        let remaining = match record.window.end {
            None => "Open-ended".to_string(),
            Some(end) if end > self.today => {
                format!("{} days", (end - self.today).num_days())
            }
            Some(_) => "Ended".to_string(),
        };

        PanelContent {
            record_id: record.id.clone(),
            title: format!("Details: {}", record.name),
            subtitle: None,
            badges: Vec::new(),
            sections: vec![
                PanelSection {
                    heading: "Organisation".to_string(),
                    facets: vec![
                        Facet::new("Head office", yes_no(record.head_office)),
                        Facet::new("Team lead", yes_no(record.team_lead)),
                    ],
                },
                PanelSection {
                    heading: "Validity".to_string(),
                    facets: vec![
                        Facet::new("Status", record.status_on(self.today).label()),
                        Facet::new("Remaining", remaining),
                    ],
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ValidityWindow;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn provider() -> RolePanelProvider {
        RolePanelProvider::with_today("%d.%m.%Y", date(2024, 6, 1))
    }

    #[test]
    fn test_primary_content_for_active_role() {
        let mut record = Record::new(
            "r1",
            "Product Owner",
            ValidityWindow::new(date(2024, 1, 1), Some(date(2024, 12, 31))),
        )
        .with_utilization(75)
        .with_reason("Excellent performance");
        record.team_lead = true;

        let content = provider().build_primary(&record);

        assert_eq!(content.record_id, RecordId::from("r1"));
        assert_eq!(content.title, "Product Owner");
        assert_eq!(content.subtitle.as_deref(), Some("01.01.2024 - 31.12.2024"));
        assert_eq!(content.badges, vec!["Team lead", "Active"]);
        let facets = &content.sections[0].facets;
        assert_eq!(facets[2], Facet::new("Utilization", "75%"));
        assert_eq!(facets[3], Facet::new("Reason", "Excellent performance"));
    }

    #[test]
    fn test_primary_content_placeholders_for_missing_values() {
        let record = Record::new("r2", "Intern", ValidityWindow::new(date(2024, 1, 1), None));
        let content = provider().build_primary(&record);
        let facets = &content.sections[0].facets;
        assert_eq!(facets[1], Facet::new("End", "—"));
        assert_eq!(facets[2], Facet::new("Utilization", "—"));
        assert_eq!(content.badges, vec!["Ongoing"]);
    }

    #[test]
    fn test_nested_content_remaining_days() {
        let record = Record::new(
            "r3",
            "QA Engineer",
            ValidityWindow::new(date(2024, 1, 1), Some(date(2024, 6, 11))),
        );
        let content = provider().build_nested(&record);
        assert_eq!(content.title, "Details: QA Engineer");
        assert_eq!(
            content.sections[1].facets[1],
            Facet::new("Remaining", "10 days")
        );
    }

    #[test]
    fn test_nested_content_for_completed_role() {
        let record = Record::new(
            "r4",
            "Data Analyst",
            ValidityWindow::new(date(2023, 1, 1), Some(date(2023, 6, 1))),
        );
        let content = provider().build_nested(&record);
        assert_eq!(content.sections[1].facets[0], Facet::new("Status", "Completed"));
        assert_eq!(content.sections[1].facets[1], Facet::new("Remaining", "Ended"));
    }
}
