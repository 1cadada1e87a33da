//! Role form field editing

use chrono::{Duration, NaiveDate};
use roster_core::{FormField, RoleDraft};

/// Step the `field` of `draft` by `delta` units.
///
/// Dates move by days (a cleared date starts from `today`), utilization by
/// `step` percent, reasons cycle through `reasons`, flags toggle.
/// Utilization is not clamped here; the save-time gate reports it.
pub(crate) fn adjust_field(
    draft: &mut RoleDraft,
    field: FormField,
    delta: i32,
    step: i32,
    reasons: &[String],
    today: NaiveDate,
) {
    match field {
        FormField::Start => draft.start = Some(shift_date(draft.start, delta, today)),
        FormField::End => {
            let base = draft.end.or(draft.start);
            draft.end = Some(shift_date(base, delta, today));
        }
        FormField::Utilization => {
            let current = draft.utilization.unwrap_or(0);
            draft.utilization = Some(current.saturating_add(delta.saturating_mul(step)));
        }
        FormField::Reason => draft.reason = cycle_reason(draft.reason.as_deref(), delta, reasons),
        FormField::HeadOffice => draft.head_office = !draft.head_office,
        FormField::TeamLead => draft.team_lead = !draft.team_lead,
    }
}

/// Reset `field` to its empty value
pub(crate) fn clear_field(draft: &mut RoleDraft, field: FormField) {
    match field {
        FormField::Start => draft.start = None,
        FormField::End => draft.end = None,
        FormField::Utilization => draft.utilization = None,
        FormField::Reason => draft.reason = None,
        FormField::HeadOffice => draft.head_office = false,
        FormField::TeamLead => draft.team_lead = false,
    }
}

fn shift_date(date: Option<NaiveDate>, delta: i32, today: NaiveDate) -> NaiveDate {
    let Some(date) = date else {
        return today;
    };
    date.checked_add_signed(Duration::days(i64::from(delta)))
        .unwrap_or(date)
}

fn cycle_reason(current: Option<&str>, delta: i32, reasons: &[String]) -> Option<String> {
    if reasons.is_empty() {
        return current.map(str::to_string);
    }
    let len = reasons.len() as i64;
    let next = match current.and_then(|c| reasons.iter().position(|r| r == c)) {
        Some(idx) => (idx as i64 + i64::from(delta)).rem_euclid(len),
        None if delta < 0 => len - 1,
        None => 0,
    };
    reasons.get(next as usize).cloned()
}
