use chrono::{DateTime, NaiveDate, Utc};
use kanvas_db::models::DATE_TBD;

/// Due date as shown on project cards: `"TBD"` for the sentinel or an empty
/// value, `"Jan 23, 26"` for a parseable date, anything else unchanged.
pub fn format_due_date(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value == DATE_TBD {
        return DATE_TBD.to_string();
    }

    let parsed = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(date) => date.format("%b %-d, %y").to_string(),
        None => value.to_string(),
    }
}

/// A due date field as submitted: blank becomes the `"TBD"` sentinel.
pub fn due_date_or_tbd(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DATE_TBD.to_string())
}

/// Creation label for new projects, e.g. `"May 15"`.
pub fn created_label(now: DateTime<Utc>) -> String {
    now.format("%b %-d").to_string()
}
