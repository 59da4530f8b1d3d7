//! Date utility functions
//!
//! Due dates are plain calendar dates (`NaiveDate`); these helpers produce them,
//! move them around for the form's date picker, and render them relative to
//! today ("today", "tomorrow", ...).

use chrono::{Duration, Local, NaiveDate};

use crate::constants::UiText;

/// Default display format for due dates
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DEFAULT_DATE_FORMAT).to_string()
}

/// Move a date by whole days, saturating at chrono's supported range
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Render a due date relative to `reference`: yesterday/today/tomorrow in the
/// UI language, otherwise the date in `date_format`.
pub fn format_relative_date(date: NaiveDate, reference: NaiveDate, text: &UiText, date_format: &str) -> String {
    match (date - reference).num_days() {
        -1 => text.yesterday.to_string(),
        0 => text.today.to_string(),
        1 => text.tomorrow.to_string(),
        _ => date.format(date_format).to_string(),
    }
}

/// Check that a chrono format string can render a date
pub fn is_valid_date_format(date_format: &str) -> bool {
    use std::fmt::Write;

    let Some(sample) = NaiveDate::from_ymd_opt(2025, 1, 1) else {
        return false;
    };
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(date_format)).is_ok()
}
