use chrono::NaiveDate;
use todolist::constants::{ENGLISH, GERMAN};
use todolist::utils::datetime::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_format_ymd() {
    assert_eq!(format_ymd(date(2025, 1, 15)), "2025-01-15");
}

#[test]
fn test_shift_days_across_month_and_year() {
    assert_eq!(shift_days(date(2025, 1, 31), 1), date(2025, 2, 1));
    assert_eq!(shift_days(date(2025, 1, 1), -1), date(2024, 12, 31));
    assert_eq!(shift_days(date(2024, 2, 22), 7), date(2024, 2, 29));
}

#[test]
fn test_shift_days_saturates_at_range_end() {
    assert_eq!(shift_days(NaiveDate::MAX, 1), NaiveDate::MAX);
}

#[test]
fn test_format_relative_date() {
    let reference = date(2025, 6, 10);
    assert_eq!(format_relative_date(date(2025, 6, 10), reference, &ENGLISH, DEFAULT_DATE_FORMAT), "today");
    assert_eq!(format_relative_date(date(2025, 6, 11), reference, &ENGLISH, DEFAULT_DATE_FORMAT), "tomorrow");
    assert_eq!(format_relative_date(date(2025, 6, 9), reference, &GERMAN, DEFAULT_DATE_FORMAT), "gestern");
    assert_eq!(format_relative_date(date(2025, 6, 20), reference, &GERMAN, "%d.%m.%Y"), "20.06.2025");
}

#[test]
fn test_date_format_validation() {
    assert!(is_valid_date_format(DEFAULT_DATE_FORMAT));
    assert!(is_valid_date_format("%d.%m.%Y"));
    assert!(!is_valid_date_format("%Q"));
}

