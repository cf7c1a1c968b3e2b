//! Date format bridge
//!
//! The API speaks `yyyy-mm-dd`, forms display `dd/mm/yyyy`, and schedule
//! slots are keyed by Spanish weekday names. Every conversion here is total:
//! input that does not parse comes back unchanged (or as an empty string for
//! the weekday lookup) instead of failing.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Weekday names as the schedule API spells them, Monday first
const DIAS_SEMANA: [&str; 7] = [
    "LUNES",
    "MARTES",
    "MIERCOLES",
    "JUEVES",
    "VIERNES",
    "SABADO",
    "DOMINGO",
];

/// Render a parseable date as `dd/mm/yyyy`
///
/// Accepts API dates, RFC 3339 timestamps and already-display-formatted
/// strings. Unparseable input is returned unchanged.
pub fn to_display_format(input: &str) -> String {
    match parse_date(input) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => input.to_string(),
    }
}

/// Reassemble a `dd/mm/yyyy` string as `yyyy-mm-dd`
///
/// Splits on `/`; anything but exactly three segments is returned unchanged.
pub fn to_api_format(input: &str) -> String {
    let parts: Vec<&str> = input.split('/').collect();
    match parts.as_slice() {
        [day, month, year] => format!("{}-{}-{}", year, month, day),
        _ => input.to_string(),
    }
}

/// Spanish weekday name for a date in either supported format
///
/// Accepts `yyyy-mm-dd` (contains `-`) or `dd/mm/yyyy` (contains `/`).
/// Unparseable input yields an empty string.
pub fn day_of_week_name(input: &str) -> String {
    let date = if input.contains('-') {
        parse_api_date(input)
    } else if input.contains('/') {
        parse_display_date(input)
    } else {
        None
    };

    match date {
        Some(date) => DIAS_SEMANA[date.weekday().num_days_from_monday() as usize].to_string(),
        None => String::new(),
    }
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_api_date(trimmed).or_else(|| parse_display_date(trimmed))
}

fn parse_api_date(input: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Some(timestamp.date());
    }
    None
}

fn parse_display_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%d/%m/%Y").ok()
}
