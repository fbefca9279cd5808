//! Resolution of [`Timeout`] values to absolute Unix timestamps.
//!
//! Expressions understand a small, predictable grammar:
//!
//! - keywords: `now`, `today`, `midnight`, `tomorrow`, `yesterday`
//! - `@<unix seconds>`
//! - RFC 3339 (`2030-01-01T00:00:00Z`, `2030-01-01T01:00:00+01:00`)
//! - `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD HH:MM` and
//!   `YYYY-MM-DD`, all taken as UTC
//! - relative durations in humantime units with an optional sign or a
//!   trailing `ago`: `+1 minute`, `-2 hours`, `10 seconds`, `3 days ago`
//!
//! Input is matched case-insensitively, so `M` reads as minutes, not months.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::SignedUrlError;
use crate::models::Timeout;

const SECONDS_PER_DAY: i64 = 86_400;

const NAIVE_DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Resolve a timeout to a Unix timestamp relative to `now`.
pub fn resolve(timeout: &Timeout, now: DateTime<Utc>) -> Result<i64, SignedUrlError> {
    match timeout {
        Timeout::At(timestamp) => Ok(*timestamp),
        Timeout::DateTime(datetime) => Ok(datetime.timestamp()),
        Timeout::Expression(expression) => {
            parse_expression(expression, now).ok_or_else(|| {
                SignedUrlError::InvalidTimeout(format!(
                    "\"{expression}\" is not a valid date/time expression"
                ))
            })
        }
    }
}

/// Resolve a timeout and require it to lie strictly after `now`.
pub fn resolve_future(timeout: &Timeout, now: DateTime<Utc>) -> Result<i64, SignedUrlError> {
    let timestamp = resolve(timeout, now)?;
    if timestamp <= now.timestamp() {
        return Err(SignedUrlError::InvalidTimeout(
            "Timeout cannot be in the past".to_string(),
        ));
    }
    Ok(timestamp)
}

fn parse_expression(expression: &str, now: DateTime<Utc>) -> Option<i64> {
    let trimmed = expression.trim();
    let lower = trimmed.to_ascii_lowercase();

    match lower.as_str() {
        "" => return None,
        "now" => return Some(now.timestamp()),
        "today" | "midnight" => return Some(midnight(now)),
        "tomorrow" => return Some(midnight(now) + SECONDS_PER_DAY),
        "yesterday" => return Some(midnight(now) - SECONDS_PER_DAY),
        _ => {}
    }

    if let Some(timestamp) = lower.strip_prefix('@') {
        return timestamp.trim().parse().ok();
    }

    parse_absolute(trimmed).or_else(|| parse_relative(&lower, now))
}

fn parse_absolute(expression: &str) -> Option<i64> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(expression) {
        return Some(datetime.timestamp());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(expression, format) {
            return Some(datetime.and_utc().timestamp());
        }
    }

    NaiveDate::parse_from_str(expression, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc().timestamp())
}

fn parse_relative(expression: &str, now: DateTime<Utc>) -> Option<i64> {
    let (ago, rest) = match expression.strip_suffix("ago") {
        Some(rest) => (true, rest.trim_end()),
        None => (false, expression),
    };
    let (negative, rest) = match rest.chars().next() {
        Some('+') => (false, &rest[1..]),
        Some('-') => (true, &rest[1..]),
        _ => (false, rest),
    };

    let duration = humantime::parse_duration(rest.trim()).ok()?;
    let seconds = i64::try_from(duration.as_secs()).ok()?;
    let offset = if negative != ago { -seconds } else { seconds };

    now.timestamp().checked_add(offset)
}

fn midnight(now: DateTime<Utc>) -> i64 {
    now.timestamp() - now.timestamp().rem_euclid(SECONDS_PER_DAY)
}
