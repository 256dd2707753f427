//! Date rules: minimum distance into the past or the future
//!
//! Spans are approximate on purpose: a year is 365 days and a month is 30
//! days, so `dateInPast:18` means "more than 6570 days ago", not "on or
//! before the 18th birthday".

use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::error::DateError;

/// Source of "now" for the date rules
pub trait Clock: fmt::Debug {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock, UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Minimum distance required by `dateInPast` / `dateInFuture`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Span {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub fn total_days(&self) -> i64 {
        365 * i64::from(self.years) + 30 * i64::from(self.months) + i64::from(self.days)
    }

    /// `None` when the span does not fit in a `chrono::Duration`
    pub fn duration(&self) -> Option<Duration> {
        Duration::try_days(self.total_days())
    }

    pub fn is_zero(&self) -> bool {
        self.total_days() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
        ]
        .into_iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| {
            if n == 1 {
                format!("1 {}", unit)
            } else {
                format!("{} {}s", n, unit)
            }
        })
        .collect();

        if parts.is_empty() {
            f.write_str("0 days")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Parse the value of a date-ish input.
///
/// Accepts `YYYY-MM-DD` (date inputs), `YYYY-MM-DDTHH:MM[:SS]`
/// (datetime-local inputs) and RFC 3339 timestamps.
pub fn parse_date(value: &str) -> Result<NaiveDateTime, DateError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    for format in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.naive_utc())
        .map_err(|_| DateError::Unparseable(value.to_string()))
}

/// `now - date` is strictly longer than `span`
pub fn is_past_by(date: NaiveDateTime, now: NaiveDateTime, span: Duration) -> bool {
    now.signed_duration_since(date) > span
}

/// `date - now` is strictly longer than `span`
pub fn is_future_by(date: NaiveDateTime, now: NaiveDateTime, span: Duration) -> bool {
    date.signed_duration_since(now) > span
}
