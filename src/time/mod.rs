//! Time module for astronomical time calculations
//!
//! Callers exchange instants as milliseconds since the Unix epoch. Every
//! orbital formula in this crate is a polynomial or trigonometric series in
//! Julian centuries since J2000.0, so this module owns the mapping between the
//! two, plus the inverse used to report solved event times.
//!
//! No distinction is made between UTC, UT1 and TT: leap seconds and ΔT are
//! below the accuracy of the position models.

pub mod sidereal;

use crate::constants::{DAYS_PER_CENTURY, DAY_MS, DAY_S, HOUR_MS, J2000, UNIX_EPOCH_JD};
use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};
use thiserror::Error;

/// Error type for time operations
#[derive(Debug, Error, PartialEq)]
pub enum TimeError {
    #[error("Time out of range: {0} ms cannot be represented as a calendar date")]
    OutOfRange(f64),

    #[error("Time is not finite: {0}")]
    NotFinite(f64),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

/// Calendar date in UTC with the time of day folded into the day number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    /// Day of month, 1-based, with the fraction of the day elapsed
    pub day: f64,
}

/// An instant, stored as milliseconds since 1970-01-01T00:00:00Z
///
/// A NaN value is the "no such instant" sentinel produced by the event
/// solver; every conversion propagates it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Instant(f64);

impl Instant {
    /// Create an instant from milliseconds since the Unix epoch
    pub fn from_millis(ms: f64) -> Self {
        Instant(ms)
    }

    /// Milliseconds since the Unix epoch
    pub fn as_millis(&self) -> f64 {
        self.0
    }

    /// Create an instant from a Julian date
    pub fn from_julian_date(jd: f64) -> Self {
        Instant((jd - UNIX_EPOCH_JD) * DAY_MS)
    }

    /// Create an instant from Julian centuries since J2000.0
    pub fn from_julian_centuries(t: f64) -> Self {
        Self::from_julian_date(J2000 + t * DAYS_PER_CENTURY)
    }

    /// The instant `fraction` days after `reference`
    ///
    /// This is how a fractional-day solution (e.g. a root found in a day
    /// window starting at `reference`) becomes an epoch instant again.
    pub fn from_day_fraction(reference: Instant, fraction: f64) -> Self {
        Instant(reference.0 + fraction * DAY_MS)
    }

    /// Julian date of this instant
    pub fn julian_date(&self) -> f64 {
        self.0 / DAY_MS + UNIX_EPOCH_JD
    }

    /// Julian centuries since J2000.0, the argument of every series in the crate
    pub fn julian_centuries(&self) -> f64 {
        (self.julian_date() - J2000) / DAYS_PER_CENTURY
    }

    /// The instant `hours` later (or earlier when negative)
    pub fn offset_hours(&self, hours: f64) -> Self {
        Instant(self.0 + hours * HOUR_MS)
    }

    /// Whether this is a real instant rather than the NaN sentinel
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Convert to a chrono UTC datetime
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        if !self.0.is_finite() {
            return Err(TimeError::NotFinite(self.0));
        }

        let seconds = (self.0 / 1_000.0).floor();
        let nanos = ((self.0 - seconds * 1_000.0) * 1_000_000.0).round();
        // Rounding can push the remainder to a full second
        let (seconds, nanos) = if nanos >= 1e9 {
            (seconds + 1.0, 0.0)
        } else {
            (seconds, nanos)
        };

        if seconds.abs() > i64::MAX as f64 {
            return Err(TimeError::OutOfRange(self.0));
        }

        DateTime::<Utc>::from_timestamp(seconds as i64, nanos as u32)
            .ok_or(TimeError::OutOfRange(self.0))
    }

    /// The UTC calendar date, with the time of day as a day fraction
    pub fn calendar_date(&self) -> Result<CalendarDate> {
        let dt = self.to_datetime()?;
        let seconds = dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;

        Ok(CalendarDate {
            year: dt.year(),
            month: dt.month(),
            day: dt.day() as f64 + seconds / DAY_S,
        })
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        let ms = dt.timestamp() as f64 * 1_000.0 + dt.timestamp_subsec_nanos() as f64 * 1e-6;
        Instant(ms)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3fZ")),
            Err(_) => write!(f, "<Instant ms={}>", self.0),
        }
    }
}

impl Add<f64> for Instant {
    type Output = Instant;

    /// Add a number of days
    fn add(self, days: f64) -> Self::Output {
        Instant::from_day_fraction(self, days)
    }
}

impl Sub<f64> for Instant {
    type Output = Instant;

    /// Subtract a number of days
    fn sub(self, days: f64) -> Self::Output {
        Instant::from_day_fraction(self, -days)
    }
}

impl Sub<Instant> for Instant {
    type Output = f64;

    /// Difference in days
    fn sub(self, other: Instant) -> Self::Output {
        (self.0 - other.0) / DAY_MS
    }
}
