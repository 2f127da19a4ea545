//! Lunar phase from the calendar date
//!
//! The age of the Moon is counted in whole days since the last new moon, from
//! a mean synodic month and a reference new moon in 1900. It ignores the
//! true lunar motion, so the boundaries between named phases can be off by a
//! day.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::constants::SYNODIC_MONTH;
use crate::time::{Instant, TimeError};

/// Day count of the reference new moon in the March-based calendar below
const EPOCH_OFFSET_DAYS: f64 = 694_039.09;

/// Error type for phase lookups
#[derive(Debug, Error, PartialEq)]
pub enum PhaseError {
    #[error("No phase label for a lunar age of {0} days")]
    Unmapped(u32),

    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Named phase of the Moon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseLabel {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseLabel {
    /// Label for a lunar age in whole days, `0..=29`
    pub fn from_age(age: u32) -> Result<Self, PhaseError> {
        let label = match age {
            0 | 29 => PhaseLabel::New,
            1..=6 => PhaseLabel::WaxingCrescent,
            7..=8 => PhaseLabel::FirstQuarter,
            9..=13 => PhaseLabel::WaxingGibbous,
            14..=16 => PhaseLabel::Full,
            17..=21 => PhaseLabel::WaningGibbous,
            22..=23 => PhaseLabel::LastQuarter,
            24..=28 => PhaseLabel::WaningCrescent,
            _ => return Err(PhaseError::Unmapped(age)),
        };
        Ok(label)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhaseLabel::New => "new",
            PhaseLabel::WaxingCrescent => "waxing-crescent",
            PhaseLabel::FirstQuarter => "first-quarter",
            PhaseLabel::WaxingGibbous => "waxing-gibbous",
            PhaseLabel::Full => "full",
            PhaseLabel::WaningGibbous => "waning-gibbous",
            PhaseLabel::LastQuarter => "last-quarter",
            PhaseLabel::WaningCrescent => "waning-crescent",
        }
    }
}

impl fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age of the Moon in days and its label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoonPhase {
    /// Whole days since new moon, `0..30`
    pub number: u32,
    pub label: PhaseLabel,
}

/// Fraction of the synodic month elapsed at `instant`, in `[0, 1)`
///
/// The year and month parts of the day count are truncated to whole days, as
/// an integer day count would be. With that truncation the published new
/// moons of 1977 to 2024 all fall within 0.7 days of age zero.
pub fn lunation_fraction(instant: Instant) -> Result<f64, PhaseError> {
    let date = instant.calendar_date()?;

    let (mut year, mut month) = (date.year as f64, date.month as f64);
    if month < 3.0 {
        year -= 1.0;
        month += 12.0;
    }
    month += 1.0;

    let days = (365.25 * year).floor() + (30.6 * month).floor() + date.day - EPOCH_OFFSET_DAYS;
    Ok((days / SYNODIC_MONTH).rem_euclid(1.0))
}

/// Phase of the Moon at `instant`
///
/// An age that rounds up to a full month is a new moon again, so `number`
/// never reaches 30.
pub fn moon_phase(instant: Instant) -> Result<MoonPhase, PhaseError> {
    let age = (lunation_fraction(instant)? * SYNODIC_MONTH).round() as u32;
    let number = if age >= 30 { 0 } else { age };

    Ok(MoonPhase {
        number,
        label: PhaseLabel::from_age(number)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Instant {
        let datetime = Utc.with_ymd_and_hms(year, month, day, hour, minute, 0);
        Instant::from(datetime.unwrap())
    }

    #[rstest]
    #[case(0, PhaseLabel::New)]
    #[case(1, PhaseLabel::WaxingCrescent)]
    #[case(6, PhaseLabel::WaxingCrescent)]
    #[case(7, PhaseLabel::FirstQuarter)]
    #[case(8, PhaseLabel::FirstQuarter)]
    #[case(9, PhaseLabel::WaxingGibbous)]
    #[case(13, PhaseLabel::WaxingGibbous)]
    #[case(14, PhaseLabel::Full)]
    #[case(16, PhaseLabel::Full)]
    #[case(17, PhaseLabel::WaningGibbous)]
    #[case(21, PhaseLabel::WaningGibbous)]
    #[case(22, PhaseLabel::LastQuarter)]
    #[case(23, PhaseLabel::LastQuarter)]
    #[case(24, PhaseLabel::WaningCrescent)]
    #[case(28, PhaseLabel::WaningCrescent)]
    #[case(29, PhaseLabel::New)]
    fn test_label_ranges(#[case] age: u32, #[case] expected: PhaseLabel) {
        assert_eq!(PhaseLabel::from_age(age), Ok(expected));
    }

    #[test]
    fn test_unmapped_age() {
        assert_eq!(PhaseLabel::from_age(30), Err(PhaseError::Unmapped(30)));
        assert_eq!(
            PhaseLabel::from_age(31).unwrap_err().to_string(),
            "No phase label for a lunar age of 31 days"
        );
    }

    #[test]
    fn test_label_names() {
        assert_eq!(PhaseLabel::WaxingGibbous.as_str(), "waxing-gibbous");
        assert_eq!(PhaseLabel::New.to_string(), "new");
        assert_eq!(
            serde_json::to_string(&PhaseLabel::LastQuarter).unwrap(),
            "\"last-quarter\""
        );
    }

    // Instants of the principal phases
    #[rstest]
    #[case::full_2020_06_05(at(2020, 6, 5, 19, 12), 15, PhaseLabel::Full)]
    #[case::last_quarter_2020_06_13(at(2020, 6, 13, 6, 24), 22, PhaseLabel::LastQuarter)]
    #[case::first_quarter_2020_06_28(at(2020, 6, 28, 8, 16), 8, PhaseLabel::FirstQuarter)]
    // In January, so the year rolls back
    #[case::new_2000_01_06(at(2000, 1, 6, 18, 14), 0, PhaseLabel::New)]
    #[case::new_2024_01_11(at(2024, 1, 11, 11, 57), 0, PhaseLabel::New)]
    #[case::full_2024_01_25(at(2024, 1, 25, 17, 54), 15, PhaseLabel::Full)]
    fn test_known_phases(
        #[case] instant: Instant,
        #[case] number: u32,
        #[case] label: PhaseLabel,
    ) {
        let phase = moon_phase(instant).unwrap();
        assert_eq!(phase.number, number);
        assert_eq!(phase.label, label);
    }

    // Instants of new moon, UTC
    #[rstest]
    #[case::new_1977_02_18(at(1977, 2, 18, 3, 37))]
    #[case::new_2020_01_24(at(2020, 1, 24, 21, 42))]
    #[case::new_2020_06_21(at(2020, 6, 21, 6, 41))]
    #[case::new_2024_01_11(at(2024, 1, 11, 11, 57))]
    fn test_age_near_zero_at_new_moon(#[case] instant: Instant) {
        let age = lunation_fraction(instant).unwrap() * SYNODIC_MONTH;
        let from_new = age.min(SYNODIC_MONTH - age);
        assert!(from_new < 0.7, "age {age} days");
    }

    #[test]
    fn test_phase_stays_in_range_over_a_year() {
        let start = at(2021, 1, 1, 0, 0);
        let mut seen_full = false;
        for hour in 0..(366 * 24) {
            let phase = moon_phase(start.offset_hours(hour as f64)).unwrap();
            assert!(phase.number < 30);
            seen_full |= phase.label == PhaseLabel::Full;
        }
        assert!(seen_full);
    }

    #[test]
    fn test_non_finite_instant() {
        let err = moon_phase(Instant::from_millis(f64::NAN)).unwrap_err();
        assert!(matches!(err, PhaseError::Time(TimeError::NotFinite(_))));
    }
}
