//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers
pub const AU_KM: f64 = 149_597_870.700;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Milliseconds in a day
pub const DAY_MS: f64 = DAY_S * 1_000.0;
/// Milliseconds in an hour
pub const HOUR_MS: f64 = 3_600_000.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Julian date of the Unix epoch (1970-01-01T00:00:00Z)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;
/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Offset from J2000.0 to 2000 Jan 0.0 UT, the epoch of the planetary elements
pub const ELEMENTS_EPOCH_OFFSET_DAYS: f64 = 1.5;
/// Mean synodic month in days
pub const SYNODIC_MONTH: f64 = 29.530_588_2;

// Angles
/// Arcseconds to degrees conversion factor
pub const ASEC2DEG: f64 = 1.0 / 3_600.0;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Horizon altitudes of a body's centre at the instant of rise or set, in degrees
/// Sun: 34' of refraction plus 16' of semi-diameter
pub const SUNRISE_ALTITUDE: f64 = -0.833;
/// Civil twilight
pub const CIVIL_TWILIGHT_ALTITUDE: f64 = -6.0;
/// Moon: mean horizontal parallax less refraction and semi-diameter
pub const MOONRISE_ALTITUDE: f64 = 0.133;
/// Planets and other point sources: refraction only
pub const PLANET_RISE_ALTITUDE: f64 = -0.5667;
