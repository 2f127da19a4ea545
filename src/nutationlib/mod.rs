//! Low-order nutation
//!
//! Only the four largest terms of the nutation in longitude are kept, good to
//! about half an arcsecond. That is enough for the apparent longitudes and the
//! apparent sidereal time used here; the full IAU series is far below the
//! accuracy of the position models.

use crate::constants::{ASEC2DEG, DEG2RAD};
use crate::coordinates::Angle;
use crate::planetlib::obliquity;

/// Longitude of the Moon's mean ascending node in degrees
fn lunar_node_longitude(t: f64) -> f64 {
    125.044_52 - 1_934.136_261 * t
}

/// Nutation in longitude (Δψ)
pub fn nutation_in_longitude(t: f64) -> Angle {
    let omega = lunar_node_longitude(t) * DEG2RAD;
    let sun_mean_longitude = (280.4665 + 36_000.7698 * t) * DEG2RAD;
    let moon_mean_longitude = (218.3165 + 481_267.8813 * t) * DEG2RAD;

    let arcseconds = -17.20 * omega.sin()
        - 1.32 * (2.0 * sun_mean_longitude).sin()
        - 0.23 * (2.0 * moon_mean_longitude).sin()
        + 0.21 * (2.0 * omega).sin();

    Angle::from_degrees(arcseconds * ASEC2DEG)
}

/// Equation of the equinoxes: apparent minus mean sidereal time
pub fn equation_of_equinoxes(t: f64) -> Angle {
    Angle::from_degrees(nutation_in_longitude(t).to_degrees() * obliquity(t).cos())
}
