//! Sidereal time
//!
//! Greenwich sidereal time relates the equatorial frame to the rotating
//! Earth; adding the observer's east longitude gives local sidereal time,
//! from which hour angles follow.

use crate::constants::DAYS_PER_CENTURY;
use crate::coordinates::Angle;
use crate::nutationlib::equation_of_equinoxes;

/// Greenwich mean sidereal time for `t` Julian centuries since J2000.0
pub fn greenwich_mean_sidereal(t: f64) -> Angle {
    let days = t * DAYS_PER_CENTURY;
    let degrees = 280.460_618_37 + 360.985_647_366_29 * days + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    Angle::from_degrees(degrees).normalized()
}

/// Greenwich apparent sidereal time, in `[0, 360)` degrees
pub fn greenwich_sidereal(t: f64) -> Angle {
    let mean = greenwich_mean_sidereal(t).to_degrees();
    Angle::from_degrees(mean + equation_of_equinoxes(t).to_degrees()).normalized()
}

/// Local apparent sidereal time at east `longitude` (degrees), in `[0, 360)`
pub fn local_sidereal(t: f64, longitude: f64) -> Angle {
    Angle::from_degrees(greenwich_sidereal(t).to_degrees() + longitude).normalized()
}
