//! Solar theory
//!
//! Geocentric position of the Sun from its mean longitude and the equation of
//! the centre, good to about 0.01° in longitude. Latitude is taken as zero
//! (the true value never exceeds 1.2").

use super::series::{sum_sines, unweighted, PeriodicTerm};
use crate::constants::DEG2RAD;
use crate::framelib::inertial::Ecliptic;

/// Equation of the centre over the Sun's mean anomaly, in degrees
const EQUATION_OF_CENTRE: [PeriodicTerm<1>; 6] = [
    PeriodicTerm::new(1.914_602, [1]),
    PeriodicTerm::new(-0.004_817, [1]).secular(1),
    PeriodicTerm::new(-0.000_014, [1]).secular(2),
    PeriodicTerm::new(0.019_993, [2]),
    PeriodicTerm::new(-0.000_101, [2]).secular(1),
    PeriodicTerm::new(0.000_289, [3]),
];

/// Semi-major axis of the Earth's orbit in AU
const SEMI_MAJOR_AXIS: f64 = 1.000_001_018;

/// Geometric mean longitude, referred to the mean equinox of date
pub fn mean_longitude(t: f64) -> f64 {
    280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t
}

/// Mean anomaly of the Sun (equivalently of the Earth)
pub fn mean_anomaly(t: f64) -> f64 {
    357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t
}

/// Eccentricity of the Earth's orbit
pub fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t
}

/// Equation of the centre in degrees
pub fn equation_of_centre(t: f64) -> f64 {
    sum_sines(&EQUATION_OF_CENTRE, &[mean_anomaly(t)], t, unweighted)
}

/// True geometric position: no aberration, no nutation
pub fn geometric(t: f64) -> Ecliptic {
    let centre = equation_of_centre(t);
    let true_anomaly = (mean_anomaly(t) + centre) * DEG2RAD;
    let e = eccentricity(t);
    let distance = SEMI_MAJOR_AXIS * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    Ecliptic::new(mean_longitude(t) + centre, 0.0, distance)
}

/// Apparent position: corrected for nutation and annual aberration
pub fn apparent(t: f64) -> Ecliptic {
    let geometric = geometric(t);
    let omega = (125.04 - 1_934.136 * t) * DEG2RAD;
    let longitude = geometric.longitude - 0.005_69 - 0.004_78 * omega.sin();

    Ecliptic::new(longitude, geometric.latitude, geometric.distance)
}
