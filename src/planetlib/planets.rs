//! Planetary theory from mean orbital elements
//!
//! Each planet moves on a Keplerian ellipse whose elements drift linearly
//! with time. Jupiter, Saturn and Uranus get the largest terms of their
//! mutual perturbations added to the heliocentric longitude and latitude.
//! Accuracy is a few arc-minutes for the inner planets, somewhat worse for
//! the giants far from J2000.
//!
//! Element rates are per day, counted from 2000 January 0.0 UT.

use super::series::{sum_sines, unweighted, PeriodicTerm};
use super::sun;
use crate::constants::{DAYS_PER_CENTURY, DEG2RAD, ELEMENTS_EPOCH_OFFSET_DAYS, RAD2DEG};
use crate::coordinates::angle::normalize_degrees;
use crate::framelib::inertial::{Ecliptic, InertialFrame};
use crate::nutationlib::nutation_in_longitude;
use nalgebra::{Rotation3, Vector3};
use serde::Serialize;

/// Newton iterations on Kepler's equation; converges for every e < 0.25
const KEPLER_ITERATIONS: usize = 8;

/// The planets other than the Earth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// An orbital element as value at the epoch plus rate per day
type Drift = (f64, f64);

/// Mean elements with their linear drift
struct ElementSeries {
    node: Drift,
    inclination: Drift,
    perihelion: Drift,
    semi_major_axis: Drift,
    eccentricity: Drift,
    mean_anomaly: Drift,
}

/// Osculating elements of date; angles in degrees, axis in AU
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Longitude of the ascending node
    pub node: f64,
    pub inclination: f64,
    /// Argument of perihelion
    pub perihelion: f64,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Mean anomaly in `[0, 360)`
    pub mean_anomaly: f64,
}

const MERCURY: ElementSeries = ElementSeries {
    node: (48.3313, 3.245_87e-5),
    inclination: (7.0047, 5.00e-8),
    perihelion: (29.1241, 1.014_44e-5),
    semi_major_axis: (0.387_098, 0.0),
    eccentricity: (0.205_635, 5.59e-10),
    mean_anomaly: (168.6562, 4.092_334_436_8),
};

const VENUS: ElementSeries = ElementSeries {
    node: (76.6799, 2.465_90e-5),
    inclination: (3.3946, 2.75e-8),
    perihelion: (54.8910, 1.383_74e-5),
    semi_major_axis: (0.723_330, 0.0),
    eccentricity: (0.006_773, -1.302e-9),
    mean_anomaly: (48.0052, 1.602_130_224_4),
};

const MARS: ElementSeries = ElementSeries {
    node: (49.5574, 2.110_81e-5),
    inclination: (1.8497, -1.78e-8),
    perihelion: (286.5016, 2.929_61e-5),
    semi_major_axis: (1.523_688, 0.0),
    eccentricity: (0.093_405, 2.516e-9),
    mean_anomaly: (18.6021, 0.524_020_776_6),
};

const JUPITER: ElementSeries = ElementSeries {
    node: (100.4542, 2.768_54e-5),
    inclination: (1.3030, -1.557e-7),
    perihelion: (273.8777, 1.645_05e-5),
    semi_major_axis: (5.202_56, 0.0),
    eccentricity: (0.048_498, 4.469e-9),
    mean_anomaly: (19.8950, 0.083_085_300_1),
};

const SATURN: ElementSeries = ElementSeries {
    node: (113.6634, 2.389_80e-5),
    inclination: (2.4886, -1.081e-7),
    perihelion: (339.3939, 2.976_61e-5),
    semi_major_axis: (9.554_75, 0.0),
    eccentricity: (0.055_546, -9.499e-9),
    mean_anomaly: (316.9670, 0.033_444_228_2),
};

const URANUS: ElementSeries = ElementSeries {
    node: (74.0005, 1.3978e-5),
    inclination: (0.7733, 1.9e-8),
    perihelion: (96.6612, 3.0565e-5),
    semi_major_axis: (19.181_71, -1.55e-8),
    eccentricity: (0.047_318, 7.45e-9),
    mean_anomaly: (142.5905, 0.011_725_806),
};

const NEPTUNE: ElementSeries = ElementSeries {
    node: (131.7806, 3.0173e-5),
    inclination: (1.7700, -2.55e-7),
    perihelion: (272.8461, -6.027e-6),
    semi_major_axis: (30.058_26, 3.313e-8),
    eccentricity: (0.008_606, 2.15e-9),
    mean_anomaly: (260.2471, 0.005_995_147),
};

// Perturbations, in degrees, over the mean anomalies [Jupiter, Saturn, Uranus]
type Perturbation = PeriodicTerm<3>;

const JUPITER_LONGITUDE: [Perturbation; 7] = [
    Perturbation::new(-0.332, [2, -5, 0]).with_phase(-67.6),
    Perturbation::new(-0.056, [2, -2, 0]).with_phase(21.0),
    Perturbation::new(0.042, [3, -5, 0]).with_phase(21.0),
    Perturbation::new(-0.036, [1, -2, 0]),
    Perturbation::new(0.022, [1, -1, 0]).with_phase(90.0),
    Perturbation::new(0.023, [2, -3, 0]).with_phase(52.0),
    Perturbation::new(-0.016, [1, -5, 0]).with_phase(-69.0),
];

const SATURN_LONGITUDE: [Perturbation; 5] = [
    Perturbation::new(0.812, [2, -5, 0]).with_phase(-67.6),
    Perturbation::new(-0.229, [2, -4, 0]).with_phase(88.0),
    Perturbation::new(0.119, [1, -2, 0]).with_phase(-3.0),
    Perturbation::new(0.046, [2, -6, 0]).with_phase(-69.0),
    Perturbation::new(0.014, [1, -3, 0]).with_phase(32.0),
];

const SATURN_LATITUDE: [Perturbation; 2] = [
    Perturbation::new(-0.020, [2, -4, 0]).with_phase(88.0),
    Perturbation::new(0.018, [2, -6, 0]).with_phase(-49.0),
];

const URANUS_LONGITUDE: [Perturbation; 3] = [
    Perturbation::new(0.040, [0, 1, -2]).with_phase(6.0),
    Perturbation::new(0.035, [0, 1, -3]).with_phase(33.0),
    Perturbation::new(-0.015, [1, 0, -1]).with_phase(20.0),
];

impl Planet {
    pub const ALL: [Planet; 7] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    fn series(&self) -> &'static ElementSeries {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
            Planet::Uranus => &URANUS,
            Planet::Neptune => &NEPTUNE,
        }
    }

    fn longitude_perturbations(&self) -> &'static [Perturbation] {
        match self {
            Planet::Jupiter => &JUPITER_LONGITUDE,
            Planet::Saturn => &SATURN_LONGITUDE,
            Planet::Uranus => &URANUS_LONGITUDE,
            _ => &[],
        }
    }

    fn latitude_perturbations(&self) -> &'static [Perturbation] {
        match self {
            Planet::Saturn => &SATURN_LATITUDE,
            _ => &[],
        }
    }

    /// Elements of date, `d` days from 2000 January 0.0
    pub fn elements(&self, d: f64) -> OrbitalElements {
        let s = self.series();
        let at = |(value, rate): Drift| value + rate * d;
        OrbitalElements {
            node: at(s.node),
            inclination: at(s.inclination),
            perihelion: at(s.perihelion),
            semi_major_axis: at(s.semi_major_axis),
            eccentricity: at(s.eccentricity),
            mean_anomaly: normalize_degrees(at(s.mean_anomaly)),
        }
    }

    /// Heliocentric ecliptic position of date in AU
    pub fn heliocentric(&self, d: f64) -> Vector3<f64> {
        let position = self.elements(d).position();
        let longitude_terms = self.longitude_perturbations();
        let latitude_terms = self.latitude_perturbations();
        if longitude_terms.is_empty() && latitude_terms.is_empty() {
            return position;
        }

        let args = [
            Planet::Jupiter.elements(d).mean_anomaly,
            Planet::Saturn.elements(d).mean_anomaly,
            Planet::Uranus.elements(d).mean_anomaly,
        ];
        let unperturbed = Ecliptic::from_cartesian(position);
        // Terms are periodic only, so t plays no part; the radius is kept
        Ecliptic {
            longitude: unperturbed.longitude + sum_sines(longitude_terms, &args, 0.0, unweighted),
            latitude: unperturbed.latitude + sum_sines(latitude_terms, &args, 0.0, unweighted),
            distance: unperturbed.distance,
        }
        .to_cartesian()
    }
}

impl OrbitalElements {
    /// Eccentric anomaly in radians
    pub fn eccentric_anomaly(&self) -> f64 {
        solve_kepler(self.mean_anomaly * DEG2RAD, self.eccentricity)
    }

    /// Position on the orbit, rotated into the ecliptic frame
    pub fn position(&self) -> Vector3<f64> {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let ecc_anomaly = self.eccentric_anomaly();

        let xv = a * (ecc_anomaly.cos() - e);
        let yv = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();
        let true_anomaly = yv.atan2(xv);
        let radius = xv.hypot(yv);

        let argument_of_latitude = true_anomaly + self.perihelion * DEG2RAD;
        let orientation = Rotation3::from_axis_angle(&Vector3::z_axis(), self.node * DEG2RAD)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), self.inclination * DEG2RAD)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_latitude);

        orientation * Vector3::new(radius, 0.0, 0.0)
    }
}

/// Solve `E - e sin E = M` (radians) by Newton's method
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let (m, e) = (mean_anomaly, eccentricity);
    let mut ecc_anomaly = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..KEPLER_ITERATIONS {
        ecc_anomaly -= (ecc_anomaly - e * ecc_anomaly.sin() - m) / (1.0 - e * ecc_anomaly.cos());
    }
    ecc_anomaly
}

/// Apparent geocentric position at `t` Julian centuries from J2000.0
///
/// Light time and aberration are ignored; nutation is applied to the
/// longitude.
pub fn apparent(planet: Planet, t: f64) -> Ecliptic {
    let d = t * DAYS_PER_CENTURY + ELEMENTS_EPOCH_OFFSET_DAYS;
    let earth_to_sun = sun::geometric(t).to_cartesian();
    let geocentric = Ecliptic::from_cartesian(planet.heliocentric(d) + earth_to_sun);

    Ecliptic::new(
        geocentric.longitude + nutation_in_longitude(t).to_degrees(),
        geocentric.latitude,
        geocentric.distance,
    )
}

/// Angle in degrees between the Sun and the planet as seen from the Earth
pub fn elongation(planet: Planet, t: f64) -> f64 {
    let sun = sun::geometric(t).to_cartesian();
    let body = apparent(planet, t).to_cartesian();
    sun.angle(&body) * RAD2DEG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Angle;
    use crate::time::Instant;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 0.1)]
    #[case(5.0, 0.5)]
    #[case(3.5, 0.2)]
    #[case(0.1, 0.25)]
    fn test_kepler_residual(#[case] m: f64, #[case] e: f64) {
        let ecc_anomaly = solve_kepler(m, e);
        assert_abs_diff_eq!(ecc_anomaly - e * ecc_anomaly.sin(), m, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_orbit() {
        assert_eq!(solve_kepler(1.234, 0.0), 1.234);
    }

    #[test]
    fn test_venus_1992() {
        // 1992 December 20, 0h TD: λ = 313.08102°, β = -2.08474°, Δ = 0.910947 AU
        let t = (2_448_976.5 - 2_451_545.0) / 36_525.0;
        let venus = apparent(Planet::Venus, t);
        assert_abs_diff_eq!(venus.longitude, 313.081_02, epsilon = 0.02);
        assert_abs_diff_eq!(venus.latitude, -2.084_74, epsilon = 0.02);
        assert_abs_diff_eq!(venus.distance, 0.910_947, epsilon = 1e-3);
    }

    #[test]
    fn test_heliocentric_radius_within_orbit() {
        for planet in Planet::ALL {
            for step in 0..20 {
                let d = step as f64 * 1_000.0;
                let el = planet.elements(d);
                let r = planet.heliocentric(d).norm();
                let a = el.semi_major_axis;
                assert!(r >= a * (1.0 - el.eccentricity) - 1e-9, "{planet:?} r = {r}");
                assert!(r <= a * (1.0 + el.eccentricity) + 1e-9, "{planet:?} r = {r}");
            }
        }
    }

    #[test]
    fn test_perturbations_preserve_radius() {
        let d = 7_306.5;
        for planet in [Planet::Jupiter, Planet::Saturn, Planet::Uranus] {
            let plain = planet.elements(d).position();
            let perturbed = planet.heliocentric(d);
            assert_relative_eq!(plain.norm(), perturbed.norm(), epsilon = 1e-12);
            // The largest term is under a degree
            assert!(plain.angle(&perturbed) * RAD2DEG < 1.0);
        }
    }

    #[test]
    fn test_inner_planet_elongation_bounded() {
        for step in 0..100 {
            let t = step as f64 * 0.002;
            assert!(elongation(Planet::Mercury, t) < 28.5);
            assert!(elongation(Planet::Venus, t) < 47.9);
        }
    }

    fn centuries(ms: f64) -> f64 {
        Instant::from_millis(ms).julian_centuries()
    }

    // Instants of opposition in 2020, UTC
    #[rstest]
    #[case::mars(Planet::Mars, 1_602_631_200_000.0)]
    #[case::jupiter(Planet::Jupiter, 1_594_713_600_000.0)]
    #[case::saturn(Planet::Saturn, 1_595_282_400_000.0)]
    #[case::uranus(Planet::Uranus, 1_604_160_000_000.0)]
    #[case::neptune(Planet::Neptune, 1_599_854_400_000.0)]
    fn test_oppositions_2020(#[case] planet: Planet, #[case] ms: f64) {
        let t = centuries(ms);
        let from_sun = apparent(planet, t).longitude - sun::apparent(t).longitude;
        let offset = Angle::from_degrees(from_sun - 180.0).signed_degrees();
        assert_abs_diff_eq!(offset, 0.0, epsilon = 2.0 / 60.0);
    }

    // Greatest elongations of 2020, published to 0.1°
    #[rstest]
    #[case::mercury_june(Planet::Mercury, 1_591_275_600_000.0, 23.6)]
    #[case::venus_march(Planet::Venus, 1_585_087_200_000.0, 46.1)]
    #[case::venus_august(Planet::Venus, 1_597_276_800_000.0, 45.8)]
    fn test_greatest_elongations_2020(
        #[case] planet: Planet,
        #[case] ms: f64,
        #[case] degrees: f64,
    ) {
        let t = centuries(ms);
        assert_abs_diff_eq!(elongation(planet, t), degrees, epsilon = 0.1);
    }

    #[test]
    fn test_venus_inferior_conjunction_2020() {
        // 2020-06-03 17:43Z, half a degree north of the Sun
        let t = centuries(1_591_206_180_000.0);
        let venus = apparent(Planet::Venus, t);
        let from_sun = venus.longitude - sun::apparent(t).longitude;
        let offset = Angle::from_degrees(from_sun).signed_degrees();
        assert_abs_diff_eq!(offset, 0.0, epsilon = 2.0 / 60.0);
        assert_abs_diff_eq!(venus.latitude, 0.5, epsilon = 0.05);
    }

    #[test]
    fn test_mars_closest_approach_2020() {
        // 2020-10-06 14:18Z at 62.07 million km
        let mars = apparent(Planet::Mars, centuries(1_601_993_880_000.0));
        assert_abs_diff_eq!(mars.distance, 0.414_92, epsilon = 1e-3);
    }

    #[test]
    fn test_regression_snapshot_2020() {
        // Output of this implementation at t = 0.2 (2020 January 1.5), kept to
        // catch unintended changes to the element tables
        let expected = [
            (Planet::Mercury, 275.183_63, -1.316_49, 1.435_137),
            (Planet::Mars, 238.732_13, 0.356_42, 2.180_872),
            (Planet::Saturn, 291.446_24, 0.046_85, 11.015_906),
            (Planet::Neptune, 346.294_71, -1.026_52, 30.304_993),
        ];
        for (planet, lon, lat, dist) in expected {
            let p = apparent(planet, 0.2);
            assert_abs_diff_eq!(p.longitude, lon, epsilon = 1e-4);
            assert_abs_diff_eq!(p.latitude, lat, epsilon = 1e-4);
            assert_abs_diff_eq!(p.distance, dist, epsilon = 1e-5);
        }
    }
}
