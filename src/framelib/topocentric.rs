//! The observer's horizon frame

use super::inertial::Equatorial;
use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::angle::{normalize_degrees, Angle};
use serde::Serialize;

/// A place on the Earth: geodetic latitude and east longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observer {
    pub latitude: f64,
    pub longitude: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Observer {
            latitude,
            longitude,
        }
    }
}

/// Azimuth (from north through east) and elevation, both in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Horizontal {
    pub azimuth: f64,
    pub elevation: f64,
}

impl Horizontal {
    /// Solve the spherical triangle pole–zenith–body
    ///
    /// Azimuth comes from `atan2`, which resolves all four quadrants; the
    /// formula measures it from south, hence the half-turn.
    pub fn from_hour_angle(latitude: f64, declination: f64, hour_angle: Angle) -> Self {
        let phi = latitude * DEG2RAD;
        let dec = declination * DEG2RAD;
        let (sin_h, cos_h) = (hour_angle.sin(), hour_angle.cos());

        let sin_elevation = phi.sin() * dec.sin() + phi.cos() * dec.cos() * cos_h;
        let elevation = sin_elevation.clamp(-1.0, 1.0).asin();
        let azimuth = sin_h.atan2(cos_h * phi.sin() - dec.tan() * phi.cos());

        Horizontal {
            azimuth: normalize_degrees(azimuth * RAD2DEG + 180.0),
            elevation: elevation * RAD2DEG,
        }
    }
}

/// Hour angle of a body with right ascension `right_ascension` (degrees)
///
/// Both operands are reduced into one turn before subtracting, so the result
/// lies in `[0, 360)` whatever the wrap of the inputs.
pub fn hour_angle(local_sidereal: Angle, right_ascension: f64) -> Angle {
    let lst = normalize_degrees(local_sidereal.to_degrees());
    let ra = normalize_degrees(right_ascension);
    Angle::from_degrees(lst - ra).normalized()
}

impl Equatorial {
    /// Horizontal coordinates seen by `observer` at local sidereal time `local_sidereal`
    pub fn to_horizontal(&self, observer: &Observer, local_sidereal: Angle) -> Horizontal {
        let ha = hour_angle(local_sidereal, self.right_ascension);
        Horizontal::from_hour_angle(observer.latitude, self.declination, ha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case(10.0, 350.0, 20.0)]
    #[case(370.0, -10.0, 20.0)]
    #[case(-350.0, 730.0, 0.0)]
    #[case(5.0, 10.0, 355.0)]
    fn test_hour_angle_wraps(#[case] lst: f64, #[case] ra: f64, #[case] expected: f64) {
        let ha = hour_angle(Angle::from_degrees(lst), ra).to_degrees();
        assert_abs_diff_eq!(ha, expected, epsilon = 1e-9);
        assert!((0.0..360.0).contains(&ha));
    }

    #[test]
    fn test_meridian_south_of_zenith() {
        // Northern observer, body on the meridian south of the zenith
        let h = Horizontal::from_hour_angle(40.0, 10.0, Angle::from_degrees(0.0));
        assert_abs_diff_eq!(h.elevation, 60.0, epsilon = 1e-9);
        assert_abs_diff_eq!(h.azimuth, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_meridian_north_of_zenith() {
        // Southern observer sees the same body on the meridian to the north
        let h = Horizontal::from_hour_angle(-30.0, 10.0, Angle::from_degrees(0.0));
        assert_abs_diff_eq!(h.elevation, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(h.azimuth, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_east_and_west() {
        // Equatorial observer, equatorial body, six hours from the meridian
        let west = Horizontal::from_hour_angle(0.0, 0.0, Angle::from_degrees(90.0));
        assert_abs_diff_eq!(west.elevation, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(west.azimuth, 270.0, epsilon = 1e-9);

        let east = Horizontal::from_hour_angle(0.0, 0.0, Angle::from_degrees(270.0));
        assert_abs_diff_eq!(east.elevation, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(east.azimuth, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lower_culmination() {
        let h = Horizontal::from_hour_angle(60.0, 50.0, Angle::from_degrees(180.0));
        assert_abs_diff_eq!(h.elevation, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(h.azimuth, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_horizontal_uses_local_sidereal_time() {
        let eq = Equatorial::new(100.0, 10.0);
        let observer = Observer::new(40.0, -75.0);
        let h = eq.to_horizontal(&observer, Angle::from_degrees(100.0));
        assert_abs_diff_eq!(h.elevation, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ranges_over_the_sky() {
        for lat in [-89.0, -45.0, 0.0, 35.05, 89.0] {
            for dec in [-80.0, -20.0, 0.0, 23.4, 80.0] {
                for step in 0..24 {
                    let h = Horizontal::from_hour_angle(
                        lat,
                        dec,
                        Angle::from_degrees(step as f64 * 15.0),
                    );
                    assert!((0.0..360.0).contains(&h.azimuth));
                    assert!((-90.0..=90.0).contains(&h.elevation));
                }
            }
        }
    }
}
