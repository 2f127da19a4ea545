use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::angle::{normalize_degrees, Angle};
use nalgebra::Vector3;
use serde::Serialize;

// Marker trait for inertial coordinate systems
pub trait InertialFrame: Sized {
    fn to_cartesian(&self) -> Vector3<f64>;
    fn from_cartesian(cart: Vector3<f64>) -> Self;
}

/// Geocentric ecliptic coordinates of date
///
/// Longitude in `[0, 360)` degrees, latitude in `[-90, 90]` degrees, distance
/// in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ecliptic {
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
}

impl Ecliptic {
    pub fn new(longitude: f64, latitude: f64, distance: f64) -> Self {
        Ecliptic {
            longitude: normalize_degrees(longitude),
            latitude,
            distance,
        }
    }

    /// Rotate into the equatorial frame about the equinox direction
    pub fn to_equatorial(&self, obliquity: Angle) -> Equatorial {
        let lon = self.longitude * DEG2RAD;
        let lat = self.latitude * DEG2RAD;
        let (sin_eps, cos_eps) = (obliquity.sin(), obliquity.cos());

        let ra = (lon.sin() * cos_eps - lat.tan() * sin_eps).atan2(lon.cos());
        let sin_dec = lat.sin() * cos_eps + lat.cos() * sin_eps * lon.sin();
        let dec = sin_dec.clamp(-1.0, 1.0).asin();

        Equatorial::new(ra * RAD2DEG, dec * RAD2DEG)
    }
}

impl InertialFrame for Ecliptic {
    fn to_cartesian(&self) -> Vector3<f64> {
        let lon = self.longitude * DEG2RAD;
        let lat = self.latitude * DEG2RAD;
        let cos_lat = lat.cos();
        Vector3::new(cos_lat * lon.cos(), cos_lat * lon.sin(), lat.sin()) * self.distance
    }

    fn from_cartesian(cart: Vector3<f64>) -> Self {
        let r_xy = (cart.x * cart.x + cart.y * cart.y).sqrt();
        Ecliptic::new(
            cart.y.atan2(cart.x) * RAD2DEG,
            cart.z.atan2(r_xy) * RAD2DEG,
            cart.norm(),
        )
    }
}

/// Equatorial coordinates of date
///
/// Right ascension in `[0, 360)` degrees, declination in `[-90, 90]` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Equatorial {
    pub right_ascension: f64,
    pub declination: f64,
}

impl Equatorial {
    pub fn new(right_ascension: f64, declination: f64) -> Self {
        Equatorial {
            right_ascension: normalize_degrees(right_ascension),
            declination,
        }
    }

    /// Right ascension in hours
    pub fn ra_hours(&self) -> f64 {
        self.right_ascension / 15.0
    }
}

impl InertialFrame for Equatorial {
    fn to_cartesian(&self) -> Vector3<f64> {
        let ra = self.right_ascension * DEG2RAD;
        let dec = self.declination * DEG2RAD;
        let cos_dec = dec.cos();
        Vector3::new(cos_dec * ra.cos(), cos_dec * ra.sin(), dec.sin())
    }

    fn from_cartesian(cart: Vector3<f64>) -> Self {
        let r_xy = (cart.x * cart.x + cart.y * cart.y).sqrt();
        let declination = cart.z.atan2(r_xy) * RAD2DEG;
        Equatorial::new(cart.y.atan2(cart.x) * RAD2DEG, declination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Rotation3;

    const OBLIQUITY: f64 = 23.439_291;

    #[test]
    fn test_ecliptic_cartesian_roundtrip() {
        let original = Ecliptic::new(313.08, -2.08, 0.91);
        let roundtrip = Ecliptic::from_cartesian(original.to_cartesian());

        assert_relative_eq!(roundtrip.longitude, original.longitude, epsilon = 1e-9);
        assert_relative_eq!(roundtrip.latitude, original.latitude, epsilon = 1e-9);
        assert_relative_eq!(roundtrip.distance, original.distance, epsilon = 1e-12);
    }

    #[test]
    fn test_new_normalizes_longitude() {
        assert_eq!(Ecliptic::new(-90.0, 0.0, 1.0).longitude, 270.0);
        assert_eq!(Equatorial::new(370.0, 0.0).right_ascension, 10.0);
    }

    #[test]
    fn test_to_equatorial_matches_rotation() {
        // The closed-form transform is a rotation about the equinox (x) axis by ε
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), OBLIQUITY * DEG2RAD);
        let samples = [
            (0.0, 0.0),
            (45.0, 5.0),
            (133.17, -3.23),
            (270.0, 0.0),
            (313.08, -2.08),
        ];
        for (lon, lat) in samples {
            let ecliptic = Ecliptic::new(lon, lat, 1.0);
            let formula = ecliptic.to_equatorial(Angle::from_degrees(OBLIQUITY));
            let rotated = Equatorial::from_cartesian(rotation * ecliptic.to_cartesian());

            let (ra, dec) = (formula.right_ascension, formula.declination);
            assert_relative_eq!(ra, rotated.right_ascension, epsilon = 1e-9);
            assert_relative_eq!(dec, rotated.declination, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_solstice_declination_equals_obliquity() {
        let eq = Ecliptic::new(90.0, 0.0, 1.0).to_equatorial(Angle::from_degrees(OBLIQUITY));
        assert_relative_eq!(eq.declination, OBLIQUITY, epsilon = 1e-9);
        assert_relative_eq!(eq.right_ascension, 90.0, epsilon = 1e-9);
        assert_relative_eq!(eq.ra_hours(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_right_ascension_quadrants() {
        // atan2 keeps every quadrant: RA follows longitude around the circle
        let obliquity = Angle::from_degrees(OBLIQUITY);
        let mut previous = -1.0;
        for step in 0..36 {
            let ra = Ecliptic::new(step as f64 * 10.0, 0.0, 1.0)
                .to_equatorial(obliquity)
                .right_ascension;
            assert!((0.0..360.0).contains(&ra));
            assert!(ra > previous, "RA must increase with longitude");
            previous = ra;
        }
    }
}
