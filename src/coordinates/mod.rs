pub mod angle;

pub use angle::{normalize_degrees, normalize_radians, Angle};

// Re-export the coordinate systems from framelib
pub use crate::framelib::inertial::{Ecliptic, Equatorial};
pub use crate::framelib::topocentric::{hour_angle, Horizontal, Observer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecliptic_pipeline_to_horizon() {
        // The vernal equinox point on the equator, on the meridian of an
        // equatorial observer, stands at the zenith.
        let eq = Ecliptic::new(0.0, 0.0, 1.0).to_equatorial(Angle::from_degrees(23.44));
        let observer = Observer::new(0.0, 0.0);
        let horizontal = eq.to_horizontal(&observer, Angle::from_degrees(0.0));
        assert!((horizontal.elevation - 90.0).abs() < 1e-9);
    }
}
