//! Angles and angle normalization
//!
//! [`Angle`] remembers whether it was built from degrees or from radians and
//! hands the value back untouched in that unit; only the other unit costs a
//! multiplication. The position theories produce degrees and the spherical
//! trigonometry consumes radians, so most angles cross that boundary exactly
//! once.
//!
//! Normalization helpers:
//!
//! - [`normalize_degrees`] into `[0, 360)`
//! - [`normalize_radians`] into `[0, 2π)`
//! - [`Angle::signed_degrees`] into `[-180, 180)`
//!
//! ```rust
//! use orrery::coordinates::angle::{normalize_degrees, Angle};
//!
//! let angle = Angle::from_degrees(-90.0);
//! assert_eq!(angle.normalized().to_degrees(), 270.0);
//! assert_eq!(normalize_degrees(725.0), 5.0);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG, TAU};

/// Reduce an angle in degrees into `[0, 360)`
///
/// Non-finite input is returned unchanged so that a NaN sentinel survives
/// normalization.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let reduced = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if reduced >= 360.0 {
        0.0
    } else {
        reduced
    }
}

/// Reduce an angle in radians into `[0, 2π)`
pub fn normalize_radians(radians: f64) -> f64 {
    let reduced = radians.rem_euclid(TAU);
    if reduced >= TAU {
        0.0
    } else {
        reduced
    }
}

/// Unit an [`Angle`] was created in
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleFormat {
    Degrees(f64),
    Radians(f64),
}

/// A plane angle in degrees or radians
///
/// Equality compares the stored unit too: 90° and π/2 rad are different
/// values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    value: AngleFormat,
}

impl Angle {
    /// ```rust
    /// use orrery::coordinates::angle::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(23.44).to_degrees(), 23.44);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            value: AngleFormat::Degrees(degrees),
        }
    }

    /// Wrap a value in radians, stored as given
    ///
    /// # Arguments
    ///
    /// * `radians` - Angle in radians, any range
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::angle::{Angle, AngleFormat};
    ///
    /// let quarter = Angle::from_radians(std::f64::consts::FRAC_PI_2);
    /// assert_eq!(quarter.format(), AngleFormat::Radians(std::f64::consts::FRAC_PI_2));
    /// assert_eq!(quarter.to_degrees(), 90.0);
    /// ```
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            value: AngleFormat::Radians(radians),
        }
    }

    /// The angle in degrees; exact when it was built from degrees
    pub fn to_degrees(&self) -> f64 {
        match self.value {
            AngleFormat::Degrees(degrees) => degrees,
            AngleFormat::Radians(radians) => radians * RAD2DEG,
        }
    }

    /// The angle in radians; exact when it was built from radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orrery::coordinates::angle::Angle;
    ///
    /// let half_turn = Angle::from_degrees(180.0);
    /// assert_eq!(half_turn.to_radians(), std::f64::consts::PI);
    /// ```
    pub fn to_radians(&self) -> f64 {
        match self.value {
            AngleFormat::Degrees(degrees) => degrees * DEG2RAD,
            AngleFormat::Radians(radians) => radians,
        }
    }

    /// Stored unit and value
    pub fn format(&self) -> AngleFormat {
        self.value
    }

    /// Reduce into one full turn, keeping the storage format
    ///
    /// Degrees land in `[0, 360)`, radians in `[0, 2π)`.
    pub fn normalized(&self) -> Self {
        match self.value {
            AngleFormat::Degrees(degrees) => Angle::from_degrees(normalize_degrees(degrees)),
            AngleFormat::Radians(radians) => Angle::from_radians(normalize_radians(radians)),
        }
    }

    /// The angle in degrees, reduced into `[-180, 180)`
    ///
    /// Used where the sign matters, e.g. whether the meridian lies ahead of or
    /// behind a body.
    ///
    /// ```rust
    /// use orrery::coordinates::angle::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(350.0).signed_degrees(), -10.0);
    /// assert_eq!(Angle::from_degrees(180.0).signed_degrees(), -180.0);
    /// ```
    pub fn signed_degrees(&self) -> f64 {
        let deg = normalize_degrees(self.to_degrees());
        if deg >= 180.0 {
            deg - 360.0
        } else {
            deg
        }
    }

    /// Sine of the angle
    pub fn sin(&self) -> f64 {
        self.to_radians().sin()
    }

    /// Cosine of the angle
    pub fn cos(&self) -> f64 {
        self.to_radians().cos()
    }
}
