//! Position theories for the Sun, the Moon and the planets
//!
//! Every body is evaluated by one of three theories sharing the periodic
//! series in [`series`]:
//!
//! - [`sun`]: mean longitude plus equation of the centre
//! - [`moon`]: truncated lunar series
//! - [`planets`]: drifting Keplerian elements with giant-planet perturbations
//!
//! All of them take `t`, Julian centuries since J2000.0, and return apparent
//! geocentric ecliptic coordinates of date.

pub mod moon;
pub mod planets;
pub mod series;
pub mod sun;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::coordinates::Angle;
use crate::framelib::inertial::{Ecliptic, Equatorial};
pub use planets::Planet;

/// Error type for body lookups
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanetError {
    #[error("Unknown body: {0}")]
    UnknownBody(String),
}

/// Mean obliquity of the ecliptic
pub fn obliquity(t: f64) -> Angle {
    Angle::from_degrees(23.439_291 - 0.013_004_2 * t)
}

/// The bodies this crate knows how to place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Which theory evaluates a body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theory {
    Solar,
    Lunar,
    Keplerian(Planet),
}

impl Theory {
    /// Apparent geocentric ecliptic position of date, `t` Julian centuries
    /// since J2000.0
    pub fn ecliptic(&self, t: f64) -> Ecliptic {
        match self {
            Theory::Solar => sun::apparent(t),
            Theory::Lunar => moon::apparent(t),
            Theory::Keplerian(planet) => planets::apparent(*planet, t),
        }
    }
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
        }
    }

    pub fn theory(&self) -> Theory {
        match self {
            Body::Sun => Theory::Solar,
            Body::Moon => Theory::Lunar,
            Body::Mercury => Theory::Keplerian(Planet::Mercury),
            Body::Venus => Theory::Keplerian(Planet::Venus),
            Body::Mars => Theory::Keplerian(Planet::Mars),
            Body::Jupiter => Theory::Keplerian(Planet::Jupiter),
            Body::Saturn => Theory::Keplerian(Planet::Saturn),
            Body::Uranus => Theory::Keplerian(Planet::Uranus),
            Body::Neptune => Theory::Keplerian(Planet::Neptune),
        }
    }

    /// Apparent geocentric ecliptic position at `t` Julian centuries
    pub fn ecliptic(&self, t: f64) -> Ecliptic {
        self.theory().ecliptic(t)
    }

    /// Ecliptic longitude in `[0, 360)` degrees
    pub fn longitude(&self, t: f64) -> f64 {
        self.ecliptic(t).longitude
    }

    /// Ecliptic latitude in degrees
    pub fn latitude(&self, t: f64) -> f64 {
        self.ecliptic(t).latitude
    }

    /// Distance from the Earth in AU
    pub fn distance(&self, t: f64) -> f64 {
        self.ecliptic(t).distance
    }

    /// Right ascension and declination, rotated with the mean obliquity of date
    pub fn equatorial(&self, t: f64) -> Equatorial {
        self.ecliptic(t).to_equatorial(obliquity(t))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = PlanetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Body::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PlanetError::UnknownBody(s.to_string()))
    }
}
