//! Orrery: low-precision positions and events for the Sun, Moon and planets
//!
//! This crate computes apparent geocentric positions of the Sun, the Moon and
//! the planets Mercury through Neptune from short trigonometric series, turns
//! them into the horizon coordinates of an observer, and finds rise, set,
//! meridian transit and civil twilight times. Accuracy is at the arc-minute
//! level for the Sun and Moon over a century either side of J2000, which puts
//! event times within a minute or so.
//!
//! Instants are milliseconds since the Unix epoch and angles are degrees.

pub mod almanac;
pub mod constants;
pub mod coordinates;
pub mod framelib;
pub mod nutationlib;
pub mod phase;
pub mod planetlib;
pub mod positions;
pub mod time;

use thiserror::Error;

// Re-export commonly used types
pub use almanac::{EventTime, EventTimes, Horizon, RiseSet};
pub use coordinates::{Angle, Ecliptic, Equatorial, Horizontal, Observer};
pub use phase::{MoonPhase, PhaseLabel};
pub use planetlib::Body;
pub use positions::{
    jupiter, mars, mercury, moon, neptune, phase, position, saturn, sun, uranus, venus,
    HorizontalResult, Position,
};
pub use time::Instant;

/// Main error type for the orrery library
#[derive(Debug, Error)]
pub enum OrreryError {
    #[error("Time error: {0}")]
    Time(#[from] time::TimeError),

    #[error("Phase error: {0}")]
    Phase(#[from] phase::PhaseError),

    #[error("Body error: {0}")]
    Body(#[from] planetlib::PlanetError),
}

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;
