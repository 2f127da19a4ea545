//! Snapshot positions and per-observer queries
//!
//! This is the surface most callers use: pick a body and an instant in
//! milliseconds since the Unix epoch, then ask the resulting [`Position`] for
//! horizontal coordinates or event times at an observer given by latitude and
//! east longitude in degrees.
//!
//! ```
//! // Local noon in Albuquerque, 2020-06-01
//! let sky = orrery::sun(1_591_038_000_000.0).observer(35.05, -106.62);
//! assert!(sky.elevation > 70.0);
//!
//! // Events in the day from local midnight
//! let events = orrery::sun(1_590_994_800_000.0).events(35.05, -106.62);
//! assert!(events.rise < events.transit && events.transit < events.set);
//! ```
//!
//! Event searches cover the 24 hours starting at the snapshot's instant.
//! Events that do not happen in that window come back as NaN.

use serde::Serialize;

use crate::almanac::{self, EventTimes, RiseSet};
use crate::framelib::inertial::Equatorial;
use crate::framelib::topocentric::Observer;
use crate::phase::{moon_phase, MoonPhase, PhaseError};
use crate::planetlib::{obliquity, Body};
use crate::time::sidereal::local_sidereal;
use crate::time::Instant;

/// Azimuth and elevation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalResult {
    pub azimuth: f64,
    pub elevation: f64,
}

/// Apparent geocentric position of one body at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub body: Body,
    /// Milliseconds since the Unix epoch
    pub time: f64,
    /// Ecliptic longitude of date, degrees in `[0, 360)`
    pub longitude: f64,
    /// Ecliptic latitude, degrees
    pub latitude: f64,
    /// Distance from the Earth's centre, AU
    pub distance: f64,
    /// Degrees in `[0, 360)`
    pub right_ascension: f64,
    pub declination: f64,
}

impl Position {
    /// Compute the apparent position of `body`
    ///
    /// # Arguments
    /// * `body` - Sun, Moon or one of the seven planets
    /// * `ms` - Milliseconds since the Unix epoch, UTC
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::{Body, Position};
    ///
    /// // Venus near greatest eastern elongation, 2020-03-24
    /// let venus = Position::new(Body::Venus, 1_585_087_200_000.0);
    /// let sun = Position::new(Body::Sun, 1_585_087_200_000.0);
    /// let elongation = (venus.longitude - sun.longitude).abs();
    /// assert!((elongation - 46.1).abs() < 0.5);
    /// ```
    pub fn new(body: Body, ms: f64) -> Self {
        let t = Instant::from_millis(ms).julian_centuries();
        let ecliptic = body.ecliptic(t);
        let equatorial = ecliptic.to_equatorial(obliquity(t));

        Position {
            body,
            time: ms,
            longitude: ecliptic.longitude,
            latitude: ecliptic.latitude,
            distance: ecliptic.distance,
            right_ascension: equatorial.right_ascension,
            declination: equatorial.declination,
        }
    }

    fn instant(&self) -> Instant {
        Instant::from_millis(self.time)
    }

    /// Right ascension and declination as an [`Equatorial`] value
    pub fn equatorial(&self) -> Equatorial {
        Equatorial::new(self.right_ascension, self.declination)
    }

    /// Where the body stands in the sky of an observer
    pub fn observer(&self, lat: f64, lon: f64) -> HorizontalResult {
        let t = self.instant().julian_centuries();
        let observer = Observer::new(lat, lon);
        let equatorial = self.equatorial();
        let horizontal = equatorial.to_horizontal(&observer, local_sidereal(t, lon));

        HorizontalResult {
            azimuth: horizontal.azimuth,
            elevation: horizontal.elevation,
        }
    }

    /// First rise in the 24 hours after the snapshot, NaN if the body stays up
    /// or stays down
    pub fn rise(&self, lat: f64, lon: f64) -> f64 {
        self.rise_and_set(lat, lon).rise
    }

    /// First set in the 24 hours after the snapshot, NaN if there is none
    pub fn set(&self, lat: f64, lon: f64) -> f64 {
        self.rise_and_set(lat, lon).set
    }

    /// Meridian transit in the 24 hours after the snapshot
    ///
    /// NaN when the transit falls outside that window, which happens to the
    /// Moon about once a month.
    pub fn transit(&self, lat: f64, lon: f64) -> f64 {
        almanac::transit(self.body, self.instant(), &Observer::new(lat, lon))
    }

    /// Rise and set from a single sweep
    pub fn rise_and_set(&self, lat: f64, lon: f64) -> RiseSet {
        almanac::rise_and_set(self.body, self.instant(), &Observer::new(lat, lon))
    }

    /// Start of morning civil twilight; NaN for bodies other than the Sun
    pub fn dawn(&self, lat: f64, lon: f64) -> f64 {
        self.twilight(lat, lon).rise
    }

    /// End of evening civil twilight; NaN for bodies other than the Sun
    pub fn dusk(&self, lat: f64, lon: f64) -> f64 {
        self.twilight(lat, lon).set
    }

    fn twilight(&self, lat: f64, lon: f64) -> RiseSet {
        if self.body != Body::Sun {
            return RiseSet {
                rise: f64::NAN,
                set: f64::NAN,
            };
        }
        almanac::civil_twilight(self.instant(), &Observer::new(lat, lon))
    }

    /// Rise, set, transit and (for the Sun) dawn and dusk
    pub fn events(&self, lat: f64, lon: f64) -> EventTimes {
        almanac::events(self.body, self.instant(), &Observer::new(lat, lon))
    }
}

/// Position of any body
pub fn position(body: Body, ms: f64) -> Position {
    Position::new(body, ms)
}

/// Apparent position of the Sun at `ms` milliseconds since the Unix epoch
///
/// # Examples
///
/// ```
/// // June solstice, 2020-06-20 21:44 UTC
/// let sun = orrery::sun(1_592_689_440_000.0);
/// assert!((sun.longitude - 90.0).abs() < 0.01);
/// assert!((sun.declination - 23.44).abs() < 0.01);
/// ```
pub fn sun(ms: f64) -> Position {
    Position::new(Body::Sun, ms)
}

/// Apparent position of the Moon, distance in AU
pub fn moon(ms: f64) -> Position {
    Position::new(Body::Moon, ms)
}

/// Apparent position of Mercury
pub fn mercury(ms: f64) -> Position {
    Position::new(Body::Mercury, ms)
}

/// Apparent position of Venus
pub fn venus(ms: f64) -> Position {
    Position::new(Body::Venus, ms)
}

/// Apparent position of Mars
pub fn mars(ms: f64) -> Position {
    Position::new(Body::Mars, ms)
}

/// Apparent position of Jupiter, with the Saturn perturbations
pub fn jupiter(ms: f64) -> Position {
    Position::new(Body::Jupiter, ms)
}

/// Apparent position of Saturn, with the Jupiter perturbations
pub fn saturn(ms: f64) -> Position {
    Position::new(Body::Saturn, ms)
}

/// Apparent position of Uranus, with the Jupiter and Saturn perturbations
pub fn uranus(ms: f64) -> Position {
    Position::new(Body::Uranus, ms)
}

/// Apparent position of Neptune
pub fn neptune(ms: f64) -> Position {
    Position::new(Body::Neptune, ms)
}

/// Phase of the Moon at `ms`
pub fn phase(ms: f64) -> Result<MoonPhase, PhaseError> {
    moon_phase(Instant::from_millis(ms))
}
