//! Rise, set and meridian transit times
//!
//! Every search covers the 24 hours following a start instant and re-runs the
//! full position pipeline at each sampled instant: body theory, mean
//! obliquity, apparent sidereal time, horizon frame. Nothing is cached
//! between samples or between calls.
//!
//! An event that does not happen in the window (the Sun at midsummer inside
//! the Arctic circle, a transit pushed just past the end of the day) is the
//! value [`EventTime::DoesNotOccur`], and crosses the public boundary as a
//! NaN millisecond timestamp.

pub mod quadratic;
pub mod rise_set;
pub mod transit;

use serde::Serialize;

use crate::constants::{
    CIVIL_TWILIGHT_ALTITUDE, MOONRISE_ALTITUDE, PLANET_RISE_ALTITUDE, SUNRISE_ALTITUDE,
};
use crate::coordinates::Angle;
use crate::framelib::topocentric::{hour_angle, Horizontal, Observer};
use crate::planetlib::Body;
use crate::time::sidereal::local_sidereal;
use crate::time::Instant;

pub use quadratic::{Crossing, Parabola};
pub use transit::TRANSIT_ITERATIONS;

/// Elevation of a body's centre at the moment it is said to rise or set
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Horizon {
    /// Upper limb on the horizon, with standard refraction
    Sunrise,
    CivilTwilight,
    /// Parallax outweighs refraction and semi-diameter, so the centre is above
    /// the horizon
    Moonrise,
    Planet,
    Custom(f64),
}

impl Horizon {
    /// Target elevation of the body's centre, in degrees
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::Horizon;
    ///
    /// assert_eq!(Horizon::CivilTwilight.degrees(), -6.0);
    /// assert_eq!(Horizon::Custom(-18.0).degrees(), -18.0);
    /// ```
    pub fn degrees(&self) -> f64 {
        match *self {
            Horizon::Sunrise => SUNRISE_ALTITUDE,
            Horizon::CivilTwilight => CIVIL_TWILIGHT_ALTITUDE,
            Horizon::Moonrise => MOONRISE_ALTITUDE,
            Horizon::Planet => PLANET_RISE_ALTITUDE,
            Horizon::Custom(degrees) => degrees,
        }
    }
}

impl Body {
    /// Default rise/set horizon for this body
    pub fn horizon(&self) -> Horizon {
        match self {
            Body::Sun => Horizon::Sunrise,
            Body::Moon => Horizon::Moonrise,
            _ => Horizon::Planet,
        }
    }
}

/// Outcome of a single event search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventTime {
    Occurs(Instant),
    DoesNotOccur,
}

impl EventTime {
    pub fn occurs(&self) -> bool {
        matches!(self, EventTime::Occurs(_))
    }

    pub fn instant(&self) -> Option<Instant> {
        match *self {
            EventTime::Occurs(instant) => Some(instant),
            EventTime::DoesNotOccur => None,
        }
    }

    /// Milliseconds since the Unix epoch, NaN when the event does not occur
    pub fn to_millis(&self) -> f64 {
        self.instant().map_or(f64::NAN, |i| i.as_millis())
    }
}

impl From<Option<Instant>> for EventTime {
    fn from(instant: Option<Instant>) -> Self {
        instant.map_or(EventTime::DoesNotOccur, EventTime::Occurs)
    }
}

/// Rise and set from one sweep, in milliseconds (NaN if absent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiseSet {
    pub rise: f64,
    pub set: f64,
}

impl RiseSet {
    fn from_events(rise: EventTime, set: EventTime) -> Self {
        RiseSet {
            rise: rise.to_millis(),
            set: set.to_millis(),
        }
    }
}

/// All events of one body over one day, in milliseconds (NaN if absent)
///
/// `dawn` and `dusk` are only computed for the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventTimes {
    pub rise: f64,
    pub set: f64,
    pub transit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dawn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dusk: Option<f64>,
}

/// Horizontal position of `body` seen by `observer` at `instant`
pub fn horizontal_at(body: Body, instant: Instant, observer: &Observer) -> Horizontal {
    let t = instant.julian_centuries();
    let equatorial = body.equatorial(t);
    equatorial.to_horizontal(observer, local_sidereal(t, observer.longitude))
}

/// Hour angle of `body` at `instant`, in `[0, 360)`
pub fn hour_angle_at(body: Body, instant: Instant, observer: &Observer) -> Angle {
    let t = instant.julian_centuries();
    hour_angle(
        local_sidereal(t, observer.longitude),
        body.equatorial(t).right_ascension,
    )
}

/// Rise and set of `body` in the day after `start`, at the body's own horizon
pub fn rise_and_set(body: Body, start: Instant, observer: &Observer) -> RiseSet {
    let (rise, set) = rise_set::sweep(body, start, observer, body.horizon());
    RiseSet::from_events(rise, set)
}

/// Start (dawn) and end (dusk) of civil twilight in the day after `start`
pub fn civil_twilight(start: Instant, observer: &Observer) -> RiseSet {
    let (dawn, dusk) = rise_set::sweep(Body::Sun, start, observer, Horizon::CivilTwilight);
    RiseSet::from_events(dawn, dusk)
}

/// Meridian transit of `body` in the day after `start`, NaN if none
pub fn transit(body: Body, start: Instant, observer: &Observer) -> f64 {
    transit::transit(body, start, observer).to_millis()
}

/// Every event of `body` in the day after `start`
pub fn events(body: Body, start: Instant, observer: &Observer) -> EventTimes {
    let RiseSet { rise, set } = rise_and_set(body, start, observer);
    let twilight = (body == Body::Sun).then(|| civil_twilight(start, observer));

    EventTimes {
        rise,
        set,
        transit: transit(body, start, observer),
        dawn: twilight.map(|t| t.rise),
        dusk: twilight.map(|t| t.set),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DAY_MS;
    use approx::assert_abs_diff_eq;

    // 2020-06-01T07:00:00Z, local midnight in Albuquerque
    const START_MS: f64 = 1_590_994_800_000.0;

    fn albuquerque() -> Observer {
        Observer::new(35.05, -106.62)
    }

    #[test]
    fn test_default_horizons() {
        assert_eq!(Body::Sun.horizon().degrees(), -0.833);
        assert_eq!(Body::Moon.horizon().degrees(), 0.133);
        assert_eq!(Body::Saturn.horizon().degrees(), -0.5667);
        assert_eq!(Horizon::CivilTwilight.degrees(), -6.0);
        assert_eq!(Horizon::Custom(-18.0).degrees(), -18.0);
    }

    #[test]
    fn test_event_time_sentinel() {
        let absent = EventTime::DoesNotOccur;
        assert!(!absent.occurs());
        assert!(absent.to_millis().is_nan());

        let present = EventTime::Occurs(Instant::from_millis(START_MS));
        assert!(present.occurs());
        assert_eq!(present.to_millis(), START_MS);
        assert_eq!(EventTime::from(None), absent);
    }

    #[test]
    fn test_sun_events_fall_in_window() {
        let events = events(Body::Sun, Instant::from_millis(START_MS), &albuquerque());
        let (dawn, dusk) = (events.dawn.unwrap(), events.dusk.unwrap());
        let day = START_MS..START_MS + DAY_MS;
        for ms in [events.rise, events.set, events.transit, dawn, dusk] {
            assert!(day.contains(&ms), "{ms} outside the day");
        }
        assert!(dawn < events.rise);
        assert!(events.rise < events.transit);
        assert!(events.transit < events.set);
        assert!(events.set < dusk);
    }

    #[test]
    fn test_twilight_only_for_the_sun() {
        let events = events(Body::Mars, Instant::from_millis(START_MS), &albuquerque());
        assert_eq!(events.dawn, None);
        assert_eq!(events.dusk, None);
    }

    #[test]
    fn test_elevation_at_transit_is_maximal() {
        let observer = albuquerque();
        let start = Instant::from_millis(START_MS);
        let noon = Instant::from_millis(transit(Body::Sun, start, &observer));
        let at_noon = horizontal_at(Body::Sun, noon, &observer);
        // Declination ≈ 22.1° on June 1
        assert_abs_diff_eq!(at_noon.elevation, 90.0 - 35.05 + 22.1, epsilon = 0.2);
        assert_abs_diff_eq!(at_noon.azimuth, 180.0, epsilon = 0.5);
        for minutes in [-30.0, 30.0] {
            let nearby = horizontal_at(Body::Sun, noon.offset_hours(minutes / 60.0), &observer);
            assert!(nearby.elevation < at_noon.elevation);
        }
    }

    #[test]
    fn test_hour_angle_at_transit_is_zero() {
        let observer = albuquerque();
        let start = Instant::from_millis(START_MS);
        for body in Body::ALL {
            let ms = transit(body, start, &observer);
            let ha = hour_angle_at(body, Instant::from_millis(ms), &observer);
            assert_abs_diff_eq!(ha.signed_degrees(), 0.0, epsilon = 0.01);
        }
    }
}
