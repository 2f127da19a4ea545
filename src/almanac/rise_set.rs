//! Horizon crossings by a two-hour parabolic sweep
//!
//! The elevation is sampled hourly over the day. Each overlapping triple of
//! samples (hours `h-1, h, h+1` for `h = 1, 3, …, 23`) is fitted with a
//! parabola whose roots give the crossings inside that two-hour segment.
//! The function swept is `sin(elevation) - sin(horizon)`, which is smoother
//! than the elevation itself near the poles of the horizon frame.

use log::{debug, trace};

use super::quadratic::{Crossing, Parabola};
use super::{horizontal_at, EventTime, Horizon};
use crate::constants::DEG2RAD;
use crate::framelib::topocentric::Observer;
use crate::planetlib::Body;
use crate::time::Instant;

/// Two-hour segments covering one day
pub const SWEEP_SEGMENTS: usize = 12;

/// Earliest rise and earliest set of `body` in the 24 hours after `start`
///
/// The sweep stops as soon as both are known.
pub fn sweep(
    body: Body,
    start: Instant,
    observer: &Observer,
    horizon: Horizon,
) -> (EventTime, EventTime) {
    let threshold = (horizon.degrees() * DEG2RAD).sin();
    let altitude = |instant: Instant| {
        let elevation = horizontal_at(body, instant, observer).elevation;
        (elevation * DEG2RAD).sin() - threshold
    };

    let mut rise = EventTime::DoesNotOccur;
    let mut set = EventTime::DoesNotOccur;
    let mut y_minus = altitude(start);

    for segment in 0..SWEEP_SEGMENTS {
        let centre = (2 * segment + 1) as f64;
        let y_zero = altitude(start.offset_hours(centre));
        let y_plus = altitude(start.offset_hours(centre + 1.0));

        let crossing = Parabola::through(y_minus, y_zero, y_plus).crossing();
        if crossing != Crossing::None {
            trace!("{body} segment centred on hour {centre}: {crossing:?}");
        }

        if let (EventTime::DoesNotOccur, Some(x)) = (rise, crossing.rise()) {
            rise = EventTime::Occurs(start.offset_hours(centre + x));
        }
        if let (EventTime::DoesNotOccur, Some(x)) = (set, crossing.set()) {
            set = EventTime::Occurs(start.offset_hours(centre + x));
        }
        if rise.occurs() && set.occurs() {
            return (rise, set);
        }

        y_minus = y_plus;
    }

    let degrees = horizon.degrees();
    if !rise.occurs() {
        debug!("{body} does not rise above {degrees:.4}° in the day after {start}");
    }
    if !set.occurs() {
        debug!("{body} does not set below {degrees:.4}° in the day after {start}");
    }
    (rise, set)
}
