//! Meridian transit by fixed-point iteration on the hour angle

use log::{debug, trace};

use super::{hour_angle_at, EventTime};
use crate::framelib::topocentric::Observer;
use crate::planetlib::Body;
use crate::time::Instant;

/// Refinement steps per search, the first included
///
/// Four are enough for the Moon, whose hour angle runs slowest; there is no
/// convergence test.
pub const TRANSIT_ITERATIONS: usize = 4;

/// Which meridian crossing the first step aims for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The last crossing before the starting instant
    Backward,
    /// The next crossing after it
    Forward,
}

/// Iterate towards the meridian crossing nearest `from` in `direction`
pub fn search(body: Body, from: Instant, observer: &Observer, direction: Direction) -> Instant {
    let hour_angle = hour_angle_at(body, from, observer).to_degrees();
    let mut estimate = match direction {
        Direction::Backward => from - hour_angle / 360.0,
        Direction::Forward => from + (360.0 - hour_angle) / 360.0,
    };

    for _ in 1..TRANSIT_ITERATIONS {
        let residual = hour_angle_at(body, estimate, observer).signed_degrees();
        estimate = estimate - residual / 360.0;
    }
    estimate
}

/// Meridian transit in `[start, start + 24 h)`
///
/// Looks back from the end of the window first, then forward from its start.
pub fn transit(body: Body, start: Instant, observer: &Observer) -> EventTime {
    let end = start + 1.0;
    let in_window = |instant: &Instant| *instant >= start && *instant < end;

    let backward = search(body, end, observer, Direction::Backward);
    if in_window(&backward) {
        return EventTime::Occurs(backward);
    }
    trace!("{body} backward transit search landed at {backward}, outside the window");

    let forward = search(body, start, observer, Direction::Forward);
    if in_window(&forward) {
        return EventTime::Occurs(forward);
    }

    debug!("{body} has no meridian transit in the day after {start}");
    EventTime::DoesNotOccur
}
