//! Sky Report Tool
//!
//! Prints the position of the Sun, Moon and planets for an instant and an
//! observer, with rise, transit and set times over the following 24 hours and
//! the phase of the Moon.
//!
//! Usage:
//!   cargo run --bin sky_info -- --time 2020-06-01T07:00:00Z --lat 35.05 --lon -106.62
//!   cargo run --bin sky_info -- --millis 1590994800000 --body moon --json

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser};
use serde::Serialize;

use orrery::{
    position, Body, EventTimes, HorizontalResult, Instant, MoonPhase, Observer, Position,
};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Sky Report Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Positions, rise/set/transit times and lunar phase for an observer",
    long_about = None
)]
struct Args {
    /// Instant as an RFC 3339 timestamp (defaults to now)
    #[arg(short, long, conflicts_with = "millis")]
    time: Option<DateTime<Utc>>,

    /// Instant as milliseconds since the Unix epoch
    #[arg(short, long, allow_negative_numbers = true)]
    millis: Option<f64>,

    /// Observer latitude in degrees, north positive
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lat: f64,

    /// Observer longitude in degrees, east positive
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    lon: f64,

    /// Report a single body (sun, moon, mercury, ..., neptune)
    #[arg(short, long)]
    body: Option<Body>,

    /// Emit JSON instead of a table
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
}

#[derive(Serialize)]
struct BodyReport {
    #[serde(flatten)]
    position: Position,
    horizontal: HorizontalResult,
    events: EventTimes,
}

#[derive(Serialize)]
struct Report {
    time: Instant,
    observer: Observer,
    bodies: Vec<BodyReport>,
    moon_phase: MoonPhase,
}

fn build_report(instant: Instant, observer: Observer, bodies: &[Body]) -> Result<Report> {
    let ms = instant.as_millis();
    let bodies = bodies
        .iter()
        .map(|&body| {
            let position = position(body, ms);
            BodyReport {
                horizontal: position.observer(observer.latitude, observer.longitude),
                events: position.events(observer.latitude, observer.longitude),
                position,
            }
        })
        .collect();

    Ok(Report {
        time: instant,
        observer,
        bodies,
        moon_phase: orrery::phase(ms)?,
    })
}

/// Format an event timestamp, or a dash when the event does not occur
fn format_event(ms: f64) -> String {
    let instant = Instant::from_millis(ms);
    if instant.is_finite() {
        instant.to_string()
    } else {
        "-".to_string()
    }
}

fn print_report(report: &Report) {
    println!("Time:     {}", report.time);
    println!(
        "Observer: {:.4}°, {:.4}°",
        report.observer.latitude, report.observer.longitude
    );
    println!();
    println!(
        "{:<8} {:>9} {:>8} {:>10} {:>8} {:>8} {:>8} {:>8}  {:<24} {:<24} {:<24}",
        "Body", "Lon", "Lat", "Dist (AU)", "RA (h)", "Dec", "Az", "El", "Rise", "Transit", "Set"
    );
    println!("{}", "-".repeat(160));

    for entry in &report.bodies {
        let p = &entry.position;
        println!(
            "{:<8} {:>9.4} {:>8.4} {:>10.6} {:>8.4} {:>8.4} {:>8.3} {:>8.3}  {:<24} {:<24} {:<24}",
            p.body.name(),
            p.longitude,
            p.latitude,
            p.distance,
            p.equatorial().ra_hours(),
            p.declination,
            entry.horizontal.azimuth,
            entry.horizontal.elevation,
            format_event(entry.events.rise),
            format_event(entry.events.transit),
            format_event(entry.events.set),
        );
        if let (Some(dawn), Some(dusk)) = (entry.events.dawn, entry.events.dusk) {
            println!(
                "{:<8} civil dawn {}, civil dusk {}",
                "",
                format_event(dawn),
                format_event(dusk)
            );
        }
    }

    println!();
    println!(
        "Moon phase: day {} ({})",
        report.moon_phase.number, report.moon_phase.label
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    let instant = match (args.time, args.millis) {
        (Some(time), _) => Instant::from(time),
        (None, Some(ms)) => Instant::from_millis(ms),
        (None, None) => Instant::from(Utc::now()),
    };
    if !instant.is_finite() {
        let millis = instant.as_millis();
        return Err(format!("Instant must be finite, got {millis}").into());
    }

    let observer = Observer::new(args.lat, args.lon);
    let bodies: Vec<Body> = match args.body {
        Some(body) => vec![body],
        None => Body::ALL.to_vec(),
    };

    let report = build_report(instant, observer, &bodies)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_before_1970() {
        let argv = ["sky_info", "--millis", "-1000", "--lon", "-71.08"];
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(args.millis, Some(-1000.0));
        assert_eq!(args.lon, -71.08);
    }

    #[test]
    fn test_time_and_millis_conflict() {
        let argv = ["sky_info", "--time", "2020-06-01T07:00:00Z", "--millis", "0"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_report_for_one_body() {
        let instant = Instant::from_millis(1_590_994_800_000.0);
        let observer = Observer::new(35.05, -106.62);
        let report = build_report(instant, observer, &[Body::Moon]).unwrap();
        assert_eq!(report.bodies.len(), 1);
        assert!(report.moon_phase.number < 30);
    }
}
