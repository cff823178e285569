use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

pub use config::TideConfig;
pub use ephemeris::{moon_position, sun_position, BodyState};
pub use error::TideError;
pub use site::{Site, SiteFrame};
pub use tide::{solid_tide_displacement, TideSystem};
pub use time::{CivilDate, Epoch, MINUTES_IN_DAY};
pub use types::{Ecef, Enu};
mod types;
mod helpers;
mod error;
pub mod leap_seconds;
pub mod time;
pub mod ephemeris;
pub mod site;
pub mod tide;
pub mod step2;
pub mod config;

/// One row of the daily series: seconds after 0h UTC and the displacement in meters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideSample {
    time_s: u32,
    north: f64,
    east: f64,
    up: f64,
}

impl Display for TideSample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:8.1}{:10.6}{:10.6}{:10.6}", f64::from(self.time_s), self.north, self.east, self.up)
    }
}

impl TideSample {
    pub fn new(time_s: u32, displacement: Enu) -> TideSample {
        TideSample { time_s, north: displacement.north, east: displacement.east, up: displacement.up }
    }

    pub fn get_time_s(&self) -> u32 {
        self.time_s
    }

    pub fn get_north(&self) -> f64 {
        self.north
    }

    pub fn get_east(&self) -> f64 {
        self.east
    }

    pub fn get_up(&self) -> f64 {
        self.up
    }

    pub fn get_enu(&self) -> Enu {
        Enu { north: self.north, east: self.east, up: self.up }
    }
}

/// Minute-by-minute displacement for one day, 1441 samples from 0 s to 86400 s.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TideSeries {
    pub samples: Vec<TideSample>,
    /// Some sample fell outside the span the leap second table is known to cover
    pub leap_seconds_extrapolated: bool,
}

impl Display for TideSeries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for sample in &self.samples {
            writeln!(f, "{}", sample)?;
        }
        Ok(())
    }
}

impl TideSeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TideSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TideSample> {
        self.samples.last()
    }
}

/// Solid Earth tide at a site for every minute of a UTC day, conventional tide-free system.
///
/// Latitude in degrees [-90, 90], longitude in degrees [-360, 360], positive east.
pub fn solid_earth_tide(year: i32, month: u32, day: u32, lat: f64, long: f64) -> Result<TideSeries, TideError> {
    solid_earth_tide_with(&TideConfig::default(), year, month, day, lat, long)
}

pub fn solid_earth_tide_with(
    config: &TideConfig,
    year: i32,
    month: u32,
    day: u32,
    lat: f64,
    long: f64,
) -> Result<TideSeries, TideError> {
    let date = CivilDate::new(year, month, day)?;
    let site = Site::new(lat, long);
    let frame = site.frame();
    debug!(mjd = date.mjd(), lat = site.lat, long = site.long, system = ?config.tide_system, "computing solid tide");

    let mut samples = Vec::with_capacity(MINUTES_IN_DAY as usize + 1);
    let mut leap_seconds_extrapolated = false;
    for minute in 0..=MINUTES_IN_DAY {
        let epoch = Epoch::at_minute(&date, minute);
        leap_seconds_extrapolated |= epoch.leap_seconds().extrapolated;
        let sun = sun_position(&epoch);
        let moon = moon_position(&epoch);
        let displacement = solid_tide_displacement(&frame.position, &epoch, &sun, &moon, config.tide_system);
        let sample = TideSample::new(minute * 60, frame.to_enu(&displacement));
        trace!(time_s = sample.time_s, north = sample.north, east = sample.east, up = sample.up);
        samples.push(sample);
    }
    if leap_seconds_extrapolated {
        warn!(
            "{}-{:02}-{:02} is outside the leap second table, TAI-UTC was extrapolated",
            year, month, day
        );
    }
    Ok(TideSeries { samples, leap_seconds_extrapolated })
}
