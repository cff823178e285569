//! Civil date handling and the time scales used by the ephemeris and tide routines.
//!
//! Epochs are kept as an integer Modified Julian Date plus a UTC day fraction. UT1 is taken
//! equal to UTC and sidereal time is the mean (no nutation), consistent with the truncation
//! of the low-precision ephemeris.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    error::TideError,
    helpers::{wrap_two_pi, RAD},
    leap_seconds::{tai_minus_utc, LeapSeconds},
    types::Ecef,
};

pub const SECONDS_PER_DAY: f64 = 86400.;
pub const MINUTES_IN_DAY: u32 = 24 * 60;
const TT_MINUS_TAI: f64 = 32.184;
const MJD_J2000_MIDNIGHT: i32 = 51544;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    ///Validated calendar date, years 1901 through 2099
    pub fn new(year: i32, month: u32, day: u32) -> Result<CivilDate, TideError> {
        let invalid = TideError::InvalidDate { year, month, day };
        if !(1901..=2099).contains(&year) {
            return Err(invalid);
        }
        NaiveDate::from_ymd_opt(year, month, day).ok_or(invalid)?;
        Ok(CivilDate { year, month, day })
    }

    pub fn from_naive_date(date: NaiveDate) -> Result<CivilDate, TideError> {
        Self::new(date.year(), date.month(), date.day())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Modified Julian Date at 0h. Valid from March 1900 through February 2100.
    pub fn mjd(&self) -> i32 {
        let (year, month) = if self.month <= 2 {
            (self.year - 1, self.month + 12)
        } else {
            (self.year, self.month)
        };
        let days_in_years = (365.25 * f64::from(year)).trunc() as i32;
        let days_in_months = (30.6001 * f64::from(month + 1)).trunc() as i32;
        days_in_years + days_in_months + self.day as i32 - 679019
    }
}

/// A UTC instant as integer MJD plus day fraction. The fraction may reach 1.0 (next midnight).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Epoch {
    pub mjd: i32,
    pub fmjd: f64,
}

/// Time arguments of the frequency-dependent tide corrections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TideArgumentTime {
    /// Julian centuries of TT counted from MJD 51544.0
    pub centuries: f64,
    /// TT hour of the day
    pub hour: f64,
}

impl Epoch {
    pub fn new(mjd: i32, fmjd: f64) -> Epoch {
        debug_assert!(!fmjd.is_nan(), "epoch day fraction is NaN");
        Epoch { mjd, fmjd }
    }

    pub fn at_minute(date: &CivilDate, minute: u32) -> Epoch {
        debug_assert!(minute <= MINUTES_IN_DAY);
        Epoch::new(date.mjd(), f64::from(minute * 60) / SECONDS_PER_DAY)
    }

    pub fn utc_seconds_of_day(&self) -> f64 {
        self.fmjd * SECONDS_PER_DAY
    }

    pub fn julian_date_utc(&self) -> f64 {
        f64::from(self.mjd) + self.fmjd + 2400000.5
    }

    pub fn leap_seconds(&self) -> LeapSeconds {
        tai_minus_utc(self.mjd + self.fmjd.floor() as i32)
    }

    /// TT seconds past the UTC midnight of `mjd`
    pub fn tt_seconds_of_day(&self) -> f64 {
        let tai = self.utc_seconds_of_day() + f64::from(self.leap_seconds().tai_minus_utc);
        tai + TT_MINUS_TAI
    }

    pub fn tt_day_fraction(&self) -> f64 {
        self.tt_seconds_of_day() / SECONDS_PER_DAY
    }

    /// Julian centuries of TT since J2000.0 (JD 2451545.0)
    pub fn julian_centuries_tt(&self) -> f64 {
        let jd_tt = f64::from(self.mjd) + self.tt_day_fraction() + 2400000.5;
        (jd_tt - 2451545.) / 36525.
    }

    pub fn tide_argument_time(&self) -> TideArgumentTime {
        let mjd_tt = f64::from(self.mjd) + self.tt_day_fraction();
        TideArgumentTime {
            centuries: (mjd_tt - f64::from(MJD_J2000_MIDNIGHT)) / 36525.,
            hour: (mjd_tt - mjd_tt.trunc()) * 24.,
        }
    }

    /// Greenwich mean hour angle of the equinox in radians, [0, 2pi).
    pub fn greenwich_hour_angle(&self) -> f64 {
        let utc_fraction = self.utc_seconds_of_day() / SECONDS_PER_DAY;
        let days = f64::from(self.mjd - MJD_J2000_MIDNIGHT) + (utc_fraction - 0.5);
        let degrees = 280.46061837504 + 360.9856473662862 * days;
        let turns = (degrees / 360.).trunc();
        wrap_two_pi((degrees - turns * 360.) / RAD)
    }

    /// Rotates a vector from the true-of-date celestial frame into the Earth-fixed frame
    /// about the pole, ignoring polar motion.
    pub fn celestial_to_earth_fixed(&self, x: f64, y: f64, z: f64) -> Ecef {
        let hour_angle = self.greenwich_hour_angle();
        let (s, c) = (hour_angle.sin(), hour_angle.cos());
        Ecef::new(c * x + s * y, c * y - s * x, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::assert_almost_eq;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mjd() {
        assert_eq!(CivilDate::new(2021, 7, 5).unwrap().mjd(), 59400);
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().mjd(), 51544);
        assert_eq!(CivilDate::new(2000, 3, 1).unwrap().mjd(), 51604);
        assert_eq!(CivilDate::new(1901, 1, 1).unwrap().mjd(), 15385);
        assert_eq!(CivilDate::new(2099, 12, 31).unwrap().mjd(), 88068);
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(
            CivilDate::new(2021, 2, 30),
            Err(TideError::InvalidDate { year: 2021, month: 2, day: 30 })
        );
        assert!(CivilDate::new(2021, 4, 31).is_err());
        assert!(CivilDate::new(1900, 1, 1).is_err());
        assert!(CivilDate::new(2100, 1, 1).is_err());
        assert!(CivilDate::new(2021, 13, 1).is_err());
        assert!(CivilDate::new(2021, 0, 1).is_err());
        assert!(CivilDate::new(2021, 1, 0).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2021, 7, 5).unwrap();
        assert_eq!(CivilDate::from_naive_date(date), CivilDate::new(2021, 7, 5));
    }

    #[test]
    fn test_minute_epochs() {
        let date = CivilDate::new(2021, 7, 5).unwrap();
        assert_eq!(Epoch::at_minute(&date, 0).fmjd, 0.);
        assert_eq!(Epoch::at_minute(&date, 720).fmjd, 0.5);
        assert_eq!(Epoch::at_minute(&date, MINUTES_IN_DAY).fmjd, 1.);
        assert_eq!(Epoch::at_minute(&date, 1).utc_seconds_of_day().round(), 60.);
    }

    #[test]
    fn test_terrestrial_time() {
        let epoch = Epoch::at_minute(&CivilDate::new(2021, 7, 5).unwrap(), 0);
        assert_abs_diff_eq!(epoch.tt_seconds_of_day(), 69.184, epsilon = 1e-9);
        let j2000 = Epoch::new(51544, 0.5);
        assert_abs_diff_eq!(
            j2000.julian_centuries_tt(),
            (32. + 32.184) / 86400. / 36525.,
            epsilon = 1e-12
        );
        let args = j2000.tide_argument_time();
        assert_abs_diff_eq!(args.hour, 12. + 64.184 / 3600., epsilon = 1e-9);
        assert_abs_diff_eq!(args.centuries, (0.5 + 64.184 / 86400.) / 36525., epsilon = 1e-12);
    }

    #[test]
    fn test_hour_angle() {
        let j2000 = Epoch::new(51544, 0.5);
        assert_almost_eq(j2000.greenwich_hour_angle().to_degrees(), 280.46061837504, 1e-9);
        // 1995 Oct 1 9h UTC, GMST 2.524218 rad
        let epoch = Epoch::new(CivilDate::new(1995, 10, 1).unwrap().mjd(), 9. / 24.);
        assert_almost_eq(epoch.greenwich_hour_angle(), 2.524218, 1e-5);
        let late = Epoch::new(88068, 0.99);
        let angle = late.greenwich_hour_angle();
        assert!((0. ..std::f64::consts::TAU).contains(&angle));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let epoch = Epoch::new(59400, 0.25);
        let rotated = epoch.celestial_to_earth_fixed(1., 2., 3.);
        assert_abs_diff_eq!(rotated.norm(), Ecef::new(1., 2., 3.).norm(), epsilon = 1e-14);
        assert_eq!(rotated.z, 3.);
    }
}
