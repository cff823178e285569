//! Low-precision geocentric coordinates of the Sun and Moon.
//!
//! Series from Montenbruck & Gill, "Satellite Orbits" (2000), section 3.3.2, referred to the
//! mean equinox of date and rotated into the Earth-fixed frame with the mean Greenwich hour
//! angle. Accuracy is at the level of the truncated series (~0.1 deg for the Sun's longitude,
//! a few arcminutes for the Moon), which is ample for solid tides.

use serde::{Deserialize, Serialize};

use crate::{
    helpers::{single, wrap_degrees, RAD},
    time::Epoch,
    types::{Ecef, A},
};

/// Obliquity of the J2000 ecliptic, degrees
const OBLIQUITY_J2000: f64 = 23.43929111;
/// General precession in longitude, degrees per century
const PRECESSION_RATE: f64 = 1.39720;

/// Lunar periodic term: amplitude and integer multipliers of (l, l', F, D).
type LunarTerm = (f64, [f64; 4]);

/// Ecliptic longitude terms, arcseconds
const MOON_LONGITUDE: [LunarTerm; 14] = [
    (22640., [1., 0., 0., 0.]),
    (769., [2., 0., 0., 0.]),
    (-4586., [1., 0., 0., -2.]),
    (2370., [0., 0., 0., 2.]),
    (-668., [0., 1., 0., 0.]),
    (-412., [0., 0., 2., 0.]),
    (-212., [2., 0., 0., -2.]),
    (-206., [1., 1., 0., -2.]),
    (192., [1., 0., 0., 2.]),
    (-165., [0., 1., 0., -2.]),
    (148., [1., -1., 0., 0.]),
    (-125., [0., 0., 0., 1.]),
    (-110., [1., 1., 0., 0.]),
    (-55., [0., 0., 2., -2.]),
];

/// Ecliptic latitude terms after the leading 18520" term, arcseconds
const MOON_LATITUDE: [LunarTerm; 7] = [
    (-526., [0., 0., 1., -2.]),
    (44., [1., 0., 1., -2.]),
    (-31., [-1., 0., 1., -2.]),
    (-25., [-2., 0., 1., 0.]),
    (-23., [0., 1., 1., -2.]),
    (21., [-1., 0., 1., 0.]),
    (11., [0., -1., 1., -2.]),
];

/// Distance terms, kilometers (cosine series about 385000 km)
const MOON_DISTANCE: [LunarTerm; 8] = [
    (-20905., [1., 0., 0., 0.]),
    (-3699., [-1., 0., 0., 2.]),
    (-2956., [0., 0., 0., 2.]),
    (-570., [2., 0., 0., 0.]),
    (246., [2., 0., 0., -2.]),
    (-205., [0., 1., 0., -2.]),
    (-171., [1., 0., 0., 2.]),
    (-152., [1., 1., 0., -2.]),
];

/// Geocentric Earth-fixed position of a perturbing body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub position: Ecef,
}

impl BodyState {
    pub fn unit(&self) -> Ecef {
        self.position.unit()
    }
    pub fn distance_m(&self) -> f64 {
        self.position.norm()
    }
    pub fn distance_earth_radii(&self) -> f64 {
        self.distance_m() / A
    }
}

pub fn sun_position(epoch: &Epoch) -> BodyState {
    let obliquity = OBLIQUITY_J2000 / RAD;
    let (sin_obliquity, cos_obliquity) = (obliquity.sin(), obliquity.cos());
    // longitude of perigee, RAAN + argument of perigee
    let perigee = 282.9400;

    let t = epoch.julian_centuries_tt();
    let anomaly_deg = wrap_degrees(357.5256 + 35999.049 * t);
    let anomaly = anomaly_deg / RAD;
    let anomaly2 = anomaly + anomaly;

    let distance = (149.619 - 2.499 * anomaly.cos() - 0.021 * anomaly2.cos()) * 1.0e9;
    let longitude_deg =
        perigee + anomaly_deg + (6892. * anomaly.sin() + 72. * anomaly2.sin()) / 3600.;
    let longitude = wrap_degrees(longitude_deg + PRECESSION_RATE * t) / RAD;
    let (sin_lon, cos_lon) = (longitude.sin(), longitude.cos());

    let position = epoch.celestial_to_earth_fixed(
        distance * cos_lon,
        distance * sin_lon * cos_obliquity,
        distance * sin_lon * sin_obliquity,
    );
    BodyState { position }
}

/// Fundamental arguments of the lunar series in degrees: mean longitude L0 and the
/// multiplier basis (l, l', F, D).
fn lunar_arguments(t: f64) -> (f64, [f64; 4]) {
    // mean longitude, referred to the J2000 equinox
    let mean_longitude = wrap_degrees(218.31617 + 481267.88088 * t - single(1.3972) * t);
    let moon_anomaly = wrap_degrees(134.96292 + 477198.86753 * t);
    let sun_anomaly = wrap_degrees(357.52543 + 35999.04944 * t);
    let node_distance = wrap_degrees(93.27283 + 483202.01873 * t);
    let elongation = wrap_degrees(297.85027 + 445267.11135 * t);
    (
        mean_longitude,
        [moon_anomaly, sun_anomaly, node_distance, elongation],
    )
}

fn argument(multipliers: &[f64; 4], basis: &[f64; 4]) -> f64 {
    multipliers[0] * basis[0]
        + multipliers[1] * basis[1]
        + multipliers[2] * basis[2]
        + multipliers[3] * basis[3]
}

pub fn moon_position(epoch: &Epoch) -> BodyState {
    let t = epoch.julian_centuries_tt();
    let (mean_longitude, basis) = lunar_arguments(t);
    let [moon_anomaly, sun_anomaly, node_distance, _] = basis;

    let mut longitude_deg = mean_longitude;
    for (amplitude, multipliers) in MOON_LONGITUDE.iter() {
        longitude_deg += amplitude / 3600. * (argument(multipliers, &basis) / RAD).sin();
    }

    let q = 412. / 3600. * ((node_distance + node_distance) / RAD).sin()
        + 541. / 3600. * (sun_anomaly / RAD).sin();
    let mut latitude_deg =
        18520. / 3600. * ((node_distance + longitude_deg - mean_longitude + q) / RAD).sin();
    for (amplitude, multipliers) in MOON_LATITUDE.iter() {
        latitude_deg += amplitude / 3600. * (argument(multipliers, &basis) / RAD).sin();
    }

    let mut distance = 385000. * 1000.;
    for (amplitude, multipliers) in MOON_DISTANCE.iter() {
        distance += amplitude * 1000. * (argument(multipliers, &basis) / RAD).cos();
    }
    debug_assert!(moon_anomaly.is_finite(), "lunar arguments are not finite");

    let longitude = wrap_degrees(longitude_deg + PRECESSION_RATE * t) / RAD;
    let latitude = latitude_deg / RAD;
    let (sin_lat, cos_lat) = (latitude.sin(), latitude.cos());
    let (sin_lon, cos_lon) = (longitude.sin(), longitude.cos());

    let ecliptic = [
        distance * cos_lon * cos_lat,
        distance * sin_lon * cos_lat,
        distance * sin_lat,
    ];
    // ecliptic to equator, rotation by -obliquity about x
    let obliquity = OBLIQUITY_J2000 / RAD;
    let (s, c) = ((-obliquity).sin(), (-obliquity).cos());
    let equatorial = [
        ecliptic[0],
        c * ecliptic[1] + s * ecliptic[2],
        c * ecliptic[2] - s * ecliptic[1],
    ];
    let position = epoch.celestial_to_earth_fixed(equatorial[0], equatorial[1], equatorial[2]);
    BodyState { position }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::CivilDate;
    use approx::assert_abs_diff_eq;

    fn epoch(year: i32, month: u32, day: u32, fraction: f64) -> Epoch {
        Epoch::new(CivilDate::new(year, month, day).unwrap().mjd(), fraction)
    }

    #[test]
    fn test_sun_distance_follows_seasons() {
        // perihelion early January, aphelion early July
        let january = sun_position(&epoch(2021, 1, 3, 0.));
        let july = sun_position(&epoch(2021, 7, 5, 0.));
        assert_abs_diff_eq!(january.distance_m(), 1.471e11, epsilon = 0.002e11);
        assert_abs_diff_eq!(july.distance_m(), 1.521e11, epsilon = 0.002e11);
        assert_abs_diff_eq!(july.distance_earth_radii(), 23846.6, epsilon = 1.);
    }

    #[test]
    fn test_sun_declination() {
        let solstice = sun_position(&epoch(2021, 6, 21, 0.15));
        let declination = solstice.unit().z.asin().to_degrees();
        assert_abs_diff_eq!(declination, 23.44, epsilon = 0.05);
        let equinox = sun_position(&epoch(2021, 3, 20, 0.4));
        assert_abs_diff_eq!(equinox.unit().z.asin().to_degrees(), 0., epsilon = 0.1);
    }

    #[test]
    fn test_sun_transits_greenwich_near_noon() {
        // equation of time is close to zero mid-April
        let noon = sun_position(&epoch(2021, 4, 15, 0.5));
        let hour_angle = (-noon.unit().y).atan2(noon.unit().x).to_degrees();
        assert_abs_diff_eq!(hour_angle, 0., epsilon = 0.5);
    }

    #[test]
    fn test_moon_distance_range() {
        let date = CivilDate::new(2021, 7, 5).unwrap();
        for day in 0..30 {
            let moon = moon_position(&Epoch::new(date.mjd() + day, 0.));
            let radii = moon.distance_earth_radii();
            assert!((55.0..64.5).contains(&radii), "{radii}");
        }
        let moon = moon_position(&epoch(2021, 7, 5, 0.));
        assert_abs_diff_eq!(moon.distance_earth_radii(), 63.525, epsilon = 0.01);
    }

    #[test]
    fn test_moon_declination_bounded() {
        let date = CivilDate::new(2021, 1, 1).unwrap();
        for day in 0..60 {
            let moon = moon_position(&Epoch::new(date.mjd() + day, 0.3));
            let declination = moon.unit().z.asin().to_degrees();
            assert!(declination.abs() < 29.5, "{declination}");
        }
    }

    #[test]
    fn test_unit_vectors() {
        for minute in [0, 500, 1440] {
            let epoch = Epoch::at_minute(&CivilDate::new(2099, 12, 31).unwrap(), minute);
            assert_abs_diff_eq!(sun_position(&epoch).unit().norm(), 1., epsilon = 1e-15);
            assert_abs_diff_eq!(moon_position(&epoch).unit().norm(), 1., epsilon = 1e-15);
        }
    }
}
