use serde::{Deserialize, Serialize};

use crate::{
    helpers::{modulus, RAD},
    types::{Ecef, Enu, A, E2},
};

/// Observing site on the WGS-84 ellipsoid surface. Degrees, longitude positive east.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub lat: f64,
    pub long: f64,
}

impl Site {
    ///Latitude in [-90, 90], longitude in [-360, 360]; longitude is kept in [-180, 180)
    pub fn new(lat: f64, long: f64) -> Site {
        debug_assert!((-90. ..=90.).contains(&lat), "latitude {lat} out of range");
        debug_assert!((-360. ..=360.).contains(&long), "longitude {long} out of range");
        Site {
            lat,
            long: modulus(long + 180., 360.) - 180.,
        }
    }

    /// Earth-fixed position and local basis, built once per run.
    pub fn frame(&self) -> SiteFrame {
        let lat = self.lat / RAD;
        let long = self.long / RAD;
        let (sin_lat, cos_lat) = (lat.sin(), lat.cos());
        let (sin_long, cos_long) = (long.sin(), long.cos());
        let n = A / (1. - E2 * sin_lat * sin_lat).sqrt();
        SiteFrame {
            position: Ecef::new(
                n * cos_lat * cos_long,
                n * cos_lat * sin_long,
                n * (1. - E2) * sin_lat,
            ),
            north: Ecef::new(-sin_lat * cos_long, -sin_lat * sin_long, cos_lat),
            east: Ecef::new(-sin_long, cos_long, 0.),
            up: Ecef::new(cos_lat * cos_long, cos_lat * sin_long, sin_lat),
        }
    }
}

/// Site position (meters) with its geodetic north/east/up unit vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteFrame {
    pub position: Ecef,
    pub north: Ecef,
    pub east: Ecef,
    pub up: Ecef,
}

impl SiteFrame {
    pub fn to_enu(&self, displacement: &Ecef) -> Enu {
        Enu {
            north: self.north.dot(displacement),
            east: self.east.dot(displacement),
            up: self.up.dot(displacement),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_longitude_normalization() {
        assert_eq!(Site::new(60., -32.).long, -32.);
        assert_eq!(Site::new(0., 328.).long, -32.);
        assert_eq!(Site::new(0., -360.).long, 0.);
        assert_eq!(Site::new(0., 180.).long, -180.);
    }

    #[test]
    fn test_position() {
        let equator = Site::new(0., 0.).frame();
        assert_abs_diff_eq!(equator.position.x, A, epsilon = 1e-9);
        let pole = Site::new(90., 0.).frame();
        // polar radius b = a (1 - f)
        assert_abs_diff_eq!(pole.position.z, 6356752.314140, epsilon = 1e-3);
        assert_abs_diff_eq!(pole.position.equatorial_norm(), 0., epsilon = 1e-6);
        let mid = Site::new(40., -75.).frame();
        assert_abs_diff_eq!(mid.position.x, 1266325.909, epsilon = 1e-3);
        assert_abs_diff_eq!(mid.position.y, -4725992.631, epsilon = 1e-3);
        assert_abs_diff_eq!(mid.position.z, 4077985.572, epsilon = 1e-3);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let frame = Site::new(-33.9, 151.2).frame();
        for v in [frame.north, frame.east, frame.up] {
            assert_abs_diff_eq!(v.norm(), 1., epsilon = 1e-15);
        }
        assert_abs_diff_eq!(frame.north.dot(&frame.east), 0., epsilon = 1e-15);
        assert_abs_diff_eq!(frame.north.dot(&frame.up), 0., epsilon = 1e-15);
        assert_abs_diff_eq!(frame.east.dot(&frame.up), 0., epsilon = 1e-15);
    }

    #[test]
    fn test_projection_axes() {
        let frame = Site::new(0., 90.).frame();
        let enu = frame.to_enu(&Ecef::new(0., 1., 0.));
        assert_abs_diff_eq!(enu.up, 1., epsilon = 1e-15);
        let enu = frame.to_enu(&Ecef::new(-1., 0., 0.));
        assert_abs_diff_eq!(enu.east, 1., epsilon = 1e-15);
        let enu = frame.to_enu(&Ecef::new(0., 0., 1.));
        assert_abs_diff_eq!(enu.north, 1., epsilon = 1e-15);
    }

    #[test]
    fn test_mirrored_longitude_flips_east() {
        let west = Site::new(45., -70.).frame();
        let east = Site::new(45., 70.).frame();
        let d = Ecef::new(0.02, -0.05, 0.11);
        let mirrored = Ecef::new(d.x, -d.y, d.z);
        let a = west.to_enu(&d);
        let b = east.to_enu(&mirrored);
        assert_abs_diff_eq!(a.north, b.north, epsilon = 1e-15);
        assert_abs_diff_eq!(a.up, b.up, epsilon = 1e-15);
        assert_abs_diff_eq!(a.east, -b.east, epsilon = 1e-15);
    }
}
