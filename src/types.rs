use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

pub const A: f64 = 6378137.; //meters, WGS-84
#[allow(clippy::excessive_precision)]
pub const E2: f64 = 6.69438002290341574957e-03;
/// Equatorial radius used to scale the tide-generating potential (meters).
pub const RE: f64 = 6378136.55;
pub const MASS_RATIO_SUN: f64 = 332945.943062;
pub const MASS_RATIO_MOON: f64 = 0.012300034;

/// Earth-fixed cartesian vector, meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    pub fn new(x: f64, y: f64, z: f64) -> Ecef {
        Ecef { x, y, z }
    }
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
    pub fn dot(&self, other: &Ecef) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    ///Distance from the polar axis
    pub fn equatorial_norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
    pub fn unit(&self) -> Ecef {
        let r = self.norm();
        Ecef::new(self.x / r, self.y / r, self.z / r)
    }
}

impl Add for Ecef {
    type Output = Ecef;
    fn add(self, rhs: Ecef) -> Ecef {
        Ecef::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Ecef {
    fn add_assign(&mut self, rhs: Ecef) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Mul<f64> for Ecef {
    type Output = Ecef;
    fn mul(self, rhs: f64) -> Ecef {
        Ecef::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Local topocentric components, meters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Enu {
    pub north: f64,
    pub east: f64,
    pub up: f64,
}
