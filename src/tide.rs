//! Solid Earth tide displacement of a station in the Earth-fixed frame.
//!
//! Degree-2 and degree-3 in-phase response with latitude-dependent Love and Shida numbers,
//! the out-of-phase and latitude corrections of IERS Conventions (2003) section 7.1.2 (step 1),
//! and the frequency-dependent corrections of [`crate::step2`] (step 2).

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    ephemeris::BodyState,
    step2::{diurnal_correction, long_period_correction, FundamentalArguments},
    time::Epoch,
    types::{Ecef, MASS_RATIO_MOON, MASS_RATIO_SUN, RE},
};

const H20: f64 = 0.6078;
const L20: f64 = 0.0847;
const H3: f64 = 0.292;
const L3: f64 = 0.015;
/// Amplitude of the permanent degree-2 potential, meters
const PERMANENT_TIDE: f64 = 0.31460;

/// Which permanent deformation the returned displacement is referred to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TideSystem {
    /// Conventional tide free: the displacement includes the permanent tide
    #[default]
    TideFree,
    /// Mean tide: the permanent tide is taken out of the displacement
    Mean,
}

/// Geocentric latitude and longitude of the station as direction cosines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationGeometry {
    pub position: Ecef,
    pub radius: f64,
    pub sin_phi: f64,
    pub cos_phi: f64,
    pub sin_la: f64,
    pub cos_la: f64,
}

impl StationGeometry {
    pub fn new(position: &Ecef) -> StationGeometry {
        let radius = position.norm();
        let sin_phi = position.z / radius;
        let cos_phi = position.equatorial_norm() / radius;
        StationGeometry {
            position: *position,
            radius,
            sin_phi,
            cos_phi,
            sin_la: position.y / cos_phi / radius,
            cos_la: position.x / cos_phi / radius,
        }
    }

    ///Radians
    pub fn longitude(&self) -> f64 {
        self.position.y.atan2(self.position.x)
    }

    /// Radial, north and east components to Earth-fixed cartesian.
    pub fn local_to_ecef(&self, dr: f64, dn: f64, de: f64) -> Ecef {
        let (sin_phi, cos_phi) = (self.sin_phi, self.cos_phi);
        let (sin_la, cos_la) = (self.sin_la, self.cos_la);
        Ecef::new(
            dr * cos_la * cos_phi - de * sin_la - dn * sin_phi * cos_la,
            dr * sin_la * cos_phi + de * cos_la - dn * sin_phi * sin_la,
            dr * sin_phi + dn * cos_phi,
        )
    }
}

/// A perturbing body with its degree-2 and degree-3 scale factors (meters).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Forcing {
    pub position: Ecef,
    pub distance: f64,
    pub degree2: f64,
    pub degree3: f64,
}

impl Forcing {
    pub fn new(body: &BodyState, mass_ratio: f64) -> Forcing {
        let distance = body.distance_m();
        let ratio = RE / distance;
        let degree2 = mass_ratio * RE * ratio * ratio * ratio;
        Forcing {
            position: body.position,
            distance,
            degree2,
            degree3: degree2 * ratio,
        }
    }

    /// x*y terms shared by the semidiurnal corrections, rotated to the station meridian
    fn sectorial(&self, station: &StationGeometry) -> (f64, f64) {
        let cos_2la = station.cos_la * station.cos_la - station.sin_la * station.sin_la;
        let sin_2la = 2. * station.cos_la * station.sin_la;
        let Ecef { x, y, .. } = self.position;
        let difference = x * x - y * y;
        (
            difference * sin_2la - 2. * x * y * cos_2la,
            difference * cos_2la + 2. * x * y * sin_2la,
        )
    }

    /// z times the body's equatorial component along and across the station meridian
    fn tesseral(&self, station: &StationGeometry) -> (f64, f64) {
        let Ecef { x, y, z } = self.position;
        (
            z * (x * station.cos_la + y * station.sin_la),
            z * (x * station.sin_la - y * station.cos_la),
        )
    }
}

/// Love and Shida numbers of degree 2 at the station's latitude.
pub fn degree2_numbers(station: &StationGeometry) -> (f64, f64) {
    let shape = 1. - 3. / 2. * station.cos_phi * station.cos_phi;
    (H20 - 0.0006 * shape, L20 + 0.0002 * shape)
}

/// In-phase degree-2 and degree-3 displacement of one body.
pub fn in_phase(station: &StationGeometry, forcing: &Forcing) -> Ecef {
    let (h2, l2) = degree2_numbers(station);
    let cos_zenith = station.position.dot(&forcing.position) / station.radius / forcing.distance;
    let p2 = 3. * (h2 / 2. - l2) * cos_zenith * cos_zenith - h2 / 2.;
    let x2 = 3. * l2 * cos_zenith;
    let p3 = 5. / 2. * (H3 - 3. * L3) * cos_zenith.powi(3) + 3. / 2. * (L3 - H3) * cos_zenith;
    let x3 = 3. * L3 / 2. * (5. * cos_zenith * cos_zenith - 1.);

    let body = forcing.position * (1. / forcing.distance);
    let up = station.position * (1. / station.radius);
    let degree2 = body * (x2 * forcing.degree2) + up * (p2 * forcing.degree2);
    let degree3 = body * (x3 * forcing.degree3) + up * (p3 * forcing.degree3);
    degree2 + degree3
}

/// Out-of-phase correction from mantle anelasticity, diurnal band.
pub fn out_of_phase_diurnal(station: &StationGeometry, bodies: &[Forcing; 2]) -> Ecef {
    let dhi = -0.0025;
    let dli = -0.0007;
    let (sin_phi, cos_phi) = (station.sin_phi, station.cos_phi);
    let cos_2phi = cos_phi * cos_phi - sin_phi * sin_phi;
    let (mut dr, mut dn, mut de) = (0., 0., 0.);
    for body in bodies {
        let (along, across) = body.tesseral(station);
        let scale = body.degree2 / (body.distance * body.distance);
        dr += -3. * dhi * sin_phi * cos_phi * scale * across;
        dn += -3. * dli * cos_2phi * scale * across;
        de += -3. * dli * sin_phi * scale * along;
    }
    station.local_to_ecef(dr, dn, de)
}

/// Out-of-phase correction from mantle anelasticity, semidiurnal band.
pub fn out_of_phase_semidiurnal(station: &StationGeometry, bodies: &[Forcing; 2]) -> Ecef {
    let dhi = -0.0022;
    let dli = -0.0007;
    let (sin_phi, cos_phi) = (station.sin_phi, station.cos_phi);
    let (mut dr, mut dn, mut de) = (0., 0., 0.);
    for body in bodies {
        let (sine, cosine) = body.sectorial(station);
        let scale = body.degree2 / (body.distance * body.distance);
        dr += -3. / 4. * dhi * cos_phi * cos_phi * scale * sine;
        dn += 3. / 2. * dli * sin_phi * cos_phi * scale * sine;
        de += -3. / 2. * dli * cos_phi * scale * cosine;
    }
    station.local_to_ecef(dr, dn, de)
}

/// Transverse correction from the latitude dependence of l1 in the diurnal and semidiurnal bands.
pub fn latitude_dependence(station: &StationGeometry, bodies: &[Forcing; 2]) -> Ecef {
    let l1_diurnal = 0.0012;
    let l1_semidiurnal = 0.0024;
    let (sin_phi, cos_phi) = (station.sin_phi, station.cos_phi);
    let cos_2phi = cos_phi * cos_phi - sin_phi * sin_phi;

    let (mut dn, mut de) = (0., 0.);
    for body in bodies {
        let (along, across) = body.tesseral(station);
        let scale = body.degree2 / (body.distance * body.distance);
        dn += -l1_diurnal * sin_phi * sin_phi * scale * along;
        de += l1_diurnal * sin_phi * cos_2phi * scale * across;
    }
    let diurnal = station.local_to_ecef(0., 3. * dn, 3. * de);

    let (mut dn, mut de) = (0., 0.);
    for body in bodies {
        let (sine, cosine) = body.sectorial(station);
        let scale = body.degree2 / (body.distance * body.distance);
        dn += -l1_semidiurnal / 2. * sin_phi * cos_phi * scale * cosine;
        de += -l1_semidiurnal / 2. * sin_phi * sin_phi * cos_phi * scale * sine;
    }
    diurnal + station.local_to_ecef(0., 3. * dn, 3. * de)
}

/// Displacement that takes the permanent tide out of a conventional tide-free result.
pub fn permanent_tide(station: &StationGeometry) -> Ecef {
    let (h2, l2) = degree2_numbers(station);
    let (sin_phi, cos_phi) = (station.sin_phi, station.cos_phi);
    let scale = -(5. / (4. * PI)).sqrt() * PERMANENT_TIDE;
    let dr = scale * h2 * (3. / 2. * sin_phi * sin_phi - 0.5);
    let dn = scale * l2 * 3. * cos_phi * sin_phi;
    station.local_to_ecef(dr, dn, 0.) * -1.
}

/// Solid tide displacement of the station at `position` (meters, Earth-fixed).
pub fn solid_tide_displacement(
    position: &Ecef,
    epoch: &Epoch,
    sun: &BodyState,
    moon: &BodyState,
    system: TideSystem,
) -> Ecef {
    let station = StationGeometry::new(position);
    let bodies = [
        Forcing::new(sun, MASS_RATIO_SUN),
        Forcing::new(moon, MASS_RATIO_MOON),
    ];

    let mut displacement = in_phase(&station, &bodies[0]) + in_phase(&station, &bodies[1]);
    displacement += out_of_phase_diurnal(&station, &bodies);
    displacement += out_of_phase_semidiurnal(&station, &bodies);
    displacement += latitude_dependence(&station, &bodies);

    let args = FundamentalArguments::at(&epoch.tide_argument_time());
    displacement += diurnal_correction(&station, &args);
    displacement += long_period_correction(&station, &args);

    if system == TideSystem::Mean {
        displacement += permanent_tide(&station);
    }
    trace!(x = displacement.x, y = displacement.y, z = displacement.z, "tide displacement");
    displacement
}
