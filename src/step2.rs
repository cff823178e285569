//! Frequency-dependent ("step 2") corrections to the nominal Love and Shida numbers.
//!
//! Tables 7.5a and 7.5b of IERS Conventions (2003), with the sign of the out-of-phase
//! transverse term of the diurnal band corrected as in the later erratum. Amplitudes are in
//! millimeters and the results are returned in meters.

use crate::{
    helpers::single,
    tide::StationGeometry,
    time::TideArgumentTime,
    types::Ecef,
};

#[allow(clippy::excessive_precision)]
const DEG_TO_RAD: f64 = 0.017453292519943295769;

/// Doodson-style multipliers of (s, h, p, N', ps) followed by the radial in-phase,
/// radial out-of-phase, transverse in-phase and transverse out-of-phase amplitudes.
pub type TideConstituent = ([f64; 5], [f64; 4]);

pub const DIURNAL: [TideConstituent; 31] = [
    ([-3., 0., 2., 0., 0.], [-0.01, 0., 0., 0.]),
    ([-3., 2., 0., 0., 0.], [-0.01, 0., 0., 0.]),
    ([-2., 0., 1., -1., 0.], [-0.02, 0., 0., 0.]),
    ([-2., 0., 1., 0., 0.], [-0.08, 0., -0.01, 0.01]),
    ([-2., 2., -1., 0., 0.], [-0.02, 0., 0., 0.]),
    ([-1., 0., 0., -1., 0.], [-0.10, 0., 0., 0.]),
    ([-1., 0., 0., 0., 0.], [-0.51, 0., -0.02, 0.03]),
    ([-1., 2., 0., 0., 0.], [0.01, 0., 0., 0.]),
    ([0., -2., 1., 0., 0.], [0.01, 0., 0., 0.]),
    ([0., 0., -1., 0., 0.], [0.02, 0., 0., 0.]),
    ([0., 0., 1., 0., 0.], [0.06, 0., 0., 0.]),
    ([0., 0., 1., 1., 0.], [0.01, 0., 0., 0.]),
    ([0., 2., -1., 0., 0.], [0.01, 0., 0., 0.]),
    ([1., -3., 0., 0., 1.], [-0.06, 0., 0., 0.]),
    ([1., -2., 0., -1., 0.], [0.01, 0., 0., 0.]),
    ([1., -2., 0., 0., 0.], [-1.23, -0.07, 0.06, 0.01]),
    ([1., -1., 0., 0., -1.], [0.02, 0., 0., 0.]),
    ([1., -1., 0., 0., 1.], [0.04, 0., 0., 0.]),
    ([1., 0., 0., -1., 0.], [-0.22, 0.01, 0.01, 0.]),
    ([1., 0., 0., 0., 0.], [12.00, -0.78, -0.67, -0.03]),
    ([1., 0., 0., 1., 0.], [1.73, -0.12, -0.10, 0.]),
    ([1., 0., 0., 2., 0.], [-0.04, 0., 0., 0.]),
    ([1., 1., 0., 0., -1.], [-0.50, -0.01, 0.03, 0.]),
    ([1., 1., 0., 0., 1.], [0.01, 0., 0., 0.]),
    ([0., 1., 0., 1., -1.], [-0.01, 0., 0., 0.]),
    ([1., 2., -2., 0., 0.], [-0.01, 0., 0., 0.]),
    ([1., 2., 0., 0., 0.], [-0.11, 0.01, 0.01, 0.]),
    ([2., -2., 1., 0., 0.], [-0.01, 0., 0., 0.]),
    ([2., 0., -1., 0., 0.], [-0.02, 0., 0., 0.]),
    ([3., 0., 0., 0., 0.], [0., 0., 0., 0.]),
    ([3., 0., 0., 1., 0.], [0., 0., 0., 0.]),
];

/// Long-period band. The amplitudes are single precision in the published routine.
pub const LONG_PERIOD: [([f64; 5], [f32; 4]); 5] = [
    ([0., 0., 0., 1., 0.], [0.47, 0.23, 0.16, 0.07]),
    ([0., 2., 0., 0., 0.], [-0.20, -0.12, -0.11, -0.05]),
    ([1., 0., -1., 0., 0.], [-0.11, -0.08, -0.09, -0.04]),
    ([2., 0., 0., 0., 0.], [-0.13, -0.11, -0.15, -0.07]),
    ([2., 0., 0., 1., 0.], [-0.05, -0.05, -0.06, -0.03]),
];

/// Mean arguments of the tide-generating bodies in degrees, reduced by whole turns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FundamentalArguments {
    /// mean longitude of the Moon
    pub s: f64,
    /// mean lunar time
    pub tau: f64,
    /// mean longitude of the Sun
    pub h: f64,
    /// longitude of the Moon's perigee
    pub p: f64,
    /// negative longitude of the Moon's ascending node
    pub zns: f64,
    /// longitude of the Sun's perigee
    pub ps: f64,
}

impl FundamentalArguments {
    pub fn at(time: &TideArgumentTime) -> FundamentalArguments {
        let t = time.centuries;
        let (t2, t3, t4) = (t * t, t * t * t, t * t * t * t);
        let mut s = 218.31664563 + 481267.88194 * t - 0.0014663889 * t2 + 0.00000185139 * t3;
        let tau = time.hour * 15. + 280.4606184 + 36000.7700536 * t + 0.00038793 * t2
            - 0.0000000258 * t3
            - s;
        let precession = single(1.396971278) * t
            + single(0.000308889) * t2
            + single(0.000000021) * t3
            + single(0.000000007) * t4;
        s += precession;
        let h = 280.46645 + 36000.7697489 * t + 0.00030322222 * t2 + single(0.000000020) * t3
            - single(0.00000000654) * t4;
        let p = 83.35324312 + 4069.01363525 * t - 0.01032172222 * t2 - 0.0000124991 * t3
            + 0.00000005263 * t4;
        let zns = 234.95544499 + 1934.13626197 * t - 0.00207561111 * t2 - 0.00000213944 * t3
            + 0.00000001650 * t4;
        let ps = 282.93734098 + 1.71945766667 * t + 0.00045688889 * t2 - 0.00000001778 * t3
            - 0.00000000334 * t4;
        // truncated remainder, sign follows the dividend
        FundamentalArguments {
            s: s % 360.,
            tau: tau % 360.,
            h: h % 360.,
            p: p % 360.,
            zns: zns % 360.,
            ps: ps % 360.,
        }
    }

    fn phase(&self, multipliers: &[f64; 5]) -> f64 {
        multipliers[0] * self.s
            + multipliers[1] * self.h
            + multipliers[2] * self.p
            + multipliers[3] * self.zns
            + multipliers[4] * self.ps
    }
}

///Diurnal band correction, meters
pub fn diurnal_correction(station: &StationGeometry, args: &FundamentalArguments) -> Ecef {
    let StationGeometry { sin_phi, cos_phi, .. } = *station;
    let longitude = station.longitude();
    let mut total = Ecef::default();
    for (multipliers, [radial_in, radial_out, transverse_in, transverse_out]) in DIURNAL.iter() {
        let theta = (args.tau + args.phase(multipliers)) * DEG_TO_RAD + longitude;
        let (sin_theta, cos_theta) = (theta.sin(), theta.cos());
        let dr = 2. * sin_phi * cos_phi * (radial_in * sin_theta + radial_out * cos_theta);
        let dn = (cos_phi * cos_phi - sin_phi * sin_phi)
            * (transverse_in * sin_theta + transverse_out * cos_theta);
        let de = sin_phi * (transverse_in * cos_theta - transverse_out * sin_theta);
        total += station.local_to_ecef(dr, dn, de);
    }
    total * 0.001
}

///Long-period band correction, meters. The band has no east component.
pub fn long_period_correction(station: &StationGeometry, args: &FundamentalArguments) -> Ecef {
    let StationGeometry { sin_phi, cos_phi, .. } = *station;
    let radial_shape = (3. * sin_phi * sin_phi - 1.) / 2.;
    let north_shape = 2. * cos_phi * sin_phi;
    let mut total = Ecef::default();
    for (multipliers, amplitudes) in LONG_PERIOD.iter() {
        let [radial_in, transverse_in, radial_out, transverse_out] = amplitudes.map(single);
        let theta = args.phase(multipliers) * DEG_TO_RAD;
        let (sin_theta, cos_theta) = (theta.sin(), theta.cos());
        let dr = radial_shape * (radial_in * cos_theta + radial_out * sin_theta);
        let dn = north_shape * (transverse_in * cos_theta + transverse_out * sin_theta);
        total += station.local_to_ecef(dr, dn, 0.);
    }
    total * 0.001
}
