use std::f64;

/// Degrees per radian. Angles in the series are converted by dividing by this.
pub const RAD: f64 = 180. / f64::consts::PI;

pub fn modulus(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

/// Promotes a coefficient that the published tide routines carry at single precision.
pub fn single(value: f32) -> f64 {
    f64::from(value)
}

/// Reduces an angle in degrees to [0, 360).
pub fn wrap_degrees(angle: f64) -> f64 {
    angle.rem_euclid(360.)
}

/// Reduces an angle in radians to [0, 2pi) by whole turns, the way the hour angle is reduced.
pub fn wrap_two_pi(angle: f64) -> f64 {
    let two_pi = f64::consts::PI + f64::consts::PI;
    let mut wrapped = angle;
    while wrapped > two_pi {
        wrapped -= two_pi;
    }
    while wrapped < 0. {
        wrapped += two_pi;
    }
    wrapped
}

#[cfg(test)]
pub fn assert_almost_eq(a: f64, b: f64, tolerance: f64) {
    if (a - b).abs() > tolerance {
        panic!("{a} differs from {b} by more than {tolerance}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_modulus() {
        assert_eq!(modulus(-32., 360.), 328.);
        assert_eq!(modulus(370., 360.), 10.);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap_degrees(-30.), 330.);
        assert_eq!(wrap_degrees(725.5), 5.5);
        assert_almost_eq(wrap_two_pi(-PI / 2.), 1.5 * PI, 1e-15);
        assert_almost_eq(wrap_two_pi(5. * PI), PI, 1e-14);
        assert_eq!(wrap_two_pi(1.), 1.);
    }

    #[test]
    fn test_single_promotion() {
        assert_ne!(single(1.3972), 1.3972);
        assert_almost_eq(single(1.3972), 1.3972, 1e-7);
    }
}
