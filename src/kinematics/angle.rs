// src/kinematics/angle.rs
//! Angle strings as they appear in DH tables → degrees.
//!
//! Two shapes exist on the page:
//! - plain decimals, already in radians (`0`, `1.570796327`);
//! - rational multiples of π (`π`, `π/2`, `-π/2`, `1/2π`, `2/3π`).
//!
//! A π expression is read as an exact [`Ratio`] coefficient first, where a
//! bare `π` (optionally signed) stands for the digit `1`. Only the final
//! `coefficient × π` step happens in floating point.

use std::f64::consts::PI;

use crate::config::consts::PI_SYMBOL;
use crate::error::AngleError;
use super::ratio::{ ParseRatioError, Ratio };

pub fn angle_to_degrees(raw: &str) -> Result<f64, AngleError> {
    let text = raw.trim().replace('\u{2212}', "-");

    if text.contains(PI_SYMBOL) {
        let coefficient = pi_coefficient(&text)?;
        Ok((coefficient.to_f64() * PI).to_degrees())
    } else {
        text.parse::<f64>()
            .map(f64::to_degrees)
            .map_err(|_| AngleError::Decimal(s!(raw)))
    }
}

/// The rational that multiplies π in `text`. π is a factor, never a digit:
/// `1/2π` is 1/2 and `2π` is 2, while a bare or signed `π` counts as `1`.
pub fn pi_coefficient(text: &str) -> Result<Ratio, AngleError> {
    if text.matches(PI_SYMBOL).count() > 1 {
        return Err(AngleError::RepeatedPi(s!(text)));
    }
    let residual = match text.split_once('/') {
        Some((num, den)) => join!(&unit_for_pi(num), "/", &unit_for_pi(den)),
        None => unit_for_pi(text),
    };
    residual.parse::<Ratio>().map_err(|e| match e {
        ParseRatioError::ZeroDenominator => AngleError::ZeroDenominator(s!(text)),
        ParseRatioError::Invalid => AngleError::Coefficient(s!(text)),
    })
}

/// Drop π from one side of a fraction. Where π was the whole term it becomes `1`.
fn unit_for_pi(term: &str) -> String {
    if !term.contains(PI_SYMBOL) {
        return s!(term);
    }
    let rest = term.replacen(PI_SYMBOL, "", 1);
    match rest.trim() {
        "" => s!("1"),
        sign @ ("-" | "+") => join!(sign, "1"),
        coefficient => s!(coefficient),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(s: &str) -> f64 { angle_to_degrees(s).unwrap() }

    #[test]
    fn plain_decimals_are_radians() {
        for s in ["0", "1.570796327", "-0.5", "3", "1e-3"] {
            assert_eq!(deg(s), s.parse::<f64>().unwrap().to_degrees(), "{s}");
        }
        assert_eq!(deg("0"), 0.0);
    }

    #[test]
    fn pi_forms() {
        assert_eq!(deg("π"), 180.0);
        assert_eq!(deg("π/2"), 90.0);
        assert_eq!(deg("1/2π"), 90.0);
        assert_eq!(deg("-π/2"), -90.0);
        assert_eq!(deg("-π"), -180.0);
        assert_eq!(deg("2π"), 360.0);
        assert!((deg("2/3π") - 120.0).abs() < 1e-9);
        assert!((deg("2π/3") - 120.0).abs() < 1e-9);
    }

    #[test]
    fn whitespace_and_unicode_minus() {
        assert_eq!(deg("  π/2 "), 90.0);
        assert_eq!(deg("\u{2212}π/2"), -90.0);
        assert_eq!(deg("\u{2212}1.0"), (-1.0f64).to_degrees());
    }

    #[test]
    fn coefficients_stay_exact() {
        assert_eq!(pi_coefficient("1/2π").unwrap(), Ratio::new(1, 2).unwrap());
        assert_eq!(pi_coefficient("-π/2").unwrap(), Ratio::new(-1, 2).unwrap());
        assert_eq!(pi_coefficient("π").unwrap(), Ratio::ONE);
        assert_eq!(pi_coefficient("4/6π").unwrap(), Ratio::new(2, 3).unwrap());
    }

    #[test]
    fn bad_pi_expressions() {
        assert_eq!(angle_to_degrees("abcπ"), Err(AngleError::Coefficient(s!("abcπ"))));
        assert_eq!(angle_to_degrees("π/0"), Err(AngleError::ZeroDenominator(s!("π/0"))));
        assert_eq!(angle_to_degrees("ππ"), Err(AngleError::RepeatedPi(s!("ππ"))));
        assert!(angle_to_degrees("π/x").is_err());
    }

    #[test]
    fn bad_decimal() {
        assert_eq!(angle_to_degrees("ninety"), Err(AngleError::Decimal(s!("ninety"))));
        assert!(angle_to_degrees("").is_err());
    }
}
