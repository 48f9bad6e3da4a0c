// src/kinematics/ratio.rs
// Exact rational numbers for π coefficients ("2/3", "-1/2", "0.25").

use std::str::FromStr;
use thiserror::Error;

/// Reduced fraction; `den` is always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratio {
    num: i64,
    den: i64,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseRatioError {
    #[error("not an integer, decimal or n/d fraction")]
    Invalid,
    #[error("zero denominator")]
    ZeroDenominator,
}

impl Ratio {
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    pub fn new(num: i64, den: i64) -> Option<Self> {
        if den == 0 { return None; }
        let g = gcd(num, den).max(1);
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = num.checked_neg()?;
            den = den.checked_neg()?;
        }
        Some(Self { num, den })
    }

    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    i64::try_from(a).unwrap_or(i64::MAX)
}

/// Unsigned run of ASCII digits, no sign, no separators.
fn digits(s: &str) -> Result<i64, ParseRatioError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseRatioError::Invalid);
    }
    s.parse::<i64>().map_err(|_| ParseRatioError::Invalid)
}

/// "12.5" → 125/10; "5." and ".5" are accepted.
fn decimal(s: &str) -> Result<(i64, i64), ParseRatioError> {
    let Some((int, frac)) = s.split_once('.') else {
        return Ok((digits(s)?, 1));
    };
    if int.is_empty() && frac.is_empty() {
        return Err(ParseRatioError::Invalid);
    }
    let int = if int.is_empty() { 0 } else { digits(int)? };
    if frac.is_empty() {
        return Ok((int, 1));
    }
    let scale = u32::try_from(frac.len()).ok()
        .and_then(|n| 10i64.checked_pow(n))
        .ok_or(ParseRatioError::Invalid)?;
    let num = int.checked_mul(scale)
        .and_then(|v| v.checked_add(digits(frac).ok()?))
        .ok_or(ParseRatioError::Invalid)?;
    Ok((num, scale))
}

impl FromStr for Ratio {
    type Err = ParseRatioError;

    /// `[+-]int`, `[+-]decimal`, or `[+-]int/int`. Whitespace around the whole is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (num, den) = match body.split_once('/') {
            Some((n, d)) => (digits(n)?, digits(d)?),
            None => decimal(body)?,
        };
        if den == 0 {
            return Err(ParseRatioError::ZeroDenominator);
        }
        let num = if negative { -num } else { num };
        Ratio::new(num, den).ok_or(ParseRatioError::Invalid)
    }
}
