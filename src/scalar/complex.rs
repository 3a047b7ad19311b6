//! Floating-point complex numbers.
//!
//! Equality and the zero test use the fixed absolute tolerance [`EPSILON`]:
//! two values are equal when both parts differ by less than `EPSILON`, and a
//! value counts as zero (for division, inversion and pivoting) when its
//! squared modulus is below `EPSILON`. The tolerance does not scale with the
//! operands, so systems with very large or very small entries can be
//! misclassified.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use rand::Rng;

use crate::config::SampleOptions;
use crate::core::traits::Field;
use crate::error::{LfError, Result};

/// Absolute tolerance for equality and zero tests.
pub const EPSILON: f64 = 1e-10;

/// A complex number `re + im·i`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub fn from_real(re: f64) -> Self {
        Complex { re, im: 0.0 }
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Complex { re: 0.0, im: 1.0 }
    }

    pub fn modulus_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }

    pub fn conj(&self) -> Self {
        Complex {
            re: self.re,
            im: -self.im,
        }
    }

    fn is_real(&self) -> bool {
        self.im.abs() < EPSILON
    }
}

impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        (self.re - other.re).abs() < EPSILON && (self.im - other.im).abs() < EPSILON
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.modulus_squared() < EPSILON
    }
}

impl One for Complex {
    fn one() -> Self {
        Complex::new(1.0, 0.0)
    }
}

impl fmt::Display for Complex {
    /// Prints `re`, `imi` or `re+imi` / `re-imi` with full precision so the
    /// output parses back to an equal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_real() {
            return write!(f, "{}", self.re);
        }
        if self.re.abs() < EPSILON {
            return write!(f, "{}i", self.im);
        }
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

fn parse_part(part: &str, whole: &str) -> Result<f64> {
    match part.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LfError::InvalidFormat(format!(
            "'{part}' in '{whole}' is not a finite number"
        ))),
    }
}

/// Parse the coefficient in front of `i`: empty or a bare sign means ±1.
fn parse_imaginary(part: &str, whole: &str) -> Result<f64> {
    match part {
        "" | "+" => Ok(1.0),
        "-" => Ok(-1.0),
        _ => parse_part(part, whole),
    }
}

impl FromStr for Complex {
    type Err = LfError;

    /// Accepts `re`, `imi`, `re+imi`, `re-imi`, `i`, `+i`, `-i`; `j` may
    /// stand in for `i` and whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let text: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == 'j' { 'i' } else { c })
            .collect();
        if text.is_empty() {
            return Err(LfError::InvalidFormat(
                "empty string is not a complex number".to_string(),
            ));
        }

        let Some(body) = text.strip_suffix('i') else {
            return Ok(Complex::from_real(parse_part(&text, s)?));
        };

        // the last sign that is neither leading nor part of an exponent
        // separates the real part from the imaginary one
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .rev()
            .find(|&k| matches!(bytes[k], b'+' | b'-') && !matches!(bytes[k - 1], b'e' | b'E'));

        match split {
            Some(k) => Ok(Complex::new(
                parse_part(&body[..k], s)?,
                parse_imaginary(&body[k..], s)?,
            )),
            None => Ok(Complex::new(0.0, parse_imaginary(body, s)?)),
        }
    }
}

impl ToPrimitive for Complex {
    fn to_i64(&self) -> Option<i64> {
        if self.is_real() { self.re.to_i64() } else { None }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_real() { self.re.to_u64() } else { None }
    }

    fn to_f64(&self) -> Option<f64> {
        self.is_real().then_some(self.re)
    }
}

impl FromPrimitive for Complex {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Complex::from_real(n as f64))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Complex::from_real(n as f64))
    }

    fn from_f64(v: f64) -> Option<Self> {
        v.is_finite().then(|| Complex::from_real(v))
    }
}

impl Field for Complex {
    fn try_div(&self, rhs: &Self) -> Result<Self> {
        let denom = rhs.modulus_squared();
        if denom < EPSILON {
            return Err(LfError::DivisionByZero(format!("({self}) / ({rhs})")));
        }
        Ok(Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        ))
    }

    fn inverse(&self) -> Result<Self> {
        let denom = self.modulus_squared();
        if denom < EPSILON {
            return Err(LfError::DivisionByZero(format!(
                "{self} is zero and has no inverse"
            )));
        }
        Ok(Complex::new(self.re / denom, -self.im / denom))
    }

    /// Complex numbers are unordered: each part is drawn independently
    /// between the matching parts of `min` and `max`, in either order.
    fn random_in_range<R: Rng + ?Sized>(
        min: &Self,
        max: &Self,
        _opts: &SampleOptions,
        rng: &mut R,
    ) -> Result<Self> {
        let re = min.re + (max.re - min.re) * rng.r#gen::<f64>();
        let im = min.im + (max.im - min.im) * rng.r#gen::<f64>();
        Ok(Complex::new(re, im))
    }

    fn random_unbounded<R: Rng + ?Sized>(opts: &SampleOptions, rng: &mut R) -> Self {
        let width = 2.0 * opts.magnitude;
        let re = (rng.r#gen::<f64>() - 0.5) * width;
        let im = (rng.r#gen::<f64>() - 0.5) * width;
        Complex::new(re, im)
    }
}
