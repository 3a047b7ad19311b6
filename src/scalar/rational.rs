//! Exact rational numbers.
//!
//! A [`Rational`] is always stored in lowest terms with an arbitrary-precision
//! signed numerator and an unsigned, strictly positive denominator, so addition, subtraction,
//! multiplication and negation are total. Equality and ordering are exact and
//! never pass through floating point.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
use rand::Rng;

use crate::config::SampleOptions;
use crate::core::traits::Field;
use crate::error::{LfError, Result};

/// Grid used when converting an `f64` into a rational.
const F64_GRID: u32 = 1_000_000;

/// Bits kept on each side when approximating a huge fraction as `f64`.
const F64_BITS: u64 = 1000;

/// A reduced fraction `num / den` with `den > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    num: BigInt,
    den: BigUint,
}

impl Rational {
    /// Create `numerator / denominator`, reduced to lowest terms with the sign
    /// on the numerator.
    ///
    /// Fails with [`LfError::DivisionByZero`] if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let (num, den): (BigInt, BigInt) = (numerator.into(), denominator.into());
        if den.is_zero() {
            return Err(LfError::DivisionByZero(format!(
                "rational {num}/0 has a zero denominator"
            )));
        }
        Ok(Self::reduced(num, den))
    }

    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Rational {
            num: n.into(),
            den: BigUint::one(),
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.num
    }

    pub fn denominator(&self) -> &BigUint {
        &self.den
    }

    /// Approximate value as a double; saturates to infinity for huge values.
    pub fn as_f64(&self) -> f64 {
        let excess = self.num.bits().max(self.den.bits()).saturating_sub(F64_BITS);
        let (num, den) = (&self.num >> excess, &self.den >> excess);
        let n = num.to_f64().unwrap_or(f64::NAN);
        if den.is_zero() {
            return if n.is_sign_negative() { f64::NEG_INFINITY } else { f64::INFINITY };
        }
        n / den.to_f64().unwrap_or(f64::NAN)
    }

    /// Reduce `num / den` to lowest terms. `den` must be non-zero.
    fn reduced(num: BigInt, den: BigInt) -> Self {
        debug_assert!(!den.is_zero(), "zero denominator");
        if num.is_zero() {
            return Rational::zero();
        }
        let g = num.gcd(&den);
        let (num, den) = (num / &g, den / &g);
        let (sign, den) = den.into_parts();
        let num = if sign == Sign::Minus { -num } else { num };
        Rational { num, den }
    }

    fn den_signed(&self) -> BigInt {
        BigInt::from(self.den.clone())
    }

    /// `self.num * other.den`
    fn cross(&self, other: &Rational) -> BigInt {
        &self.num * other.den_signed()
    }

    /// The grid points `k / resolution` as a range of `k`: `ceil(self * res)`
    /// when `up`, `floor(self * res)` otherwise.
    fn grid_index(&self, res: &BigInt, up: bool) -> BigInt {
        let scaled = &self.num * res;
        let den = self.den_signed();
        if up {
            -((-scaled).div_floor(&den))
        } else {
            scaled.div_floor(&den)
        }
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl From<BigInt> for Rational {
    fn from(n: BigInt) -> Self {
        Rational::from_integer(n)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cross(other).cmp(&other.cross(self))
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        let den = BigInt::from(&self.den * &rhs.den);
        Rational::reduced(self.cross(&rhs) + rhs.cross(&self), den)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        let den = BigInt::from(&self.den * &rhs.den);
        Rational::reduced(self.cross(&rhs) - rhs.cross(&self), den)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::reduced(self.num * rhs.num, BigInt::from(self.den * rhs.den))
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational {
            num: BigInt::zero(),
            den: BigUint::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(1)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl FromStr for Rational {
    type Err = LfError;

    /// Accepts `n/d` or `n:d` where `n` is an optionally negative integer and
    /// `d` a positive integer.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = |why: &str| {
            LfError::InvalidFormat(format!("'{text}' is not a rational ({why}); expected 'n/d' or 'n:d'"))
        };
        let Some(sep) = text.find(['/', ':']) else {
            return Err(invalid("missing '/' or ':'"));
        };
        let (num_str, den_str) = (&text[..sep], &text[sep + 1..]);
        let digits = num_str.strip_prefix('-').unwrap_or(num_str);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("bad numerator"));
        }
        if den_str.is_empty() || !den_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("bad denominator"));
        }
        let num: BigInt = num_str.parse().map_err(|_| invalid("bad numerator"))?;
        let den: BigInt = den_str.parse().map_err(|_| invalid("bad denominator"))?;
        if den.is_zero() {
            return Err(invalid("zero denominator"));
        }
        Ok(Rational::reduced(num, den))
    }
}

impl ToPrimitive for Rational {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        (&self.num / self.den_signed()).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        (&self.num / self.den_signed()).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}

impl FromPrimitive for Rational {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Rational::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Rational::from_integer(n))
    }

    /// Rounds onto the `1/1_000_000` grid.
    fn from_f64(v: f64) -> Option<Self> {
        let num = BigInt::from_f64((v * F64_GRID as f64).round())?;
        Some(Rational::reduced(num, BigInt::from(F64_GRID)))
    }
}

impl Field for Rational {
    fn try_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(LfError::DivisionByZero(format!("{self} / {rhs}")));
        }
        Ok(Rational::reduced(self.cross(rhs), self.den_signed() * &rhs.num))
    }

    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(LfError::DivisionByZero(
                "zero rational has no inverse".to_string(),
            ));
        }
        Ok(Rational::reduced(self.den_signed(), self.num.clone()))
    }

    /// Uniform over the grid points `k / resolution` inside `[min, max]`. A
    /// range too narrow to hold a grid point yields `min`.
    fn random_in_range<R: Rng + ?Sized>(
        min: &Self,
        max: &Self,
        opts: &SampleOptions,
        rng: &mut R,
    ) -> Result<Self> {
        if min > max {
            return Err(LfError::InvalidArgument(format!(
                "empty range: min {min} is greater than max {max}"
            )));
        }
        let res = BigInt::from(opts.resolution.max(1));
        let lo = min.grid_index(&res, true);
        let hi = max.grid_index(&res, false);
        if lo > hi {
            return Ok(min.clone());
        }
        let k = rng.gen_bigint_range(&lo, &(hi + BigInt::one()));
        Ok(Rational::reduced(k, res))
    }

    /// Uniform over the grid points `k / resolution` in
    /// `[-magnitude, magnitude]`.
    fn random_unbounded<R: Rng + ?Sized>(opts: &SampleOptions, rng: &mut R) -> Self {
        let res = opts.resolution.max(1);
        let bound = BigInt::from_f64((opts.magnitude.abs() * res as f64).floor())
            .unwrap_or_else(BigInt::zero);
        if !bound.is_positive() {
            return Rational::zero();
        }
        let k = rng.gen_bigint_range(&(-&bound), &(&bound + BigInt::one()));
        Rational::reduced(k, BigInt::from(res))
    }
}
