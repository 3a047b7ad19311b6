//! Core algebraic traits for linfield.

use std::fmt::{Debug, Display};
use std::ops::{Neg, Sub};
use std::str::FromStr;

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use rand::Rng;

use crate::config::SampleOptions;
use crate::error::{LfError, Result};

/// A field: a set with addition and multiplication, their identities, and
/// a multiplicative inverse for every non-zero element.
///
/// Addition, subtraction, multiplication and negation come from the `std::ops`
/// operator traits and never fail. Division and inversion are fallible and
/// report [`LfError::DivisionByZero`] when the divisor is [`Zero::is_zero`].
///
/// `Zero::is_zero` is the test used for division and pivot selection, so any
/// value for which it returns `false` must be invertible. `PartialEq` is the
/// field's equality rule, which may be tolerant for floating representations.
///
/// Elements are immutable values: every operation returns a new element.
pub trait Field:
    Clone
    + Debug
    + Display
    + PartialEq
    + FromStr<Err = LfError>
    + Zero
    + One
    + Sub<Output = Self>
    + Neg<Output = Self>
    + FromPrimitive
    + ToPrimitive
{
    /// Compute `self / rhs`.
    fn try_div(&self, rhs: &Self) -> Result<Self>;

    /// Multiplicative inverse, `1 / self`.
    fn inverse(&self) -> Result<Self>;

    /// Parse an element from its canonical textual form.
    fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Draw a random element between `min` and `max` (inclusive where the
    /// type is ordered).
    fn random_in_range<R: Rng + ?Sized>(
        min: &Self,
        max: &Self,
        opts: &SampleOptions,
        rng: &mut R,
    ) -> Result<Self>;

    /// Draw a random element from the window described by `opts.magnitude`.
    fn random_unbounded<R: Rng + ?Sized>(opts: &SampleOptions, rng: &mut R) -> Self;
}

/// Fold `iter` with field addition, starting from zero, in iteration order.
pub(crate) fn fold_sum<F: Field>(iter: impl Iterator<Item = F>) -> F {
    iter.fold(F::zero(), |acc, v| acc + v)
}
