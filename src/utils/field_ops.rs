//! Generic helpers that work over any [`Field`].

use crate::core::traits::{fold_sum, Field};
use crate::error::{LfError, Result};

/// Raise `value` to an integer power. `0^0` is one; negative exponents go
/// through the inverse and fail for zero.
pub fn pow<F: Field>(value: &F, exponent: i32) -> Result<F> {
    let base = if exponent < 0 {
        value.inverse()?
    } else {
        value.clone()
    };
    Ok((0..exponent.unsigned_abs()).fold(F::one(), |acc, _| acc * base.clone()))
}

pub fn sum<F: Field>(elements: &[F]) -> F {
    fold_sum(elements.iter().cloned())
}

pub fn product<F: Field>(elements: &[F]) -> F {
    elements.iter().cloned().fold(F::one(), |acc, e| acc * e)
}

/// Arithmetic mean; the count is built as `1 + 1 + ... + 1` in the field.
pub fn average<F: Field>(elements: &[F]) -> Result<F> {
    if elements.is_empty() {
        return Err(LfError::InvalidArgument(
            "cannot average an empty list".to_string(),
        ));
    }
    let count = fold_sum(elements.iter().map(|_| F::one()));
    sum(elements).try_div(&count)
}

/// `c1*e1 + c2*e2 + ... + cn*en`
pub fn linear_combination<F: Field>(coefficients: &[F], elements: &[F]) -> Result<F> {
    if coefficients.len() != elements.len() {
        return Err(LfError::DimensionMismatch(format!(
            "{} coefficients for {} elements",
            coefficients.len(),
            elements.len()
        )));
    }
    Ok(fold_sum(
        coefficients
            .iter()
            .zip(elements)
            .map(|(c, e)| c.clone() * e.clone()),
    ))
}

pub fn is_one<F: Field>(value: &F) -> bool {
    value.is_one()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Complex, Rational};
    use num_traits::{One, Zero};

    fn q(n: i64, d: u64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn powers() {
        assert_eq!(pow(&q(2, 3), 3).unwrap(), q(8, 27));
        assert_eq!(pow(&q(2, 3), -2).unwrap(), q(9, 4));
        assert_eq!(pow(&Rational::zero(), 0).unwrap(), Rational::one());
        assert!(pow(&Rational::zero(), -1).is_err());
        assert_eq!(pow(&Complex::i(), 2).unwrap(), Complex::new(-1.0, 0.0));
    }

    #[test]
    fn aggregates() {
        let xs = [q(1, 2), q(1, 3), q(1, 6)];
        assert_eq!(sum(&xs), Rational::one());
        assert_eq!(product(&xs), q(1, 36));
        assert_eq!(average(&xs).unwrap(), q(1, 3));
        assert!(average::<Rational>(&[]).is_err());
        assert_eq!(sum::<Rational>(&[]), Rational::zero());
        assert_eq!(product::<Rational>(&[]), Rational::one());
    }

    #[test]
    fn combination() {
        let c = [q(2, 1), q(-1, 1)];
        let e = [q(3, 4), q(1, 2)];
        assert_eq!(linear_combination(&c, &e).unwrap(), Rational::one());
        assert!(matches!(
            linear_combination(&c, &e[..1]),
            Err(LfError::DimensionMismatch(_))
        ));
        assert!(is_one(&q(3, 3)));
    }
}
