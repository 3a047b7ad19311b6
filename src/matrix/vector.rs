//! Fixed-length vectors over a field.
//!
//! A [`Vector`] owns at least one element and never changes dimension.
//! Binary operations check dimensions and report
//! [`LfError::DimensionMismatch`] instead of panicking.

use std::fmt;
use std::ops::{Index, Neg};
use std::str::FromStr;

use rand::Rng;

use crate::config::SampleOptions;
use crate::core::traits::{fold_sum, Field};
use crate::error::{LfError, Result};

/// An n-dimensional vector, `n >= 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<F: Field> {
    pub(crate) data: Vec<F>,
}

impl<F: Field> Vector<F> {
    /// Create a vector from its components, taking ownership of them.
    pub fn new(data: Vec<F>) -> Result<Self> {
        if data.is_empty() {
            return Err(LfError::InvalidArgument(
                "vector must have at least one component".to_string(),
            ));
        }
        Ok(Vector { data })
    }

    /// The zero vector of dimension `dim`.
    pub fn zeros(dim: usize) -> Result<Self> {
        Self::new(vec![F::zero(); dim])
    }

    /// The unit vector along `direction`.
    pub fn basis(dim: usize, direction: usize) -> Result<Self> {
        if direction >= dim {
            return Err(LfError::InvalidArgument(format!(
                "basis direction {direction} outside dimension {dim}"
            )));
        }
        let mut v = Self::zeros(dim)?;
        v.data[direction] = F::one();
        Ok(v)
    }

    /// Vector with components from `F::random_unbounded`.
    pub fn random<R: Rng + ?Sized>(dim: usize, opts: &SampleOptions, rng: &mut R) -> Result<Self> {
        Self::new((0..dim).map(|_| F::random_unbounded(opts, rng)).collect())
    }

    /// Vector with every component drawn from `[min, max]`.
    pub fn random_in_range<R: Rng + ?Sized>(
        dim: usize,
        min: &F,
        max: &F,
        opts: &SampleOptions,
        rng: &mut R,
    ) -> Result<Self> {
        let data = (0..dim)
            .map(|_| F::random_in_range(min, max, opts, rng))
            .collect::<Result<Vec<_>>>()?;
        Self::new(data)
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, index: usize) -> Result<&F> {
        self.data.get(index).ok_or_else(|| {
            LfError::IndexOutOfRange(format!(
                "index {index} for vector of dimension {}",
                self.dim()
            ))
        })
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.data.iter()
    }

    pub fn into_inner(self) -> Vec<F> {
        self.data
    }

    fn check_dim(&self, rhs: &Self, op: &str) -> Result<()> {
        if self.dim() != rhs.dim() {
            return Err(LfError::DimensionMismatch(format!(
                "{op} of vectors with dimensions {} and {}",
                self.dim(),
                rhs.dim()
            )));
        }
        Ok(())
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(F, F) -> F) -> Vector<F> {
        Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
        }
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.check_dim(rhs, "sum")?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_dim(rhs, "difference")?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Multiply every component by `scalar`.
    pub fn scale(&self, scalar: &F) -> Self {
        Vector {
            data: self.data.iter().map(|e| scalar.clone() * e.clone()).collect(),
        }
    }

    /// Divide every component by `scalar`.
    pub fn try_div_scalar(&self, scalar: &F) -> Result<Self> {
        let data = self
            .data
            .iter()
            .map(|e| e.try_div(scalar))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector { data })
    }

    /// Take the Euclidean scalar product, summing from index 0 upward.
    pub fn dot(&self, rhs: &Self) -> Result<F> {
        self.check_dim(rhs, "dot product")?;
        Ok(fold_sum(
            self.data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| a.clone() * b.clone()),
        ))
    }

    /// Compute the Euclidean cross product in three dimensions.
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        if self.dim() != 3 || rhs.dim() != 3 {
            return Err(LfError::Unsupported(
                "cross product is only defined for three-dimensional vectors",
            ));
        }
        let (a, b) = (&self.data, &rhs.data);
        let term = |i: usize, j: usize| a[i].clone() * b[j].clone() - a[j].clone() * b[i].clone();
        Ok(Vector {
            data: vec![term(1, 2), term(2, 0), term(0, 1)],
        })
    }

    pub fn norm_squared(&self) -> F {
        fold_sum(self.data.iter().map(|e| e.clone() * e.clone()))
    }

    /// Approximate Euclidean length in `f64`.
    ///
    /// Fails with [`LfError::Unsupported`] if a component has no real `f64`
    /// value (a complex number with an imaginary part).
    pub fn magnitude(&self) -> Result<f64> {
        let mut sum = 0.0_f64;
        for e in &self.data {
            let v = e.to_f64().ok_or(LfError::Unsupported(
                "magnitude needs components convertible to f64",
            ))?;
            sum += v * v;
        }
        Ok(sum.sqrt())
    }

    /// Scale to unit [`magnitude`](Self::magnitude). The factor `1 / |v|` goes
    /// through `f64`, so the result is approximate even for exact fields.
    pub fn normalize(&self) -> Result<Self> {
        let magnitude = self.magnitude()?;
        if magnitude == 0.0 {
            return Err(LfError::DivisionByZero(
                "cannot normalize the zero vector".to_string(),
            ));
        }
        let factor = F::from_f64(1.0 / magnitude).ok_or(LfError::Unsupported(
            "normalization factor is not representable in the field",
        ))?;
        Ok(self.scale(&factor))
    }

    /// `true` if every component equals zero under the field's equality.
    pub fn is_zero(&self) -> bool {
        let zero = F::zero();
        self.data.iter().all(|e| *e == zero)
    }

    /// Orthogonal projection of `self` onto `target`.
    pub fn project_onto(&self, target: &Self) -> Result<Self> {
        let factor = self.dot(target)?.try_div(&target.norm_squared())?;
        Ok(target.scale(&factor))
    }

    pub fn is_orthogonal_to(&self, rhs: &Self) -> Result<bool> {
        Ok(self.dot(rhs)? == F::zero())
    }
}

impl<F: Field> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.data[index]
    }
}

impl<F: Field> Neg for Vector<F> {
    type Output = Vector<F>;

    fn neg(self) -> Vector<F> {
        Vector {
            data: self.data.into_iter().map(|e| -e).collect(),
        }
    }
}

impl<F: Field> Neg for &Vector<F> {
    type Output = Vector<F>;

    fn neg(self) -> Vector<F> {
        -self.clone()
    }
}

impl<'a, F: Field> IntoIterator for &'a Vector<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<F: Field> fmt::Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str(")")
    }
}

impl<F: Field> FromStr for Vector<F> {
    type Err = LfError;

    /// Parse `(c1, c2, ..., cn)`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let Some(body) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
            return Err(LfError::InvalidFormat(format!(
                "'{text}' is not a vector; expected '(c1, c2, ..., cn)'"
            )));
        };
        if body.trim().is_empty() {
            return Err(LfError::InvalidFormat(format!("'{text}' has no components")));
        }
        let data = body
            .split(',')
            .enumerate()
            .map(|(i, part)| {
                let part = part.trim();
                F::parse(part).map_err(|e| {
                    LfError::InvalidFormat(format!("component {i} ('{part}') in '{text}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Vector::new(data)
    }
}
