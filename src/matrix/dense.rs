//! Dense row-major matrices over a field.
//!
//! A [`Matrix`] is a non-empty list of rows of equal, non-zero dimension.
//! Values are logically immutable: [`Matrix::rank`] and the solver run their
//! elimination on a private clone, never on the caller's matrix.

use std::fmt;
use std::ops::Index;

use crate::core::traits::{fold_sum, Field};
use crate::error::{LfError, Result};
use crate::matrix::elimination::forward_eliminate;
use crate::matrix::vector::Vector;

/// An `m × n` matrix with `m, n >= 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<F: Field> {
    pub(crate) rows: Vec<Vector<F>>,
    pub(crate) ncols: usize,
}

impl<F: Field> Matrix<F> {
    /// Build a matrix from row vectors, taking ownership of them.
    pub fn from_rows(rows: Vec<Vector<F>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(LfError::InvalidArgument(
                "matrix must have at least one row".to_string(),
            ));
        };
        let ncols = first.dim();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.dim() != ncols) {
            return Err(LfError::InvalidArgument(format!(
                "row {i} has dimension {} but row 0 has dimension {ncols}",
                row.dim()
            )));
        }
        Ok(Matrix { rows, ncols })
    }

    /// Build a matrix from nested component lists.
    pub fn from_nested_vec(rows: Vec<Vec<F>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(i, r)| {
                Vector::new(r).map_err(|_| LfError::InvalidArgument(format!("row {i} is empty")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(rows)
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(LfError::InvalidArgument(format!(
                "matrix shape {nrows}x{ncols} must be positive"
            )));
        }
        Self::from_rows(vec![Vector::zeros(ncols)?; nrows])
    }

    /// Create the identity matrix of the given size.
    pub fn identity(size: usize) -> Result<Self> {
        let mut m = Self::zeros(size, size)?;
        for (i, row) in m.rows.iter_mut().enumerate() {
            row.data[i] = F::one();
        }
        Ok(m)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&F> {
        if row >= self.nrows() || col >= self.ncols {
            return Err(LfError::IndexOutOfRange(format!(
                "({row}, {col}) for {}x{} matrix",
                self.nrows(),
                self.ncols
            )));
        }
        Ok(&self.rows[row].data[col])
    }

    /// Copy of row `index`.
    pub fn row(&self, index: usize) -> Result<Vector<F>> {
        self.rows.get(index).cloned().ok_or_else(|| {
            LfError::IndexOutOfRange(format!("row {index} of {}x{} matrix", self.nrows(), self.ncols))
        })
    }

    /// Copy of column `index`.
    pub fn column(&self, index: usize) -> Result<Vector<F>> {
        if index >= self.ncols {
            return Err(LfError::IndexOutOfRange(format!(
                "column {index} of {}x{} matrix",
                self.nrows(),
                self.ncols
            )));
        }
        Vector::new(self.rows.iter().map(|r| r.data[index].clone()).collect())
    }

    /// Iterate over the rows.
    pub fn row_iter(&self) -> std::slice::Iter<'_, Vector<F>> {
        self.rows.iter()
    }

    pub fn transpose(&self) -> Matrix<F> {
        let rows = (0..self.ncols)
            .map(|j| Vector {
                data: self.rows.iter().map(|r| r.data[j].clone()).collect(),
            })
            .collect();
        Matrix {
            rows,
            ncols: self.nrows(),
        }
    }

    /// Append `column` as the rightmost column.
    pub fn augment_with(&self, column: &Vector<F>) -> Result<Matrix<F>> {
        if column.dim() != self.nrows() {
            return Err(LfError::DimensionMismatch(format!(
                "column of dimension {} cannot augment a matrix with {} rows",
                column.dim(),
                self.nrows()
            )));
        }
        let rows = self
            .rows
            .iter()
            .zip(column.iter())
            .map(|(r, c)| {
                let mut data = Vec::with_capacity(self.ncols + 1);
                data.extend(r.data.iter().cloned());
                data.push(c.clone());
                Vector { data }
            })
            .collect();
        Ok(Matrix {
            rows,
            ncols: self.ncols + 1,
        })
    }

    fn check_same_shape(&self, rhs: &Self, op: &str) -> Result<()> {
        if self.shape() != rhs.shape() {
            return Err(LfError::DimensionMismatch(format!(
                "{op} of {}x{} and {}x{} matrices",
                self.nrows(),
                self.ncols,
                rhs.nrows(),
                rhs.ncols
            )));
        }
        Ok(())
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Matrix<F>> {
        self.check_same_shape(rhs, "sum")?;
        let rows = self
            .rows
            .iter()
            .zip(&rhs.rows)
            .map(|(a, b)| a.try_add(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix {
            rows,
            ncols: self.ncols,
        })
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Matrix<F>> {
        self.check_same_shape(rhs, "difference")?;
        let rows = self
            .rows
            .iter()
            .zip(&rhs.rows)
            .map(|(a, b)| a.try_sub(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix {
            rows,
            ncols: self.ncols,
        })
    }

    /// Matrix product `self * rhs`, accumulated over `k` ascending for each `(i, j)`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Matrix<F>> {
        if self.ncols != rhs.nrows() {
            return Err(LfError::DimensionMismatch(format!(
                "product of {}x{} and {}x{} matrices",
                self.nrows(),
                self.ncols,
                rhs.nrows(),
                rhs.ncols
            )));
        }
        let rows = self
            .rows
            .iter()
            .map(|a| Vector {
                data: (0..rhs.ncols)
                    .map(|j| {
                        fold_sum(
                            (0..self.ncols).map(|k| a.data[k].clone() * rhs.rows[k].data[j].clone()),
                        )
                    })
                    .collect(),
            })
            .collect();
        Ok(Matrix {
            rows,
            ncols: rhs.ncols,
        })
    }

    /// Compute `self * x`.
    pub fn mul_vector(&self, x: &Vector<F>) -> Result<Vector<F>> {
        if self.ncols != x.dim() {
            return Err(LfError::DimensionMismatch(format!(
                "{}x{} matrix times vector of dimension {}",
                self.nrows(),
                self.ncols,
                x.dim()
            )));
        }
        let data = self
            .rows
            .iter()
            .map(|r| r.dot(x))
            .collect::<Result<Vec<_>>>()?;
        Ok(Vector { data })
    }

    pub fn scale(&self, scalar: &F) -> Matrix<F> {
        Matrix {
            rows: self.rows.iter().map(|r| r.scale(scalar)).collect(),
            ncols: self.ncols,
        }
    }

    /// Get the rank of the matrix.
    pub fn rank(&self) -> usize {
        forward_eliminate(&mut self.clone(), self.ncols, false)
    }
}

impl<F: Field> Index<(usize, usize)> for Matrix<F> {
    type Output = F;

    fn index(&self, (row, col): (usize, usize)) -> &F {
        &self.rows[row].data[col]
    }
}

impl<F: Field> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str("[")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{e}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::Rational;

    fn qm(rows: &[&[i64]]) -> Matrix<Rational> {
        Matrix::from_nested_vec(
            rows.iter()
                .map(|r| r.iter().map(|&n| Rational::from(n)).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn basics() {
        let a = qm(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(a.shape(), (2, 3));
        assert_eq!(a.transpose(), qm(&[&[1, 4], &[2, 5], &[3, 6]]));
        assert_eq!(a.try_sub(&a).unwrap(), Matrix::zeros(2, 3).unwrap());
        assert_eq!(a.try_add(&a).unwrap(), a.scale(&Rational::from(2)));

        let b = qm(&[&[7, 8], &[9, 10], &[11, 12]]);
        let c = a.try_mul(&b).unwrap();
        assert_eq!(c, qm(&[&[58, 64], &[139, 154]]));
        assert_eq!(c[(1, 0)], Rational::from(139));
        assert!(b.try_mul(&b).is_err());
        assert!(a.try_add(&b).is_err());
    }

    #[test]
    fn ragged_and_empty_rows_are_rejected() {
        let err = Matrix::<Rational>::from_nested_vec(vec![
            vec![Rational::from(1), Rational::from(2)],
            vec![Rational::from(3)],
        ])
        .unwrap_err();
        assert!(matches!(err, LfError::InvalidArgument(ref m) if m.contains("row 1")));
        assert!(Matrix::<Rational>::from_rows(vec![]).is_err());
        assert!(Matrix::<Rational>::from_nested_vec(vec![vec![]]).is_err());
        assert!(Matrix::<Rational>::zeros(0, 3).is_err());
    }

    #[test]
    fn indexing_is_checked() {
        let a = qm(&[&[1, 2], &[3, 4]]);
        assert_eq!(*a.get(1, 0).unwrap(), Rational::from(3));
        assert!(matches!(a.get(2, 0), Err(LfError::IndexOutOfRange(_))));
        assert!(matches!(a.get(0, 2), Err(LfError::IndexOutOfRange(_))));
        assert!(a.row(2).is_err());
        assert_eq!(a.column(1).unwrap().to_string(), "(2/1, 4/1)");
    }

    #[test]
    fn identity_is_neutral() {
        let a = qm(&[&[2, -1], &[0, 3]]);
        let id = Matrix::identity(2).unwrap();
        assert_eq!(a.try_mul(&id).unwrap(), a);
        assert_eq!(id.try_mul(&a).unwrap(), a);
    }

    #[test]
    fn augment() {
        let a = qm(&[&[1, 2], &[3, 4]]);
        let b = Vector::new(vec![Rational::from(5), Rational::from(6)]).unwrap();
        assert_eq!(a.augment_with(&b).unwrap(), qm(&[&[1, 2, 5], &[3, 4, 6]]));
        let short = Vector::new(vec![Rational::from(5)]).unwrap();
        assert!(matches!(a.augment_with(&short), Err(LfError::DimensionMismatch(_))));
    }

    #[test]
    fn rank() {
        assert_eq!(qm(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]).rank(), 2);
        assert_eq!(qm(&[&[0, 0], &[0, 0]]).rank(), 0);
        assert_eq!(qm(&[&[0, 1], &[1, 0]]).rank(), 2);
        assert_eq!(qm(&[&[0, 0, 1], &[0, 0, 2]]).rank(), 1);
        assert_eq!(qm(&[&[1], &[2], &[3]]).rank(), 1);
    }

    #[test]
    fn rank_leaves_matrix_untouched() {
        let a = qm(&[&[0, 1], &[1, 0]]);
        let before = a.clone();
        let _ = a.rank();
        assert_eq!(a, before);
    }

    #[test]
    fn display() {
        assert_eq!(qm(&[&[1, 2], &[3, 4]]).to_string(), "[1/1  2/1]\n[3/1  4/1]");
    }
}
