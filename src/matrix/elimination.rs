//! Row operations and forward Gaussian elimination.
//!
//! The row-mutation primitives are a crate-private capability of [`Matrix`]:
//! only [`Matrix::rank`] and the linear-system solver use them, always on a
//! working copy.
//!
//! Pivots are chosen as the first row, at or below the current pivot row,
//! whose entry is not [`Zero::is_zero`](num_traits::Zero::is_zero). Magnitude
//! has no meaning in a general field, so no largest-entry search is done.

use tracing::trace;

use crate::core::traits::Field;
use crate::matrix::dense::Matrix;

/// Elementary row operations used by elimination.
pub(crate) trait RowOps<F: Field> {
    fn swap_rows(&mut self, a: usize, b: usize);
    /// `row *= scalar`
    fn scale_row(&mut self, row: usize, scalar: &F);
    /// `target += scalar * source`
    fn add_scaled_row(&mut self, source: usize, target: usize, scalar: &F);
    /// First row in `start..` with a non-zero entry in `col`.
    fn find_pivot_row(&self, start: usize, col: usize) -> Option<usize>;
}

impl<F: Field> RowOps<F> for Matrix<F> {
    fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    fn scale_row(&mut self, row: usize, scalar: &F) {
        for e in &mut self.rows[row].data {
            *e = scalar.clone() * e.clone();
        }
    }

    fn add_scaled_row(&mut self, source: usize, target: usize, scalar: &F) {
        debug_assert_ne!(source, target);
        let src = self.rows[source].data.clone();
        for (t, s) in self.rows[target].data.iter_mut().zip(src) {
            *t = t.clone() + scalar.clone() * s;
        }
    }

    fn find_pivot_row(&self, start: usize, col: usize) -> Option<usize> {
        (start..self.nrows()).find(|&r| !self.rows[r].data[col].is_zero())
    }
}

/// Reduce `m` to row echelon form over its first `max_col` columns and return
/// the number of pivots found.
///
/// Pivot `k` ends up at row `k`; every entry below it in its column is
/// eliminated. Columns without a pivot are skipped. With `normalize`, each
/// pivot row is divided by its pivot so the pivot becomes exactly one.
pub(crate) fn forward_eliminate<F: Field>(m: &mut Matrix<F>, max_col: usize, normalize: bool) -> usize {
    let nrows = m.nrows();
    let mut rank = 0;

    for col in 0..max_col.min(m.ncols()) {
        if rank == nrows {
            break;
        }
        let Some(pivot_row) = m.find_pivot_row(rank, col) else {
            trace!(col, "no pivot in column");
            continue;
        };
        if pivot_row != rank {
            m.swap_rows(rank, pivot_row);
        }

        // is_zero() == false guarantees an inverse
        let Ok(pivot_inv) = m.rows[rank].data[col].inverse() else {
            continue;
        };
        if normalize {
            m.scale_row(rank, &pivot_inv);
        }

        for row in rank + 1..nrows {
            let entry = m.rows[row].data[col].clone();
            if entry.is_zero() {
                continue;
            }
            // entry / pivot, which is the entry itself once the pivot is one
            let factor = if normalize { entry } else { entry * pivot_inv.clone() };
            m.add_scaled_row(rank, row, &-factor);
        }

        trace!(col, pivot_row, rank, "eliminated column");
        rank += 1;
    }

    rank
}
