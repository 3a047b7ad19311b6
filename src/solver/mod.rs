//! Linear-system solver interfaces.

use crate::utils::stats::SolveStats;

/// Common interface for solvers of `A·x = b`.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, writing the result into `x`.
    /// Returns stats describing the system (ranks & classification).
    fn solve(&mut self, a: &M, b: &V, x: &mut V) -> Result<SolveStats, Self::Error>;
}

pub mod gauss;
pub use gauss::{GaussSolver, LinearSystem};

pub use crate::utils::stats::SolutionType;
