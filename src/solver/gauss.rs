//! Exact Gaussian elimination over an arbitrary field.
//!
//! A [`LinearSystem`] is classified by comparing the rank of the coefficient
//! matrix with the rank of the augmented matrix `[A|b]` (Rouché–Capelli).
//! Only systems with a unique solution are actually solved: forward
//! elimination with pivot-row normalisation, then back-substitution from the
//! last variable up. The coefficient matrix passed in is never modified.
//!
//! # Usage
//! - Build a system with [`LinearSystem::new`] and call [`LinearSystem::solve`].
//! - Use [`GaussSolver`] through the [`LinearSolver`] trait when the matrix and
//!   right-hand side live apart.

use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::config::SampleOptions;
use crate::core::traits::{fold_sum, Field};
use crate::error::{LfError, Result};
use crate::matrix::elimination::forward_eliminate;
use crate::matrix::{Matrix, Vector};
use crate::solver::LinearSolver;
use crate::utils::stats::{SolutionType, SolveStats};

/// `A·x = b` with `A` of shape `m×n` and `b` of length `m`.
#[derive(Clone, Debug)]
pub struct LinearSystem<F: Field> {
    coefficients: Matrix<F>,
    constants: Vector<F>,
    stats: Option<SolveStats>,
    solution: Option<Vector<F>>,
}

impl<F: Field> LinearSystem<F> {
    pub fn new(coefficients: Matrix<F>, constants: Vector<F>) -> Result<Self> {
        if constants.dim() != coefficients.nrows() {
            return Err(LfError::InvalidArgument(format!(
                "{} constants for {} equations",
                constants.dim(),
                coefficients.nrows()
            )));
        }
        Ok(LinearSystem {
            coefficients,
            constants,
            stats: None,
            solution: None,
        })
    }

    /// Build the system from one coefficient row per equation.
    pub fn from_equations(rows: Vec<Vector<F>>, constants: Vector<F>) -> Result<Self> {
        Self::new(Matrix::from_rows(rows)?, constants)
    }

    /// A system with random coefficients and constants.
    pub fn random<R: Rng + ?Sized>(
        equations: usize,
        variables: usize,
        opts: &SampleOptions,
        rng: &mut R,
    ) -> Result<Self> {
        if equations == 0 || variables == 0 {
            return Err(LfError::InvalidArgument(format!(
                "random system needs at least one equation and one variable, got {equations}x{variables}"
            )));
        }
        let rows = (0..equations)
            .map(|_| Vector::random(variables, opts, rng))
            .collect::<Result<Vec<_>>>()?;
        let constants = Vector::random(equations, opts, rng)?;
        Self::from_equations(rows, constants)
    }

    /// A `size × size` system that always has exactly one solution: `5` on
    /// the diagonal, `1/2` elsewhere (eigenvalues `4.5` and `4.5 + size/2`),
    /// and random constants.
    pub fn random_unique<R: Rng + ?Sized>(
        size: usize,
        opts: &SampleOptions,
        rng: &mut R,
    ) -> Result<Self> {
        if size == 0 {
            return Err(LfError::InvalidArgument(
                "random system needs at least one variable".to_string(),
            ));
        }
        let two = F::one() + F::one();
        let half = F::one().try_div(&two)?;
        let five = two.clone() + two + F::one();
        let rows = (0..size)
            .map(|i| {
                Vector::new(
                    (0..size)
                        .map(|j| if i == j { five.clone() } else { half.clone() })
                        .collect(),
                )
            })
            .collect::<Result<Vec<_>>>()?;
        let constants = Vector::random(size, opts, rng)?;
        Self::from_equations(rows, constants)
    }

    pub fn variable_count(&self) -> usize {
        self.coefficients.ncols()
    }

    pub fn equation_count(&self) -> usize {
        self.coefficients.nrows()
    }

    pub fn coefficients(&self) -> &Matrix<F> {
        &self.coefficients
    }

    pub fn constants(&self) -> &Vector<F> {
        &self.constants
    }

    /// `[A|b]`; one constant per row is guaranteed by the constructor.
    fn augmented(&self) -> Matrix<F> {
        Matrix {
            rows: self
                .coefficients
                .rows
                .iter()
                .zip(self.constants.iter())
                .map(|(row, b)| {
                    let mut data = row.data.clone();
                    data.push(b.clone());
                    Vector { data }
                })
                .collect(),
            ncols: self.coefficients.ncols() + 1,
        }
    }

    fn compute_stats(&self) -> SolveStats {
        let rank = self.coefficients.rank();
        let augmented_rank = self.augmented().rank();
        SolveStats::classify(rank, augmented_rank, self.variable_count())
    }

    /// Classify the system without solving it.
    pub fn analyze_solution_type(&self) -> SolutionType {
        match &self.stats {
            Some(stats) => stats.solution_type,
            None => self.compute_stats().solution_type,
        }
    }

    /// Classify the system and, if the solution is unique, compute it.
    ///
    /// The outcome is cached; later calls return it without recomputing.
    #[instrument(
        level = "debug",
        skip_all,
        fields(equations = self.equation_count(), variables = self.variable_count())
    )]
    pub fn solve(&mut self) -> SolutionType {
        self.solve_with_stats().solution_type
    }

    pub(crate) fn solve_with_stats(&mut self) -> SolveStats {
        if let Some(stats) = &self.stats {
            return stats.clone();
        }

        let stats = self.compute_stats();
        debug!(
            rank = stats.rank,
            augmented_rank = stats.augmented_rank,
            solution_type = ?stats.solution_type,
            "classified system"
        );

        if stats.solution_type == SolutionType::UniqueSolution {
            if let Some(x) = self.eliminate_and_substitute() {
                if self.verify_solution(&x) {
                    self.solution = Some(x);
                } else {
                    warn!(solution = %x, "computed solution does not satisfy the system; discarding");
                }
            }
        }

        self.stats = Some(stats.clone());
        stats
    }

    fn eliminate_and_substitute(&self) -> Option<Vector<F>> {
        let n = self.variable_count();
        let mut aug = self.augmented();
        if forward_eliminate(&mut aug, n, true) != n {
            return None;
        }

        // rank n: pivot for variable i sits at (i, i)
        let mut x = vec![F::zero(); n];
        for i in (0..n).rev() {
            let known = fold_sum((i + 1..n).map(|j| aug[(i, j)].clone() * x[j].clone()));
            let rhs = aug[(i, n)].clone() - known;
            let pivot = &aug[(i, i)];
            x[i] = if pivot.is_one() { rhs } else { rhs.try_div(pivot).ok()? };
        }
        Vector::new(x).ok()
    }

    /// The unique solution, once [`solve`](Self::solve) has found one.
    pub fn solution(&self) -> Option<&Vector<F>> {
        self.solution.as_ref()
    }

    /// The cached classification, `None` before [`solve`](Self::solve).
    pub fn solution_type(&self) -> Option<SolutionType> {
        self.stats.as_ref().map(|s| s.solution_type)
    }

    pub fn stats(&self) -> Option<&SolveStats> {
        self.stats.as_ref()
    }

    /// `true` iff `candidate` has one component per variable and `A·x == b`.
    pub fn verify_solution(&self, candidate: &Vector<F>) -> bool {
        match self.coefficients.mul_vector(candidate) {
            Ok(ax) => ax == self.constants,
            Err(_) => false,
        }
    }
}

/// [`LinearSolver`] front end over [`LinearSystem`].
///
/// Keeps the last system it solved.
#[derive(Clone, Debug)]
pub struct GaussSolver<F: Field> {
    system: Option<LinearSystem<F>>,
}

impl<F: Field> Default for GaussSolver<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> GaussSolver<F> {
    pub fn new() -> Self {
        GaussSolver { system: None }
    }

    pub fn system(&self) -> Option<&LinearSystem<F>> {
        self.system.as_ref()
    }
}

impl<F: Field> LinearSolver<Matrix<F>, Vector<F>> for GaussSolver<F> {
    type Error = LfError;

    /// Solve `A·x = b`. `x` is overwritten only when the solution is unique;
    /// the returned stats carry the classification either way.
    fn solve(&mut self, a: &Matrix<F>, b: &Vector<F>, x: &mut Vector<F>) -> Result<SolveStats> {
        if b.dim() != a.nrows() {
            return Err(LfError::DimensionMismatch(format!(
                "right-hand side of dimension {} for {} equations",
                b.dim(),
                a.nrows()
            )));
        }
        if x.dim() != a.ncols() {
            return Err(LfError::DimensionMismatch(format!(
                "solution vector of dimension {} for {} variables",
                x.dim(),
                a.ncols()
            )));
        }

        let mut system = LinearSystem::new(a.clone(), b.clone())?;
        let stats = system.solve_with_stats();
        if let Some(solution) = system.solution() {
            x.clone_from(solution);
        }
        self.system = Some(system);
        Ok(stats)
    }
}
