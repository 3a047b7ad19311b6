//! linfield: exact linear algebra over generic fields
//!
//! This crate provides rational and complex scalars behind a common [`Field`]
//! trait, vectors and matrices over any such field, and a Gaussian-elimination
//! solver that classifies a linear system as having a unique solution,
//! infinitely many, or none.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod scalar;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use crate::config::SampleOptions;
pub use crate::core::Field;
pub use crate::error::{LfError, Result};
pub use crate::matrix::{Matrix, Vector};
pub use crate::scalar::{Complex, Rational};
pub use crate::solver::{GaussSolver, LinearSolver, LinearSystem};
pub use crate::utils::{SolutionType, SolveStats};
