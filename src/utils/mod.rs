pub mod field_ops;
pub mod stats;

pub use stats::{SolutionType, SolveStats};
