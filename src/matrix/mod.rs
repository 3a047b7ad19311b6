//! Matrix module: vectors, dense matrices and the elimination kernel.

pub mod dense;
pub use dense::Matrix;
pub mod vector;
pub use vector::Vector;
pub(crate) mod elimination;
