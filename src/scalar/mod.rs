//! Concrete field element types.
//!
//! - [`Rational`]: exact fractions with 64-bit storage.
//! - [`Complex`]: `f64` complex numbers with an absolute equality tolerance.

pub mod complex;
pub mod rational;

pub use complex::Complex;
pub use rational::Rational;
