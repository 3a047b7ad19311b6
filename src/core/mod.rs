//! Core traits: the field capability set every scalar type implements.

pub mod traits;
pub use traits::Field;
