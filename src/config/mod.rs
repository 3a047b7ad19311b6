//! Configuration for sampling random field elements, vectors and systems.

pub mod options;
pub use options::SampleOptions;
