//! Options for random sampling of field elements.
//!
//! This module provides the `SampleOptions` struct, which controls how
//! `Field::random_unbounded` and `Field::random_in_range` draw values:
//! the half-width of the window used when no bounds are given, and the
//! grid resolution exact types round onto.

/// Sampling window & grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions {
    /// Half-width of the unbounded window: values fall in `[-magnitude, magnitude)`.
    pub magnitude: f64,

    /// Denominator of the grid exact types round random values onto.
    pub resolution: u32,
}

impl SampleOptions {
    pub fn with_magnitude(mut self, magnitude: f64) -> Self {
        self.magnitude = magnitude;
        self
    }

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution.max(1);
        self
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            magnitude: 10.0,
            resolution: 100,
        }
    }
}
