//! Destination-grid axis definitions.
//!
//! Axes are supplied by the caller, derived from the output product's
//! fixed grid configuration. The measurement table itself never defines
//! the destination grid.

use serde::{Deserialize, Serialize};

/// Destination axes for a radial product grid.
///
/// Bearings are integer degrees; ranges are distances in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialAxes {
    pub bearings: Vec<i32>,
    pub ranges: Vec<f64>,
}

impl RadialAxes {
    /// Create a new radial axis pair.
    pub fn new(bearings: Vec<i32>, ranges: Vec<f64>) -> Self {
        Self { bearings, ranges }
    }

    /// Total number of destination grid cells.
    pub fn cell_count(&self) -> usize {
        self.bearings.len() * self.ranges.len()
    }

    /// Check if either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.bearings.is_empty() || self.ranges.is_empty()
    }
}

/// Destination axes for a total product grid.
///
/// Both axes are distances in kilometers from the grid origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalAxes {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl TotalAxes {
    /// Create a new total axis pair.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }

    /// Total number of destination grid cells.
    pub fn cell_count(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// Check if either axis is empty.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty() || self.ys.is_empty()
    }
}
