//! Output-grid configuration.
//!
//! Describes the fixed dimensions of the output product grid and derives
//! the destination axes handed to the index mappers.

use crate::axes::{RadialAxes, TotalAxes};
use crate::error::{HfrError, HfrResult};
use serde::{Deserialize, Serialize};

/// Configuration for the destination product grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputGridConfig {
    /// First bearing of the radial grid, degrees true.
    pub bearing_start: i32,

    /// Bearing step, degrees.
    pub bearing_step: i32,

    /// Number of bearing cells.
    pub bearing_count: usize,

    /// First range ring, kilometers.
    pub range_start: f64,

    /// Range ring spacing, kilometers.
    pub range_step: f64,

    /// Number of range cells.
    pub range_count: usize,

    /// First x coordinate of the total grid, kilometers from origin.
    pub x_start: f64,

    /// X spacing, kilometers.
    pub x_step: f64,

    /// Number of x cells.
    pub x_count: usize,

    /// First y coordinate of the total grid, kilometers from origin.
    pub y_start: f64,

    /// Y spacing, kilometers.
    pub y_step: f64,

    /// Number of y cells.
    pub y_count: usize,
}

impl Default for OutputGridConfig {
    fn default() -> Self {
        // Typical 5-degree / 3km SeaSonde standard-range product grid.
        Self {
            bearing_start: 0,
            bearing_step: 5,
            bearing_count: 72,
            range_start: 3.0,
            range_step: 3.0,
            range_count: 40,
            x_start: -60.0,
            x_step: 3.0,
            x_count: 41,
            y_start: -60.0,
            y_step: 3.0,
            y_count: 41,
        }
    }
}

impl OutputGridConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("HFR_BEARING_START") {
            if let Ok(v) = val.parse() {
                config.bearing_start = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_BEARING_STEP") {
            if let Ok(v) = val.parse() {
                config.bearing_step = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_BEARING_COUNT") {
            if let Ok(v) = val.parse() {
                config.bearing_count = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_RANGE_START") {
            if let Ok(v) = val.parse() {
                config.range_start = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_RANGE_STEP") {
            if let Ok(v) = val.parse() {
                config.range_step = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_RANGE_COUNT") {
            if let Ok(v) = val.parse() {
                config.range_count = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_X_START") {
            if let Ok(v) = val.parse() {
                config.x_start = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_X_STEP") {
            if let Ok(v) = val.parse() {
                config.x_step = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_X_COUNT") {
            if let Ok(v) = val.parse() {
                config.x_count = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_Y_START") {
            if let Ok(v) = val.parse() {
                config.y_start = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_Y_STEP") {
            if let Ok(v) = val.parse() {
                config.y_step = v;
            }
        }

        if let Ok(val) = std::env::var("HFR_Y_COUNT") {
            if let Ok(v) = val.parse() {
                config.y_count = v;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> HfrResult<()> {
        if self.bearing_step <= 0 {
            return Err(HfrError::InvalidConfig(
                "bearing_step must be > 0".to_string(),
            ));
        }

        if self.bearing_count == 0 || self.range_count == 0 {
            return Err(HfrError::InvalidConfig(
                "radial grid counts must be > 0".to_string(),
            ));
        }

        if self.range_step <= 0.0 {
            return Err(HfrError::InvalidConfig(
                "range_step must be > 0".to_string(),
            ));
        }

        if self.x_count == 0 || self.y_count == 0 {
            return Err(HfrError::InvalidConfig(
                "total grid counts must be > 0".to_string(),
            ));
        }

        if self.x_step <= 0.0 || self.y_step <= 0.0 {
            return Err(HfrError::InvalidConfig(
                "x_step and y_step must be > 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Derive the destination axes for a radial product.
    pub fn radial_axes(&self) -> RadialAxes {
        let bearings = (0..self.bearing_count)
            .map(|i| self.bearing_start + i as i32 * self.bearing_step)
            .collect();
        let ranges = (0..self.range_count)
            .map(|i| self.range_start + i as f64 * self.range_step)
            .collect();
        RadialAxes::new(bearings, ranges)
    }

    /// Derive the destination axes for a total product.
    pub fn total_axes(&self) -> TotalAxes {
        let xs = (0..self.x_count)
            .map(|i| self.x_start + i as f64 * self.x_step)
            .collect();
        let ys = (0..self.y_count)
            .map(|i| self.y_start + i as f64 * self.y_step)
            .collect();
        TotalAxes::new(xs, ys)
    }
}
