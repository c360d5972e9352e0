//! Quality-control threshold containers.
//!
//! Thresholds use NaN as the "unset" sentinel so a partially configured
//! record can be completed from a site profile with the same numeric rule
//! the metadata resolver uses. The numeric QC tests themselves live with
//! the processing collaborators; only the parameter containers and their
//! configuration check belong here.

use crate::resolver::{fill_f64, ProfileFallback};
use hfr_common::{HfrError, HfrResult};
use serde::{Deserialize, Serialize};

/// Parse a threshold attribute value such as `"1.2 m/s"`.
///
/// Only the leading numeric token is read; a trailing unit is ignored. A
/// malformed number propagates as a parse failure, never a silent NaN.
pub fn parse_threshold(field: &str, value: &str) -> HfrResult<f64> {
    let token = value.split_whitespace().next().unwrap_or("");
    token.parse::<f64>().map_err(|_| HfrError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// QC thresholds for a radial product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialQcThresholds {
    /// Maximum plausible current speed, cm/s.
    pub velocity_max: f64,
    /// Maximum velocity variance, cm²/s².
    pub variance_max: f64,
    /// Maximum change against the previous timestep, cm/s.
    pub temporal_derivative_max: f64,
    /// Median filter search radius, km.
    pub median_filter_radius: f64,
    /// Median filter angular sector limit, degrees.
    pub median_filter_angular_limit: f64,
    /// Median filter deviation threshold, cm/s.
    pub median_filter_threshold: f64,
    /// Minimum acceptable average radial bearing, degrees true.
    pub average_bearing_min: f64,
    /// Maximum acceptable average radial bearing, degrees true.
    pub average_bearing_max: f64,
    /// Minimum number of radial solutions for a valid file.
    pub radial_count_min: f64,
}

impl Default for RadialQcThresholds {
    fn default() -> Self {
        Self {
            velocity_max: f64::NAN,
            variance_max: f64::NAN,
            temporal_derivative_max: f64::NAN,
            median_filter_radius: f64::NAN,
            median_filter_angular_limit: f64::NAN,
            median_filter_threshold: f64::NAN,
            average_bearing_min: f64::NAN,
            average_bearing_max: f64::NAN,
            radial_count_min: f64::NAN,
        }
    }
}

impl RadialQcThresholds {
    fn fields(&self) -> [f64; 9] {
        [
            self.velocity_max,
            self.variance_max,
            self.temporal_derivative_max,
            self.median_filter_radius,
            self.median_filter_angular_limit,
            self.median_filter_threshold,
            self.average_bearing_min,
            self.average_bearing_max,
            self.radial_count_min,
        ]
    }

    /// True when every threshold holds a real value.
    pub fn is_fully_configured(&self) -> bool {
        self.fields().iter().all(|v| !v.is_nan())
    }
}

impl ProfileFallback for RadialQcThresholds {
    fn fill_from(&mut self, profile: &Self) {
        fill_f64(&mut self.velocity_max, profile.velocity_max);
        fill_f64(&mut self.variance_max, profile.variance_max);
        fill_f64(
            &mut self.temporal_derivative_max,
            profile.temporal_derivative_max,
        );
        fill_f64(&mut self.median_filter_radius, profile.median_filter_radius);
        fill_f64(
            &mut self.median_filter_angular_limit,
            profile.median_filter_angular_limit,
        );
        fill_f64(
            &mut self.median_filter_threshold,
            profile.median_filter_threshold,
        );
        fill_f64(&mut self.average_bearing_min, profile.average_bearing_min);
        fill_f64(&mut self.average_bearing_max, profile.average_bearing_max);
        fill_f64(&mut self.radial_count_min, profile.radial_count_min);
    }
}

/// QC thresholds for a total product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TotalQcThresholds {
    /// Maximum plausible current speed, cm/s.
    pub velocity_max: f64,
    /// Maximum velocity variance, cm²/s².
    pub variance_max: f64,
    /// Maximum change against the previous timestep, cm/s.
    pub temporal_derivative_max: f64,
    /// Minimum number of contributing radial solutions per cell.
    pub data_density_min: f64,
    /// Maximum geometric dilution of precision.
    pub gdop_max: f64,
}

impl Default for TotalQcThresholds {
    fn default() -> Self {
        Self {
            velocity_max: f64::NAN,
            variance_max: f64::NAN,
            temporal_derivative_max: f64::NAN,
            data_density_min: f64::NAN,
            gdop_max: f64::NAN,
        }
    }
}

impl TotalQcThresholds {
    /// True when every threshold holds a real value.
    pub fn is_fully_configured(&self) -> bool {
        !self.velocity_max.is_nan()
            && !self.variance_max.is_nan()
            && !self.temporal_derivative_max.is_nan()
            && !self.data_density_min.is_nan()
            && !self.gdop_max.is_nan()
    }
}

impl ProfileFallback for TotalQcThresholds {
    fn fill_from(&mut self, profile: &Self) {
        fill_f64(&mut self.velocity_max, profile.velocity_max);
        fill_f64(&mut self.variance_max, profile.variance_max);
        fill_f64(
            &mut self.temporal_derivative_max,
            profile.temporal_derivative_max,
        );
        fill_f64(&mut self.data_density_min, profile.data_density_min);
        fill_f64(&mut self.gdop_max, profile.gdop_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn test_parse_threshold_with_unit() {
        assert_eq!(parse_threshold("QCQV_threshold", "1.2 m/s").unwrap(), 1.2);
        assert_eq!(parse_threshold("GDOP_threshold", "2").unwrap(), 2.0);
    }

    #[test]
    fn test_parse_threshold_propagates_failure() {
        let err = parse_threshold("QCQV_threshold", "fast").unwrap_err();
        assert!(matches!(err, HfrError::InvalidNumber { .. }));

        let err = parse_threshold("QCQV_threshold", "").unwrap_err();
        assert!(matches!(err, HfrError::InvalidNumber { .. }));
    }

    #[test]
    fn test_default_is_unconfigured() {
        assert!(!RadialQcThresholds::default().is_fully_configured());
        assert!(!TotalQcThresholds::default().is_fully_configured());
    }

    #[test]
    fn test_partial_fill_from_profile() {
        let mut current = RadialQcThresholds {
            velocity_max: 120.0,
            ..RadialQcThresholds::default()
        };
        let profile = RadialQcThresholds {
            velocity_max: 100.0,
            variance_max: 1.0,
            temporal_derivative_max: 50.0,
            median_filter_radius: 10.0,
            median_filter_angular_limit: 30.0,
            median_filter_threshold: 25.0,
            average_bearing_min: 10.0,
            average_bearing_max: 180.0,
            radial_count_min: 150.0,
        };

        assert!(resolve(&mut current, Some(&profile)));
        // Already-set field keeps its value, NaN fields are completed.
        assert_eq!(current.velocity_max, 120.0);
        assert_eq!(current.variance_max, 1.0);
        assert!(current.is_fully_configured());
    }

    #[test]
    fn test_fill_is_idempotent() {
        let mut current = TotalQcThresholds {
            gdop_max: 2.0,
            ..TotalQcThresholds::default()
        };
        let profile = TotalQcThresholds {
            velocity_max: 100.0,
            variance_max: 1.0,
            temporal_derivative_max: 50.0,
            data_density_min: 3.0,
            gdop_max: 10.0,
        };

        current.fill_from(&profile);
        let once = current;
        current.fill_from(&profile);
        assert_eq!(current, once);
        assert_eq!(current.gdop_max, 2.0);
    }
}
