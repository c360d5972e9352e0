//! Controlled column vocabulary for HF-radar measurement tables.
//!
//! Column names follow the four-letter LLUV column codes emitted by
//! SeaSonde-style radar processing software. Tables may declare columns
//! outside this vocabulary; they are carried through untouched but are
//! not recognized as standard quantities.

use serde::{Deserialize, Serialize};

/// Bearing from the radar site, degrees true.
pub const BEAR: &str = "BEAR";
/// Range from the radar site, kilometers.
pub const RNGE: &str = "RNGE";
/// Eastward distance from the grid origin, kilometers.
pub const XDST: &str = "XDST";
/// Northward distance from the grid origin, kilometers.
pub const YDST: &str = "YDST";
/// Current velocity magnitude, cm/s.
pub const VELO: &str = "VELO";
/// Eastward velocity component, cm/s.
pub const VELU: &str = "VELU";
/// Northward velocity component, cm/s.
pub const VELV: &str = "VELV";
/// Spatial quality (standard deviation over contributing solutions).
pub const ESPC: &str = "ESPC";
/// Temporal quality (standard deviation over the averaging period).
pub const ETMP: &str = "ETMP";
/// Direction the current is heading toward, degrees true.
pub const HEAD: &str = "HEAD";
/// Longitude of the measurement point, degrees east.
pub const LOND: &str = "LOND";
/// Latitude of the measurement point, degrees north.
pub const LATD: &str = "LATD";

/// A column code from the fixed controlled vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardColumn {
    Bearing,
    Range,
    XDistance,
    YDistance,
    Velocity,
    VelocityU,
    VelocityV,
    SpatialQuality,
    TemporalQuality,
    Heading,
    Longitude,
    Latitude,
}

impl StandardColumn {
    /// Get the LLUV column code for this quantity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bearing => BEAR,
            Self::Range => RNGE,
            Self::XDistance => XDST,
            Self::YDistance => YDST,
            Self::Velocity => VELO,
            Self::VelocityU => VELU,
            Self::VelocityV => VELV,
            Self::SpatialQuality => ESPC,
            Self::TemporalQuality => ETMP,
            Self::Heading => HEAD,
            Self::Longitude => LOND,
            Self::Latitude => LATD,
        }
    }

    /// Parse an LLUV column code. Returns `None` for codes outside the
    /// controlled vocabulary.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            BEAR => Some(Self::Bearing),
            RNGE => Some(Self::Range),
            XDST => Some(Self::XDistance),
            YDST => Some(Self::YDistance),
            VELO => Some(Self::Velocity),
            VELU => Some(Self::VelocityU),
            VELV => Some(Self::VelocityV),
            ESPC => Some(Self::SpatialQuality),
            ETMP => Some(Self::TemporalQuality),
            HEAD => Some(Self::Heading),
            LOND => Some(Self::Longitude),
            LATD => Some(Self::Latitude),
            _ => None,
        }
    }

    /// Whether this column serves as a grid axis coordinate for radial tables.
    pub fn is_radial_axis(&self) -> bool {
        matches!(self, Self::Bearing | Self::Range)
    }

    /// Whether this column serves as a grid axis coordinate for total tables.
    pub fn is_total_axis(&self) -> bool {
        matches!(self, Self::XDistance | Self::YDistance)
    }
}

impl std::fmt::Display for StandardColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(StandardColumn::parse("BEAR"), Some(StandardColumn::Bearing));
        assert_eq!(
            StandardColumn::parse("VELO"),
            Some(StandardColumn::Velocity)
        );
        assert_eq!(StandardColumn::parse("ZZZZ"), None);
    }

    #[test]
    fn test_axis_classification() {
        assert!(StandardColumn::Bearing.is_radial_axis());
        assert!(StandardColumn::Range.is_radial_axis());
        assert!(!StandardColumn::Velocity.is_radial_axis());
        assert!(StandardColumn::XDistance.is_total_axis());
        assert!(StandardColumn::YDistance.is_total_axis());
        assert!(!StandardColumn::Bearing.is_total_axis());
    }

    #[test]
    fn test_code_roundtrip() {
        for col in [
            StandardColumn::Bearing,
            StandardColumn::Range,
            StandardColumn::XDistance,
            StandardColumn::YDistance,
            StandardColumn::Velocity,
        ] {
            assert_eq!(StandardColumn::parse(col.as_str()), Some(col));
        }
    }
}
