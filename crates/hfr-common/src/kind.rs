//! Measurement table kinds.

use crate::error::HfrError;
use serde::{Deserialize, Serialize};

/// The two HF-radar measurement file variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Single-site file, rows indexed by bearing and range.
    Radial,
    /// Combined multi-site file, rows indexed by x/y distance from the grid origin.
    Total,
}

impl TableKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Radial => "radial",
            Self::Total => "total",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Result<Self, HfrError> {
        match s.to_lowercase().as_str() {
            "radial" => Ok(Self::Radial),
            "total" => Ok(Self::Total),
            _ => Err(HfrError::UnknownKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        assert_eq!(TableKind::parse("radial").unwrap(), TableKind::Radial);
        assert_eq!(TableKind::parse("TOTAL").unwrap(), TableKind::Total);
        assert_eq!(TableKind::Radial.as_str(), "radial");
    }

    #[test]
    fn test_kind_unknown() {
        assert!(matches!(
            TableKind::parse("elliptical"),
            Err(HfrError::UnknownKind(_))
        ));
    }
}
