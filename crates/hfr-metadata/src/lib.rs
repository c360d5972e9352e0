//! Product metadata records, quality-control thresholds, and profile
//! fallback resolution.
//!
//! A freshly parsed measurement file often carries incomplete file-level
//! metadata. The resolver completes it field by field from a previously
//! known site profile without ever overwriting a field that already holds
//! a real value.

pub mod records;
pub mod resolver;
pub mod thresholds;

pub use records::{
    Conventions, ExtraAttributes, FileIdentity, NetworkReference, ProductMetadata,
    Provenance, PublisherBlock, SiteReference, SpatialCoverage, TemporalCoverage,
};
pub use resolver::{resolve, ProfileFallback};
pub use thresholds::{parse_threshold, RadialQcThresholds, TotalQcThresholds};
