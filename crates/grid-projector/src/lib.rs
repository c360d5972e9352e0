//! Grid index resolution and column projection for HF-radar tables.
//!
//! The radar record reports an irregular, sparse set of measurement points
//! relative to the dense output product grid. This crate resolves every
//! destination cell to a source table row (or no source at all) and uses
//! that resolution to project named data columns onto the grid with NaN
//! gap fill.

pub mod index_map;
pub mod project;

pub use index_map::{radial_index_map, total_index_map, IndexMap};
pub use project::{project, ProjectionOutcome};
