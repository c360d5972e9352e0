//! Shared test helpers for the HF-radar gridding crates.

pub mod generators;

pub use generators::{
    complete_profile, dense_radial_table, partial_metadata, sparse_radial_table,
    sparse_total_table,
};
