//! Common types and utilities shared across the HF-radar gridding crates.

pub mod axes;
pub mod config;
pub mod error;
pub mod kind;
pub mod vocabulary;

pub use axes::{RadialAxes, TotalAxes};
pub use config::OutputGridConfig;
pub use error::{HfrError, HfrResult};
pub use kind::TableKind;
pub use vocabulary::StandardColumn;
