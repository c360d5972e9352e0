//! In-memory tabular representation of a parsed HF-radar measurement file.

pub mod table;

pub use table::MeasurementTable;
