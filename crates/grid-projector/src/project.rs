//! Column projection onto the destination grid.

use crate::index_map::IndexMap;
use hfr_table::MeasurementTable;

/// Result of projecting one named column through an index map.
///
/// A missing column is not an error, but it is surfaced as its own
/// variant so callers and tests can tell a typo'd column name apart from
/// an empty table instead of silently receiving an empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionOutcome {
    /// One value per index-map entry, NaN where the cell had no source row.
    Projected(Vec<f64>),
    /// The named column is not declared by the table.
    ColumnMissing,
}

impl ProjectionOutcome {
    /// True for the `ColumnMissing` variant.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::ColumnMissing)
    }

    /// Collapse to the historical wire contract: a missing column becomes
    /// an empty sequence, indistinguishable from an empty table.
    pub fn into_values(self) -> Vec<f64> {
        match self {
            Self::Projected(values) => values,
            Self::ColumnMissing => Vec::new(),
        }
    }

    /// Borrow the projected values, if any.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Self::Projected(values) => Some(values),
            Self::ColumnMissing => None,
        }
    }
}

/// Project `column_name` through `index_map`, producing one value per
/// destination grid cell in the map's flattening order.
///
/// Cells whose entry is "no source" are gap-filled with NaN. The map's
/// row indices are trusted to be in bounds for `table` (they are built
/// from the same table); a stale map against a different table yields
/// NaN rather than a panic.
pub fn project(
    table: &MeasurementTable,
    column_name: &str,
    index_map: &IndexMap,
) -> ProjectionOutcome {
    let Some(col) = table.column_index(column_name) else {
        return ProjectionOutcome::ColumnMissing;
    };

    let values = index_map
        .iter()
        .map(|entry| match entry {
            Some(row) => table.value(*row, col).unwrap_or(f64::NAN),
            None => f64::NAN,
        })
        .collect();

    ProjectionOutcome::Projected(values)
}
