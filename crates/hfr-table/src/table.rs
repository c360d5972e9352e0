//! The measurement table container.
//!
//! A `MeasurementTable` is built once by the file loader from raw vendor
//! text content and is read-only afterward. It is discarded after grid
//! projection completes.

use hfr_common::{HfrError, HfrResult, TableKind};

/// An immutable-after-load row/column numeric table plus its declared
/// column vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementTable {
    kind: TableKind,
    column_names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl MeasurementTable {
    /// Build a table from a declared column vocabulary and row data.
    ///
    /// Every row must have exactly one value per declared column; a ragged
    /// row is rejected.
    pub fn new(
        kind: TableKind,
        column_names: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> HfrResult<Self> {
        let expected = column_names.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(HfrError::RaggedRow {
                    row: i,
                    expected,
                    actual: row.len(),
                });
            }
        }

        Ok(Self {
            kind,
            column_names,
            rows,
        })
    }

    /// An empty table: zero rows, zero columns. A valid terminal state for
    /// a measurement file that declared no data, not an error.
    pub fn empty(kind: TableKind) -> Self {
        Self {
            kind,
            column_names: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// The table variant (radial or total).
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// The declared column vocabulary, in column order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of declared columns.
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// True iff the table has zero rows and zero columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.column_names.is_empty()
    }

    /// Position of `name` in the column vocabulary.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// The full column `name` in row order.
    ///
    /// An absent column yields an empty vector, exactly like a present
    /// column in an empty table; callers must treat the two identically.
    pub fn column(&self, name: &str) -> Vec<f64> {
        match self.column_index(name) {
            Some(idx) => self.rows.iter().map(|row| row[idx]).collect(),
            None => Vec::new(),
        }
    }

    /// The value at (`row`, `col`), if both indices are in bounds.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hfr_common::vocabulary::{BEAR, RNGE, VELO};

    fn radial_fixture() -> MeasurementTable {
        MeasurementTable::new(
            TableKind::Radial,
            vec![BEAR.to_string(), RNGE.to_string(), VELO.to_string()],
            vec![vec![45.0, 1.0, 10.0], vec![90.0, 2.0, 20.0]],
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let result = MeasurementTable::new(
            TableKind::Radial,
            vec![BEAR.to_string(), RNGE.to_string()],
            vec![vec![45.0, 1.0], vec![90.0]],
        );
        assert!(matches!(
            result,
            Err(HfrError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_empty_is_valid_terminal_state() {
        let table = MeasurementTable::empty(TableKind::Total);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.column(VELO), Vec::<f64>::new());
    }

    #[test]
    fn test_zero_rows_with_columns_is_not_empty() {
        let table = MeasurementTable::new(
            TableKind::Radial,
            vec![BEAR.to_string()],
            vec![],
        )
        .unwrap();
        assert!(!table.is_empty());
    }

    #[test]
    fn test_column_index() {
        let table = radial_fixture();
        assert_eq!(table.column_index(BEAR), Some(0));
        assert_eq!(table.column_index(VELO), Some(2));
        assert_eq!(table.column_index("ZZZZ"), None);
    }

    #[test]
    fn test_column_values_in_row_order() {
        let table = radial_fixture();
        assert_eq!(table.column(RNGE), vec![1.0, 2.0]);
        assert_eq!(table.column(VELO), vec![10.0, 20.0]);
    }

    #[test]
    fn test_absent_column_matches_empty_table() {
        let table = radial_fixture();
        // "column absent" and "column present but table empty" are the
        // same in-band outcome.
        assert_eq!(table.column("ZZZZ"), Vec::<f64>::new());
    }

    #[test]
    fn test_value_bounds() {
        let table = radial_fixture();
        assert_eq!(table.value(1, 2), Some(20.0));
        assert_eq!(table.value(2, 0), None);
        assert_eq!(table.value(0, 3), None);
    }
}
