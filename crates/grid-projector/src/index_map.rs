//! Destination-cell to source-row index resolution.
//!
//! For each cell of the destination grid the mapper selects the first
//! table row whose coordinates exactly equal the cell's axis values, or
//! records that the cell has no source. Matching is exact: there is no
//! distance tolerance and no nearest-match fallback.
//!
//! The two table variants flatten their maps differently and both orders
//! are part of the contract consumed by the product writers:
//! radial maps run bearing-outer (`i * ranges.len() + j`), total maps run
//! y-outer (`j * xs.len() + i`). Do not unify them.

use hfr_common::vocabulary::{BEAR, RNGE, XDST, YDST};
use hfr_table::MeasurementTable;
use std::collections::HashMap;
use tracing::debug;

/// Per-cell resolution of a destination grid position: a source row index
/// or `None` for "no source."
pub type IndexMap = Vec<Option<usize>>;

/// Key a coordinate by its bit pattern so the lookup reproduces exact
/// float equality. `-0.0` normalizes to `0.0` (they compare equal); NaN
/// coordinates never match anything and get no key at all.
fn coord_key(v: f64) -> Option<u64> {
    if v.is_nan() {
        None
    } else if v == 0.0 {
        Some(0.0f64.to_bits())
    } else {
        Some(v.to_bits())
    }
}

/// Build the index map for a radial table.
///
/// A row matches cell `(i, j)` when its range exactly equals `ranges[j]`
/// and its bearing, truncated toward zero to an integer, equals
/// `bearings[i]`. The earliest matching row in the table wins.
pub fn radial_index_map(
    table: &MeasurementTable,
    bearings: &[i32],
    ranges: &[f64],
) -> IndexMap {
    let bearing_col = table.column(BEAR);
    let range_col = table.column(RNGE);

    // First-inserted-wins lookup keyed by (truncated bearing, range bits),
    // equivalent to scanning rows in order and keeping the first match.
    let mut lookup: HashMap<(i64, u64), usize> = HashMap::with_capacity(bearing_col.len());
    for (row, (&bearing, &range)) in bearing_col.iter().zip(range_col.iter()).enumerate() {
        if bearing.is_nan() {
            continue;
        }
        let Some(range_key) = coord_key(range) else {
            continue;
        };
        lookup.entry((bearing.trunc() as i64, range_key)).or_insert(row);
    }

    let mut map = vec![None; bearings.len() * ranges.len()];
    for (i, &bearing) in bearings.iter().enumerate() {
        for (j, &range) in ranges.iter().enumerate() {
            if let Some(range_key) = coord_key(range) {
                map[i * ranges.len() + j] =
                    lookup.get(&(i64::from(bearing), range_key)).copied();
            }
        }
    }

    debug!(
        rows = table.row_count(),
        cells = map.len(),
        resolved = map.iter().filter(|e| e.is_some()).count(),
        "built radial index map"
    );

    map
}

/// Build the index map for a total table.
///
/// A row matches cell `(i, j)` when its y distance exactly equals `ys[j]`
/// and its x distance exactly equals `xs[i]`. The earliest matching row
/// wins. Note the y-outer flattening order.
pub fn total_index_map(table: &MeasurementTable, xs: &[f64], ys: &[f64]) -> IndexMap {
    let x_col = table.column(XDST);
    let y_col = table.column(YDST);

    let mut lookup: HashMap<(u64, u64), usize> = HashMap::with_capacity(x_col.len());
    for (row, (&x, &y)) in x_col.iter().zip(y_col.iter()).enumerate() {
        let (Some(x_key), Some(y_key)) = (coord_key(x), coord_key(y)) else {
            continue;
        };
        lookup.entry((x_key, y_key)).or_insert(row);
    }

    let mut map = vec![None; xs.len() * ys.len()];
    for (j, &y) in ys.iter().enumerate() {
        for (i, &x) in xs.iter().enumerate() {
            let (Some(x_key), Some(y_key)) = (coord_key(x), coord_key(y)) else {
                continue;
            };
            map[j * xs.len() + i] = lookup.get(&(x_key, y_key)).copied();
        }
    }

    debug!(
        rows = table.row_count(),
        cells = map.len(),
        resolved = map.iter().filter(|e| e.is_some()).count(),
        "built total index map"
    );

    map
}
