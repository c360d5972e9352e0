//! End-to-end projection tests over synthetic measurement tables.

use grid_projector::{project, radial_index_map, total_index_map, ProjectionOutcome};
use hfr_common::vocabulary::VELO;
use hfr_common::OutputGridConfig;
use test_utils::{dense_radial_table, sparse_radial_table, sparse_total_table};

// ============================================================================
// Index map shape
// ============================================================================

#[test]
fn test_map_length_is_axis_product() {
    let table = sparse_radial_table();
    for (bearings, ranges) in [
        (vec![45, 90], vec![1.0, 2.0]),
        (vec![0], vec![1.0, 2.0, 3.0]),
        (vec![], vec![1.0]),
    ] {
        let map = radial_index_map(&table, &bearings, &ranges);
        assert_eq!(map.len(), bearings.len() * ranges.len());
    }

    let table = sparse_total_table();
    let map = total_index_map(&table, &[0.0, 1.0, 2.0], &[0.0, 1.0]);
    assert_eq!(map.len(), 6);
}

// ============================================================================
// Sparse-table scenarios
// ============================================================================

#[test]
fn test_radial_scenario() {
    let table = sparse_radial_table();
    let map = radial_index_map(&table, &[45, 90], &[1.0, 2.0]);
    assert_eq!(map, vec![Some(0), None, None, Some(1)]);

    let velocity = project(&table, VELO, &map).into_values();
    assert_eq!(velocity[0], 10.0);
    assert!(velocity[1].is_nan());
    assert!(velocity[2].is_nan());
    assert_eq!(velocity[3], 20.0);
}

#[test]
fn test_total_scenario() {
    let table = sparse_total_table();
    let map = total_index_map(&table, &[0.0, 1.0], &[0.0]);
    assert_eq!(map, vec![Some(0), Some(1)]);

    let velocity = project(&table, VELO, &map).into_values();
    assert_eq!(velocity, vec![5.0, 6.0]);
}

// ============================================================================
// Dense table against a configured grid
// ============================================================================

#[test]
fn test_dense_table_fills_every_cell() {
    let config = OutputGridConfig {
        bearing_start: 0,
        bearing_step: 5,
        bearing_count: 8,
        range_start: 1.0,
        range_step: 1.0,
        range_count: 4,
        ..OutputGridConfig::default()
    };
    let axes = config.radial_axes();
    let table = dense_radial_table(8, 5, 4);

    let map = radial_index_map(&table, &axes.bearings, &axes.ranges);
    assert_eq!(map.len(), axes.cell_count());
    assert!(map.iter().all(|e| e.is_some()));

    let velocity = project(&table, VELO, &map).into_values();
    for i in 0..8 {
        for j in 0..4 {
            // Generator stores bearing-index * 1000 + range-index.
            assert_eq!(velocity[i * 4 + j], (i * 1000 + j) as f64);
        }
    }
}

#[test]
fn test_grid_wider_than_table_gap_fills() {
    // The product grid extends past the measured area; the uncovered
    // cells must come back NaN, not error.
    let table = dense_radial_table(2, 5, 2);
    let map = radial_index_map(&table, &[0, 5, 10, 15], &[1.0, 2.0, 3.0]);

    let velocity = project(&table, VELO, &map).into_values();
    assert_eq!(velocity.len(), 12);
    assert_eq!(velocity[0], 0.0);
    assert!(velocity[2].is_nan()); // range 3.0 never measured
    assert!(velocity[6..].iter().all(|v| v.is_nan())); // bearings 10, 15
}

// ============================================================================
// Outcome surface
// ============================================================================

#[test]
fn test_missing_column_outcome_is_distinct() {
    let table = sparse_radial_table();
    let map = radial_index_map(&table, &[45], &[1.0]);

    let outcome = project(&table, "GDOP", &map);
    assert_eq!(outcome, ProjectionOutcome::ColumnMissing);
    // The historical contract collapses the miss to an empty sequence.
    assert!(outcome.into_values().is_empty());
}
