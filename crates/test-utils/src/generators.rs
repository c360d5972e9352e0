//! Generators for synthetic measurement tables and metadata records.
//!
//! Tables use predictable values so tests can verify projection without
//! fixture files: the velocity stored for a cell at bearing `b` and range
//! ring `r` is `b * 1000 + r`, making misplacements obvious.

use chrono::{TimeZone, Utc};
use hfr_common::vocabulary::{BEAR, RNGE, VELO, XDST, YDST};
use hfr_common::TableKind;
use hfr_metadata::{
    NetworkReference, ProductMetadata, RadialQcThresholds, SiteReference, SpatialCoverage,
    TotalQcThresholds,
};
use hfr_table::MeasurementTable;

/// A dense radial table with one row per (bearing, range) cell.
///
/// Bearings run `0, step, 2*step, ...`; ranges run `1.0, 2.0, ...`.
/// Velocity at (bearing index `i`, range index `j`) is `i * 1000 + j`.
pub fn dense_radial_table(bearing_count: usize, bearing_step: i32, range_count: usize) -> MeasurementTable {
    let mut rows = Vec::with_capacity(bearing_count * range_count);
    for i in 0..bearing_count {
        for j in 0..range_count {
            rows.push(vec![
                (i as i32 * bearing_step) as f64,
                (j + 1) as f64,
                (i * 1000 + j) as f64,
            ]);
        }
    }

    MeasurementTable::new(
        TableKind::Radial,
        vec![BEAR.to_string(), RNGE.to_string(), VELO.to_string()],
        rows,
    )
    .expect("generated rows are rectangular")
}

/// The two-row radial table with measurements at (45°, 1.0 km) and
/// (90°, 2.0 km) only.
pub fn sparse_radial_table() -> MeasurementTable {
    MeasurementTable::new(
        TableKind::Radial,
        vec![BEAR.to_string(), RNGE.to_string(), VELO.to_string()],
        vec![vec![45.0, 1.0, 10.0], vec![90.0, 2.0, 20.0]],
    )
    .expect("generated rows are rectangular")
}

/// The two-row total table with measurements at (0, 0) and (1, 0).
pub fn sparse_total_table() -> MeasurementTable {
    MeasurementTable::new(
        TableKind::Total,
        vec![XDST.to_string(), YDST.to_string(), VELO.to_string()],
        vec![vec![0.0, 0.0, 5.0], vec![1.0, 0.0, 6.0]],
    )
    .expect("generated rows are rectangular")
}

/// A freshly parsed radial metadata record with most fields still empty.
pub fn partial_metadata() -> ProductMetadata {
    let mut meta = ProductMetadata::for_kind(TableKind::Radial);
    meta.identity.title = "Near real time surface current velocities".to_string();
    meta.publisher.license = "CC-BY".to_string();
    if let Some(t) = meta.radial_thresholds.as_mut() {
        t.velocity_max = 120.0;
    }
    meta
}

/// A fully populated site profile suitable as a fallback for
/// [`partial_metadata`].
pub fn complete_profile() -> ProductMetadata {
    let mut profile = ProductMetadata::for_kind(TableKind::Radial);

    profile.identity.id = "HFR-TirLig-MATX-2024-01-15".to_string();
    profile.identity.title = "Profile title that must not win".to_string();
    profile.identity.summary = "Hourly surface current radial velocities".to_string();
    profile.identity.source = "coastal structure".to_string();
    profile.identity.site_code = "MATX".to_string();
    profile.identity.network_code = "HFR-TirLig".to_string();
    profile.identity.institution = "National Research Council".to_string();
    profile.identity.references = "https://example.org/hfr-docs".to_string();
    profile.identity.comment = "Uncorrected antenna pattern".to_string();

    profile.provenance.history = "Data measured and processed on site".to_string();
    profile.provenance.date_created = Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap());
    profile.provenance.processing_software = "hfradar-gridder".to_string();
    profile.provenance.contributor_name = "Operations group".to_string();
    profile.provenance.contributor_role = "distributor".to_string();
    profile.provenance.contributor_email = "ops@example.org".to_string();

    profile.spatial = SpatialCoverage {
        lat_min: 43.0,
        lat_max: 44.5,
        lon_min: 9.0,
        lon_max: 10.5,
        vertical_min: 0.0,
        vertical_max: 0.48,
        lat_resolution: "0.027".to_string(),
        lon_resolution: "0.038".to_string(),
    };

    profile.temporal.start = Some(Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap());
    profile.temporal.end = Some(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());

    profile.publisher.creator_name = "Radar operator".to_string();
    profile.publisher.creator_email = "radar@example.org".to_string();
    profile.publisher.creator_url = "https://example.org".to_string();
    profile.publisher.publisher_name = "European HFR node".to_string();
    profile.publisher.publisher_email = "node@example.org".to_string();
    profile.publisher.publisher_url = "https://example.org/node".to_string();
    profile.publisher.acknowledgment = "Funded by national monitoring program".to_string();
    profile.publisher.citation = "Cite the operating institution".to_string();
    profile.publisher.license = "Profile license that must not win".to_string();

    profile.extra.insert("manufacturer", "CODAR SeaSonde");
    profile.extra.insert("doa_method", "direction_finding");

    profile.site = Some(SiteReference {
        code: "MATX".to_string(),
        name: "Mattinata".to_string(),
        latitude: 41.71,
        longitude: 16.05,
        frequency: 13.5,
    });

    profile.network = Some(NetworkReference {
        code: "HFR-TirLig".to_string(),
        name: "Tyrrhenian and Ligurian Sea network".to_string(),
        region: "Mediterranean Sea".to_string(),
    });

    profile.radial_thresholds = Some(RadialQcThresholds {
        velocity_max: 100.0,
        variance_max: 1.0,
        temporal_derivative_max: 50.0,
        median_filter_radius: 10.0,
        median_filter_angular_limit: 30.0,
        median_filter_threshold: 25.0,
        average_bearing_min: 10.0,
        average_bearing_max: 180.0,
        radial_count_min: 150.0,
    });
    profile.total_thresholds = Some(TotalQcThresholds {
        velocity_max: 100.0,
        variance_max: 1.0,
        temporal_derivative_max: 50.0,
        data_density_min: 3.0,
        gdop_max: 2.0,
    });

    profile
}
