//! Grouped metadata value records for an output product file.
//!
//! The file-level attribute surface is wide but flat; it is grouped here
//! into one value record per domain concern (identity, provenance,
//! coverage, publisher block, conventions) instead of a bag of
//! independently settable fields. String fields use the empty string as
//! "not yet known"; upstream producers occasionally write the literal
//! `"NaN"`, which counts as missing too.

use crate::resolver::{fill_f64, fill_option, fill_string, string_is_missing, ProfileFallback};
use crate::thresholds::{RadialQcThresholds, TotalQcThresholds};
use chrono::{DateTime, Utc};
use hfr_common::TableKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What the file is: identifiers and descriptive text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileIdentity {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    /// Four-letter site (platform) code, e.g. "MATX".
    pub site_code: String,
    /// Network the site reports into, e.g. "HFR-TirLig".
    pub network_code: String,
    pub institution: String,
    pub references: String,
    pub comment: String,
}

impl ProfileFallback for FileIdentity {
    fn fill_from(&mut self, profile: &Self) {
        fill_string(&mut self.id, &profile.id);
        fill_string(&mut self.title, &profile.title);
        fill_string(&mut self.summary, &profile.summary);
        fill_string(&mut self.source, &profile.source);
        fill_string(&mut self.site_code, &profile.site_code);
        fill_string(&mut self.network_code, &profile.network_code);
        fill_string(&mut self.institution, &profile.institution);
        fill_string(&mut self.references, &profile.references);
        fill_string(&mut self.comment, &profile.comment);
    }
}

/// How the file came to be.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub history: String,
    pub date_created: Option<DateTime<Utc>>,
    pub date_modified: Option<DateTime<Utc>>,
    pub processing_software: String,
    pub contributor_name: String,
    pub contributor_role: String,
    pub contributor_email: String,
    /// Format manual version. Compiled-in, never adopted from a profile.
    pub format_version: String,
    /// "R" (real-time) or "D" (delayed-mode). Never adopted from a profile.
    pub data_mode: String,
    /// Processing level code. Never adopted from a profile.
    pub processing_level: String,
}

impl ProfileFallback for Provenance {
    fn fill_from(&mut self, profile: &Self) {
        fill_string(&mut self.history, &profile.history);
        fill_option(&mut self.date_created, &profile.date_created);
        fill_option(&mut self.date_modified, &profile.date_modified);
        fill_string(&mut self.processing_software, &profile.processing_software);
        fill_string(&mut self.contributor_name, &profile.contributor_name);
        fill_string(&mut self.contributor_role, &profile.contributor_role);
        fill_string(&mut self.contributor_email, &profile.contributor_email);
        // format_version, data_mode, processing_level keep their
        // compiled-in values.
    }
}

/// Where the data is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialCoverage {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub vertical_min: f64,
    pub vertical_max: f64,
    pub lat_resolution: String,
    pub lon_resolution: String,
}

impl Default for SpatialCoverage {
    fn default() -> Self {
        Self {
            lat_min: f64::NAN,
            lat_max: f64::NAN,
            lon_min: f64::NAN,
            lon_max: f64::NAN,
            vertical_min: f64::NAN,
            vertical_max: f64::NAN,
            lat_resolution: String::new(),
            lon_resolution: String::new(),
        }
    }
}

impl ProfileFallback for SpatialCoverage {
    fn fill_from(&mut self, profile: &Self) {
        fill_f64(&mut self.lat_min, profile.lat_min);
        fill_f64(&mut self.lat_max, profile.lat_max);
        fill_f64(&mut self.lon_min, profile.lon_min);
        fill_f64(&mut self.lon_max, profile.lon_max);
        fill_f64(&mut self.vertical_min, profile.vertical_min);
        fill_f64(&mut self.vertical_max, profile.vertical_max);
        fill_string(&mut self.lat_resolution, &profile.lat_resolution);
        fill_string(&mut self.lon_resolution, &profile.lon_resolution);
    }
}

/// When the data is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalCoverage {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// Fixed coverage duration (ISO 8601). Never adopted from a profile.
    pub duration: String,
    /// Fixed coverage resolution (ISO 8601). Never adopted from a profile.
    pub resolution: String,
}

impl ProfileFallback for TemporalCoverage {
    fn fill_from(&mut self, profile: &Self) {
        fill_option(&mut self.start, &profile.start);
        fill_option(&mut self.end, &profile.end);
        // duration and resolution keep their compiled-in values.
    }
}

/// Who made and who distributes the data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublisherBlock {
    pub creator_name: String,
    pub creator_email: String,
    pub creator_url: String,
    pub publisher_name: String,
    pub publisher_email: String,
    pub publisher_url: String,
    pub acknowledgment: String,
    pub citation: String,
    /// License type. Never adopted from a profile.
    pub license: String,
}

impl ProfileFallback for PublisherBlock {
    fn fill_from(&mut self, profile: &Self) {
        fill_string(&mut self.creator_name, &profile.creator_name);
        fill_string(&mut self.creator_email, &profile.creator_email);
        fill_string(&mut self.creator_url, &profile.creator_url);
        fill_string(&mut self.publisher_name, &profile.publisher_name);
        fill_string(&mut self.publisher_email, &profile.publisher_email);
        fill_string(&mut self.publisher_url, &profile.publisher_url);
        fill_string(&mut self.acknowledgment, &profile.acknowledgment);
        fill_string(&mut self.citation, &profile.citation);
        // license keeps its compiled-in value.
    }
}

/// Fixed conventions and vocabulary identifiers.
///
/// The whole record is excluded from profile fallback: these values ship
/// with the software and must never adopt a profile's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conventions {
    pub conventions: String,
    pub naming_authority: String,
    pub standard_name_vocabulary: String,
    pub sdn_vocabulary: String,
    pub cdm_data_type: String,
}

impl Default for Conventions {
    fn default() -> Self {
        Self {
            conventions: "CF-1.6 OceanSITES-Manual-1.2".to_string(),
            naming_authority: "eu.eurogoos".to_string(),
            standard_name_vocabulary:
                "NetCDF Climate and Forecast (CF) Metadata Convention Standard Name Table"
                    .to_string(),
            sdn_vocabulary: "SeaDataNet".to_string(),
            cdm_data_type: "Grid".to_string(),
        }
    }
}

impl ProfileFallback for Conventions {
    fn fill_from(&mut self, _profile: &Self) {
        // Deliberately empty: conventions never fall back.
    }
}

/// Free-form additional attributes, insertion-ordered so output
/// serialization stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtraAttributes(IndexMap<String, String>);

impl ExtraAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute, keeping first-insertion order.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ProfileFallback for ExtraAttributes {
    fn fill_from(&mut self, profile: &Self) {
        for (key, value) in &profile.0 {
            match self.0.get_mut(key) {
                Some(existing) => {
                    if string_is_missing(existing) {
                        *existing = value.clone();
                    }
                }
                None => {
                    self.0.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// Reference data for the measuring site. Adopted whole from the profile
/// when absent; an existing reference is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteReference {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Transmit frequency, MHz.
    pub frequency: f64,
}

/// Reference data for the reporting network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReference {
    pub code: String,
    pub name: String,
    pub region: String,
}

/// The full metadata record attached to one output product file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub identity: FileIdentity,
    pub provenance: Provenance,
    pub spatial: SpatialCoverage,
    pub temporal: TemporalCoverage,
    pub publisher: PublisherBlock,
    pub conventions: Conventions,
    pub extra: ExtraAttributes,
    pub site: Option<SiteReference>,
    pub network: Option<NetworkReference>,
    pub radial_thresholds: Option<RadialQcThresholds>,
    pub total_thresholds: Option<TotalQcThresholds>,
}

impl ProductMetadata {
    /// A fresh record for a product of the given kind, with the matching
    /// threshold container attached and every other field awaiting either
    /// parsed values or profile fallback.
    pub fn for_kind(kind: TableKind) -> Self {
        let mut meta = Self::default();
        match kind {
            TableKind::Radial => meta.radial_thresholds = Some(RadialQcThresholds::default()),
            TableKind::Total => meta.total_thresholds = Some(TotalQcThresholds::default()),
        }
        meta
    }
}

impl ProfileFallback for ProductMetadata {
    fn fill_from(&mut self, profile: &Self) {
        self.identity.fill_from(&profile.identity);
        self.provenance.fill_from(&profile.provenance);
        self.spatial.fill_from(&profile.spatial);
        self.temporal.fill_from(&profile.temporal);
        self.publisher.fill_from(&profile.publisher);
        self.conventions.fill_from(&profile.conventions);
        self.extra.fill_from(&profile.extra);

        // Reference sub-records are adopted whole when absent, otherwise
        // kept untouched.
        fill_option(&mut self.site, &profile.site);
        fill_option(&mut self.network, &profile.network);

        // Threshold sub-records recurse field-by-field when present on
        // both sides, and are adopted whole when absent.
        match self.radial_thresholds.as_mut() {
            Some(current) => {
                if let Some(profile) = profile.radial_thresholds.as_ref() {
                    current.fill_from(profile);
                }
            }
            None => self.radial_thresholds = profile.radial_thresholds,
        }
        match self.total_thresholds.as_mut() {
            Some(current) => {
                if let Some(profile) = profile.total_thresholds.as_ref() {
                    current.fill_from(profile);
                }
            }
            None => self.total_thresholds = profile.total_thresholds,
        }
    }
}
