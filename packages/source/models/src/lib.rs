#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Wire formats and fetch configuration for the two data providers.
//!
//! These structs mirror the provider JSON as-is; normalization into the
//! core model (and the errors that can produce) lives in
//! `station_safety_source`. Fields stay optional here so that a record
//! missing one is a normalization decision, not a deserialization
//! failure for the whole payload.

use serde::Deserialize;

/// Default Volta stations API endpoint.
pub const DEFAULT_STATIONS_URL: &str = "https://api.voltaapi.com/v1/stations";

/// Default city filter for station records.
pub const DEFAULT_CITY: &str = "San Francisco";

/// Default SFPD incident reports Socrata resource (JSON).
pub const DEFAULT_INCIDENTS_URL: &str = "https://data.sfgov.org/resource/cuks-n6tp.json";

/// Where and how to fetch station records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSourceConfig {
    /// Stations API endpoint.
    pub api_url: String,
    /// Exact city name a station must report to be kept.
    pub city: String,
}

impl Default for StationSourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_STATIONS_URL.to_string(),
            city: DEFAULT_CITY.to_string(),
        }
    }
}

/// Where to fetch crime incident records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentSourceConfig {
    /// Socrata resource endpoint.
    pub api_url: String,
}

impl Default for IncidentSourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_INCIDENTS_URL.to_string(),
        }
    }
}

/// A station record as the stations API returns it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationRecord {
    /// Stable station identifier.
    pub id: String,
    /// City the station reports itself in.
    pub city: Option<String>,
    /// GeoJSON-style point location.
    pub location: Option<StationLocation>,
}

/// The GeoJSON-style location object on a station record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationLocation {
    /// `[longitude, latitude]` pair.
    pub coordinates: Vec<f64>,
}

/// A crime incident record as the Socrata resource returns it.
///
/// Socrata SODA serializes numeric columns as JSON strings, so `x` and
/// `y` arrive as strings and are parsed during normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IncidentRecord {
    /// Source incident number, when present.
    #[serde(rename = "incidntnum")]
    pub incident_number: Option<String>,
    /// Category label (free text).
    pub category: Option<String>,
    /// Longitude as a decimal string.
    pub x: Option<String>,
    /// Latitude as a decimal string.
    pub y: Option<String>,
    /// Occurrence date, ISO-8601 (`floating_timestamp`).
    pub date: Option<String>,
}
