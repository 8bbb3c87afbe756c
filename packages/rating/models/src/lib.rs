#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Core data types for station/crime correlation.
//!
//! These are the already-parsed shapes the rating engine consumes: the
//! data sources normalize provider records into [`Station`] and
//! [`CrimeIncident`] before anything is correlated.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An EV charging station location.
///
/// Identifiers are unique within a batch; that precondition belongs to
/// the source that produced the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Stable station identifier from the provider.
    pub id: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
}

/// A reported crime incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeIncident {
    /// Category label as the source reports it (free text).
    pub category: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Date the incident occurred.
    pub occurred_on: NaiveDate,
}

/// Accumulated severity-weighted exposure per station id.
///
/// Every station in the input batch has an entry, zero included.
pub type ExposureScores = BTreeMap<String, u32>;

/// A station's normalized safety rating, 0.0 (least safe) to 5.0 (safest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    /// Station identifier.
    pub id: String,
    /// Rating in [0.0, 5.0], rounded to 2 decimal places.
    pub rating: f64,
}

/// One incident that matched a station during aggregation.
///
/// Retained in encounter order so per-station detail lookups can replay
/// exactly what contributed to a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedIncident {
    /// Station the incident matched.
    pub station_id: String,
    /// Incident category label.
    pub category: String,
    /// Date the incident occurred.
    pub occurred_on: NaiveDate,
}
