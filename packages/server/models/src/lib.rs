#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API response types for the station safety server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the core model types to allow independent evolution of
//! the API contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use station_safety_rating_models::{MatchedIncident, SafetyRating};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// A station's safety rating as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRating {
    /// Station identifier.
    pub id: String,
    /// Safety rating, 0.00 (least safe) to 5.00 (safest).
    pub rating: f64,
}

impl From<SafetyRating> for ApiRating {
    fn from(rating: SafetyRating) -> Self {
        Self {
            id: rating.id,
            rating: rating.rating,
        }
    }
}

/// One crime that contributed to a station's score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCrimeDetail {
    /// Incident category label.
    pub category: String,
    /// Date the incident occurred.
    pub date: NaiveDate,
}

impl From<&MatchedIncident> for ApiCrimeDetail {
    fn from(matched: &MatchedIncident) -> Self {
        Self {
            category: matched.category.clone(),
            date: matched.occurred_on,
        }
    }
}
