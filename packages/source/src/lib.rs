#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Fetching and normalization for the two external data feeds.
//!
//! The stations API and the Socrata crime resource are fetched with
//! `reqwest` and normalized into the core `Station`/`CrimeIncident`
//! model. Parsing is split from transport so the record-level rules are
//! unit-testable without HTTP.

pub mod incidents;
pub mod stations;

/// Errors that can occur while fetching or normalizing provider data.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record could not be normalized into the core model.
    #[error("normalization error in {record_id}: {message}")]
    Normalization {
        /// Identifier of the offending record.
        record_id: String,
        /// Description of what was missing or malformed.
        message: String,
    },
}
