#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Severity-weighted correlation of charging stations with nearby crimes.
//!
//! The pipeline is: [`aggregate`](aggregate::aggregate) joins stations
//! against incidents within the configured radius and accumulates
//! severity weights per station, then [`ratings`](normalize::ratings)
//! maps each accumulated exposure onto a bounded 0-5 safety scale.
//! [`details_for`](details::details_for) replays the incidents behind a
//! single station's score.
//!
//! Everything here is pure computation over already-fetched data; the
//! network-facing half lives in `station_safety_source`.

pub mod aggregate;
pub mod config;
pub mod details;
pub mod normalize;

pub use aggregate::{Exposure, aggregate};
pub use config::CorrelationConfig;
pub use details::details_for;
pub use normalize::{rate, ratings};

/// Errors that can occur while correlating and rating.
///
/// A single bad record fails the whole batch. Silently skipping or
/// defaulting a malformed record would corrupt every downstream score,
/// so there is no recovery path below the caller.
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    /// An input record carried a malformed coordinate.
    #[error("data quality error in {record_id}: {message}")]
    DataQuality {
        /// Identifier of the offending record.
        record_id: String,
        /// Description of what was malformed.
        message: String,
    },

    /// A configuration constant was invalid at startup.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the invalid setting.
        message: String,
    },
}
