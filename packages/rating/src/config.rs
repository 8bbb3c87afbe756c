//! Correlation and rating configuration.

use chrono::NaiveDate;
use station_safety_severity_models::SeverityTable;

use crate::RatingError;

/// Default proximity radius between a station and a crime, in miles.
pub const DEFAULT_MAX_DISTANCE_MILES: f64 = 0.25;

/// Default exposure level considered maximally unsafe.
///
/// Arbitrary for now; over time this should be derived from historical
/// data or city-wide exposure distributions.
pub const DEFAULT_SAFETY_THRESHOLD: f64 = 40.0;

/// Settings for one correlation run.
///
/// Built once at startup and validated before any aggregation; the
/// severity table rides along so alternate taxonomies can be injected
/// without touching the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationConfig {
    /// Maximum distance (miles) for an incident to count against a
    /// station. Boundary inclusive.
    pub max_distance_miles: f64,
    /// Exposure score at (or above) which the safety rating bottoms out
    /// at 0.
    pub safety_threshold: f64,
    /// Incidents dated strictly after this date participate.
    pub date_cutoff: NaiveDate,
    /// Category-to-severity mapping.
    pub severity: SeverityTable,
}

impl CorrelationConfig {
    /// Checks the numeric settings.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Configuration`] if the safety threshold is
    /// not a positive finite number or the radius is negative or
    /// non-finite.
    pub fn validate(&self) -> Result<(), RatingError> {
        if !self.safety_threshold.is_finite() || self.safety_threshold <= 0.0 {
            return Err(RatingError::Configuration {
                message: format!(
                    "safety threshold must be a positive finite number, got {}",
                    self.safety_threshold
                ),
            });
        }
        if !self.max_distance_miles.is_finite() || self.max_distance_miles < 0.0 {
            return Err(RatingError::Configuration {
                message: format!(
                    "max distance must be a non-negative finite number of miles, got {}",
                    self.max_distance_miles
                ),
            });
        }
        Ok(())
    }
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            max_distance_miles: DEFAULT_MAX_DISTANCE_MILES,
            safety_threshold: DEFAULT_SAFETY_THRESHOLD,
            date_cutoff: NaiveDate::from_ymd_opt(2018, 1, 1)
                .expect("default date cutoff is a valid date"),
            severity: SeverityTable::sf_default(),
        }
    }
}
