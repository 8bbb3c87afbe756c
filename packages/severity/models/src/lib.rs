#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crime severity taxonomy and the category-to-severity lookup table.
//!
//! Incident categories arrive as free text from the open-data source, so
//! classification is a closed string-keyed table rather than an enum of
//! known categories. Categories absent from the table classify as
//! [`CrimeSeverity::Minimal`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity level for a crime, from 1 (minimal) to 5 (critical).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CrimeSeverity {
    /// Level 1: Non-criminal or minor offenses
    Minimal = 1,
    /// Level 2: Low-level offenses (drunkenness, trespassing)
    Low = 2,
    /// Level 3: Moderate offenses (vandalism, drug possession)
    Moderate = 3,
    /// Level 4: Serious offenses (robbery, burglary, vehicle theft)
    High = 4,
    /// Level 5: Most severe offenses (assault, forcible sex offenses)
    Critical = 5,
}

impl CrimeSeverity {
    /// Returns the numeric weight of this severity level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a severity level from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-5.
    pub const fn from_value(value: u8) -> Result<Self, InvalidSeverityError> {
        match value {
            1 => Ok(Self::Minimal),
            2 => Ok(Self::Low),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::High),
            5 => Ok(Self::Critical),
            _ => Err(InvalidSeverityError { value }),
        }
    }
}

/// Error returned when attempting to create a [`CrimeSeverity`] from an
/// invalid numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSeverityError {
    /// The invalid severity value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid severity value {}: expected 1-5", self.value)
    }
}

impl std::error::Error for InvalidSeverityError {}

/// Immutable mapping from incident category labels to severity levels.
///
/// Constructed once and injected wherever classification is needed, which
/// keeps alternate taxonomies (other cities, test fixtures) a constructor
/// call away. Lookup is exact-match on the label as the source reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityTable {
    weights: BTreeMap<String, CrimeSeverity>,
}

impl SeverityTable {
    /// Builds a table from `(category, severity)` pairs.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (String, CrimeSeverity)>) -> Self {
        Self {
            weights: entries.into_iter().collect(),
        }
    }

    /// The San Francisco Police Department incident taxonomy used by the
    /// default data source.
    #[must_use]
    pub fn sf_default() -> Self {
        use CrimeSeverity::{Critical, High, Low, Moderate};

        let entries = [
            ("ASSAULT", Critical),
            ("SEX OFFENSES, FORCIBLE", Critical),
            ("LARCENY/THEFT", High),
            ("ROBBERY", High),
            ("WEAPON LAWS", High),
            ("BURGLARY", High),
            ("ARSON", High),
            ("VEHICLE THEFT", High),
            ("VANDALISM", Moderate),
            ("DISORDERLY CONDUCT", Moderate),
            ("STOLEN PROPERTY", Moderate),
            ("DRUG/NARCOTIC", Moderate),
            ("PROSTITUTION", Low),
            ("EXTORTION", Low),
            ("DRUNKENNESS", Low),
            ("TRESPASS", Low),
            ("LIQUOR LAWS", Low),
        ];

        Self::new(entries.map(|(category, severity)| (category.to_string(), severity)))
    }

    /// Classifies a category label, total over all inputs.
    ///
    /// Categories not present in the table are [`CrimeSeverity::Minimal`].
    #[must_use]
    pub fn classify(&self, category: &str) -> CrimeSeverity {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(CrimeSeverity::Minimal)
    }

    /// Returns the number of categories in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self::sf_default()
    }
}
