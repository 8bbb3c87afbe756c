#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Great-circle distance and proximity checks.
//!
//! Wraps the `geo` crate's haversine metric so the rest of the system
//! talks in miles and in `(latitude, longitude)` pairs. The proximity
//! boundary is inclusive: an incident exactly at the radius counts.

use geo::{Distance, Haversine, Point};

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1_609.344;

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    /// Latitude in decimal degrees, [-90, 90].
    pub latitude: f64,
    /// Longitude in decimal degrees, [-180, 180].
    pub longitude: f64,
}

impl LatLng {
    /// Creates a coordinate pair without validating it; see [`LatLng::validate`].
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks that both components are finite and within WGS84 range.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinateError`] if either component is NaN,
    /// infinite, or outside [-90, 90] latitude / [-180, 180] longitude.
    pub fn validate(self) -> Result<(), InvalidCoordinateError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(InvalidCoordinateError {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(InvalidCoordinateError {
                latitude: self.latitude,
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}

impl From<LatLng> for Point<f64> {
    fn from(coord: LatLng) -> Self {
        Self::new(coord.longitude, coord.latitude)
    }
}

/// Error returned when a coordinate pair is NaN, infinite, or out of the
/// valid WGS84 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCoordinateError {
    /// The offending latitude.
    pub latitude: f64,
    /// The offending longitude.
    pub longitude: f64,
}

impl std::fmt::Display for InvalidCoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid coordinates ({}, {}): expected finite latitude in [-90, 90] and longitude in [-180, 180]",
            self.latitude, self.longitude
        )
    }
}

impl std::error::Error for InvalidCoordinateError {}

/// Great-circle (haversine) distance between two points, in miles.
#[must_use]
pub fn distance_miles(a: LatLng, b: LatLng) -> f64 {
    Haversine.distance(Point::from(a), Point::from(b)) / METERS_PER_MILE
}

/// Returns `true` iff `a` and `b` are within `threshold_miles` of each
/// other, boundary inclusive.
///
/// Symmetric in its two points. Identical coordinates are at distance 0
/// and are nearby for any non-negative threshold.
#[must_use]
pub fn is_nearby(a: LatLng, b: LatLng, threshold_miles: f64) -> bool {
    distance_miles(a, b) <= threshold_miles
}

#[cfg(test)]
mod tests {
    use super::*;

    const SF: LatLng = LatLng::new(37.7749, -122.4194);
    const LA: LatLng = LatLng::new(34.0522, -118.2437);

    #[test]
    fn identical_points_are_zero_distance() {
        assert_eq!(distance_miles(SF, SF), 0.0);
        assert!(is_nearby(SF, SF, 0.0));
        assert!(is_nearby(SF, SF, 0.25));
    }

    #[test]
    fn sf_to_la_distance() {
        let d = distance_miles(SF, LA);
        // Haversine puts SF -> LA at roughly 347 miles.
        assert!((340.0..355.0).contains(&d), "unexpected distance: {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(distance_miles(SF, LA), distance_miles(LA, SF));
        assert_eq!(is_nearby(SF, LA, 0.25), is_nearby(LA, SF, 0.25));
    }

    #[test]
    fn boundary_is_inclusive() {
        let near = LatLng::new(37.7749 + 0.003, -122.4194);
        let d = distance_miles(SF, near);
        assert!(d > 0.0);
        assert!(is_nearby(SF, near, d), "exact-threshold match must count");
        assert!(!is_nearby(SF, near, d - 1e-9));
    }

    #[test]
    fn validate_accepts_wgs84_range() {
        assert!(SF.validate().is_ok());
        assert!(LatLng::new(90.0, 180.0).validate().is_ok());
        assert!(LatLng::new(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert!(LatLng::new(90.01, 0.0).validate().is_err());
        assert!(LatLng::new(-90.01, 0.0).validate().is_err());
        assert!(LatLng::new(0.0, 180.01).validate().is_err());
        assert!(LatLng::new(0.0, -180.01).validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite() {
        assert!(LatLng::new(f64::NAN, 0.0).validate().is_err());
        assert!(LatLng::new(0.0, f64::INFINITY).validate().is_err());
    }
}
