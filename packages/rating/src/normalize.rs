//! Exposure-to-rating normalization.

use station_safety_rating_models::{ExposureScores, SafetyRating};

use crate::CorrelationConfig;

/// Converts an exposure score into a safety rating on the 0-5 scale.
///
/// The rating is `5 * (1 - score / threshold)` clamped to [0.0, 5.0] and
/// rounded to 2 decimal places, so a station with no nearby crime rates
/// 5.00 and anything at or past the threshold rates 0.00. Rounding is
/// half-away-from-zero (`f64::round` semantics).
///
/// `safety_threshold` must already be validated as positive and finite
/// via [`CorrelationConfig::validate`]; threshold checking is a startup
/// concern, not a per-call one.
#[must_use]
pub fn rate(score: f64, safety_threshold: f64) -> f64 {
    let rating = (5.0 * (1.0 - score / safety_threshold)).clamp(0.0, 5.0);
    (rating * 100.0).round() / 100.0
}

/// Rates every station in an exposure map.
///
/// Produces exactly one rating per score entry, in score-map (station id)
/// order.
#[must_use]
pub fn ratings(scores: &ExposureScores, config: &CorrelationConfig) -> Vec<SafetyRating> {
    scores
        .iter()
        .map(|(id, score)| SafetyRating {
            id: id.clone(),
            rating: rate(f64::from(*score), config.safety_threshold),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_exposure_is_safest() {
        assert_eq!(rate(0.0, 40.0), 5.0);
    }

    #[test]
    fn threshold_exposure_is_least_safe() {
        assert_eq!(rate(40.0, 40.0), 0.0);
    }

    #[test]
    fn over_threshold_clamps_to_zero() {
        assert_eq!(rate(50.0, 40.0), 0.0);
        assert_eq!(rate(1_000.0, 40.0), 0.0);
    }

    #[test]
    fn known_scores_round_to_two_decimals() {
        // 5 * (1 - 5/40) = 4.375 -> 4.38 (half away from zero)
        assert_eq!(rate(5.0, 40.0), 4.38);
        // 5 * (1 - 6/40) = 4.25
        assert_eq!(rate(6.0, 40.0), 4.25);
    }

    #[test]
    fn rating_never_increases_with_exposure() {
        let mut previous = rate(0.0, 40.0);
        for score in 1..=60 {
            let current = rate(f64::from(score), 40.0);
            assert!(
                current <= previous,
                "rating rose from {previous} to {current} at score {score}"
            );
            previous = current;
        }
    }

    #[test]
    fn end_to_end_colocated_assault() {
        use chrono::NaiveDate;
        use station_safety_rating_models::{CrimeIncident, Station};

        let stations = vec![Station {
            id: "station-1".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
        }];
        let incidents = vec![CrimeIncident {
            category: "ASSAULT".to_string(),
            latitude: 37.7749,
            longitude: -122.4194,
            occurred_on: NaiveDate::from_ymd_opt(2018, 6, 1).unwrap(),
        }];

        let config = CorrelationConfig::default();
        let exposure = crate::aggregate(&stations, &incidents, &config).unwrap();
        let rated = ratings(&exposure.scores, &config);

        assert_eq!(exposure.scores["station-1"], 5);
        assert_eq!(rated.len(), 1);
        assert_eq!(rated[0].rating, 4.38);
    }

    #[test]
    fn ratings_cover_every_station() {
        let mut scores = ExposureScores::new();
        scores.insert("a".to_string(), 0);
        scores.insert("b".to_string(), 5);
        scores.insert("c".to_string(), 80);

        let rated = ratings(&scores, &CorrelationConfig::default());

        assert_eq!(rated.len(), 3);
        assert_eq!(rated[0].id, "a");
        assert_eq!(rated[0].rating, 5.0);
        assert_eq!(rated[1].id, "b");
        assert_eq!(rated[1].rating, 4.38);
        assert_eq!(rated[2].id, "c");
        assert_eq!(rated[2].rating, 0.0);
    }
}
