//! Per-station match lookup.

use station_safety_rating_models::MatchedIncident;

/// Returns every retained match for `station_id`, preserving the order
/// the aggregation recorded them in.
///
/// This is a filter over the match list [`aggregate`](crate::aggregate())
/// produced, not a re-computation. An id with no matches (including one
/// that was never in the batch) yields an empty list, not an error.
#[must_use]
pub fn details_for<'a>(
    station_id: &str,
    matches: &'a [MatchedIncident],
) -> Vec<&'a MatchedIncident> {
    matches
        .iter()
        .filter(|m| m.station_id == station_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn matched(station_id: &str, category: &str, day: u32) -> MatchedIncident {
        MatchedIncident {
            station_id: station_id.to_string(),
            category: category.to_string(),
            occurred_on: NaiveDate::from_ymd_opt(2018, 6, day).unwrap(),
        }
    }

    #[test]
    fn filters_to_requested_station() {
        let matches = vec![
            matched("a", "ROBBERY", 1),
            matched("b", "ASSAULT", 2),
            matched("a", "VANDALISM", 3),
        ];

        let details = details_for("a", &matches);

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].category, "ROBBERY");
        assert_eq!(details[1].category, "VANDALISM");
    }

    #[test]
    fn preserves_input_order() {
        let matches = vec![
            matched("a", "VANDALISM", 3),
            matched("a", "ROBBERY", 1),
            matched("a", "ASSAULT", 2),
        ];

        let categories: Vec<&str> = details_for("a", &matches)
            .iter()
            .map(|m| m.category.as_str())
            .collect();
        assert_eq!(categories, vec!["VANDALISM", "ROBBERY", "ASSAULT"]);
    }

    #[test]
    fn unknown_station_yields_empty() {
        let matches = vec![matched("a", "ROBBERY", 1)];
        assert!(details_for("zzz", &matches).is_empty());
        assert!(details_for("zzz", &[]).is_empty());
    }
}
