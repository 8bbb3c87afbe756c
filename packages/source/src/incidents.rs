//! Crime incident feed fetching and normalization.

use chrono::{NaiveDate, NaiveDateTime};
use station_safety_rating_models::CrimeIncident;
use station_safety_source_models::{IncidentRecord, IncidentSourceConfig};

use crate::SourceError;

/// Fetches and normalizes every incident record from the Socrata
/// resource.
///
/// No date filtering happens here; the cutoff belongs to the rating
/// engine's aggregation step.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request fails or any record
/// cannot be normalized.
pub async fn fetch_incidents(
    client: &reqwest::Client,
    config: &IncidentSourceConfig,
) -> Result<Vec<CrimeIncident>, SourceError> {
    log::info!("Fetching incidents from {}", config.api_url);
    let records: Vec<IncidentRecord> = client.get(&config.api_url).send().await?.json().await?;

    let mut incidents = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        incidents.push(incident_from_record(idx, record)?);
    }

    log::info!("Fetched {} incidents", incidents.len());
    Ok(incidents)
}

/// Normalizes one incident record.
///
/// The Socrata resource reports `x` as longitude and `y` as latitude,
/// both as decimal strings, and `date` as an ISO-8601
/// `floating_timestamp`.
///
/// # Errors
///
/// Returns [`SourceError::Normalization`] naming the record if the
/// category, either coordinate, or the date is missing or unparseable.
pub fn incident_from_record(
    idx: usize,
    record: IncidentRecord,
) -> Result<CrimeIncident, SourceError> {
    let record_id = record
        .incident_number
        .clone()
        .map_or_else(|| format!("incident #{idx}"), |n| format!("incident {n}"));

    let normalization_error = |message: String| SourceError::Normalization {
        record_id: record_id.clone(),
        message,
    };

    let category = record
        .category
        .ok_or_else(|| normalization_error("record has no category".to_string()))?;

    let longitude = parse_coordinate(record.x.as_deref(), "x")
        .map_err(&normalization_error)?;
    let latitude = parse_coordinate(record.y.as_deref(), "y")
        .map_err(&normalization_error)?;

    let date = record
        .date
        .ok_or_else(|| normalization_error("record has no date".to_string()))?;
    let occurred_on = parse_occurrence_date(&date).map_err(&normalization_error)?;

    Ok(CrimeIncident {
        category,
        latitude,
        longitude,
        occurred_on,
    })
}

fn parse_coordinate(value: Option<&str>, field: &str) -> Result<f64, String> {
    let raw = value.ok_or_else(|| format!("record has no {field} coordinate"))?;
    raw.trim()
        .parse()
        .map_err(|_| format!("unparseable {field} coordinate {raw:?}"))
}

/// Parses a Socrata `floating_timestamp` (`2018-03-04T00:00:00.000`) or
/// a bare ISO date down to its calendar date.
fn parse_occurrence_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("unparseable date {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        category: Option<&str>,
        x: Option<&str>,
        y: Option<&str>,
        date: Option<&str>,
    ) -> IncidentRecord {
        IncidentRecord {
            incident_number: Some("180123456".to_string()),
            category: category.map(str::to_string),
            x: x.map(str::to_string),
            y: y.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn normalizes_socrata_record() {
        let incident = incident_from_record(
            0,
            record(
                Some("ASSAULT"),
                Some("-122.4194"),
                Some("37.7749"),
                Some("2018-03-04T00:00:00.000"),
            ),
        )
        .unwrap();

        assert_eq!(incident.category, "ASSAULT");
        assert_eq!(incident.longitude, -122.4194);
        assert_eq!(incident.latitude, 37.7749);
        assert_eq!(
            incident.occurred_on,
            NaiveDate::from_ymd_opt(2018, 3, 4).unwrap()
        );
    }

    #[test]
    fn accepts_bare_iso_date() {
        let incident = incident_from_record(
            0,
            record(Some("ROBBERY"), Some("-122.4"), Some("37.8"), Some("2018-03-04")),
        )
        .unwrap();
        assert_eq!(
            incident.occurred_on,
            NaiveDate::from_ymd_opt(2018, 3, 4).unwrap()
        );
    }

    #[test]
    fn missing_category_is_an_error() {
        let err = incident_from_record(
            0,
            record(None, Some("-122.4"), Some("37.8"), Some("2018-03-04")),
        )
        .unwrap_err();
        match err {
            SourceError::Normalization { record_id, message } => {
                assert!(record_id.contains("180123456"));
                assert!(message.contains("category"));
            }
            other => panic!("expected Normalization, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_coordinate_is_an_error() {
        let err = incident_from_record(
            0,
            record(Some("ASSAULT"), Some("not-a-number"), Some("37.8"), Some("2018-03-04")),
        )
        .unwrap_err();
        assert!(matches!(err, SourceError::Normalization { .. }));
    }

    #[test]
    fn unparseable_date_is_an_error() {
        let err = incident_from_record(
            0,
            record(Some("ASSAULT"), Some("-122.4"), Some("37.8"), Some("03/04/2018")),
        )
        .unwrap_err();
        match err {
            SourceError::Normalization { message, .. } => {
                assert!(message.contains("unparseable date"));
            }
            other => panic!("expected Normalization, got {other:?}"),
        }
    }

    #[test]
    fn anonymous_record_is_identified_by_index() {
        let mut bad = record(None, None, None, None);
        bad.incident_number = None;
        let err = incident_from_record(7, bad).unwrap_err();
        match err {
            SourceError::Normalization { record_id, .. } => {
                assert_eq!(record_id, "incident #7");
            }
            other => panic!("expected Normalization, got {other:?}"),
        }
    }

    #[test]
    fn deserializes_provider_json() {
        let json = serde_json::json!({
            "incidntnum": "180123456",
            "category": "DRUG/NARCOTIC",
            "descript": "POSSESSION OF NARCOTICS PARAPHERNALIA",
            "date": "2018-05-01T00:00:00.000",
            "x": "-122.4194",
            "y": "37.7749",
            "pddistrict": "MISSION"
        });
        let record: IncidentRecord = serde_json::from_value(json).unwrap();
        let incident = incident_from_record(0, record).unwrap();
        assert_eq!(incident.category, "DRUG/NARCOTIC");
    }
}
