//! Station feed fetching and normalization.

use station_safety_rating_models::Station;
use station_safety_source_models::{StationRecord, StationSourceConfig};

use crate::SourceError;

/// Fetches all station records and keeps those in the configured city.
///
/// # Errors
///
/// Returns [`SourceError`] if the HTTP request fails or a kept record
/// cannot be normalized.
pub async fn fetch_stations(
    client: &reqwest::Client,
    config: &StationSourceConfig,
) -> Result<Vec<Station>, SourceError> {
    log::info!("Fetching stations from {}", config.api_url);
    let records: Vec<StationRecord> = client.get(&config.api_url).send().await?.json().await?;

    let total = records.len();
    let mut stations = Vec::new();
    for record in records {
        if let Some(station) = station_from_record(record, &config.city)? {
            stations.push(station);
        }
    }

    log::info!(
        "Kept {} of {total} stations in {}",
        stations.len(),
        config.city
    );
    Ok(stations)
}

/// Normalizes one station record, returning `None` for stations outside
/// `city`.
///
/// The city filter is exact-match on the record's own `city` field;
/// records with no city never match. Coordinates are the GeoJSON
/// `[longitude, latitude]` order.
///
/// # Errors
///
/// Returns [`SourceError::Normalization`] if a record in the selected
/// city has no location or a coordinate pair that is not two numbers.
pub fn station_from_record(
    record: StationRecord,
    city: &str,
) -> Result<Option<Station>, SourceError> {
    if record.city.as_deref() != Some(city) {
        return Ok(None);
    }

    let location = record.location.ok_or_else(|| SourceError::Normalization {
        record_id: format!("station {}", record.id),
        message: "record has no location".to_string(),
    })?;

    let [longitude, latitude] = location.coordinates[..] else {
        return Err(SourceError::Normalization {
            record_id: format!("station {}", record.id),
            message: format!(
                "expected [longitude, latitude], got {} coordinates",
                location.coordinates.len()
            ),
        });
    };

    Ok(Some(Station {
        id: record.id,
        latitude,
        longitude,
    }))
}
