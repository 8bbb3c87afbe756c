//! Severity-weighted exposure aggregation.

use station_safety_geo::LatLng;
use station_safety_rating_models::{CrimeIncident, ExposureScores, MatchedIncident, Station};

use crate::{CorrelationConfig, RatingError};

/// The result of one aggregation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Exposure {
    /// Accumulated severity weight per station id. Every input station
    /// has an entry, zero included.
    pub scores: ExposureScores,
    /// Every (station, incident) proximity match, in encounter order.
    /// This is the record [`details_for`](crate::details_for) filters.
    pub matches: Vec<MatchedIncident>,
}

/// Correlates stations against incidents and accumulates severity
/// weights for every incident within the configured radius.
///
/// Only incidents dated strictly after `config.date_cutoff` participate;
/// an incident dated exactly on the cutoff is excluded. The proximity
/// boundary is inclusive. Empty inputs are valid: no stations yields an
/// empty score map, and no incidents leaves every station at zero.
///
/// The join is the reference O(stations x incidents) double loop. Each
/// station's score is independent of every other station's, so the outer
/// loop could be fanned out across threads; at the data sizes involved
/// the straight loop is fast enough.
///
/// # Errors
///
/// Returns [`RatingError::DataQuality`] naming the offending record if
/// any station, or any incident inside the date window, carries a
/// non-finite or out-of-range coordinate. A single bad record fails the
/// whole run.
pub fn aggregate(
    stations: &[Station],
    incidents: &[CrimeIncident],
    config: &CorrelationConfig,
) -> Result<Exposure, RatingError> {
    let mut scores = ExposureScores::new();
    for station in stations {
        let point = LatLng::new(station.latitude, station.longitude);
        point
            .validate()
            .map_err(|e| RatingError::DataQuality {
                record_id: format!("station {}", station.id),
                message: e.to_string(),
            })?;
        scores.entry(station.id.clone()).or_insert(0);
    }

    let mut relevant: Vec<&CrimeIncident> = Vec::new();
    for (idx, incident) in incidents.iter().enumerate() {
        if incident.occurred_on <= config.date_cutoff {
            continue;
        }
        let point = LatLng::new(incident.latitude, incident.longitude);
        point
            .validate()
            .map_err(|e| RatingError::DataQuality {
                record_id: format!(
                    "incident #{idx} ({} on {})",
                    incident.category, incident.occurred_on
                ),
                message: e.to_string(),
            })?;
        relevant.push(incident);
    }

    let mut matches = Vec::new();
    for station in stations {
        let station_point = LatLng::new(station.latitude, station.longitude);
        for incident in &relevant {
            let incident_point = LatLng::new(incident.latitude, incident.longitude);
            if station_safety_geo::is_nearby(
                station_point,
                incident_point,
                config.max_distance_miles,
            ) {
                let weight = u32::from(config.severity.classify(&incident.category).value());
                if let Some(score) = scores.get_mut(&station.id) {
                    *score += weight;
                }
                matches.push(MatchedIncident {
                    station_id: station.id.clone(),
                    category: incident.category.clone(),
                    occurred_on: incident.occurred_on,
                });
            }
        }
    }

    log::debug!(
        "Correlated {} stations against {} incidents ({} in date window, {} matches)",
        stations.len(),
        incidents.len(),
        relevant.len(),
        matches.len()
    );

    Ok(Exposure { scores, matches })
}
