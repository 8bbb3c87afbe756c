#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for station safety ratings.
//!
//! At startup the server fetches the station and crime feeds, runs the
//! correlation once, and serves the resulting ratings and per-station
//! crime details from memory. Bad configuration and bad input data are
//! startup failures; the server never serves partial results.

mod handlers;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use chrono::NaiveDate;
use station_safety_rating::{CorrelationConfig, RatingError};
use station_safety_rating_models::{MatchedIncident, SafetyRating};
use station_safety_source::SourceError;
use station_safety_source_models::{IncidentSourceConfig, StationSourceConfig};

/// Errors that can keep the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration or input data was rejected by the rating engine.
    #[error(transparent)]
    Rating(#[from] RatingError),

    /// An upstream feed could not be fetched or normalized.
    #[error(transparent)]
    Fetch(#[from] SourceError),

    /// The HTTP server failed to bind or run.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared application state.
///
/// Computed once at startup; handlers only read from it.
pub struct AppState {
    /// One rating per station, in station-id order.
    pub ratings: Vec<SafetyRating>,
    /// Every (station, incident) match behind the ratings.
    pub matches: Vec<MatchedIncident>,
}

/// Builds the correlation config from environment overrides.
///
/// Recognized variables: `MAX_CRIME_DISTANCE_MILES`, `SAFETY_THRESHOLD`,
/// and `CRIME_DATE_CUTOFF` (ISO date). Unset variables keep their
/// defaults; a set-but-unparseable variable is a configuration error,
/// not a silent fallback.
///
/// # Errors
///
/// Returns [`RatingError::Configuration`] if a variable fails to parse
/// or the resulting config fails validation.
pub fn config_from_env() -> Result<CorrelationConfig, RatingError> {
    let mut config = CorrelationConfig::default();

    if let Some(miles) = env_parse::<f64>("MAX_CRIME_DISTANCE_MILES")? {
        config.max_distance_miles = miles;
    }
    if let Some(threshold) = env_parse::<f64>("SAFETY_THRESHOLD")? {
        config.safety_threshold = threshold;
    }
    if let Some(cutoff) = env_parse::<NaiveDate>("CRIME_DATE_CUTOFF")? {
        config.date_cutoff = cutoff;
    }

    config.validate()?;
    Ok(config)
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>, RatingError> {
    std::env::var(name).ok().map_or(Ok(None), |raw| {
        raw.trim()
            .parse()
            .map(Some)
            .map_err(|_| RatingError::Configuration {
                message: format!("invalid {name} value {raw:?}"),
            })
    })
}

/// Starts the station safety API server.
///
/// Validates configuration, fetches both feeds, correlates and rates
/// every station, then serves the results. This is a regular async
/// function; the caller provides the runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns [`ServerError`] if configuration is invalid, either feed
/// fails to fetch or normalize, the input data fails quality checks, or
/// the HTTP server fails to bind.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> Result<(), ServerError> {
    let config = config_from_env()?;

    let mut station_config = StationSourceConfig::default();
    if let Ok(city) = std::env::var("STATION_CITY") {
        station_config.city = city;
    }
    if let Ok(url) = std::env::var("STATIONS_API_URL") {
        station_config.api_url = url;
    }
    let mut incident_config = IncidentSourceConfig::default();
    if let Ok(url) = std::env::var("INCIDENTS_API_URL") {
        incident_config.api_url = url;
    }

    let client = reqwest::Client::new();
    let stations = station_safety_source::stations::fetch_stations(&client, &station_config).await?;
    let incidents =
        station_safety_source::incidents::fetch_incidents(&client, &incident_config).await?;

    log::info!("Correlating {} stations with {} incidents", stations.len(), incidents.len());
    let exposure = station_safety_rating::aggregate(&stations, &incidents, &config)?;
    let ratings = station_safety_rating::ratings(&exposure.scores, &config);
    log::info!("Rated {} stations", ratings.len());

    let state = web::Data::new(AppState {
        ratings,
        matches: exposure.matches,
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(handlers::health))
                    .route("/ratings", web::get().to(handlers::ratings))
                    .route("/details/{id}", web::get().to(handlers::details)),
            )
    })
    .bind((bind_addr, port))?
    .run()
    .await?;

    Ok(())
}
