//! HTTP handler functions for the station safety API.

use actix_web::{HttpResponse, web};
use station_safety_rating::details_for;
use station_safety_server_models::{ApiCrimeDetail, ApiHealth, ApiRating};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/ratings`
///
/// Returns every station's safety rating.
pub async fn ratings(state: web::Data<AppState>) -> HttpResponse {
    let ratings: Vec<ApiRating> = state.ratings.iter().cloned().map(ApiRating::from).collect();
    HttpResponse::Ok().json(ratings)
}

/// `GET /api/details/{id}`
///
/// Returns the crimes that contributed to one station's score. Unknown
/// ids get an empty list, not an error.
pub async fn details(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let station_id = path.into_inner();
    let details: Vec<ApiCrimeDetail> = details_for(&station_id, &state.matches)
        .into_iter()
        .map(ApiCrimeDetail::from)
        .collect();
    HttpResponse::Ok().json(details)
}
