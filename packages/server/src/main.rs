#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Binary entry point for the station safety API server.

use std::process::ExitCode;

use station_safety_rating::RatingError;
use station_safety_server::ServerError;

#[actix_web::main]
async fn main() -> ExitCode {
    pretty_env_logger::init_custom_env("RUST_LOG");

    match station_safety_server::run_server().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                ServerError::Rating(RatingError::Configuration { .. }) => {
                    log::error!("Invalid configuration: {e}");
                }
                ServerError::Rating(RatingError::DataQuality { .. }) => {
                    log::error!("Input data failed quality checks: {e}");
                }
                ServerError::Fetch(_) => {
                    log::error!("Upstream fetch failed: {e}");
                }
                ServerError::Io(_) => {
                    log::error!("Server failed: {e}");
                }
            }
            ExitCode::FAILURE
        }
    }
}
