pub mod errors;
pub mod routes;

use crate::adapters::{CarbonIntensityClient, CovidDataClient};
use crate::config::{ServerConfig, ServiceConfig};
use actix_cors::Cors;
use actix_web::web;
use reqwest::Client;

pub use routes::Aggregator;

/// Builds the shared aggregator; both providers reuse one connection pool.
pub fn build_aggregator(config: &ServiceConfig) -> Aggregator {
    let client = Client::new();
    Aggregator::new(
        CarbonIntensityClient::new(client.clone(), &config.carbon_intensity),
        CovidDataClient::new(client, &config.covid),
    )
}

pub fn cors(config: &ServerConfig) -> Cors {
    if config.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET"])
        .max_age(3600)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.configure(routes::init_routes);
}
