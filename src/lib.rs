pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use handlers::{health, hospital};
use service::HospitalService;

/// Only the configured origin may call the API from a browser.
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("Invalid CORS origin: {}", origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

pub fn build_app(service: HospitalService, config: &Config) -> anyhow::Result<Router> {
    let app = Router::new()
        .merge(health::router())
        .nest("/api/hospitals", hospital::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origin)?)
        .with_state(service);

    Ok(app)
}
