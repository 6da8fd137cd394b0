//! # server
//!
//! HTTP dashboard for COVID-19 case and death curves. Serves a single page
//! with selection dropdowns and a JSON API that returns plotly figures for
//! historical series and their forecasts.

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use data_spi::ObservationTable;
use forecast_facade::Forecaster;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod figure;
pub mod page;
pub mod routes;
pub mod selection;

use config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<ObservationTable>,
    pub forecaster: Forecaster,
    pub forecast_timeout: Duration,
}

impl AppState {
    pub fn new(table: ObservationTable, config: &ServerConfig) -> Self {
        Self {
            table: Arc::new(table),
            forecaster: Forecaster::new().with_max_iterations(config.max_iterations),
            forecast_timeout: config.forecast_timeout,
        }
    }
}

/// Build the router with middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(page::index))
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        .route("/health", get(routes::liveness))
        // API endpoints
        .route("/api/v1/countries", get(routes::countries))
        .route("/api/v1/states", get(routes::states))
        .route("/api/v1/graph", get(routes::graph))
        .route("/api/v1/forecast", get(routes::forecast))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
