//! API route handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use forecast_facade::{graph_stat, resolve_statistic, Horizon, SeriesQuery};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::figure::{display_figure, forecast_figure, Figure};
use crate::selection::{country_options, reconcile_state, state_options};
use crate::AppState;

/// Series selection shared by the graph and forecast endpoints
#[derive(Debug, Deserialize)]
pub struct GraphParams {
    pub country: Option<String>,
    pub state: Option<String>,
    pub stat: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastParams {
    pub country: Option<String>,
    pub state: Option<String>,
    pub stat: Option<String>,
    pub horizon: Option<String>,
}

fn series_query(
    country: Option<&str>,
    state: Option<&str>,
    stat: Option<&str>,
) -> Result<SeriesQuery, ApiError> {
    let country = country
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::InvalidParameter("country is required".to_string()))?;
    Ok(SeriesQuery::new(country, state, resolve_statistic(stat)))
}

/// Parse the raw `horizon` parameter. Missing or blank means the default.
fn parse_horizon(raw: Option<&str>) -> Result<Horizon, ApiError> {
    match raw.map(str::trim).filter(|h| !h.is_empty()) {
        None => Ok(Horizon::default()),
        Some(raw) => {
            let days = raw.parse::<usize>().map_err(|_| {
                ApiError::InvalidParameter(format!(
                    "Invalid parameter 'horizon': expected a whole number of days, got '{}'",
                    raw
                ))
            })?;
            Ok(Horizon::new(days)?)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct StatesParams {
    pub country: Option<String>,
    pub current: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub options: Vec<String>,
    pub selected: String,
}

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - is the observation table loaded?
pub async fn readiness(State(state): State<AppState>) -> Json<serde_json::Value> {
    let table = &state.table;
    Json(serde_json::json!({
        "status": if table.is_empty() { "empty" } else { "ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "rows": table.len(),
        "countries": table.countries().len(),
        "last_date": table.last_date(),
    }))
}

pub async fn countries(State(state): State<AppState>) -> Json<CountriesResponse> {
    Json(CountriesResponse {
        countries: country_options(&state.table),
    })
}

pub async fn states(
    State(state): State<AppState>,
    Query(params): Query<StatesParams>,
) -> Json<StatesResponse> {
    let options = state_options(&state.table, params.country.as_deref().unwrap_or_default());
    let selected = reconcile_state(&options, params.current.as_deref());
    Json(StatesResponse { options, selected })
}

pub async fn graph(
    State(state): State<AppState>,
    Query(params): Query<GraphParams>,
) -> Result<Json<Figure>, ApiError> {
    let query = series_query(
        params.country.as_deref(),
        params.state.as_deref(),
        params.stat.as_deref(),
    )?;
    let series = graph_stat(&state.table, &query)?;
    Ok(Json(display_figure(&query, &series)))
}

pub async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<Figure>, ApiError> {
    let query = series_query(
        params.country.as_deref(),
        params.state.as_deref(),
        params.stat.as_deref(),
    )?;
    let horizon = parse_horizon(params.horizon.as_deref())?;

    let table = Arc::clone(&state.table);
    let forecaster = state.forecaster;
    let task_query = query.clone();
    let task = tokio::task::spawn_blocking(move || {
        forecaster.get_prediction(&table, &task_query, horizon)
    });

    let result = tokio::time::timeout(state.forecast_timeout, task)
        .await
        .map_err(|_| ApiError::Timeout(state.forecast_timeout.as_secs()))?
        .map_err(|e| ApiError::Internal(format!("forecast task failed: {}", e)))??;

    Ok(Json(forecast_figure(&query, &result)))
}
