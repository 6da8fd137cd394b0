//! End-to-end tests for the HTTP surface, driven through the router.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{Days, NaiveDate};
use data_spi::{Jurisdiction, Observation, ObservationTable};
use serde_json::Value;
use server::config::ServerConfig;
use server::{app, AppState};
use tower::ServiceExt;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 4, 1)
        .unwrap()
        .checked_add_days(Days::new(offset))
        .unwrap()
}

fn table() -> ObservationTable {
    let mut rows = Vec::new();
    for d in 0..60 {
        rows.push(Observation::new(
            day(d),
            "Wakanda",
            None,
            Jurisdiction::NationalTotal,
            Some(500.0 + 20.0 * d as f64),
            Some(5.0 + d as f64),
        ));
    }
    for d in 0..10 {
        rows.push(Observation::new(
            day(d),
            "Genovia",
            None,
            Jurisdiction::NationalTotal,
            Some(1.0 + d as f64),
            None,
        ));
        rows.push(Observation::new(
            day(d),
            "Genovia",
            Some("Pyrus"),
            Jurisdiction::StateTotal,
            Some(1.0 + d as f64),
            None,
        ));
    }
    ObservationTable::new(rows)
}

fn router() -> Router {
    let config = ServerConfig {
        max_iterations: 50,
        forecast_timeout: Duration::from_secs(60),
        ..ServerConfig::default()
    };
    app(AppState::new(table(), &config))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_endpoints() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");

    let (status, body) = get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["rows"], 80);
    assert_eq!(body["countries"], 2);
}

#[tokio::test]
async fn index_page_is_html() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn country_and_state_options() {
    let (_, body) = get("/api/v1/countries").await;
    assert_eq!(body["countries"], serde_json::json!(["Genovia", "Wakanda"]));

    let (_, body) = get("/api/v1/states?country=Genovia&current=Elsewhere").await;
    assert_eq!(body["options"], serde_json::json!(["None", "Pyrus"]));
    assert_eq!(body["selected"], "None");

    let (_, body) = get("/api/v1/states?country=Genovia&current=Pyrus").await;
    assert_eq!(body["selected"], "Pyrus");

    let (_, body) = get("/api/v1/states?country=Wakanda&current=Pyrus").await;
    assert_eq!(body["options"], serde_json::json!(["None"]));
    assert_eq!(body["selected"], "None");
}

#[tokio::test]
async fn graph_returns_single_trace_figure() {
    let (status, body) = get("/api/v1/graph?country=Genovia&state=Pyrus&stat=Cumulative%20Cases").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"]["title"]["text"], "COVID-19 Cumulative Cases in Pyrus, Genovia");
    assert_eq!(body["layout"]["showlegend"], false);
    assert_eq!(body["data"][0]["name"], "Cumulative Cases");
    assert_eq!(body["data"][0]["y"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn unknown_statistic_falls_back_to_cases() {
    let (status, body) = get("/api/v1/graph?country=Wakanda&state=None&stat=Recoveries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["layout"]["title"]["text"], "COVID-19 Cumulative Cases in Wakanda");
}

#[tokio::test]
async fn forecast_returns_history_and_projection() {
    let (status, body) = get("/api/v1/forecast?country=Wakanda&state=None&stat=Cumulative%20Cases&horizon=30").await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["layout"]["showlegend"], true);
    assert_eq!(
        body["layout"]["title"]["text"],
        "30-day forecast of COVID-19 Cumulative Cases in Wakanda"
    );
    assert_eq!(body["data"][1]["name"], "Forecast");
    let forecast_x = body["data"][1]["x"].as_array().unwrap();
    assert_eq!(forecast_x.len(), 30);
    assert_eq!(forecast_x[0], day(59).to_string());
    assert_eq!(body["data"][0]["x"].as_array().unwrap().len(), 59);
}

#[tokio::test]
async fn error_statuses() {
    let (status, body) = get("/api/v1/graph?country=Atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "selection_empty");
    assert_eq!(body["message"], "No data available for this selection");

    let (status, body) = get("/api/v1/forecast?country=Genovia&horizon=30").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "model_fit");

    let (status, body) = get("/api/v1/forecast?country=Wakanda&horizon=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_parameter");

    let (status, body) = get("/api/v1/forecast?country=Wakanda&horizon=2000000000").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_parameter");

    let (status, body) = get("/api/v1/forecast?country=Wakanda&horizon=soon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_parameter");
    assert!(body["message"].as_str().unwrap().contains("horizon"));

    let (status, _) = get("/api/v1/graph").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
