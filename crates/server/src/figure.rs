//! Plotly-compatible figure descriptions

use chrono::NaiveDate;
use forecast_facade::{CleanedSeries, ForecastResult, SeriesQuery};
use serde::Serialize;

/// Name of the projected trace.
pub const FORECAST_TRACE: &str = "Forecast";

/// One line on the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

impl Trace {
    pub fn line(name: impl Into<String>, x: Vec<NaiveDate>, y: Vec<f64>) -> Self {
        Self {
            kind: "scatter",
            name: name.into(),
            mode: "lines",
            x,
            y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub showlegend: bool,
}

/// Traces plus layout, serialized in the shape plotly.js accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// The legend is shown only when there is something to tell apart.
    pub fn new(title: String, data: Vec<Trace>) -> Self {
        let showlegend = data.len() > 1;
        Self {
            data,
            layout: Layout {
                title: Title { text: title },
                showlegend,
            },
        }
    }
}

/// `"COVID-19 {stat} in {state}, {country}"`, or without the state.
pub fn title(query: &SeriesQuery) -> String {
    let stat = query.statistic().display_name();
    match query.state() {
        Some(state) => format!("COVID-19 {} in {}, {}", stat, state, query.country()),
        None => format!("COVID-19 {} in {}", stat, query.country()),
    }
}

/// Historical series alone.
pub fn display_figure(query: &SeriesQuery, series: &CleanedSeries) -> Figure {
    let trace = Trace::line(
        query.statistic().display_name(),
        series.dates().to_vec(),
        series.values().to_vec(),
    );
    Figure::new(title(query), vec![trace])
}

/// History followed by the forecast.
pub fn forecast_figure(query: &SeriesQuery, result: &ForecastResult) -> Figure {
    let history = Trace::line(
        query.statistic().display_name(),
        result.history.dates().to_vec(),
        result.history.values().to_vec(),
    );
    let forecast = Trace::line(FORECAST_TRACE, result.dates.clone(), result.values.clone());
    Figure::new(
        format!("{}-day forecast of {}", result.horizon(), title(query)),
        vec![history, forecast],
    )
}
