//! A single daily row of the tracker dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Statistic;

/// Aggregation level of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// Whole-country aggregate (`NAT_TOTAL`)
    NationalTotal,
    /// State or region aggregate (`STATE_TOTAL`)
    StateTotal,
    /// Anything else the dataset may carry
    Other,
}

impl Jurisdiction {
    /// Parse the dataset's jurisdiction code. Unknown codes map to [`Jurisdiction::Other`].
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "NAT_TOTAL" => Jurisdiction::NationalTotal,
            "STATE_TOTAL" => Jurisdiction::StateTotal,
            _ => Jurisdiction::Other,
        }
    }

    /// Dataset code for this level.
    pub fn as_code(&self) -> &'static str {
        match self {
            Jurisdiction::NationalTotal => "NAT_TOTAL",
            Jurisdiction::StateTotal => "STATE_TOTAL",
            Jurisdiction::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

/// One observation: a jurisdiction's cumulative counters on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar day of the observation
    pub date: NaiveDate,
    /// Country name
    pub country: String,
    /// Region (state) name, absent for national rows
    pub region: Option<String>,
    /// Aggregation level
    pub jurisdiction: Jurisdiction,
    /// Cumulative confirmed cases
    pub cases: Option<f64>,
    /// Cumulative confirmed deaths
    pub deaths: Option<f64>,
}

impl Observation {
    /// Create a new Observation.
    pub fn new(
        date: NaiveDate,
        country: &str,
        region: Option<&str>,
        jurisdiction: Jurisdiction,
        cases: Option<f64>,
        deaths: Option<f64>,
    ) -> Self {
        Self {
            date,
            country: country.to_string(),
            region: region.map(str::to_string),
            jurisdiction,
            cases,
            deaths,
        }
    }

    /// Value of the requested counter, if recorded.
    pub fn value(&self, stat: Statistic) -> Option<f64> {
        match stat {
            Statistic::CumulativeCases => self.cases,
            Statistic::CumulativeDeaths => self.deaths,
        }
    }
}
