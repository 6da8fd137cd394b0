//! Counters that can be displayed or forecast.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A cumulative counter carried by every observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Statistic {
    /// Cumulative confirmed cases
    #[default]
    #[serde(rename = "Cumulative Cases")]
    CumulativeCases,
    /// Cumulative confirmed deaths
    #[serde(rename = "Cumulative Deaths")]
    CumulativeDeaths,
}

impl Statistic {
    /// Column name used in snapshots and on screen.
    pub fn display_name(&self) -> &'static str {
        match self {
            Statistic::CumulativeCases => "Cumulative Cases",
            Statistic::CumulativeDeaths => "Cumulative Deaths",
        }
    }

    /// Column name in the raw tracker CSV.
    pub fn source_column(&self) -> &'static str {
        match self {
            Statistic::CumulativeCases => "ConfirmedCases",
            Statistic::CumulativeDeaths => "ConfirmedDeaths",
        }
    }

    /// Parse a statistic from its display name, source column or a short alias.
    ///
    /// Matching ignores case, spaces, dashes and underscores.
    pub fn parse(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "cumulativecases" | "confirmedcases" | "cases" => Some(Statistic::CumulativeCases),
            "cumulativedeaths" | "confirmeddeaths" | "deaths" => {
                Some(Statistic::CumulativeDeaths)
            }
            _ => None,
        }
    }
}

impl FromStr for Statistic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown statistic '{}'", s))
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
