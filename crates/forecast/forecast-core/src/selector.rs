//! Series selection
//!
//! Narrows the observation table to one jurisdiction's series for one
//! statistic and cleans it for plotting or modelling.

use chrono::NaiveDate;
use data_spi::{Jurisdiction, ObservationTable, Statistic};
use forecast_spi::{CleanedSeries, CleaningPolicy, ForecastError, Result, SeriesQuery};

use crate::interpolate::interpolate_interior;

/// Resolve a requested statistic name, falling back to cumulative cases.
pub fn resolve_statistic(name: Option<&str>) -> Statistic {
    match name {
        None => Statistic::default(),
        Some(raw) => Statistic::parse(raw).unwrap_or_else(|| {
            tracing::warn!(
                requested = raw,
                fallback = %Statistic::default(),
                "unrecognized statistic"
            );
            Statistic::default()
        }),
    }
}

/// Select and clean the series a query describes.
///
/// A state that the table lists as a state-total region of the country
/// selects that region's rows. Any other state selects the country's
/// national-total rows. The most recent date is dropped as provisional.
pub fn select_series(
    table: &ObservationTable,
    query: &SeriesQuery,
    policy: CleaningPolicy,
) -> Result<CleanedSeries> {
    let country = query.country();
    let state = query
        .state()
        .filter(|state| table.has_region(country, state));
    if let (Some(requested), None) = (query.state(), state) {
        tracing::debug!(
            country,
            state = requested,
            "state not listed for country, using national totals"
        );
    }

    let mut rows: Vec<(NaiveDate, Option<f64>)> = table
        .iter()
        .filter(|row| row.country == country)
        .filter(|row| match state {
            Some(state) => {
                row.jurisdiction == Jurisdiction::StateTotal
                    && row.region.as_deref() == Some(state)
            }
            None => row.jurisdiction == Jurisdiction::NationalTotal,
        })
        .map(|row| (row.date, row.value(query.statistic())))
        .collect();

    rows.sort_by_key(|(date, _)| *date);
    rows.dedup_by_key(|(date, _)| *date);
    rows.pop();

    let (dates, raw): (Vec<NaiveDate>, Vec<Option<f64>>) = rows.into_iter().unzip();
    let filled = interpolate_interior(&dates, &raw);

    let (dates, values): (Vec<NaiveDate>, Vec<f64>) = dates
        .into_iter()
        .zip(filled)
        .filter(|(_, value)| policy.keeps(*value))
        .filter_map(|(date, value)| value.map(|v| (date, v)))
        .unzip();

    if dates.is_empty() {
        return Err(ForecastError::SelectionEmpty {
            country: country.to_string(),
            state: state.map(str::to_string),
        });
    }

    tracing::debug!(
        country,
        state = state.unwrap_or("-"),
        statistic = %query.statistic(),
        ?policy,
        points = dates.len(),
        "selected series"
    );
    CleanedSeries::new(dates, values)
}
