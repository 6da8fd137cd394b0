//! Dropdown option rules
//!
//! The state dropdown is recomputed from the country and then reconciled
//! with the previous choice, replacing the reactive chaining of a UI
//! framework with two plain functions.

use data_spi::{ObservationTable, STATE_NONE};

/// Countries in alphabetical order.
pub fn country_options(table: &ObservationTable) -> Vec<String> {
    table
        .sorted_countries()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// `"None"` followed by the country's state-total regions.
///
/// `"None"` selects the national totals, so it is offered for every country.
pub fn state_options(table: &ObservationTable, country: &str) -> Vec<String> {
    std::iter::once(STATE_NONE)
        .chain(table.regions(country))
        .map(str::to_string)
        .collect()
}

/// Keep `current` if it is still offered, else reset to `"None"`.
pub fn reconcile_state(options: &[String], current: Option<&str>) -> String {
    match current {
        Some(current) if options.iter().any(|o| o == current) => current.to_string(),
        _ => STATE_NONE.to_string(),
    }
}
