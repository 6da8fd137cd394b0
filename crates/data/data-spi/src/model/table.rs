//! In-memory observation table.

use std::collections::HashSet;

use chrono::NaiveDate;

use super::{Jurisdiction, Observation};

/// Sentinel state value meaning "no state selected".
pub const STATE_NONE: &str = "None";

/// Every observation loaded at startup. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    rows: Vec<Observation>,
}

impl ObservationTable {
    /// Wrap already-parsed rows.
    pub fn new(rows: Vec<Observation>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in load order.
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    /// Iterate over rows in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.rows.iter()
    }

    /// Distinct country names in first-seen order.
    pub fn countries(&self) -> Vec<&str> {
        distinct(self.rows.iter().map(|row| row.country.as_str()))
    }

    /// Distinct country names sorted alphabetically.
    pub fn sorted_countries(&self) -> Vec<&str> {
        let mut countries = self.countries();
        countries.sort_unstable();
        countries
    }

    /// Distinct state-total region names for a country, in first-seen order.
    pub fn regions(&self, country: &str) -> Vec<&str> {
        distinct(
            self.rows
                .iter()
                .filter(|row| {
                    row.jurisdiction == Jurisdiction::StateTotal && row.country == country
                })
                .filter_map(|row| row.region.as_deref())
                .filter(|region| !region.is_empty()),
        )
    }

    /// True if `region` is a state-total region of `country`.
    pub fn has_region(&self, country: &str, region: &str) -> bool {
        self.rows.iter().any(|row| {
            row.jurisdiction == Jurisdiction::StateTotal
                && row.country == country
                && row.region.as_deref() == Some(region)
        })
    }

    /// Most recent date in the table.
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.iter().map(|row| row.date).max()
    }
}

impl From<Vec<Observation>> for ObservationTable {
    fn from(rows: Vec<Observation>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a ObservationTable {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    names.filter(|name| seen.insert(*name)).collect()
}
