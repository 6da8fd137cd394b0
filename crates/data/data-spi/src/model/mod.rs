//! Data models for the observation table.

mod observation;
mod statistic;
mod table;

pub use observation::{Jurisdiction, Observation};
pub use statistic::Statistic;
pub use table::{ObservationTable, STATE_NONE};
