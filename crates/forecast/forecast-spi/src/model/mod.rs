//! Model module containing data structures

mod forecast_result;
mod horizon;
mod query;
mod series;

pub use forecast_result::ForecastResult;
pub use horizon::Horizon;
pub use query::{normalize_state, CleaningPolicy, SeriesQuery};
pub use series::CleanedSeries;
