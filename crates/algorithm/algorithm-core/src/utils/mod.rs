//! Numerical helpers shared by the models

pub mod constraints;
pub mod differencing;
pub mod metrics;
pub mod polynomial;
