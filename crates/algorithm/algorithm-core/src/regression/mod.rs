//! Regression and statistical models for time series forecasting
//!
//! This module contains algorithms that fit mathematical models to data.
//!
//! ## Algorithms
//!
//! - **SARIMA**: Seasonal AutoRegressive Integrated Moving Average

pub mod sarima;

pub use sarima::{Coefficients, Sarima, DEFAULT_MAX_ITERATIONS};
