//! Pipeline step trait for composable preprocessing

use crate::error::Result;

/// Reversible transform applied to a series before modelling.
///
/// Forecasts are produced on the transformed scale and mapped back with
/// [`inverse_transform`](PipelineStep::inverse_transform).
pub trait PipelineStep: Send + Sync {
    /// Fit the step to data (learn parameters)
    fn fit(&mut self, data: &[f64]);

    /// Transform data forward
    fn transform(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Inverse transform (undo the transformation)
    fn inverse_transform(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Name of this step
    fn name(&self) -> &str;
}
