//! Forecasting pipeline implementations
//!
//! Composable preprocessing steps for time series forecasting.

use forecast_spi::{PipelineStep, Result};

/// Cube-root step - compresses growth curves before modelling
///
/// The inverse cubes, so signs survive the round trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeRootStep;

impl CubeRootStep {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineStep for CubeRootStep {
    fn fit(&mut self, _data: &[f64]) {}

    fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        Ok(data.iter().map(|x| x.cbrt()).collect())
    }

    fn inverse_transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        Ok(data.iter().map(|x| x * x * x).collect())
    }

    fn name(&self) -> &str {
        "cube_root"
    }
}

/// Composable forecasting pipeline
pub struct Pipeline {
    steps: Vec<Box<dyn PipelineStep>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step
    pub fn with_step(mut self, step: impl PipelineStep + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Fit all steps and transform data
    pub fn fit_transform(&mut self, data: &[f64]) -> Result<Vec<f64>> {
        let mut result = data.to_vec();
        for step in &mut self.steps {
            step.fit(&result);
            result = step.transform(&result)?;
        }
        Ok(result)
    }

    /// Transform data (steps must be fitted first)
    pub fn transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        let mut result = data.to_vec();
        for step in &self.steps {
            result = step.transform(&result)?;
        }
        Ok(result)
    }

    /// Inverse transform data (undo all transformations in reverse order)
    pub fn inverse_transform(&self, data: &[f64]) -> Result<Vec<f64>> {
        let mut result = data.to_vec();
        for step in self.steps.iter().rev() {
            result = step.inverse_transform(&result)?;
        }
        Ok(result)
    }

    /// Get the number of steps in the pipeline
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the pipeline is empty
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
