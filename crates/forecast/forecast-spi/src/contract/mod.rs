//! Contract module containing trait definitions for forecast operations

mod pipeline_step;

pub use pipeline_step::PipelineStep;
