//! Contract traits for algorithm implementations

mod predictor;

pub use predictor::Predictor;
