//! Predictor trait for time series algorithms

use crate::error::Result;

/// Common trait for all time series predictors
///
/// Follows the fit-predict pattern: a model is configured, fitted once on a
/// history, then asked for any number of future steps.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Predictor;
///
/// fn forecast<P: Predictor>(predictor: &mut P, data: &[f64], horizon: usize) -> algorithm_spi::Result<Vec<f64>> {
///     predictor.fit(data)?;
///     predictor.predict(horizon)
/// }
/// ```
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict `steps` values following the fitted history
    fn predict(&self, steps: usize) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TsError;

    /// Repeats the last observed value.
    struct NaivePredictor {
        last: Option<f64>,
    }

    impl Predictor for NaivePredictor {
        fn fit(&mut self, data: &[f64]) -> Result<()> {
            let last = data.last().copied().ok_or(TsError::InsufficientData {
                required: 1,
                actual: 0,
            })?;
            self.last = Some(last);
            Ok(())
        }

        fn predict(&self, steps: usize) -> Result<Vec<f64>> {
            self.last.map(|v| vec![v; steps]).ok_or(TsError::NotFitted)
        }

        fn is_fitted(&self) -> bool {
            self.last.is_some()
        }
    }

    fn run<P: Predictor>(model: &mut P, data: &[f64], steps: usize) -> Result<Vec<f64>> {
        model.fit(data)?;
        model.predict(steps)
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let model = NaivePredictor { last: None };
        assert!(!model.is_fitted());
        assert_eq!(model.predict(3), Err(TsError::NotFitted));
    }

    #[test]
    fn test_generic_fit_predict() {
        let mut model = NaivePredictor { last: None };
        let forecast = run(&mut model, &[1.0, 4.0, 9.0], 2).unwrap();
        assert_eq!(forecast, vec![9.0, 9.0]);
        assert!(model.is_fitted());
    }

    #[test]
    fn test_fit_errors_propagate() {
        let mut model = NaivePredictor { last: None };
        assert!(matches!(
            run(&mut model, &[], 1),
            Err(TsError::InsufficientData { required: 1, actual: 0 })
        ));
    }

    #[test]
    fn test_trait_object() {
        let mut model: Box<dyn Predictor> = Box::new(NaivePredictor { last: None });
        model.fit(&[2.0]).unwrap();
        assert_eq!(model.predict(1).unwrap(), vec![2.0]);
    }
}
