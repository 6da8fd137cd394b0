//! Seasonal ARIMA (p,d,q)x(P,D,Q,s)
//!
//! The series is differenced with `(1 - B)^d (1 - B^s)^D` and the result `w`
//! is modelled as
//!
//! ```text
//! phi(B) Phi(B^s) w_t = theta(B) Theta(B^s) e_t
//! ```
//!
//! Coefficients are estimated by conditional sum of squares: pre-sample
//! shocks are zero and the squared one-step residuals are minimised with
//! Levenberg-Marquardt over an unconstrained parameterization that keeps
//! every AR polynomial stationary and every MA polynomial invertible.
//! Forecasts run the recursion forward with future shocks at zero and undo
//! the differencing.

use algorithm_spi::{ArimaOrder, Predictor, Result, SeasonalOrder, TsError};
use levenberg_marquardt::{LeastSquaresProblem, LevenbergMarquardt, TerminationReason};
use nalgebra::{DMatrix, DVector, Dyn, Owned};

use crate::utils::constraints::{constrain_invertible, constrain_stationary};
use crate::utils::differencing::{difference, differencing_polynomial, integrate};
use crate::utils::metrics::{max_abs, rms};
use crate::utils::polynomial::{lag_polynomial, multiply};

/// Default optimizer patience.
pub const DEFAULT_MAX_ITERATIONS: usize = 150;

/// Relative size below which the differenced series counts as exactly zero.
const NEGLIGIBLE_SCALE: f64 = 1e-12;

/// Central-difference step for the numeric Jacobian.
const JACOBIAN_STEP: f64 = 1e-6;

/// Fitted lag polynomial coefficients, in model sign convention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coefficients {
    /// phi_1..phi_p
    pub ar: Vec<f64>,
    /// Phi_1..Phi_P
    pub seasonal_ar: Vec<f64>,
    /// theta_1..theta_q
    pub ma: Vec<f64>,
    /// Theta_1..Theta_Q
    pub seasonal_ma: Vec<f64>,
}

/// Seasonal ARIMA model.
///
/// # Example
///
/// ```rust
/// use algorithm_core::prelude::*;
///
/// let pattern = [5.0, 3.0, 4.0, 6.0, 8.0, 2.0, 1.0];
/// let data: Vec<f64> = (0..70).map(|t| t as f64 + pattern[t % 7]).collect();
///
/// let mut model = Sarima::new(ArimaOrder::new(0, 1, 0), SeasonalOrder::new(0, 1, 0, 7)).unwrap();
/// model.fit(&data).unwrap();
/// let next = model.predict(7).unwrap();
/// assert!((next[0] - (70.0 + pattern[0])).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Sarima {
    order: ArimaOrder,
    seasonal: SeasonalOrder,
    max_iterations: usize,
    state: Option<FittedState>,
}

#[derive(Debug, Clone)]
struct FittedState {
    coefficients: Coefficients,
    ar: Vec<f64>,
    ma: Vec<f64>,
    differencing: Vec<f64>,
    history: Vec<f64>,
    differenced: Vec<f64>,
    residuals: Vec<f64>,
    sigma2: f64,
}

impl Sarima {
    /// Create an unfitted model.
    pub fn new(order: ArimaOrder, seasonal: SeasonalOrder) -> Result<Self> {
        seasonal.validate()?;
        Ok(Self {
            order,
            seasonal,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            state: None,
        })
    }

    /// Limit optimizer effort. Zero is treated as one.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn order(&self) -> ArimaOrder {
        self.order
    }

    pub fn seasonal_order(&self) -> SeasonalOrder {
        self.seasonal
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Shortest history [`fit`](Predictor::fit) accepts.
    ///
    /// Covers the observations lost to differencing, the AR start-up lags,
    /// at least one MA span, and one residual per free parameter.
    pub fn min_observations(&self) -> usize {
        let layout = self.layout();
        self.differencing_degree() + layout.ar_lags() + layout.ma_lags().max(1) + layout.len()
    }

    /// Estimated coefficients, if fitted.
    pub fn coefficients(&self) -> Option<&Coefficients> {
        self.state.as_ref().map(|s| &s.coefficients)
    }

    /// Residual variance of the conditional fit, if fitted.
    pub fn sigma2(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.sigma2)
    }

    /// In-sample one-step residuals on the differenced scale.
    pub fn residuals(&self) -> Option<&[f64]> {
        self.state.as_ref().map(|s| s.residuals.as_slice())
    }

    fn differencing_degree(&self) -> usize {
        if self.seasonal.d == 0 {
            self.order.d
        } else {
            self.order.d + self.seasonal.d * self.seasonal.period
        }
    }

    fn layout(&self) -> Layout {
        Layout {
            p: self.order.p,
            seasonal_p: self.seasonal.p,
            q: self.order.q,
            seasonal_q: self.seasonal.q,
            period: self.seasonal.period,
        }
    }

    fn estimate(&self, layout: Layout, scaled: Vec<f64>) -> Result<Vec<f64>> {
        let problem = CssProblem {
            layout,
            params: DVector::zeros(layout.len()),
            series: scaled,
        };
        let (problem, report) = LevenbergMarquardt::new()
            .with_patience(self.max_iterations)
            .minimize(problem);

        if !report.termination.was_successful() {
            match &report.termination {
                TerminationReason::LostPatience | TerminationReason::NoImprovementPossible(_) => {
                    tracing::debug!(
                        termination = ?report.termination,
                        evaluations = report.number_of_evaluations,
                        "CSS optimization stopped early, keeping current estimate"
                    );
                }
                TerminationReason::Numerical(what) => {
                    return Err(TsError::NumericalError(format!(
                        "non-finite {what} during estimation"
                    )));
                }
                _ => {
                    return Err(TsError::ConvergenceFailure {
                        iterations: report.number_of_evaluations,
                    });
                }
            }
        }

        if problem.params.iter().any(|v| !v.is_finite()) {
            return Err(TsError::NumericalError(
                "estimated parameters are not finite".to_string(),
            ));
        }
        Ok(problem.params.as_slice().to_vec())
    }
}

impl Predictor for Sarima {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.iter().any(|v| !v.is_finite()) {
            return Err(TsError::InvalidData(
                "series contains non-finite values".to_string(),
            ));
        }
        let required = self.min_observations();
        if data.len() < required {
            return Err(TsError::InsufficientData {
                required,
                actual: data.len(),
            });
        }
        if data.windows(2).all(|w| w[0] == w[1]) {
            return Err(TsError::InvalidData("series is constant".to_string()));
        }

        let layout = self.layout();
        let differencing = differencing_polynomial(self.order.d, self.seasonal.d, self.seasonal.period);
        let differenced = difference(data, &differencing);

        let scale = rms(&differenced);
        let params = if layout.len() == 0 || scale <= NEGLIGIBLE_SCALE * (1.0 + max_abs(data)) {
            vec![0.0; layout.len()]
        } else {
            let scaled = differenced.iter().map(|v| v / scale).collect();
            self.estimate(layout, scaled)?
        };

        let coefficients = layout.coefficients(&params);
        let (ar, ma) = layout.expand(&coefficients);
        let residuals = css_residuals(&differenced, &ar, &ma);
        let conditional = &residuals[ar.len()..];
        let sigma2 = conditional.iter().map(|e| e * e).sum::<f64>() / conditional.len() as f64;

        tracing::debug!(
            order = %self.order,
            seasonal = %self.seasonal,
            observations = data.len(),
            sigma2,
            "fitted SARIMA"
        );

        self.state = Some(FittedState {
            coefficients,
            ar,
            ma,
            differencing,
            history: data.to_vec(),
            differenced,
            residuals,
            sigma2,
        });
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        let state = self.state.as_ref().ok_or(TsError::NotFitted)?;

        let mut w = state.differenced.clone();
        let mut e = state.residuals.clone();
        for _ in 0..steps {
            let t = w.len();
            let mut value: f64 = state
                .ar
                .iter()
                .enumerate()
                .map(|(k, a)| a * w[t - k - 1])
                .sum();
            for (k, b) in state.ma.iter().enumerate() {
                if t > k {
                    value += b * e[t - k - 1];
                }
            }
            w.push(value);
            e.push(0.0);
        }

        let forecast = integrate(
            &state.history,
            &state.differencing,
            &w[state.differenced.len()..],
        );
        if forecast.iter().any(|v| !v.is_finite()) {
            return Err(TsError::NumericalError(
                "forecast is not finite".to_string(),
            ));
        }
        Ok(forecast)
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }
}

/// How the free parameter vector splits across the four polynomials.
#[derive(Debug, Clone, Copy)]
struct Layout {
    p: usize,
    seasonal_p: usize,
    q: usize,
    seasonal_q: usize,
    period: usize,
}

impl Layout {
    fn len(&self) -> usize {
        self.p + self.seasonal_p + self.q + self.seasonal_q
    }

    fn ar_lags(&self) -> usize {
        self.p + self.seasonal_p * self.period
    }

    fn ma_lags(&self) -> usize {
        self.q + self.seasonal_q * self.period
    }

    fn coefficients(&self, params: &[f64]) -> Coefficients {
        let (ar, rest) = params.split_at(self.p);
        let (seasonal_ar, rest) = rest.split_at(self.seasonal_p);
        let (ma, seasonal_ma) = rest.split_at(self.q);
        Coefficients {
            ar: constrain_stationary(ar),
            seasonal_ar: constrain_stationary(seasonal_ar),
            ma: constrain_invertible(ma),
            seasonal_ma: constrain_invertible(seasonal_ma),
        }
    }

    /// Multiplied-out lag weights: `w_t = sum(ar[k] w_(t-k-1)) + e_t + sum(ma[k] e_(t-k-1))`.
    fn expand(&self, c: &Coefficients) -> (Vec<f64>, Vec<f64>) {
        let ar_poly = multiply(
            &lag_polynomial(&c.ar, 1, -1.0),
            &lag_polynomial(&c.seasonal_ar, self.period, -1.0),
        );
        let ma_poly = multiply(
            &lag_polynomial(&c.ma, 1, 1.0),
            &lag_polynomial(&c.seasonal_ma, self.period, 1.0),
        );
        let ar = ar_poly.iter().skip(1).map(|v| -v).collect();
        let ma = ma_poly.iter().skip(1).copied().collect();
        (ar, ma)
    }
}

/// Conditional one-step residuals. Entries before the first full AR window
/// stay zero.
fn css_residuals(w: &[f64], ar: &[f64], ma: &[f64]) -> Vec<f64> {
    let mut e = vec![0.0; w.len()];
    for t in ar.len()..w.len() {
        let mut value = w[t];
        for (k, a) in ar.iter().enumerate() {
            value -= a * w[t - k - 1];
        }
        for (k, b) in ma.iter().enumerate() {
            if t > k {
                value -= b * e[t - k - 1];
            }
        }
        e[t] = value;
    }
    e
}

struct CssProblem {
    layout: Layout,
    params: DVector<f64>,
    series: Vec<f64>,
}

impl CssProblem {
    fn evaluate(&self, params: &[f64]) -> Vec<f64> {
        let (ar, ma) = self.layout.expand(&self.layout.coefficients(params));
        let mut residuals = css_residuals(&self.series, &ar, &ma);
        residuals.split_off(ar.len())
    }
}

impl LeastSquaresProblem<f64, Dyn, Dyn> for CssProblem {
    type ParameterStorage = Owned<f64, Dyn>;
    type ResidualStorage = Owned<f64, Dyn>;
    type JacobianStorage = Owned<f64, Dyn, Dyn>;

    fn set_params(&mut self, p: &DVector<f64>) {
        self.params.copy_from(p);
    }

    fn params(&self) -> DVector<f64> {
        self.params.clone()
    }

    fn residuals(&self) -> Option<DVector<f64>> {
        let residuals = self.evaluate(self.params.as_slice());
        residuals
            .iter()
            .all(|v| v.is_finite())
            .then(|| DVector::from_vec(residuals))
    }

    fn jacobian(&self) -> Option<DMatrix<f64>> {
        let base = self.params.as_slice();
        let rows = self.series.len() - self.layout.ar_lags();
        let mut jac = DMatrix::<f64>::zeros(rows, base.len());

        for j in 0..base.len() {
            let h = JACOBIAN_STEP * (1.0 + base[j].abs());
            let mut forward = base.to_vec();
            forward[j] += h;
            let mut backward = base.to_vec();
            backward[j] -= h;

            let rf = self.evaluate(&forward);
            let rb = self.evaluate(&backward);
            for i in 0..rows {
                jac[(i, j)] = (rf[i] - rb[i]) / (2.0 * h);
            }
        }

        jac.iter().all(|v| v.is_finite()).then_some(jac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weekly_model() -> Sarima {
        Sarima::new(ArimaOrder::new(0, 2, 0), SeasonalOrder::new(3, 2, 1, 7)).unwrap()
    }

    /// Deterministic noise in roughly [-0.5, 0.5).
    fn noise(n: usize, seed: u64) -> Vec<f64> {
        let mut state = seed;
        (0..n)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                ((state >> 11) as f64 / (1u64 << 53) as f64) - 0.5
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_seasonal_terms_without_period() {
        let result = Sarima::new(ArimaOrder::new(0, 1, 0), SeasonalOrder::new(1, 0, 0, 0));
        assert!(matches!(result, Err(TsError::InvalidParameter { .. })));
    }

    #[test]
    fn test_min_observations_weekly() {
        assert_eq!(weekly_model().min_observations(), 48);
        let plain = Sarima::new(ArimaOrder::new(0, 2, 0), SeasonalOrder::none()).unwrap();
        assert_eq!(plain.min_observations(), 3);
    }

    #[test]
    fn test_max_iterations_floor() {
        assert_eq!(weekly_model().max_iterations(), DEFAULT_MAX_ITERATIONS);
        assert_eq!(weekly_model().with_max_iterations(0).max_iterations(), 1);
    }

    #[test]
    fn test_predict_before_fit() {
        assert_eq!(weekly_model().predict(5), Err(TsError::NotFitted));
        assert!(weekly_model().coefficients().is_none());
    }

    #[test]
    fn test_fit_rejects_short_series() {
        let data: Vec<f64> = (0..47).map(|t| t as f64).collect();
        assert_eq!(
            weekly_model().fit(&data),
            Err(TsError::InsufficientData {
                required: 48,
                actual: 47
            })
        );
    }

    #[test]
    fn test_fit_rejects_non_finite() {
        let mut data: Vec<f64> = (0..60).map(|t| t as f64).collect();
        data[10] = f64::NAN;
        assert!(matches!(
            weekly_model().fit(&data),
            Err(TsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_fit_rejects_constant() {
        let data = vec![4.0; 60];
        assert!(matches!(
            weekly_model().fit(&data),
            Err(TsError::InvalidData(_))
        ));
    }

    #[test]
    fn test_quadratic_extrapolates_exactly() {
        let data: Vec<f64> = (0..10).map(|t| (t * t) as f64).collect();
        let mut model = Sarima::new(ArimaOrder::new(0, 2, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();
        let forecast = model.predict(3).unwrap();
        for (h, v) in forecast.iter().enumerate() {
            let t = (10 + h) as f64;
            assert!((v - t * t).abs() < 1e-9, "step {h}: {v}");
        }
    }

    #[test]
    fn test_zero_steps() {
        let data: Vec<f64> = (0..10).map(|t| (t * t) as f64).collect();
        let mut model = Sarima::new(ArimaOrder::new(0, 2, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();
        assert!(model.predict(0).unwrap().is_empty());
    }

    #[test]
    fn test_exact_structure_keeps_zero_coefficients() {
        let pattern = [10.0, 12.0, 9.0, 14.0, 20.0, 3.0, 1.0];
        let data: Vec<f64> = (0..84).map(|t| 2.0 * t as f64 + pattern[t % 7]).collect();
        let mut model = weekly_model();
        model.fit(&data).unwrap();

        let c = model.coefficients().unwrap();
        assert!(c.seasonal_ar.iter().all(|v| *v == 0.0));
        assert!(c.seasonal_ma.iter().all(|v| *v == 0.0));

        let forecast = model.predict(14).unwrap();
        for (h, v) in forecast.iter().enumerate() {
            let t = 84 + h;
            let expected = 2.0 * t as f64 + pattern[t % 7];
            assert!((v - expected).abs() < 1e-6, "step {h}: {v} vs {expected}");
        }
    }

    #[test]
    fn test_recovers_ar_coefficient() {
        let shocks = noise(600, 7);
        let mut data = vec![0.0; shocks.len()];
        for t in 1..data.len() {
            data[t] = 0.6 * data[t - 1] + shocks[t];
        }
        let mut model = Sarima::new(ArimaOrder::new(1, 0, 0), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();
        let phi = model.coefficients().unwrap().ar[0];
        assert!((phi - 0.6).abs() < 0.15, "phi = {phi}");
    }

    #[test]
    fn test_recovers_ma_coefficient_sign() {
        let shocks = noise(800, 11);
        let data: Vec<f64> = (0..shocks.len())
            .map(|t| shocks[t] + if t > 0 { 0.5 * shocks[t - 1] } else { 0.0 })
            .collect();
        let mut model = Sarima::new(ArimaOrder::new(0, 0, 1), SeasonalOrder::none()).unwrap();
        model.fit(&data).unwrap();
        let theta = model.coefficients().unwrap().ma[0];
        assert!(theta > 0.3 && theta < 0.7, "theta = {theta}");
    }

    #[test]
    fn test_weekly_model_on_noisy_growth() {
        let jitter = noise(150, 3);
        let data: Vec<f64> = (0..150)
            .map(|t| {
                let t_f = t as f64;
                let weekly = if t % 7 >= 5 { -0.4 } else { 0.1 };
                (1000.0 + 40.0 * t_f + 0.5 * t_f * t_f).cbrt() + 0.05 * weekly + 0.01 * jitter[t]
            })
            .collect();
        let mut model = weekly_model().with_max_iterations(50);
        model.fit(&data).unwrap();

        let c = model.coefficients().unwrap();
        assert_eq!(c.seasonal_ar.len(), 3);
        assert_eq!(c.seasonal_ma.len(), 1);
        assert!(c.seasonal_ma[0].abs() < 1.0);
        assert!(model.sigma2().unwrap().is_finite());
        assert_eq!(model.residuals().unwrap().len(), 150 - 16);

        let forecast = model.predict(30).unwrap();
        assert_eq!(forecast.len(), 30);
        assert!(forecast.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_expand_multiplies_seasonal_factor() {
        let layout = Layout {
            p: 1,
            seasonal_p: 1,
            q: 0,
            seasonal_q: 0,
            period: 3,
        };
        let coefficients = Coefficients {
            ar: vec![0.5],
            seasonal_ar: vec![0.2],
            ..Default::default()
        };
        // (1 - 0.5B)(1 - 0.2B^3) = 1 - 0.5B - 0.2B^3 + 0.1B^4
        let (ar, ma) = layout.expand(&coefficients);
        assert_eq!(ar.len(), 4);
        assert!((ar[0] - 0.5).abs() < 1e-12);
        assert_eq!(ar[1], 0.0);
        assert!((ar[2] - 0.2).abs() < 1e-12);
        assert!((ar[3] + 0.1).abs() < 1e-12);
        assert!(ma.is_empty());
    }
}
