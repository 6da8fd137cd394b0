//! Differencing and its inverse.

use super::polynomial::{multiply, power};

/// Coefficients of `(1 - B)^d (1 - B^period)^seasonal_d`.
pub fn differencing_polynomial(d: usize, seasonal_d: usize, period: usize) -> Vec<f64> {
    let regular = power(&[1.0, -1.0], d);
    if seasonal_d == 0 || period == 0 {
        return regular;
    }
    let mut seasonal = vec![0.0; period + 1];
    seasonal[0] = 1.0;
    seasonal[period] = -1.0;
    multiply(&regular, &power(&seasonal, seasonal_d))
}

/// Apply a differencing polynomial. The output is shorter than `data` by
/// the polynomial degree; element `i` corresponds to `data[i + degree]`.
pub fn difference(data: &[f64], poly: &[f64]) -> Vec<f64> {
    let degree = poly.len().saturating_sub(1);
    if data.len() <= degree {
        return Vec::new();
    }
    (degree..data.len())
        .map(|t| poly.iter().enumerate().map(|(k, c)| c * data[t - k]).sum())
        .collect()
}

/// Undo [`difference`] for values that follow `history`.
///
/// Each future level is `w_t - sum(poly[k] * y[t - k])` over `k >= 1`, with
/// earlier levels taken from `history` and then from the values already
/// reconstructed. `history` must hold at least `poly.len() - 1` values.
pub fn integrate(history: &[f64], poly: &[f64], future: &[f64]) -> Vec<f64> {
    let mut levels = history.to_vec();
    for w in future {
        let t = levels.len();
        let carried: f64 = poly
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, c)| c * levels[t - k])
            .sum();
        levels.push(w - carried);
    }
    levels.split_off(history.len())
}
