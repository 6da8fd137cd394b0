//! Maps unconstrained optimizer parameters onto stationary and invertible
//! lag polynomial coefficients.
//!
//! Each free parameter becomes a partial autocorrelation in `(-1, 1)` via
//! `u / sqrt(1 + u^2)`. The Durbin-Levinson recursion then turns the partial
//! autocorrelations into AR coefficients, which are stationary by
//! construction.

/// AR coefficients `phi` for `1 - phi_1 B - ... - phi_p B^p`, all roots
/// outside the unit circle.
pub fn constrain_stationary(unconstrained: &[f64]) -> Vec<f64> {
    let mut phi: Vec<f64> = Vec::with_capacity(unconstrained.len());
    for (k, u) in unconstrained.iter().enumerate() {
        let r = u / (1.0 + u * u).sqrt();
        let previous = phi.clone();
        for j in 0..k {
            phi[j] = previous[j] - r * previous[k - 1 - j];
        }
        phi.push(r);
    }
    phi
}

/// MA coefficients `theta` for `1 + theta_1 B + ... + theta_q B^q`, all
/// roots outside the unit circle.
pub fn constrain_invertible(unconstrained: &[f64]) -> Vec<f64> {
    constrain_stationary(unconstrained)
        .into_iter()
        .map(|c| -c)
        .collect()
}
