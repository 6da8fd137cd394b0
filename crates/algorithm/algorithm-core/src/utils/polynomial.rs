//! Lag polynomial arithmetic.
//!
//! A polynomial `c0 + c1 B + c2 B^2 + ...` in the backshift operator `B` is
//! stored as its coefficient vector `[c0, c1, c2, ...]`.

/// Multiply two lag polynomials.
pub fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut product = vec![0.0; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            product[i + j] += x * y;
        }
    }
    product
}

/// Build `1 + sign * (c1 B^spacing + c2 B^(2 spacing) + ...)`.
pub fn lag_polynomial(coefficients: &[f64], spacing: usize, sign: f64) -> Vec<f64> {
    if coefficients.is_empty() {
        return vec![1.0];
    }
    let mut poly = vec![0.0; coefficients.len() * spacing + 1];
    poly[0] = 1.0;
    for (i, c) in coefficients.iter().enumerate() {
        poly[(i + 1) * spacing] += sign * c;
    }
    poly
}

/// Raise a polynomial to a non-negative integer power.
pub fn power(base: &[f64], exponent: usize) -> Vec<f64> {
    (0..exponent).fold(vec![1.0], |acc, _| multiply(&acc, base))
}
