//! Closed-form ordinary least squares for a first-order polynomial.
//!
//! The trend overlay only ever needs the two-coefficient fit
//! `y = slope * x + intercept`, so we use the centered closed form instead
//! of a general matrix solver:
//!
//! ```text
//! slope     = sum((x_i - mean(x)) * (y_i - mean(y))) / sum((x_i - mean(x))^2)
//! intercept = mean(y) - slope * mean(x)
//! ```
//!
//! When x has (numerically) zero variance the slope is undefined; we report
//! that as a failed fit rather than returning non-finite coefficients.

/// Variance sum below which x is treated as degenerate.
const MIN_X_VARIANCE: f64 = 1e-12;

/// Coefficients of `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit `y = slope * x + intercept` by ordinary least squares.
///
/// Returns `None` when the inputs are empty, mismatched in length, or x has
/// no variance to identify a slope.
pub fn fit_line(xs: &[f64], ys: &[f64]) -> Option<LineFit> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let n = xs.len() as f64;
    let x_bar = xs.iter().sum::<f64>() / n;
    let y_bar = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - x_bar;
        cov += dx * (y - y_bar);
        var += dx * dx;
    }

    if var <= MIN_X_VARIANCE || !cov.is_finite() {
        return None;
    }

    let slope = cov / var;
    let intercept = y_bar - slope * x_bar;
    if !(slope.is_finite() && intercept.is_finite()) {
        return None;
    }

    Some(LineFit { slope, intercept })
}
