//! Ordinary least-squares regression.
//!
//! [`fit`] estimates an intercept and one slope per explanatory variable by
//! minimizing the total squared residual. The number of explanatory variables
//! `K` is fixed at compile time, so coefficient vectors can't be misaligned
//! with the features they multiply.
//!
//! # Numerics
//!
//! Explanatory variables are centered and scaled to unit variance before the
//! least-squares problem is solved with a singular value decomposition.
//! Plant regressions mix regressors that differ by many orders of magnitude
//! (air-flow rates next to squared enthalpies), and solving the normal
//! equations directly loses most of the available precision on them.
//! Coefficients are mapped back to the original variables before returning.
//!
//! Degenerate problems are reported as errors, never as degenerate
//! coefficients:
//!
//! - fewer samples than free parameters: [`RegressionError::InsufficientData`]
//! - a constant explanatory variable or linearly dependent variables:
//!   [`RegressionError::SingularMatrix`]

mod error;

pub use error::{Degeneracy, RegressionError};

use nalgebra::{DMatrix, DVector};

/// Relative standard deviation below which a variable is treated as constant.
const ZERO_VARIANCE_TOL: f64 = 1e-12;

/// Fitted linear model `y = intercept + Σ slopes[j]·x[j]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<const K: usize> {
    /// Constant term.
    pub intercept: f64,

    /// One slope per explanatory variable, in input order.
    pub slopes: [f64; K],
}

impl<const K: usize> LinearFit<K> {
    /// Evaluates the fitted model at `x`.
    #[must_use]
    pub fn evaluate(&self, x: &[f64; K]) -> f64 {
        self.intercept
            + self
                .slopes
                .iter()
                .zip(x)
                .map(|(slope, value)| slope * value)
                .sum::<f64>()
    }
}

/// Fits `y` against the explanatory rows `x` by ordinary least squares.
///
/// Row `i` of `x` holds the explanatory variables paired with `y[i]`.
///
/// # Errors
///
/// Returns a [`RegressionError`] if the inputs have different lengths, contain
/// non-finite values, have fewer samples than `K + 1`, or define a singular
/// least-squares problem.
pub fn fit<const K: usize>(x: &[[f64; K]], y: &[f64]) -> Result<LinearFit<K>, RegressionError> {
    const {
        assert!(K >= 1, "regression requires at least one explanatory variable");
    };

    if x.len() != y.len() {
        return Err(RegressionError::MismatchedLengths {
            inputs: x.len(),
            responses: y.len(),
        });
    }

    let samples = y.len();
    let parameters = K + 1;
    if samples < parameters {
        return Err(RegressionError::InsufficientData {
            samples,
            parameters,
        });
    }

    for (sample, (row, response)) in x.iter().zip(y).enumerate() {
        if !response.is_finite() || row.iter().any(|value| !value.is_finite()) {
            return Err(RegressionError::NonFinite { sample });
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let n = samples as f64;

    let mean_y = y.iter().sum::<f64>() / n;

    let mut mean = [0.0; K];
    for row in x {
        for (m, value) in mean.iter_mut().zip(row) {
            *m += value;
        }
    }
    for m in &mut mean {
        *m /= n;
    }

    let mut scale = [0.0; K];
    for row in x {
        for (j, value) in row.iter().enumerate() {
            let deviation = value - mean[j];
            scale[j] += deviation * deviation;
        }
    }
    for (variable, s) in scale.iter_mut().enumerate() {
        *s = (*s / n).sqrt();
        if *s <= ZERO_VARIANCE_TOL * mean[variable].abs().max(1.0) {
            return Err(RegressionError::SingularMatrix(
                Degeneracy::ZeroVariance { variable },
            ));
        }
    }

    let z = DMatrix::from_fn(samples, K, |i, j| (x[i][j] - mean[j]) / scale[j]);
    let centered_y = DVector::from_iterator(samples, y.iter().map(|value| value - mean_y));

    let svd = z.svd(true, true);
    let largest = svd.singular_values.max();
    let smallest = svd.singular_values.min();

    #[allow(clippy::cast_precision_loss)]
    let tolerance = largest * samples.max(K) as f64 * f64::EPSILON;
    if smallest <= tolerance {
        return Err(RegressionError::SingularMatrix(Degeneracy::Collinear {
            smallest,
        }));
    }

    let scaled_slopes = svd
        .solve(&centered_y, tolerance)
        .map_err(|reason| RegressionError::Decomposition { reason })?;

    let mut slopes = [0.0; K];
    for (j, slope) in slopes.iter_mut().enumerate() {
        *slope = scaled_slopes[j] / scale[j];
    }

    let intercept = mean_y
        - slopes
            .iter()
            .zip(&mean)
            .map(|(slope, m)| slope * m)
            .sum::<f64>();

    Ok(LinearFit { intercept, slopes })
}

/// Fits `y` against a single explanatory variable.
///
/// This is a convenience wrapper around [`fit`].
///
/// # Errors
///
/// Returns a [`RegressionError`] under the same conditions as [`fit`].
pub fn fit_simple(x: &[f64], y: &[f64]) -> Result<LinearFit<1>, RegressionError> {
    let rows: Vec<[f64; 1]> = x.iter().map(|&value| [value]).collect();
    fit(&rows, y)
}
