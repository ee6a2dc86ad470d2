//! Least-squares polynomial fitting.
//!
//! The Vandermonde system `V·c ≈ y` is solved by Householder QR rather than
//! the normal equations.  On `[0, 1]` the normal matrix of a degree-10 fit
//! is close to a Hilbert matrix, whose condition number squares whatever
//! error the Vandermonde matrix already carries; QR works on `V` directly.

use sp_core::{ConfigError, DataError, MAX_POLY_DEGREE};
use tracing::debug;

use crate::{DurationModel, DurationResult, DurationSample, PolynomialModel};

/// Column norms below this fraction of their original size are treated as
/// linearly dependent.
const RANK_TOLERANCE: f64 = 1e-10;

/// Fit a degree-`degree` polynomial through `samples` by least squares.
///
/// # Errors
///
/// - `ConfigError::InvalidDegree` if `degree > 10`.
/// - `DataError::InvalidSample` for a fraction outside `[0, 1]`, a negative
///   duration, or any non-finite value.
/// - `DataError::InsufficientSamples` with fewer than `degree + 1` samples.
/// - `DataError::SingularFit` if the samples have fewer than `degree + 1`
///   distinct fractions.
pub fn fit_polynomial(samples: &[DurationSample], degree: u32) -> DurationResult<PolynomialModel> {
    if degree > MAX_POLY_DEGREE {
        return Err(ConfigError::InvalidDegree { degree }.into());
    }
    for (index, s) in samples.iter().enumerate() {
        let valid = s.fraction.is_finite()
            && (0.0..=1.0).contains(&s.fraction)
            && s.duration.is_finite()
            && s.duration >= 0.0;
        if !valid {
            return Err(DataError::InvalidSample {
                index,
                fraction: s.fraction,
                duration: s.duration,
            }
            .into());
        }
    }
    let cols = degree as usize + 1;
    if samples.len() < cols {
        return Err(DataError::InsufficientSamples {
            degree,
            needed: cols,
            got: samples.len(),
        }
        .into());
    }

    // ── Vandermonde matrix (row-major) and right-hand side ────────────────
    let rows = samples.len();
    let mut a: Vec<Vec<f64>> = samples
        .iter()
        .map(|s| {
            let mut row = Vec::with_capacity(cols);
            let mut p = 1.0;
            for _ in 0..cols {
                row.push(p);
                p *= s.fraction;
            }
            row
        })
        .collect();
    let mut b: Vec<f64> = samples.iter().map(|s| s.duration).collect();

    let original_norms: Vec<f64> = (0..cols)
        .map(|j| (0..rows).map(|i| a[i][j] * a[i][j]).sum::<f64>().sqrt())
        .collect();

    // ── Householder triangularisation ─────────────────────────────────────
    for k in 0..cols {
        let norm = (k..rows).map(|i| a[i][k] * a[i][k]).sum::<f64>().sqrt();
        if original_norms[k] == 0.0 || norm <= RANK_TOLERANCE * original_norms[k] {
            return Err(DataError::SingularFit.into());
        }
        let alpha = if a[k][k] > 0.0 { -norm } else { norm };

        let mut v: Vec<f64> = (k..rows).map(|i| a[i][k]).collect();
        v[0] -= alpha;
        let v_norm2: f64 = v.iter().map(|x| x * x).sum();

        for j in k..cols {
            let s: f64 = v.iter().enumerate().map(|(i, vi)| vi * a[k + i][j]).sum();
            let f = 2.0 * s / v_norm2;
            for (i, vi) in v.iter().enumerate() {
                a[k + i][j] -= f * vi;
            }
        }
        let s: f64 = v.iter().enumerate().map(|(i, vi)| vi * b[k + i]).sum();
        let f = 2.0 * s / v_norm2;
        for (i, vi) in v.iter().enumerate() {
            b[k + i] -= f * vi;
        }
    }

    // ── Back substitution on R ────────────────────────────────────────────
    let mut coefficients = vec![0.0; cols];
    for k in (0..cols).rev() {
        let tail: f64 = ((k + 1)..cols).map(|j| a[k][j] * coefficients[j]).sum();
        coefficients[k] = (b[k] - tail) / a[k][k];
    }
    if coefficients.iter().any(|c| !c.is_finite()) {
        return Err(DataError::SingularFit.into());
    }

    debug!(degree, samples = rows, ?coefficients, "fitted duration polynomial");
    Ok(PolynomialModel::new(coefficients))
}

// ── FitReport ─────────────────────────────────────────────────────────────────

/// Goodness-of-fit summary and a plotting curve for a fitted model.
#[derive(Clone, Debug, PartialEq)]
pub struct FitReport {
    /// Root-mean-square residual over the samples, in seconds.
    pub rmse:          f64,
    /// Largest absolute residual, in seconds.
    pub max_residual:  f64,
    /// Smallest model value along the curve.  Negative means the sampler
    /// will fold some draws back through `abs`.
    pub min_on_curve:  f64,
    /// `(x, model(x))` at evenly spaced points over `[0, 1]`.
    pub curve:         Vec<(f64, f64)>,
}

impl FitReport {
    /// Number of curve points exported for plotting.
    pub const CURVE_POINTS: usize = 1_000;

    pub fn new(model: &PolynomialModel, samples: &[DurationSample]) -> Self {
        let residuals: Vec<f64> = samples
            .iter()
            .map(|s| model.evaluate(s.fraction) - s.duration)
            .collect();
        let rmse = if residuals.is_empty() {
            0.0
        } else {
            (residuals.iter().map(|r| r * r).sum::<f64>() / residuals.len() as f64).sqrt()
        };
        let max_residual = residuals.iter().fold(0.0f64, |m, r| m.max(r.abs()));
        let curve = model.sample_curve(Self::CURVE_POINTS);
        let min_on_curve = curve.iter().fold(f64::INFINITY, |m, &(_, y)| m.min(y));

        Self { rmse, max_residual, min_on_curve, curve }
    }
}
