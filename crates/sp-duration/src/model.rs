//! The `DurationModel` seam and its polynomial implementation.

/// Maps a draw `x ∈ [0, 1]` to a call duration in seconds.
///
/// # Contract
///
/// - May return negative values near the ends of the curve; callers take
///   the absolute value.
/// - May return NaN or infinity for a badly conditioned fit; callers must
///   reject non-finite output.
/// - Must be `Send + Sync` so periods can be simulated on Rayon threads.
pub trait DurationModel: Send + Sync {
    fn evaluate(&self, x: f64) -> f64;
}

/// Any `Fn(f64) -> f64` is a duration model.  Handy for fixed-duration
/// scenarios and tests.
impl<F> DurationModel for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        (self)(x)
    }
}

/// A polynomial `c0 + c1·x + c2·x² + …`.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialModel {
    /// Coefficients in ascending order of power.
    coefficients: Vec<f64>,
}

impl PolynomialModel {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Coefficients, lowest power first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Polynomial degree (`0` for a constant or empty polynomial).
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// `n` evenly spaced `(x, model(x))` points over `[0, 1]`, ends included.
    pub fn sample_curve(&self, n: usize) -> Vec<(f64, f64)> {
        match n {
            0 => vec![],
            1 => vec![(0.0, self.evaluate(0.0))],
            _ => (0..n)
                .map(|i| {
                    let x = i as f64 / (n - 1) as f64;
                    (x, self.evaluate(x))
                })
                .collect(),
        }
    }
}

impl DurationModel for PolynomialModel {
    /// Horner evaluation.
    #[inline]
    fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }
}
