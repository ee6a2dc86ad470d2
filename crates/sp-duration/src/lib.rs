//! `sp-duration` — maps a uniform draw in `[0, 1]` to a call duration.
//!
//! Historical call durations are summarised as `(cumulative_fraction,
//! duration)` pairs: the empirical quantile function.  Fitting a polynomial
//! through those pairs and evaluating it at a uniform random draw samples a
//! duration with roughly the historical distribution (inverse-transform
//! sampling).
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`model`]  | `DurationModel` trait, `PolynomialModel`                 |
//! | [`fit`]    | `fit_polynomial` (Householder least squares), `FitReport` |
//! | [`loader`] | `load_samples_csv`, `load_samples_reader`                |
//! | [`error`]  | `DurationError`, `DurationResult<T>`                     |

pub mod error;
pub mod fit;
pub mod loader;
pub mod model;


pub use error::{DurationError, DurationResult};
pub use fit::{fit_polynomial, FitReport};
pub use loader::{load_samples_csv, load_samples_reader, DurationSample};
pub use model::{DurationModel, PolynomialModel};
