use std::fmt::{Debug, Display};

use ndarray::{LinalgScalar, ScalarOperand};
use rand_distr::num_traits::{Float, FromPrimitive};

pub mod activation;
pub(crate) mod array;
pub mod config;
pub mod convergence;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod objective;
pub mod optimise;
pub mod params;
pub mod progress;
pub mod scalar;
pub mod train;

pub use config::TrainingConfig;
pub use convergence::{Convergence, Status};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use objective::{Family, Linear, Logistic, Objective};
pub use params::{Gradient, Params};
pub use progress::{LogProgress, Progress};
pub use scalar::{optimize_scalar, ScalarOutcome};
pub use train::{train_batch, train_stochastic, Outcome, Trainer};

/// The floating point types the engine can optimise over.
pub trait Scalar:
    LinalgScalar + Float + FromPrimitive + ScalarOperand + Debug + Display
{
}
impl<S> Scalar for S where
    S: LinalgScalar + Float + FromPrimitive + ScalarOperand + Debug + Display
{
}

/// Converts an `f64` constant into `F`.
pub(crate) fn constant<F: Scalar>(value: f64) -> F {
    F::from_f64(value).unwrap_or_else(F::nan)
}
