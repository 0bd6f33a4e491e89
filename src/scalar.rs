use log::{debug, trace};

use crate::{convergence::Convergence, Error, Result, Scalar, Status, TrainingConfig};

/// The result of [`optimize_scalar`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarOutcome<F> {
    pub x: F,
    /// Iterations taken, including the one that converged.
    pub iterations: usize,
    pub status: Status,
}

/// Minimises a one-dimensional function by gradient descent from `x0`.
///
/// Each iteration steps `x <- x - learning_rate * df(x)` and stops as soon as a step is
/// shorter than `config.tolerance`, returning the post-step value. `f` is only evaluated
/// for trace logging. No dataset or model is involved.
///
/// ```
/// use descent_rs::{optimize_scalar, TrainingConfig};
///
/// let config = TrainingConfig::new(0.1, 1000, 1e-9);
/// let outcome = optimize_scalar(|x: f64| x * x, |x| 2.0 * x, 5.0, &config).unwrap();
/// assert!(outcome.x.abs() < 1e-6);
/// ```
pub fn optimize_scalar<F: Scalar>(
    f: impl Fn(F) -> F,
    df: impl Fn(F) -> F,
    x0: F,
    config: &TrainingConfig<F>,
) -> Result<ScalarOutcome<F>> {
    config.validate()?;
    if !x0.is_finite() {
        return Err(Error::Diverged { epoch: 0 });
    }

    let convergence = Convergence::from(config);
    let mut x = x0;

    for i in convergence.iterations() {
        trace!("iteration {i}: x = {x:.6}, f(x) = {:.6}", f(x));

        let new_x = x - config.learning_rate * df(x);
        if !new_x.is_finite() {
            return Err(Error::Diverged { epoch: i });
        }
        if convergence.is_converged(new_x - x) {
            debug!("converged at iteration {i}: x = {new_x}");
            return Ok(ScalarOutcome {
                x: new_x,
                iterations: i + 1,
                status: Status::Converged { epoch: i },
            });
        }
        x = new_x;
    }

    debug!("iteration budget exhausted: x = {x}");
    Ok(ScalarOutcome {
        x,
        iterations: config.max_iterations,
        status: Status::ExhaustedBudget,
    })
}
