use crate::{constant, Error, Result, Scalar};

/// Hyperparameters for a single training or optimisation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig<F> {
    /// Step size multiplier applied to every gradient.
    pub learning_rate: F,
    /// Epochs for the dataset drivers, iterations for the scalar optimiser.
    pub max_iterations: usize,
    /// A monitored value changing by less than this counts as converged.
    pub tolerance: F,
    /// Probability at or above which a logistic prediction is classed as `1`.
    pub threshold: F,
    /// Report the cost every `report_every` epochs; `0` disables reporting.
    pub report_every: usize,
    /// Apply the convergence test to batch descent as well.
    pub stop_early: bool,
}

impl<F: Scalar> Default for TrainingConfig<F> {
    fn default() -> Self {
        Self {
            learning_rate: constant(0.01),
            max_iterations: 1000,
            tolerance: constant(1e-6),
            threshold: constant(0.5),
            report_every: 100,
            stop_early: false,
        }
    }
}

impl<F: Scalar> TrainingConfig<F> {
    pub fn new(learning_rate: F, max_iterations: usize, tolerance: F) -> Self {
        Self {
            learning_rate,
            max_iterations,
            tolerance,
            ..Self::default()
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: F) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_threshold(mut self, threshold: F) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_report_every(mut self, report_every: usize) -> Self {
        self.report_every = report_every;
        self
    }

    pub fn with_stop_early(mut self, stop_early: bool) -> Self {
        self.stop_early = stop_early;
        self
    }

    /// Rejects values no optimisation run can use.
    ///
    /// NaN fails every comparison here, so it is rejected too.
    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate > F::zero()) || !self.learning_rate.is_finite() {
            return Err(Error::InvalidConfiguration(
                "learning rate must be positive and finite",
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration(
                "iteration budget must be positive",
            ));
        }
        if !(self.tolerance > F::zero()) {
            return Err(Error::InvalidConfiguration("tolerance must be positive"));
        }
        if !(self.threshold > F::zero() && self.threshold < F::one()) {
            return Err(Error::InvalidConfiguration(
                "decision threshold must lie strictly between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Whether the cost after `epoch` should be reported.
    pub(crate) fn reports(&self, epoch: usize) -> bool {
        self.report_every != 0 && epoch % self.report_every == 0
    }
}
