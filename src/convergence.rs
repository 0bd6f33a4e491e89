use crate::{Scalar, TrainingConfig};

/// How an optimisation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The monitored value stopped changing at this iteration.
    Converged { epoch: usize },
    /// The iteration budget ran out first.
    ExhaustedBudget,
}

impl Status {
    pub fn converged_at(self) -> Option<usize> {
        match self {
            Status::Converged { epoch } => Some(epoch),
            Status::ExhaustedBudget => None,
        }
    }
}

/// Stop when successive values of a monitored scalar differ by less than `tolerance`,
/// or after `max_iterations` observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence<F> {
    pub tolerance: F,
    pub max_iterations: usize,
}

impl<F: Scalar> Convergence<F> {
    pub fn new(tolerance: F, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// The iterations a run may take.
    pub fn iterations(&self) -> std::ops::Range<usize> {
        0..self.max_iterations
    }

    /// Whether a change of `delta` is small enough to stop.
    pub fn is_converged(&self, delta: F) -> bool {
        delta.abs() < self.tolerance
    }

    /// Tracks the previous value of a monitored scalar across iterations.
    pub fn monitor(&self) -> Monitor<F> {
        Monitor {
            tolerance: self.tolerance,
            previous: F::infinity(),
        }
    }
}

impl<F: Scalar> From<&TrainingConfig<F>> for Convergence<F> {
    fn from(config: &TrainingConfig<F>) -> Self {
        Self::new(config.tolerance, config.max_iterations)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Monitor<F> {
    tolerance: F,
    previous: F,
}

impl<F: Scalar> Monitor<F> {
    /// Records `value`, returning true if it is within tolerance of the previous one.
    ///
    /// The first observation is compared against infinity and never converges.
    pub fn observe(&mut self, value: F) -> bool {
        let converged = (self.previous - value).abs() < self.tolerance;
        self.previous = value;
        converged
    }

    pub fn previous(&self) -> F {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_never_converges() {
        let mut monitor = Convergence::new(1e-6, 10).monitor();
        assert_eq!(monitor.previous(), f64::INFINITY);
        assert!(!monitor.observe(0.0));
        assert!(!monitor.observe(f64::MAX));
    }

    #[test]
    fn converges_on_small_delta() {
        let mut monitor = Convergence::new(1e-3, 10).monitor();
        assert!(!monitor.observe(1.0));
        assert!(!monitor.observe(0.5));
        assert!(monitor.observe(0.5005));
        assert_eq!(monitor.previous(), 0.5005);
    }

    #[test]
    fn step_size_test() {
        let policy = Convergence::new(0.1_f32, 5);
        assert!(policy.is_converged(-0.05));
        assert!(!policy.is_converged(0.1));
        assert_eq!(policy.iterations().len(), 5);
    }

    #[test]
    fn status() {
        assert_eq!(Status::Converged { epoch: 3 }.converged_at(), Some(3));
        assert_eq!(Status::ExhaustedBudget.converged_at(), None);
    }
}
