use rand::Rng;

use crate::{Dataset, Objective, Params, Progress, Result, Scalar, Status, TrainingConfig};

mod batch;
mod stochastic;

/// Drives an [`Objective`] over a dataset, mutating caller-owned [`Params`] in place.
///
/// ```
/// use descent_rs::{Dataset, Linear, Params, Trainer, TrainingConfig};
///
/// let data = Dataset::new((0..10).map(|i| ([i as f64], 3.0 * i as f64))).unwrap();
/// let mut params = Params::zeros(1);
///
/// let mut costs = vec![];
/// let outcome = Trainer::new(Linear, TrainingConfig::new(0.01, 500, 1e-9))
///     .with_progress(|_epoch: usize, cost: f64| costs.push(cost))
///     .batch(&data, &mut params)
///     .unwrap();
///
/// assert!((params.weights()[0] - 3.0).abs() < 0.1);
/// assert!(outcome.cost < costs[0]);
/// ```
#[derive(Debug, Clone)]
pub struct Trainer<F, O, P = ()> {
    pub objective: O,
    pub config: TrainingConfig<F>,
    pub progress: P,
}

impl<F: Scalar, O: Objective> Trainer<F, O> {
    pub fn new(objective: O, config: TrainingConfig<F>) -> Self {
        Self {
            objective,
            config,
            progress: (),
        }
    }
}

impl<F: Scalar, O: Objective, P: Progress<F>> Trainer<F, O, P> {
    pub fn with_progress<Q: Progress<F>>(self, progress: Q) -> Trainer<F, O, Q> {
        let Self {
            objective, config, ..
        } = self;
        Trainer {
            objective,
            config,
            progress,
        }
    }

    /// Full-batch gradient descent for `max_iterations` epochs.
    ///
    /// Only stops early when [`TrainingConfig::stop_early`] is set.
    pub fn batch(&mut self, dataset: &Dataset<F>, params: &mut Params<F>) -> Result<Outcome<F>> {
        self.check(dataset, params)?;
        batch::run(self, dataset, params)
    }

    /// Online stochastic gradient descent over a freshly shuffled copy of `dataset` each epoch.
    ///
    /// Stops once the epoch cost changes by less than the tolerance.
    pub fn stochastic(
        &mut self,
        dataset: &Dataset<F>,
        params: &mut Params<F>,
        rng: &mut impl Rng,
    ) -> Result<Outcome<F>> {
        self.check(dataset, params)?;
        stochastic::run(self, dataset, params, rng)
    }

    fn check(&self, dataset: &Dataset<F>, params: &Params<F>) -> Result<()> {
        self.config.validate()?;
        params.check_features(dataset.feature_count())?;
        self.objective.check_targets(dataset)
    }
}

/// The result of a training run. The trained parameters stay with the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<F> {
    /// Cost over the whole dataset after the final update.
    pub cost: F,
    /// Epochs run, including the one that converged.
    pub epochs: usize,
    pub status: Status,
}

impl<F> Outcome<F> {
    pub fn converged_at(&self) -> Option<usize> {
        self.status.converged_at()
    }
}

/// Full-batch gradient descent without progress reporting. See [`Trainer::batch`].
pub fn train_batch<F: Scalar, O: Objective>(
    objective: O,
    dataset: &Dataset<F>,
    params: &mut Params<F>,
    config: &TrainingConfig<F>,
) -> Result<Outcome<F>> {
    Trainer::new(objective, *config).batch(dataset, params)
}

/// Stochastic gradient descent without progress reporting. See [`Trainer::stochastic`].
pub fn train_stochastic<F: Scalar, O: Objective>(
    objective: O,
    dataset: &Dataset<F>,
    params: &mut Params<F>,
    config: &TrainingConfig<F>,
    rng: &mut impl Rng,
) -> Result<Outcome<F>> {
    Trainer::new(objective, *config).stochastic(dataset, params, rng)
}
