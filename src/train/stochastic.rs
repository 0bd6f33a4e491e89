use log::debug;
use rand::Rng;

use super::{Outcome, Trainer};
use crate::{
    convergence::Convergence,
    optimise::{Optimiser, SGD},
    Dataset, Error, Gradient, Objective, Params, Progress, Result, Scalar, Status,
};

pub(super) fn run<F, O, P>(
    trainer: &mut Trainer<F, O, P>,
    dataset: &Dataset<F>,
    params: &mut Params<F>,
    rng: &mut impl Rng,
) -> Result<Outcome<F>>
where
    F: Scalar,
    O: Objective,
    P: Progress<F>,
{
    let Trainer {
        objective,
        config,
        progress,
    } = trainer;

    let convergence = Convergence::from(&*config);
    let mut monitor = convergence.monitor();
    let mut optimiser = SGD::new(config.learning_rate);
    optimiser.init(params.as_slice().len());
    let mut grad = Gradient::for_params(params);

    // the caller's dataset keeps its order, only this copy is permuted
    let mut data = dataset.clone();
    let mut cost = F::infinity();

    debug!(
        "stochastic descent over {} examples, at most {} epochs",
        data.len(),
        config.max_iterations
    );

    for epoch in convergence.iterations() {
        data.shuffle(rng);

        for (x, y) in data.iter() {
            objective.example_gradient(params, x, y, &mut grad);
            if !grad.is_finite() {
                return Err(Error::Diverged { epoch });
            }
            optimiser.optimise(params.as_mut_slice(), grad.as_slice());
        }

        cost = objective.cost(params, &data);
        if !cost.is_finite() {
            return Err(Error::Diverged { epoch });
        }
        if config.reports(epoch) {
            progress.report(epoch, cost);
        }

        if monitor.observe(cost) {
            debug!("stochastic descent converged at epoch {epoch}, cost {cost}");
            return Ok(Outcome {
                cost,
                epochs: epoch + 1,
                status: Status::Converged { epoch },
            });
        }
    }

    debug!("stochastic descent used its budget, cost {cost}");
    Ok(Outcome {
        cost,
        epochs: config.max_iterations,
        status: Status::ExhaustedBudget,
    })
}
