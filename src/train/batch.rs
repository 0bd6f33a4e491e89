use log::debug;

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

    debug!(
        "batch descent over {} examples, {} epochs",
        dataset.len(),
        config.max_iterations
    );

    for epoch in convergence.iterations() {
        objective.gradient(params, dataset, &mut grad);
        if !grad.is_finite() {
            return Err(Error::Diverged { epoch });
        }
        optimiser.optimise(params.as_mut_slice(), grad.as_slice());

        let report = config.reports(epoch);
        if !(report || config.stop_early) {
            continue;
        }

        let cost = objective.cost(params, dataset);
        if !cost.is_finite() {
            return Err(Error::Diverged { epoch });
        }
        if report {
            progress.report(epoch, cost);
        }
        if config.stop_early && monitor.observe(cost) {
            debug!("batch descent converged at epoch {epoch}, cost {cost}");
            return Ok(Outcome {
                cost,
                epochs: epoch + 1,
                status: Status::Converged { epoch },
            });
        }
    }

    let cost = objective.cost(params, dataset);
    if !cost.is_finite() {
        return Err(Error::Diverged {
            epoch: config.max_iterations - 1,
        });
    }
    debug!("batch descent used its budget, cost {cost}");
    Ok(Outcome {
        cost,
        epochs: config.max_iterations,
        status: Status::ExhaustedBudget,
    })
}
