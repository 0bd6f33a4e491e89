use ndarray::ArrayView1;

use crate::{Dataset, Gradient, Params, Result, Scalar};

pub mod linear;
pub mod logistic;

pub use linear::Linear;
pub use logistic::Logistic;

/// A model family: how parameters turn features into a prediction, and how that
/// prediction is scored against a target.
///
/// Both families use the canonical link of their cost, so the gradient of the cost
/// with respect to the affine score is always `prediction - target`. The provided
/// gradient methods rely on that.
pub trait Objective {
    fn predict<F: Scalar>(&self, params: &Params<F>, features: ArrayView1<F>) -> F;

    /// The loss of one prediction against its target.
    fn loss<F: Scalar>(&self, prediction: F, target: F) -> F;

    /// Rejects targets this objective cannot score. Every target is valid by default.
    fn check_targets<F: Scalar>(&self, _dataset: &Dataset<F>) -> Result<()> {
        Ok(())
    }

    /// Mean loss over the whole dataset.
    fn cost<F: Scalar>(&self, params: &Params<F>, dataset: &Dataset<F>) -> F {
        let total = dataset.iter().fold(F::zero(), |acc, (x, y)| {
            acc + self.loss(self.predict(params, x), y)
        });
        total / count::<F>(dataset.len())
    }

    /// Writes the mean gradient over the whole dataset into `grad`.
    fn gradient<F: Scalar>(
        &self,
        params: &Params<F>,
        dataset: &Dataset<F>,
        grad: &mut Gradient<F>,
    ) {
        debug_assert_eq!(grad.feature_count(), params.feature_count());
        grad.clear();
        for (x, y) in dataset.iter() {
            accumulate(grad, self.predict(params, x) - y, x);
        }
        grad.scale(F::one() / count::<F>(dataset.len()));
    }

    /// Writes the gradient of a single example into `grad`.
    fn example_gradient<F: Scalar>(
        &self,
        params: &Params<F>,
        features: ArrayView1<F>,
        target: F,
        grad: &mut Gradient<F>,
    ) {
        debug_assert_eq!(grad.feature_count(), params.feature_count());
        grad.clear();
        accumulate(grad, self.predict(params, features) - target, features);
    }
}

/// Model family chosen at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Family {
    Linear,
    Logistic,
}

impl Objective for Family {
    fn predict<F: Scalar>(&self, params: &Params<F>, features: ArrayView1<F>) -> F {
        match self {
            Family::Linear => Linear.predict(params, features),
            Family::Logistic => Logistic.predict(params, features),
        }
    }

    fn loss<F: Scalar>(&self, prediction: F, target: F) -> F {
        match self {
            Family::Linear => Linear.loss(prediction, target),
            Family::Logistic => Logistic.loss(prediction, target),
        }
    }

    fn check_targets<F: Scalar>(&self, dataset: &Dataset<F>) -> Result<()> {
        match self {
            Family::Linear => Linear.check_targets(dataset),
            Family::Logistic => Logistic.check_targets(dataset),
        }
    }
}

fn accumulate<F: Scalar>(grad: &mut Gradient<F>, error: F, features: ArrayView1<F>) {
    grad.weights_mut().scaled_add(error, &features);
    let bias = grad.bias_mut();
    *bias = *bias + error;
}

fn count<F: Scalar>(n: usize) -> F {
    F::from_usize(n).unwrap_or_else(F::one)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn random_dataset(rng: &mut StdRng, binary: bool) -> Dataset<f64> {
        Dataset::new((0..20).map(|_| {
            let x: Vec<f64> = (0..3).map(|_| rng.gen_range(-2.0..2.0)).collect();
            let y = if binary {
                if rng.gen_bool(0.5) { 1.0 } else { 0.0 }
            } else {
                rng.gen_range(-3.0..3.0)
            };
            (x, y)
        }))
        .unwrap()
    }

    /// Central finite differences of `cost` with respect to every parameter.
    fn numeric_gradient(
        objective: impl Objective,
        params: &Params<f64>,
        data: &Dataset<f64>,
    ) -> Vec<f64> {
        let h = 1e-6;
        (0..params.as_slice().len())
            .map(|i| {
                let mut plus = params.clone();
                plus.as_mut_slice()[i] += h;
                let mut minus = params.clone();
                minus.as_mut_slice()[i] -= h;
                (objective.cost(&plus, data) - objective.cost(&minus, data)) / (2.0 * h)
            })
            .collect()
    }

    fn check_gradient(objective: impl Objective + Copy, binary: bool) {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5 {
            let data = random_dataset(&mut rng, binary);
            let params = Params::new(
                (0..3).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vec<_>>(),
                rng.gen_range(-1.0..1.0),
            );

            let mut grad = Gradient::for_params(&params);
            objective.gradient(&params, &data, &mut grad);
            let numeric = numeric_gradient(objective, &params, &data);

            for (&analytic, &numeric) in grad.as_slice().iter().zip(&numeric) {
                let scale = analytic.abs().max(numeric.abs()).max(1e-3);
                let relative = (analytic - numeric).abs() / scale;
                assert!(relative < 1e-3, "analytic {analytic} vs numeric {numeric}");
            }
        }
    }

    #[test]
    fn linear_gradient_matches_finite_differences() {
        check_gradient(Linear, false);
        check_gradient(Family::Linear, false);
    }

    #[test]
    fn logistic_gradient_matches_finite_differences() {
        check_gradient(Logistic, true);
        check_gradient(Family::Logistic, true);
    }

    #[test]
    fn example_gradient_is_single_example_mean() {
        let data = Dataset::new([([1.0, 2.0], 3.0)]).unwrap();
        let params = Params::new(vec![0.5, -0.5], 1.0);

        let mut full = Gradient::for_params(&params);
        Linear.gradient(&params, &data, &mut full);

        let mut single = Gradient::for_params(&params);
        let (x, y) = data.example(0);
        Linear.example_gradient(&params, x, y, &mut single);

        assert_eq!(full, single);
        // prediction 0.5 - 1 + 1 = 0.5, error -2.5
        assert_eq!(single.as_slice(), &[-2.5, -5.0, -2.5]);
    }

    #[test]
    fn gradient_overwrites_previous_contents() {
        let data = Dataset::new([([1.0], 1.0), ([2.0], 2.0)]).unwrap();
        let params = Params::new(vec![1.0], 0.0);
        let mut grad = Gradient::for_params(&params);
        grad.scale(0.0);
        *grad.bias_mut() = 10.0;
        Linear.gradient(&params, &data, &mut grad);
        assert_eq!(grad.as_slice(), &[0.0, 0.0]);
    }
}
