use ndarray::ArrayView1;

use super::Objective;
use crate::{
    activation::{identity::Identity, Activation},
    cost::{mse::HalfMSE, Cost},
    Params, Scalar,
};

/// Linear regression: `w . x + b` scored by half mean squared error.
#[derive(Debug, Copy, Clone, Default)]
pub struct Linear;

impl Objective for Linear {
    fn predict<F: Scalar>(&self, params: &Params<F>, features: ArrayView1<F>) -> F {
        Identity::apply(params.affine(features))
    }

    fn loss<F: Scalar>(&self, prediction: F, target: F) -> F {
        HalfMSE.loss(prediction, target)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{Dataset, Gradient};

    #[test]
    fn predicts_affine_score() {
        let params = Params::new(vec![2.0, -1.0], 0.5);
        assert_eq!(Linear.predict(&params, array![3.0, 1.0].view()), 5.5);
    }

    #[test]
    fn cost_and_gradient() {
        // y = 2x + 1, evaluated at w = 0, b = 0
        let data = Dataset::new((0..4).map(|i| ([i as f64], 2.0 * i as f64 + 1.0))).unwrap();
        let params = Params::zeros(1);

        // targets 1, 3, 5, 7
        assert_eq!(Linear.cost(&params, &data), (1.0 + 9.0 + 25.0 + 49.0) / 2.0 / 4.0);

        let mut grad = Gradient::for_params(&params);
        Linear.gradient(&params, &data, &mut grad);
        // mean(-y * x) = -(0 + 3 + 10 + 21) / 4, mean(-y) = -16 / 4
        assert_eq!(grad.as_slice(), &[-8.5, -4.0]);
    }
}
