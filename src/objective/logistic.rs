use ndarray::ArrayView1;

use super::Objective;
use crate::{
    activation::{sigmoid::Sigmoid, Activation},
    cost::{cross_entropy::CrossEntropy, Cost},
    constant, Dataset, Error, Params, Result, Scalar,
};

/// Logistic regression: `sigmoid(w . x + b)` scored by binary cross-entropy.
///
/// Predictions are probabilities of the positive class; targets are `0` or `1`
/// (soft labels in between are accepted, anything outside `[0, 1]` is not).
#[derive(Debug, Copy, Clone, Default)]
pub struct Logistic;

impl Logistic {
    /// `1` when the predicted probability reaches `threshold`, else `0`.
    pub fn classify<F: Scalar>(
        &self,
        params: &Params<F>,
        features: ArrayView1<F>,
        threshold: F,
    ) -> u8 {
        u8::from(self.predict(params, features) >= threshold)
    }

    /// Fraction of examples whose class matches their target.
    pub fn accuracy<F: Scalar>(
        &self,
        params: &Params<F>,
        dataset: &Dataset<F>,
        threshold: F,
    ) -> F {
        let half = constant::<F>(0.5);
        let correct = dataset
            .iter()
            .filter(|(x, y)| {
                let class = self.classify(params, x.view(), threshold);
                (class == 1) == (*y >= half)
            })
            .count();
        F::from_usize(correct).unwrap_or_else(F::zero)
            / F::from_usize(dataset.len()).unwrap_or_else(F::one)
    }
}

impl Objective for Logistic {
    fn predict<F: Scalar>(&self, params: &Params<F>, features: ArrayView1<F>) -> F {
        Sigmoid::apply(params.affine(features))
    }

    fn loss<F: Scalar>(&self, prediction: F, target: F) -> F {
        CrossEntropy.loss(prediction, target)
    }

    fn check_targets<F: Scalar>(&self, dataset: &Dataset<F>) -> Result<()> {
        let valid = |y: &F| *y >= F::zero() && *y <= F::one();
        match dataset.targets().iter().position(|y| !valid(y)) {
            Some(index) => Err(Error::InvalidTarget { index }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;
    use crate::Family;

    #[test]
    fn predicts_probability() {
        let params = Params::new(vec![1.0, 1.0], -1.0);
        assert_eq!(Logistic.predict(&params, array![0.5, 0.5].view()), 0.5);
        assert!(Logistic.predict(&params, array![3.0, 3.0].view()) > 0.99);
        assert!(Logistic.predict(&params, array![-3.0, -3.0].view()) < 0.01);
    }

    #[test]
    fn classifies_against_threshold() {
        let params = Params::new(vec![1.0, 1.0], -1.0);
        assert_eq!(Logistic.classify(&params, array![0.5, 0.5].view(), 0.5), 1);
        assert_eq!(Logistic.classify(&params, array![0.4, 0.5].view(), 0.5), 0);
        assert_eq!(Logistic.classify(&params, array![2.0, 2.0].view(), 0.99), 0);
    }

    #[test]
    fn accuracy_counts_matches() {
        let data = Dataset::new([
            ([2.0, 2.0], 1.0),
            ([-2.0, -2.0], 0.0),
            ([3.0, 0.0], 1.0),
            ([0.0, 0.0], 1.0),
        ])
        .unwrap();
        let params = Params::new(vec![1.0, 1.0], -1.0);
        assert_eq!(Logistic.accuracy(&params, &data, 0.5), 0.75);
    }

    #[test]
    fn targets_must_be_probabilities() {
        let data = Dataset::new([([1.0], 1.0), ([0.0], 0.25), ([-1.0], 0.0)]).unwrap();
        assert_eq!(Logistic.check_targets(&data), Ok(()));

        let data = Dataset::new([([1.0], 1.0), ([-1.0], 2.0)]).unwrap();
        assert_eq!(
            Logistic.check_targets(&data),
            Err(Error::InvalidTarget { index: 1 })
        );

        let data = Dataset::new([([1.0], f64::NAN)]).unwrap();
        assert_eq!(
            Family::Logistic.check_targets(&data),
            Err(Error::InvalidTarget { index: 0 })
        );
        assert_eq!(Family::Linear.check_targets(&data), Ok(()));
    }

    #[test]
    fn cost_is_finite_when_saturated() {
        // scores of +-1000 push the sigmoid to exactly 0.0 and 1.0
        let data = Dataset::new([([1.0], 0.0), ([-1.0], 1.0), ([1.0], 1.0)]).unwrap();
        let params = Params::new(vec![1000.0_f64], 0.0);

        let cost = Logistic.cost(&params, &data);
        assert!(cost.is_finite());
        // two confidently wrong examples at -ln(1e-7), one right at ~0
        assert_relative_eq!(cost, 2.0 * -(1e-7_f64.ln()) / 3.0, max_relative = 1e-6);
    }
}
