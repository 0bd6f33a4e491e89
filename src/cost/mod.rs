use ndarray::{ArrayBase, Data, Ix1};

use crate::Scalar;

pub mod cross_entropy;
pub mod mse;

pub trait Cost {
    /// The loss of a single prediction against its target.
    fn loss<F: Scalar>(&self, prediction: F, target: F) -> F;

    /// Mean loss over paired predictions and targets.
    fn cost<F: Scalar>(
        &self,
        predictions: ArrayBase<impl Data<Elem = F>, Ix1>,
        targets: ArrayBase<impl Data<Elem = F>, Ix1>,
    ) -> F {
        debug_assert_eq!(predictions.len(), targets.len());
        let total = predictions
            .iter()
            .zip(targets.iter())
            .fold(F::zero(), |acc, (&p, &y)| acc + self.loss(p, y));
        total / F::from_usize(targets.len()).unwrap_or_else(F::one)
    }
}
