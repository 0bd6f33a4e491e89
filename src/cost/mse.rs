use super::Cost;
use crate::Scalar;

#[derive(Debug, Copy, Clone)]
/// Mean Squared Error cost function, halved so its derivative is the plain residual.
pub struct HalfMSE;

impl Cost for HalfMSE {
    fn loss<F: Scalar>(&self, prediction: F, target: F) -> F {
        let diff = prediction - target;
        let two = F::one() + F::one();
        diff * diff / two
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn mean_of_half_squares() {
        let cost = HalfMSE.cost(array![1.0, 2.0, 5.0], array![1.0, 4.0, 2.0]);
        // (0 + 4 + 9) / 2 / 3
        assert_eq!(cost, 13.0 / 6.0);
    }
}
