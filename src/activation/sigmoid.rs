use super::Activation;
use crate::Scalar;

/// The logistic function `1 / (1 + e^-z)`.
#[derive(Debug, Copy, Clone)]
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn apply<F: Scalar>(z: F) -> F {
        let one = F::one();
        one / (one + (-z).exp())
    }
}
