use super::Optimiser;
use crate::Scalar;

/// Plain gradient descent: `theta <- theta - alpha * g`.
#[derive(Debug, Copy, Clone)]
pub struct SGD<F>(F);

impl<F> SGD<F> {
    pub const fn new(alpha: F) -> Self {
        Self(alpha)
    }
}

impl<F: Scalar> Optimiser<F> for SGD<F> {
    fn init(&mut self, _size: usize) {}

    fn optimise(&mut self, params: &mut [F], grads: &[F]) {
        debug_assert_eq!(params.len(), grads.len());
        for (theta, &g) in params.iter_mut().zip(grads) {
            *theta = *theta - self.0 * g;
        }
    }
}
