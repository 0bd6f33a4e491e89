use crate::Scalar;

pub mod sgd;

pub use sgd::SGD;

/// An update rule applying a gradient to a flat parameter buffer.
pub trait Optimiser<F: Scalar> {
    fn init(&mut self, size: usize);
    fn optimise(&mut self, params: &mut [F], grads: &[F]);
}
