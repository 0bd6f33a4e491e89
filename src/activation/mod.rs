use crate::Scalar;

pub mod identity;
pub mod sigmoid;

/// The link function mapping a model's affine score `w . x + b` to its prediction.
pub trait Activation {
    fn apply<F: Scalar>(z: F) -> F;
}
