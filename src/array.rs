use ndarray::{ArrayBase, ArrayView1, Data, Dimension};

use crate::Scalar;

/// `w . x + b`
pub fn affine<F: Scalar>(weights: ArrayView1<F>, features: ArrayView1<F>, bias: F) -> F {
    features.dot(&weights) + bias
}

/// True iff no element is NaN or infinite.
pub fn all_finite<S, F, D>(a: &ArrayBase<S, D>) -> bool
where
    S: Data<Elem = F>,
    F: Scalar,
    D: Dimension,
{
    a.iter().all(|x| x.is_finite())
}
