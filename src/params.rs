use ndarray::{ArrayView1, ArrayViewMut1};
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};

use crate::{array, Error, Result, Scalar};

/// The trainable state of a model: `feature_count` weights followed by a single bias.
///
/// Stored as one flat buffer so an [`Optimiser`](crate::optimise::Optimiser) can step
/// every parameter in a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Params<F> {
    data: Vec<F>,
}

impl<F: Scalar> Params<F> {
    pub fn new(weights: impl Into<Vec<F>>, bias: F) -> Self {
        let mut data = weights.into();
        data.push(bias);
        Self { data }
    }

    pub fn zeros(feature_count: usize) -> Self {
        Self {
            data: vec![F::zero(); feature_count + 1],
        }
    }

    /// Draws the weights from `N(0, 1 / feature_count)`; the bias starts at zero.
    pub fn random(feature_count: usize, rng: &mut impl Rng) -> Self
    where
        StandardNormal: Distribution<F>,
    {
        let mut params = Self::zeros(feature_count);
        let Some(inputs) = F::from_usize(feature_count.max(1)) else {
            return params;
        };
        let var = F::one() / inputs;
        if let Ok(dist) = Normal::new(F::zero(), var.sqrt()) {
            params.weights_mut().map_inplace(|w| *w = dist.sample(rng));
        }
        params
    }

    pub fn feature_count(&self) -> usize {
        self.data.len() - 1
    }

    pub fn weights(&self) -> ArrayView1<'_, F> {
        ArrayView1::from(&self.data[..self.feature_count()])
    }

    pub fn weights_mut(&mut self) -> ArrayViewMut1<'_, F> {
        let n = self.feature_count();
        ArrayViewMut1::from(&mut self.data[..n])
    }

    pub fn bias(&self) -> F {
        self.data[self.feature_count()]
    }

    pub fn set_bias(&mut self, bias: F) {
        let n = self.feature_count();
        self.data[n] = bias;
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [F] {
        &mut self.data
    }

    /// `w . x + b` for a single example.
    pub fn affine(&self, features: ArrayView1<F>) -> F {
        array::affine(self.weights(), features, self.bias())
    }

    pub(crate) fn check_features(&self, got: usize) -> Result<()> {
        let expected = self.feature_count();
        if got != expected {
            return Err(Error::DimensionMismatch { expected, got });
        }
        Ok(())
    }
}

/// Partial derivatives of a cost with respect to each entry of [`Params`], same layout.
///
/// Sized once from the feature count and overwritten on every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient<F> {
    data: Vec<F>,
}

impl<F: Scalar> Gradient<F> {
    pub fn zeros(feature_count: usize) -> Self {
        Self {
            data: vec![F::zero(); feature_count + 1],
        }
    }

    pub fn for_params(params: &Params<F>) -> Self {
        Self::zeros(params.feature_count())
    }

    pub fn feature_count(&self) -> usize {
        self.data.len() - 1
    }

    pub fn weights(&self) -> ArrayView1<'_, F> {
        ArrayView1::from(&self.data[..self.feature_count()])
    }

    pub fn weights_mut(&mut self) -> ArrayViewMut1<'_, F> {
        let n = self.feature_count();
        ArrayViewMut1::from(&mut self.data[..n])
    }

    pub fn bias(&self) -> F {
        self.data[self.feature_count()]
    }

    pub(crate) fn bias_mut(&mut self) -> &mut F {
        let n = self.feature_count();
        &mut self.data[n]
    }

    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    pub(crate) fn clear(&mut self) {
        self.data.iter_mut().for_each(|g| *g = F::zero());
    }

    pub(crate) fn scale(&mut self, factor: F) {
        self.data.iter_mut().for_each(|g| *g = *g * factor);
    }

    pub fn is_finite(&self) -> bool {
        array::all_finite(&self.weights()) && self.bias().is_finite()
    }
}
