use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;

use crate::{Error, Result, Scalar};

/// An ordered set of examples: one row of features and one target per example.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    features: Array2<F>,
    targets: Array1<F>,
}

impl<F: Scalar> Dataset<F> {
    /// Builds a dataset from `(features, target)` pairs.
    ///
    /// Every example must have the same number of features as the first one.
    pub fn new<I, X>(examples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (X, F)>,
        X: AsRef<[F]>,
    {
        let mut data = Vec::new();
        let mut targets = Vec::new();
        let mut feature_count = None;

        for (features, target) in examples {
            let features = features.as_ref();
            let expected = *feature_count.get_or_insert(features.len());
            if features.len() != expected {
                return Err(Error::DimensionMismatch {
                    expected,
                    got: features.len(),
                });
            }
            data.extend_from_slice(features);
            targets.push(target);
        }

        let feature_count = feature_count.ok_or(Error::EmptyDataset)?;
        // every row was checked against `feature_count` above
        let features = Array2::from_shape_vec((targets.len(), feature_count), data)
            .expect("rows have a uniform length");

        Self::from_arrays(features, Array1::from(targets))
    }

    /// Builds a dataset from an `examples x features` matrix and a target vector.
    pub fn from_arrays(features: Array2<F>, targets: Array1<F>) -> Result<Self> {
        if targets.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if features.nrows() != targets.len() {
            return Err(Error::DimensionMismatch {
                expected: targets.len(),
                got: features.nrows(),
            });
        }
        Ok(Self { features, targets })
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn feature_count(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> ArrayView2<'_, F> {
        self.features.view()
    }

    pub fn targets(&self) -> ArrayView1<'_, F> {
        self.targets.view()
    }

    pub fn example(&self, index: usize) -> (ArrayView1<'_, F>, F) {
        (self.features.row(index), self.targets[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, F>, F)> + '_ {
        self.features
            .axis_iter(Axis(0))
            .zip(self.targets.iter().copied())
    }

    /// Reorders the examples in place with a Fisher-Yates shuffle.
    ///
    /// Every permutation is equally likely for a uniform `rng`; membership is unchanged.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        for i in (1..self.len()).rev() {
            let j = rng.gen_range(0..=i);
            if i != j {
                self.swap(i, j);
            }
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        for mut column in self.features.axis_iter_mut(Axis(1)) {
            column.swap(i, j);
        }
        self.targets.swap(i, j);
    }
}
