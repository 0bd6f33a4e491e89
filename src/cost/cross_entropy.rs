use super::Cost;
use crate::{constant, Scalar};

/// Probabilities are clamped to `[EPSILON, 1 - EPSILON]` before taking a logarithm.
pub const EPSILON: f64 = 1e-7;

#[derive(Debug, Copy, Clone)]
/// Binary cross-entropy for probabilities against `{0, 1}` targets.
pub struct CrossEntropy;

impl CrossEntropy {
    pub fn clamp<F: Scalar>(p: F) -> F {
        let eps = constant::<F>(EPSILON);
        p.max(eps).min(F::one() - eps)
    }
}

impl Cost for CrossEntropy {
    fn loss<F: Scalar>(&self, prediction: F, target: F) -> F {
        let one = F::one();
        let p = Self::clamp(prediction);
        -target * p.ln() - (one - target) * (one - p).ln()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn confident_and_wrong() {
        assert_relative_eq!(CrossEntropy.loss(0.5_f64, 1.0), 2.0_f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(CrossEntropy.loss(0.9_f64, 1.0), -(0.9_f64.ln()), epsilon = 1e-12);
        assert_relative_eq!(CrossEntropy.loss(0.9_f64, 0.0), -(0.1_f64.ln()), epsilon = 1e-12);
    }

    #[test]
    fn saturated_predictions_stay_finite() {
        for p in [0.0_f64, 1.0, 1e-300, 1.0 - 1e-17] {
            for y in [0.0, 1.0] {
                let loss = CrossEntropy.loss(p, y);
                assert!(loss.is_finite(), "loss({p}, {y}) = {loss}");
                assert!(loss >= 0.0);
            }
        }
        // f32 rounds 1 - 1e-7 differently, still bounded
        let loss = CrossEntropy.cost(array![0.0_f32, 1.0], array![1.0, 0.0]);
        assert!(loss.is_finite());
        assert!(loss > 10.0);
    }
}
