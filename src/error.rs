use thiserror::Error;

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An example or parameter vector disagrees on the number of features.
    #[error("dimension mismatch: expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("dataset contains no examples")]
    EmptyDataset,

    /// A target outside the range the objective can score, e.g. not a probability.
    #[error("target of example {index} is out of range")]
    InvalidTarget { index: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Loss, gradient or iterate became NaN or infinite.
    #[error("optimisation diverged at iteration {epoch}")]
    Diverged { epoch: usize },
}
