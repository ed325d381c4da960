use thiserror::Error;

/// Errors that can occur while fitting a least-squares regression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    /// Fewer samples than free parameters (intercept plus slopes).
    #[error("insufficient data: {samples} samples for {parameters} parameters")]
    InsufficientData { samples: usize, parameters: usize },

    /// The least-squares problem has no unique solution.
    #[error("singular matrix: {0}")]
    SingularMatrix(Degeneracy),

    /// Explanatory rows and responses are not aligned.
    #[error("mismatched lengths: {inputs} input rows, {responses} responses")]
    MismatchedLengths { inputs: usize, responses: usize },

    /// A sample contains NaN or an infinite value.
    #[error("non-finite value in sample {sample}")]
    NonFinite { sample: usize },

    /// The linear-algebra backend failed to solve the decomposed system.
    #[error("decomposition failed: {reason}")]
    Decomposition { reason: &'static str },
}

/// Why a regression's design matrix is singular.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Degeneracy {
    /// An explanatory variable is constant across all samples.
    #[error("explanatory variable {variable} has zero variance")]
    ZeroVariance { variable: usize },

    /// Explanatory variables are linearly dependent.
    #[error("explanatory variables are linearly dependent (smallest singular value {smallest:e})")]
    Collinear { smallest: f64 },
}
