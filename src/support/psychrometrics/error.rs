use thiserror::Error;

/// Errors that may occur when evaluating humid-air properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The input state is outside the backend's valid domain.
    ///
    /// For example, a relative humidity above one or a temperature beyond the
    /// range of the saturation-pressure correlation.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// The calculation failed due to a numerical error.
    #[error("calculation error: {context}")]
    Calculation { context: String },
}
