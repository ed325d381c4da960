use thiserror::Error;

use crate::support::{psychrometrics::PropertyError, regression::RegressionError};

/// Errors that can occur while training an equipment model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrainError {
    /// The historical dataset is missing data or its columns are misaligned.
    #[error("malformed dataset: {context}")]
    MalformedDataset { context: String },

    /// The least-squares fit failed.
    #[error("regression failed")]
    Regression(#[from] RegressionError),

    /// A humid-air property evaluation failed on a historical sample.
    #[error("property evaluation failed")]
    Property(#[from] PropertyError),
}

impl TrainError {
    pub(crate) fn malformed(context: impl Into<String>) -> Self {
        Self::MalformedDataset {
            context: context.into(),
        }
    }
}

/// Errors that can occur while predicting equipment outputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    /// Prediction was requested before any successful training.
    #[error("model has not been trained")]
    NotTrained,

    /// The operating point makes the governing equations undefined.
    ///
    /// For example, a generator temperature equal to the chilled-water
    /// temperature in the Gordon–Ng relation.
    #[error("degenerate operating point: {context}")]
    DegenerateOperatingPoint { context: String },

    /// A humid-air property evaluation failed at the operating point.
    #[error("property evaluation failed")]
    Property(#[from] PropertyError),
}

impl PredictError {
    pub(crate) fn degenerate(context: impl Into<String>) -> Self {
        Self::DegenerateOperatingPoint {
            context: context.into(),
        }
    }
}

/// Errors that can occur while updating setpoints.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetpointError {
    /// A reading is outside its physical range.
    #[error("{field} out of range: {context}")]
    OutOfRange {
        field: &'static str,
        context: String,
    },

    /// Setpoints for one equipment type were given to another.
    #[error("setpoints for {found} given to {expected}")]
    EquipmentMismatch {
        expected: &'static str,
        found: &'static str,
    },
}
