//! The contract shared by every equipment model.

mod columns;
mod error;
mod prediction;

pub(crate) use columns::aligned_len;

pub use error::{PredictError, SetpointError, TrainError};
pub use prediction::Prediction;

/// Train/update/predict protocol implemented by every equipment type.
///
/// A model must be [trained](ComponentModel::train) before it can
/// [predict](ComponentModel::predict). Setpoints are replaced wholesale by each
/// [`update_parameters`](ComponentModel::update_parameters) call; trained
/// coefficients are only ever replaced by a later successful `train`.
pub trait ComponentModel {
    /// Historical operating data consumed by [`ComponentModel::train`].
    type Dataset;

    /// Current sensor readings and setpoints used by [`ComponentModel::predict`].
    type Setpoints;

    /// Names of the commodities this equipment produces.
    fn output_metadata(&self) -> &'static [&'static str];

    /// Names of the commodities this equipment consumes.
    fn input_metadata(&self) -> &'static [&'static str];

    /// Prediction keys handed to the dispatch optimizer.
    fn optimization_keys(&self) -> &'static [&'static str];

    /// Replaces the current setpoints.
    ///
    /// # Errors
    ///
    /// Returns a [`SetpointError`] if a reading is physically invalid or the
    /// setpoints belong to a different equipment type. The previous setpoints
    /// are kept on error.
    fn update_parameters(&mut self, setpoints: Self::Setpoints) -> Result<(), SetpointError>;

    /// Fits the model's coefficients to a historical dataset.
    ///
    /// Training is idempotent: the same dataset always yields the same
    /// coefficients. On error the previously trained coefficients, if any,
    /// are left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`TrainError`] if the dataset is malformed or the regression
    /// is degenerate.
    fn train(&mut self, dataset: &Self::Dataset) -> Result<(), TrainError>;

    /// Predicts the named output quantities at the current setpoints.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::NotTrained`] before any successful training,
    /// or another [`PredictError`] if the operating point is physically
    /// undefined.
    fn predict(&self) -> Result<Prediction, PredictError>;

    /// Returns the subset of [`ComponentModel::predict`] consumed by the
    /// dispatch optimizer, keyed by [`ComponentModel::optimization_keys`].
    ///
    /// # Errors
    ///
    /// Returns a [`PredictError`] under the same conditions as `predict`.
    fn optimization_parameters(&self) -> Result<Prediction, PredictError> {
        Ok(self.predict()?.select(self.optimization_keys()))
    }
}
