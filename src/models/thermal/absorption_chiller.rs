//! Absorption chiller model.
//!
//! Predicts the cooling output of a heat-driven absorption chiller from its
//! chilled-water, condenser-water, and generator temperatures and generator
//! heat input, using the Gordon–Ng universal chiller model with two loss
//! coefficients fitted to historical plant data.

mod core;

#[cfg(test)]
pub(crate) use self::core::test_support;

pub use self::core::{
    AbsorptionChillerConfig, AbsorptionChillerDataset, AbsorptionChillerSetpoints, GordonNg,
};

use tracing::debug;
use twine_core::Model;
use uom::si::f64::Power;

use crate::{
    models::component::{ComponentModel, PredictError, Prediction, SetpointError, TrainError},
    support::units::heat_rate,
};

/// Prediction key for cooling output, in tons of refrigeration.
pub const COOLING_OUTPUT_KEY: &str = "Qch";

/// An absorption chiller with trainable Gordon–Ng coefficients.
#[derive(Debug, Clone, Default)]
pub struct AbsorptionChiller {
    config: AbsorptionChillerConfig,
    setpoints: AbsorptionChillerSetpoints,
    coefficients: Option<GordonNg>,
}

impl AbsorptionChiller {
    /// Creates an untrained chiller at the default operating point.
    #[must_use]
    pub fn new(config: AbsorptionChillerConfig) -> Self {
        Self {
            config,
            setpoints: AbsorptionChillerSetpoints::default(),
            coefficients: None,
        }
    }

    /// Creates a chiller that uses known coefficients instead of training.
    #[must_use]
    pub fn with_coefficients(config: AbsorptionChillerConfig, coefficients: GordonNg) -> Self {
        Self {
            coefficients: Some(coefficients),
            ..Self::new(config)
        }
    }

    /// Returns the trained coefficients, if any.
    #[must_use]
    pub fn coefficients(&self) -> Option<&GordonNg> {
        self.coefficients.as_ref()
    }

    /// Returns the current operating point.
    #[must_use]
    pub fn setpoints(&self) -> &AbsorptionChillerSetpoints {
        &self.setpoints
    }
}

/// Evaluates cooling output at an arbitrary operating point.
impl Model for AbsorptionChiller {
    type Input = AbsorptionChillerSetpoints;
    type Output = Power;
    type Error = PredictError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let coefficients = self.coefficients.as_ref().ok_or(PredictError::NotTrained)?;
        coefficients.cooling_capacity(input, &self.config)
    }
}

impl ComponentModel for AbsorptionChiller {
    type Dataset = AbsorptionChillerDataset;
    type Setpoints = AbsorptionChillerSetpoints;

    fn output_metadata(&self) -> &'static [&'static str] {
        &["chilled_water"]
    }

    fn input_metadata(&self) -> &'static [&'static str] {
        &["heat"]
    }

    fn optimization_keys(&self) -> &'static [&'static str] {
        &[COOLING_OUTPUT_KEY]
    }

    fn update_parameters(&mut self, setpoints: Self::Setpoints) -> Result<(), SetpointError> {
        setpoints.validate()?;
        self.setpoints = setpoints;
        Ok(())
    }

    fn train(&mut self, dataset: &Self::Dataset) -> Result<(), TrainError> {
        let coefficients = GordonNg::train(dataset)?;
        if let Some(previous) = self.coefficients.replace(coefficients) {
            debug!(?previous, "replaced Gordon-Ng coefficients");
        }
        Ok(())
    }

    fn predict(&self) -> Result<Prediction, PredictError> {
        let cooling = self.call(&self.setpoints)?;
        Ok([(COOLING_OUTPUT_KEY, heat_rate::to_tons(cooling))]
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, power::kilowatt,
        thermodynamic_temperature::degree_fahrenheit,
    };

    use super::test_support::{reference_coefficients, synthetic_dataset};

    fn trained() -> AbsorptionChiller {
        let mut chiller = AbsorptionChiller::default();
        chiller
            .train(&synthetic_dataset(reference_coefficients()))
            .expect("synthetic dataset trains");
        chiller
    }

    #[test]
    fn predict_before_train_fails() {
        let chiller = AbsorptionChiller::default();

        assert_eq!(chiller.predict(), Err(PredictError::NotTrained));
        assert_eq!(
            chiller.optimization_parameters(),
            Err(PredictError::NotTrained)
        );
        assert!(chiller.coefficients().is_none());
    }

    #[test]
    fn failed_training_leaves_model_untrained() {
        let mut chiller = AbsorptionChiller::default();

        assert!(chiller.train(&AbsorptionChillerDataset::default()).is_err());
        assert_eq!(chiller.predict(), Err(PredictError::NotTrained));
    }

    #[test]
    fn design_point_prediction() {
        let chiller = trained();

        let first = chiller.predict().unwrap();
        let second = chiller.predict().unwrap();

        assert_eq!(first.len(), 1);
        let tons = first.get(COOLING_OUTPUT_KEY).unwrap();
        assert!(tons > 0.0);
        assert_relative_eq!(tons, 340.992_328, max_relative = 1e-5);
        assert_eq!(first, second);
    }

    #[test]
    fn optimization_parameters_report_cooling_tons() {
        let chiller = trained();

        let parameters = chiller.optimization_parameters().unwrap();

        assert_eq!(parameters, chiller.predict().unwrap());
        assert_eq!(chiller.output_metadata(), &["chilled_water"]);
        assert_eq!(chiller.input_metadata(), &["heat"]);
    }

    #[test]
    fn setpoint_updates_change_prediction() {
        let mut chiller = trained();
        let baseline = chiller.predict().unwrap().get(COOLING_OUTPUT_KEY).unwrap();

        chiller
            .update_parameters(AbsorptionChillerSetpoints {
                heat_input: heat_rate::from_mmbtu_per_hour(10.0),
                ..AbsorptionChillerSetpoints::default()
            })
            .unwrap();
        let more_heat = chiller.predict().unwrap().get(COOLING_OUTPUT_KEY).unwrap();

        assert!(more_heat > baseline);
    }

    #[test]
    fn invalid_setpoints_are_rejected_and_previous_kept() {
        let mut chiller = trained();

        let err = chiller
            .update_parameters(AbsorptionChillerSetpoints {
                heat_input: Power::new::<kilowatt>(-1.0),
                ..AbsorptionChillerSetpoints::default()
            })
            .unwrap_err();

        assert!(matches!(
            err,
            SetpointError::OutOfRange {
                field: "heat_input",
                ..
            }
        ));
        assert_eq!(chiller.setpoints(), &AbsorptionChillerSetpoints::default());
    }

    #[test]
    fn model_call_does_not_touch_setpoints() {
        let chiller = trained();
        let point = AbsorptionChillerSetpoints {
            generator_inlet_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(83.7),
            ..AbsorptionChillerSetpoints::default()
        };

        assert!(matches!(
            chiller.call(&point),
            Err(PredictError::DegenerateOperatingPoint { .. })
        ));
        assert!(chiller.predict().is_ok());
    }

    #[test]
    fn known_coefficients_skip_training() {
        let chiller = AbsorptionChiller::with_coefficients(
            AbsorptionChillerConfig::default(),
            reference_coefficients(),
        );

        let cooling = chiller.call(chiller.setpoints()).unwrap();

        assert_relative_eq!(cooling.get::<kilowatt>(), 1199.270_018, max_relative = 1e-8);
    }
}
