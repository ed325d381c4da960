//! Desiccant wheel model.
//!
//! Predicts how much a hot-water-regenerated desiccant wheel reduces the
//! latent cooling load of an outdoor-air stream, and what it costs in
//! regeneration heat, hot-water flow, and electric power.

mod core;

#[cfg(test)]
pub(crate) use self::core::test_support;

pub use self::core::{
    COIL_SETPOINT_C, COOLING_LOAD_KEY, CoilDropCoefficients, DEFAULT_HOT_WATER_SUPPLY_C,
    DEFAULT_OUTDOOR_AIR_FLOW_CFM, DEFAULT_OUTDOOR_RELATIVE_HUMIDITY,
    DEFAULT_OUTDOOR_TEMPERATURE_C, DesiccantWheelConfig, DesiccantWheelDataset,
    DesiccantWheelSetpoints, ELECTRIC_POWER_KEY, EnthalpyChangeCoefficients, FanStatus,
    HEAT_INPUT_KEY, HOT_WATER_FLOW_KEY, HOT_WATER_OUTLET_KEY, SUPPLY_ENTHALPY_KEY,
    WheelCoefficients, WheelOutput, air_density, minimum_useful_state, thermal_cop,
};

use tracing::debug;
use twine_core::Model;

use crate::{
    models::component::{ComponentModel, PredictError, Prediction, SetpointError, TrainError},
    support::psychrometrics::{Ashrae, HumidAirProperties},
};

/// A desiccant wheel with trainable coefficients.
///
/// Generic over the humid-air property backend `H`, which defaults to the
/// built-in [`Ashrae`] correlations.
#[derive(Debug, Clone, Default)]
pub struct DesiccantWheel<H = Ashrae> {
    config: DesiccantWheelConfig,
    setpoints: DesiccantWheelSetpoints,
    coefficients: Option<WheelCoefficients>,
    properties: H,
}

impl DesiccantWheel {
    /// Creates an untrained wheel at the default operating point.
    #[must_use]
    pub fn new(config: DesiccantWheelConfig) -> Self {
        Self::with_properties(config, Ashrae)
    }

    /// Creates a wheel that uses known coefficients instead of training.
    #[must_use]
    pub fn with_coefficients(
        config: DesiccantWheelConfig,
        coefficients: WheelCoefficients,
    ) -> Self {
        Self {
            coefficients: Some(coefficients),
            ..Self::new(config)
        }
    }
}

impl<H: HumidAirProperties> DesiccantWheel<H> {
    /// Creates an untrained wheel backed by a custom property backend.
    #[must_use]
    pub fn with_properties(config: DesiccantWheelConfig, properties: H) -> Self {
        Self {
            config,
            setpoints: DesiccantWheelSetpoints::default(),
            coefficients: None,
            properties,
        }
    }

    /// Returns the trained coefficients, if any.
    #[must_use]
    pub fn coefficients(&self) -> Option<&WheelCoefficients> {
        self.coefficients.as_ref()
    }

    /// Returns the current operating point.
    #[must_use]
    pub fn setpoints(&self) -> &DesiccantWheelSetpoints {
        &self.setpoints
    }

    /// Returns the configuration the wheel was built with.
    #[must_use]
    pub fn config(&self) -> &DesiccantWheelConfig {
        &self.config
    }
}

/// Evaluates wheel performance at an arbitrary operating point.
impl<H: HumidAirProperties> Model for DesiccantWheel<H> {
    type Input = DesiccantWheelSetpoints;
    type Output = WheelOutput;
    type Error = PredictError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let coefficients = self.coefficients.as_ref().ok_or(PredictError::NotTrained)?;
        self::core::predict(coefficients, input, &self.config, &self.properties)
    }
}

impl<H: HumidAirProperties> ComponentModel for DesiccantWheel<H> {
    type Dataset = DesiccantWheelDataset;
    type Setpoints = DesiccantWheelSetpoints;

    fn output_metadata(&self) -> &'static [&'static str] {
        &["cooling"]
    }

    fn input_metadata(&self) -> &'static [&'static str] {
        &["heat", "electricity"]
    }

    fn optimization_keys(&self) -> &'static [&'static str] {
        &[COOLING_LOAD_KEY, HEAT_INPUT_KEY, ELECTRIC_POWER_KEY]
    }

    fn update_parameters(&mut self, setpoints: Self::Setpoints) -> Result<(), SetpointError> {
        setpoints.validate()?;
        self.setpoints = setpoints;
        Ok(())
    }

    fn train(&mut self, dataset: &Self::Dataset) -> Result<(), TrainError> {
        let coefficients = WheelCoefficients::train(dataset, &self.config, &self.properties)?;
        if let Some(previous) = self.coefficients.replace(coefficients) {
            debug!(?previous, "replaced desiccant wheel coefficients");
        }
        Ok(())
    }

    fn predict(&self) -> Result<Prediction, PredictError> {
        Ok(self.call(&self.setpoints)?.to_prediction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Pressure, Ratio, ThermodynamicTemperature},
        ratio::percent,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::psychrometrics::{HumidAirState, PropertyError};

    use super::test_support::{
        reference_coefficients, reference_coil_drop, synthetic_dataset, with_coil_columns,
    };

    fn trained() -> DesiccantWheel {
        let mut wheel = DesiccantWheel::new(DesiccantWheelConfig::default());
        wheel
            .train(&synthetic_dataset(&reference_coefficients().enthalpy_change))
            .expect("synthetic dataset trains");
        wheel
    }

    #[test]
    fn predict_before_train_fails() {
        let wheel = DesiccantWheel::new(DesiccantWheelConfig::default());

        assert_eq!(wheel.predict(), Err(PredictError::NotTrained));
        assert_eq!(
            wheel.optimization_parameters(),
            Err(PredictError::NotTrained)
        );
    }

    #[test]
    fn design_day_prediction() {
        let wheel = trained();

        let prediction = wheel.predict().unwrap();

        assert_eq!(prediction.len(), 6);
        assert!(prediction.get(COOLING_LOAD_KEY).unwrap() > 0.0);
        assert_relative_eq!(prediction.get(ELECTRIC_POWER_KEY).unwrap(), 300.0);
        assert_relative_eq!(
            prediction.get(HOT_WATER_OUTLET_KEY).unwrap(),
            41.1,
            epsilon = 1e-9
        );
        assert_eq!(prediction, wheel.predict().unwrap());
    }

    #[test]
    fn optimization_parameters_are_the_dispatch_subset() {
        let wheel = trained();

        let parameters = wheel.optimization_parameters().unwrap();
        let prediction = wheel.predict().unwrap();

        assert_eq!(parameters.len(), 3);
        for key in wheel.optimization_keys() {
            assert_eq!(parameters.get(key), prediction.get(key));
        }
        assert_eq!(wheel.output_metadata(), &["cooling"]);
        assert_eq!(wheel.input_metadata(), &["heat", "electricity"]);
    }

    #[test]
    fn fan_off_reports_zero_everywhere() {
        let mut wheel = trained();
        wheel
            .update_parameters(DesiccantWheelSetpoints {
                fan: FanStatus::Off,
                ..DesiccantWheelSetpoints::default()
            })
            .unwrap();

        let prediction = wheel.predict().unwrap();

        for key in [
            COOLING_LOAD_KEY,
            HEAT_INPUT_KEY,
            HOT_WATER_FLOW_KEY,
            ELECTRIC_POWER_KEY,
        ] {
            assert_eq!(prediction.get(key), Some(0.0), "{key}");
        }
        assert_relative_eq!(
            prediction.get(HOT_WATER_OUTLET_KEY).unwrap(),
            DEFAULT_HOT_WATER_SUPPLY_C,
            epsilon = 1e-9
        );
    }

    #[test]
    fn trained_prediction_matches_known_coefficients() {
        let trained = trained();
        let known = DesiccantWheel::with_coefficients(
            DesiccantWheelConfig::default(),
            reference_coefficients(),
        );

        assert_eq!(known.config(), &DesiccantWheelConfig::default());

        let a = trained.predict().unwrap();
        let b = known.predict().unwrap();

        assert_relative_eq!(
            a.get(COOLING_LOAD_KEY).unwrap(),
            b.get(COOLING_LOAD_KEY).unwrap(),
            max_relative = 1e-6
        );
    }

    #[test]
    fn invalid_setpoints_are_rejected_and_previous_kept() {
        let mut wheel = trained();

        let err = wheel
            .update_parameters(DesiccantWheelSetpoints {
                outdoor_relative_humidity: Ratio::new::<percent>(140.0),
                ..DesiccantWheelSetpoints::default()
            })
            .unwrap_err();

        assert!(matches!(err, SetpointError::OutOfRange { .. }));
        assert_eq!(wheel.setpoints(), &DesiccantWheelSetpoints::default());
    }

    #[test]
    fn failed_retraining_keeps_previous_coefficients() {
        let mut wheel = trained();
        let before = *wheel.coefficients().unwrap();

        let mut broken = synthetic_dataset(&reference_coefficients().enthalpy_change);
        broken.fan_status.pop();
        assert!(wheel.train(&broken).is_err());

        assert_eq!(wheel.coefficients(), Some(&before));
    }

    #[test]
    fn learned_coil_drop_sets_outlet_temperature() {
        let mut wheel = DesiccantWheel::new(DesiccantWheelConfig::default());
        wheel
            .train(&with_coil_columns(
                synthetic_dataset(&reference_coefficients().enthalpy_change),
                reference_coil_drop(),
            ))
            .unwrap();

        let outlet = wheel.call(wheel.setpoints()).unwrap().hot_water_outlet_temperature;
        let h_oa = super::test_support::outdoor_enthalpy(
            DEFAULT_OUTDOOR_TEMPERATURE_C,
            DEFAULT_OUTDOOR_RELATIVE_HUMIDITY,
        );
        let coil = reference_coil_drop();

        assert_relative_eq!(
            outlet.get::<degree_celsius>(),
            DEFAULT_HOT_WATER_SUPPLY_C - (coil.intercept + coil.enthalpy * h_oa),
            epsilon = 1e-6
        );
    }

    /// Backend that fails above a temperature limit.
    #[derive(Debug, Clone, Copy)]
    struct Limited(f64);

    impl HumidAirProperties for Limited {
        fn humid_air_state(
            &self,
            temperature: ThermodynamicTemperature,
            pressure: Pressure,
            relative_humidity: Ratio,
        ) -> Result<HumidAirState, PropertyError> {
            if temperature.get::<degree_celsius>() > self.0 {
                return Err(PropertyError::OutOfDomain {
                    context: format!("above {} °C", self.0),
                });
            }
            Ashrae.humid_air_state(temperature, pressure, relative_humidity)
        }
    }

    #[test]
    fn property_backend_is_pluggable() {
        let mut wheel =
            DesiccantWheel::with_properties(DesiccantWheelConfig::default(), Limited(30.0));
        let err = wheel
            .train(&synthetic_dataset(&reference_coefficients().enthalpy_change))
            .unwrap_err();
        assert!(matches!(err, TrainError::Property(_)));

        let wheel = DesiccantWheel {
            coefficients: Some(reference_coefficients()),
            ..DesiccantWheel::with_properties(DesiccantWheelConfig::default(), Limited(30.0))
        };

        assert!(matches!(wheel.predict(), Err(PredictError::Property(_))));
    }
}
