//! Configuration-selected equipment.
//!
//! The dispatch layer builds one [`Equipment`] per plant component from an
//! [`EquipmentConfig`] at startup and drives every component through the same
//! [`ComponentModel`] calls. Datasets and setpoints are tagged with their
//! equipment type, and handing one type's data to another is an error.

use serde::{Deserialize, Serialize};

use crate::models::{
    component::{ComponentModel, PredictError, Prediction, SetpointError, TrainError},
    thermal::{
        absorption_chiller::{
            AbsorptionChiller, AbsorptionChillerConfig, AbsorptionChillerDataset,
            AbsorptionChillerSetpoints,
        },
        desiccant_wheel::{
            DesiccantWheel, DesiccantWheelConfig, DesiccantWheelDataset, DesiccantWheelSetpoints,
        },
    },
};

const DESICCANT_WHEEL: &str = "desiccant_wheel";
const ABSORPTION_CHILLER: &str = "absorption_chiller";

/// Selects and configures an equipment model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquipmentConfig {
    /// Build a [`DesiccantWheel`].
    DesiccantWheel(DesiccantWheelConfig),

    /// Build an [`AbsorptionChiller`].
    AbsorptionChiller(AbsorptionChillerConfig),
}

/// Historical data for one equipment type.
///
/// Serialized with an `"equipment"` tag naming the type, alongside the
/// type's own columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "equipment", rename_all = "snake_case")]
pub enum EquipmentDataset {
    /// Tagged `"desiccant_wheel"`.
    DesiccantWheel(DesiccantWheelDataset),

    /// Tagged `"absorption_chiller"`.
    AbsorptionChiller(AbsorptionChillerDataset),
}

/// Current readings for one equipment type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EquipmentSetpoints {
    /// Readings for a [`DesiccantWheel`].
    DesiccantWheel(DesiccantWheelSetpoints),

    /// Readings for an [`AbsorptionChiller`].
    AbsorptionChiller(AbsorptionChillerSetpoints),
}

/// An equipment model selected by configuration.
#[derive(Debug, Clone)]
pub enum Equipment {
    /// A desiccant dehumidification wheel.
    DesiccantWheel(DesiccantWheel),

    /// A heat-driven absorption chiller.
    AbsorptionChiller(AbsorptionChiller),
}

impl Equipment {
    /// Builds an untrained model of the configured type.
    #[must_use]
    pub fn new(config: EquipmentConfig) -> Self {
        match config {
            EquipmentConfig::DesiccantWheel(config) => {
                Self::DesiccantWheel(DesiccantWheel::new(config))
            }
            EquipmentConfig::AbsorptionChiller(config) => {
                Self::AbsorptionChiller(AbsorptionChiller::new(config))
            }
        }
    }

    /// Returns the snake-case name of the equipment type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DesiccantWheel(_) => DESICCANT_WHEEL,
            Self::AbsorptionChiller(_) => ABSORPTION_CHILLER,
        }
    }
}

impl EquipmentDataset {
    /// Returns the snake-case name of the equipment type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DesiccantWheel(_) => DESICCANT_WHEEL,
            Self::AbsorptionChiller(_) => ABSORPTION_CHILLER,
        }
    }
}

impl EquipmentSetpoints {
    /// Returns the snake-case name of the equipment type.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DesiccantWheel(_) => DESICCANT_WHEEL,
            Self::AbsorptionChiller(_) => ABSORPTION_CHILLER,
        }
    }
}

impl ComponentModel for Equipment {
    type Dataset = EquipmentDataset;
    type Setpoints = EquipmentSetpoints;

    fn output_metadata(&self) -> &'static [&'static str] {
        match self {
            Self::DesiccantWheel(wheel) => wheel.output_metadata(),
            Self::AbsorptionChiller(chiller) => chiller.output_metadata(),
        }
    }

    fn input_metadata(&self) -> &'static [&'static str] {
        match self {
            Self::DesiccantWheel(wheel) => wheel.input_metadata(),
            Self::AbsorptionChiller(chiller) => chiller.input_metadata(),
        }
    }

    fn optimization_keys(&self) -> &'static [&'static str] {
        match self {
            Self::DesiccantWheel(wheel) => wheel.optimization_keys(),
            Self::AbsorptionChiller(chiller) => chiller.optimization_keys(),
        }
    }

    fn update_parameters(&mut self, setpoints: Self::Setpoints) -> Result<(), SetpointError> {
        match (self, setpoints) {
            (Self::DesiccantWheel(model), EquipmentSetpoints::DesiccantWheel(point)) => {
                model.update_parameters(point)
            }
            (Self::AbsorptionChiller(model), EquipmentSetpoints::AbsorptionChiller(point)) => {
                model.update_parameters(point)
            }
            (equipment, setpoints) => Err(SetpointError::EquipmentMismatch {
                expected: equipment.kind(),
                found: setpoints.kind(),
            }),
        }
    }

    fn train(&mut self, dataset: &Self::Dataset) -> Result<(), TrainError> {
        match (self, dataset) {
            (Self::DesiccantWheel(wheel), EquipmentDataset::DesiccantWheel(dataset)) => {
                wheel.train(dataset)
            }
            (Self::AbsorptionChiller(chiller), EquipmentDataset::AbsorptionChiller(dataset)) => {
                chiller.train(dataset)
            }
            (equipment, dataset) => {
                let context = format!("{} dataset given to {}", dataset.kind(), equipment.kind());
                Err(TrainError::malformed(context))
            }
        }
    }

    fn predict(&self) -> Result<Prediction, PredictError> {
        match self {
            Self::DesiccantWheel(wheel) => wheel.predict(),
            Self::AbsorptionChiller(chiller) => chiller.predict(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::thermal::{
        absorption_chiller::{COOLING_OUTPUT_KEY, test_support as chiller_support},
        desiccant_wheel::{COOLING_LOAD_KEY, test_support as wheel_support},
    };

    fn plant() -> Vec<Equipment> {
        let wheel = EquipmentConfig::DesiccantWheel(DesiccantWheelConfig::default());
        let chiller = EquipmentConfig::AbsorptionChiller(AbsorptionChillerConfig::default());
        vec![Equipment::new(wheel), Equipment::new(chiller)]
    }

    fn datasets() -> Vec<EquipmentDataset> {
        let wheel = wheel_support::reference_coefficients().enthalpy_change;
        let chiller = chiller_support::reference_coefficients();
        vec![
            EquipmentDataset::DesiccantWheel(wheel_support::synthetic_dataset(&wheel)),
            EquipmentDataset::AbsorptionChiller(chiller_support::synthetic_dataset(chiller)),
        ]
    }

    #[test]
    fn every_equipment_follows_the_same_lifecycle() {
        let mut plant = plant();

        for (equipment, dataset) in plant.iter_mut().zip(datasets()) {
            assert_eq!(equipment.predict(), Err(PredictError::NotTrained));
            equipment.train(&dataset).unwrap();

            let parameters = equipment.optimization_parameters().unwrap();
            assert_eq!(parameters.len(), equipment.optimization_keys().len());
            assert!(!equipment.output_metadata().is_empty());
            assert!(!equipment.input_metadata().is_empty());
        }

        assert!(plant[0].predict().unwrap().get(COOLING_LOAD_KEY).unwrap() > 0.0);
        assert!(plant[1].predict().unwrap().get(COOLING_OUTPUT_KEY).unwrap() > 0.0);
    }

    #[test]
    fn mismatched_dataset_is_malformed() {
        let mut wheel = plant().remove(0);
        let chiller_data = datasets().pop().unwrap();

        let err = wheel.train(&chiller_data).unwrap_err();

        assert!(matches!(err, TrainError::MalformedDataset { .. }));
        assert_eq!(wheel.predict(), Err(PredictError::NotTrained));
    }

    #[test]
    fn mismatched_setpoints_are_rejected() {
        let mut chiller = plant().remove(1);
        let wrong = EquipmentSetpoints::DesiccantWheel(DesiccantWheelSetpoints::default());

        let err = chiller.update_parameters(wrong).unwrap_err();

        assert_eq!(
            err,
            SetpointError::EquipmentMismatch {
                expected: "absorption_chiller",
                found: "desiccant_wheel",
            }
        );
        let right = EquipmentSetpoints::AbsorptionChiller(AbsorptionChillerSetpoints::default());
        assert!(chiller.update_parameters(right).is_ok());
    }

    #[test]
    fn tagged_dataset_parses() {
        let json = r#"{
            "equipment": "absorption_chiller",
            "Tcho(F)": [44.0, 45.0, 46.0],
            "Tcdi(F)": [80.0, 84.0, 88.0],
            "Tgei(F)": [330.0, 335.0, 340.0],
            "Qch(tons)": [300.0, 320.0, 310.0],
            "Qin(MMBtu/h)": [8.0, 8.5, 8.3]
        }"#;

        let dataset: EquipmentDataset = serde_json::from_str(json).unwrap();

        assert_eq!(dataset.kind(), "absorption_chiller");
        let EquipmentDataset::AbsorptionChiller(chiller) = &dataset else {
            panic!("expected chiller dataset");
        };
        assert_eq!(chiller.len(), Ok(3));

        let round_trip: serde_json::Value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(round_trip["equipment"], "absorption_chiller");
    }
}
