use serde::{Deserialize, Serialize};

use crate::models::component::{TrainError, aligned_len};

/// Historical desiccant wheel operating data.
///
/// Column-oriented, with the field names and units used by building
/// automation trend logs. The regeneration-coil columns are optional but
/// must be given together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesiccantWheelDataset {
    /// Outdoor-air dry-bulb temperature, °C.
    #[serde(rename = "T_OA(C)")]
    pub outdoor_temperature_c: Vec<f64>,

    /// Outdoor-air relative humidity, fraction.
    #[serde(rename = "RH_OA")]
    pub outdoor_relative_humidity: Vec<f64>,

    /// Outdoor-air flow, CFM.
    #[serde(rename = "CFM_OA")]
    pub outdoor_air_flow_cfm: Vec<f64>,

    /// Supply fan status, 1 = on, 0 = off.
    #[serde(rename = "Fan_Status")]
    pub fan_status: Vec<f64>,

    /// Hot-water supply temperature at the regeneration coil, °C.
    #[serde(rename = "T_HW(C)")]
    pub hot_water_supply_temperature_c: Vec<f64>,

    /// Process-air temperature leaving the wheel, °C.
    #[serde(rename = "T_SA(C)")]
    pub supply_air_temperature_c: Vec<f64>,

    /// Process-air relative humidity leaving the wheel, fraction.
    #[serde(rename = "RH_SA")]
    pub supply_air_relative_humidity: Vec<f64>,

    /// Hot-water temperature leaving the regeneration coil, °C.
    #[serde(
        rename = "T_HW_out(C)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hot_water_outlet_temperature_c: Option<Vec<f64>>,

    /// Regeneration-coil hot-water valve command, percent open.
    #[serde(
        rename = "HW_Valve(%)",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hot_water_valve_command_pct: Option<Vec<f64>>,
}

impl DesiccantWheelDataset {
    /// Returns the number of observations, if the columns are aligned.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::MalformedDataset`] if a column is empty, the
    /// columns have different lengths, or only one of the two
    /// regeneration-coil columns is present.
    pub fn len(&self) -> Result<usize, TrainError> {
        let mut columns = vec![
            ("T_OA(C)", self.outdoor_temperature_c.len()),
            ("RH_OA", self.outdoor_relative_humidity.len()),
            ("CFM_OA", self.outdoor_air_flow_cfm.len()),
            ("Fan_Status", self.fan_status.len()),
            ("T_HW(C)", self.hot_water_supply_temperature_c.len()),
            ("T_SA(C)", self.supply_air_temperature_c.len()),
            ("RH_SA", self.supply_air_relative_humidity.len()),
        ];

        match (
            &self.hot_water_outlet_temperature_c,
            &self.hot_water_valve_command_pct,
        ) {
            (Some(outlet), Some(valve)) => {
                columns.push(("T_HW_out(C)", outlet.len()));
                columns.push(("HW_Valve(%)", valve.len()));
            }
            (None, None) => {}
            (Some(_), None) => {
                return Err(TrainError::malformed(
                    "T_HW_out(C) given without HW_Valve(%)",
                ));
            }
            (None, Some(_)) => {
                return Err(TrainError::malformed(
                    "HW_Valve(%) given without T_HW_out(C)",
                ));
            }
        }

        aligned_len(&columns)
    }

    /// Returns `true` if the dataset has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outdoor_temperature_c.is_empty()
    }

    /// Returns the regeneration-coil columns, if both are present.
    pub(super) fn coil_columns(&self) -> Option<(&[f64], &[f64])> {
        match (
            &self.hot_water_outlet_temperature_c,
            &self.hot_water_valve_command_pct,
        ) {
            (Some(outlet), Some(valve)) => Some((outlet.as_slice(), valve.as_slice())),
            _ => None,
        }
    }
}
