use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::kilowatt,
    thermodynamic_temperature::{degree_fahrenheit, kelvin},
};

use crate::{
    models::component::{TrainError, aligned_len},
    support::units::heat_rate,
};

use super::ChillerSample;

/// Historical absorption chiller operating data.
///
/// Column-oriented, with the field names and units used by plant logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbsorptionChillerDataset {
    /// Chilled-water supply temperature, °F.
    #[serde(rename = "Tcho(F)")]
    pub chilled_water_temperature_f: Vec<f64>,

    /// Condenser-water inlet temperature, °F.
    #[serde(rename = "Tcdi(F)")]
    pub condenser_inlet_temperature_f: Vec<f64>,

    /// Generator hot-water inlet temperature, °F.
    #[serde(rename = "Tgei(F)")]
    pub generator_inlet_temperature_f: Vec<f64>,

    /// Cooling output, tons of refrigeration.
    #[serde(rename = "Qch(tons)")]
    pub cooling_output_tons: Vec<f64>,

    /// Generator heat input, MMBtu/h.
    #[serde(rename = "Qin(MMBtu/h)")]
    pub heat_input_mmbtu_per_hour: Vec<f64>,
}

impl AbsorptionChillerDataset {
    /// Returns the number of observations, if the columns are aligned.
    ///
    /// # Errors
    ///
    /// Returns [`TrainError::MalformedDataset`] if a column is empty or the
    /// columns have different lengths.
    pub fn len(&self) -> Result<usize, TrainError> {
        aligned_len(&[
            ("Tcho(F)", self.chilled_water_temperature_f.len()),
            ("Tcdi(F)", self.condenser_inlet_temperature_f.len()),
            ("Tgei(F)", self.generator_inlet_temperature_f.len()),
            ("Qch(tons)", self.cooling_output_tons.len()),
            ("Qin(MMBtu/h)", self.heat_input_mmbtu_per_hour.len()),
        ])
    }

    /// Returns `true` if the dataset has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chilled_water_temperature_f.is_empty()
    }

    /// Keeps only the first `len` observations of every column.
    pub fn truncate(&mut self, len: usize) {
        self.chilled_water_temperature_f.truncate(len);
        self.condenser_inlet_temperature_f.truncate(len);
        self.generator_inlet_temperature_f.truncate(len);
        self.cooling_output_tons.truncate(len);
        self.heat_input_mmbtu_per_hour.truncate(len);
    }

    /// Converts every observation to SI quantities, validating as it goes.
    pub(super) fn samples(&self) -> Result<Vec<ChillerSample>, TrainError> {
        let len = self.len()?;

        (0..len)
            .map(|i| -> Result<ChillerSample, TrainError> {
                let temperature = |column: &str, value: f64| {
                    let t = ThermodynamicTemperature::new::<degree_fahrenheit>(value);
                    let k = t.get::<kelvin>();
                    if k.is_finite() && k > 0.0 {
                        Ok(t)
                    } else {
                        Err(TrainError::malformed(format!(
                            "{column} sample {i} is {value} °F, not a valid temperature"
                        )))
                    }
                };
                let rate = |column: &str, power: Power| {
                    let kw = power.get::<kilowatt>();
                    if kw.is_finite() && kw >= 0.0 {
                        Ok(power)
                    } else {
                        Err(TrainError::malformed(format!(
                            "{column} sample {i} is {kw} kW, must be non-negative"
                        )))
                    }
                };

                Ok(ChillerSample {
                    chilled_water_temperature: temperature(
                        "Tcho(F)",
                        self.chilled_water_temperature_f[i],
                    )?,
                    condenser_inlet_temperature: temperature(
                        "Tcdi(F)",
                        self.condenser_inlet_temperature_f[i],
                    )?,
                    generator_inlet_temperature: temperature(
                        "Tgei(F)",
                        self.generator_inlet_temperature_f[i],
                    )?,
                    cooling_output: rate(
                        "Qch(tons)",
                        heat_rate::from_tons(self.cooling_output_tons[i]),
                    )?,
                    heat_input: rate(
                        "Qin(MMBtu/h)",
                        heat_rate::from_mmbtu_per_hour(self.heat_input_mmbtu_per_hour[i]),
                    )?,
                })
            })
            .collect()
    }
}
