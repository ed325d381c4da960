use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::kilowatt,
    thermodynamic_temperature::{degree_fahrenheit, kelvin},
};

use crate::{models::component::SetpointError, support::units::heat_rate};

/// Chilled-water outlet temperature setpoint, °F.
pub const DEFAULT_CHILLED_WATER_F: f64 = 45.8;

/// Condenser-water inlet temperature, °F.
pub const DEFAULT_CONDENSER_INLET_F: f64 = 83.7;

/// Generator hot-water inlet temperature, °F.
pub const DEFAULT_GENERATOR_INLET_F: f64 = 335.0;

/// Generator heat input, MMBtu/h.
pub const DEFAULT_HEAT_INPUT_MMBTU_PER_HOUR: f64 = 8.68;

/// Operating point of an absorption chiller.
///
/// Each field defaults independently (see the `DEFAULT_*` constants), so a
/// partial update is written with struct update syntax:
///
/// ```
/// use dispatch_models::models::thermal::absorption_chiller::AbsorptionChillerSetpoints;
/// use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};
///
/// let setpoints = AbsorptionChillerSetpoints {
///     generator_inlet_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(320.0),
///     ..AbsorptionChillerSetpoints::default()
/// };
/// # let _ = setpoints;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsorptionChillerSetpoints {
    /// Chilled-water supply temperature leaving the evaporator.
    pub chilled_water_temperature: ThermodynamicTemperature,

    /// Condenser-water temperature entering from heat rejection.
    pub condenser_inlet_temperature: ThermodynamicTemperature,

    /// Hot-water temperature entering the generator.
    pub generator_inlet_temperature: ThermodynamicTemperature,

    /// Heat delivered to the generator.
    pub heat_input: Power,
}

impl Default for AbsorptionChillerSetpoints {
    fn default() -> Self {
        let fahrenheit = ThermodynamicTemperature::new::<degree_fahrenheit>;
        Self {
            chilled_water_temperature: fahrenheit(DEFAULT_CHILLED_WATER_F),
            condenser_inlet_temperature: fahrenheit(DEFAULT_CONDENSER_INLET_F),
            generator_inlet_temperature: fahrenheit(DEFAULT_GENERATOR_INLET_F),
            heat_input: heat_rate::from_mmbtu_per_hour(DEFAULT_HEAT_INPUT_MMBTU_PER_HOUR),
        }
    }
}

impl AbsorptionChillerSetpoints {
    /// Checks that every reading is physically meaningful.
    pub(crate) fn validate(&self) -> Result<(), SetpointError> {
        for (field, t) in [
            ("chilled_water_temperature", self.chilled_water_temperature),
            ("condenser_inlet_temperature", self.condenser_inlet_temperature),
            ("generator_inlet_temperature", self.generator_inlet_temperature),
        ] {
            let k = t.get::<kelvin>();
            if !(k.is_finite() && k > 0.0) {
                return Err(SetpointError::OutOfRange {
                    field,
                    context: format!("{k} K is not a positive absolute temperature"),
                });
            }
        }

        let q_in = self.heat_input.get::<kilowatt>();
        if !(q_in.is_finite() && q_in >= 0.0) {
            return Err(SetpointError::OutOfRange {
                field: "heat_input",
                context: format!("{q_in} kW must be non-negative"),
            });
        }

        Ok(())
    }
}
