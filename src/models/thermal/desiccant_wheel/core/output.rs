use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassRate, Power, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::{models::component::Prediction, support::units::SpecificEnthalpy};

/// Prediction key for cooling-load reduction, W.
pub const COOLING_LOAD_KEY: &str = "cooling_load_W";

/// Prediction key for hot-water heat input, W.
pub const HEAT_INPUT_KEY: &str = "heat_input_W";

/// Prediction key for electric power, W.
pub const ELECTRIC_POWER_KEY: &str = "electric_power_W";

/// Prediction key for hot-water mass flow, kg/s.
pub const HOT_WATER_FLOW_KEY: &str = "hot_water_mass_flow_kg_s";

/// Prediction key for hot-water outlet temperature, °C.
pub const HOT_WATER_OUTLET_KEY: &str = "hot_water_outlet_temp_C";

/// Prediction key for supply-air enthalpy after the wheel, J/kg.
pub const SUPPLY_ENTHALPY_KEY: &str = "supply_air_enthalpy_J_kg";

/// Desiccant wheel performance at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelOutput {
    /// Reduction in downstream cooling-coil load.
    pub cooling_load_reduction: Power,

    /// Heat drawn from the hot-water loop for regeneration.
    pub heat_input: Power,

    /// Hot-water mass flow through the regeneration coil.
    pub hot_water_mass_flow: MassRate,

    /// Hot-water temperature leaving the regeneration coil.
    pub hot_water_outlet_temperature: ThermodynamicTemperature,

    /// Electric power drawn by the wheel motors.
    pub electric_power: Power,

    /// Enthalpy of the outdoor-air stream after the wheel.
    pub supply_air_enthalpy: SpecificEnthalpy,
}

impl WheelOutput {
    /// Flattens this output into named values for the dispatch optimizer.
    #[must_use]
    pub fn to_prediction(&self) -> Prediction {
        [
            (COOLING_LOAD_KEY, self.cooling_load_reduction.get::<watt>()),
            (HEAT_INPUT_KEY, self.heat_input.get::<watt>()),
            (ELECTRIC_POWER_KEY, self.electric_power.get::<watt>()),
            (
                HOT_WATER_FLOW_KEY,
                self.hot_water_mass_flow.get::<kilogram_per_second>(),
            ),
            (
                HOT_WATER_OUTLET_KEY,
                self.hot_water_outlet_temperature.get::<degree_celsius>(),
            ),
            (
                SUPPLY_ENTHALPY_KEY,
                self.supply_air_enthalpy.get::<joule_per_kilogram>(),
            ),
        ]
        .into_iter()
        .collect()
    }
}
