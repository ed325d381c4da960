use uom::si::{
    f64::{Power, Pressure, Ratio, SpecificHeatCapacity, TemperatureInterval},
    power::watt,
    pressure::pascal,
    ratio::percent,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};

/// Configuration for a desiccant wheel model.
///
/// The defaults describe a typical packaged desiccant system at sea level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesiccantWheelConfig {
    /// Electric power drawn by the wheel and heat-recovery motors while the
    /// wheel is producing useful cooling.
    pub wheel_power: Power,

    /// Hot-water temperature drop across the regeneration coil when it is not
    /// learned from historical outlet temperatures.
    pub default_coil_delta_t: TemperatureInterval,

    /// Specific heat of the hot-water loop.
    pub water_specific_heat: SpecificHeatCapacity,

    /// Total pressure of the air streams.
    pub atmospheric_pressure: Pressure,

    /// Valve command above which a historical sample is used to learn the
    /// regeneration-coil temperature drop.
    pub min_valve_command: Ratio,
}

impl Default for DesiccantWheelConfig {
    fn default() -> Self {
        Self {
            wheel_power: Power::new::<watt>(300.0),
            default_coil_delta_t: TemperatureInterval::new::<delta_kelvin>(5.0),
            water_specific_heat: SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(4.186),
            atmospheric_pressure: Pressure::new::<pascal>(101_325.0),
            min_valve_command: Ratio::new::<percent>(0.0),
        }
    }
}
