//! Desiccant wheel prediction equations and training pipeline.
//!
//! The wheel is modeled by the enthalpy change it imparts to the outdoor-air
//! stream, regressed on outdoor-air flow, outdoor-air enthalpy (linear and
//! squared), and hot-water supply temperature. Useful dehumidification stops
//! at saturated air leaving a cooling coil at 11.67 °C (53 °F): the wheel does
//! nothing for air already drier than that, and never dries the supply air
//! below that enthalpy.
//!
//! All regressions work in J/kg for enthalpy, CFM for air flow, and °C for
//! temperatures.

mod config;
mod dataset;
mod output;
mod setpoints;
mod train;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::DesiccantWheelConfig;
pub use dataset::DesiccantWheelDataset;
pub use output::{
    COOLING_LOAD_KEY, ELECTRIC_POWER_KEY, HEAT_INPUT_KEY, HOT_WATER_FLOW_KEY, HOT_WATER_OUTLET_KEY,
    SUPPLY_ENTHALPY_KEY, WheelOutput,
};
pub use setpoints::{
    DEFAULT_HOT_WATER_SUPPLY_C, DEFAULT_OUTDOOR_AIR_FLOW_CFM, DEFAULT_OUTDOOR_RELATIVE_HUMIDITY,
    DEFAULT_OUTDOOR_TEMPERATURE_C, DesiccantWheelSetpoints, FanStatus,
};

use tracing::debug;
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassRate, Power, Pressure, Ratio, TemperatureInterval, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_foot_per_minute,
};

use crate::{
    models::component::PredictError,
    support::{
        psychrometrics::{HumidAirProperties, HumidAirState, PropertyError},
        units::SpecificEnthalpy,
    },
};

/// Cooling-coil leaving-air temperature in dehumidification mode, °C.
pub const COIL_SETPOINT_C: f64 = 11.67;

/// Cubic feet per cubic meter, as 3.28³ to match how trend-log flows are
/// converted upstream.
const CUBIC_FEET_PER_CUBIC_METER: f64 = 3.28 * 3.28 * 3.28;

/// Fitted coefficients of a desiccant wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelCoefficients {
    /// Enthalpy change imparted to the outdoor-air stream.
    pub enthalpy_change: EnthalpyChangeCoefficients,

    /// Regeneration-coil hot-water temperature drop, if learned.
    pub coil_drop: Option<CoilDropCoefficients>,
}

/// Linear model of the outdoor-air enthalpy change across the wheel, J/kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnthalpyChangeCoefficients {
    /// Constant term, J/kg.
    pub intercept: f64,

    /// Outdoor-air flow term, J/kg per CFM.
    pub outdoor_air_flow: f64,

    /// Outdoor-air enthalpy term, dimensionless.
    pub enthalpy: f64,

    /// Squared outdoor-air enthalpy term, kg/J.
    pub enthalpy_squared: f64,

    /// Hot-water supply temperature term, J/kg per °C.
    pub hot_water_temperature: f64,
}

impl EnthalpyChangeCoefficients {
    /// Evaluates the enthalpy change, in J/kg, before any physical clamping.
    #[must_use]
    pub fn evaluate(&self, flow_cfm: f64, enthalpy: f64, hot_water_c: f64) -> f64 {
        self.intercept
            + self.outdoor_air_flow * flow_cfm
            + self.enthalpy * enthalpy
            + self.enthalpy_squared * enthalpy * enthalpy
            + self.hot_water_temperature * hot_water_c
    }
}

/// Linear model of the regeneration-coil temperature drop, K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilDropCoefficients {
    /// Constant term, K.
    pub intercept: f64,

    /// Outdoor-air enthalpy term, K per J/kg.
    pub enthalpy: f64,
}

impl CoilDropCoefficients {
    /// Evaluates the temperature drop at an outdoor-air enthalpy.
    #[must_use]
    pub fn delta_t(&self, enthalpy: SpecificEnthalpy) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.intercept + self.enthalpy * enthalpy.get::<joule_per_kilogram>(),
        )
    }
}

/// Returns the saturated state leaving a dehumidifying cooling coil.
///
/// # Errors
///
/// Returns [`PropertyError`] if the property backend fails.
pub fn minimum_useful_state(
    properties: &impl HumidAirProperties,
    pressure: Pressure,
) -> Result<HumidAirState, PropertyError> {
    properties.humid_air_state(
        ThermodynamicTemperature::new::<degree_celsius>(COIL_SETPOINT_C),
        pressure,
        Ratio::new::<ratio>(1.0),
    )
}

/// Thermal COP (cooling-load reduction over regeneration heat) of the wheel.
///
/// Empirical fit of NREL/TP-550-36974, Figure 6.
#[must_use]
pub fn thermal_cop(humidity_ratio: f64, outdoor_c: f64) -> f64 {
    0.2482 + 4.171529 * humidity_ratio - 0.00019 * outdoor_c + 0.000115 * outdoor_c.powi(2)
}

/// Density of outdoor air in kg/m³ as a function of dry-bulb temperature in °C.
#[must_use]
pub fn air_density(outdoor_c: f64) -> f64 {
    0.0000175 * outdoor_c.powi(2) - 0.00487 * outdoor_c + 1.293
}

/// Predicts wheel performance at an operating point.
///
/// # Errors
///
/// Returns [`PredictError::Property`] if a humid-air evaluation fails, or
/// [`PredictError::DegenerateOperatingPoint`] if cooling is produced with a
/// non-positive thermal COP or coil temperature drop.
pub fn predict(
    coefficients: &WheelCoefficients,
    point: &DesiccantWheelSetpoints,
    config: &DesiccantWheelConfig,
    properties: &impl HumidAirProperties,
) -> Result<WheelOutput, PredictError> {
    let outdoor = properties.humid_air_state(
        point.outdoor_temperature,
        config.atmospheric_pressure,
        point.outdoor_relative_humidity,
    )?;
    let minimum = minimum_useful_state(properties, config.atmospheric_pressure)?;

    let fan_on = point.fan.is_on();
    let t_oa = point.outdoor_temperature.get::<degree_celsius>();
    let t_hw = point.hot_water_supply_temperature.get::<degree_celsius>();
    let w_oa = outdoor.humidity_ratio.get::<ratio>();
    let h_oa = outdoor.enthalpy.get::<joule_per_kilogram>();
    let h_min = minimum.enthalpy.get::<joule_per_kilogram>();

    let raw_delta_h = coefficients.enthalpy_change.evaluate(
        point.outdoor_air_flow.get::<cubic_foot_per_minute>(),
        h_oa,
        t_hw,
    );

    let delta_h = if !fan_on || outdoor.humidity_ratio <= minimum.humidity_ratio {
        0.0
    } else {
        let clamped = raw_delta_h.max(h_min - h_oa);
        if clamped != raw_delta_h {
            debug!(raw_delta_h, clamped, "clamped wheel enthalpy change");
        }
        clamped
    };

    let air_mass_flow = if fan_on {
        point.outdoor_air_flow.get::<cubic_foot_per_minute>() / CUBIC_FEET_PER_CUBIC_METER / 60.0
            * air_density(t_oa)
    } else {
        0.0
    };

    let cooling = if delta_h == 0.0 || air_mass_flow == 0.0 {
        0.0
    } else {
        -delta_h * air_mass_flow
    };

    let heat = if cooling == 0.0 {
        0.0
    } else {
        let cop = thermal_cop(w_oa, t_oa);
        if cop.is_nan() || cop <= 0.0 {
            return Err(PredictError::degenerate(format!(
                "thermal COP {cop} is not positive"
            )));
        }
        cooling / cop
    };

    let coil_drop = match coefficients.coil_drop {
        Some(coil) => coil.delta_t(outdoor.enthalpy),
        None => config.default_coil_delta_t,
    };
    let coil_delta_t = coil_drop.get::<delta_kelvin>();

    let hot_water_flow = if heat == 0.0 {
        0.0
    } else {
        if coil_delta_t.is_nan() || coil_delta_t <= 0.0 {
            return Err(PredictError::degenerate(format!(
                "regeneration coil temperature drop {coil_delta_t} K is not positive"
            )));
        }
        heat / (config.water_specific_heat.get::<joule_per_kilogram_kelvin>() * coil_delta_t)
    };

    let outlet_drop = if fan_on { coil_delta_t } else { 0.0 };

    let electric = if fan_on && cooling != 0.0 {
        config.wheel_power
    } else {
        Power::new::<watt>(0.0)
    };

    Ok(WheelOutput {
        cooling_load_reduction: Power::new::<watt>(cooling),
        heat_input: Power::new::<watt>(heat),
        hot_water_mass_flow: MassRate::new::<kilogram_per_second>(hot_water_flow),
        hot_water_outlet_temperature: point.hot_water_supply_temperature
            - TemperatureInterval::new::<delta_kelvin>(outlet_drop),
        electric_power: electric,
        supply_air_enthalpy: SpecificEnthalpy::new::<joule_per_kilogram>(h_oa + delta_h),
    })
}
