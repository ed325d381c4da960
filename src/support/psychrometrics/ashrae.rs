//! Ideal-mixture psychrometrics from the ASHRAE Handbook of Fundamentals.
//!
//! Moist air is treated as an ideal mixture of dry air and water vapor.
//! Saturation pressure uses the Hyland–Wexler correlations over ice (below
//! 0 °C) and over liquid water (0 °C to 200 °C).

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::units::SpecificEnthalpy;

use super::{HumidAirProperties, HumidAirState, PropertyError};

/// Ratio of the molar masses of water vapor and dry air.
const MOLAR_MASS_RATIO: f64 = 0.621_945;

/// Specific heat of dry air, kJ/kg·K.
const CP_DRY_AIR: f64 = 1.006;

/// Specific heat of water vapor, kJ/kg·K.
const CP_VAPOR: f64 = 1.86;

/// Enthalpy of vaporization at 0 °C, kJ/kg.
const H_VAPORIZATION: f64 = 2501.0;

const MIN_TEMPERATURE_K: f64 = 173.15;
const MAX_TEMPERATURE_K: f64 = 473.15;
const TRIPLE_POINT_K: f64 = 273.15;

/// Ideal-mixture humid-air property backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ashrae;

impl HumidAirProperties for Ashrae {
    fn humid_air_state(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        relative_humidity: Ratio,
    ) -> Result<HumidAirState, PropertyError> {
        let rh = relative_humidity.get::<ratio>();
        if !(0.0..=1.0).contains(&rh) {
            return Err(PropertyError::OutOfDomain {
                context: format!("relative humidity {rh} outside [0, 1]"),
            });
        }

        let p = pressure.get::<pascal>();
        if !(p.is_finite() && p > 0.0) {
            return Err(PropertyError::OutOfDomain {
                context: format!("total pressure {p} Pa must be positive"),
            });
        }

        let p_vapor = rh * saturation_pressure(temperature)?.get::<pascal>();
        if p_vapor >= p {
            return Err(PropertyError::Calculation {
                context: format!("vapor pressure {p_vapor} Pa reaches total pressure {p} Pa"),
            });
        }

        let w = MOLAR_MASS_RATIO * p_vapor / (p - p_vapor);
        let t = temperature.get::<degree_celsius>();
        let h = CP_DRY_AIR * t + w * (H_VAPORIZATION + CP_VAPOR * t);

        Ok(HumidAirState {
            enthalpy: SpecificEnthalpy::new::<kilojoule_per_kilogram>(h),
            humidity_ratio: Ratio::new::<ratio>(w),
        })
    }
}

/// Returns the saturation vapor pressure of water at `temperature`.
///
/// # Errors
///
/// Returns [`PropertyError::OutOfDomain`] outside −100 °C to 200 °C.
pub fn saturation_pressure(
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, PropertyError> {
    let t = temperature.get::<kelvin>();
    if !(MIN_TEMPERATURE_K..=MAX_TEMPERATURE_K).contains(&t) {
        return Err(PropertyError::OutOfDomain {
            context: format!("temperature {t} K outside saturation correlation range"),
        });
    }

    let ln_p = if t < TRIPLE_POINT_K {
        -5.674_535_9e3 / t + 6.392_524_7 - 9.677_843_0e-3 * t + 6.221_570_1e-7 * t.powi(2)
            + 2.074_782_5e-9 * t.powi(3)
            - 9.484_024_0e-13 * t.powi(4)
            + 4.163_501_9 * t.ln()
    } else {
        -5.800_220_6e3 / t + 1.391_499_3 - 4.864_023_9e-2 * t + 4.176_476_8e-5 * t.powi(2)
            - 1.445_209_3e-8 * t.powi(3)
            + 6.545_967_3 * t.ln()
    };

    Ok(Pressure::new::<pascal>(ln_p.exp()))
}
