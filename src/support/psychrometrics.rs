//! Humid-air properties.
//!
//! Equipment models query humid-air properties through the
//! [`HumidAirProperties`] capability, so a property backend can be swapped
//! without touching model code. [`Ashrae`] is the built-in backend.

mod ashrae;
mod error;

pub use ashrae::{Ashrae, saturation_pressure};
pub use error::PropertyError;

use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::support::units::SpecificEnthalpy;

/// Enthalpy and humidity ratio of a moist-air sample.
///
/// Both are per unit mass of dry air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidAirState {
    /// Specific enthalpy of the mixture.
    pub enthalpy: SpecificEnthalpy,

    /// Mass of water vapor per mass of dry air.
    pub humidity_ratio: Ratio,
}

/// Capability for evaluating moist-air properties.
///
/// Implementations must be deterministic: the same inputs always produce the
/// same state.
pub trait HumidAirProperties {
    /// Returns the moist-air state at the given dry-bulb temperature,
    /// total pressure, and relative humidity.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the inputs are outside the backend's
    /// valid domain or the state cannot be evaluated.
    fn humid_air_state(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        relative_humidity: Ratio,
    ) -> Result<HumidAirState, PropertyError>;
}
