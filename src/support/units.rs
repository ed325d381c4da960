//! Extensions to [`uom`].
//!
//! Public APIs in this crate use [`uom`] quantities. This module adds the
//! pieces equipment models need that [`uom`] does not provide directly:
//!
//! - [`SpecificEnthalpy`]: a J/kg quantity alias for humid-air enthalpy.
//! - [`TemperatureDifference`]: absolute temperature minus absolute temperature.
//! - [`heat_rate`]: the cooling-ton and MMBtu/h conversions used by plant data.

pub mod heat_rate;

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;

/// Specific enthalpy, J/kg in SI.
///
/// [`uom`] files J/kg under available energy; the alias names the role it
/// plays in psychrometric calculations.
pub type SpecificEnthalpy = uom::si::f64::AvailableEnergy;
