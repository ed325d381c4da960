use uom::si::{
    f64::{Ratio, ThermodynamicTemperature, VolumeRate},
    ratio::ratio,
    thermodynamic_temperature::{degree_celsius, kelvin},
    volume_rate::{cubic_foot_per_minute, cubic_meter_per_second},
};

use crate::models::component::SetpointError;

/// Outdoor-air dry-bulb temperature, °C.
pub const DEFAULT_OUTDOOR_TEMPERATURE_C: f64 = 32.0;

/// Outdoor-air relative humidity, as a fraction.
pub const DEFAULT_OUTDOOR_RELATIVE_HUMIDITY: f64 = 0.6;

/// Minimum outdoor-air flow while the fan runs, CFM.
pub const DEFAULT_OUTDOOR_AIR_FLOW_CFM: f64 = 1000.0;

/// Hot-water loop supply temperature, °C.
pub const DEFAULT_HOT_WATER_SUPPLY_C: f64 = 46.1;

/// Air-handling unit supply fan status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FanStatus {
    /// Running; the wheel treats outdoor air.
    #[default]
    On,

    /// Stopped; the wheel is idle.
    Off,
}

impl FanStatus {
    /// Interprets a logged fan signal: any positive value means running.
    #[must_use]
    pub fn from_signal(signal: f64) -> Self {
        if signal > 0.0 { Self::On } else { Self::Off }
    }

    /// Returns `true` if the fan is running.
    #[must_use]
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Current readings for a desiccant wheel.
///
/// Each field defaults independently (see the `DEFAULT_*` constants).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesiccantWheelSetpoints {
    /// Outdoor-air dry-bulb temperature.
    pub outdoor_temperature: ThermodynamicTemperature,

    /// Outdoor-air relative humidity.
    pub outdoor_relative_humidity: Ratio,

    /// Outdoor-air volumetric flow through the wheel.
    pub outdoor_air_flow: VolumeRate,

    /// Supply fan status.
    pub fan: FanStatus,

    /// Hot-water loop supply temperature at the regeneration coil.
    pub hot_water_supply_temperature: ThermodynamicTemperature,
}

impl Default for DesiccantWheelSetpoints {
    fn default() -> Self {
        let celsius = ThermodynamicTemperature::new::<degree_celsius>;
        let flow = VolumeRate::new::<cubic_foot_per_minute>(DEFAULT_OUTDOOR_AIR_FLOW_CFM);
        Self {
            outdoor_temperature: celsius(DEFAULT_OUTDOOR_TEMPERATURE_C),
            outdoor_relative_humidity: Ratio::new::<ratio>(DEFAULT_OUTDOOR_RELATIVE_HUMIDITY),
            outdoor_air_flow: flow,
            fan: FanStatus::On,
            hot_water_supply_temperature: celsius(DEFAULT_HOT_WATER_SUPPLY_C),
        }
    }
}

impl DesiccantWheelSetpoints {
    /// Checks that every reading is physically meaningful.
    pub(crate) fn validate(&self) -> Result<(), SetpointError> {
        for (field, t) in [
            ("outdoor_temperature", self.outdoor_temperature),
            ("hot_water_supply_temperature", self.hot_water_supply_temperature),
        ] {
            let k = t.get::<kelvin>();
            if !(k.is_finite() && k > 0.0) {
                return Err(SetpointError::OutOfRange {
                    field,
                    context: format!("{k} K is not a positive absolute temperature"),
                });
            }
        }

        let rh = self.outdoor_relative_humidity.get::<ratio>();
        if !(0.0..=1.0).contains(&rh) {
            return Err(SetpointError::OutOfRange {
                field: "outdoor_relative_humidity",
                context: format!("{rh} outside [0, 1]"),
            });
        }

        let flow = self.outdoor_air_flow.get::<cubic_meter_per_second>();
        if !(flow.is_finite() && flow >= 0.0) {
            return Err(SetpointError::OutOfRange {
                field: "outdoor_air_flow",
                context: format!("{flow} m³/s must be non-negative"),
            });
        }

        Ok(())
    }
}
