use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

/// Configuration for an absorption chiller model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AbsorptionChillerConfig {
    /// Smallest generator-to-chilled-water or generator-to-condenser
    /// temperature difference accepted at prediction time.
    ///
    /// Closer operating points are rejected as degenerate.
    pub min_temperature_difference: TemperatureInterval,
}

impl Default for AbsorptionChillerConfig {
    fn default() -> Self {
        Self {
            min_temperature_difference: TemperatureInterval::new::<delta_kelvin>(1e-6),
        }
    }
}
