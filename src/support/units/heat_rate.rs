//! Heat-rate conversions used by plant operating data.
//!
//! Chiller logs record cooling in tons of refrigeration and generator heat
//! input in MMBtu/h. The factors below are the rounded values that data is
//! prepared with, not exact unit definitions.

use uom::si::{f64::Power, power::kilowatt};

/// Kilowatts per ton of refrigeration.
pub const KILOWATTS_PER_TON: f64 = 3.517;

/// Kilowatts per MMBtu/h.
pub const KILOWATTS_PER_MMBTU_PER_HOUR: f64 = 293.1;

/// Converts a cooling rate in tons of refrigeration to [`Power`].
#[must_use]
pub fn from_tons(tons: f64) -> Power {
    Power::new::<kilowatt>(tons * KILOWATTS_PER_TON)
}

/// Returns `power` in tons of refrigeration.
#[must_use]
pub fn to_tons(power: Power) -> f64 {
    power.get::<kilowatt>() / KILOWATTS_PER_TON
}

/// Converts a heat rate in MMBtu/h to [`Power`].
#[must_use]
pub fn from_mmbtu_per_hour(mmbtu_per_hour: f64) -> Power {
    Power::new::<kilowatt>(mmbtu_per_hour * KILOWATTS_PER_MMBTU_PER_HOUR)
}
