//! Thermal plant equipment.
//!
//! This module contains models for heat-driven cooling equipment: absorption
//! chillers and desiccant dehumidification wheels.

pub mod absorption_chiller;
pub mod desiccant_wheel;
