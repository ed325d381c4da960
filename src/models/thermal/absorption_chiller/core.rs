//! Gordon–Ng universal chiller model.
//!
//! The Gordon–Ng relation for a heat-driven chiller, written in the form used
//! here, is
//!
//! ```text
//! Q_in·(T_g − T_cd)/T_g − Q_ch·(T_g − T_ch)/T_ch = a0 + a1·(T_cd/T_g)
//! ```
//!
//! with absolute temperatures `T_ch` (chilled-water outlet), `T_cd`
//! (condenser-water inlet), and `T_g` (generator inlet), generator heat input
//! `Q_in`, and cooling output `Q_ch`. The left-hand side is linear in the
//! loss coefficients `a0` and `a1`, so training is a simple regression
//! against `T_cd/T_g`. Prediction solves the same relation for `Q_ch`.

mod config;
mod dataset;
mod setpoints;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::AbsorptionChillerConfig;
pub use dataset::AbsorptionChillerDataset;
pub use setpoints::AbsorptionChillerSetpoints;

use tracing::{debug, info};
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::kilowatt,
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::component::{PredictError, TrainError},
    support::{regression, units::TemperatureDifference},
};

/// Fitted Gordon–Ng loss coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GordonNg {
    /// Constant loss term.
    pub a0: Power,

    /// Loss term scaling with the condenser-to-generator temperature ratio.
    pub a1: Power,
}

impl GordonNg {
    /// Fits the loss coefficients to a historical dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`TrainError`] if the dataset is empty, has misaligned or
    /// non-physical samples, or if the temperature ratio does not vary
    /// across samples.
    pub fn train(dataset: &AbsorptionChillerDataset) -> Result<Self, TrainError> {
        let samples = dataset.samples()?;

        let (x, y): (Vec<f64>, Vec<f64>) = samples
            .iter()
            .map(|sample| {
                let t_ch = sample.chilled_water_temperature.get::<kelvin>();
                let t_cd = sample.condenser_inlet_temperature.get::<kelvin>();
                let t_g = sample.generator_inlet_temperature.get::<kelvin>();
                let q_ch = sample.cooling_output.get::<kilowatt>();
                let q_in = sample.heat_input.get::<kilowatt>();

                // Equals ((T_g − T_cd)/(T_g·COP) − (T_g − T_ch)/T_ch)·Q_ch whenever
                // Q_ch > 0, and stays finite for idle samples.
                let response = q_in * (t_g - t_cd) / t_g - q_ch * (t_g - t_ch) / t_ch;
                (t_cd / t_g, response)
            })
            .unzip();

        let fit = regression::fit_simple(&x, &y)?;

        let coefficients = Self {
            a0: Power::new::<kilowatt>(fit.intercept),
            a1: Power::new::<kilowatt>(fit.slopes[0]),
        };

        let cops: Vec<f64> = samples.iter().filter_map(ChillerSample::cop).collect();
        if !cops.is_empty() {
            #[allow(clippy::cast_precision_loss)]
            let mean_cop = cops.iter().sum::<f64>() / cops.len() as f64;
            debug!(
                mean_cop,
                active_samples = cops.len(),
                "historical chiller COP"
            );
        }

        info!(
            samples = samples.len(),
            a0_kw = fit.intercept,
            a1_kw = fit.slopes[0],
            "trained Gordon-Ng coefficients"
        );

        Ok(coefficients)
    }

    /// Solves the Gordon–Ng relation for cooling output at an operating point.
    ///
    /// # Errors
    ///
    /// Returns [`PredictError::DegenerateOperatingPoint`] if the generator
    /// temperature is within `config.min_temperature_difference` of the
    /// chilled-water or condenser temperature, if any temperature is not a
    /// positive absolute temperature, or if the result is not finite.
    pub fn cooling_capacity(
        &self,
        point: &AbsorptionChillerSetpoints,
        config: &AbsorptionChillerConfig,
    ) -> Result<Power, PredictError> {
        let t_ch = point.chilled_water_temperature;
        let t_cd = point.condenser_inlet_temperature;
        let t_g = point.generator_inlet_temperature;

        for (name, t) in [
            ("chilled-water", t_ch),
            ("condenser-inlet", t_cd),
            ("generator-inlet", t_g),
        ] {
            let k = t.get::<kelvin>();
            if !(k.is_finite() && k > 0.0) {
                return Err(PredictError::degenerate(format!(
                    "{name} temperature {k} K is not a positive absolute temperature"
                )));
            }
        }

        let tol = config.min_temperature_difference;
        if t_g.minus(t_ch).abs() < tol {
            return Err(PredictError::degenerate(
                "generator-inlet temperature equals chilled-water temperature",
            ));
        }
        if t_g.minus(t_cd).abs() < tol {
            return Err(PredictError::degenerate(
                "generator-inlet temperature equals condenser-inlet temperature",
            ));
        }

        let t_ch = t_ch.get::<kelvin>();
        let t_cd = t_cd.get::<kelvin>();
        let t_g = t_g.get::<kelvin>();
        let q_in = point.heat_input.get::<kilowatt>();
        let a0 = self.a0.get::<kilowatt>();
        let a1 = self.a1.get::<kilowatt>();

        let q_ch = (q_in * (t_g - t_cd) / t_g - a0 - a1 * (t_cd / t_g)) / ((t_g - t_ch) / t_ch);
        if !q_ch.is_finite() {
            return Err(PredictError::degenerate(format!(
                "cooling output evaluated to {q_ch}"
            )));
        }

        Ok(Power::new::<kilowatt>(q_ch))
    }
}

/// One historical chiller observation in SI quantities.
#[derive(Debug, Clone, Copy)]
pub(super) struct ChillerSample {
    pub(super) chilled_water_temperature: ThermodynamicTemperature,
    pub(super) condenser_inlet_temperature: ThermodynamicTemperature,
    pub(super) generator_inlet_temperature: ThermodynamicTemperature,
    pub(super) cooling_output: Power,
    pub(super) heat_input: Power,
}

impl ChillerSample {
    /// Cooling output over heat input, if the chiller was running.
    fn cop(&self) -> Option<f64> {
        let q_in = self.heat_input.get::<kilowatt>();
        (q_in > 0.0).then(|| self.cooling_output.get::<kilowatt>() / q_in)
    }
}
