//! Fits wheel coefficients to historical trend logs.
//!
//! Only samples where the wheel can do useful work inform the enthalpy
//! regression: the supply fan must be running and the outdoor air must be
//! more humid than saturated air leaving the cooling coil. The
//! regeneration-coil temperature drop is learned separately from samples
//! with the fan running and the hot-water valve open.

use tracing::{debug, info, warn};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Ratio, ThermodynamicTemperature},
    ratio::{percent, ratio},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::{
    models::component::TrainError,
    support::{
        psychrometrics::{HumidAirProperties, HumidAirState},
        regression,
    },
};

use super::{
    CoilDropCoefficients, DesiccantWheelConfig, DesiccantWheelDataset, EnthalpyChangeCoefficients,
    FanStatus, WheelCoefficients, minimum_useful_state,
};

impl WheelCoefficients {
    /// Fits wheel coefficients to a historical dataset.
    ///
    /// If the outdoor-air flow never varies in the qualifying samples, its
    /// effect can't be separated from the intercept: the flow term is fixed
    /// at zero and the remaining terms are fitted.
    ///
    /// # Errors
    ///
    /// Returns a [`TrainError`] if the dataset is malformed, a sample's
    /// humid-air state can't be evaluated, or either regression is
    /// degenerate (including too few qualifying samples).
    pub fn train(
        dataset: &DesiccantWheelDataset,
        config: &DesiccantWheelConfig,
        properties: &impl HumidAirProperties,
    ) -> Result<Self, TrainError> {
        let len = dataset.len()?;
        let minimum = minimum_useful_state(properties, config.atmospheric_pressure)?;

        let mut outdoor_states = Vec::with_capacity(len);
        for i in 0..len {
            let state = if FanStatus::from_signal(dataset.fan_status[i]).is_on() {
                Some(humid_air_state(
                    properties,
                    config,
                    dataset.outdoor_temperature_c[i],
                    dataset.outdoor_relative_humidity[i],
                )?)
            } else {
                None
            };
            outdoor_states.push(state);
        }

        let enthalpy_change =
            fit_enthalpy_change(dataset, config, properties, &outdoor_states, &minimum)?;
        let coil_drop = fit_coil_drop(dataset, config, &outdoor_states)?;

        Ok(Self {
            enthalpy_change,
            coil_drop,
        })
    }
}

fn humid_air_state(
    properties: &impl HumidAirProperties,
    config: &DesiccantWheelConfig,
    temperature_c: f64,
    relative_humidity: f64,
) -> Result<HumidAirState, TrainError> {
    Ok(properties.humid_air_state(
        ThermodynamicTemperature::new::<degree_celsius>(temperature_c),
        config.atmospheric_pressure,
        Ratio::new::<ratio>(relative_humidity),
    )?)
}

fn fit_enthalpy_change(
    dataset: &DesiccantWheelDataset,
    config: &DesiccantWheelConfig,
    properties: &impl HumidAirProperties,
    outdoor_states: &[Option<HumidAirState>],
    minimum: &HumidAirState,
) -> Result<EnthalpyChangeCoefficients, TrainError> {
    let mut features = Vec::new();
    let mut responses = Vec::new();

    for (i, state) in outdoor_states.iter().enumerate() {
        let Some(outdoor) = state else { continue };
        if outdoor.humidity_ratio <= minimum.humidity_ratio {
            continue;
        }

        let supply = humid_air_state(
            properties,
            config,
            dataset.supply_air_temperature_c[i],
            dataset.supply_air_relative_humidity[i],
        )?;

        let h_oa = outdoor.enthalpy.get::<joule_per_kilogram>();
        let h_sa = supply.enthalpy.get::<joule_per_kilogram>();

        features.push([
            dataset.outdoor_air_flow_cfm[i],
            h_oa,
            h_oa * h_oa,
            dataset.hot_water_supply_temperature_c[i],
        ]);
        responses.push(h_sa - h_oa);
    }

    if features.len() < outdoor_states.len() {
        debug!(
            used = features.len(),
            skipped = outdoor_states.len() - features.len(),
            "filtered wheel samples with the fan off or dry outdoor air"
        );
    }

    let constant_flow = features
        .first()
        .is_some_and(|first| features.iter().all(|row| row[0] == first[0]));

    let coefficients = if constant_flow {
        info!(
            cfm = features[0][0],
            "outdoor-air flow is constant, fixing its coefficient at zero"
        );
        let reduced: Vec<[f64; 3]> = features.iter().map(|&[_, h, h2, t]| [h, h2, t]).collect();
        let fit = regression::fit(&reduced, &responses)?;
        EnthalpyChangeCoefficients {
            intercept: fit.intercept,
            outdoor_air_flow: 0.0,
            enthalpy: fit.slopes[0],
            enthalpy_squared: fit.slopes[1],
            hot_water_temperature: fit.slopes[2],
        }
    } else {
        let fit = regression::fit(&features, &responses)?;
        EnthalpyChangeCoefficients {
            intercept: fit.intercept,
            outdoor_air_flow: fit.slopes[0],
            enthalpy: fit.slopes[1],
            enthalpy_squared: fit.slopes[2],
            hot_water_temperature: fit.slopes[3],
        }
    };

    info!(
        samples = features.len(),
        intercept = coefficients.intercept,
        outdoor_air_flow = coefficients.outdoor_air_flow,
        enthalpy = coefficients.enthalpy,
        enthalpy_squared = coefficients.enthalpy_squared,
        hot_water_temperature = coefficients.hot_water_temperature,
        "trained wheel enthalpy-change coefficients"
    );

    Ok(coefficients)
}

fn fit_coil_drop(
    dataset: &DesiccantWheelDataset,
    config: &DesiccantWheelConfig,
    outdoor_states: &[Option<HumidAirState>],
) -> Result<Option<CoilDropCoefficients>, TrainError> {
    let Some((outlet, valve)) = dataset.coil_columns() else {
        debug!(
            default_k = config.default_coil_delta_t.get::<delta_kelvin>(),
            "no regeneration-coil columns, using the default temperature drop"
        );
        return Ok(None);
    };

    let min_valve = config.min_valve_command.get::<percent>();
    let mut enthalpies = Vec::new();
    let mut drops = Vec::new();

    for (i, state) in outdoor_states.iter().enumerate() {
        let Some(outdoor) = state else { continue };
        if valve[i] <= min_valve {
            continue;
        }
        enthalpies.push(outdoor.enthalpy.get::<joule_per_kilogram>());
        drops.push(dataset.hot_water_supply_temperature_c[i] - outlet[i]);
    }

    if enthalpies.is_empty() {
        warn!(
            min_valve,
            "no samples with the fan on and an open hot-water valve, using the default coil drop"
        );
        return Ok(None);
    }

    let fit = regression::fit_simple(&enthalpies, &drops)?;
    let coefficients = CoilDropCoefficients {
        intercept: fit.intercept,
        enthalpy: fit.slopes[0],
    };

    info!(
        samples = enthalpies.len(),
        intercept_k = coefficients.intercept,
        per_enthalpy = coefficients.enthalpy,
        "trained regeneration-coil temperature drop"
    );

    Ok(Some(coefficients))
}
