use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::psychrometrics::{Ashrae, HumidAirProperties, saturation_pressure};

use super::{
    CoilDropCoefficients, DesiccantWheelDataset, EnthalpyChangeCoefficients, WheelCoefficients,
};

const PRESSURE_PA: f64 = 101_325.0;

pub(crate) fn reference_coefficients() -> WheelCoefficients {
    WheelCoefficients {
        enthalpy_change: EnthalpyChangeCoefficients {
            intercept: 12_000.0,
            outdoor_air_flow: -1.0,
            enthalpy: -0.1,
            enthalpy_squared: -2.0e-7,
            hot_water_temperature: -150.0,
        },
        coil_drop: None,
    }
}

pub(crate) fn reference_coil_drop() -> CoilDropCoefficients {
    CoilDropCoefficients {
        intercept: 2.0,
        enthalpy: 4.0e-5,
    }
}

/// Outdoor-air enthalpy in J/kg at sea level.
pub(crate) fn outdoor_enthalpy(temperature_c: f64, relative_humidity: f64) -> f64 {
    Ashrae
        .humid_air_state(
            ThermodynamicTemperature::new::<degree_celsius>(temperature_c),
            Pressure::new::<pascal>(PRESSURE_PA),
            Ratio::new::<ratio>(relative_humidity),
        )
        .expect("test conditions are in range")
        .enthalpy
        .get::<joule_per_kilogram>()
}

/// Relative humidity that gives `enthalpy` (J/kg) at `temperature_c`.
fn relative_humidity_for(temperature_c: f64, enthalpy: f64) -> f64 {
    let t = temperature_c;
    let w = (enthalpy / 1000.0 - 1.006 * t) / (2501.0 + 1.86 * t);
    assert!(w > 0.0, "{enthalpy} J/kg is below dry air at {t} °C");

    let p_vapor = w * PRESSURE_PA / (0.621_945 + w);
    let p_sat = saturation_pressure(ThermodynamicTemperature::new::<degree_celsius>(t))
        .expect("test temperatures are in range")
        .get::<pascal>();
    p_vapor / p_sat
}

/// Builds a trend log whose wheel enthalpy change follows `coefficients`.
///
/// The first 48 samples have the fan on and humid outdoor air. They're
/// followed by fan-off samples and dry-air samples whose supply readings
/// would wreck the fit if they weren't filtered out.
pub(crate) fn synthetic_dataset(
    coefficients: &EnthalpyChangeCoefficients,
) -> DesiccantWheelDataset {
    let mut dataset = DesiccantWheelDataset::default();
    let mut k = 0_u32;

    for &t_oa in &[26.0, 29.0, 32.0, 35.0] {
        for &rh_oa in &[0.5, 0.6, 0.7, 0.8] {
            for &t_hw in &[40.0, 46.1, 52.0] {
                let cfm = 800.0 + 50.0 * f64::from(k % 7);
                k += 1;

                let h_oa = outdoor_enthalpy(t_oa, rh_oa);
                let h_sa = h_oa + coefficients.evaluate(cfm, h_oa, t_hw);
                let t_sa = t_oa + 8.0;
                let rh_sa = relative_humidity_for(t_sa, h_sa);

                push(&mut dataset, [t_oa, rh_oa, cfm, 1.0, t_hw, t_sa, rh_sa]);
            }
        }
    }

    for &(t_oa, rh_oa) in &[(30.0, 0.7), (33.0, 0.55), (27.0, 0.8)] {
        push(&mut dataset, [t_oa, rh_oa, 0.0, 0.0, 46.1, t_oa, 0.95]);
    }

    for &(t_oa, rh_oa) in &[(20.0, 0.3), (15.0, 0.5), (24.0, 0.2)] {
        let t_sa = t_oa + 20.0;
        push(&mut dataset, [t_oa, rh_oa, 1000.0, 1.0, 46.1, t_sa, 0.01]);
    }

    dataset
}

fn push(dataset: &mut DesiccantWheelDataset, row: [f64; 7]) {
    let [t_oa, rh_oa, cfm, fan, t_hw, t_sa, rh_sa] = row;
    dataset.outdoor_temperature_c.push(t_oa);
    dataset.outdoor_relative_humidity.push(rh_oa);
    dataset.outdoor_air_flow_cfm.push(cfm);
    dataset.fan_status.push(fan);
    dataset.hot_water_supply_temperature_c.push(t_hw);
    dataset.supply_air_temperature_c.push(t_sa);
    dataset.supply_air_relative_humidity.push(rh_sa);
}

/// Adds regeneration-coil columns whose open-valve samples follow `coil`.
///
/// Every fifth sample has a closed valve and a nonsense outlet temperature.
pub(crate) fn with_coil_columns(
    mut dataset: DesiccantWheelDataset,
    coil: CoilDropCoefficients,
) -> DesiccantWheelDataset {
    let len = dataset.outdoor_temperature_c.len();
    let mut outlet = Vec::with_capacity(len);
    let mut valve = Vec::with_capacity(len);

    for i in 0..len {
        let t_hw = dataset.hot_water_supply_temperature_c[i];
        let fan_on = dataset.fan_status[i] > 0.0;

        if i % 5 == 4 {
            valve.push(0.0);
            outlet.push(t_hw + 3.0);
        } else if !fan_on {
            valve.push(50.0);
            outlet.push(t_hw - 30.0);
        } else {
            let h_oa = outdoor_enthalpy(
                dataset.outdoor_temperature_c[i],
                dataset.outdoor_relative_humidity[i],
            );
            valve.push(if i % 2 == 0 { 100.0 } else { 65.0 });
            outlet.push(t_hw - (coil.intercept + coil.enthalpy * h_oa));
        }
    }

    dataset.hot_water_outlet_temperature_c = Some(outlet);
    dataset.hot_water_valve_command_pct = Some(valve);
    dataset
}
