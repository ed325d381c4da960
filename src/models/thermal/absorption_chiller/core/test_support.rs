use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::kilowatt,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::support::units::heat_rate;

use super::{
    AbsorptionChillerConfig, AbsorptionChillerDataset, AbsorptionChillerSetpoints, GordonNg,
};

pub(crate) fn reference_coefficients() -> GordonNg {
    GordonNg {
        a0: Power::new::<kilowatt>(50.0),
        a1: Power::new::<kilowatt>(100.0),
    }
}

/// Builds a dataset whose cooling outputs follow `coefficients` exactly.
pub(crate) fn synthetic_dataset(coefficients: GordonNg) -> AbsorptionChillerDataset {
    let config = AbsorptionChillerConfig::default();
    let fahrenheit = ThermodynamicTemperature::new::<degree_fahrenheit>;
    let mut dataset = AbsorptionChillerDataset::default();

    for (i, &t_cd) in [78.0, 81.5, 83.7, 86.0, 89.0].iter().enumerate() {
        for (j, &t_g) in [310.0, 325.0, 335.0, 350.0].iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let t_ch = 44.0 + 0.4 * ((i + j) % 4) as f64;
            #[allow(clippy::cast_precision_loss)]
            let q_in = 6.5 + 0.6 * (i * 4 + j) as f64 / 3.0;

            let point = AbsorptionChillerSetpoints {
                chilled_water_temperature: fahrenheit(t_ch),
                condenser_inlet_temperature: fahrenheit(t_cd),
                generator_inlet_temperature: fahrenheit(t_g),
                heat_input: heat_rate::from_mmbtu_per_hour(q_in),
            };
            let q_ch = coefficients
                .cooling_capacity(&point, &config)
                .expect("synthetic operating points are well posed");

            dataset.chilled_water_temperature_f.push(t_ch);
            dataset.condenser_inlet_temperature_f.push(t_cd);
            dataset.generator_inlet_temperature_f.push(t_g);
            dataset.cooling_output_tons.push(heat_rate::to_tons(q_ch));
            dataset.heat_input_mmbtu_per_hour.push(q_in);
        }
    }

    dataset
}
