//! Grid-wide radiative update kernel
//!
//! Reads one snapshot of the ground and layer-0 atmosphere temperatures and
//! writes the next values into separate output buffers. Inputs are never
//! written, so every cell sees the same pre-step state regardless of the order
//! (or thread) in which cells are visited.
//!
//! With the `parallel` feature rows are distributed over the Rayon thread
//! pool. Cells are independent, so both paths produce identical results.

use crate::physics::radiation::{
    atmosphere_temperature_delta, ground_temperature_delta, RadiativeParams,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Read-only inputs of one radiative step, all row-major with equal length
#[derive(Debug, Clone, Copy)]
pub struct RadiativeInputs<'a> {
    /// Ground temperature (K)
    pub ground_temperature: &'a [f64],
    /// Layer-0 atmosphere temperature (K)
    pub atmosphere_temperature: &'a [f64],
    /// Solar flux for this step (W/m²)
    pub solar_flux: &'a [f64],
    /// Ground heat capacity (J/(m²·K))
    pub ground_heat_capacity: &'a [f64],
}

/// Compute next ground and layer-0 atmosphere temperatures for every cell.
///
/// # Arguments
///
/// * `inputs` - Pre-step snapshot
/// * `ground_out` - Receives the new ground temperature
/// * `atmosphere_out` - Receives the new layer-0 atmosphere temperature
/// * `width` - Row length (number of longitudes)
/// * `params` - Step parameters
///
/// # Panics
///
/// Panics if any buffer length differs from `inputs.ground_temperature.len()`.
pub fn step_radiative_cpu(
    inputs: RadiativeInputs<'_>,
    ground_out: &mut [f64],
    atmosphere_out: &mut [f64],
    width: usize,
    params: RadiativeParams,
) {
    let len = inputs.ground_temperature.len();
    assert!(
        inputs.atmosphere_temperature.len() == len
            && inputs.solar_flux.len() == len
            && inputs.ground_heat_capacity.len() == len
            && ground_out.len() == len
            && atmosphere_out.len() == len,
        "Radiative buffers must share one shape"
    );
    if len == 0 || width == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    ground_out
        .par_chunks_mut(width)
        .zip(atmosphere_out.par_chunks_mut(width))
        .enumerate()
        .for_each(|(y, (ground_row, atmos_row))| {
            update_row(&inputs, y * width, ground_row, atmos_row, params);
        });

    #[cfg(not(feature = "parallel"))]
    ground_out
        .chunks_mut(width)
        .zip(atmosphere_out.chunks_mut(width))
        .enumerate()
        .for_each(|(y, (ground_row, atmos_row))| {
            update_row(&inputs, y * width, ground_row, atmos_row, params);
        });
}

#[inline]
fn update_row(
    inputs: &RadiativeInputs<'_>,
    offset: usize,
    ground_row: &mut [f64],
    atmos_row: &mut [f64],
    params: RadiativeParams,
) {
    for (x, (ground, atmos)) in ground_row.iter_mut().zip(atmos_row.iter_mut()).enumerate() {
        let idx = offset + x;
        let t_ground = inputs.ground_temperature[idx];
        let t_atmos = inputs.atmosphere_temperature[idx];

        *ground = t_ground
            + ground_temperature_delta(
                inputs.solar_flux[idx],
                t_ground,
                t_atmos,
                inputs.ground_heat_capacity[idx],
                params,
            );
        *atmos = t_atmos + atmosphere_temperature_delta(t_ground, t_atmos, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PhysicalConstants;

    #[test]
    fn test_kernel_matches_cell_formulas() {
        let width = 3;
        let ground = [260.0, 270.0, 280.0, 290.0, 300.0, 310.0];
        let atmos = [250.0, 255.0, 260.0, 265.0, 270.0, 275.0];
        let solar = [0.0, 100.0, 400.0, 800.0, 1200.0, 1370.0];
        let capacity = [1e7; 6];
        let params = RadiativeParams::new(540.0, &PhysicalConstants::default());

        let mut ground_out = [0.0; 6];
        let mut atmos_out = [0.0; 6];
        step_radiative_cpu(
            RadiativeInputs {
                ground_temperature: &ground,
                atmosphere_temperature: &atmos,
                solar_flux: &solar,
                ground_heat_capacity: &capacity,
            },
            &mut ground_out,
            &mut atmos_out,
            width,
            params,
        );

        for i in 0..6 {
            let dg = ground_temperature_delta(solar[i], ground[i], atmos[i], capacity[i], params);
            let da = atmosphere_temperature_delta(ground[i], atmos[i], params);
            assert_eq!(ground_out[i], ground[i] + dg);
            assert_eq!(atmos_out[i], atmos[i] + da);
        }
    }

    #[test]
    fn test_kernel_uses_pre_step_snapshot() {
        // Atmosphere update must see the old ground temperature, not the new one
        let ground = [300.0];
        let atmos = [250.0];
        let params = RadiativeParams::new(540.0, &PhysicalConstants::default());
        let mut ground_out = [0.0];
        let mut atmos_out = [0.0];
        step_radiative_cpu(
            RadiativeInputs {
                ground_temperature: &ground,
                atmosphere_temperature: &atmos,
                solar_flux: &[1000.0],
                ground_heat_capacity: &[1e7],
            },
            &mut ground_out,
            &mut atmos_out,
            1,
            params,
        );
        let expected = 250.0 + atmosphere_temperature_delta(300.0, 250.0, params);
        assert_eq!(atmos_out[0], expected);
    }

    #[test]
    #[should_panic(expected = "Radiative buffers must share one shape")]
    fn test_kernel_rejects_mismatched_buffers() {
        let params = RadiativeParams::new(1.0, &PhysicalConstants::default());
        step_radiative_cpu(
            RadiativeInputs {
                ground_temperature: &[270.0, 270.0],
                atmosphere_temperature: &[270.0],
                solar_flux: &[0.0, 0.0],
                ground_heat_capacity: &[1e7, 1e7],
            },
            &mut [0.0, 0.0],
            &mut [0.0, 0.0],
            2,
            params,
        );
    }
}
