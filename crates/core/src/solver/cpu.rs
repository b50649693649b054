//! CPU field solver for the energy-balance model
//!
//! Owns every grid field. Temperatures use ping-pong buffers: a step reads
//! the front buffers, writes the back buffers, then swaps. Atmosphere layers
//! above 0 are never written into either buffer, so they hold their initial
//! value in both and survive every swap unchanged.

use super::fields::{AtmosphereField, ScalarField};
use super::radiative::{step_radiative_cpu, RadiativeInputs};
use crate::core_types::units::{Seconds, WattsPerSquareMeter};
use crate::grid::LatLonGrid;
use crate::physics::radiation::RadiativeParams;
use crate::physics::solar::compute_solar_field;
use crate::physics::PhysicalConstants;

/// CPU solver holding the complete field state of one simulation
#[derive(Debug, Clone)]
pub struct CpuRadiativeSolver {
    // Ping-pong buffers (read from one, write to other, then swap)
    ground_temperature: ScalarField,
    ground_temperature_back: ScalarField,
    atmosphere_temperature: AtmosphereField,
    atmosphere_temperature_back: AtmosphereField,

    // Recomputed every step
    solar_flux: ScalarField,

    // Static fields (don't change during simulation)
    ground_heat_capacity: ScalarField,
    air_pressure: ScalarField,
    air_density: ScalarField,
    wind_u: ScalarField,
    wind_v: ScalarField,
    albedo: ScalarField,

    width: usize,
    height: usize,
}

impl CpuRadiativeSolver {
    /// Allocate all fields for `grid` at their uniform initial values
    #[must_use]
    pub fn new(grid: &LatLonGrid, atmos_layers: usize, constants: &PhysicalConstants) -> Self {
        let width = grid.n_lon();
        let height = grid.n_lat();
        let t0 = constants.initial_temperature.value();

        Self {
            ground_temperature: ScalarField::with_value(width, height, t0),
            ground_temperature_back: ScalarField::with_value(width, height, t0),
            atmosphere_temperature: AtmosphereField::with_value(atmos_layers, width, height, t0),
            atmosphere_temperature_back: AtmosphereField::with_value(
                atmos_layers,
                width,
                height,
                t0,
            ),
            solar_flux: ScalarField::new(width, height),
            ground_heat_capacity: ScalarField::with_value(
                width,
                height,
                constants.ground_heat_capacity,
            ),
            air_pressure: ScalarField::new(width, height),
            air_density: ScalarField::with_value(width, height, constants.initial_air_density),
            wind_u: ScalarField::new(width, height),
            wind_v: ScalarField::new(width, height),
            albedo: ScalarField::new(width, height),
            width,
            height,
        }
    }

    /// Advance the fields by one timestep.
    ///
    /// Solar flux is evaluated at `time`, the simulation time before the step.
    pub fn step(
        &mut self,
        grid: &LatLonGrid,
        insolation: WattsPerSquareMeter,
        day_length: Seconds,
        time: Seconds,
        params: RadiativeParams,
    ) {
        compute_solar_field(grid, insolation, time, day_length, &mut self.solar_flux);

        let inputs = RadiativeInputs {
            ground_temperature: self.ground_temperature.as_slice(),
            atmosphere_temperature: self.atmosphere_temperature.layer(0),
            solar_flux: self.solar_flux.as_slice(),
            ground_heat_capacity: self.ground_heat_capacity.as_slice(),
        };
        step_radiative_cpu(
            inputs,
            self.ground_temperature_back.as_mut_slice(),
            self.atmosphere_temperature_back.layer_mut(0),
            self.width,
            params,
        );

        // Swap buffers
        std::mem::swap(&mut self.ground_temperature, &mut self.ground_temperature_back);
        std::mem::swap(
            &mut self.atmosphere_temperature,
            &mut self.atmosphere_temperature_back,
        );
    }

    /// Grid dimensions as `(width, height, layers)`
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.atmosphere_temperature.layers())
    }

    /// Ground temperature (K)
    pub fn ground_temperature(&self) -> &ScalarField {
        &self.ground_temperature
    }

    /// Atmosphere temperature, all layers (K)
    pub fn atmosphere_temperature(&self) -> &AtmosphereField {
        &self.atmosphere_temperature
    }

    /// Solar flux of the most recent step (W/m²), zero before the first step
    pub fn solar_flux(&self) -> &ScalarField {
        &self.solar_flux
    }

    /// Ground heat capacity (J/(m²·K))
    pub fn ground_heat_capacity(&self) -> &ScalarField {
        &self.ground_heat_capacity
    }

    /// Air pressure (inert)
    pub fn air_pressure(&self) -> &ScalarField {
        &self.air_pressure
    }

    /// Air density (kg/m³, inert)
    pub fn air_density(&self) -> &ScalarField {
        &self.air_density
    }

    /// Eastward wind (m/s, inert)
    pub fn wind_u(&self) -> &ScalarField {
        &self.wind_u
    }

    /// Northward wind (m/s, inert)
    pub fn wind_v(&self) -> &ScalarField {
        &self.wind_v
    }

    /// Surface albedo (inert)
    pub fn albedo(&self) -> &ScalarField {
        &self.albedo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Degrees, Meters};

    fn small_grid() -> LatLonGrid {
        LatLonGrid::new(
            Degrees::new(30.0),
            Meters::new(6_400_000.0),
            Seconds::new(86_400.0),
        )
    }

    #[test]
    fn test_initial_state() {
        let grid = small_grid();
        let solver = CpuRadiativeSolver::new(&grid, 2, &PhysicalConstants::default());
        assert_eq!(solver.dimensions(), (12, 6, 2));
        assert!(solver.ground_temperature().as_slice().iter().all(|&t| t == 270.0));
        assert!(solver.atmosphere_temperature().as_slice().iter().all(|&t| t == 270.0));
        assert!(solver.solar_flux().as_slice().iter().all(|&s| s == 0.0));
        assert!(solver.air_density().as_slice().iter().all(|&d| d == 1.3));
        assert!(solver.ground_heat_capacity().as_slice().iter().all(|&c| c == 1e7));
        assert!(solver.air_pressure().as_slice().iter().all(|&p| p == 0.0));
        assert!(solver.wind_u().as_slice().iter().all(|&u| u == 0.0));
        assert!(solver.wind_v().as_slice().iter().all(|&v| v == 0.0));
        assert!(solver.albedo().as_slice().iter().all(|&a| a == 0.0));
    }

    #[test]
    fn test_upper_layers_survive_repeated_swaps() {
        let grid = small_grid();
        let constants = PhysicalConstants::default();
        let mut solver = CpuRadiativeSolver::new(&grid, 3, &constants);
        let params = RadiativeParams::new(540.0, &constants);

        for n in 0..5 {
            solver.step(
                &grid,
                WattsPerSquareMeter::new(1370.0),
                Seconds::new(86_400.0),
                Seconds::new(540.0 * f64::from(n)),
                params,
            );
        }

        let atmos = solver.atmosphere_temperature();
        assert!(atmos.layer(0).iter().all(|&t| t != 270.0));
        assert!(atmos.layer(1).iter().all(|&t| t == 270.0));
        assert!(atmos.layer(2).iter().all(|&t| t == 270.0));
    }

    #[test]
    fn test_step_refreshes_solar_flux() {
        let grid = small_grid();
        let constants = PhysicalConstants::default();
        let mut solver = CpuRadiativeSolver::new(&grid, 1, &constants);
        solver.step(
            &grid,
            WattsPerSquareMeter::new(1370.0),
            Seconds::new(86_400.0),
            Seconds::ZERO,
            RadiativeParams::new(540.0, &constants),
        );
        // lat 0 is row 3 of a 30° grid, lon 0 is column 0
        assert_eq!(solver.solar_flux().get(0, 3), 1370.0);
        // lon 180 is column 6
        assert_eq!(solver.solar_flux().get(6, 3), 0.0);
    }
}
