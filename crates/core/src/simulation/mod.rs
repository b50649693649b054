//! Energy-balance climate simulation
//!
//! [`ClimateSimulation`] owns the grid, the physical constants and every field.
//! A host drives it by calling [`ClimateSimulation::step`] at whatever cadence
//! it likes and reading snapshots with [`ClimateSimulation::export_layer`].
//!
//! `step` takes `&mut self` and `export_layer` takes `&self`, so the borrow
//! checker already guarantees an export never observes a half-finished step.
//! Hosts sharing one instance across threads wrap it in an `RwLock`.
//!
//! # Example
//!
//! ```
//! use climate_sim_core::{ClimateSimulation, LayerKind, SimulationConfig};
//!
//! let mut sim = ClimateSimulation::new(SimulationConfig::default()).unwrap();
//! sim.step();
//! assert_eq!(*sim.current_time(), 540.0);
//!
//! let ground = sim.export_layer(LayerKind::Ground, None).unwrap();
//! assert_eq!((ground.width, ground.height), (120, 60));
//! ```

mod stats;

pub use stats::{FieldSummary, SimulationStats};

use crate::config::SimulationConfig;
use crate::core_types::units::Seconds;
use crate::error::SimulationError;
use crate::export::{ExportedLayer, LayerKind};
use crate::grid::LatLonGrid;
use crate::physics::radiation::RadiativeParams;
use crate::physics::PhysicalConstants;
use crate::solver::{CpuRadiativeSolver, ScalarField};
use tracing::{debug, info};

/// One run of the energy-balance model
#[derive(Debug, Clone)]
pub struct ClimateSimulation {
    config: SimulationConfig,
    constants: PhysicalConstants,
    grid: LatLonGrid,
    solver: CpuRadiativeSolver,
    current_time: Seconds,
    step_count: u64,
}

impl ClimateSimulation {
    /// Create a simulation with the default physical constants
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfiguration`] if the configuration
    /// fails validation or produces an empty grid.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        Self::with_constants(config, PhysicalConstants::default())
    }

    /// Create a simulation with explicit physical constants
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfiguration`] if the configuration
    /// fails validation or produces an empty grid.
    pub fn with_constants(
        config: SimulationConfig,
        constants: PhysicalConstants,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        let grid = LatLonGrid::new(config.grid_resolution, config.planet_radius, config.day_length);
        if grid.n_lat() == 0 || grid.n_lon() == 0 {
            return Err(SimulationError::invalid_configuration(
                "grid_resolution",
                format!(
                    "produces an empty {}x{} grid",
                    grid.n_lon(),
                    grid.n_lat()
                ),
            ));
        }

        let solver = CpuRadiativeSolver::new(&grid, config.n_atmos_layers, &constants);

        info!(
            "Climate simulation initialized: {}x{} grid ({} resolution), {} atmosphere layer(s), dt={}",
            grid.n_lon(),
            grid.n_lat(),
            config.grid_resolution,
            config.n_atmos_layers,
            config.timestep_length
        );

        Ok(Self {
            config,
            constants,
            grid,
            solver,
            current_time: Seconds::ZERO,
            step_count: 0,
        })
    }

    /// Advance the simulation by one timestep.
    ///
    /// Recomputes the solar flux at the current time, applies one explicit
    /// Euler radiative update to the ground and atmosphere layer 0, then
    /// advances the clock. The timestep is not checked for stability.
    pub fn step(&mut self) {
        let params = RadiativeParams::new(*self.config.timestep_length, &self.constants);
        self.solver.step(
            &self.grid,
            self.config.insolation,
            self.config.day_length,
            self.current_time,
            params,
        );

        self.current_time += self.config.timestep_length;
        self.step_count += 1;

        debug!(
            "Simulation step {}: t={:.0}s",
            self.step_count, *self.current_time
        );
    }

    /// Advance the simulation by `steps` timesteps
    pub fn step_n(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Copy one field out for rendering.
    ///
    /// `layer` selects the atmosphere layer (default 0) and is ignored for
    /// [`LayerKind::Ground`] and [`LayerKind::Solar`]. Solar flux is all zeros
    /// until the first step.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::LayerOutOfRange`] if an atmosphere layer
    /// index at or past the configured layer count is requested.
    pub fn export_layer(
        &self,
        kind: LayerKind,
        layer: Option<usize>,
    ) -> Result<ExportedLayer, SimulationError> {
        let (width, height, layers) = self.solver.dimensions();
        let values = match kind {
            LayerKind::Ground => self.solver.ground_temperature().as_slice(),
            LayerKind::Solar => self.solver.solar_flux().as_slice(),
            LayerKind::Atmosphere => {
                let layer = layer.unwrap_or(0);
                if layer >= layers {
                    return Err(SimulationError::LayerOutOfRange {
                        requested: layer,
                        available: layers,
                    });
                }
                self.solver.atmosphere_temperature().layer(layer)
            }
        };
        Ok(ExportedLayer::from_slice(width, height, values))
    }

    /// Summarize the current state
    pub fn stats(&self) -> SimulationStats {
        let ground = self.solver.ground_temperature().as_slice();
        let atmosphere = self.solver.atmosphere_temperature().layer(0);

        SimulationStats {
            time: self.current_time,
            step_count: self.step_count,
            ground_temperature: FieldSummary::from_values(ground),
            atmosphere_temperature: FieldSummary::from_values(atmosphere),
            solar_flux: FieldSummary::from_values(self.solver.solar_flux().as_slice()),
            all_finite: ground.iter().chain(atmosphere).all(|t| t.is_finite()),
        }
    }

    /// Seconds simulated since construction
    pub fn current_time(&self) -> Seconds {
        self.current_time
    }

    /// Number of completed steps
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Configuration this simulation was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Physical constants in use
    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Latitude/longitude grid
    pub fn grid(&self) -> &LatLonGrid {
        &self.grid
    }

    /// Field dimensions as `(width, height, atmosphere layers)`
    pub fn dimensions(&self) -> (usize, usize, usize) {
        self.solver.dimensions()
    }

    /// Ground heat capacity (J/(m²·K))
    pub fn ground_heat_capacity(&self) -> &ScalarField {
        self.solver.ground_heat_capacity()
    }

    /// Air pressure (inert)
    pub fn air_pressure(&self) -> &ScalarField {
        self.solver.air_pressure()
    }

    /// Air density (kg/m³, inert)
    pub fn air_density(&self) -> &ScalarField {
        self.solver.air_density()
    }

    /// Eastward wind (m/s, inert)
    pub fn wind_u(&self) -> &ScalarField {
        self.solver.wind_u()
    }

    /// Northward wind (m/s, inert)
    pub fn wind_v(&self) -> &ScalarField {
        self.solver.wind_v()
    }

    /// Surface albedo (inert)
    pub fn albedo(&self) -> &ScalarField {
        self.solver.albedo()
    }
}
