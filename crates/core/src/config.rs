//! Simulation configuration
//!
//! A [`SimulationConfig`] is fixed for the life of a simulation instance. It is
//! validated once by [`crate::ClimateSimulation::new`].

use crate::core_types::units::{Degrees, Meters, Seconds, WattsPerSquareMeter};
use crate::error::SimulationError;
use serde::{Deserialize, Serialize};

/// Planetary and numerical parameters for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Length of one planetary rotation; the sun circles the grid once per day
    pub day_length: Seconds,
    /// Explicit Euler timestep. Not checked for stability.
    pub timestep_length: Seconds,
    /// Solar constant at the planet's orbital distance (W/m²)
    pub insolation: WattsPerSquareMeter,
    /// Planet radius
    pub planet_radius: Meters,
    /// Latitude/longitude spacing of grid points
    pub grid_resolution: Degrees,
    /// Number of atmosphere layers allocated (only layer 0 exchanges heat)
    pub n_atmos_layers: usize,
}

impl Default for SimulationConfig {
    /// Earth-like defaults: 24 h day, 9 minute steps, 3° grid, one layer
    fn default() -> Self {
        Self {
            day_length: Seconds::new(86_400.0),
            timestep_length: Seconds::new(540.0),
            insolation: WattsPerSquareMeter::new(1370.0),
            planet_radius: Meters::new(6_400_000.0),
            grid_resolution: Degrees::new(3.0),
            n_atmos_layers: 1,
        }
    }
}

impl SimulationConfig {
    /// Set the day length
    pub fn with_day_length(mut self, day_length: Seconds) -> Self {
        self.day_length = day_length;
        self
    }

    /// Set the timestep length
    pub fn with_timestep_length(mut self, timestep_length: Seconds) -> Self {
        self.timestep_length = timestep_length;
        self
    }

    /// Set the insolation
    pub fn with_insolation(mut self, insolation: WattsPerSquareMeter) -> Self {
        self.insolation = insolation;
        self
    }

    /// Set the planet radius
    pub fn with_planet_radius(mut self, planet_radius: Meters) -> Self {
        self.planet_radius = planet_radius;
        self
    }

    /// Set the grid resolution
    pub fn with_grid_resolution(mut self, grid_resolution: Degrees) -> Self {
        self.grid_resolution = grid_resolution;
        self
    }

    /// Set the atmosphere layer count
    pub fn with_atmos_layers(mut self, n_atmos_layers: usize) -> Self {
        self.n_atmos_layers = n_atmos_layers;
        self
    }

    /// Check the parameters that the grid and forcing depend on.
    ///
    /// The timestep, insolation and radius are accepted as given.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InvalidConfiguration`] if the grid resolution
    /// is not a finite positive angle, the day length is not a finite positive
    /// duration, or fewer than one atmosphere layer is requested.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let resolution = *self.grid_resolution;
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(SimulationError::invalid_configuration(
                "grid_resolution",
                format!("must be finite and positive, got {resolution}"),
            ));
        }

        let day_length = *self.day_length;
        if !day_length.is_finite() || day_length <= 0.0 {
            return Err(SimulationError::invalid_configuration(
                "day_length",
                format!("must be finite and positive, got {day_length}"),
            ));
        }

        if self.n_atmos_layers < 1 {
            return Err(SimulationError::invalid_configuration(
                "n_atmos_layers",
                "at least one atmosphere layer is required",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(*config.timestep_length, 540.0);
        assert_eq!(config.n_atmos_layers, 1);
    }

    #[test]
    fn test_rejects_bad_resolution() {
        for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            let config = SimulationConfig::default().with_grid_resolution(Degrees::new(bad));
            match config.validate() {
                Err(SimulationError::InvalidConfiguration { parameter, .. }) => {
                    assert_eq!(parameter, "grid_resolution");
                }
                other => panic!("expected grid_resolution error for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_zero_layers() {
        let config = SimulationConfig::default().with_atmos_layers(0);
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfiguration {
                parameter: "n_atmos_layers",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_positive_day() {
        let config = SimulationConfig::default().with_day_length(Seconds::new(0.0));
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfiguration {
                parameter: "day_length",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_setters() {
        let config = SimulationConfig::default()
            .with_timestep_length(Seconds::new(60.0))
            .with_insolation(WattsPerSquareMeter::new(1000.0))
            .with_planet_radius(Meters::new(1.0e6))
            .with_atmos_layers(3);
        assert_eq!(*config.timestep_length, 60.0);
        assert_eq!(*config.insolation, 1000.0);
        assert_eq!(*config.planet_radius, 1.0e6);
        assert_eq!(config.n_atmos_layers, 3);
    }
}
