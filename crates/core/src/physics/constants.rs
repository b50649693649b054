//! Physical constants of the energy-balance model

use crate::core_types::units::Kelvin;
use serde::{Deserialize, Serialize};

/// Stefan-Boltzmann constant (W/(m²·K⁴))
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Constants fixed for the life of one simulation instance.
///
/// The gas constant and the two thermal diffusivities are declared for the
/// dynamics the model does not (yet) simulate; nothing reads them during a step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Longwave emissivity/absorptivity of the atmosphere layer (0-1)
    pub emissivity: f64,
    /// Heat capacity of an atmosphere column (J/(m²·K))
    pub atmosphere_heat_capacity: f64,
    /// Specific gas constant of dry air (J/(kg·K))
    pub specific_gas_constant: f64,
    /// Thermal diffusivity of air (m²/s)
    pub thermal_diffusivity_air: f64,
    /// Thermal diffusivity of rock (m²/s)
    pub thermal_diffusivity_rock: f64,
    /// Stefan-Boltzmann constant (W/(m²·K⁴))
    pub stefan_boltzmann: f64,
    /// Uniform starting temperature of ground and atmosphere
    pub initial_temperature: Kelvin,
    /// Uniform starting air density (kg/m³)
    pub initial_air_density: f64,
    /// Uniform ground heat capacity (J/(m²·K))
    pub ground_heat_capacity: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            emissivity: 0.75,
            atmosphere_heat_capacity: 1e7,
            specific_gas_constant: 287.0,
            thermal_diffusivity_air: 20e-6,
            thermal_diffusivity_rock: 1.5e-6,
            stefan_boltzmann: STEFAN_BOLTZMANN,
            initial_temperature: Kelvin::new(270.0),
            initial_air_density: 1.3,
            ground_heat_capacity: 1e7,
        }
    }
}
