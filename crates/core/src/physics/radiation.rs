//! Radiative energy balance of the ground and the first atmosphere layer
//!
//! # Physics Implementation
//!
//! Explicit Euler step per grid cell, both rates evaluated on the same
//! pre-step snapshot:
//!
//! ```text
//! ΔT_g = dt · (S + 4εσT_a⁴ − 4σT_g⁴) / (4·C_g)
//! ΔT_a = dt · (σT_g⁴ − 2εσT_a⁴) / C_a
//! ```
//!
//! Where:
//! - `S`: absorbed solar flux
//! - `4εσT_a⁴`: downward longwave from the atmosphere
//! - `4σT_g⁴`: ground blackbody emission
//! - `σT_g⁴`: ground longwave absorbed by the atmosphere
//! - `2εσT_a⁴`: atmosphere emission, up and down
//!
//! There is no stability control. A timestep that is too large for the heat
//! capacities diverges to infinity/NaN.

use super::constants::PhysicalConstants;

/// Parameters shared by every cell in one radiative step
#[derive(Debug, Clone, Copy)]
pub struct RadiativeParams {
    /// Timestep in seconds
    pub dt: f64,
    /// Atmosphere emissivity (0-1)
    pub emissivity: f64,
    /// Stefan-Boltzmann constant (W/(m²·K⁴))
    pub stefan_boltzmann: f64,
    /// Atmosphere column heat capacity (J/(m²·K))
    pub atmosphere_heat_capacity: f64,
}

impl RadiativeParams {
    /// Collect the step parameters from the model constants
    #[must_use]
    pub fn new(dt: f64, constants: &PhysicalConstants) -> Self {
        Self {
            dt,
            emissivity: constants.emissivity,
            stefan_boltzmann: constants.stefan_boltzmann,
            atmosphere_heat_capacity: constants.atmosphere_heat_capacity,
        }
    }
}

/// Ground temperature change over one timestep (K)
///
/// # Arguments
///
/// * `solar_flux` - Incoming solar flux at the cell (W/m²)
/// * `ground_temp` - Ground temperature before the step (K)
/// * `atmos_temp` - Layer-0 atmosphere temperature before the step (K)
/// * `ground_heat_capacity` - Ground heat capacity at the cell (J/(m²·K))
/// * `params` - Step parameters
#[inline]
#[must_use]
pub fn ground_temperature_delta(
    solar_flux: f64,
    ground_temp: f64,
    atmos_temp: f64,
    ground_heat_capacity: f64,
    params: RadiativeParams,
) -> f64 {
    let sigma = params.stefan_boltzmann;
    let back_radiation = 4.0 * params.emissivity * sigma * atmos_temp.powi(4);
    let emission = 4.0 * sigma * ground_temp.powi(4);
    params.dt * (solar_flux + back_radiation - emission) / (4.0 * ground_heat_capacity)
}

/// Layer-0 atmosphere temperature change over one timestep (K)
///
/// # Arguments
///
/// * `ground_temp` - Ground temperature before the step (K)
/// * `atmos_temp` - Layer-0 atmosphere temperature before the step (K)
/// * `params` - Step parameters
#[inline]
#[must_use]
pub fn atmosphere_temperature_delta(
    ground_temp: f64,
    atmos_temp: f64,
    params: RadiativeParams,
) -> f64 {
    let sigma = params.stefan_boltzmann;
    let absorbed = sigma * ground_temp.powi(4);
    let emission = 2.0 * params.emissivity * sigma * atmos_temp.powi(4);
    params.dt * (absorbed - emission) / params.atmosphere_heat_capacity
}
