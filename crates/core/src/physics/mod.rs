//! Physics of the energy-balance model
//!
//! - [`constants`]: emissivity, heat capacities, Stefan-Boltzmann
//! - [`solar`]: point-source insolation forcing
//! - [`radiation`]: per-cell ground and atmosphere temperature rates

pub mod constants;
pub mod radiation;
pub mod solar;

pub use constants::{PhysicalConstants, STEFAN_BOLTZMANN};
pub use radiation::{atmosphere_temperature_delta, ground_temperature_delta, RadiativeParams};
pub use solar::{compute_solar_field, solar_flux, sub_solar_longitude};
