//! C ABI for the climate simulation engine
//!
//! A host creates an opaque [`ClimateSimInstance`] with `climate_sim_new`,
//! advances it with `climate_sim_step` and copies fields out with
//! `climate_sim_export_layer` into buffers it owns. Every fallible call
//! returns a [`ClimateSimErrorCode`] and records a message retrievable with
//! `climate_sim_get_last_error` on the calling thread.

mod error;
mod helpers;
mod instance;
mod queries;
mod simulation;

pub use error::{climate_sim_get_last_error, climate_sim_get_last_error_code, ClimateSimErrorCode};
pub use instance::{
    climate_sim_default_config, climate_sim_destroy, climate_sim_new, ClimateSimConfig,
    ClimateSimInstance,
};
pub use queries::{
    climate_sim_current_time, climate_sim_dimensions, climate_sim_export_layer,
    climate_sim_get_stats, ClimateSimStats,
};
pub use simulation::climate_sim_step;
