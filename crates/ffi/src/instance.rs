use climate_sim_core::{
    ClimateSimulation, Degrees, Meters, Seconds, SimulationConfig, WattsPerSquareMeter,
};
use std::ptr;
use std::sync::RwLock;
use tracing::warn;

use crate::error::{ClimateSimErrorCode, DefaultClimateSimError};
use crate::helpers::{track_error, track_result};

/// C-compatible simulation configuration.
///
/// Mirrors `SimulationConfig` with plain fields. Start from
/// `climate_sim_default_config()` and override what you need.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimateSimConfig {
    /// Length of one planetary rotation (s)
    pub day_length: f64,
    /// Explicit Euler timestep (s). Not checked for stability.
    pub timestep_length: f64,
    /// Solar constant (W/m²)
    pub insolation: f64,
    /// Planet radius (m)
    pub planet_radius: f64,
    /// Grid spacing in degrees
    pub grid_resolution: f64,
    /// Number of atmosphere layers to allocate
    pub n_atmos_layers: u32,
}

impl From<ClimateSimConfig> for SimulationConfig {
    fn from(config: ClimateSimConfig) -> Self {
        Self {
            day_length: Seconds::new(config.day_length),
            timestep_length: Seconds::new(config.timestep_length),
            insolation: WattsPerSquareMeter::new(config.insolation),
            planet_radius: Meters::new(config.planet_radius),
            grid_resolution: Degrees::new(config.grid_resolution),
            n_atmos_layers: config.n_atmos_layers as usize,
        }
    }
}

impl From<SimulationConfig> for ClimateSimConfig {
    fn from(config: SimulationConfig) -> Self {
        Self {
            day_length: *config.day_length,
            timestep_length: *config.timestep_length,
            insolation: *config.insolation,
            planet_radius: *config.planet_radius,
            grid_resolution: *config.grid_resolution,
            n_atmos_layers: u32::try_from(config.n_atmos_layers).unwrap_or(u32::MAX),
        }
    }
}

/// The main climate simulation context.
///
/// # Thread Safety
/// The simulation is protected by an `RwLock`:
/// - **Multiple concurrent readers** (exports, queries): `.read()` lock
/// - **Exclusive writer** (`climate_sim_step`): `.write()` lock
///
/// An export therefore always sees the state after a whole number of steps.
pub struct ClimateSimInstance {
    pub(crate) sim: RwLock<ClimateSimulation>,
}

impl ClimateSimInstance {
    /// Creates a new instance from a C configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClimateSimErrorCode::InvalidConfiguration` if the core rejects the configuration.
    pub(crate) fn new(config: ClimateSimConfig) -> Result<Box<Self>, DefaultClimateSimError> {
        let sim = ClimateSimulation::new(config.into()).map_err(|err| {
            warn!("Rejected climate simulation configuration: {err}");
            DefaultClimateSimError::from(err)
        })?;

        Ok(Box::new(Self {
            sim: RwLock::new(sim),
        }))
    }
}

/// Return the default configuration (24 h day, 540 s step, 1370 W/m², 6.4e6 m, 3°, 1 layer).
#[no_mangle]
pub extern "C" fn climate_sim_default_config() -> ClimateSimConfig {
    SimulationConfig::default().into()
}

/// Create a new climate simulation instance and return it via out-parameter.
///
/// - Returns `ClimateSimErrorCode::Ok` (0) on success with a valid instance in `out_instance`
/// - Returns non-zero error code on failure with `out_instance` set to null
///
/// Returns
/// - `ClimateSimErrorCode::NullPointer` if `out_instance` is null
/// - `ClimateSimErrorCode::InvalidConfiguration` if the resolution, layer count or day length is rejected
///
/// Call `climate_sim_get_last_error()` to retrieve a human-readable description.
///
/// # Safety
///
/// - `out_instance` must be a valid, non-null pointer to writable memory.
/// - The caller takes ownership of the returned instance and MUST call `climate_sim_destroy`
///   exactly once to avoid memory leaks.
///
/// Example (C)
/// ```c
/// ClimateSimInstance* sim = NULL;
/// ClimateSimErrorCode err = climate_sim_new(climate_sim_default_config(), &sim);
/// if (err != Ok) {
///     fprintf(stderr, "Failed to create simulation: %s\n", climate_sim_get_last_error());
///     return;
/// }
/// // ... use sim ...
/// climate_sim_destroy(sim);
/// ```
#[no_mangle]
pub unsafe extern "C" fn climate_sim_new(
    config: ClimateSimConfig,
    out_instance: *mut *mut ClimateSimInstance,
) -> ClimateSimErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultClimateSimError::null_pointer("out_instance"));
    }

    match track_result(ClimateSimInstance::new(config)) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            ClimateSimErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                // Set to null on error (per documentation contract)
                *out_instance = ptr::null_mut();
            }
            code
        }
    }
}

/// Destroys an instance previously created by `climate_sim_new`.
///
/// If `ptr` is null, this function is a no-op.
///
/// # Safety
/// - The pointer MUST have been created by `climate_sim_new` and not freed already.
/// - After calling this function, the caller must not use the pointer again.
#[no_mangle]
pub unsafe extern "C" fn climate_sim_destroy(ptr: *mut ClimateSimInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: The pointer was created by `Box::into_raw` in `climate_sim_new`.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}
