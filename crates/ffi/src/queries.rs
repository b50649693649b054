use climate_sim_core::SimulationStats;
use std::slice;

use crate::error::{ClimateSimErrorCode, DefaultClimateSimError};
use crate::helpers::{
    handle_ffi_result_error, instance_from_ptr, layer_kind_from_u8, track_error, with_sim,
};
use crate::instance::ClimateSimInstance;

#[repr(C)]
/// FFI-friendly snapshot of the simulation summary.
/// Keep this layout stable for C/C++/C# consumers.
pub struct ClimateSimStats {
    /// Seconds simulated since construction.
    pub time: f64,
    /// Completed steps.
    pub step_count: u64,
    /// Ground temperature minimum (K).
    pub ground_min: f64,
    /// Ground temperature mean (K).
    pub ground_mean: f64,
    /// Ground temperature maximum (K).
    pub ground_max: f64,
    /// Atmosphere layer 0 temperature minimum (K).
    pub atmosphere_min: f64,
    /// Atmosphere layer 0 temperature mean (K).
    pub atmosphere_mean: f64,
    /// Atmosphere layer 0 temperature maximum (K).
    pub atmosphere_max: f64,
    /// Largest solar flux from the last step (W/m²).
    pub solar_max: f64,
    /// False once any temperature is NaN or infinite.
    pub all_finite: bool,
}

impl From<&SimulationStats> for ClimateSimStats {
    fn from(stats: &SimulationStats) -> Self {
        Self {
            time: *stats.time,
            step_count: stats.step_count,
            ground_min: stats.ground_temperature.min,
            ground_mean: stats.ground_temperature.mean,
            ground_max: stats.ground_temperature.max,
            atmosphere_min: stats.atmosphere_temperature.min,
            atmosphere_mean: stats.atmosphere_temperature.mean,
            atmosphere_max: stats.atmosphere_temperature.max,
            solar_max: stats.solar_flux.max,
            all_finite: stats.all_finite,
        }
    }
}

#[no_mangle]
/// Write the simulated time in seconds to `out_seconds`.
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `climate_sim_new` or null.
/// - `out_seconds` must be a valid, non-null pointer to a `f64`.
pub unsafe extern "C" fn climate_sim_current_time(
    ptr: *const ClimateSimInstance,
    out_seconds: *mut f64,
) -> ClimateSimErrorCode {
    if out_seconds.is_null() {
        return track_error(&DefaultClimateSimError::null_pointer("out_seconds"));
    }

    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        let time = with_sim(instance, |sim| *sim.current_time())?;
        unsafe {
            *out_seconds = time;
        }
        Ok(())
    })
}

#[no_mangle]
/// Write the grid width (longitudes), height (latitudes) and atmosphere layer count.
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `climate_sim_new` or null.
/// - `out_width`, `out_height` and `out_layers` must be valid, non-null pointers.
pub unsafe extern "C" fn climate_sim_dimensions(
    ptr: *const ClimateSimInstance,
    out_width: *mut usize,
    out_height: *mut usize,
    out_layers: *mut usize,
) -> ClimateSimErrorCode {
    if out_width.is_null() {
        return track_error(&DefaultClimateSimError::null_pointer("out_width"));
    }
    if out_height.is_null() {
        return track_error(&DefaultClimateSimError::null_pointer("out_height"));
    }
    if out_layers.is_null() {
        return track_error(&DefaultClimateSimError::null_pointer("out_layers"));
    }

    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        let (width, height, layers) = with_sim(instance, |sim| sim.dimensions())?;
        unsafe {
            *out_width = width;
            *out_height = height;
            *out_layers = layers;
        }
        Ok(())
    })
}

#[no_mangle]
/// Copy one field into a caller-owned buffer, row-major (rows are latitudes).
///
/// - `kind`: 0 = ground temperature, 1 = solar flux, 2 = atmosphere temperature.
/// - `layer`: atmosphere layer index; negative selects layer 0. Ignored for ground and solar.
/// - `out_values` may be null when `capacity` is 0 to query the required length.
/// - `out_len` always receives the number of values in the field, even on
///   `BufferTooSmall`, so callers can size the buffer and retry.
///
/// Thread-safe: acquires the `RwLock` read lock, so exports run concurrently.
///
/// Returns
/// - `ClimateSimErrorCode::Ok` (0) on success
/// - `ClimateSimErrorCode::NullPointer` if `ptr` or `out_len` is null, or `out_values` is null with nonzero capacity
/// - `ClimateSimErrorCode::InvalidParameter` if `kind` is not 0-2
/// - `ClimateSimErrorCode::LayerOutOfRange` if `layer` is past the configured layer count
/// - `ClimateSimErrorCode::BufferTooSmall` if `capacity` is less than `*out_len`
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `climate_sim_new` or null.
/// - `out_values` must point to at least `capacity` writable `f64`s, or be null with `capacity == 0`.
/// - `out_len` must be a valid, non-null pointer to a `usize`.
///
/// # Example Usage (C)
/// ```c
/// size_t len = 0;
/// climate_sim_export_layer(sim, 0, -1, NULL, 0, &len);
/// double* ground = malloc(len * sizeof(double));
/// climate_sim_export_layer(sim, 0, -1, ground, len, &len);
/// ```
pub unsafe extern "C" fn climate_sim_export_layer(
    ptr: *const ClimateSimInstance,
    kind: u8,
    layer: i32,
    out_values: *mut f64,
    capacity: usize,
    out_len: *mut usize,
) -> ClimateSimErrorCode {
    if out_len.is_null() {
        return track_error(&DefaultClimateSimError::null_pointer("out_len"));
    }
    unsafe {
        *out_len = 0;
    }
    if out_values.is_null() && capacity > 0 {
        return track_error(&DefaultClimateSimError::null_pointer("out_values"));
    }

    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        let kind = layer_kind_from_u8(kind)?;
        let layer = usize::try_from(layer).ok();

        let exported = with_sim(instance, |sim| sim.export_layer(kind, layer))??;
        let len = exported.values.len();
        unsafe {
            *out_len = len;
        }
        if capacity < len {
            return Err(DefaultClimateSimError::buffer_too_small(len, capacity));
        }

        // SAFETY: caller guarantees `out_values` holds `capacity >= len` elements.
        let out = unsafe { slice::from_raw_parts_mut(out_values, len) };
        out.copy_from_slice(&exported.values);
        Ok(())
    })
}

#[no_mangle]
/// Fill `out_stats` with a summary of the current state.
///
/// # Safety
///
/// - `ptr` must be a valid pointer returned by `climate_sim_new` or null.
/// - `out_stats` must be a valid, non-null pointer to a `ClimateSimStats`.
pub unsafe extern "C" fn climate_sim_get_stats(
    ptr: *const ClimateSimInstance,
    out_stats: *mut ClimateSimStats,
) -> ClimateSimErrorCode {
    if out_stats.is_null() {
        return track_error(&DefaultClimateSimError::null_pointer("out_stats"));
    }

    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        let stats = with_sim(instance, |sim| ClimateSimStats::from(&sim.stats()))?;
        unsafe {
            *out_stats = stats;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{climate_sim_default_config, climate_sim_destroy, climate_sim_new};
    use crate::simulation::climate_sim_step;
    use std::ptr;

    /// Raw instance pointer that may be shared with reader threads
    #[derive(Clone, Copy)]
    struct SharedInstance(*mut ClimateSimInstance);

    // SAFETY: the instance is internally synchronized by its RwLock.
    unsafe impl Send for SharedInstance {}

    impl SharedInstance {
        fn get(self) -> *mut ClimateSimInstance {
            self.0
        }
    }

    fn new_instance(layers: u32) -> *mut ClimateSimInstance {
        let mut config = climate_sim_default_config();
        config.n_atmos_layers = layers;
        let mut sim = ptr::null_mut();
        let err = unsafe { climate_sim_new(config, &mut sim) };
        assert_eq!(err, ClimateSimErrorCode::Ok);
        sim
    }

    #[test]
    fn test_dimensions_and_time() {
        let sim = new_instance(2);
        let (mut w, mut h, mut l) = (0, 0, 0);
        let err = unsafe { climate_sim_dimensions(sim, &mut w, &mut h, &mut l) };
        assert_eq!(err, ClimateSimErrorCode::Ok);
        assert_eq!((w, h, l), (120, 60, 2));

        climate_sim_step(sim, 2);
        let mut t = -1.0;
        assert_eq!(
            unsafe { climate_sim_current_time(sim, &mut t) },
            ClimateSimErrorCode::Ok
        );
        assert_eq!(t, 1080.0);

        unsafe { climate_sim_destroy(sim) };
    }

    #[test]
    fn test_export_size_query_then_copy() {
        let sim = new_instance(1);
        climate_sim_step(sim, 1);

        let mut len = 0;
        let err = unsafe { climate_sim_export_layer(sim, 1, -1, ptr::null_mut(), 0, &mut len) };
        assert_eq!(err, ClimateSimErrorCode::BufferTooSmall);
        assert_eq!(len, 7200);

        let mut values = vec![0.0; len];
        let err = unsafe {
            climate_sim_export_layer(sim, 1, -1, values.as_mut_ptr(), values.len(), &mut len)
        };
        assert_eq!(err, ClimateSimErrorCode::Ok);
        assert_eq!(values.iter().copied().fold(f64::MIN, f64::max), 1370.0);

        unsafe { climate_sim_destroy(sim) };
    }

    #[test]
    fn test_export_rejects_bad_selectors() {
        let sim = new_instance(1);
        let mut values = vec![0.0; 7200];
        let mut len = 0;

        let err = unsafe {
            climate_sim_export_layer(sim, 7, 0, values.as_mut_ptr(), values.len(), &mut len)
        };
        assert_eq!(err, ClimateSimErrorCode::InvalidParameter);

        let err = unsafe {
            climate_sim_export_layer(sim, 2, 1, values.as_mut_ptr(), values.len(), &mut len)
        };
        assert_eq!(err, ClimateSimErrorCode::LayerOutOfRange);
        assert_eq!(len, 0);

        unsafe { climate_sim_destroy(sim) };
    }

    #[test]
    fn test_get_stats() {
        let sim = new_instance(1);
        climate_sim_step(sim, 1);

        let mut stats = ClimateSimStats {
            time: 0.0,
            step_count: 0,
            ground_min: 0.0,
            ground_mean: 0.0,
            ground_max: 0.0,
            atmosphere_min: 0.0,
            atmosphere_mean: 0.0,
            atmosphere_max: 0.0,
            solar_max: 0.0,
            all_finite: false,
        };
        assert_eq!(
            unsafe { climate_sim_get_stats(sim, &mut stats) },
            ClimateSimErrorCode::Ok
        );
        assert_eq!(stats.step_count, 1);
        assert_eq!(stats.time, 540.0);
        assert_eq!(stats.solar_max, 1370.0);
        assert!(stats.ground_max > 270.0);
        assert!(stats.all_finite);

        unsafe { climate_sim_destroy(sim) };
    }

    #[test]
    fn test_concurrent_exports_during_steps() {
        let sim = SharedInstance(new_instance(1));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(move || {
                    let mut values = vec![0.0; 7200];
                    for _ in 0..20 {
                        let mut len = 0;
                        let err = unsafe {
                            climate_sim_export_layer(
                                sim.get(),
                                0,
                                -1,
                                values.as_mut_ptr(),
                                values.len(),
                                &mut len,
                            )
                        };
                        assert_eq!(err, ClimateSimErrorCode::Ok);
                        assert_eq!(len, 7200);
                        // Either the initial state or a fully applied step
                        assert!(values.iter().all(|t| t.is_finite()));
                    }
                })
            })
            .collect();

        for _ in 0..20 {
            assert_eq!(climate_sim_step(sim.get(), 1), ClimateSimErrorCode::Ok);
        }
        for reader in readers {
            reader.join().unwrap();
        }

        unsafe { climate_sim_destroy(sim.get()) };
    }
}
