use crate::error::ClimateSimErrorCode;
use crate::helpers::{handle_ffi_result_error, instance_from_ptr, with_sim_mut};
use crate::instance::ClimateSimInstance;

/// Advance the simulation by `steps` timesteps.
///
/// Thread-safe: holds the `RwLock` write lock for the whole batch, so readers
/// never observe a partially applied batch. `steps == 0` is a no-op.
///
/// Returns
/// - `ClimateSimErrorCode::Ok` (0) on success
/// - `ClimateSimErrorCode::NullPointer` if `ptr` is null
/// - `ClimateSimErrorCode::LockPoisoned` if the internal lock is poisoned
///
/// Safety:
/// - `ptr` must be null or a valid pointer returned by `climate_sim_new`.
#[no_mangle]
pub extern "C" fn climate_sim_step(ptr: *const ClimateSimInstance, steps: u32) -> ClimateSimErrorCode {
    handle_ffi_result_error(|| {
        let instance = instance_from_ptr(ptr)?;
        with_sim_mut(instance, |sim| sim.step_n(steps))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::{climate_sim_default_config, climate_sim_destroy, climate_sim_new};
    use std::ptr;

    #[test]
    fn test_step_advances_time() {
        let mut sim: *mut ClimateSimInstance = ptr::null_mut();
        unsafe { climate_sim_new(climate_sim_default_config(), &mut sim) };

        assert_eq!(climate_sim_step(sim, 3), ClimateSimErrorCode::Ok);
        let time = unsafe { &*sim }.sim.read().unwrap().current_time();
        assert_eq!(*time, 1620.0);

        unsafe { climate_sim_destroy(sim) };
    }

    #[test]
    fn test_step_null_instance() {
        assert_eq!(
            climate_sim_step(ptr::null(), 1),
            ClimateSimErrorCode::NullPointer
        );
    }
}
