use crate::error::{with_last_error_mut, ClimateSimError, ClimateSimErrorCode, DefaultClimateSimError};
use crate::instance::ClimateSimInstance;
use climate_sim_core::{ClimateSimulation, LayerKind};
use std::ffi::CString;

/// Set the thread-local error message and code.
/// Accepts any type implementing `ClimateSimError` trait.
pub(crate) fn set_last_error(error: &impl ClimateSimError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ClimateSimErrorCode::Ok;
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl ClimateSimError) -> ClimateSimErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the outcome of a fallible operation, passing the value through on success.
pub(crate) fn track_result<T>(
    result: Result<T, DefaultClimateSimError>,
) -> Result<T, ClimateSimErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Run an FFI body and collapse its result into an error code.
pub(crate) fn handle_ffi_result_error<F>(func: F) -> ClimateSimErrorCode
where
    F: FnOnce() -> Result<(), DefaultClimateSimError>,
{
    match track_result(func()) {
        Ok(()) => ClimateSimErrorCode::Ok,
        Err(code) => code,
    }
}

/// Borrow an instance from a raw pointer handed across the boundary.
pub(crate) fn instance_from_ptr<'a>(
    ptr: *const ClimateSimInstance,
) -> Result<&'a ClimateSimInstance, DefaultClimateSimError> {
    // SAFETY: callers promise `ptr` is null or came from `climate_sim_new` and
    // has not been destroyed.
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultClimateSimError::null_pointer("instance"))
}

/// Run `func` under the simulation read lock
pub(crate) fn with_sim<F, T>(
    instance: &ClimateSimInstance,
    func: F,
) -> Result<T, DefaultClimateSimError>
where
    F: FnOnce(&ClimateSimulation) -> T,
{
    let sim = instance
        .sim
        .read()
        .map_err(|_| DefaultClimateSimError::lock_poisoned("RwLock"))?;
    Ok(func(&sim))
}

/// Run `func` under the simulation write lock
pub(crate) fn with_sim_mut<F, T>(
    instance: &ClimateSimInstance,
    func: F,
) -> Result<T, DefaultClimateSimError>
where
    F: FnOnce(&mut ClimateSimulation) -> T,
{
    let mut sim = instance
        .sim
        .write()
        .map_err(|_| DefaultClimateSimError::lock_poisoned("RwLock"))?;
    Ok(func(&mut sim))
}

/// Map the C layer selector (0 = ground, 1 = solar, 2 = atmosphere) to a [`LayerKind`]
pub(crate) fn layer_kind_from_u8(kind: u8) -> Result<LayerKind, DefaultClimateSimError> {
    match kind {
        0 => Ok(LayerKind::Ground),
        1 => Ok(LayerKind::Solar),
        2 => Ok(LayerKind::Atmosphere),
        _ => Err(DefaultClimateSimError::invalid_parameter(format!(
            "Invalid layer kind: {kind}. Must be 0-2"
        ))),
    }
}
