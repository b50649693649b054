use climate_sim_core::SimulationError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait ClimateSimError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> ClimateSimErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `ClimateSimError` for common FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultClimateSimError {
    code: ClimateSimErrorCode,
    msg: String,
}

impl DefaultClimateSimError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"ptr"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: ClimateSimErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for poisoned lock.
    pub fn lock_poisoned(lock_name: &str) -> Self {
        Self {
            code: ClimateSimErrorCode::LockPoisoned,
            msg: format!("Lock '{lock_name}' was poisoned by a panic in another thread"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self {
            code: ClimateSimErrorCode::BufferTooSmall,
            msg: format!("Output buffer holds {capacity} values but {required} are required"),
        }
    }

    /// Create error for invalid parameter.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: ClimateSimErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<SimulationError> for DefaultClimateSimError {
    fn from(error: SimulationError) -> Self {
        let code = match error {
            SimulationError::InvalidConfiguration { .. } => {
                ClimateSimErrorCode::InvalidConfiguration
            }
            SimulationError::LayerOutOfRange { .. } => ClimateSimErrorCode::LayerOutOfRange,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl ClimateSimError for DefaultClimateSimError {
    fn code(&self) -> ClimateSimErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by climate simulation functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateSimErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Lock poisoned: internal synchronization primitive was poisoned by a panic.
    LockPoisoned = 2,

    /// Configuration rejected: resolution, layer count or day length out of range.
    InvalidConfiguration = 3,

    /// Requested atmosphere layer does not exist.
    LayerOutOfRange = 4,

    /// Caller-provided output buffer is too small; the required length is still reported.
    BufferTooSmall = 5,

    /// Invalid parameter passed to function.
    InvalidParameter = 6,
}

impl From<DefaultClimateSimError> for ClimateSimErrorCode {
    fn from(error: DefaultClimateSimError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored so the pointer handed out stays valid until the next error.
    static LAST_ERROR: RefCell<(Option<CString>, ClimateSimErrorCode)> = const { RefCell::new((None, ClimateSimErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, ClimateSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, ClimateSimErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or the message cannot be converted to a C string.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread has its own independent error state.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread that sets or
/// clears the error. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// ClimateSimInstance* sim = nullptr;
/// ClimateSimConfig config = climate_sim_default_config();
/// config.grid_resolution = 0.0;
/// if (climate_sim_new(config, &sim) != ClimateSimErrorCode::Ok) {
///     printf("Climate sim creation failed: %s\n", climate_sim_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn climate_sim_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `ClimateSimErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn climate_sim_get_last_error_code() -> ClimateSimErrorCode {
    with_last_error(|(_cstring, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_maps_to_code() {
        let err = DefaultClimateSimError::from(SimulationError::LayerOutOfRange {
            requested: 3,
            available: 1,
        });
        assert_eq!(err.code(), ClimateSimErrorCode::LayerOutOfRange);
        assert!(err.msg().contains("Atmosphere layer 3"));
    }

    #[test]
    fn test_constructor_messages() {
        let err = DefaultClimateSimError::null_pointer("out_len");
        assert_eq!(err.code(), ClimateSimErrorCode::NullPointer);
        assert_eq!(err.msg(), "Parameter 'out_len' cannot be null");

        let err = DefaultClimateSimError::buffer_too_small(7200, 10);
        assert_eq!(ClimateSimErrorCode::from(err), ClimateSimErrorCode::BufferTooSmall);
    }
}
