//! Error types for the climate simulation engine

use std::fmt;

/// Errors raised by the simulation engine.
///
/// Numeric divergence from an unstable timestep is not reported: the
/// explicit scheme is never checked, and diverged fields simply hold NaN or
/// infinite values (see [`crate::SimulationStats::all_finite`]).
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The configuration cannot produce a usable grid. Raised at construction.
    InvalidConfiguration {
        /// Name of the offending configuration field
        parameter: &'static str,
        /// What is wrong with it
        message: String,
    },
    /// An atmosphere layer index past the configured layer count was requested
    LayerOutOfRange {
        /// Requested layer index
        requested: usize,
        /// Number of configured layers
        available: usize,
    },
}

impl SimulationError {
    pub(crate) fn invalid_configuration(parameter: &'static str, message: impl Into<String>) -> Self {
        SimulationError::InvalidConfiguration {
            parameter,
            message: message.into(),
        }
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidConfiguration { parameter, message } => {
                write!(f, "Invalid configuration '{parameter}': {message}")
            }
            SimulationError::LayerOutOfRange {
                requested,
                available,
            } => write!(
                f,
                "Atmosphere layer {requested} out of range (simulation has {available} layers)"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SimulationError::invalid_configuration("grid_resolution", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration 'grid_resolution': must be positive"
        );

        let err = SimulationError::LayerOutOfRange {
            requested: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Atmosphere layer 3 out of range (simulation has 1 layers)"
        );
    }
}
