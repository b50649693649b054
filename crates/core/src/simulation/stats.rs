//! Summary statistics of the simulation state

use crate::core_types::units::Seconds;
use serde::{Deserialize, Serialize};

/// Minimum, mean and maximum of one field
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldSummary {
    /// Smallest value (NaN ignored)
    pub min: f64,
    /// Arithmetic mean of all values (NaN if any value is NaN)
    pub mean: f64,
    /// Largest value (NaN ignored)
    pub max: f64,
}

impl FieldSummary {
    /// Summarize a slice. An empty slice summarizes to all zeros.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let (min, max, sum) = values.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(lo, hi, sum), &v| (lo.min(v), hi.max(v), sum + v),
        );

        Self {
            min,
            mean: sum / values.len() as f64,
            max,
        }
    }
}

/// Snapshot of simulation progress for reporting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Simulation time
    pub time: Seconds,
    /// Completed steps
    pub step_count: u64,
    /// Ground temperature (K)
    pub ground_temperature: FieldSummary,
    /// Layer-0 atmosphere temperature (K)
    pub atmosphere_temperature: FieldSummary,
    /// Solar flux of the most recent step (W/m²)
    pub solar_flux: FieldSummary,
    /// False once any temperature has overflowed or become NaN
    pub all_finite: bool,
}
