//! Field storage and the grid-wide radiative solver
//!
//! # Feature Flags
//!
//! - `parallel`: distribute grid rows over the Rayon thread pool. Off by
//!   default; a step still completes before `step()` returns either way.

mod cpu;
mod fields;
mod radiative;

// Re-exports
pub use cpu::CpuRadiativeSolver;
pub use fields::{AtmosphereField, ScalarField};
pub use radiative::{step_radiative_cpu, RadiativeInputs};
