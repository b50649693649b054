//! Climate Simulation Core Library
//!
//! A simplified planetary energy-balance model stepping forward on a
//! latitude/longitude grid. Each step a point-source sun heats the day side,
//! the ground exchanges longwave radiation with a single atmosphere layer, and
//! the resulting fields can be exported as flat 2D arrays for rendering.
//!
//! ## Model
//!
//! - Half-open lat/lon grid built from a resolution in degrees
//! - Solar forcing with a sub-solar point circling the planet once per day
//! - Explicit Euler radiative balance for ground and atmosphere layer 0
//! - Wind, pressure, density and albedo fields allocated but not simulated

// Core types and utilities
pub mod core_types;

pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod physics;
pub mod simulation;
pub mod solver;

// Re-export core types
pub use core_types::{Degrees, Kelvin, Meters, Seconds, WattsPerSquareMeter};

// Re-export simulation types
pub use config::SimulationConfig;
pub use error::SimulationError;
pub use export::{ExportedLayer, LayerKind};
pub use grid::LatLonGrid;
pub use physics::PhysicalConstants;
pub use simulation::{ClimateSimulation, FieldSummary, SimulationStats};
