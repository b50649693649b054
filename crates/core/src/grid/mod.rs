//! Planet surface discretization

pub mod lat_lon;

// Re-export main types
pub use lat_lon::*;
