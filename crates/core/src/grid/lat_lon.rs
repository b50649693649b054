//! Latitude/longitude grid for the planet surface
//!
//! Grid points are generated with half-open stepped ranges:
//! latitudes from -90° up to (excluding) +90°, longitudes from 0° up to
//! (excluding) 360°. A resolution that does not divide the span evenly is
//! truncated, so with a 7° grid the last latitude is 85°.
//!
//! # Derived metrics
//!
//! ```text
//! circumference     = 2π·R
//! dy                = circumference / n_lat
//! dx[lat]           = dy·cos(lat)
//! f[lat] (Coriolis) = Ω·sin(lat),  Ω = 2π / day_length
//! ```
//!
//! `dx` and the Coriolis parameter are inert: the radiative update never
//! reads them.

use crate::core_types::units::{Degrees, Meters, Seconds};
use std::f64::consts::PI;

/// Lower bound of the latitude range (degrees, inclusive)
pub const LATITUDE_START: f64 = -90.0;
/// Upper bound of the latitude range (degrees, exclusive)
pub const LATITUDE_STOP: f64 = 90.0;
/// Lower bound of the longitude range (degrees, inclusive)
pub const LONGITUDE_START: f64 = 0.0;
/// Upper bound of the longitude range (degrees, exclusive)
pub const LONGITUDE_STOP: f64 = 360.0;

/// Generate `start, start + step, start + 2·step, …` while the value is `< stop`.
///
/// Each value is computed as `start + i·step` rather than by accumulation, so
/// rounding error does not build up along the sequence. Returns an empty
/// sequence when `step` is not finite and positive.
#[must_use]
pub fn stepped_range(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 || start >= stop {
        return Vec::new();
    }

    let expected_len = ((stop - start) / step).ceil() as usize;
    let mut values = Vec::with_capacity(expected_len.min(1 << 16));
    let mut i = 0_usize;
    loop {
        let value = start + i as f64 * step;
        if value >= stop {
            break;
        }
        values.push(value);
        i += 1;
    }
    values
}

/// Fixed latitude/longitude discretization of the planet surface
#[derive(Debug, Clone, PartialEq)]
pub struct LatLonGrid {
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    resolution: Degrees,
    circumference: Meters,
    grid_spacing_y: Meters,
    grid_spacing_x: Vec<f64>,
    angular_speed: f64,
    coriolis: Vec<f64>,
}

impl LatLonGrid {
    /// Build the grid for a resolution, planet radius and rotation period.
    ///
    /// The grid itself never fails to build; a non-positive resolution gives
    /// empty coordinate sequences, which the simulation rejects.
    #[must_use]
    pub fn new(resolution: Degrees, planet_radius: Meters, day_length: Seconds) -> Self {
        let latitudes = stepped_range(LATITUDE_START, LATITUDE_STOP, *resolution);
        let longitudes = stepped_range(LONGITUDE_START, LONGITUDE_STOP, *resolution);

        let circumference = 2.0 * PI * *planet_radius;
        let grid_spacing_y = if latitudes.is_empty() {
            0.0
        } else {
            circumference / latitudes.len() as f64
        };

        let angular_speed = 2.0 * PI / *day_length;
        let grid_spacing_x = latitudes
            .iter()
            .map(|&lat| grid_spacing_y * Degrees::new(lat).to_radians().cos())
            .collect();
        let coriolis = latitudes
            .iter()
            .map(|&lat| angular_speed * Degrees::new(lat).to_radians().sin())
            .collect();

        Self {
            latitudes,
            longitudes,
            resolution,
            circumference: Meters::new(circumference),
            grid_spacing_y: Meters::new(grid_spacing_y),
            grid_spacing_x,
            angular_speed,
            coriolis,
        }
    }

    /// Latitude of every grid row (degrees, strictly increasing)
    pub fn latitudes(&self) -> &[f64] {
        &self.latitudes
    }

    /// Longitude of every grid column (degrees, strictly increasing)
    pub fn longitudes(&self) -> &[f64] {
        &self.longitudes
    }

    /// Number of latitude rows (field height)
    pub fn n_lat(&self) -> usize {
        self.latitudes.len()
    }

    /// Number of longitude columns (field width)
    pub fn n_lon(&self) -> usize {
        self.longitudes.len()
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> usize {
        self.n_lat() * self.n_lon()
    }

    /// Row-major index of a cell (latitude row, longitude column)
    #[inline]
    pub fn index(&self, lat_idx: usize, lon_idx: usize) -> usize {
        lat_idx * self.n_lon() + lon_idx
    }

    /// Grid spacing in degrees
    pub fn resolution(&self) -> Degrees {
        self.resolution
    }

    /// Planet circumference (2πR)
    pub fn circumference(&self) -> Meters {
        self.circumference
    }

    /// North-south distance between grid rows
    pub fn grid_spacing_y(&self) -> Meters {
        self.grid_spacing_y
    }

    /// East-west distance between grid columns for each latitude row (m)
    pub fn grid_spacing_x(&self) -> &[f64] {
        &self.grid_spacing_x
    }

    /// Planetary rotation rate (rad/s)
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Coriolis parameter for each latitude row (1/s)
    pub fn coriolis(&self) -> &[f64] {
        &self.coriolis
    }
}
