//! Semantic unit types for type-safe physical quantity handling
//!
//! Newtype wrappers keep the configuration of a simulation from mixing up
//! seconds, meters, degrees and fluxes that are all plain `f64` underneath.
//!
//! # Design Philosophy
//! - All quantities use f64: the radiative update raises temperatures to the
//!   fourth power, and solar positions are derived from long time spans
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Serde support for serialization (each unit serializes as a bare number)
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Private inner fields with explicit constructors
//!
//! # Usage
//! ```
//! use climate_sim_core::core_types::units::{Degrees, Kelvin, Seconds};
//!
//! let day = Seconds::new(86400.0);
//! let step = Seconds::new(540.0);
//! assert_eq!(*day / *step, 160.0);
//!
//! let lat = Degrees::new(90.0);
//! assert!((lat.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let t = Kelvin::new(270.0);
//! assert_eq!(t.min(Kelvin::new(300.0)), Kelvin::new(270.0));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, Div, Mul, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// TEMPERATURE
// ============================================================================

/// Absolute temperature in Kelvin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Kelvin(f64);

impl Eq for Kelvin {}

impl PartialOrd for Kelvin {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kelvin {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Kelvin {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Kelvin {
    /// Absolute zero
    pub const ABSOLUTE_ZERO: Kelvin = Kelvin(0.0);

    /// Create a new Kelvin temperature. Asserts value >= absolute zero (0 K).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(
            value >= 0.0,
            "Kelvin::new: value is below absolute zero (0 K)"
        );
        Kelvin(value)
    }

    /// Get the raw value in Kelvin
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Fourth power of the temperature (K⁴), the Stefan-Boltzmann term
    #[inline]
    #[must_use]
    pub fn fourth_power(self) -> f64 {
        self.0.powi(4)
    }
}

impl From<f64> for Kelvin {
    fn from(v: f64) -> Self {
        Kelvin::new(v)
    }
}

impl From<Kelvin> for f64 {
    fn from(k: Kelvin) -> f64 {
        k.0
    }
}

impl PartialEq<f64> for Kelvin {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Kelvin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} K", self.0)
    }
}

// ============================================================================
// TIME
// ============================================================================

/// Duration or point in simulated time, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Seconds(f64);

impl Eq for Seconds {}

impl PartialOrd for Seconds {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Seconds {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Seconds {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Seconds {
    /// Zero seconds, the start of every simulation
    pub const ZERO: Seconds = Seconds(0.0);

    /// Create a new time value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Seconds(value)
    }

    /// Get the raw value in seconds
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to hours
    #[inline]
    #[must_use]
    pub fn to_hours(self) -> f64 {
        self.0 / 3600.0
    }
}

impl Add for Seconds {
    type Output = Seconds;
    fn add(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 + rhs.0)
    }
}

impl AddAssign for Seconds {
    fn add_assign(&mut self, rhs: Seconds) {
        self.0 += rhs.0;
    }
}

impl Sub for Seconds {
    type Output = Seconds;
    fn sub(self, rhs: Seconds) -> Seconds {
        Seconds(self.0 - rhs.0)
    }
}

impl Mul<f64> for Seconds {
    type Output = Seconds;
    fn mul(self, rhs: f64) -> Seconds {
        Seconds(self.0 * rhs)
    }
}

impl Div<f64> for Seconds {
    type Output = Seconds;
    fn div(self, rhs: f64) -> Seconds {
        Seconds(self.0 / rhs)
    }
}

impl From<f64> for Seconds {
    fn from(v: f64) -> Self {
        Seconds(v)
    }
}

impl From<Seconds> for f64 {
    fn from(s: Seconds) -> f64 {
        s.0
    }
}

impl PartialEq<f64> for Seconds {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} s", self.0)
    }
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Distance in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f64);

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Meters {
    /// Create a new distance
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Meters(value)
    }

    /// Get the raw value in meters
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to kilometers
    #[inline]
    #[must_use]
    pub fn to_kilometers(self) -> f64 {
        self.0 / 1000.0
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

impl Div<f64> for Meters {
    type Output = Meters;
    fn div(self, rhs: f64) -> Meters {
        Meters(self.0 / rhs)
    }
}

impl From<f64> for Meters {
    fn from(v: f64) -> Self {
        Meters(v)
    }
}

impl From<Meters> for f64 {
    fn from(m: Meters) -> f64 {
        m.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m", self.0)
    }
}

// ============================================================================
// ANGLE
// ============================================================================

/// Angle in degrees (latitude, longitude, grid resolution)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw value in degrees
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> f64 {
        self.0 * std::f64::consts::PI / 180.0
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

// ============================================================================
// RADIATIVE FLUX
// ============================================================================

/// Radiative flux density in W/m²
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct WattsPerSquareMeter(f64);

impl Eq for WattsPerSquareMeter {}

impl PartialOrd for WattsPerSquareMeter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WattsPerSquareMeter {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for WattsPerSquareMeter {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl WattsPerSquareMeter {
    /// Create a new flux value
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        WattsPerSquareMeter(value)
    }

    /// Get the raw value in W/m²
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Mul<f64> for WattsPerSquareMeter {
    type Output = WattsPerSquareMeter;
    fn mul(self, rhs: f64) -> WattsPerSquareMeter {
        WattsPerSquareMeter(self.0 * rhs)
    }
}

impl From<f64> for WattsPerSquareMeter {
    fn from(v: f64) -> Self {
        WattsPerSquareMeter(v)
    }
}

impl From<WattsPerSquareMeter> for f64 {
    fn from(w: WattsPerSquareMeter) -> f64 {
        w.0
    }
}

impl fmt::Display for WattsPerSquareMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} W/m²", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_ordering_and_display() {
        let cold = Kelvin::new(250.0);
        let warm = Kelvin::new(300.0);
        assert!(cold < warm);
        assert_eq!(cold.max(warm), warm);
        assert_eq!(format!("{warm}"), "300.0 K");
    }

    #[test]
    #[should_panic(expected = "below absolute zero")]
    fn test_kelvin_rejects_negative() {
        let _ = Kelvin::new(-1.0);
    }

    #[test]
    fn test_kelvin_fourth_power() {
        let t = Kelvin::new(10.0);
        assert_eq!(t.fourth_power(), 10_000.0);
    }

    #[test]
    fn test_seconds_accumulate() {
        let mut t = Seconds::ZERO;
        for _ in 0..4 {
            t += Seconds::new(540.0);
        }
        assert_eq!(t, 2160.0);
        assert_eq!((t - Seconds::new(160.0)).value(), 2000.0);
        assert_eq!(Seconds::new(7200.0).to_hours(), 2.0);
    }

    #[test]
    fn test_degrees_to_radians() {
        assert_eq!(Degrees::new(0.0).to_radians(), 0.0);
        assert!((Degrees::new(180.0).to_radians() - std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_unit_conversions() {
        let m = Meters::new(6_400_000.0);
        assert_eq!(m.to_kilometers(), 6400.0);
        assert_eq!(f64::from(WattsPerSquareMeter::new(1370.0) * 0.5), 685.0);
    }
}
