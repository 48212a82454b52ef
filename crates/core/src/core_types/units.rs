//! Semantic unit types for marine measurements
//!
//! Newtype wrappers for the physical quantities the scorer consumes, so wave
//! heights, wind speeds, and water temperatures cannot be mixed up at call
//! sites. All three use f32: the scoring bands are coarse enough that single
//! precision is adequate.
//!
//! The constructors do not validate ranges. The scorer is total over its
//! numeric input domain, so negative or absurd measurements are carried
//! through unchanged and simply produce clamped scores.
//!
//! # Usage
//! ```
//! use fishcast_core::core_types::units::{Knots, Meters};
//!
//! let wave = Meters::new(1.2);
//! let wind = Knots::new(14.0);
//! assert!((wind.to_kmh() - 25.928).abs() < 0.001);
//! assert!(wave < Meters::new(1.5));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Sub};

/// Compare f32 values with total ordering using Rust's built-in `total_cmp`
/// so NaN measurements from a faulty sensor still order deterministically
#[inline]
fn f32_total_cmp(a: f32, b: f32) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// LENGTH (wave height)
// ============================================================================

/// Length in meters, used for significant wave height
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Meters(f32);

impl PartialEq for Meters {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Meters {}

impl PartialOrd for Meters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Meters {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Meters {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Meters {
    /// Meters to feet conversion factor
    const FEET_PER_METER: f32 = 3.28084;

    /// Create a new length in meters
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Meters(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Convert to feet (some chart plotters report wave height in feet)
    #[inline]
    #[must_use]
    pub fn to_feet(self) -> f32 {
        self.0 * Self::FEET_PER_METER
    }
}

impl From<f32> for Meters {
    fn from(v: f32) -> Self {
        Meters(v)
    }
}

impl From<Meters> for f32 {
    fn from(m: Meters) -> f32 {
        m.0
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Meters;
    fn sub(self, rhs: Meters) -> Meters {
        Meters(self.0 - rhs.0)
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

// ============================================================================
// SPEED (wind)
// ============================================================================

/// Speed in knots, used for wind speed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Knots(f32);

impl PartialEq for Knots {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Knots {}

impl PartialOrd for Knots {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Knots {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Knots {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Knots {
    /// One knot in km/h (exact, by definition of the nautical mile)
    const KMH_PER_KNOT: f32 = 1.852;

    /// One knot in m/s
    const MPS_PER_KNOT: f32 = 0.514_444;

    /// Create a new speed in knots
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Knots(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Convert to km/h
    #[inline]
    #[must_use]
    pub fn to_kmh(self) -> f32 {
        self.0 * Self::KMH_PER_KNOT
    }

    /// Convert to m/s
    #[inline]
    #[must_use]
    pub fn to_mps(self) -> f32 {
        self.0 * Self::MPS_PER_KNOT
    }
}

impl From<f32> for Knots {
    fn from(v: f32) -> Self {
        Knots(v)
    }
}

impl From<Knots> for f32 {
    fn from(k: Knots) -> f32 {
        k.0
    }
}

impl Add for Knots {
    type Output = Knots;
    fn add(self, rhs: Knots) -> Knots {
        Knots(self.0 + rhs.0)
    }
}

impl Sub for Knots {
    type Output = Knots;
    fn sub(self, rhs: Knots) -> Knots {
        Knots(self.0 - rhs.0)
    }
}

impl fmt::Display for Knots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kn", self.0)
    }
}

// ============================================================================
// TEMPERATURE (water)
// ============================================================================

/// Temperature in degrees Celsius, used for sea surface temperature
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(f32);

impl PartialEq for Celsius {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Celsius {}

impl PartialOrd for Celsius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Celsius {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Celsius {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Celsius {
    /// Seawater freezing point at typical ocean salinity
    pub const SEAWATER_FREEZING: Celsius = Celsius(-1.8);

    /// Create a new temperature in degrees Celsius
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Celsius(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<f32> for Celsius {
    fn from(v: f32) -> Self {
        Celsius(v)
    }
}

impl From<Celsius> for f32 {
    fn from(c: Celsius) -> f32 {
        c.0
    }
}

impl Add for Celsius {
    type Output = Celsius;
    fn add(self, rhs: Celsius) -> Celsius {
        Celsius(self.0 + rhs.0)
    }
}

impl Sub for Celsius {
    type Output = Celsius;
    fn sub(self, rhs: Celsius) -> Celsius {
        Celsius(self.0 - rhs.0)
    }
}

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} °C", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knots_conversions() {
        let wind = Knots::new(10.0);
        assert!((wind.to_kmh() - 18.52).abs() < 0.001);
        assert!((wind.to_mps() - 5.14444).abs() < 0.001);
    }

    #[test]
    fn test_meters_to_feet() {
        let wave = Meters::new(2.0);
        assert!((wave.to_feet() - 6.56168).abs() < 0.001);
    }

    #[test]
    fn test_total_ordering_handles_nan() {
        // A faulty sensor can deliver NaN; ordering must stay deterministic
        let good = Meters::new(1.0);
        let bad = Meters::new(f32::NAN);
        assert_eq!(good.min(bad), good);
        assert_eq!(bad.max(good), bad);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Knots::new(12.0) + Knots::new(3.0), Knots::new(15.0));
        assert_eq!(Celsius::new(20.0) - Celsius::new(4.5), Celsius::new(15.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Meters::new(1.25).to_string(), "1.25 m");
        assert_eq!(Knots::new(14.0).to_string(), "14.0 kn");
        assert_eq!(Celsius::new(19.5).to_string(), "19.5 °C");
    }
}
