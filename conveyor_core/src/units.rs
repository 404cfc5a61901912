//! # Unit Types
//!
//! Type-safe wrappers for the SI units used in conveyor design. These are
//! lightweight f64 newtypes rather than a full units library:
//!
//! - Conveyor work uses a small, consistent SI set
//! - JSON serialization stays clean (just numbers)
//! - Zero runtime overhead
//!
//! ## SI Units (Primary)
//!
//! - Length: metres (m), millimetres (mm)
//! - Angle: degrees, radians
//! - Force: newtons (N), kilonewtons (kN)
//!
//! Speeds, powers, throughputs and linear masses stay plain `f64` fields
//! with unit-suffixed names; they never cross a unit boundary, so a wrapper
//! would add conversion ceremony without catching anything.
//!
//! ## Example
//!
//! ```rust
//! use conveyor_core::units::{Millimeters, Meters, Degrees, Radians};
//!
//! let belt_width = Millimeters(800.0);
//! let width_m: Meters = belt_width.into();
//! assert_eq!(width_m.0, 0.8);
//!
//! let wrap: Radians = Degrees(180.0).into();
//! assert!((wrap.0 - std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Degrees);
impl_arithmetic!(Radians);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_m() {
        let mm = Millimeters(800.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 0.8);
    }

    #[test]
    fn test_degrees_to_radians() {
        let rad: Radians = Degrees(180.0).into();
        assert!((rad.0 - std::f64::consts::PI).abs() < 1e-12);

        let back: Degrees = rad.into();
        assert!((back.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_newtons_to_kilonewtons() {
        let n = Newtons(5000.0);
        let kn: Kilonewtons = n.into();
        assert_eq!(kn.0, 5.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Newtons(1200.0);
        let b = Newtons(300.0);
        assert_eq!((a + b).0, 1500.0);
        assert_eq!((a - b).0, 900.0);
        assert_eq!((a * 2.0).0, 2400.0);
        assert_eq!((a / 2.0).0, 600.0);
    }

    #[test]
    fn test_serialization() {
        let width = Meters(0.8);
        let json = serde_json::to_string(&width).unwrap();
        assert_eq!(json, "0.8");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(width, roundtrip);
    }
}
