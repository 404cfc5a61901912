//! # Calculation Constants
//!
//! Every empirical constant and placeholder allowance used by the pipeline,
//! gathered into one injectable bundle instead of literals scattered through
//! the stage functions. Callers that want behavioral parity with the
//! reference worksheet use [`CalcConstants::default`]; tests and future
//! drive-sizing work can override individual values.
//!
//! | Constant                  | Default  | Used by              |
//! |---------------------------|----------|----------------------|
//! | gravity_m_s2              | 9.81     | resistances, tension |
//! | drive_friction_mu         | 0.35     | tension (capstan)    |
//! | motor_safety_factor       | 1.2      | power                |
//! | min_pretension_n          | 5000     | tension floor        |
//! | pulley_diameter_mm        | 600      | pulley sizing        |
//! | belt_bending_n            | 500      | resistances          |
//! | skirt_unit_n_per_m        | 60       | resistances          |
//! | hopper_pullout_n          | 1500     | resistances          |
//! | scraper_unit_n            | 1500     | resistances          |
//! | plough_unit_n             | 800      | resistances          |
//! | face_width_clearance_mm   | 100      | pulley sizing        |
//! | area_factor_deep/shallow  | 0.17/0.13| capacity             |
//!
//! ## Example
//!
//! ```rust
//! use conveyor_core::constants::CalcConstants;
//!
//! // Lunar conveyor: same pipeline, different gravity
//! let constants = CalcConstants::default().with_gravity(1.62);
//! assert_eq!(constants.gravity_m_s2, 1.62);
//! ```

use serde::{Deserialize, Serialize};

/// Injectable constant bundle for the conveyor pipeline.
///
/// The pulley diameter, belt bending allowance, and the per-unit accessory
/// resistances are worksheet placeholders rather than derived quantities;
/// keeping them here makes that explicit and overridable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalcConstants {
    /// Gravitational acceleration (m/s²)
    pub gravity_m_s2: f64,

    /// Drive pulley friction coefficient μ (rubber lagging on steel)
    pub drive_friction_mu: f64,

    /// Installed motor margin over shaft power (SFM)
    pub motor_safety_factor: f64,

    /// Minimum slack-side pre-tension floor (N)
    pub min_pretension_n: f64,

    /// Drive pulley diameter (mm). Placeholder: not derived from belt
    /// rating or tension.
    pub pulley_diameter_mm: f64,

    /// Belt bending resistance over pulleys (N). Placeholder for a
    /// tension/thickness-dependent term.
    pub belt_bending_n: f64,

    /// Skirtboard friction allowance per metre of skirt, per side (N/m)
    pub skirt_unit_n_per_m: f64,

    /// Hopper pull-out shear allowance when a hopper is present (N)
    pub hopper_pullout_n: f64,

    /// Resistance allowance per belt scraper (N)
    pub scraper_unit_n: f64,

    /// Resistance allowance per discharge plough (N)
    pub plough_unit_n: f64,

    /// Pulley face width clearance beyond belt width (mm)
    pub face_width_clearance_mm: f64,

    /// Cross-section area factor for trough angles at or above the bin edge
    pub area_factor_deep: f64,

    /// Cross-section area factor for trough angles below the bin edge
    pub area_factor_shallow: f64,

    /// Trough angle (deg) at which the deep area factor starts (inclusive)
    pub trough_bin_edge_deg: f64,
}

impl Default for CalcConstants {
    fn default() -> Self {
        Self {
            gravity_m_s2: 9.81,
            drive_friction_mu: 0.35,
            motor_safety_factor: 1.2,
            min_pretension_n: 5000.0,
            pulley_diameter_mm: 600.0,
            belt_bending_n: 500.0,
            skirt_unit_n_per_m: 60.0,
            hopper_pullout_n: 1500.0,
            scraper_unit_n: 1500.0,
            plough_unit_n: 800.0,
            face_width_clearance_mm: 100.0,
            area_factor_deep: 0.17,
            area_factor_shallow: 0.13,
            trough_bin_edge_deg: 30.0,
        }
    }
}

impl CalcConstants {
    /// Reference worksheet defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Override gravitational acceleration
    pub fn with_gravity(mut self, gravity_m_s2: f64) -> Self {
        self.gravity_m_s2 = gravity_m_s2;
        self
    }

    /// Override the drive friction coefficient
    pub fn with_drive_friction(mut self, mu: f64) -> Self {
        self.drive_friction_mu = mu;
        self
    }

    /// Override the installed motor safety margin
    pub fn with_safety_factor(mut self, factor: f64) -> Self {
        self.motor_safety_factor = factor;
        self
    }

    /// Override the slack-side pre-tension floor
    pub fn with_min_pretension(mut self, newtons: f64) -> Self {
        self.min_pretension_n = newtons;
        self
    }

    /// Override the drive pulley diameter
    pub fn with_pulley_diameter(mut self, mm: f64) -> Self {
        self.pulley_diameter_mm = mm;
        self
    }

    /// Area factor for a given trough angle (two-bin approximation of the
    /// CEMA cross-section tables; the bin edge is inclusive on the deep side).
    pub fn area_factor(&self, trough_angle_deg: f64) -> f64 {
        if trough_angle_deg >= self.trough_bin_edge_deg {
            self.area_factor_deep
        } else {
            self.area_factor_shallow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_worksheet() {
        let c = CalcConstants::default();
        assert_eq!(c.gravity_m_s2, 9.81);
        assert_eq!(c.drive_friction_mu, 0.35);
        assert_eq!(c.motor_safety_factor, 1.2);
        assert_eq!(c.min_pretension_n, 5000.0);
        assert_eq!(c.pulley_diameter_mm, 600.0);
    }

    #[test]
    fn test_area_factor_bin_edge_inclusive() {
        let c = CalcConstants::default();
        assert_eq!(c.area_factor(30.0), 0.17);
        assert_eq!(c.area_factor(29.999), 0.13);
        assert_eq!(c.area_factor(35.0), 0.17);
        assert_eq!(c.area_factor(20.0), 0.13);
    }

    #[test]
    fn test_builder_overrides() {
        let c = CalcConstants::new()
            .with_gravity(1.62)
            .with_drive_friction(0.25)
            .with_min_pretension(2000.0);
        assert_eq!(c.gravity_m_s2, 1.62);
        assert_eq!(c.drive_friction_mu, 0.25);
        assert_eq!(c.min_pretension_n, 2000.0);
        // Untouched fields keep their defaults
        assert_eq!(c.pulley_diameter_mm, 600.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let c = CalcConstants::default();
        let json = serde_json::to_string(&c).unwrap();
        let roundtrip: CalcConstants = serde_json::from_str(&json).unwrap();
        assert_eq!(c, roundtrip);
    }
}
