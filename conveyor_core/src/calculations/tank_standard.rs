//! # Tank Standard Selector
//!
//! Early-phase classifier for the storage-tank product line: given the
//! design pressure/vacuum/temperature envelope, recommend API 650
//! (atmospheric), API 620 (low pressure) or flag the envelope as outside
//! both. A practical workflow gate, not a code check: the engineer still
//! verifies against the governing edition and project spec.
//!
//! ## Example
//!
//! ```rust
//! use conveyor_core::calculations::tank_standard::{
//!     select_standard, EnvelopeInput, TankStandard, UnitSystem,
//! };
//!
//! let envelope = EnvelopeInput {
//!     label: "TK-01".to_string(),
//!     units: UnitSystem::Si,
//!     design_pressure: 10.0, // kPa(g)
//!     design_vacuum: 0.0,
//!     t_min: -5.0,
//!     t_max: 60.0,
//! };
//!
//! let decision = select_standard(&envelope);
//! assert_eq!(decision.recommended, TankStandard::Api650);
//! ```

use serde::{Deserialize, Serialize};

/// Unit system of the raw envelope values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitSystem {
    /// kPa(g) and °C
    #[default]
    #[serde(rename = "SI")]
    Si,
    /// psi(g) and °F
    #[serde(rename = "US")]
    Us,
}

/// Recommended design standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TankStandard {
    /// API 650: welded tanks, near-atmospheric internal pressure
    #[serde(rename = "API_650")]
    Api650,
    /// API 620: large low-pressure storage tanks
    #[serde(rename = "API_620")]
    Api620,
    /// Beyond both; evaluate under a pressure vessel code
    #[serde(rename = "OUT_OF_SCOPE")]
    OutOfScope,
}

/// Confidence in the recommendation. Downgraded by inconsistent inputs,
/// near-threshold pressures and extreme temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Design envelope for one tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeInput {
    /// User label (e.g., "TK-01")
    pub label: String,

    /// Unit system for the raw values below
    pub units: UnitSystem,

    /// Internal design pressure, gauge (kPa or psi per `units`)
    pub design_pressure: f64,

    /// Design vacuum, entered as a positive magnitude (kPa or psi)
    pub design_vacuum: f64,

    /// Minimum design temperature (°C or °F)
    pub t_min: f64,

    /// Maximum design temperature (°C or °F)
    pub t_max: f64,
}

/// Envelope normalized to kPa and °C, echoed back for display and logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEnvelope {
    pub design_pressure_kpa: f64,
    pub design_vacuum_kpa: f64,
    pub t_min_c: f64,
    pub t_max_c: f64,
}

/// Outcome of the standard selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardDecision {
    pub recommended: TankStandard,
    pub confidence: Confidence,
    /// Why this standard was picked
    pub reasons: Vec<String>,
    /// Review notes that do not change the recommendation
    pub warnings: Vec<String>,
    pub normalized: NormalizedEnvelope,
}

const PSI_TO_KPA: f64 = 6.894757;

/// Practical pressure gate for API 650 (~2.5 psig)
const API650_P_MAX_KPA: f64 = 17.2;
/// Practical pressure gate for API 620 (~15 psig)
const API620_P_MAX_KPA: f64 = 103.4;

/// High-temperature review threshold (°C)
const T_MAX_REVIEW_C: f64 = 93.0;
/// Low-temperature toughness review threshold (°C)
const T_MIN_REVIEW_C: f64 = -20.0;

fn psi_to_kpa(x: f64) -> f64 {
    x * PSI_TO_KPA
}

fn f_to_c(f: f64) -> f64 {
    (f - 32.0) * (5.0 / 9.0)
}

fn near(x: f64, reference: f64, pct: f64) -> bool {
    (x - reference).abs() <= reference * pct
}

/// Select the indicated design standard for a tank envelope.
///
/// Total over its input: inconsistent values (negative pressure, inverted
/// temperature range) produce warnings and lower confidence rather than an
/// error, because the gate runs live while the user is still typing.
pub fn select_standard(envelope: &EnvelopeInput) -> StandardDecision {
    let mut reasons = Vec::new();
    let mut warnings = Vec::new();

    // Normalize to kPa / °C so all rules read in one unit system
    let (p_kpa, v_kpa, t_min_c, t_max_c) = match envelope.units {
        UnitSystem::Si => (
            envelope.design_pressure,
            envelope.design_vacuum,
            envelope.t_min,
            envelope.t_max,
        ),
        UnitSystem::Us => (
            psi_to_kpa(envelope.design_pressure),
            psi_to_kpa(envelope.design_vacuum),
            f_to_c(envelope.t_min),
            f_to_c(envelope.t_max),
        ),
    };

    // Confidence score: 3 high, 1 low
    let mut conf_score: u8 = 3;
    let downgrade = |score: &mut u8| *score = (*score - 1).max(1);

    if p_kpa < 0.0 {
        warnings.push("Internal design pressure should not be negative.".to_string());
        downgrade(&mut conf_score);
    }
    if v_kpa < 0.0 {
        warnings.push("Design vacuum should be entered as a positive magnitude.".to_string());
        downgrade(&mut conf_score);
    }
    if t_max_c < t_min_c {
        warnings.push(
            "Maximum temperature is below minimum temperature; check the inputs.".to_string(),
        );
        downgrade(&mut conf_score);
    }

    // Primary rule: internal pressure regime
    let recommended = if p_kpa <= API650_P_MAX_KPA {
        reasons.push(
            "Internal design pressure is in the near-atmospheric regime (API 650 territory)."
                .to_string(),
        );
        TankStandard::Api650
    } else if p_kpa <= API620_P_MAX_KPA {
        reasons.push(
            "Internal design pressure is in the low-pressure tank regime (API 620 territory)."
                .to_string(),
        );
        TankStandard::Api620
    } else {
        reasons.push(
            "Internal design pressure exceeds the practical scope of atmospheric and low-pressure tanks."
                .to_string(),
        );
        warnings.push(
            "Evaluate under a pressure vessel code or another design scheme per the project spec."
                .to_string(),
        );
        // High confidence on out-of-scope, to stop the user early
        conf_score = 3;
        TankStandard::OutOfScope
    };

    if v_kpa > 0.0 {
        warnings.push(
            "Vacuum is defined: include external pressure / buckling verification in the design cases."
                .to_string(),
        );
    }

    if t_max_c > T_MAX_REVIEW_C {
        warnings.push(
            "Maximum temperature is relatively high: confirm material allowables and standard scope."
                .to_string(),
        );
        downgrade(&mut conf_score);
    }
    if t_min_c < T_MIN_REVIEW_C {
        warnings.push(
            "Minimum temperature is relatively low: check impact test / toughness requirements."
                .to_string(),
        );
        downgrade(&mut conf_score);
    }

    // Near-threshold pressures make the pick less certain
    let near_edge = match recommended {
        TankStandard::Api650 => near(p_kpa, API650_P_MAX_KPA, 0.1),
        TankStandard::Api620 => {
            near(p_kpa, API650_P_MAX_KPA, 0.1) || near(p_kpa, API620_P_MAX_KPA, 0.1)
        }
        TankStandard::OutOfScope => false,
    };
    if near_edge {
        warnings.push(
            "Pressure is close to a selection threshold: verify the standard choice against the governing edition."
                .to_string(),
        );
        downgrade(&mut conf_score);
    }

    let confidence = match conf_score {
        3 => Confidence::High,
        2 => Confidence::Medium,
        _ => Confidence::Low,
    };

    StandardDecision {
        recommended,
        confidence,
        reasons,
        warnings,
        normalized: NormalizedEnvelope {
            design_pressure_kpa: p_kpa,
            design_vacuum_kpa: v_kpa,
            t_min_c,
            t_max_c,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn si_envelope(pressure_kpa: f64) -> EnvelopeInput {
        EnvelopeInput {
            label: "TK-01".to_string(),
            units: UnitSystem::Si,
            design_pressure: pressure_kpa,
            design_vacuum: 0.0,
            t_min: 0.0,
            t_max: 50.0,
        }
    }

    #[test]
    fn test_atmospheric_selects_api_650() {
        let decision = select_standard(&si_envelope(5.0));
        assert_eq!(decision.recommended, TankStandard::Api650);
        assert_eq!(decision.confidence, Confidence::High);
        assert!(decision.warnings.is_empty());
    }

    #[test]
    fn test_low_pressure_selects_api_620() {
        let decision = select_standard(&si_envelope(50.0));
        assert_eq!(decision.recommended, TankStandard::Api620);
        assert_eq!(decision.confidence, Confidence::High);
    }

    #[test]
    fn test_high_pressure_out_of_scope() {
        let decision = select_standard(&si_envelope(200.0));
        assert_eq!(decision.recommended, TankStandard::OutOfScope);
        // Out-of-scope keeps high confidence to stop the user early
        assert_eq!(decision.confidence, Confidence::High);
        assert!(!decision.warnings.is_empty());
    }

    #[test]
    fn test_gate_boundaries_inclusive() {
        assert_eq!(
            select_standard(&si_envelope(17.2)).recommended,
            TankStandard::Api650
        );
        assert_eq!(
            select_standard(&si_envelope(17.3)).recommended,
            TankStandard::Api620
        );
        assert_eq!(
            select_standard(&si_envelope(103.4)).recommended,
            TankStandard::Api620
        );
        assert_eq!(
            select_standard(&si_envelope(103.5)).recommended,
            TankStandard::OutOfScope
        );
    }

    #[test]
    fn test_us_units_normalized() {
        let envelope = EnvelopeInput {
            label: "TK-US".to_string(),
            units: UnitSystem::Us,
            design_pressure: 2.0, // psig
            design_vacuum: 0.5,
            t_min: 32.0,  // °F
            t_max: 212.0, // °F
        };
        let decision = select_standard(&envelope);

        assert!((decision.normalized.design_pressure_kpa - 13.789514).abs() < 1e-6);
        assert!((decision.normalized.t_min_c - 0.0).abs() < 1e-9);
        assert!((decision.normalized.t_max_c - 100.0).abs() < 1e-9);
        // 2 psig is near-atmospheric
        assert_eq!(decision.recommended, TankStandard::Api650);
    }

    #[test]
    fn test_near_threshold_downgrades_confidence() {
        // 16.5 kPa is within 10% of the 17.2 kPa gate
        let decision = select_standard(&si_envelope(16.5));
        assert_eq!(decision.recommended, TankStandard::Api650);
        assert_eq!(decision.confidence, Confidence::Medium);
    }

    #[test]
    fn test_temperature_warnings_downgrade() {
        let mut envelope = si_envelope(5.0);
        envelope.t_max = 120.0;
        envelope.t_min = -40.0;

        let decision = select_standard(&envelope);
        assert_eq!(decision.recommended, TankStandard::Api650);
        assert_eq!(decision.confidence, Confidence::Low);
        assert_eq!(decision.warnings.len(), 2);
    }

    #[test]
    fn test_inverted_temperature_range_warns() {
        let mut envelope = si_envelope(5.0);
        envelope.t_min = 80.0;
        envelope.t_max = 20.0;

        let decision = select_standard(&envelope);
        assert_eq!(decision.confidence, Confidence::Medium);
        assert!(decision
            .warnings
            .iter()
            .any(|w| w.contains("below minimum")));
    }

    #[test]
    fn test_vacuum_warns_without_downgrade() {
        let mut envelope = si_envelope(5.0);
        envelope.design_vacuum = 2.0;

        let decision = select_standard(&envelope);
        assert_eq!(decision.confidence, Confidence::High);
        assert!(decision.warnings.iter().any(|w| w.contains("buckling")));
    }

    #[test]
    fn test_decision_serialization() {
        let decision = select_standard(&si_envelope(5.0));
        let json = serde_json::to_string(&decision).unwrap();
        assert!(json.contains("\"API_650\""));
        let roundtrip: StandardDecision = serde_json::from_str(&json).unwrap();
        assert_eq!(decision, roundtrip);
    }
}
