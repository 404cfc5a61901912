//! # Design Calculations
//!
//! All calculation types in the suite. Each calculation follows the pattern:
//!
//! - `*Input` - immutable input parameters (JSON-serializable)
//! - `*Result` / `*Decision` - immutable output (JSON-serializable)
//! - a pure function from the one to the other
//!
//! ## Available Calculations
//!
//! - [`conveyor`] - belt conveyor capacity/power/tension/pulley sizing (CEMA)
//! - [`tank_standard`] - storage tank design standard selection (API 650/620)

pub mod conveyor;
pub mod tank_standard;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use conveyor::{calculate, calculate_with, ConveyorInput, ConveyorResult};
pub use tank_standard::{select_standard, EnvelopeInput, StandardDecision};

/// Enum wrapper for all calculation types.
///
/// Allows storing heterogeneous calculations in one project collection
/// while keeping type safety and clean serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Belt conveyor design calculation
    Conveyor(ConveyorInput),
    /// Storage tank standard selection
    TankStandard(EnvelopeInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Conveyor(c) => &c.label,
            CalculationItem::TankStandard(t) => &t.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Conveyor(_) => "Conveyor",
            CalculationItem::TankStandard(_) => "Tank Standard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_label_and_type() {
        let item = CalculationItem::Conveyor(ConveyorInput::example());
        assert_eq!(item.label(), "CV-101");
        assert_eq!(item.calc_type(), "Conveyor");
    }

    #[test]
    fn test_item_serialization_tag() {
        let item = CalculationItem::Conveyor(ConveyorInput::example());
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"Conveyor\""));

        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, roundtrip);
    }
}
