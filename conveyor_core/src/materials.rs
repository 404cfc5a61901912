//! # Bulk Materials Database
//!
//! Reference properties for the bulk solids commonly handled on belt
//! conveyors: density range, angle of repose, surcharge angle and an
//! abrasiveness class. Values follow the CEMA material tables at the
//! coarse granularity the preliminary-design workflow needs.
//!
//! ## Example
//!
//! ```rust
//! use conveyor_core::materials::material_by_name;
//!
//! let coal = material_by_name("Bituminous Coal").unwrap();
//! assert_eq!(coal.angle_repose_deg, 35.0);
//! println!("design density: {} kg/m3", coal.density_mean());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Abrasiveness class of a bulk material.
///
/// Drives belt cover and idler selection downstream; carried here for
/// reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Abrasiveness {
    NonAbrasive,
    Abrasive,
    VeryAbrasive,
    Sharp,
}

impl Abrasiveness {
    /// Display name for UI and reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Abrasiveness::NonAbrasive => "Non-abrasive",
            Abrasiveness::Abrasive => "Abrasive",
            Abrasiveness::VeryAbrasive => "Very Abrasive",
            Abrasiveness::Sharp => "Sharp",
        }
    }
}

impl std::fmt::Display for Abrasiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reference properties for one bulk material.
///
/// Serialize-only: the table is compiled in, never read back from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialProperties {
    /// Material name, as shown in the UI and used for lookup
    pub name: &'static str,

    /// Lower bound of loose bulk density (kg/m³)
    pub density_min_kg_m3: f64,

    /// Upper bound of loose bulk density (kg/m³)
    pub density_max_kg_m3: f64,

    /// Angle of repose (deg)
    pub angle_repose_deg: f64,

    /// Surcharge angle on a moving belt (deg)
    pub angle_surcharge_deg: f64,

    /// Abrasiveness class
    pub abrasiveness: Abrasiveness,

    /// Free-text condition note
    pub description: Option<&'static str>,
}

impl MaterialProperties {
    /// Midpoint of the density range, used as the design density when the
    /// user has no better figure.
    pub fn density_mean(&self) -> f64 {
        (self.density_min_kg_m3 + self.density_max_kg_m3) / 2.0
    }
}

/// Static material table. Densities in kg/m³, angles in degrees.
static MATERIAL_DATABASE: Lazy<Vec<MaterialProperties>> = Lazy::new(|| {
    vec![
        MaterialProperties {
            name: "Anthracite Coal",
            density_min_kg_m3: 800.0,
            density_max_kg_m3: 960.0,
            angle_repose_deg: 27.0,
            angle_surcharge_deg: 10.0,
            abrasiveness: Abrasiveness::NonAbrasive,
            description: Some("Sized, washed, clean."),
        },
        MaterialProperties {
            name: "Bituminous Coal",
            density_min_kg_m3: 640.0,
            density_max_kg_m3: 880.0,
            angle_repose_deg: 35.0,
            angle_surcharge_deg: 20.0,
            abrasiveness: Abrasiveness::NonAbrasive,
            description: Some("Run of mine."),
        },
        MaterialProperties {
            name: "Lignite Coal",
            density_min_kg_m3: 640.0,
            density_max_kg_m3: 800.0,
            angle_repose_deg: 38.0,
            angle_surcharge_deg: 25.0,
            abrasiveness: Abrasiveness::NonAbrasive,
            description: Some("Air dried."),
        },
        MaterialProperties {
            name: "Limestone (Crushed)",
            density_min_kg_m3: 1360.0,
            density_max_kg_m3: 1600.0,
            angle_repose_deg: 38.0,
            angle_surcharge_deg: 20.0,
            abrasiveness: Abrasiveness::Abrasive,
            description: None,
        },
        MaterialProperties {
            name: "Sand (Dry)",
            density_min_kg_m3: 1440.0,
            density_max_kg_m3: 1760.0,
            angle_repose_deg: 35.0,
            angle_surcharge_deg: 25.0,
            abrasiveness: Abrasiveness::VeryAbrasive,
            description: None,
        },
        MaterialProperties {
            name: "NPK Fertilizer",
            density_min_kg_m3: 880.0,
            // Varies widely with formulation
            density_max_kg_m3: 1120.0,
            angle_repose_deg: 32.0,
            angle_surcharge_deg: 15.0,
            abrasiveness: Abrasiveness::Abrasive,
            description: Some("Corrosive; check belt cover compound."),
        },
        MaterialProperties {
            name: "Urea Prills",
            density_min_kg_m3: 700.0,
            density_max_kg_m3: 780.0,
            angle_repose_deg: 28.0,
            angle_surcharge_deg: 15.0,
            abrasiveness: Abrasiveness::NonAbrasive,
            description: None,
        },
        MaterialProperties {
            name: "Wood Chips",
            density_min_kg_m3: 220.0,
            density_max_kg_m3: 480.0,
            angle_repose_deg: 45.0,
            // Interlocking particles carry a higher surcharge
            angle_surcharge_deg: 25.0,
            abrasiveness: Abrasiveness::NonAbrasive,
            description: None,
        },
        MaterialProperties {
            name: "Iron Ore (Crushed)",
            density_min_kg_m3: 2000.0,
            density_max_kg_m3: 2800.0,
            angle_repose_deg: 35.0,
            angle_surcharge_deg: 25.0,
            abrasiveness: Abrasiveness::VeryAbrasive,
            description: None,
        },
    ]
});

/// All materials in the database, for UI selection lists.
pub fn all_materials() -> &'static [MaterialProperties] {
    &MATERIAL_DATABASE
}

/// Look up a material by exact name.
///
/// # Errors
///
/// Returns [`CalcError::MaterialNotFound`] when the name is not in the table.
pub fn material_by_name(name: &str) -> CalcResult<&'static MaterialProperties> {
    MATERIAL_DATABASE
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| CalcError::material_not_found(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit() {
        let sand = material_by_name("Sand (Dry)").unwrap();
        assert_eq!(sand.density_min_kg_m3, 1440.0);
        assert_eq!(sand.abrasiveness, Abrasiveness::VeryAbrasive);
    }

    #[test]
    fn test_lookup_miss() {
        let err = material_by_name("Unobtainium").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_density_mean() {
        let coal = material_by_name("Anthracite Coal").unwrap();
        assert_eq!(coal.density_mean(), 880.0);
    }

    #[test]
    fn test_density_ranges_are_ordered() {
        for m in all_materials() {
            assert!(
                m.density_min_kg_m3 <= m.density_max_kg_m3,
                "density range inverted for {}",
                m.name
            );
            assert!(m.angle_repose_deg > 0.0);
        }
    }

    #[test]
    fn test_material_serialization() {
        let ore = material_by_name("Iron Ore (Crushed)").unwrap();
        let json = serde_json::to_string(ore).unwrap();
        assert!(json.contains("VeryAbrasive"));
    }
}
