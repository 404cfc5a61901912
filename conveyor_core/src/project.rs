//! # Project Data Structures
//!
//! The `Project` struct is the root container for all calculation data.
//! Projects serialize to `.cvp` (ConveyorCalc project) files as
//! human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (design standard, defaults)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use conveyor_core::project::Project;
//!
//! let project = Project::new("Jane Engineer", "26-042", "Bulk Terminals Ltd");
//!
//! // Serialize to JSON
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::CalculationItem;

/// Current schema version for .cvp files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map: O(1) lookup, no duplicate
/// IDs, stable references when the UI reorders its list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (design standard, default material)
    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conveyor_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "26-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(
        engineer: impl Into<String>,
        job_id: impl Into<String>,
        client: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a calculation item to the project. Returns the assigned UUID.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID. Returns it if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a calculation item by UUID.
    ///
    /// Marks the project as modified when the item exists.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of calculation items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// All conveyor calculations, sorted by label for stable reporting.
    pub fn conveyors(&self) -> Vec<&crate::calculations::ConveyorInput> {
        let mut conveyors: Vec<_> = self
            .items
            .values()
            .filter_map(|item| match item {
                CalculationItem::Conveyor(c) => Some(c),
                _ => None,
            })
            .collect();
        conveyors.sort_by(|a, b| a.label.cmp(&b.label));
        conveyors
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Design method tag (e.g., "CEMA 7th Ed")
    pub design_standard: String,

    /// Default bulk material for new conveyor calculations
    pub default_material: String,

    /// Default idler friction coefficient for new conveyors
    pub default_friction_idlers: f64,

    /// Default drive efficiency for new conveyors
    pub default_drive_efficiency: f64,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            design_standard: "CEMA 7th Ed".to_string(),
            default_material: "Bituminous Coal".to_string(),
            default_friction_idlers: 0.02,
            default_drive_efficiency: 0.95,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{ConveyorInput, EnvelopeInput};
    use crate::calculations::tank_standard::UnitSystem;

    #[test]
    fn test_project_creation() {
        let project = Project::new("John Doe", "26-001", "Acme Bulk");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.job_id, "26-001");
        assert_eq!(project.meta.client, "Acme Bulk");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_project_serialization() {
        let project = Project::new("Jane Engineer", "26-042", "Test Client");
        let json = serde_json::to_string_pretty(&project).unwrap();

        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("26-042"));
        assert!(json.contains("CEMA 7th Ed"));

        let roundtrip: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.engineer, "Jane Engineer");
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Engineer", "26-001", "Client");

        let id = project.add_item(CalculationItem::Conveyor(ConveyorInput::example()));
        assert_eq!(project.item_count(), 1);
        assert!(project.get_item(&id).is_some());

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
    }

    #[test]
    fn test_conveyors_sorted_by_label() {
        let mut project = Project::new("Engineer", "26-001", "Client");

        let mut b = ConveyorInput::example();
        b.label = "CV-200".to_string();
        let mut a = ConveyorInput::example();
        a.label = "CV-100".to_string();

        project.add_item(CalculationItem::Conveyor(b));
        project.add_item(CalculationItem::Conveyor(a));
        project.add_item(CalculationItem::TankStandard(EnvelopeInput {
            label: "TK-01".to_string(),
            units: UnitSystem::Si,
            design_pressure: 5.0,
            design_vacuum: 0.0,
            t_min: 0.0,
            t_max: 50.0,
        }));

        let conveyors = project.conveyors();
        assert_eq!(conveyors.len(), 2);
        assert_eq!(conveyors[0].label, "CV-100");
        assert_eq!(conveyors[1].label, "CV-200");
    }

    #[test]
    fn test_touch_updates_modified() {
        let mut project = Project::new("Engineer", "26-001", "Client");
        let before = project.meta.modified;
        std::thread::sleep(std::time::Duration::from_millis(5));
        project.touch();
        assert!(project.meta.modified > before);
    }
}
