//! # conveyor_core - Belt Conveyor Design Calculation Engine
//!
//! `conveyor_core` implements belt conveyor design to the CEMA analytical
//! method: conveying capacity, drive power, belt tensions and drive pulley
//! loads, computed as a staged pipeline of pure functions. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Injectable Constants**: Design factors live in [`constants::CalcConstants`],
//!   overridable per calculation
//!
//! ## Quick Start
//!
//! ```rust
//! use conveyor_core::calculations::conveyor::{calculate, ConveyorInput};
//!
//! let input = ConveyorInput::example();
//! let result = calculate(&input).unwrap();
//! println!("Motor power: {:.1} kW", result.power.p_motor_installed_kw);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Conveyor pipeline and tank standard selector
//! - [`constants`] - Named design constants with override points
//! - [`materials`] - Bulk material property database
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`project`] - Project container, metadata, and settings
//! - [`file_io`] - File operations with atomic saves and locking
//! - [`report`] - PDF report generation

pub mod calculations;
pub mod constants;
pub mod errors;
pub mod file_io;
pub mod materials;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_with, ConveyorInput, ConveyorResult};
pub use constants::CalcConstants;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_project, save_project, FileLock};
pub use project::{GlobalSettings, Project, ProjectMetadata};
