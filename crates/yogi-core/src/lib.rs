//! Core library for yogi: the pose catalog and the routine generator.
//!
//! Everything in this crate is pure logic. The catalog is embedded at
//! compile time and generation does no I/O; file export and terminal
//! rendering live in `yogi-cli`.

pub mod catalog;
pub mod export;
pub mod guidance;
pub mod models;
pub mod routine;

pub use catalog::{Catalog, CatalogError};
pub use models::{FocusArea, Level, ParseEnumError, Pose, Section, TimeOfDay};
pub use routine::{RequestError, RoutineRequest, RoutineResult, SectionPlan, generate, generate_with};
