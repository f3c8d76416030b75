//! gpacalc-core: Grade tables, GPA aggregation, and calculator state.
//!
//! This crate defines the curriculum data model, the pure aggregation
//! functions for semester GPA, CGPA, and improvement projections, and the
//! persisted state contract that the rest of gpacalc builds on.

pub mod builtin;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod parser;
pub mod report;
pub mod state;
pub mod statistics;
pub mod store;
pub mod traits;

pub use engine::Calculator;
pub use error::StoreError;
pub use model::{Course, Grade, GradeTable, Semester};
pub use store::StateStore;
pub use traits::{KeyValueStore, MemoryStore};
