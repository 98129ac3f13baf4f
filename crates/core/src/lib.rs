//! Domain layer for the EPIC.track project registry.
//!
//! Holds the types, errors, and validation rules shared by the database and
//! HTTP crates. Nothing in here touches I/O.

pub mod error;
pub mod project;
pub mod project_state;
pub mod types;
