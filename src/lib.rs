//! Praxis: intervention program assignment and tracking core.
//!
//! This crate implements the engine behind structured, multi-step
//! intervention programs: versioned templates of ordered tasks are
//! snapshotted into immutable, date-scheduled assignments, and each task
//! execution moves through a submit/review/approve workflow that unlocks
//! its successor or completes the assignment.
//!
//! # Architecture
//!
//! Praxis follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//!
//! # Modules
//!
//! - [`template`]: Versioned program templates, authoring, and versioning
//! - [`assignment`]: Scheduling, assignment creation, and the task
//!   execution state machine
//! - [`user`]: Minimal user directory backing actor resolution
//! - [`policy`]: Role-based operation checks decoupled from presentation

pub mod assignment;
pub mod error;
pub mod policy;
pub mod template;
pub mod user;
