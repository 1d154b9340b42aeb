//! Assignment scheduling and task execution tracking for Praxis.
//!
//! Assigning a published template snapshots its task data into an
//! immutable, date-scheduled set of task executions: the first starts
//! active, the rest locked. Each execution then moves through the
//! submit/review/approve workflow, and approving a task unlocks its
//! successor or completes the whole assignment. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
