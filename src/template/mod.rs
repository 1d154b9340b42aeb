//! Intervention template management for Praxis.
//!
//! Templates are versioned designs of intervention programs: an ordered
//! list of tasks, each with an inclusive default duration and an ordered
//! checklist of sub-tasks. Drafts are editable; publishing freezes the
//! structure, and the only way to evolve a published template is to clone
//! it into a new draft with an incremented version. Assignments snapshot
//! task data at scheduling time, so later template versions never affect
//! in-flight work. The module follows hexagonal architecture:
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
