//! Minimal user directory for Praxis.
//!
//! Templates record their creating administrator and policy checks need an
//! actor's role, so the core keeps a thin slice of the surrounding
//! application's user management: validated user records, a repository
//! port with a uniqueness guarantee on email, and a directory service.
//! Administrative user screens remain outside the core. The module follows
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
