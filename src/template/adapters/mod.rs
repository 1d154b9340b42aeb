//! Adapter implementations for template ports.

pub mod memory;
