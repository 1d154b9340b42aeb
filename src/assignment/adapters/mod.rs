//! Adapter implementations for assignment ports.

pub mod memory;
