//! Unit tests for the assignment context.

mod domain_tests;
mod schedule_tests;
