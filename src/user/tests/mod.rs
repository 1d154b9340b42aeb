//! Unit tests for the user directory context.

mod directory_tests;
mod domain_tests;
