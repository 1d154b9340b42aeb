//! Unit tests for the template context.

mod authoring_service_tests;
mod domain_tests;
