//! Unit tests for the task module.
//!
//! Tests are organised by concern: shared validation rules, domain
//! construction, notification rendering, and the creation workflow.

mod creation_tests;
mod domain_tests;
