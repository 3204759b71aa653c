//! Task-creation workflow with notification side effects.
//!
//! Implements the department dashboard's core write path: a submission is
//! validated against the shared rule set and persisted as a task. When an
//! assignee exists, the workflow follows up with best-effort creation of a
//! linked ticket and dispatch of a notification email. Failures after
//! persistence are tolerated and surfaced as warnings, never as operation
//! failures.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Shared input validation in [`validation`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
