//! Taskdesk: department-scoped task and ticket tracking backend.
//!
//! This crate provides the core workflow for a department dashboard:
//! validated task creation with best-effort notification side effects,
//! read-side statistics over fetched task collections, and the static
//! document-template catalog used for departmental form downloads.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, mail, etc.)
//!
//! # Modules
//!
//! - [`task`]: Task validation, creation orchestration, and tickets
//! - [`dashboard`]: Pure aggregators over fetched task records
//! - [`document`]: Department document-template catalog and rendering
//! - [`api`]: Request/response facade for the creation workflow

pub mod api;
pub mod dashboard;
pub mod document;
pub mod task;
