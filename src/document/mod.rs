//! Departmental document templates: static catalog, rendering, export.
//!
//! The catalog maps each two-digit department code to its document types
//! and their field schemas. Lookups never fail: combinations without a
//! template resolve to [`TemplateAvailability::NotAvailable`].

mod catalog;
mod render;

pub use catalog::{
    DepartmentCode, DocumentTemplate, FieldDescriptor, FieldKind, TemplateAvailability,
    template_for,
};
pub use render::{DocumentExportError, export_submission, render_submission};

#[cfg(test)]
mod tests;
