//! Plain-text rendering and export of completed document submissions.

use std::collections::BTreeMap;

use cap_std::fs_utf8::Dir;

use super::catalog::DocumentTemplate;

/// Error raised when exporting a rendered submission fails.
#[derive(Debug, thiserror::Error)]
pub enum DocumentExportError {
    /// The export file could not be written.
    #[error("failed to write document export: {0}")]
    Write(#[from] std::io::Error),
}

/// Renders a submission as one `Label: value` line per template field.
///
/// Fields missing from `values` render with an empty value; lines follow
/// the template's field order, and extra keys in `values` are ignored.
#[must_use]
pub fn render_submission(template: &DocumentTemplate, values: &BTreeMap<String, String>) -> String {
    template
        .fields
        .iter()
        .map(|descriptor| {
            let value = values
                .get(descriptor.label)
                .map_or("", String::as_str);
            format!("{}: {value}", descriptor.label)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes rendered submission content to `<document type>.txt` in `dir`.
///
/// An existing file of the same name is overwritten.
pub fn export_submission(
    dir: &Dir,
    document_type: &str,
    content: &str,
) -> Result<(), DocumentExportError> {
    let file_name = format!("{document_type}.txt");
    dir.write(file_name, content)?;
    Ok(())
}
