//! Reverse export: canonical JSON back to human-readable text
//!
//! A pure projection of already-finalized data. Each record renders as a
//! `"<code> - <name>"` header, a blank line, the eight labeled field
//! lines in fixed order ("Not specified." for empty fields), and a blank
//! separator line. No classification or merging happens on this path.

use crate::app::models::{Additive, FieldKey};
use crate::constants::NOT_SPECIFIED_TEXT;
use crate::{Error, Result};
use std::path::Path;
use tracing::info;

/// Render the finalized record collection as a consolidated text document
pub fn render_text(records: &[Additive]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(records.len() * 11);

    for record in records {
        lines.push(format!("{} - {}", record.code, record.name));
        lines.push(String::new());
        for key in FieldKey::ALL {
            let value = record.field(key).trim();
            if value.is_empty() {
                lines.push(format!("{}: {}", key.label(), NOT_SPECIFIED_TEXT));
            } else {
                lines.push(format!("{}: {}", key.label(), value));
            }
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Read a canonical JSON artifact and write the text export.
///
/// A missing source artifact is fatal for this operation: text cannot be
/// reconstructed without the canonical data.
pub async fn export_text(json_path: &Path, output_path: &Path) -> Result<usize> {
    if tokio::fs::metadata(json_path).await.is_err() {
        return Err(Error::file_not_found(json_path.display().to_string()));
    }

    let bytes = tokio::fs::read(json_path)
        .await
        .map_err(|e| Error::io(format!("Failed to read {}", json_path.display()), e))?;
    let records: Vec<Additive> = serde_json::from_slice(&bytes)
        .map_err(|e| Error::json(json_path.display().to_string(), e))?;

    let text = render_text(&records);
    tokio::fs::write(output_path, text)
        .await
        .map_err(|e| Error::io(format!("Failed to write {}", output_path.display()), e))?;

    info!(
        "Exported text dataset ({} records) -> {}",
        records.len(),
        output_path.display()
    );
    Ok(records.len())
}
