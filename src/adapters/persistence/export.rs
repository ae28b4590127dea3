//! Conversation log export. CSV via the `csv` crate, or JSON Lines.

use crate::domain::{ConversationEntry, DomainError};
use chrono::{DateTime, Utc};
use std::path::Path;
use tokio::fs;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    JsonLines,
}

impl ExportFormat {
    /// Pick a format from the file extension. `.jsonl`/`.ndjson` → JSON Lines, anything else → CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                ExportFormat::JsonLines
            }
            _ => ExportFormat::Csv,
        }
    }
}

/// Render entries as CSV: `Time,Intent,Query,Answer,Results`.
///
/// Newlines in answers are flattened; quoting is left to the csv writer.
pub fn entries_to_csv(entries: &[ConversationEntry]) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["Time", "Intent", "Query", "Answer", "Results"])?;

    for entry in entries {
        let time = DateTime::<Utc>::from_timestamp(entry.timestamp, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| entry.timestamp.to_string());
        let answer = entry.answer.replace('\n', " ").replace('\r', "");
        let results = entry.result_ids.join(" ");

        wtr.write_record([
            time.as_str(),
            entry.intent.as_str(),
            entry.query.as_str(),
            answer.as_str(),
            results.as_str(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

/// One JSON object per line, oldest first.
pub fn entries_to_jsonl(entries: &[ConversationEntry]) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&serde_json::to_string(entry)?);
        out.push('\n');
    }
    Ok(out)
}

/// Write `entries` to `path` in the format implied by its extension.
pub async fn export_entries(
    entries: &[ConversationEntry],
    path: &Path,
) -> Result<ExportFormat, DomainError> {
    let format = ExportFormat::from_path(path);
    let body = match format {
        ExportFormat::Csv => {
            entries_to_csv(entries).map_err(|e| DomainError::Export(e.to_string()))?
        }
        ExportFormat::JsonLines => {
            entries_to_jsonl(entries).map_err(|e| DomainError::Export(e.to_string()))?
        }
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Export(format!("create export dir: {}", e)))?;
        }
    }
    fs::write(path, body)
        .await
        .map_err(|e| DomainError::Export(format!("write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), entries = entries.len(), ?format, "conversation log exported");
    Ok(format)
}
