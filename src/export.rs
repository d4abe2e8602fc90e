//! Client-side CSV serialization for report exports.
//!
//! Rows are written from what is currently displayed, never re-fetched. The
//! csv writer takes care of quoting fields that contain commas or quotes.

use crate::errors::AppError;

/// Serialize a header row plus data rows into CSV text.
pub fn write_csv(header: &[&str], rows: &[Vec<String>]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Csv(e.to_string()))
}

/// Build an export filename from the report type and its active filter values.
/// Filter parts are sanitized so the name stays shell- and header-safe.
pub fn export_filename(report: &str, parts: &[&str], extension: &str) -> String {
    let mut name = report.to_string();
    for part in parts {
        let cleaned: String = part
            .trim()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if !cleaned.is_empty() {
            name.push('_');
            name.push_str(&cleaned);
        }
    }
    format!("{name}.{extension}")
}
