//! Document Assembler
//!
//! Merges the store into one text document: a header line block per record, rendered
//! from a template, followed by the record's content.

use crate::types::FileRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Default header template
pub const DEFAULT_HEADER_TEMPLATE: &str = "File: {name}";

/// Default token replaced by the record name inside the header template
pub const DEFAULT_NAME_TOKEN: &str = "{name}";

const BLOCK_SEPARATOR: &str = "\n\n";

/// Render the merged document for `records` in order.
///
/// Every occurrence of `token` in `template` is replaced with the record name. An empty
/// token leaves the template untouched.
pub fn render_document(records: &[FileRecord], template: &str, token: &str) -> String {
    records
        .iter()
        .map(|record| {
            let header = if token.is_empty() {
                template.to_string()
            } else {
                template.replace(token, &record.name)
            };
            format!("{}\n{}", header, record.content)
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Size summary of a merged document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub files: usize,
    pub characters: usize,
    pub lines: usize,
}

impl DocumentStats {
    pub fn of(document: &str, files: usize) -> Self {
        Self {
            files,
            characters: document.chars().count(),
            lines: if document.is_empty() {
                0
            } else {
                document.lines().count()
            },
        }
    }
}

/// File name used when the document is saved: `merged-YYYY-MM-DD.txt`
pub fn download_file_name(date: NaiveDate) -> String {
    format!("merged-{}.txt", date.format("%Y-%m-%d"))
}
