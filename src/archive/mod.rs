//! Archive Expander
//!
//! Turns archive bytes into an ordered list of file records. Directory entries and
//! platform metadata are dropped; every other entry is decoded on its own, so one
//! unreadable entry only costs that entry.

mod decoder;

pub use decoder::ZipDecoder;

use crate::config::IngestConfig;
use crate::error::{ArchiveError, IngestError};
use crate::text::TextDecoder;
use crate::types::FileRecord;
use tracing::{debug, warn};

/// One entry enumerated from an archive
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Slash-delimited path inside the archive
    pub path: String,
    pub is_directory: bool,
    /// Raw bytes, or the error hit while reading them
    pub data: Result<Vec<u8>, ArchiveError>,
}

impl ArchiveEntry {
    /// Decode the entry's bytes as text.
    pub fn read_content(&self, text: &TextDecoder) -> Result<String, IngestError> {
        let bytes = self.data.as_ref().map_err(|e| IngestError::Archive(e.clone()))?;
        text.decode(bytes).ok_or_else(|| IngestError::Decode {
            name: self.path.clone(),
        })
    }
}

/// Opens archive containers
pub trait ArchiveDecoder: Send + Sync {
    /// Enumerate entries in the archive's own order.
    ///
    /// Fails only when the container itself cannot be parsed.
    fn open(&self, bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError>;
}

/// Expand an uploaded archive into file records.
///
/// When the container cannot be opened the result is a single record named `upload_name`
/// carrying the archive-open placeholder.
pub fn expand_archive(
    upload_name: &str,
    bytes: &[u8],
    decoder: &dyn ArchiveDecoder,
    text: &TextDecoder,
    policy: &IngestConfig,
) -> Vec<FileRecord> {
    let entries = match decoder.open(bytes) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(archive = upload_name, error = %e, "Archive could not be opened");
            return vec![FileRecord::new(
                upload_name,
                policy.placeholders.archive_open_failed.as_str(),
            )];
        }
    };

    let total = entries.len();
    let records: Vec<FileRecord> = entries
        .into_iter()
        .filter(|entry| !entry.is_directory && !policy.is_ignored_entry(&entry.path))
        .map(|entry| match entry.read_content(text) {
            Ok(content) => FileRecord::new(entry.path, content),
            Err(e) => {
                warn!(archive = upload_name, entry = %entry.path, error = %e, "Archive entry unreadable");
                FileRecord::new(entry.path, policy.placeholders.unreadable_entry.as_str())
            }
        })
        .collect();

    debug!(
        archive = upload_name,
        entries = total,
        kept = records.len(),
        "Expanded archive"
    );
    records
}
