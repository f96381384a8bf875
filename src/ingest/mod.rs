//! Ingestion Pipeline
//!
//! Classifies each upload as archive or plain, expands or decodes it, and assembles one
//! ordered batch of file records. Failures are absorbed per blob and per archive entry
//! as placeholder content; only a failing upload source aborts the whole batch.

pub mod guard;
pub mod paste;
pub mod source;

pub use guard::{IngestFlag, IngestGuard};
pub use paste::{paste_blob, paste_file_name};
pub use source::{BlobBody, PathUploadSource, UploadBlob, UploadSource};

use crate::archive::{expand_archive, ArchiveDecoder, ZipDecoder};
use crate::config::IngestConfig;
use crate::error::IngestError;
use crate::text::TextDecoder;
use crate::types::FileRecord;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// How a single upload is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobKind {
    Archive,
    Plain,
}

/// Upload-to-records pipeline
#[derive(Clone)]
pub struct IngestPipeline {
    config: IngestConfig,
    text: TextDecoder,
    archives: Arc<dyn ArchiveDecoder>,
    flag: IngestFlag,
}

impl IngestPipeline {
    /// Pipeline with the zip decoder
    pub fn new(config: IngestConfig) -> Self {
        Self::with_decoder(config, Arc::new(ZipDecoder))
    }

    pub fn with_decoder(config: IngestConfig, archives: Arc<dyn ArchiveDecoder>) -> Self {
        let text = TextDecoder::new(config.lossy_decode);
        Self {
            config,
            text,
            archives,
            flag: IngestFlag::new(),
        }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Whether a run is currently in flight
    pub fn is_busy(&self) -> bool {
        self.flag.is_busy()
    }

    pub fn classify(&self, blob: &UploadBlob) -> BlobKind {
        if self.config.is_archive(&blob.name, &blob.mime) {
            BlobKind::Archive
        } else {
            BlobKind::Plain
        }
    }

    /// Run one ingestion over `source`.
    ///
    /// Blobs are processed one at a time in input order; archive entries land contiguously
    /// at the archive's position. Rejects with `Busy` while another run is in flight.
    pub async fn ingest<S>(&self, source: &mut S) -> Result<Vec<FileRecord>, IngestError>
    where
        S: UploadSource + ?Sized,
    {
        let _guard = self.flag.acquire()?;
        let started = Instant::now();

        let blobs = source.blobs().await?;
        let blob_count = blobs.len();

        let batches: Vec<Vec<FileRecord>> = stream::iter(blobs)
            .then(|blob| self.process_blob(blob))
            .collect()
            .await;
        let records: Vec<FileRecord> = batches.into_iter().flatten().collect();

        info!(
            blobs = blob_count,
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Ingested upload batch"
        );
        Ok(records)
    }

    async fn process_blob(&self, blob: UploadBlob) -> Vec<FileRecord> {
        let kind = self.classify(&blob);
        debug!(name = %blob.name, mime = %blob.mime, ?kind, "Processing upload");

        if let (BlobKind::Plain, BlobBody::Text(text)) = (kind, &blob.body) {
            return vec![FileRecord::new(blob.name.as_str(), text.as_str())];
        }

        let bytes = match blob.read_bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(name = %blob.name, error = %e, "Upload unreadable");
                let placeholder = match kind {
                    BlobKind::Archive => &self.config.placeholders.archive_open_failed,
                    BlobKind::Plain => &self.config.placeholders.unreadable_file,
                };
                return vec![FileRecord::new(blob.name, placeholder.as_str())];
            }
        };

        match kind {
            BlobKind::Archive => expand_archive(
                &blob.name,
                &bytes,
                self.archives.as_ref(),
                &self.text,
                &self.config,
            ),
            BlobKind::Plain => {
                let content = self.text.decode(&bytes).unwrap_or_else(|| {
                    warn!(name = %blob.name, "Upload is not valid text");
                    self.config.placeholders.unreadable_file.clone()
                });
                vec![FileRecord::new(blob.name, content)]
            }
        }
    }
}
