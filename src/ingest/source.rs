//! Upload sources: where raw blobs come from before classification.

use crate::error::IngestError;
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Payload of an uploaded blob
#[derive(Debug, Clone)]
pub enum BlobBody {
    /// Bytes already in memory
    Bytes(Vec<u8>),
    /// Text that needs no decoding (pasted content)
    Text(String),
    /// File on disk, read when the blob is processed
    File(PathBuf),
}

/// One raw upload: a name, a declared content type, and its payload
#[derive(Debug, Clone)]
pub struct UploadBlob {
    pub name: String,
    pub mime: String,
    pub body: BlobBody,
}

impl UploadBlob {
    pub fn bytes(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            body: BlobBody::Bytes(bytes),
        }
    }

    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime: "text/plain".to_string(),
            body: BlobBody::Text(text.into()),
        }
    }

    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            mime: String::new(),
            body: BlobBody::File(path.into()),
        }
    }

    /// Read the raw payload.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, IngestError> {
        match &self.body {
            BlobBody::Bytes(bytes) => Ok(bytes.clone()),
            BlobBody::Text(text) => Ok(text.clone().into_bytes()),
            BlobBody::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| IngestError::Read {
                        name: self.name.clone(),
                        source,
                    })
            }
        }
    }
}

/// Supplies one ordered batch of uploads.
///
/// An error here is a batch-level failure: nothing from the invocation is appended.
#[async_trait]
pub trait UploadSource: Send {
    async fn blobs(&mut self) -> Result<Vec<UploadBlob>, IngestError>;
}

#[async_trait]
impl UploadSource for Vec<UploadBlob> {
    async fn blobs(&mut self) -> Result<Vec<UploadBlob>, IngestError> {
        Ok(std::mem::take(self))
    }
}

/// Uploads taken from paths on disk.
///
/// Files become one blob named after the file. Directories are walked and every file
/// beneath becomes a blob named by its path relative to the directory's parent, so
/// `docs/` yields `docs/guide.md`, `docs/api/index.md`, and so on.
#[derive(Debug, Clone)]
pub struct PathUploadSource {
    paths: Vec<PathBuf>,
}

impl PathUploadSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl UploadSource for PathUploadSource {
    async fn blobs(&mut self) -> Result<Vec<UploadBlob>, IngestError> {
        let mut blobs = Vec::new();
        for path in &self.paths {
            let metadata = tokio::fs::metadata(path).await.map_err(|e| {
                IngestError::Source(format!("Cannot access {}: {}", path.display(), e))
            })?;
            if metadata.is_dir() {
                walk_directory(path, &mut blobs)?;
            } else {
                blobs.push(UploadBlob::file(file_name(path), path.clone()));
            }
        }
        Ok(blobs)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn walk_directory(dir: &Path, blobs: &mut Vec<UploadBlob>) -> Result<(), IngestError> {
    let base = dir.parent().unwrap_or(dir);
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            IngestError::Source(format!("Failed to walk {}: {}", dir.display(), e))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(base).unwrap_or(entry.path());
        let name = relative
            .components()
            .filter(|c| matches!(c, Component::Normal(_)))
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        blobs.push(UploadBlob::file(name, entry.path().to_path_buf()));
    }
    Ok(())
}
