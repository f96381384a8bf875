//! Configuration
//!
//! Layered settings for document rendering, ingestion, and logging. Sources are merged by
//! [`MergeService`](merge::service::MergeService); callers go through [`ConfigLoader`].

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::render::{DEFAULT_HEADER_TEMPLATE, DEFAULT_NAME_TOKEN};
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StitchConfig {
    #[serde(default)]
    pub document: DocumentConfig,

    #[serde(default)]
    pub ingest: IngestConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StitchConfig {
    /// Serialize as TOML, e.g. for writing a starter config file.
    pub fn to_toml_string(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to serialize config: {}", e)))
    }
}

/// Merged document settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Header line block written before each file
    #[serde(default = "default_header_template")]
    pub header_template: String,

    /// Token in the template replaced by the file name
    #[serde(default = "default_name_token")]
    pub name_token: String,
}

fn default_header_template() -> String {
    DEFAULT_HEADER_TEMPLATE.to_string()
}

fn default_name_token() -> String {
    DEFAULT_NAME_TOKEN.to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            header_template: default_header_template(),
            name_token: default_name_token(),
        }
    }
}

/// Upload classification, filtering, and decoding settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// File name suffix marking an upload as an archive (compared case-insensitively)
    #[serde(default = "default_archive_extension")]
    pub archive_extension: String,

    /// Declared content types marking an upload as an archive
    #[serde(default = "default_archive_mime_types")]
    pub archive_mime_types: Vec<String>,

    /// Archive path segments whose entries are dropped (platform metadata)
    #[serde(default = "default_ignored_segments")]
    pub ignored_segments: Vec<String>,

    /// Replace malformed byte sequences instead of failing the decode
    #[serde(default)]
    pub lossy_decode: bool,

    #[serde(default)]
    pub placeholders: PlaceholderConfig,
}

fn default_archive_extension() -> String {
    ".zip".to_string()
}

fn default_archive_mime_types() -> Vec<String> {
    vec![
        "application/zip".to_string(),
        "application/x-zip-compressed".to_string(),
    ]
}

fn default_ignored_segments() -> Vec<String> {
    vec![
        "__MACOSX".to_string(),
        ".DS_Store".to_string(),
        "Thumbs.db".to_string(),
    ]
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            archive_extension: default_archive_extension(),
            archive_mime_types: default_archive_mime_types(),
            ignored_segments: default_ignored_segments(),
            lossy_decode: false,
            placeholders: PlaceholderConfig::default(),
        }
    }
}

impl IngestConfig {
    /// Whether an upload with this name and declared type is an archive
    pub fn is_archive(&self, name: &str, mime: &str) -> bool {
        let extension = self.archive_extension.to_lowercase();
        (!extension.is_empty() && name.to_lowercase().ends_with(&extension))
            || self
                .archive_mime_types
                .iter()
                .any(|m| m.eq_ignore_ascii_case(mime.trim()))
    }

    /// Whether an archive entry path contains a platform-metadata segment
    pub fn is_ignored_entry(&self, path: &str) -> bool {
        path.split('/')
            .any(|segment| self.ignored_segments.iter().any(|s| s == segment))
    }
}

/// Fixed content substituted for files that could not be read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceholderConfig {
    #[serde(default = "default_unreadable")]
    pub unreadable_entry: String,

    #[serde(default = "default_unreadable")]
    pub unreadable_file: String,

    #[serde(default = "default_archive_open_failed")]
    pub archive_open_failed: String,
}

fn default_unreadable() -> String {
    "[Unable to read file content]".to_string()
}

fn default_archive_open_failed() -> String {
    "[Unable to open archive]".to_string()
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            unreadable_entry: default_unreadable(),
            unreadable_file: default_unreadable(),
            archive_open_failed: default_archive_open_failed(),
        }
    }
}
