//! Deterministic text renderers: the merged document and the ASCII structure listing.

pub mod document;
pub mod structure;

pub use document::{
    download_file_name, render_document, DocumentStats, DEFAULT_HEADER_TEMPLATE,
    DEFAULT_NAME_TOKEN,
};
pub use structure::render_structure;
