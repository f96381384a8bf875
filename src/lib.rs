//! Filestitch: File Aggregation and Hierarchical View Engine
//!
//! Collects uploaded files and zip archives into one ordered collection, presents it as
//! a flat list or a folder tree with tri-state selection, and renders it as a single
//! merged document plus an ASCII structure listing.

pub mod archive;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod render;
pub mod selection;
pub mod session;
pub mod store;
pub mod text;
pub mod tooling;
pub mod tree;
pub mod types;
pub mod views;

pub use error::{ApiError, ArchiveError, IngestError, StoreError};
pub use session::{open_session, Session};
pub use store::FileStore;
pub use types::{FileRecord, StoreIndex};
