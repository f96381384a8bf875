//! Integration tests for the filestitch aggregation engine

mod cli_contracts;
mod ingest_batches;
mod properties;
mod rendering;
mod support;
mod tree_structure;
