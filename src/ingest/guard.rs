//! In-flight flag rejecting overlapping ingestion runs.

use crate::error::IngestError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared "an ingestion is running" flag
#[derive(Debug, Clone, Default)]
pub struct IngestFlag(Arc<AtomicBool>);

impl IngestFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Claim the flag for one run; fails with `Busy` while another run holds it.
    pub fn acquire(&self) -> Result<IngestGuard, IngestError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| IngestError::Busy)?;
        Ok(IngestGuard(self.0.clone()))
    }
}

/// Releases the flag when dropped
#[derive(Debug)]
pub struct IngestGuard(Arc<AtomicBool>);

impl Drop for IngestGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
