//! Session
//!
//! Owns the file store and everything derived from it. Every effective store mutation
//! synchronously rebuilds the tree, the merged document, and the structure listing, and
//! resets the selection, so no derived value ever refers to stale positions.

use crate::config::{DocumentConfig, StitchConfig};
use crate::error::{ApiError, IngestError, StoreError};
use crate::ingest::{paste_blob, IngestPipeline, UploadSource};
use crate::render::{render_document, render_structure, DocumentStats};
use crate::selection::{self, CheckState, SelectionState};
use crate::store::FileStore;
use crate::tree::{build_tree, NodeId, Tree};
use crate::types::{FileRecord, StoreIndex};
use crate::views::{self, FlatRow, TreeRow, ViewMode, ViewState};
use chrono::NaiveDateTime;
use tracing::{debug, error};

/// Live collection plus its derived views
pub struct Session {
    store: FileStore,
    tree: Tree,
    document: String,
    structure: String,
    selection: SelectionState,
    view: ViewState,
    template: DocumentConfig,
    pipeline: IngestPipeline,
}

impl Session {
    pub fn new(config: &StitchConfig) -> Self {
        Self::with_pipeline(
            config.document.clone(),
            IngestPipeline::new(config.ingest.clone()),
        )
    }

    pub fn with_pipeline(template: DocumentConfig, pipeline: IngestPipeline) -> Self {
        let mut session = Self {
            store: FileStore::new(),
            tree: build_tree(&[]),
            document: String::new(),
            structure: String::new(),
            selection: SelectionState::new(),
            view: ViewState::default(),
            template,
            pipeline,
        };
        session.refresh();
        session
    }

    // --- Derived values ---

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    pub fn records(&self) -> &[FileRecord] {
        self.store.records()
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn structure(&self) -> &str {
        &self.structure
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats::of(&self.document, self.store.len())
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn template(&self) -> &DocumentConfig {
        &self.template
    }

    /// Whether an ingestion is in flight; uploads should be disabled meanwhile
    pub fn is_ingesting(&self) -> bool {
        self.pipeline.is_busy()
    }

    // --- Store operations ---

    pub fn append(&mut self, records: Vec<FileRecord>) -> bool {
        let changed = self.store.append(records);
        self.after_mutation(changed)
    }

    pub fn move_up(&mut self, index: StoreIndex) -> Result<bool, StoreError> {
        let changed = self.store.move_up(index)?;
        Ok(self.after_mutation(changed))
    }

    pub fn move_down(&mut self, index: StoreIndex) -> Result<bool, StoreError> {
        let changed = self.store.move_down(index)?;
        Ok(self.after_mutation(changed))
    }

    pub fn remove(&mut self, index: StoreIndex) -> Result<FileRecord, StoreError> {
        let removed = self.store.remove(index)?;
        self.after_mutation(true);
        Ok(removed)
    }

    pub fn remove_many<I>(&mut self, indices: I) -> usize
    where
        I: IntoIterator<Item = StoreIndex>,
    {
        let removed = self.store.remove_many(indices);
        self.after_mutation(removed > 0);
        removed
    }

    /// Remove every selected record.
    pub fn remove_selected(&mut self) -> usize {
        let indices = self.selection.selected_indices();
        self.remove_many(indices)
    }

    pub fn reorder(&mut self, from: StoreIndex, to: StoreIndex) -> Result<bool, StoreError> {
        let changed = self.store.reorder(from, to)?;
        Ok(self.after_mutation(changed))
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.store.clear();
        self.after_mutation(changed)
    }

    // --- Ingestion ---

    /// Ingest one upload batch and append it atomically.
    ///
    /// On error the store is left exactly as it was. Returns the number of records added.
    pub async fn ingest<S>(&mut self, source: &mut S) -> Result<usize, IngestError>
    where
        S: UploadSource + ?Sized,
    {
        match self.pipeline.ingest(source).await {
            Ok(records) => {
                let added = records.len();
                self.append(records);
                Ok(added)
            }
            Err(e) => {
                error!(error = %e, "Upload batch failed; collection unchanged");
                Err(e)
            }
        }
    }

    /// Ingest pasted clipboard text as a single timestamped file.
    pub async fn paste(&mut self, text: &str, now: NaiveDateTime) -> Result<usize, IngestError> {
        match paste_blob(text, now) {
            Some(blob) => self.ingest(&mut vec![blob]).await,
            None => Ok(0),
        }
    }

    // --- Template ---

    /// Replace the header template; only the document is recomputed.
    pub fn set_template(&mut self, header_template: impl Into<String>) {
        self.template.header_template = header_template.into();
        self.render_document();
    }

    // --- Selection ---

    pub fn toggle_node(&mut self, node: NodeId) {
        self.selection = selection::toggle(&self.selection, &self.tree, node);
    }

    pub fn toggle_index(&mut self, index: StoreIndex) {
        self.selection = selection::toggle_index(&self.selection, index, self.store.len());
    }

    pub fn select_all(&mut self) {
        self.selection = selection::select_all(self.store.len());
    }

    pub fn clear_selection(&mut self) {
        self.selection = selection::cleared();
    }

    pub fn status_of(&self, node: NodeId) -> CheckState {
        selection::status_of(&self.selection, &self.tree, node)
    }

    // --- View ---

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view = views::set_mode(&self.view, mode);
    }

    pub fn toggle_folder(&mut self, path: &str) {
        self.view = views::toggle_folder(&self.view, path);
    }

    pub fn expand_all(&mut self) {
        self.view = views::expand_all(&self.view, &self.tree);
    }

    pub fn collapse_all(&mut self) {
        self.view = views::collapse_all(&self.view);
    }

    pub fn flat_rows(&self) -> Vec<FlatRow> {
        views::flat_rows(&self.store)
    }

    pub fn tree_rows(&self) -> Vec<TreeRow> {
        views::tree_rows(&self.tree, &self.view)
    }

    // --- Derivation ---

    fn after_mutation(&mut self, changed: bool) -> bool {
        if changed {
            self.selection = selection::cleared();
            self.refresh();
        }
        changed
    }

    fn refresh(&mut self) {
        self.tree = build_tree(self.store.records());
        self.structure = render_structure(self.store.names());
        self.render_document();
        debug!(
            revision = self.store.revision(),
            records = self.store.len(),
            "Recomputed derived views"
        );
    }

    fn render_document(&mut self) {
        self.document = render_document(
            self.store.records(),
            &self.template.header_template,
            &self.template.name_token,
        );
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&StitchConfig::default())
    }
}

/// Load configuration for `workspace_root` and open an empty session.
pub fn open_session(workspace_root: &std::path::Path) -> Result<Session, ApiError> {
    let config = crate::config::ConfigLoader::load(workspace_root)?;
    Ok(Session::new(&config))
}
