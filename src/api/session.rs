use tracing::debug;

use crate::api::editor::{CommitAction, EntryEditor, FieldKey};
use crate::api::status::StatusMessage;
use crate::api::store::DatasetStore;
use crate::core::Entry;
use crate::error::ClimateResult;
use crate::io::{export_dataset, import_dataset, sample_dataset};
use crate::layout::{compute_layout, DiagramLayout};

/// One user session over a dataset: the store, the editor, and the
/// synchronous recompute pipeline between them.
///
/// Every interaction is a single top-to-bottom pass (store lookup → buffer
/// mutation → diagram layout); there is no background work and no partial
/// state. `render` is a pure function of the active buffer, so re-running
/// it with unchanged inputs returns the same layout.
pub struct ClimateSession {
    store: DatasetStore,
    editor: EntryEditor,
}

impl ClimateSession {
    /// Session over an explicit dataset.
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            store: DatasetStore::from_entries(entries),
            editor: EntryEditor::new(),
        }
    }

    /// Session over the built-in sample dataset, used when no import is
    /// supplied.
    #[must_use]
    pub fn with_sample_dataset() -> Self {
        Self::new(sample_dataset())
    }

    /// Session bootstrapped from an exchange-format payload.
    pub fn from_import(bytes: &[u8]) -> ClimateResult<Self> {
        Ok(Self::new(import_dataset(bytes)?))
    }

    /// Swaps in a newly imported dataset and clears the selection.
    ///
    /// A failed import leaves the prior store, buffer and selection fully
    /// intact.
    pub fn replace_dataset(&mut self, bytes: &[u8]) -> ClimateResult<()> {
        let entries = import_dataset(bytes)?;
        debug!(count = entries.len(), "replacing session dataset");
        self.store = DatasetStore::from_entries(entries);
        self.editor.clear_selection();
        Ok(())
    }

    /// Serializes the current store to the exchange format.
    pub fn export(&self) -> ClimateResult<Vec<u8>> {
        export_dataset(self.store.entries())
    }

    #[must_use]
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    #[must_use]
    pub fn editor(&self) -> &EntryEditor {
        &self.editor
    }

    pub fn select_load(&mut self, name: &str) -> ClimateResult<()> {
        self.editor.select_load(&self.store, name)
    }

    pub fn select_create(&mut self) {
        self.editor.select_create(&self.store);
    }

    pub fn edit_field(&mut self, key: FieldKey, raw: &str) -> ClimateResult<()> {
        self.editor.edit_field(key, raw)
    }

    pub fn commit(&mut self, action: CommitAction) -> StatusMessage {
        self.editor.commit(&mut self.store, action)
    }

    /// Recomputes the diagram layout from the active buffer, or `None`
    /// when nothing is selected.
    #[must_use]
    pub fn render(&self) -> Option<DiagramLayout> {
        self.editor
            .buffer()
            .map(|buffer| compute_layout(&buffer.to_entry()))
    }

    /// Hands the pending commit status to the host for display.
    pub fn take_status(&mut self) -> Option<StatusMessage> {
        self.editor.take_status()
    }
}
