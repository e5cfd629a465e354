use tracing::{debug, warn};

use crate::api::buffer::EditBuffer;
use crate::api::status::StatusMessage;
use crate::core::Entry;
use crate::error::{ClimateError, ClimateResult};

/// Ordered collection of committed records.
///
/// Order is insertion/load order. Name uniqueness is enforced at
/// `save_as` time only, matching the exchange format which carries no
/// constraint of its own.
///
/// Identity is deliberately split between the two mutating resolutions:
/// `save` overwrites the origin index snapshotted when the buffer was
/// loaded, while `delete` re-resolves its target by the buffer's *current*
/// name field. Renaming a loaded record and saving rewrites the original
/// slot under the new name; renaming and deleting targets whatever name is
/// currently typed.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    entries: Vec<Entry>,
}

impl DatasetStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopts an imported dataset as-is; import does not deduplicate.
    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record names in store order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Slice view for export; mutation goes through the buffer operations.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Deep copy of the named record, never a live reference.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Entry> {
        self.entries.iter().find(|entry| entry.name == name).cloned()
    }

    /// Store position of the named record, used to bind a loaded buffer.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    /// Produces a blank unbound buffer. Not a store mutation.
    #[must_use]
    pub fn create(&self) -> EditBuffer {
        EditBuffer::blank()
    }

    /// Overwrites the buffer's origin slot with its current field values.
    ///
    /// Unbound buffers are a no-op with a warning pointing at `save_as`;
    /// this never silently creates a record.
    pub fn save(&mut self, buffer: &EditBuffer) -> StatusMessage {
        let Some(origin) = buffer.origin() else {
            warn!("save requested for a buffer that was never persisted");
            return StatusMessage::warning(
                "\"save\" overwrites stored records; use \"save as\" for new records",
            );
        };

        let Some(target) = self.entries.get_mut(origin) else {
            warn!(origin, "save target slot no longer exists");
            return StatusMessage::warning(format!(
                "the record loaded at position {origin} no longer exists"
            ));
        };

        buffer.merge_into(target);
        let name = target.name.clone();
        debug!(origin, %name, "overwrote record");
        StatusMessage::success(format!("record \"{name}\" overwritten"))
    }

    /// Appends the buffer as a new record and binds it to the new slot.
    ///
    /// Fails with a validation error when the name is unset or taken; the
    /// store is untouched on failure.
    pub fn save_as(&mut self, buffer: &mut EditBuffer) -> ClimateResult<StatusMessage> {
        let Some(name) = buffer.current_name().map(str::to_owned) else {
            return Err(ClimateError::Validation("a name is required".to_owned()));
        };
        if self.position(&name).is_some() {
            return Err(ClimateError::Validation(format!(
                "name \"{name}\" is already taken"
            )));
        }

        self.entries.push(buffer.to_entry());
        buffer.bind(self.entries.len() - 1);
        debug!(%name, count = self.entries.len(), "appended record");
        Ok(StatusMessage::success(format!("record \"{name}\" created")))
    }

    /// Removes the record matching the buffer's current name field.
    ///
    /// Unbound (never persisted) buffers and unmatched names are identity
    /// errors; the store is untouched in both cases.
    pub fn delete(&mut self, buffer: &EditBuffer) -> ClimateResult<StatusMessage> {
        if buffer.origin().is_none() {
            return Err(ClimateError::Identity(
                "\"delete\" removes stored records; unsaved records cannot be deleted".to_owned(),
            ));
        }

        let name = buffer.current_name().unwrap_or_default().to_owned();
        let Some(index) = self.position(&name) else {
            return Err(ClimateError::Identity(format!(
                "no record named \"{name}\" found"
            )));
        };

        self.entries.remove(index);
        debug!(%name, index, count = self.entries.len(), "deleted record");
        Ok(StatusMessage::success(format!("record \"{name}\" deleted")))
    }
}
