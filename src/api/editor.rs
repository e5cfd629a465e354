use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::api::buffer::EditBuffer;
use crate::api::status::StatusMessage;
use crate::api::store::DatasetStore;
use crate::core::{Elevation, MONTHS, MONTH_COUNT};
use crate::error::{ClimateError, ClimateResult};

/// Addressable fields of an edit buffer. Month-indexed variants carry the
/// zero-based month (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    Station,
    Country,
    Elevation,
    Location,
    Temperature(usize),
    Precipitation(usize),
}

impl FieldKey {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Station => "station",
            FieldKey::Country => "country",
            FieldKey::Elevation => "elevation",
            FieldKey::Location => "location",
            FieldKey::Temperature(_) => "temperature",
            FieldKey::Precipitation(_) => "precipitation",
        }
    }
}

/// Commit actions a host can trigger from the edit surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitAction {
    Save,
    SaveAs,
    Delete,
}

/// Decoration glyphs for the host's field labels, in display order.
#[must_use]
pub fn field_decorations() -> IndexMap<&'static str, &'static str> {
    IndexMap::from([
        ("Name", "🏷️"),
        ("Station", "🛰️"),
        ("Land", "🌍"),
        ("Höhe", "⛰️"),
        ("Lage", "📍"),
        ("Temperaturen", "🌡️"),
        ("Niederschläge", "🌧️"),
    ])
}

enum EditorState {
    NoSelection,
    /// Buffer bound to a store slot at load time.
    Editing(EditBuffer),
    /// Fresh buffer that has never been persisted.
    Creating(EditBuffer),
}

/// State machine guarding one in-progress edit.
///
/// Field edits are validated before they reach the buffer and commits
/// delegate to the store; every failure is recoverable and leaves buffer
/// and store exactly as they were. Each commit replaces the pending status
/// message with exactly one new message.
pub struct EntryEditor {
    state: EditorState,
    status: Option<StatusMessage>,
}

impl Default for EntryEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryEditor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: EditorState::NoSelection,
            status: None,
        }
    }

    /// Loads the named record into a fresh bound buffer.
    pub fn select_load(&mut self, store: &DatasetStore, name: &str) -> ClimateResult<()> {
        let index = store.position(name).ok_or_else(|| {
            ClimateError::Identity(format!("no record named \"{name}\" found"))
        })?;
        let entry = &store.entries()[index];
        debug!(name, index, "loaded record into editor");
        self.state = EditorState::Editing(EditBuffer::from_entry(index, entry));
        Ok(())
    }

    /// Starts a fresh, never-persisted record.
    pub fn select_create(&mut self, store: &DatasetStore) {
        debug!("creating blank record");
        self.state = EditorState::Creating(store.create());
    }

    /// Drops the current selection without touching the store.
    pub fn clear_selection(&mut self) {
        self.state = EditorState::NoSelection;
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&EditBuffer> {
        match &self.state {
            EditorState::NoSelection => None,
            EditorState::Editing(buffer) | EditorState::Creating(buffer) => Some(buffer),
        }
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.buffer().is_some()
    }

    /// Last commit outcome, if the host has not consumed it yet.
    #[must_use]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Hands the pending status message to the host for display.
    pub fn take_status(&mut self) -> Option<StatusMessage> {
        self.status.take()
    }

    /// Applies raw field text to the buffer.
    ///
    /// Month fields must parse as finite real numbers and are rounded to
    /// one decimal (temperature) or whole millimeters (precipitation).
    /// Scalar fields store the text verbatim; elevation keeps its integer
    /// wire form only for input that is already numeric.
    pub fn edit_field(&mut self, key: FieldKey, raw: &str) -> ClimateResult<()> {
        let buffer = match &mut self.state {
            EditorState::NoSelection => {
                return Err(ClimateError::Identity("no record selected".to_owned()));
            }
            EditorState::Editing(buffer) | EditorState::Creating(buffer) => buffer,
        };

        match key {
            FieldKey::Temperature(month) => {
                let value = parse_month_value(key, month, raw)?;
                buffer.temperatures[month] = (value * 10.0).round() / 10.0;
            }
            FieldKey::Precipitation(month) => {
                let value = parse_month_value(key, month, raw)?;
                buffer.precipitation[month] = value.round();
            }
            FieldKey::Name => buffer.name = Some(raw.to_owned()),
            FieldKey::Station => buffer.station = Some(raw.to_owned()),
            FieldKey::Country => buffer.country = Some(raw.to_owned()),
            FieldKey::Location => buffer.location = Some(raw.to_owned()),
            FieldKey::Elevation => buffer.elevation = Some(Elevation::Text(raw.to_owned())),
        }

        trace!(field = key.label(), raw, "applied field edit");
        Ok(())
    }

    /// Runs one commit action against the store.
    ///
    /// On success the binding is re-derived from the resulting store state:
    /// same slot after `Save`, last slot after `SaveAs`, cleared selection
    /// after deleting the selected record. The returned message is also
    /// retained as the pending status, replacing any prior one.
    pub fn commit(&mut self, store: &mut DatasetStore, action: CommitAction) -> StatusMessage {
        let message = self.dispatch(store, action);
        self.status = Some(message.clone());
        message
    }

    fn dispatch(&mut self, store: &mut DatasetStore, action: CommitAction) -> StatusMessage {
        let buffer = match &mut self.state {
            EditorState::NoSelection => {
                return StatusMessage::error("no record selected");
            }
            EditorState::Editing(buffer) | EditorState::Creating(buffer) => buffer,
        };

        match action {
            CommitAction::Save => store.save(buffer),
            CommitAction::SaveAs => match store.save_as(buffer) {
                Ok(message) => {
                    // save_as bound the buffer to the appended slot.
                    let bound = std::mem::replace(buffer, EditBuffer::blank());
                    self.state = EditorState::Editing(bound);
                    message
                }
                Err(err) => err.into(),
            },
            CommitAction::Delete => match store.delete(buffer) {
                Ok(message) => {
                    self.state = EditorState::NoSelection;
                    message
                }
                Err(err) => err.into(),
            },
        }
    }
}

fn parse_month_value(key: FieldKey, month: usize, raw: &str) -> ClimateResult<f64> {
    if month >= MONTH_COUNT {
        return Err(ClimateError::Validation(format!(
            "month index {month} out of range"
        )));
    }

    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| {
            ClimateError::Validation(format!(
                "invalid {} {raw:?} for month {} ({})",
                key.label(),
                month + 1,
                MONTHS[month]
            ))
        })
}
