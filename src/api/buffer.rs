use crate::core::{Elevation, Entry, MONTH_COUNT};

/// Working copy of one record under edit.
///
/// Scalar fields are optional so a blank buffer can distinguish "never
/// touched" from "set to empty"; saving merges field by field and unset
/// fields keep the stored values. The origin index is a snapshot of the
/// store position at load time, not a live reference — store mutations
/// elsewhere never reach an open buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    origin: Option<usize>,
    pub name: Option<String>,
    pub station: Option<String>,
    pub country: Option<String>,
    pub elevation: Option<Elevation>,
    pub location: Option<String>,
    pub temperatures: [f64; MONTH_COUNT],
    pub precipitation: [f64; MONTH_COUNT],
}

impl EditBuffer {
    /// Fresh, never-persisted buffer with zeroed series.
    #[must_use]
    pub fn blank() -> Self {
        Self {
            origin: None,
            name: None,
            station: None,
            country: None,
            elevation: None,
            location: None,
            temperatures: [0.0; MONTH_COUNT],
            precipitation: [0.0; MONTH_COUNT],
        }
    }

    /// Buffer bound to the store slot the entry was loaded from.
    #[must_use]
    pub fn from_entry(origin: usize, entry: &Entry) -> Self {
        Self {
            origin: Some(origin),
            name: Some(entry.name.clone()),
            station: Some(entry.station.clone()),
            country: Some(entry.country.clone()),
            elevation: Some(entry.elevation.clone()),
            location: Some(entry.location.clone()),
            temperatures: entry.temperatures,
            precipitation: entry.precipitation,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Option<usize> {
        self.origin
    }

    pub(crate) fn bind(&mut self, origin: usize) {
        self.origin = Some(origin);
    }

    /// Materializes the buffer as a full entry; unset scalar fields become
    /// empty values so committed entries stay fully typed.
    #[must_use]
    pub fn to_entry(&self) -> Entry {
        Entry {
            name: self.name.clone().unwrap_or_default(),
            station: self.station.clone().unwrap_or_default(),
            country: self.country.clone().unwrap_or_default(),
            elevation: self.elevation.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            temperatures: self.temperatures,
            precipitation: self.precipitation,
        }
    }

    /// Field-by-field merge: set fields overwrite, unset fields keep the
    /// target's prior values. Series always travel with the buffer.
    pub fn merge_into(&self, target: &mut Entry) {
        if let Some(name) = &self.name {
            target.name = name.clone();
        }
        if let Some(station) = &self.station {
            target.station = station.clone();
        }
        if let Some(country) = &self.country {
            target.country = country.clone();
        }
        if let Some(elevation) = &self.elevation {
            target.elevation = elevation.clone();
        }
        if let Some(location) = &self.location {
            target.location = location.clone();
        }
        target.temperatures = self.temperatures;
        target.precipitation = self.precipitation;
    }

    /// Name as the delete operation resolves it: the current field text,
    /// not the name the record was loaded under.
    #[must_use]
    pub fn current_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}
