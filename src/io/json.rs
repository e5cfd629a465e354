use tracing::debug;

use crate::core::{Elevation, Entry};
use crate::error::{ClimateError, ClimateResult};

/// Parses an exchange-format payload (JSON array of records).
///
/// A malformed payload — bad JSON, a series without exactly twelve values,
/// a non-integer numeric elevation — yields one import error and leaves
/// whatever the caller already holds untouched.
pub fn import_dataset(bytes: &[u8]) -> ClimateResult<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_slice(bytes)
        .map_err(|err| ClimateError::Import(format!("malformed dataset payload: {err}")))?;
    debug!(count = entries.len(), "imported dataset");
    Ok(entries)
}

/// Serializes records back to the exchange format: pretty-printed with
/// two-space indentation, non-ASCII keys unescaped, keys and order exactly
/// as imported.
pub fn export_dataset(entries: &[Entry]) -> ClimateResult<Vec<u8>> {
    let bytes = serde_json::to_vec_pretty(entries)
        .map_err(|err| ClimateError::Import(format!("failed to serialize dataset: {err}")))?;
    debug!(count = entries.len(), bytes = bytes.len(), "exported dataset");
    Ok(bytes)
}

/// Built-in dataset offered when no import is supplied.
#[must_use]
pub fn sample_dataset() -> Vec<Entry> {
    vec![Entry {
        name: "Musterdatensatz".to_owned(),
        station: "New York City".to_owned(),
        country: "USA".to_owned(),
        elevation: Elevation::Text("20".to_owned()),
        location: "40°N/74°W".to_owned(),
        temperatures: [
            -1.0, 0.0, 4.1, 10.4, 16.0, 21.3, 24.5, 23.6, 20.1, 13.7, 7.7, 2.5,
        ],
        precipitation: [
            86.0, 78.0, 106.0, 92.0, 92.0, 103.0, 105.0, 106.0, 95.0, 97.0, 76.0, 103.0,
        ],
    }]
}
