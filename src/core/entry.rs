use std::fmt;

use serde::{Deserialize, Serialize};

/// Months per record; both series always carry exactly this many values.
pub const MONTH_COUNT: usize = 12;

/// Month axis labels, January first. German abbreviations, matching the
/// wire format keys and the decimal-comma annotation convention.
pub const MONTHS: [&str; MONTH_COUNT] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

/// Station elevation as it appears on the wire: either a bare integer or
/// free text. The distinction is preserved so exports round-trip exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Elevation {
    Meters(i64),
    Text(String),
}

impl Default for Elevation {
    fn default() -> Self {
        Elevation::Text(String::new())
    }
}

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elevation::Meters(m) => write!(f, "{m}"),
            Elevation::Text(t) => f.write_str(t),
        }
    }
}

/// One station's climate record.
///
/// The serde renames pin the exact exchange-format keys; the fixed-length
/// series arrays make the twelve-element invariant structural, so malformed
/// payloads are rejected during deserialization rather than checked later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Land")]
    pub country: String,
    #[serde(rename = "Höhe")]
    pub elevation: Elevation,
    #[serde(rename = "Lage")]
    pub location: String,
    #[serde(rename = "Temperaturen")]
    pub temperatures: [f64; MONTH_COUNT],
    #[serde(rename = "Niederschläge")]
    pub precipitation: [f64; MONTH_COUNT],
}

impl Entry {
    /// Mean of the monthly temperatures, rounded to one decimal. Derived,
    /// never stored.
    #[must_use]
    pub fn average_temperature(&self) -> f64 {
        let mean = self.temperatures.iter().sum::<f64>() / MONTH_COUNT as f64;
        (mean * 10.0).round() / 10.0
    }

    /// Annual precipitation sum, rounded to the nearest millimeter. Derived,
    /// never stored.
    #[must_use]
    pub fn total_precipitation(&self) -> i64 {
        self.precipitation.iter().sum::<f64>().round() as i64
    }
}
