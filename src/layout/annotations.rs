use crate::core::Entry;

/// Horizontal anchoring of an annotation's text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Left,
    Center,
    Right,
}

/// One fixed text annotation in plot coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub text: String,
}

/// The four header annotations on the top row of the plot: station line,
/// location descriptor, average temperature, total precipitation. Decimal
/// points are rendered with a locale comma.
#[must_use]
pub(crate) fn header_annotations(entry: &Entry, top_row_y: f64) -> [Annotation; 4] {
    let average = format!("{:.1} °C", entry.average_temperature()).replace('.', ",");
    let total = format!("{} mm", entry.total_precipitation());

    [
        Annotation {
            x: 0.02,
            y: top_row_y,
            anchor: TextAnchor::Left,
            text: format!("{}/{}, {} m", entry.station, entry.country, entry.elevation),
        },
        Annotation {
            x: 6.0,
            y: top_row_y,
            anchor: TextAnchor::Center,
            text: entry.location.clone(),
        },
        Annotation {
            x: 9.0,
            y: top_row_y,
            anchor: TextAnchor::Center,
            text: average,
        },
        Annotation {
            x: 11.98,
            y: top_row_y,
            anchor: TextAnchor::Right,
            text: total,
        },
    ]
}
