pub mod entry;
pub mod labels;
pub mod scale;

pub use entry::{Elevation, Entry, MONTHS, MONTH_COUNT};
pub use labels::{precipitation_labels, subzero_labels};
pub use scale::{axis_units, temperature_axis_units, SCALE_KINK_MM};
