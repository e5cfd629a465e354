mod json;

pub use json::{export_dataset, import_dataset, sample_dataset};
