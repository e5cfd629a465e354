mod buffer;
mod editor;
mod session;
mod status;
mod store;

pub use buffer::EditBuffer;
pub use editor::{field_decorations, CommitAction, EntryEditor, FieldKey};
pub use session::ClimateSession;
pub use status::{Severity, StatusMessage};
pub use store::DatasetStore;
