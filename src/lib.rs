//! klima-rs: climate record store and diagram layout engine.
//!
//! This crate keeps a small, ordered collection of named climate records
//! (station metadata plus twelve monthly temperature and precipitation
//! values), mediates edits through a buffered editor state machine, and
//! turns any record into the deterministic geometry of a dual-axis climate
//! diagram with a piecewise precipitation scale. Rendering, file transport
//! and widgets stay on the host side; this crate only produces data.

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod layout;
pub mod telemetry;

pub use api::{ClimateSession, CommitAction, DatasetStore, EditBuffer, EntryEditor};
pub use error::{ClimateError, ClimateResult};
