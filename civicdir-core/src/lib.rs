//! Core types for civicdir.
//!
//! - `event`: the civic `Event` record and its `EventCategory`
//! - `format`: locale-aware date/time rendering used by the event's derived views
//! - `store`: the directory of JSON files that owns event persistence
//! - `civicdir` / `config`: user configuration and the values derived from it

pub mod civicdir;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod store;
pub mod utils;

pub use event::{Event, EventCategory};
