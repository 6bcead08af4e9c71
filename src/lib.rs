//! vertag - Version retagging for metadata trees
//!
//! Walks `<root>/<id>/<version folder>/info.json`, composes a new version string
//! from the recorded application version, the folder digits and the id, and writes
//! each record to `<root>/output/<new version>.json`.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RetagError;
