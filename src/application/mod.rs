//! Application layer - Use cases and orchestration

pub mod retag;

pub use retag::{retag_record, retag_tree, RetagOptions, RetagReport, RetaggedRecord};
