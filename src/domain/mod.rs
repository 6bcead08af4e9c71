//! Domain layer - Version composition and metadata records

pub mod record;
pub mod version;

pub use record::{MetadataRecord, VERSION_KEY};
pub use version::{folder_digits, AppVersion, VersionTag};
