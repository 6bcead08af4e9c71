//! Infrastructure layer - Filesystem access

pub mod repository;

pub use repository::{
    FileSystemRepository, MetadataRepository, RootFolder, VersionSource, INFO_FILE, OUTPUT_DIR,
};
