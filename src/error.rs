//! Error types for vertag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for vertag
#[derive(Debug, Error)]
pub enum RetagError {
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Metadata is not a JSON object: {0}")]
    NotAnObject(PathBuf),

    #[error("Missing \"Version\" string in {0}")]
    MissingVersion(PathBuf),

    #[error("Version '{version}' in {path} contains no digits")]
    NoVersionDigits { path: PathBuf, version: String },

    #[error("Working directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Directory name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RetagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RetagError::Parse { .. } | RetagError::NotAnObject(_) => 2,
            RetagError::MissingVersion(_) => 3,
            RetagError::NoVersionDigits { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RetagError::Parse { path, source } => {
                format!(
                    "Invalid JSON in {}: {}\n\n\
                    Suggestions:\n\
                    • Check the file for trailing commas or unquoted keys\n\
                    • Records written before this file were kept in output/",
                    path.display(),
                    source
                )
            }
            RetagError::MissingVersion(path) => {
                format!(
                    "Missing \"Version\" string in {}\n\n\
                    Every info.json must carry a Version field, e.g.\n\
                    {{\"Version\":\"2019.4.15f1\"}}",
                    path.display()
                )
            }
            RetagError::NoVersionDigits { path, version } => {
                format!(
                    "Version '{}' in {} contains no digits\n\n\
                    Expected a version like 2019.4.15f1 (major.minor...)",
                    version,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RetagError
pub type Result<T> = std::result::Result<T, RetagError>;
