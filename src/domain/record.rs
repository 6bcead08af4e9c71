//! Metadata records loaded from `info.json`.

use crate::error::{Result, RetagError};
use serde_json::{Map, Value};
use std::path::Path;

/// Key holding the application version.
pub const VERSION_KEY: &str = "Version";

/// An open JSON object. Key order is kept as read.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRecord {
    fields: Map<String, Value>,
}

impl MetadataRecord {
    /// Parse a record from raw file contents. `source` is only used in errors.
    pub fn parse(contents: &str, source: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(contents).map_err(|e| RetagError::Parse {
            path: source.to_path_buf(),
            source: e,
        })?;

        match value {
            Value::Object(fields) => Ok(MetadataRecord { fields }),
            _ => Err(RetagError::NotAnObject(source.to_path_buf())),
        }
    }

    /// The `Version` string, if present.
    pub fn version(&self) -> Option<&str> {
        self.fields.get(VERSION_KEY).and_then(Value::as_str)
    }

    /// Replace `Version` in place, keeping its position among the other keys.
    pub fn set_version(&mut self, version: String) {
        self.fields
            .insert(VERSION_KEY.to_string(), Value::String(version));
    }

    /// Compact JSON with non-ASCII characters written literally.
    pub fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}
