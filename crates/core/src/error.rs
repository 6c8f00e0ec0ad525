//! Inventory error model.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used across the inventory crates.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Mutations on the store never produce one of these; they report outcomes
/// instead. Only persistence and input parsing fail with an error.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// An item name failed validation (e.g. empty).
    #[error("invalid item name: {0}")]
    InvalidItem(String),

    /// The inventory file could not be opened or read.
    #[error("failed to read inventory file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The inventory file could not be created or written.
    #[error("failed to write inventory file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The inventory file is not a JSON object of integer quantities.
    #[error("malformed inventory file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store could not be encoded as JSON.
    #[error("failed to encode inventory for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl InventoryError {
    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::InvalidItem(msg.into())
    }

    pub fn read(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// `serde_json` reports writer failures as its own error kind; keep those
    /// as IO failures so callers see a single category per cause.
    pub fn encode(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        if source.is_io() {
            let io = io::Error::from(source);
            return Self::write(path, io);
        }
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for failures of the underlying file (as opposed to its content).
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_mentions_path() {
        let err = InventoryError::read(
            "missing.json",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.json"));
        assert!(msg.contains("no such file"));
        assert!(err.is_io());
    }

    #[test]
    fn parse_error_is_not_io() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = InventoryError::parse("bad.json", source);
        assert!(!err.is_io());
        assert!(err.to_string().starts_with("malformed inventory file bad.json"));
    }
}
