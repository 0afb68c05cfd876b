use std::path::PathBuf;

/// Result type alias for snapshot-store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error type for snapshot-store operations
///
/// These errors never escape the event-log engine: the engine absorbs every
/// store failure and degrades to memory-only operation instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store cannot be used at all
    #[error("snapshot store unavailable: {reason}")]
    Unavailable { reason: String },

    /// An I/O operation on a store key failed
    #[error("store {operation} failed for key '{key}': {source}")]
    Io {
        key: String,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped onto the backing store
    #[error("invalid store key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    /// A filesystem operation outside any single key failed
    #[error("store file system {operation} failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn io(key: impl Into<String>, operation: &'static str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            operation,
            source,
        }
    }

    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            path: path.into(),
            operation,
            source,
        }
    }
}
