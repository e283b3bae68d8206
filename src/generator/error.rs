//! Version Generator Error Types

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VersionGenError {
    #[error("Invalid version '{input}': expected 'Major.Minor' format, for example '1.5'")]
    MalformedVersion { input: String },

    #[error("No version supplied: pass a combined version such as '1.5', or both a major and a minor component")]
    MissingVersion,

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generator operations
pub type GenResult<T> = Result<T, VersionGenError>;
