//! Error types for the site generator.
//!
//! Every failure is a build failure: the page is either rendered completely
//! or not written at all.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the site generator.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A file or directory the dataset must provide is absent.
    #[error("Missing dataset source: {}", .path.display())]
    MissingDataset { path: PathBuf },

    /// Failed to parse the law index file.
    #[error("Failed to parse law index {}: {source}", .path.display())]
    IndexParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid `--last-modified` override.
    #[error("Invalid timestamp: '{0}'. Expected RFC 3339 (e.g., 2024-01-01T00:00:00+01:00)")]
    InvalidTimestamp(String),

    /// Output path is unusable.
    #[error("Invalid output directory: {}: {reason}", .path.display())]
    InvalidOutputDir { path: PathBuf, reason: String },

    /// The link check found targets that do not exist in the dataset.
    #[error("{count} broken link(s) in dataset")]
    BrokenLinks { count: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("Failed to list dataset directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type alias for site generator operations.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dataset_display() {
        let err = SiteError::MissingDataset {
            path: PathBuf::from("data/all_laws.json"),
        };
        assert_eq!(
            err.to_string(),
            "Missing dataset source: data/all_laws.json"
        );
    }

    #[test]
    fn test_invalid_timestamp_display() {
        let err = SiteError::InvalidTimestamp("yesterday".to_string());
        assert!(err.to_string().contains("yesterday"));
        assert!(err.to_string().contains("RFC 3339"));
    }

    #[test]
    fn test_broken_links_display() {
        let err = SiteError::BrokenLinks { count: 3 };
        assert_eq!(err.to_string(), "3 broken link(s) in dataset");
    }
}
