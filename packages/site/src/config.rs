//! Configuration constants and build settings for the site generator.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use clap::ValueEnum;
use regex::Regex;

use crate::error::{Result, SiteError};

/// Page title and heading.
pub const PAGE_TITLE: &str = "Gesetze aus dem Internet";

/// Link to the single compressed JSON file holding every law.
pub const BULK_JSON_ARCHIVE: &str = "gadi/all_laws.json.gz";

/// Link to the tarball with one JSON file per law.
pub const BULK_TARBALL: &str = "gadi/all_laws.tar.gz";

/// Prefix of per-law links in the directory-scan variant.
pub const SCAN_LINK_PREFIX: &str = "gadi";

/// Directory of per-law links in the index-file variant.
pub const INDEX_LINK_DIR: &str = "laws";

/// Primary dataset file; its creation time is the page's "last modified" value.
pub const PRIMARY_DATASET_FILE: &str = "all_laws.json";

/// Bulk archive file names as found in the data directory.
pub const BULK_ARCHIVE_FILES: [&str; 2] = ["all_laws.json.gz", "all_laws.tar.gz"];

/// Subdirectory of the data directory holding per-law JSON files.
pub const LAWS_DIR: &str = "laws";

/// Pre-computed index of all laws, co-located with the per-law files.
pub const INDEX_FILE_NAME: &str = "__index.json";

/// Name of the rendered page.
pub const OUTPUT_FILE_NAME: &str = "index.html";

/// chrono pattern for the German "last modified" line,
/// e.g. `Montag, den 1. Januar 2024, 00:00:00 (CET)`.
pub const TIMESTAMP_FORMAT: &str = "%A, den %-d. %B %Y, %H:%M:%S (%Z)";

/// Zone the timestamp is rendered in.
pub const TIMESTAMP_ZONE: chrono_tz::Tz = chrono_tz::Europe::Berlin;

/// Slugs as produced by the ingest step: lowercase ASCII, digits and underscores.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_]*$").expect("valid regex"));

/// Check whether a slug has the shape the ingest step produces.
///
/// Used for diagnostics only; non-matching slugs are still rendered.
///
/// # Examples
/// ```
/// use gadi_site::config::looks_like_slug;
///
/// assert!(looks_like_slug("bgb"));
/// assert!(looks_like_slug("sgb_5"));
/// assert!(!looks_like_slug(""));
/// assert!(!looks_like_slug("../etc"));
/// ```
pub fn looks_like_slug(slug: &str) -> bool {
    SLUG_PATTERN.is_match(slug)
}

/// Which shape of dataset index to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SourceKind {
    /// `laws/__index.json` with slug, abbreviation and name per law.
    #[default]
    Index,

    /// Name-sorted listing of `laws/*.json`.
    Scan,
}

/// Settings for one build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub source: SourceKind,
    pub last_modified: Option<DateTime<FixedOffset>>,
}

impl BuildConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output_dir: PathBuf::from("."),
            source: SourceKind::default(),
            last_modified: None,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    pub fn with_last_modified(mut self, last_modified: DateTime<FixedOffset>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }

    /// Path of the per-law directory.
    pub fn laws_dir(&self) -> PathBuf {
        self.data_dir.join(LAWS_DIR)
    }
}

/// Parse a `--last-modified` override.
///
/// # Examples
/// ```
/// use gadi_site::config::parse_timestamp;
///
/// assert!(parse_timestamp("2024-01-01T00:00:00+01:00").is_ok());
/// assert!(parse_timestamp("2024-01-01").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|_| SiteError::InvalidTimestamp(value.to_string()))
}

/// Ensure the output directory exists and is a directory.
pub fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SiteError::InvalidOutputDir {
            path: path.to_path_buf(),
            reason: "does not exist".to_string(),
        });
    }
    if !path.is_dir() {
        return Err(SiteError::InvalidOutputDir {
            path: path.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_looks_like_slug() {
        assert!(looks_like_slug("bgb"));
        assert!(looks_like_slug("wistrg_1954"));
        assert!(looks_like_slug("a_kae"));

        assert!(!looks_like_slug(""));
        assert!(!looks_like_slug("BGB"));
        assert!(!looks_like_slug("_bgb"));
        assert!(!looks_like_slug("bgb.json"));
        assert!(!looks_like_slug("laws/bgb"));
    }

    #[test]
    fn test_build_config_defaults() {
        let config = BuildConfig::new("data");
        assert_eq!(config.source, SourceKind::Index);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.last_modified.is_none());
        assert_eq!(config.laws_dir(), PathBuf::from("data").join("laws"));
    }

    #[test]
    fn test_build_config_builders() {
        let ts = parse_timestamp("2024-01-01T00:00:00+01:00").unwrap();
        let config = BuildConfig::new("data")
            .with_output_dir("public")
            .with_source(SourceKind::Scan)
            .with_last_modified(ts);

        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.source, SourceKind::Scan);
        assert_eq!(config.last_modified, Some(ts));
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(matches!(
            parse_timestamp("01.01.2024"),
            Err(SiteError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_validate_output_dir() {
        let dir = tempdir().unwrap();
        assert!(validate_output_dir(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        assert!(validate_output_dir(&missing).is_err());

        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(validate_output_dir(&file).is_err());
    }
}
