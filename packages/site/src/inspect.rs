//! Dataset inspection: list the page's links and check them against the dataset.

use std::path::Path;

use crate::config::{BuildConfig, SourceKind, BULK_ARCHIVE_FILES};
use crate::dataset::{DatasetProvider, DirectoryScanProvider, IndexFileProvider};
use crate::error::Result;
use crate::types::{DatasetIndex, ListingEntry};

/// Display text and target of one law link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSummary {
    pub text: String,
    pub target: String,
}

/// Result of checking a dataset's links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Number of files looked up (law files plus bulk archives).
    pub checked: usize,

    /// Dataset-relative paths that do not exist.
    pub missing: Vec<String>,

    /// Positions of entries with an empty identifier.
    pub empty_identifiers: Vec<usize>,
}

impl CheckReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.empty_identifiers.is_empty()
    }

    /// Total number of problems found.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.missing.len() + self.empty_identifiers.len()
    }
}

/// Law links in page order.
pub fn list_links(config: &BuildConfig) -> Result<Vec<LinkSummary>> {
    fn collect<E: ListingEntry>(index: &DatasetIndex<E>) -> Vec<LinkSummary> {
        index
            .iter()
            .map(|e| LinkSummary {
                text: e.link_text(),
                target: e.link_target(),
            })
            .collect()
    }

    Ok(match config.source {
        SourceKind::Index => collect(&IndexFileProvider::new(&config.data_dir).law_entries()?),
        SourceKind::Scan => collect(&DirectoryScanProvider::new(&config.data_dir).law_entries()?),
    })
}

/// Check that every linked file exists below `data_dir`.
pub fn check_links<E: ListingEntry>(data_dir: &Path, index: &DatasetIndex<E>) -> CheckReport {
    let mut report = CheckReport::default();

    for archive in BULK_ARCHIVE_FILES {
        report.checked += 1;
        if !data_dir.join(archive).is_file() {
            report.missing.push(archive.to_string());
        }
    }

    for (position, entry) in index.iter().enumerate() {
        if entry.identifier().is_empty() {
            report.empty_identifiers.push(position);
            continue;
        }

        report.checked += 1;
        let relative = entry.dataset_path();
        if !data_dir.join(&relative).is_file() {
            tracing::debug!(path = %relative, "Linked file missing");
            report.missing.push(relative);
        }
    }

    report
}

/// Load the dataset for `config` and check its links.
pub fn check_for_config(config: &BuildConfig) -> Result<CheckReport> {
    let data_dir = config.data_dir.as_path();
    Ok(match config.source {
        SourceKind::Index => {
            check_links(data_dir, &IndexFileProvider::new(data_dir).law_entries()?)
        }
        SourceKind::Scan => {
            check_links(data_dir, &DirectoryScanProvider::new(data_dir).law_entries()?)
        }
    })
}
