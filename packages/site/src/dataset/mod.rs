//! Dataset index providers.
//!
//! A provider loads the ordered law entries and the "last modified" value
//! for one build. The page builder receives both as plain values and never
//! touches the filesystem itself.

mod index_file;
mod scan;

use chrono::{DateTime, FixedOffset};

use crate::error::Result;
use crate::types::{DatasetIndex, LastModified, ListingEntry};

pub use index_file::IndexFileProvider;
pub use scan::DirectoryScanProvider;

/// Source of the law listing for one build.
pub trait DatasetProvider {
    /// Entry shape this provider yields.
    type Entry: ListingEntry;

    /// Load all law entries in a stable, deterministic order.
    fn law_entries(&self) -> Result<DatasetIndex<Self::Entry>>;

    /// Freshness of the dataset, formatted for display.
    fn last_modified(&self) -> Result<LastModified>;
}

/// Wraps a provider and replaces its timestamp with a fixed instant.
///
/// Used for reproducible builds where file metadata is not meaningful
/// (e.g. a fresh checkout).
#[derive(Debug, Clone)]
pub struct FixedTimestamp<P> {
    inner: P,
    instant: DateTime<FixedOffset>,
}

impl<P> FixedTimestamp<P> {
    pub fn new(inner: P, instant: DateTime<FixedOffset>) -> Self {
        Self { inner, instant }
    }
}

impl<P: DatasetProvider> DatasetProvider for FixedTimestamp<P> {
    type Entry = P::Entry;

    fn law_entries(&self) -> Result<DatasetIndex<Self::Entry>> {
        self.inner.law_entries()
    }

    fn last_modified(&self) -> Result<LastModified> {
        Ok(crate::timestamp::format_last_modified(&self.instant))
    }
}

/// Fail with [`SiteError::MissingDataset`](crate::error::SiteError::MissingDataset)
/// unless `path` exists.
pub(crate) fn require_exists(path: &std::path::Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(crate::error::SiteError::MissingDataset {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_timestamp;
    use crate::types::IndexedLaw;

    struct StaticProvider;

    impl DatasetProvider for StaticProvider {
        type Entry = IndexedLaw;

        fn law_entries(&self) -> Result<DatasetIndex<IndexedLaw>> {
            Ok(DatasetIndex::new(vec![IndexedLaw::new("gg", "GG", "Grundgesetz")]))
        }

        fn last_modified(&self) -> Result<LastModified> {
            Ok(LastModified::new("from metadata"))
        }
    }

    #[test]
    fn test_fixed_timestamp_overrides_only_timestamp() {
        let instant = parse_timestamp("2024-01-01T00:00:00+01:00").unwrap();
        let provider = FixedTimestamp::new(StaticProvider, instant);

        assert_eq!(
            provider.last_modified().unwrap().as_str(),
            "Montag, den 1. Januar 2024, 00:00:00 (CET)"
        );
        assert_eq!(provider.law_entries().unwrap().len(), 1);
    }
}
