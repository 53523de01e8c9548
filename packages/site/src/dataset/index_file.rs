//! Provider backed by the pre-computed `laws/__index.json`.

use std::fs;
use std::path::{Path, PathBuf};

use super::{require_exists, DatasetProvider};
use crate::config::{looks_like_slug, INDEX_FILE_NAME, LAWS_DIR, PRIMARY_DATASET_FILE};
use crate::error::{Result, SiteError};
use crate::timestamp::{file_birth_time, format_last_modified};
use crate::types::{DatasetIndex, IndexedLaw, LastModified};

/// Reads law entries from the index file, keeping the file's order.
#[derive(Debug, Clone)]
pub struct IndexFileProvider {
    data_dir: PathBuf,
}

impl IndexFileProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Location of the index file.
    pub fn index_path(&self) -> PathBuf {
        self.data_dir.join(LAWS_DIR).join(INDEX_FILE_NAME)
    }

    fn primary_path(&self) -> PathBuf {
        self.data_dir.join(PRIMARY_DATASET_FILE)
    }
}

/// Parse the contents of an index file.
pub(crate) fn parse_index(path: &Path, json: &str) -> Result<Vec<IndexedLaw>> {
    serde_json::from_str(json).map_err(|source| SiteError::IndexParse {
        path: path.to_path_buf(),
        source,
    })
}

impl DatasetProvider for IndexFileProvider {
    type Entry = IndexedLaw;

    fn law_entries(&self) -> Result<DatasetIndex<IndexedLaw>> {
        let path = self.index_path();
        require_exists(&path)?;

        let json = fs::read_to_string(&path)?;
        let laws = parse_index(&path, &json)?;

        for law in laws.iter().filter(|l| !looks_like_slug(&l.slug)) {
            tracing::warn!(
                slug = %law.slug,
                abbreviation = %law.abbreviation,
                "Unexpected slug in law index, link may be broken"
            );
        }

        tracing::debug!(path = %path.display(), count = laws.len(), "Loaded law index");
        Ok(DatasetIndex::new(laws))
    }

    fn last_modified(&self) -> Result<LastModified> {
        let birth = file_birth_time(&self.primary_path())?;
        Ok(format_last_modified(&birth))
    }
}
