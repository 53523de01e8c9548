//! Provider backed by a name-sorted listing of `laws/*.json`.

use std::path::PathBuf;

use unicode_normalization::UnicodeNormalization;
use walkdir::WalkDir;

use super::{require_exists, DatasetProvider};
use crate::config::{INDEX_FILE_NAME, LAWS_DIR, PRIMARY_DATASET_FILE};
use crate::error::Result;
use crate::timestamp::{file_birth_time, format_last_modified};
use crate::types::{DatasetIndex, LastModified, ScannedLaw};

/// Lists per-law files directly below `laws/`, sorted by display name.
#[derive(Debug, Clone)]
pub struct DirectoryScanProvider {
    data_dir: PathBuf,
}

impl DirectoryScanProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl DatasetProvider for DirectoryScanProvider {
    type Entry = ScannedLaw;

    fn law_entries(&self) -> Result<DatasetIndex<ScannedLaw>> {
        let laws_dir = self.data_dir.join(LAWS_DIR);
        require_exists(&laws_dir)?;

        let mut laws = Vec::new();
        for entry in WalkDir::new(&laws_dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(file_name) = entry.file_name().to_str() else {
                tracing::warn!(
                    path = %entry.path().display(),
                    "Skipping law file with non-UTF-8 name"
                );
                continue;
            };
            if file_name.starts_with('.') || file_name == INDEX_FILE_NAME {
                continue;
            }
            let Some(stem) = file_name.strip_suffix(".json") else {
                continue;
            };

            // NFC so NFD file names (e.g. from macOS) sort and render like the rest
            let name: String = stem.nfc().collect();
            laws.push(ScannedLaw::new(format!("{LAWS_DIR}/{file_name}"), name));
        }

        laws.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.relative_path.cmp(&b.relative_path))
        });

        tracing::debug!(dir = %laws_dir.display(), count = laws.len(), "Scanned law files");
        Ok(DatasetIndex::new(laws))
    }

    fn last_modified(&self) -> Result<LastModified> {
        let birth = file_birth_time(&self.data_dir.join(PRIMARY_DATASET_FILE))?;
        Ok(format_last_modified(&birth))
    }
}
