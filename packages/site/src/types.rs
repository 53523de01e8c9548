//! Core data types for the listing page.
//!
//! The page lists laws from one of two dataset shapes. Both entry types
//! implement [`ListingEntry`], so the page builder never needs to know which
//! shape it was given.

use std::fmt;

use serde::Deserialize;

use crate::config::{INDEX_LINK_DIR, LAWS_DIR, SCAN_LINK_PREFIX};

/// Capability the page builder needs from a law entry.
pub trait ListingEntry {
    /// Identifier that selects the law document within the dataset.
    fn identifier(&self) -> &str;

    /// Text shown for the link.
    fn link_text(&self) -> String;

    /// Link target, relative to the page.
    fn link_target(&self) -> String;

    /// Location of the linked file, relative to the data directory.
    fn dataset_path(&self) -> String;
}

/// One record of `laws/__index.json`.
///
/// Missing fields load as empty strings and render as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexedLaw {
    /// Slugified abbreviation (e.g., "bgb"); also the per-law file stem.
    #[serde(default)]
    pub slug: String,

    /// Official abbreviation (e.g., "BGB").
    #[serde(default)]
    pub abbreviation: String,

    /// Full name (e.g., "Bürgerliches Gesetzbuch").
    #[serde(default)]
    pub name: String,
}

impl IndexedLaw {
    #[must_use]
    pub fn new(
        slug: impl Into<String>,
        abbreviation: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            abbreviation: abbreviation.into(),
            name: name.into(),
        }
    }
}

impl ListingEntry for IndexedLaw {
    fn identifier(&self) -> &str {
        &self.slug
    }

    /// # Examples
    /// ```
    /// use gadi_site::types::{IndexedLaw, ListingEntry};
    ///
    /// let law = IndexedLaw::new("bgb", "BGB", "Bürgerliches Gesetzbuch");
    /// assert_eq!(law.link_text(), "BGB (Bürgerliches Gesetzbuch)");
    /// assert_eq!(law.link_target(), "laws/bgb.json");
    /// ```
    fn link_text(&self) -> String {
        format!("{} ({})", self.abbreviation, self.name)
    }

    fn link_target(&self) -> String {
        format!("{INDEX_LINK_DIR}/{}.json", self.slug)
    }

    fn dataset_path(&self) -> String {
        format!("{LAWS_DIR}/{}.json", self.slug)
    }
}

/// One per-law file found by scanning the dataset directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLaw {
    /// Path relative to the data directory (e.g., "laws/bgb.json").
    pub relative_path: String,

    /// File stem, used as display name.
    pub name: String,
}

impl ScannedLaw {
    #[must_use]
    pub fn new(relative_path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            name: name.into(),
        }
    }
}

impl ListingEntry for ScannedLaw {
    fn identifier(&self) -> &str {
        &self.relative_path
    }

    fn link_text(&self) -> String {
        self.name.clone()
    }

    fn link_target(&self) -> String {
        format!("{SCAN_LINK_PREFIX}/{}", self.relative_path)
    }

    fn dataset_path(&self) -> String {
        self.relative_path.clone()
    }
}

/// Ordered, immutable sequence of law entries for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetIndex<E> {
    entries: Vec<E>,
}

impl<E> DatasetIndex<E> {
    #[must_use]
    pub fn new(entries: Vec<E>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }
}

impl<E> From<Vec<E>> for DatasetIndex<E> {
    fn from(entries: Vec<E>) -> Self {
        Self::new(entries)
    }
}

impl<'a, E> IntoIterator for &'a DatasetIndex<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Formatted freshness timestamp of the dataset, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastModified(String);

impl LastModified {
    #[must_use]
    pub fn new(formatted: impl Into<String>) -> Self {
        Self(formatted.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LastModified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
