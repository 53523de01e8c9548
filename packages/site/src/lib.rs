//! Gesetze aus dem Internet - static download page for the law dataset.
//!
//! Reads the dataset description (the pre-computed law index or a listing of
//! per-law files) once at build time and renders a single HTML page linking
//! to the bulk archives and to every law's JSON file.
//!
//! # Example
//!
//! ```
//! use gadi_site::page::render_listing;
//! use gadi_site::types::{DatasetIndex, IndexedLaw, LastModified};
//!
//! let index = DatasetIndex::new(vec![IndexedLaw::new("gg", "GG", "Grundgesetz")]);
//! let html = render_listing(&index, &LastModified::new("Montag, den 1. Januar 2024, 00:00:00 (CET)"));
//! assert!(html.contains("<a href=\"laws/gg.json\">GG (Grundgesetz)</a>"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and build settings
//! - [`types`]: Law entries, dataset index, timestamp
//! - [`error`]: Error types and Result alias
//! - [`timestamp`]: German "last modified" formatting
//! - [`dataset`]: Index-file and directory-scan providers
//! - [`page`]: HTML rendering and atomic writing
//! - [`site`]: Build service
//! - [`inspect`]: Link listing and dataset checks
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod inspect;
pub mod page;
pub mod site;
pub mod timestamp;
pub mod types;

pub use site::{build_site, render_page};

pub use config::{BuildConfig, SourceKind};
pub use error::{Result, SiteError};
pub use types::{DatasetIndex, IndexedLaw, LastModified, ListingEntry, ScannedLaw};
