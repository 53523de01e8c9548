//! Build service that ties provider, page builder and writer together.

use std::path::PathBuf;

use crate::config::{validate_output_dir, BuildConfig, SourceKind};
use crate::dataset::{DatasetProvider, DirectoryScanProvider, FixedTimestamp, IndexFileProvider};
use crate::error::Result;
use crate::page::{render_listing, save_page};
use crate::types::LastModified;

/// A rendered, not yet written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub law_count: usize,
    pub last_modified: LastModified,
}

/// Outcome of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output_path: PathBuf,
    pub law_count: usize,
    pub last_modified: LastModified,
}

/// Load the dataset from `provider` and render the page.
///
/// Both the index and the timestamp are loaded before rendering, so a
/// missing dataset source fails the build without producing any output.
pub fn render_page<P: DatasetProvider>(provider: &P) -> Result<RenderedPage> {
    let index = provider.law_entries()?;
    let last_modified = provider.last_modified()?;
    let html = render_listing(&index, &last_modified);

    Ok(RenderedPage {
        html,
        law_count: index.len(),
        last_modified,
    })
}

/// Render the page for `config` without writing it.
pub fn render_for_config(config: &BuildConfig) -> Result<RenderedPage> {
    match config.source {
        SourceKind::Index => render_with(IndexFileProvider::new(&config.data_dir), config),
        SourceKind::Scan => render_with(DirectoryScanProvider::new(&config.data_dir), config),
    }
}

fn render_with<P: DatasetProvider>(provider: P, config: &BuildConfig) -> Result<RenderedPage> {
    match config.last_modified {
        Some(instant) => render_page(&FixedTimestamp::new(provider, instant)),
        None => render_page(&provider),
    }
}

/// Build the site: render the page and write `index.html` into the output directory.
pub fn build_site(config: &BuildConfig) -> Result<BuildReport> {
    validate_output_dir(&config.output_dir)?;

    tracing::debug!(
        data_dir = %config.data_dir.display(),
        source = ?config.source,
        "Building listing page"
    );

    let page = render_for_config(config)?;
    let output_path = save_page(&page.html, &config.output_dir)?;

    tracing::info!(
        path = %output_path.display(),
        laws = page.law_count,
        "Wrote listing page"
    );

    Ok(BuildReport {
        output_path,
        law_count: page.law_count,
        last_modified: page.last_modified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_timestamp;
    use crate::error::SiteError;
    use std::fs;
    use tempfile::tempdir;

    fn index_dataset(dir: &std::path::Path) {
        fs::create_dir_all(dir.join("laws")).unwrap();
        fs::write(
            dir.join("laws").join("__index.json"),
            r#"[{"slug": "gg", "abbreviation": "GG", "name": "Grundgesetz"}]"#,
        )
        .unwrap();
        fs::write(dir.join("all_laws.json"), "[]").unwrap();
    }

    #[test]
    fn test_build_site_writes_page() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        index_dataset(data.path());

        let config = BuildConfig::new(data.path()).with_output_dir(out.path());
        let report = build_site(&config).unwrap();

        assert_eq!(report.law_count, 1);
        assert_eq!(report.output_path, out.path().join("index.html"));
        let html = fs::read_to_string(&report.output_path).unwrap();
        assert!(html.contains("<a href=\"laws/gg.json\">GG (Grundgesetz)</a>"));
        assert!(html.contains(report.last_modified.as_str()));
    }

    #[test]
    fn test_build_site_with_fixed_timestamp() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        index_dataset(data.path());

        let config = BuildConfig::new(data.path())
            .with_output_dir(out.path())
            .with_last_modified(parse_timestamp("2024-01-01T00:00:00+01:00").unwrap());
        let report = build_site(&config).unwrap();

        assert_eq!(
            report.last_modified.as_str(),
            "Montag, den 1. Januar 2024, 00:00:00 (CET)"
        );
    }

    #[test]
    fn test_build_site_missing_primary_file_writes_nothing() {
        let data = tempdir().unwrap();
        let out = tempdir().unwrap();
        index_dataset(data.path());
        fs::remove_file(data.path().join("all_laws.json")).unwrap();

        let config = BuildConfig::new(data.path()).with_output_dir(out.path());
        let result = build_site(&config);

        assert!(matches!(result, Err(SiteError::MissingDataset { .. })));
        assert!(!out.path().join("index.html").exists());
    }

    #[test]
    fn test_build_site_rejects_missing_output_dir() {
        let data = tempdir().unwrap();
        index_dataset(data.path());

        let config = BuildConfig::new(data.path()).with_output_dir(data.path().join("public"));
        assert!(matches!(
            build_site(&config),
            Err(SiteError::InvalidOutputDir { .. })
        ));
    }

    #[test]
    fn test_render_for_config_scan() {
        let data = tempdir().unwrap();
        index_dataset(data.path());
        fs::write(data.path().join("laws").join("gg.json"), "{}").unwrap();

        let config = BuildConfig::new(data.path()).with_source(SourceKind::Scan);
        let page = render_for_config(&config).unwrap();

        assert_eq!(page.law_count, 1);
        assert!(page.html.contains("<a href=\"gadi/laws/gg.json\">gg</a>"));
    }
}
