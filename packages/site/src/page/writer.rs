//! Atomic page writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OUTPUT_FILE_NAME;
use crate::error::Result;

/// Write the rendered page to `<output_dir>/index.html`.
///
/// Writes to a temp file, syncs to disk, then renames, so an interrupted
/// build never leaves a half-written page behind.
///
/// # Returns
/// Path to the written page
pub fn save_page(html: &str, output_dir: &Path) -> Result<PathBuf> {
    let output_file = output_dir.join(OUTPUT_FILE_NAME);
    let temp_file = output_dir.join(format!(".{OUTPUT_FILE_NAME}.tmp"));

    if let Err(e) = write_synced(&temp_file, html) {
        let _ = fs::remove_file(&temp_file);
        return Err(e.into());
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    Ok(output_file)
}

fn write_synced(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_page() {
        let dir = tempdir().unwrap();
        let path = save_page("<!DOCTYPE html>\n", dir.path()).unwrap();

        assert_eq!(path, dir.path().join("index.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<!DOCTYPE html>\n");
        assert!(!dir.path().join(".index.html.tmp").exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_save_page_removes_temp_file_on_write_error() {
        let dir = tempdir().unwrap();
        let temp_file = dir.path().join(".index.html.tmp");
        // Writes to /dev/full fail with ENOSPC after the open succeeds
        std::os::unix::fs::symlink("/dev/full", &temp_file).unwrap();

        assert!(save_page("<!DOCTYPE html>\n", dir.path()).is_err());
        assert!(fs::symlink_metadata(&temp_file).is_err());
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn test_save_page_replaces_existing() {
        let dir = tempdir().unwrap();
        save_page("old", dir.path()).unwrap();
        let path = save_page("new", dir.path()).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }
}
