//! German "last modified" formatting.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Locale, TimeZone, Utc};

use crate::config::{TIMESTAMP_FORMAT, TIMESTAMP_ZONE};
use crate::error::{Result, SiteError};
use crate::types::LastModified;

/// Format an instant for the page, in German and in the Berlin zone.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use gadi_site::timestamp::format_last_modified;
///
/// let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
/// assert_eq!(
///     format_last_modified(&instant).as_str(),
///     "Montag, den 1. Januar 2024, 00:00:00 (CET)"
/// );
/// ```
pub fn format_last_modified<Tz: TimeZone>(instant: &DateTime<Tz>) -> LastModified {
    let local = instant.with_timezone(&TIMESTAMP_ZONE);
    LastModified::new(
        local
            .format_localized(TIMESTAMP_FORMAT, Locale::de_DE)
            .to_string(),
    )
}

/// Read the creation time of a dataset file.
///
/// Falls back to the modification time on filesystems that do not record
/// a birth time.
pub fn file_birth_time(path: &Path) -> Result<DateTime<Utc>> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SiteError::MissingDataset {
            path: path.to_path_buf(),
        },
        _ => SiteError::Io(e),
    })?;

    let time: SystemTime = match metadata.created() {
        Ok(created) => created,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "No birth time, using mtime");
            metadata.modified()?
        }
    };

    Ok(DateTime::<Utc>::from(time))
}
