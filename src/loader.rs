//! Archive loading from storage
//!
//! Reads whole archive files and hands them to the archive decoder. This is
//! the only layer that touches the filesystem or emits log events.

use crate::common::Bi5Result;
use crate::decoder::{decode_archive, ArchiveData};
use crate::path::ArchivePath;
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::{debug, warn};

/// Read and decode the archive at `path`.
///
/// A zero-length file is a valid hour with no quotes.
///
/// # Errors
/// - `Bi5Error::Io` if the file cannot be read
/// - `Bi5Error::DecompressionFailed` if the contents are not a valid LZMA stream
pub fn read_archive(
    path: impl AsRef<Path>,
    hour_start: DateTime<Utc>,
    price_scale: f64,
) -> Bi5Result<ArchiveData> {
    let path = path.as_ref();
    let compressed = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = compressed.len(), "read archive");

    let data = decode_archive(&compressed, hour_start, price_scale)?;
    if !data.is_aligned() {
        warn!(
            path = %path.display(),
            raw_size = data.raw_size,
            ticks = data.ticks.len(),
            "archive has trailing bytes after the last whole record"
        );
    }
    debug!(
        path = %path.display(),
        raw_size = data.raw_size,
        ticks = data.ticks.len(),
        "decoded archive"
    );
    Ok(data)
}

/// Read and decode the archive addressed by `archive` under `root`.
///
/// The hour start and price scale are taken from the archive address.
pub fn read_archive_at(root: impl AsRef<Path>, archive: &ArchivePath) -> Bi5Result<ArchiveData> {
    let path = root.as_ref().join(archive.relative_path());
    read_archive(path, archive.hour_start, archive.point_value().scale())
}
