//! Whole-file JSON array persistence.
//!
//! Every operation in this crate shares the same cycle: read the full array
//! at a path, mutate it in memory, serialize the full array back. This
//! module holds that cycle plus store creation and [`open`].

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::value::Value as JsonValue;

use crate::error::Error;
use crate::lock;
use crate::record::Record;

/// Read and parse the full record array at `path`.
pub(crate) fn read_records(path: &Path) -> Result<Vec<Record>, Error> {
    log::debug!("Reading store {}...", path.display());

    let raw = fs::read_to_string(path).map_err(|source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let value: JsonValue = serde_json::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let JsonValue::Array(items) = value else {
        return Err(Error::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).map_err(|source| Error::InvalidRecord {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

/// Serialize `records` and atomically replace the file at `path`.
///
/// The array is written pretty-printed to a temporary file in the target's
/// directory and renamed over it, so a reader never observes a partial
/// write.
pub(crate) fn write_records(path: &Path, records: &[Record]) -> Result<(), Error> {
    log::debug!(
        "Writing store {} ({} records)...",
        path.display(),
        records.len()
    );

    let body = serde_json::to_string_pretty(records).map_err(|source| Error::WriteFailed {
        path: path.to_path_buf(),
        source: std::io::Error::other(source),
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp =
        tempfile::NamedTempFile::new_in(dir).map_err(|source| Error::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.write_all(body.as_bytes())
        .map_err(|source| Error::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
    tmp.persist(path).map_err(|persist| Error::WriteFailed {
        path: path.to_path_buf(),
        source: persist.error,
    })?;

    Ok(())
}

/// Create (or truncate) the store at `path` as an empty array.
///
/// Overwrites any existing content unconditionally.
pub fn create(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let guard = lock::for_path(path);
    let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    write_records(path, &[])
}

/// Read all records from the store at `path`, auto-creating it when absent.
///
/// A store that cannot be read or parsed is recreated as an empty array and
/// read again; if the second read also fails, [`Error::StorageUnavailable`]
/// is returned. A store whose content is valid JSON but not an array of
/// records is reported as-is and never overwritten.
pub fn open(path: impl AsRef<Path>) -> Result<Vec<Record>, Error> {
    let path = path.as_ref();
    let guard = lock::for_path(path);
    let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    match read_records(path) {
        Ok(records) => Ok(records),
        Err(first @ (Error::Unreadable { .. } | Error::Parse { .. })) => {
            log::warn!(
                "Store {} unreadable ({}); recreating it empty.",
                path.display(),
                first
            );
            write_records(path, &[]).map_err(|cause| Error::StorageUnavailable {
                path: path.to_path_buf(),
                source: Box::new(cause),
            })?;
            read_records(path).map_err(|cause| Error::StorageUnavailable {
                path: path.to_path_buf(),
                source: Box::new(cause),
            })
        }
        Err(other) => Err(other),
    }
}
