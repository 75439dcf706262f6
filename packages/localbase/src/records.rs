//! Record-level mutation of a store's array.
//!
//! Each operation takes the per-path lock, reads the full array, mutates it
//! in memory, and writes the full array back. None of these auto-create the
//! store; the file must already hold a valid record array.

use std::path::Path;

use crate::error::Error;
use crate::lock;
use crate::record::{Fields, Record};
use crate::store::{read_records, write_records};

/// Append a new record built from `fields` and return its generated id.
///
/// Any caller-supplied `id` key in `fields` is discarded in favor of the
/// generated one.
pub fn push(path: impl AsRef<Path>, fields: Fields) -> Result<String, Error> {
    let path = path.as_ref();
    let guard = lock::for_path(path);
    let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut records = read_records(path)?;
    let record = Record::new(fields);
    let id = record.id.clone();
    records.push(record);
    write_records(path, &records)?;

    Ok(id)
}

/// Replace the record with the given `id` wholesale by `fields`.
///
/// The matching record's fields are discarded entirely; only its id
/// survives. When no record matches, the store is left untouched and
/// [`Error::RecordNotFound`] is returned.
pub fn replace(path: impl AsRef<Path>, id: &str, fields: Fields) -> Result<(), Error> {
    let path = path.as_ref();
    let guard = lock::for_path(path);
    let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut records = read_records(path)?;
    let Some(index) = records.iter().position(|record| record.id == id) else {
        return Err(Error::RecordNotFound {
            path: path.to_path_buf(),
            id: id.to_string(),
        });
    };
    records[index] = Record::with_id(id, fields);
    write_records(path, &records)
}

/// Shallow-merge `fields` onto the record with the given `id`.
///
/// Keys present in `fields` win; keys absent from it are retained. Same
/// not-found handling as [`replace`].
pub fn append(path: impl AsRef<Path>, id: &str, fields: Fields) -> Result<(), Error> {
    let path = path.as_ref();
    let guard = lock::for_path(path);
    let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut records = read_records(path)?;
    let Some(index) = records.iter().position(|record| record.id == id) else {
        return Err(Error::RecordNotFound {
            path: path.to_path_buf(),
            id: id.to_string(),
        });
    };
    records[index].merge(fields);
    write_records(path, &records)
}

/// Remove every record whose id equals `id`, returning the removed count.
///
/// Ids are nominally unique but duplicates from manual construction are
/// possible, so all matches go. Zero matches is not an error.
pub fn remove_record(path: impl AsRef<Path>, id: &str) -> Result<usize, Error> {
    let path = path.as_ref();
    let guard = lock::for_path(path);
    let _held = guard.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut records = read_records(path)?;
    let before = records.len();
    records.retain(|record| record.id != id);
    let removed = before - records.len();
    write_records(path, &records)?;

    Ok(removed)
}
