//! In-process per-path mutual exclusion.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use lazy_static::lazy_static;

lazy_static! {
    static ref PATH_LOCKS: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>> = Mutex::new(HashMap::new());
}

/// Returns the mutex guarding read-modify-write cycles for `path`.
///
/// Locks are keyed by the path as given; two spellings that alias the same
/// file are not unified, and nothing protects against other processes.
pub(crate) fn for_path(path: &Path) -> Arc<Mutex<()>> {
    let mut table = PATH_LOCKS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    table.entry(path.to_path_buf()).or_default().clone()
}
