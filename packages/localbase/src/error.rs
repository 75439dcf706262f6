//! Error types for store operations.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by store operations.
///
/// Every operation reports failure through these variants instead of
/// logging and swallowing it; none of them abort the process.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("could not read store at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in store at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("store at {path} does not contain a JSON array")]
    NotAnArray { path: PathBuf },

    #[error("store at {path} holds an element that is not a record: {source}")]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no record with id {id} in store at {path}")]
    RecordNotFound { path: PathBuf, id: String },

    #[error("could not remove {path}: {source}")]
    RemovalFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A store failed to come back after being recreated empty.
    #[error("store at {path} unavailable after recreation: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn record_not_found_display() {
        let e = Error::RecordNotFound {
            path: PathBuf::from("users.json"),
            id: "abc-123".to_string(),
        };
        let display = format!("{}", e);
        assert!(display.contains("users.json"));
        assert!(display.contains("abc-123"));
    }

    #[test]
    fn unreadable_source() {
        let e = Error::Unreadable {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn storage_unavailable_wraps_cause() {
        let e = Error::StorageUnavailable {
            path: PathBuf::from("users.json"),
            source: Box::new(Error::Unreadable {
                path: PathBuf::from("users.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }),
        };
        let display = format!("{}", e);
        assert!(display.contains("unavailable"));
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn not_an_array_display() {
        let e = Error::NotAnArray {
            path: PathBuf::from("config.json"),
        };
        assert!(format!("{}", e).contains("JSON array"));
        assert!(StdError::source(&e).is_none());
    }
}
