//! # localbase
//!
//! File-backed JSON record stores.
//!
//! A store is a single file holding a pretty-printed JSON array of records:
//! flat objects with string-valued fields plus a generated unique `id`.
//! Every operation is stateless and synchronous; each call performs one
//! read-modify-write cycle against one file and returns an explicit
//! `Result`.
//!
//! Within a process, cycles for the same path are serialized by a per-path
//! lock, and every write replaces the file atomically. Nothing coordinates
//! access across processes.
//!
//! ## Example
//!
//! ```rust
//! use localbase::{create, open, push, append, Fields};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let store = dir.path().join("users.json");
//!
//! create(&store).unwrap();
//! let id = push(&store, Fields::from([("name".to_string(), "Alice".to_string())])).unwrap();
//! append(&store, &id, Fields::from([("role".to_string(), "admin".to_string())])).unwrap();
//!
//! let records = open(&store).unwrap();
//! assert_eq!(records[0].id, id);
//! assert_eq!(records[0].fields["role"], "admin");
//! ```

pub mod dir;
pub mod error;
mod lock;
pub mod record;
pub mod records;
pub mod store;

pub use dir::{create_dir, remove_path};
pub use error::Error;
pub use record::{Fields, Record};
pub use records::{append, push, remove_record, replace};
pub use store::{create, open};
