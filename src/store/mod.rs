//! Persistence seam for the log file.
//!
//! The session logger only talks to a [`LogStore`]; the CSV layout lives in
//! [`codec`]. The file-backed store is used by the binary, the in-memory one
//! by tests.

pub mod codec;
pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;

pub trait LogStore {
    /// Whether the backing log exists at all.
    fn exists(&self) -> AppResult<bool>;

    /// Full contents of the log. A missing log is an `io::ErrorKind::NotFound` error.
    fn read(&self) -> AppResult<Vec<u8>>;

    /// Append encoded rows, creating the log if needed.
    fn append(&mut self, bytes: &[u8]) -> AppResult<()>;

    /// Replace the whole log with `bytes`.
    fn replace(&mut self, bytes: &[u8]) -> AppResult<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}
