use super::LogStore;
use crate::errors::AppResult;
use std::io;

/// Log kept in memory. `None` behaves like a file that does not exist.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    contents: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    /// Current contents as text, or `None` if nothing was ever written.
    pub fn text(&self) -> Option<String> {
        self.contents
            .as_ref()
            .map(|c| String::from_utf8_lossy(c).into_owned())
    }
}

impl LogStore for MemoryStore {
    fn exists(&self) -> AppResult<bool> {
        Ok(self.contents.is_some())
    }

    fn read(&self) -> AppResult<Vec<u8>> {
        self.contents.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "in-memory log does not exist").into()
        })
    }

    fn append(&mut self, bytes: &[u8]) -> AppResult<()> {
        self.contents
            .get_or_insert_with(Vec::new)
            .extend_from_slice(bytes);
        Ok(())
    }

    fn replace(&mut self, bytes: &[u8]) -> AppResult<()> {
        self.contents = Some(bytes.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
