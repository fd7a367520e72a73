use super::LogStore;
use crate::errors::AppResult;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Log stored in a plain file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl LogStore for FileStore {
    fn exists(&self) -> AppResult<bool> {
        Ok(self.path.try_exists()?)
    }

    fn read(&self) -> AppResult<Vec<u8>> {
        Ok(fs::read(&self.path)?)
    }

    fn append(&mut self, bytes: &[u8]) -> AppResult<()> {
        self.ensure_parent()?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(())
    }

    fn replace(&mut self, bytes: &[u8]) -> AppResult<()> {
        self.ensure_parent()?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
