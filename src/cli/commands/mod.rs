pub mod clock;
pub mod config;
pub mod init;
pub mod list;
pub mod run;
pub mod status;

use crate::config::Config;
use crate::store::FileStore;

/// File-backed store for the configured log path.
pub(crate) fn open_store(cfg: &Config) -> FileStore {
    FileStore::new(cfg.log_path())
}
