use super::open_store;
use crate::config::Config;
use crate::core::session_logger::{self, HeaderStatus};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (left alone if present)
///  - the log file header
pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();
    if Config::init_file()? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already present: {}", path.display()));
    }

    let mut store = open_store(cfg);
    if session_logger::ensure_header(&mut store, cfg.header_policy)? == HeaderStatus::Valid {
        info(format!("Log file: {}", cfg.log_path().display()));
    }

    Ok(())
}
