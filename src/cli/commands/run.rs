use super::open_store;
use crate::config::Config;
use crate::core::session_logger;
use crate::errors::AppResult;
use crate::utils::clock::SystemClock;

/// Handle the default invocation (and `run`).
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg);
    session_logger::run_session(&mut store, &SystemClock, cfg.header_policy)?;
    Ok(())
}
