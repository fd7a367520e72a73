use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session_logger;
use crate::errors::AppResult;
use crate::utils::clock::SystemClock;

/// Handle `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut store = open_store(cfg);

    match cmd {
        Commands::In => {
            session_logger::clock_in(&mut store, &SystemClock, cfg.header_policy)?;
        }
        Commands::Out => {
            session_logger::clock_out(&mut store, &SystemClock, cfg.header_policy)?;
        }
        _ => {}
    }

    Ok(())
}
