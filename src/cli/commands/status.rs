use super::open_store;
use crate::config::Config;
use crate::core::session_logger;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::duration::format_worked;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg);

    match session_logger::open_session(&store)? {
        Some(open) => {
            let elapsed = SystemClock.now() - open.timestamp();
            info(format!(
                "Clocked in since {} {} ({} elapsed)",
                open.day_str(),
                open.time_str(),
                format_worked(elapsed)
            ));
        }
        None => info("Not clocked in."),
    }

    Ok(())
}
