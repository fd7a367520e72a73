//! timeactions library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Run) => cli::commands::run::handle(cfg),
        Some(cmd @ (Commands::In | Commands::Out)) => cli::commands::clock::handle(cmd, cfg),
        Some(cmd @ Commands::List { .. }) => cli::commands::list::handle(cmd, cfg),
        Some(Commands::Status) => cli::commands::status::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(file) = &cli.file {
        cfg.log_file = file.clone();
    }
    if let Some(policy) = cli.header_policy {
        cfg.header_policy = policy;
    }

    dispatch(&cli, &cfg)
}
