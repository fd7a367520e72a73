use crate::config::HeaderPolicy;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeactions
#[derive(Parser)]
#[command(
    name = "timeactions",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out and keep worked time in a CSV log",
    long_about = "Clock in and out and keep worked time in a CSV log.\n\n\
                  Without a subcommand a full session is recorded: TIME_IN now \
                  and TIME_OUT two hours later."
)]
pub struct Cli {
    /// Override the log file path (default from config, or ./time.csv)
    #[arg(global = true, long = "file", value_name = "PATH")]
    pub file: Option<String>,

    /// Override what happens when the log header is not the expected one
    #[arg(global = true, long = "header-policy", value_enum)]
    pub header_policy: Option<HeaderPolicy>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a full session: TIME_IN now, TIME_OUT two hours later (default)
    Run,

    /// Record a TIME_IN with the current time
    In,

    /// Record a TIME_OUT with the current time, paired with today's TIME_IN
    Out,

    /// List the records of the log
    List {
        /// Only show records of this day (DD/MM/YYYY)
        #[arg(long = "day", value_name = "DD/MM/YYYY", conflicts_with = "today")]
        day: Option<String>,

        /// Only show today's records
        #[arg(long = "today")]
        today: bool,

        /// Print records as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show whether a session is currently open
    Status,

    /// Create the configuration file and the log header
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
