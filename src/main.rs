mod config;
mod console;
mod constants;
mod core_cli;
mod core_client;
mod core_command;
mod helpers;
mod session;

use crate::config::Config;
use crate::core_cli::Cli;
use anyhow::Result;
use clap::Parser;
use colored::*;
use env_logger::{Builder, Env};
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Initialize the logger with a custom format and colors
    let default_filter = if args.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let timestamp = buf.timestamp().to_string();
            let level = match record.level() {
                log::Level::Error => record.level().to_string().red(),
                log::Level::Warn => record.level().to_string().yellow(),
                log::Level::Info => record.level().to_string().green(),
                log::Level::Debug => record.level().to_string().blue(),
                log::Level::Trace => record.level().to_string().white(),
            };
            writeln!(buf, "[{}] [{}] {}", timestamp, level, record.args())
        })
        .init();

    // Determine the default config path based on the OS
    let default_config_path = if cfg!(target_os = "windows") {
        "C:\\ProgramData\\rouilleftp\\rouilleftp.conf"
    } else {
        "/etc/rouilleftp.conf"
    };

    let config_path = if args.config.is_empty() {
        default_config_path
    } else {
        args.config.as_str()
    };
    let config = Config::load_or_default(config_path)?;
    crate::helpers::log_config(&config);

    // Run the interactive console
    console::run(Arc::new(config)).await
}
