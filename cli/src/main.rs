mod analyze_ui;
mod cli;
mod commands;
mod output;
mod terminal;

use clap::Parser;
use markpost::{config, error::Result};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = cli::Cli::parse();

    // Initialize logger; RUST_LOG overrides the per-command default
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.default_log_filter()),
    )
    .init();

    if args.version {
        println!("markpost {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    cli::handle_args(args, &cfg)
}
