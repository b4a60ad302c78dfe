//! Faultline CLI
//!
//! Normalizes JSON error and request payloads into error reports and prints
//! them as JSON. Delivery to a backend is left to whatever consumes stdout.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod commands;

use cli::{Cli, Commands, ConfigCommands};
use faultline_core::modules::config::load_config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;

    let filter = EnvFilter::try_new(cli.log_level.as_deref().unwrap_or(&config.log_level))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(mode) = cli.report_mode.as_deref() {
        commands::override_report_mode(&mut config, mode);
    }

    match cli.command {
        Commands::Populate { file, service, service_version } => {
            commands::populate_report(&config, file.as_deref(), service, service_version)
        }
        Commands::Extract { file } => commands::extract_request(file.as_deref()),
        Commands::Report { error, request } => {
            commands::build_report(&config, &error, request.as_deref())
        }
        Commands::Config(ConfigCommands::Show { json }) => commands::show_config(&config, json),
    }
}
