use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "faultline",
    about = "Faultline - normalize error and request payloads into reports",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, env = "FAULTLINE_CONFIG", help = "Path to JSON config")]
    pub config: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        env = "RUST_LOG",
        help = "Log filter (defaults to the configured level)"
    )]
    pub log_level: Option<String>,

    #[arg(
        long,
        global = true,
        env = "FAULTLINE_REPORT_MODE",
        help = "Override the report mode (production, always, never)"
    )]
    pub report_mode: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Normalize an error payload into a report")]
    Populate {
        #[arg(short, long, help = "JSON payload file (stdin when omitted)")]
        file: Option<PathBuf>,

        #[arg(long, help = "Override the service name")]
        service: Option<String>,

        #[arg(long = "service-version", help = "Override the service version")]
        service_version: Option<String>,
    },

    #[command(about = "Extract request information from a request payload")]
    Extract {
        #[arg(short, long, help = "JSON payload file (stdin when omitted)")]
        file: Option<PathBuf>,
    },

    #[command(about = "Build a report from an error payload and a request payload")]
    Report {
        #[arg(long, help = "JSON error payload file")]
        error: PathBuf,

        #[arg(long, help = "JSON request payload file")]
        request: Option<PathBuf>,
    },

    #[command(subcommand, about = "Inspect configuration")]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show the resolved configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}
