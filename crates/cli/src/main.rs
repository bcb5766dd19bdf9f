use clap::{Parser, Subcommand};
use ferrous_ipset_domain::CliOverrides;
use std::path::PathBuf;
use tracing::{error, info};

mod bootstrap;
mod commands;

#[derive(Parser)]
#[command(name = "ferrous-ipset")]
#[command(version)]
#[command(about = "Ferrous IPSet - push resolved DNS answers into kernel address sets")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also match rules through CNAME targets
    #[arg(long, global = true)]
    check_cname: Option<bool>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile the configured rules and report how many are active
    Check,

    /// Classify a wire-format DNS response and inject its addresses
    Apply {
        /// DNS response message (wire format)
        #[arg(short = 'r', long, value_name = "FILE")]
        response: PathBuf,

        /// DNS query message (wire format); defaults to the response's question section
        #[arg(short = 'q', long, value_name = "FILE")]
        query: Option<PathBuf>,

        /// Log the entries instead of writing them to the kernel
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        check_cname: cli.check_cname,
    };

    let loaded = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&loaded.config.logging)?;

    info!("Starting Ferrous IPSet v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Command::Check => commands::check::run(&loaded),
        Command::Apply {
            response,
            query,
            dry_run,
        } => commands::apply::run(&loaded, &response, query.as_deref(), dry_run),
    };

    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
