//! axicb-gen - Round-robin arbiter RTL generator
//!
//! CLI entry point: parses the channel count, renders the arbiter core
//! template, writes the result into the invocation directory.

use clap::Parser;
use eyre::{Context, Result};
use tracing::debug;

use axicb_gen::cli::Cli;
use axicb_gen::generate::{self, channel_params};

fn setup_logging(cli_log_level: Option<&str>) {
    // Determine log level with priority: CLI --log-level > RUST_LOG > default (INFO)
    let level = if let Some(s) = cli_log_level {
        match s.to_uppercase().as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level.as_deref());

    debug!(num = cli.num, templates = ?cli.templates, "main: starting generation");

    // Every generation failure is fatal: the Err return prints the error
    // chain and terminates the process with exit status 1.
    generate::run(&cli.templates, &channel_params(cli.num)).context("Failed to generate arbiter core")?;

    debug!("main: generation complete");
    Ok(())
}
