//! confwarden - Annotate deployment configuration and verify placeholders were replaced
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use confwarden::cli::{self, Cli, Commands};
use confwarden::config::Config;
use confwarden::error::{ConfigError, ConfwardenError};
use confwarden::exit_codes;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32, ConfwardenError> {
    if let Some(directory) = &cli.directory {
        env::set_current_dir(directory).map_err(|source| ConfigError::WorkingDirectory {
            path: directory.display().to_string(),
            source,
        })?;
    }

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init(args) => cli::commands::init::execute(args),
        Commands::Annotate(args) => {
            cli::commands::annotate::execute(args, Config::load_or_default(config_path)?)
        }
        Commands::Verify(args) => {
            cli::commands::verify::execute(args, Config::load_or_default(config_path)?)
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
