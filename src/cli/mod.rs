//! # CLI Module
//!
//! This module defines the command-line interface for confwarden using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `annotate` | Insert "CHANGE THIS TO" comments above sensitive settings |
//! | `verify` | Report placeholder values that were never changed |
//! | `init` | Write a default configuration file |
//!
//! ## Submodules
//!
//! - [`commands`] - Command implementations
//! - [`exit_codes`] - Standardized exit codes
//! - [`output`] - Verification report formatters (Terminal, JSON)
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `-C, --directory <DIR>` - Working directory (defaults to current directory)
//!
//! ## Examples
//!
//! ```bash
//! # Annotate every file listed in the manifest
//! confwarden annotate
//!
//! # Preview annotations for two files without touching them
//! confwarden annotate --dry-run .env nginx/prod.conf
//!
//! # Fail the deployment pipeline if placeholders remain
//! confwarden verify || exit 1
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{AnnotateArgs, InitArgs, VerifyArgs};

/// confwarden - Annotate deployment configuration and verify placeholders were replaced
#[derive(Parser, Debug)]
#[command(name = "confwarden")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Insert instructional comments above sensitive settings
    Annotate(AnnotateArgs),

    /// Check configuration files for unchanged default values
    Verify(VerifyArgs),

    /// Write a default configuration file
    Init(InitArgs),
}
