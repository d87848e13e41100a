//! CLI commands module

pub mod annotate;
pub mod init;
pub mod verify;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments for the annotate command
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Files to annotate (defaults to the manifest plus supplementary files)
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Manifest listing files to annotate, one per line
    #[arg(short, long, value_name = "FILE", env = "CONFWARDEN_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directory receiving backups of the original files
    #[arg(short, long, value_name = "DIR", env = "CONFWARDEN_BACKUP_DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Show the comments that would be inserted without modifying files
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: VerifyFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VerifyFormat {
    Terminal,
    Json,
}
