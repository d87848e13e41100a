//! Init command - Write a default configuration file

use colored::Colorize;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::config::loader::CONFIG_FILENAME;
use crate::config::Config;
use crate::error::{ConfigError, ConfwardenError};
use crate::exit_codes;

pub fn execute(args: InitArgs) -> Result<i32, ConfwardenError> {
    let config_path = Path::new(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        eprintln!(
            "{} {}",
            "Error:".red().bold(),
            ConfigError::AlreadyExists {
                path: CONFIG_FILENAME.to_string()
            }
        );
        return Ok(exit_codes::INVALID_ARGS);
    }

    let config_content = Config::default().to_toml()?;
    fs::write(config_path, &config_content).map_err(|source| ConfigError::FileWrite {
        path: CONFIG_FILENAME.to_string(),
        source,
    })?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        CONFIG_FILENAME.cyan()
    );

    println!("\nNext steps:");
    println!("  1. List your deployment files under {}", "[verify]".cyan());
    println!("  2. Run {} to insert instructions", "confwarden annotate".cyan());
    println!("  3. Run {} before deploying", "confwarden verify".cyan());

    Ok(exit_codes::SUCCESS)
}
