//! Verify command - Report configuration values that were never changed

use colored::Colorize;
use std::fs;
use tracing::info;

use super::{VerifyArgs, VerifyFormat};
use crate::cli::output::{JsonOutput, ReportRenderer, TerminalOutput};
use crate::config::Config;
use crate::error::{ConfigError, ConfwardenError};
use crate::exit_codes;
use crate::verify::Verifier;

pub fn execute(args: VerifyArgs, config: Config) -> Result<i32, ConfwardenError> {
    let verifier = Verifier::from_config(&config.verify);
    let report = verifier.run(&config.verify);

    let renderer: Box<dyn ReportRenderer> = match args.format {
        VerifyFormat::Terminal => Box::new(TerminalOutput::new()),
        VerifyFormat::Json => Box::new(JsonOutput::new()),
    };
    let rendered = renderer.render_report(&report)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &rendered).map_err(|source| ConfigError::FileWrite {
                path: path.display().to_string(),
                source,
            })?;
            info!(path = %path.display(), "Report written");
            eprintln!(
                "{} Report written to {}",
                "Success:".green().bold(),
                path.display().to_string().cyan()
            );
        }
        None => print!("{}", rendered),
    }

    if report.is_clean() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::ISSUES_FOUND)
    }
}
