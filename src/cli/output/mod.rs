//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::ConfwardenError;
use crate::verify::VerificationReport;

/// Trait for rendering verification reports
pub trait ReportRenderer {
    fn render_report(&self, report: &VerificationReport) -> Result<String, ConfwardenError>;
}
