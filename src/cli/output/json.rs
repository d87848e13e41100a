//! JSON output formatting

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ReportRenderer;
use crate::error::ConfwardenError;
use crate::verify::{FileReport, VerificationReport};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ReportOutput<'a> {
    version: &'static str,
    generated_at: DateTime<Utc>,
    clean: bool,
    total_issues: usize,
    missing_files: usize,
    files: &'a [FileReport],
}

impl ReportRenderer for JsonOutput {
    fn render_report(&self, report: &VerificationReport) -> Result<String, ConfwardenError> {
        let output = ReportOutput {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: Utc::now(),
            clean: report.is_clean(),
            total_issues: report.total_issues(),
            missing_files: report.missing_count(),
            files: report.files(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
