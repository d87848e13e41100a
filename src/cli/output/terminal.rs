//! Terminal output formatting with colors

use colored::Colorize;

use super::ReportRenderer;
use crate::error::ConfwardenError;
use crate::verify::{FileReport, FileStatus, TargetGroup, VerificationReport};

pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }

    fn format_header(&self) -> String {
        format!(
            "{}\n{}\n",
            "🔍 Configuration Verification Report".bold(),
            "=".repeat(50)
        )
    }

    fn format_group(&self, report: &VerificationReport, group: TargetGroup) -> String {
        let icon = match group {
            TargetGroup::Env => "📄",
            TargetGroup::Server => "🌐",
            TargetGroup::Compose => "🐳",
        };

        let mut output = format!("\n{} Checking {}:\n", icon, group.title().bold());
        for file in report.files_in(group) {
            output.push_str(&self.format_file(file));
        }
        output
    }

    fn format_file(&self, file: &FileReport) -> String {
        match &file.status {
            FileStatus::NotFound => {
                format!("  {} {}: {}\n", "⚠️ ".yellow(), file.path, "Not found".yellow())
            }
            FileStatus::Checked { issues } if issues.is_empty() => {
                format!("  {} {}: {}\n", "✅".green(), file.path, "OK".green())
            }
            FileStatus::Checked { issues } => {
                let mut output = format!("  {} {}:\n", "❌".red(), file.path.red());
                for issue in issues {
                    output.push_str(&format!("     {} {}\n", "•".dimmed(), issue));
                }
                output
            }
        }
    }

    fn format_summary(&self, report: &VerificationReport) -> String {
        let mut output = format!("\n{}\n", "=".repeat(50));

        let total = report.total_issues();
        if total > 0 {
            output.push_str(&format!(
                "{}\n",
                format!("❌ Found {} configuration issues that need attention!", total)
                    .red()
                    .bold()
            ));
            output.push_str("\nNext steps:\n");
            output.push_str("1. Update the values flagged above\n");
            output.push_str("2. Follow the CHANGE THIS TO comments in each file\n");
            output.push_str("3. Run this verification again\n");
        } else {
            output.push_str(&format!(
                "{}\n",
                "✅ All configuration files look good!".green().bold()
            ));
            output.push_str("\nBefore deploying:\n");
            output.push_str("1. Double-check your domain and DNS settings\n");
            output.push_str("2. Make sure SSL certificates are in place\n");
            output.push_str("3. Test the deployment in a staging environment\n");
        }

        if report.missing_count() > 0 {
            output.push_str(&format!(
                "\n{} {} configured file(s) were not found\n",
                "Note:".dimmed(),
                report.missing_count()
            ));
        }

        output.push_str(&format!("\n📊 Total issues found: {}\n", total));
        output
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TerminalOutput {
    fn render_report(&self, report: &VerificationReport) -> Result<String, ConfwardenError> {
        let mut output = self.format_header();
        for group in TargetGroup::ALL {
            output.push_str(&self.format_group(report, group));
        }
        output.push_str(&self.format_summary(report));
        Ok(output)
    }
}
