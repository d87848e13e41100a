//! Verification of leftover placeholder values
//!
//! Three independent, read-only checks:
//!
//! - [`Verifier::check_env_file`] - critical `KEY=value` pairs holding a
//!   default or empty value
//! - [`Verifier::check_server_config`] - default domains in `server_name`
//! - [`Verifier::check_compose_file`] - the shipped database password, and
//!   `localhost` in production files
//!
//! A missing file is reported as a single issue instead of an error.

pub mod defaults;
mod results;

pub use results::{FileReport, FileStatus, Issue, IssueKind, TargetGroup, VerificationReport};

use std::fs;
use std::path::Path;
use tracing::{debug, info, span, Level};

use crate::config::VerifyConfig;
use defaults::{
    CRITICAL_KEYS, DEFAULT_COMPOSE_PASSWORD, DEFAULT_DOMAINS, DEFAULT_VALUES, EMPTY_LITERALS,
};

/// Checks configuration files for unchanged defaults
#[derive(Debug, Clone)]
pub struct Verifier {
    default_values: Vec<String>,
    critical_keys: Vec<String>,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Verifier {
    /// Create a verifier with the built-in default values and critical keys
    pub fn new() -> Self {
        Self {
            default_values: DEFAULT_VALUES.iter().map(|s| s.to_string()).collect(),
            critical_keys: CRITICAL_KEYS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add extra placeholder values, checked after the built-in ones
    pub fn with_default_values(mut self, values: impl IntoIterator<Item = String>) -> Self {
        self.default_values.extend(values);
        self
    }

    /// Add extra critical keys
    pub fn with_critical_keys(mut self, keys: impl IntoIterator<Item = String>) -> Self {
        self.critical_keys.extend(keys);
        self
    }

    /// Create a verifier extended with the extra values and keys of `config`
    pub fn from_config(config: &VerifyConfig) -> Self {
        Self::new()
            .with_default_values(config.extra_default_values.iter().cloned())
            .with_critical_keys(config.extra_critical_keys.iter().cloned())
    }

    /// Check whether `key` must not keep a default value
    pub fn is_critical(&self, key: &str) -> bool {
        self.critical_keys.iter().any(|k| k == key)
    }

    /// Check an environment file for critical keys with default or empty values
    pub fn check_env_file(&self, path: &Path) -> Vec<Issue> {
        match read(path) {
            Ok(content) => self.check_env_content(&path.display().to_string(), &content),
            Err(issue) => vec![issue],
        }
    }

    /// Check environment-file content read from `source`.
    ///
    /// A line yields at most one default-value issue (first listed default
    /// wins) and, independently, at most one empty-value issue.
    pub fn check_env_content(&self, source: &str, content: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.trim();
            if line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if !self.is_critical(key) {
                continue;
            }

            if let Some(default) = self
                .default_values
                .iter()
                .find(|d| value.contains(d.as_str()))
            {
                debug!(source, line_number, key, default = %default, "Default value found");
                issues.push(
                    Issue::new(
                        source,
                        IssueKind::DefaultValue,
                        format!("{key} still has default value"),
                    )
                    .at_line(line_number),
                );
            }

            if value.is_empty() || EMPTY_LITERALS.contains(&value) {
                issues.push(
                    Issue::new(source, IssueKind::EmptyValue, format!("{key} is empty"))
                        .at_line(line_number),
                );
            }
        }

        issues
    }

    /// Check a server configuration for default domains in `server_name`
    pub fn check_server_config(&self, path: &Path) -> Vec<Issue> {
        match read(path) {
            Ok(content) => check_server_content(&path.display().to_string(), &content),
            Err(issue) => vec![issue],
        }
    }

    /// Check a docker-compose file for the shipped password and, in
    /// production files, for `localhost`
    pub fn check_compose_file(&self, path: &Path) -> Vec<Issue> {
        match read(path) {
            Ok(content) => check_compose_content(&path.display().to_string(), &content),
            Err(issue) => vec![issue],
        }
    }

    /// Verify every configured target, group by group.
    ///
    /// Files that do not exist are recorded as not found and are not counted
    /// as issues.
    pub fn run(&self, targets: &VerifyConfig) -> VerificationReport {
        let mut report = VerificationReport::new();

        for group in TargetGroup::ALL {
            let span = span!(Level::INFO, "group", group = group.title());
            let _guard = span.enter();

            let paths = match group {
                TargetGroup::Env => &targets.env_files,
                TargetGroup::Server => &targets.server_configs,
                TargetGroup::Compose => &targets.compose_files,
            };

            for target in paths {
                let path = Path::new(target);
                if !path.exists() {
                    debug!(file = %target, "Not found");
                    report.add_file(FileReport::not_found(target, group));
                    continue;
                }

                let issues = match group {
                    TargetGroup::Env => self.check_env_file(path),
                    TargetGroup::Server => self.check_server_config(path),
                    TargetGroup::Compose => self.check_compose_file(path),
                };
                debug!(file = %target, issues = issues.len(), "Checked");
                report.add_file(FileReport::checked(target, group, issues));
            }
        }

        info!(
            files = report.files().len(),
            missing = report.missing_count(),
            issues = report.total_issues(),
            "Verification complete"
        );

        report
    }
}

/// Whole-file scan; one issue per default domain regardless of how often it occurs
pub fn check_server_content(source: &str, content: &str) -> Vec<Issue> {
    DEFAULT_DOMAINS
        .iter()
        .filter(|domain| {
            content.contains(&format!("server_name {domain}"))
                || content.contains(&format!("server_name *.{domain}"))
        })
        .map(|domain| {
            Issue::new(
                source,
                IssueKind::DefaultDomain,
                format!("Default domain '{domain}' found in server_name directive"),
            )
        })
        .collect()
}

/// Whole-file scan of compose content; production is signalled by `prod` in the path
pub fn check_compose_content(source: &str, content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if content.contains(DEFAULT_COMPOSE_PASSWORD) {
        issues.push(Issue::new(
            source,
            IssueKind::DefaultPassword,
            format!("Default PostgreSQL password '{DEFAULT_COMPOSE_PASSWORD}' found"),
        ));
    }

    if source.contains("prod") && content.contains("localhost") {
        issues.push(Issue::new(
            source,
            IssueKind::LocalhostInProduction,
            "localhost URLs found in production configuration",
        ));
    }

    issues
}

fn read(path: &Path) -> Result<String, Issue> {
    let source = path.display().to_string();

    if !path.exists() {
        return Err(Issue::new(
            &source,
            IssueKind::FileNotFound,
            format!("File not found: {source}"),
        ));
    }

    fs::read_to_string(path).map_err(|e| {
        Issue::new(
            &source,
            IssueKind::Unreadable,
            format!("Cannot read {source}: {e}"),
        )
    })
}
