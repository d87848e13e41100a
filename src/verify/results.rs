//! # Verification Results Structures
//!
//! This module defines the data structures for representing verification
//! issues and per-file results.
//!
//! ## Overview
//!
//! - [`IssueKind`] - What kind of leftover placeholder was detected
//! - [`Issue`] - A single detected problem, optionally tied to a line
//! - [`FileReport`] - Outcome for one checked (or missing) file
//! - [`VerificationReport`] - All file outcomes of a verification run
//!
//! ## Examples
//!
//! ```rust
//! use confwarden::verify::{Issue, IssueKind};
//!
//! let issue = Issue::new(".env", IssueKind::DefaultValue, "JWT_SECRET still has default value")
//!     .at_line(3);
//! assert_eq!(issue.to_string(), "Line 3: JWT_SECRET still has default value");
//! ```

use serde::Serialize;
use std::fmt;

/// Kind of problem found in a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// A critical key still holds a known placeholder
    DefaultValue,
    /// A critical key is empty
    EmptyValue,
    /// A `server_name` directive still uses a default domain
    DefaultDomain,
    /// The shipped database password is still present
    DefaultPassword,
    /// A production file still references `localhost`
    LocalhostInProduction,
    /// The file could not be found
    FileNotFound,
    /// The file exists but could not be read as text
    Unreadable,
}

/// A single issue found by the verifier.
///
/// Issues are informational only; they are printed and counted but never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// File the issue was found in
    pub source_file: String,

    /// 1-based line number, for line-oriented checks
    pub line_number: Option<usize>,

    pub kind: IssueKind,

    /// Human-readable description, without the line prefix
    pub description: String,
}

impl Issue {
    /// Create a new issue
    pub fn new(
        source_file: impl Into<String>,
        kind: IssueKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            line_number: None,
            kind,
            description: description.into(),
        }
    }

    /// Set the line number
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line_number {
            Some(line) => write!(f, "Line {}: {}", line, self.description),
            None => f.write_str(&self.description),
        }
    }
}

/// Group a verified file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetGroup {
    /// `KEY=value` environment files
    Env,
    /// nginx-style server configuration
    Server,
    /// docker-compose files
    Compose,
}

impl TargetGroup {
    /// All groups, in report order
    pub const ALL: [TargetGroup; 3] = [Self::Env, Self::Server, Self::Compose];

    /// Section title used in reports
    pub fn title(&self) -> &'static str {
        match self {
            Self::Env => "Environment Files",
            Self::Server => "Nginx Configurations",
            Self::Compose => "Docker Compose Files",
        }
    }
}

/// Outcome of verifying one file
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FileStatus {
    /// The file was read and checked
    Checked { issues: Vec<Issue> },
    /// The file does not exist; not counted as an issue
    NotFound,
}

/// Verification result for a single file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub group: TargetGroup,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileReport {
    pub fn checked(path: impl Into<String>, group: TargetGroup, issues: Vec<Issue>) -> Self {
        Self {
            path: path.into(),
            group,
            status: FileStatus::Checked { issues },
        }
    }

    pub fn not_found(path: impl Into<String>, group: TargetGroup) -> Self {
        Self {
            path: path.into(),
            group,
            status: FileStatus::NotFound,
        }
    }

    /// Issues found in this file (empty when missing)
    pub fn issues(&self) -> &[Issue] {
        match &self.status {
            FileStatus::Checked { issues } => issues,
            FileStatus::NotFound => &[],
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.status, FileStatus::NotFound)
    }
}

/// Collection of file results from a complete verification run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationReport {
    files: Vec<FileReport>,
}

impl VerificationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file result
    pub fn add_file(&mut self, report: FileReport) {
        self.files.push(report);
    }

    /// Get all file results
    pub fn files(&self) -> &[FileReport] {
        &self.files
    }

    /// Get file results of one group, in insertion order
    pub fn files_in(&self, group: TargetGroup) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(move |f| f.group == group)
    }

    /// Iterate over every issue of every file
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.files.iter().flat_map(|f| f.issues().iter())
    }

    /// Get total number of issues
    pub fn total_issues(&self) -> usize {
        self.issues().count()
    }

    /// Count files that were not found
    pub fn missing_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_missing()).count()
    }

    /// True iff no issue was found in any checked file
    pub fn is_clean(&self) -> bool {
        self.total_issues() == 0
    }
}
