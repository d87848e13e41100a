//! # Configuration File Annotation
//!
//! Inserts an instructional comment above every line that matches a
//! sensitive-setting rule, so an operator knows what to replace before
//! deploying.
//!
//! ## Overview
//!
//! - [`annotate_content`] - Pure annotation of in-memory content
//! - [`Annotator`] - Backs up, annotates and rewrites files on disk
//! - [`BackupStore`] - Pre-annotation copies keyed by base name
//!
//! ## Guarantees
//!
//! - Original lines are never removed or reordered; annotation only inserts.
//! - A line whose predecessor already contains `CHANGE THIS TO` is left
//!   alone, so repeated runs do not stack comments.
//! - Nothing is locked and writes are not atomic. The backup is the only
//!   recovery path.
//!
//! ## Example
//!
//! ```rust
//! use confwarden::annotate::annotate_content;
//!
//! let result = annotate_content(".env", "POSTGRES_PASSWORD=abc123\n");
//! assert_eq!(result.annotations.len(), 1);
//! assert!(result.content.starts_with("# CHANGE THIS TO: A strong PostgreSQL password"));
//! ```

mod backup;

pub use backup::BackupStore;

use serde::Serialize;
use similar::TextDiff;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::AnnotateError;
use crate::rules::{first_match, rules_for, CommentSyntax, FileCategory, ANNOTATION_MARKER};

/// A comment inserted above an original line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// 1-based line number in the original content
    pub line: usize,
    /// Name of the rule that matched
    pub rule: &'static str,
    /// Comment text as inserted
    pub comment: String,
}

/// Result of annotating one file
#[derive(Debug, Clone)]
pub struct AnnotatedFile {
    pub path: String,
    pub category: FileCategory,
    /// Content before annotation
    pub original: String,
    /// Content after annotation
    pub content: String,
    pub annotations: Vec<Annotation>,
    /// Matching lines skipped because they were already annotated
    pub already_annotated: usize,
    /// Where the original was copied, when written to disk
    pub backup: Option<PathBuf>,
}

impl AnnotatedFile {
    /// Whether annotation inserted anything
    pub fn is_changed(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Unified diff between the original and annotated content
    pub fn diff(&self) -> String {
        TextDiff::from_lines(&self.original, &self.content)
            .unified_diff()
            .context_radius(1)
            .header(&self.path, &format!("{} (annotated)", self.path))
            .to_string()
    }
}

/// Annotate `content` as if it were read from `path`.
///
/// The path decides the rule subset and the comment syntax. Line terminators
/// are preserved; an inserted comment reuses the terminator of the line it
/// annotates.
pub fn annotate_content(path: &str, content: &str) -> AnnotatedFile {
    let category = FileCategory::from_path(path);
    let syntax = CommentSyntax::from_path(path);
    let rules = rules_for(category);

    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut output = String::with_capacity(content.len());
    let mut annotations = Vec::new();
    let mut already_annotated = 0;

    for (i, line) in lines.iter().enumerate() {
        if let Some(rule) = first_match(&rules, line.trim()) {
            let has_comment = i > 0 && lines[i - 1].contains(ANNOTATION_MARKER);

            if has_comment {
                already_annotated += 1;
            } else {
                let comment = syntax.render(rule.comment);
                output.push_str(&comment);
                output.push_str(line_terminator(line));
                annotations.push(Annotation {
                    line: i + 1,
                    rule: rule.name,
                    comment,
                });
            }
        }

        output.push_str(line);
    }

    AnnotatedFile {
        path: path.to_string(),
        category,
        original: content.to_string(),
        content: output,
        annotations,
        already_annotated,
        backup: None,
    }
}

fn line_terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Annotates files in place after backing them up
pub struct Annotator {
    backups: BackupStore,
}

impl Annotator {
    /// Create an annotator writing backups into `backup_dir`
    pub fn new(backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            backups: BackupStore::new(backup_dir),
        }
    }

    pub fn backups(&self) -> &BackupStore {
        &self.backups
    }

    /// Back up, annotate and rewrite `path`.
    ///
    /// The backup is taken before anything else, even when the file ends up
    /// unchanged. The annotated content is always written back.
    pub fn annotate(&self, path: &Path) -> Result<AnnotatedFile, AnnotateError> {
        let backup = self.backups.store(path)?;
        debug!(file = %path.display(), backup = %backup.display(), "Backed up file");

        let mut result = self.preview(path)?;

        fs::write(path, &result.content).map_err(|e| AnnotateError::FileWrite {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(
            file = %path.display(),
            category = %result.category,
            inserted = result.annotations.len(),
            skipped = result.already_annotated,
            "Annotated file"
        );

        result.backup = Some(backup);
        Ok(result)
    }

    /// Compute the annotation of `path` without backing up or writing
    pub fn preview(&self, path: &Path) -> Result<AnnotatedFile, AnnotateError> {
        let content = fs::read_to_string(path).map_err(|e| AnnotateError::FileRead {
            path: path.display().to_string(),
            source: e,
        })?;

        Ok(annotate_content(&path.to_string_lossy(), &content))
    }
}
