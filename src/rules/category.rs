//! File categories and comment syntaxes
//!
//! A file's path decides two independent things: which rule subset applies
//! ([`FileCategory`]) and which comment prefix an inserted annotation uses
//! ([`CommentSyntax`]).

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Category of a configuration file, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    /// `KEY=value` environment files (`.env`, `.env.example`, `app.env`)
    EnvStyle,
    /// docker-compose YAML files
    DockerCompose,
    /// nginx configuration files and other `.conf` files
    Nginx,
    /// Anything else; the base rules still apply
    Generic,
}

impl FileCategory {
    /// Determine the category from a path string.
    ///
    /// The checks are ordered: a `docker-compose` path wins over an `nginx`
    /// path, which wins over the environment-file naming conventions.
    pub fn from_path(path: &str) -> Self {
        if path.contains("docker-compose") {
            return Self::DockerCompose;
        }

        if path.contains("nginx") || path.ends_with(".conf") {
            return Self::Nginx;
        }

        let file_name = Path::new(path)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(path);

        if file_name == ".env" || file_name.starts_with(".env.") || file_name.ends_with(".env") {
            return Self::EnvStyle;
        }

        Self::Generic
    }

    /// Get the category name
    pub fn name(&self) -> &'static str {
        match self {
            Self::EnvStyle => "env",
            Self::DockerCompose => "docker-compose",
            Self::Nginx => "nginx",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comment syntax used for inserted annotation lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSyntax {
    /// `#` (shell, env, YAML, nginx)
    Hash,
    /// `//` (JavaScript, TypeScript)
    DoubleSlash,
    /// `--` (SQL)
    DoubleDash,
}

impl CommentSyntax {
    /// Determine the comment syntax from the file extension.
    ///
    /// Unknown extensions, and dotfiles without an extension such as `.env`,
    /// fall back to `#`.
    pub fn from_path(path: &str) -> Self {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("js") | Some("ts") => Self::DoubleSlash,
            Some("sql") => Self::DoubleDash,
            _ => Self::Hash,
        }
    }

    /// The comment prefix characters
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Hash => "#",
            Self::DoubleSlash => "//",
            Self::DoubleDash => "--",
        }
    }

    /// Render `text` as a comment in this syntax.
    ///
    /// Text that already starts with the prefix is kept verbatim. Otherwise
    /// leading `#` and space characters are stripped and the prefix is
    /// prepended, so `"      # CHANGE THIS TO: x"` becomes `"# CHANGE THIS TO: x"`.
    pub fn render(&self, text: &str) -> String {
        if text.starts_with(self.prefix()) {
            return text.to_string();
        }

        let body = text.trim_start_matches(['#', ' ']);
        format!("{} {}", self.prefix(), body)
    }
}
