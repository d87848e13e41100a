//! Error types for confwarden
//!
//! This module defines custom error types using `thiserror` for better error handling
//! and more descriptive error messages throughout the application.

use thiserror::Error;

/// Main error type for confwarden
#[derive(Error, Debug)]
pub enum ConfwardenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Annotation-related errors
    #[error("Annotation error: {0}")]
    Annotate(#[from] AnnotateError),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that occur while loading or writing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file '{path}': {source}")]
    FileRead {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to write the configuration file
    #[error("Failed to write config file '{path}': {source}")]
    FileWrite {
        /// Path to the configuration file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The configuration file already exists
    #[error("Config file '{path}' already exists (use --force to overwrite)")]
    AlreadyExists {
        /// Path to the existing configuration file
        path: String,
    },

    /// Failed to read the file manifest
    #[error("Failed to read manifest '{path}': {source}")]
    ManifestRead {
        /// Path to the manifest
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to change into the requested working directory
    #[error("Cannot use working directory '{path}': {source}")]
    WorkingDirectory {
        /// Requested directory
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Invalid TOML syntax or schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors that occur while annotating a single file
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// Failed to create the backup directory
    #[error("Failed to create backup directory '{path}': {source}")]
    BackupDir {
        path: String,
        source: std::io::Error,
    },

    /// Failed to copy the original file to the backup location
    #[error("Failed to back up '{path}' to '{backup}': {source}")]
    Backup {
        path: String,
        backup: String,
        source: std::io::Error,
    },

    /// Failed to read the file to annotate
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    /// Failed to write the annotated content back
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: String,
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for ConfwardenError {
    fn from(err: toml::de::Error) -> Self {
        ConfwardenError::Config(ConfigError::Parse(err))
    }
}

impl From<toml::ser::Error> for ConfwardenError {
    fn from(err: toml::ser::Error) -> Self {
        ConfwardenError::Config(ConfigError::Serialize(err))
    }
}
