//! confwarden Library
//!
//! This crate provides the core functionality for preparing deployment
//! configuration files: annotating sensitive settings with instructions and
//! verifying that shipped placeholder values were replaced.

pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;
pub mod scanner;
pub mod verify;

pub use cli::exit_codes;
pub use error::ConfwardenError;
