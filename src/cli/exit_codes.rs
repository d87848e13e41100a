//! Exit codes for the CLI
//!
//! Standard exit codes used by confwarden so a deployment pipeline can gate
//! on `verify`.
//!
//! # Exit Code Reference
//!
//! | Code | Constant | Meaning | Example |
//! |------|----------|---------|---------|
//! | 0 | `SUCCESS` | Success | No placeholder values left, annotation finished |
//! | 1 | `ISSUES_FOUND` | Issues found | `JWT_SECRET` still has its example value |
//! | 3 | `ERROR` | Runtime error | Manifest or config file unreadable |
//! | 4 | `INVALID_ARGS` | Invalid arguments | Config file already exists without `--force` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use confwarden::cli::exit_codes;
//!
//! std::process::exit(exit_codes::ISSUES_FOUND);
//! ```

/// Success - no issues found or operation completed successfully.
///
/// `annotate` always returns this once the batch has run, even when single
/// files failed; per-file failures are reported on the console.
pub const SUCCESS: i32 = 0;

/// `verify` found at least one issue.
pub const ISSUES_FOUND: i32 = 1;

/// Runtime error (configuration, manifest, working directory).
pub const ERROR: i32 = 3;

/// Invalid arguments or refused operation.
pub const INVALID_ARGS: i32 = 4;
