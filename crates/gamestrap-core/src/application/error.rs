//! Application layer errors.
//!
//! These errors represent failures talking to the outside world, not invalid
//! input. Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running the bootstrap phases.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The toolchain ran and reported failure.
    #[error("Failed to {step} ({}): {diagnostic}", exit_label(.code))]
    ToolFailed {
        step: String,
        code: Option<i32>,
        diagnostic: String,
    },

    /// The toolchain could not be launched.
    #[error("Could not run '{program}': {reason}")]
    ToolUnavailable { program: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolFailed { step, .. } => vec![
                format!("The toolchain failed while trying to {}", step),
                "Check the toolchain output above for details".into(),
                "Steps before this one were kept; re-running is safe".into(),
            ],
            Self::ToolUnavailable { program, .. } => vec![
                format!("Ensure '{}' is installed and in your PATH", program),
                "Or point to it explicitly with --toolchain <PROGRAM>".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Make sure no regular file is in the way of the directory".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolFailed { .. } | Self::ToolUnavailable { .. } => ErrorCategory::Toolchain,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
