//! Unified error handling for Gamestrap Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Gamestrap Core operations.
#[derive(Debug, Error, Clone)]
pub enum GamestrapError {
    /// Errors from the domain layer (invalid names, invalid layout).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (toolchain or filesystem failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl GamestrapError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Toolchain,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type GamestrapResult<T> = Result<T, GamestrapError>;
