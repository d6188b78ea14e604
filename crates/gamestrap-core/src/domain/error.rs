// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Game name cannot be empty")]
    EmptyGameName,

    #[error("Invalid game name '{name}': {reason}")]
    InvalidGameName { name: String, reason: String },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyGameName => vec![
                "Pass the game name as the first argument".into(),
                "Example: gamestrap new GuessTheNumber".into(),
            ],
            Self::InvalidGameName { name, reason } => vec![
                format!("'{}' cannot be used as a game name: {}", name, reason),
                "Start with a letter; use letters, digits, '_' and '.' only".into(),
                "Examples: GuessTheNumber, Snake, Tetris2".into(),
            ],
            Self::InvalidLayout(msg) => vec![
                "Check the source/test directory settings".into(),
                format!("Details: {}", msg),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> crate::error::ErrorCategory {
        crate::error::ErrorCategory::Validation
    }
}
