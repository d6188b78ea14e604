//! Game and project naming.
//!
//! A [`GameName`] is validated once; every other name in the solution is
//! derived from it by [`ProjectNames::derive`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DomainError;

/// A validated game name, e.g. `GuessTheNumber`.
///
/// Invariant: non-empty, starts with an ASCII letter, contains only ASCII
/// letters, digits, `_` and `.`, and does not end with `.`. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GameName(String);

impl GameName {
    /// Validate and wrap a game name.
    pub fn parse(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();

        let Some(first) = name.chars().next() else {
            return Err(DomainError::EmptyGameName);
        };

        let invalid = |reason: &str| DomainError::InvalidGameName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if !first.is_ascii_alphabetic() {
            return Err(invalid("must start with a letter"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '.'))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }
        if name.ends_with('.') {
            return Err(invalid("must not end with '.'"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for GameName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for GameName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Names of the three projects and the solution, derived from a [`GameName`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectNames {
    pub solution: String,
    pub core: String,
    pub console: String,
    pub tests: String,
}

impl ProjectNames {
    pub fn derive(game: &GameName) -> Self {
        let core = format!("{game}.Core");
        Self {
            solution: game.to_string(),
            console: format!("{game}.ConsoleGui"),
            tests: format!("{core}.Tests"),
            core,
        }
    }
}
