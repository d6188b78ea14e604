//! Game design document template.
//!
//! Rendering is pure: [`render_design_document`] maps a layout to the full
//! markdown text and never touches the filesystem.

use std::collections::BTreeMap;

use super::SolutionLayout;

/// Markdown skeleton with six sections. Placeholders use `{{NAME}}` syntax.
pub const DESIGN_DOCUMENT_TEMPLATE: &str = r#"# {{GAME_NAME}} - Game Design Document

## Overview

{{GAME_NAME}} is a console game. Describe the premise, the target player and
what a single play session looks like.

- **Genre:**
- **Platform:** Console (terminal)
- **Status:** Concept

## Core Gameplay

Describe the core loop: what the player does, what the game answers with, and
how a round is won or lost.

1. Setup:
2. Player turn:
3. Resolution:

## Features

- [ ] Core loop playable end to end
- [ ] Input validation with helpful messages
- [ ] Replay without restarting the program
- [ ] Score or statistics tracking

## Console UI

The console front-end lives in `{{CONSOLE_PROJECT}}`. It owns all input and
output and delegates every rule decision to `{{CORE_PROJECT}}`.

- Title screen:
- Prompts:
- End-of-round summary:

## Technical Design

| Project | Responsibility |
|---------|----------------|
| `{{CORE_PROJECT}}` | Game rules and state, no console access |
| `{{CONSOLE_PROJECT}}` | Console input/output, references `{{CORE_PROJECT}}` |
| `{{CORE_PROJECT}}.Tests` | Unit tests for `{{CORE_PROJECT}}` |

## Milestones

1. **M1:** Rules implemented and covered by tests in `{{CORE_PROJECT}}.Tests`
2. **M2:** Playable console loop in `{{CONSOLE_PROJECT}}`
3. **M3:** Polish, balancing and release notes
"#;

/// Variables available to the design document template.
///
/// | Variable | Example |
/// |----------|---------|
/// | `GAME_NAME` | "GuessTheNumber" |
/// | `CORE_PROJECT` | "GuessTheNumber.Core" |
/// | `CONSOLE_PROJECT` | "GuessTheNumber.ConsoleGui" |
#[derive(Debug, Clone)]
pub struct DocumentContext {
    variables: BTreeMap<&'static str, String>,
}

impl DocumentContext {
    pub fn new(layout: &SolutionLayout) -> Self {
        let names = layout.names();
        let mut variables = BTreeMap::new();
        variables.insert("GAME_NAME", layout.game().to_string());
        variables.insert("CORE_PROJECT", names.core.clone());
        variables.insert("CONSOLE_PROJECT", names.console.clone());
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Substitute every `{{KEY}}` occurrence. Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        self.variables
            .iter()
            .fold(template.to_string(), |acc, (key, value)| {
                acc.replace(&format!("{{{{{key}}}}}"), value)
            })
    }
}

/// Render the design document for `layout`.
pub fn render_design_document(layout: &SolutionLayout) -> String {
    DocumentContext::new(layout).render(DESIGN_DOCUMENT_TEMPLATE)
}
