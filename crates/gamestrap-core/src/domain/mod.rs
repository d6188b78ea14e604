//! Core domain layer for Gamestrap.
//!
//! This module contains pure logic with ZERO I/O. Every name and path the
//! bootstrap touches is computed here once, up front, and handed to the
//! application services as an immutable [`SolutionLayout`].
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or network calls
//! - **Few dependencies**: std, `thiserror` for errors, `serde::Serialize` derives for reports
//! - **Immutable values**: Everything is computed at construction and never mutated
pub mod command;
pub mod document;
pub mod error;
pub mod layout;
pub mod names;
pub mod plan;
pub mod project;

pub use command::ToolCommand;
pub use document::{DocumentContext, render_design_document};
pub use error::DomainError;
pub use layout::{LayoutOptions, SolutionLayout, WikiLayout, WikiLocation};
pub use names::{GameName, ProjectNames};
pub use plan::BootstrapPlan;
pub use project::{
    MANIFEST_EXTENSION, ProjectKind, ProjectSpec, REFERENCE_EDGES, ReferenceEdge,
    SOLUTION_EXTENSION,
};
