//! Application layer for Gamestrap.
//!
//! This layer contains:
//! - **Services**: The bootstrap orchestrator and its four phases
//! - **Ports**: Interface definitions (traits) for the filesystem and toolchain
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the phases but computes no names or paths
//! itself. All of that lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BootstrapReport, BootstrapService, DirectoryEnsurer, ExecutedStep, ProjectProvisioner,
    SolutionComposer, WikiOutcome, WikiStubWriter, WiredReference,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ToolOutcome, Toolchain};

pub use error::ApplicationError;
