//! Application services - the bootstrap phases and their orchestrator.
//!
//! Phases run strictly in order and share nothing but the layout and the
//! filesystem. Every toolchain call goes through [`run_step`], which turns a
//! non-zero status into a fatal [`ApplicationError::ToolFailed`].

pub mod bootstrap_service;
pub mod directory_service;
pub mod provision_service;
pub mod solution_service;
pub mod wiki_service;

pub use bootstrap_service::{BootstrapReport, BootstrapService};
pub use directory_service::DirectoryEnsurer;
pub use provision_service::ProjectProvisioner;
pub use solution_service::{SolutionComposer, WiredReference};
pub use wiki_service::{WikiOutcome, WikiStubWriter};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    application::{ApplicationError, ports::Toolchain},
    domain::ToolCommand,
    error::GamestrapResult,
};

/// A toolchain invocation that completed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutedStep {
    pub description: String,
    pub args: Vec<String>,
}

/// Run one command and fail fast on a non-zero status.
pub(crate) fn run_step(
    toolchain: &dyn Toolchain,
    command: &ToolCommand,
) -> GamestrapResult<ExecutedStep> {
    let description = command.describe();
    info!(step = %description, "Running toolchain step");

    let outcome = toolchain.run(command)?;
    if !outcome.succeeded() {
        return Err(ApplicationError::ToolFailed {
            step: description,
            code: outcome.code,
            diagnostic: outcome.diagnostic(),
        }
        .into());
    }

    debug!(step = %description, stdout = %outcome.stdout.trim(), "Step succeeded");
    Ok(ExecutedStep {
        description,
        args: command.display_args(),
    })
}
