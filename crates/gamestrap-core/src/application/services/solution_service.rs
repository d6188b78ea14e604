//! Solution Composer - phase 3.
//!
//! Creates the solution container, registers the three manifests (library,
//! executable, test) and wires the two reference edges. Fail-fast: a failed
//! step stops the phase and nothing already done is undone.

use serde::Serialize;
use tracing::{info, instrument};

use super::{ExecutedStep, run_step};
use crate::{
    application::ports::Toolchain,
    domain::{REFERENCE_EDGES, SolutionLayout, ToolCommand},
    error::GamestrapResult,
};

/// A reference edge as it was wired, by project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiredReference {
    pub from: String,
    pub to: String,
}

/// Result of a successful composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub steps: Vec<ExecutedStep>,
    pub references: Vec<WiredReference>,
}

pub struct SolutionComposer<'a> {
    toolchain: &'a dyn Toolchain,
}

impl<'a> SolutionComposer<'a> {
    pub fn new(toolchain: &'a dyn Toolchain) -> Self {
        Self { toolchain }
    }

    #[instrument(skip_all, fields(solution = %layout.solution_file().display()))]
    pub fn compose(&self, layout: &SolutionLayout) -> GamestrapResult<Composition> {
        let mut steps = Vec::with_capacity(6);

        steps.push(run_step(self.toolchain, &ToolCommand::new_solution(layout))?);

        for project in layout.projects() {
            let command = ToolCommand::add_to_solution(layout, project);
            steps.push(run_step(self.toolchain, &command)?);
        }

        let mut references = Vec::with_capacity(REFERENCE_EDGES.len());
        for edge in REFERENCE_EDGES {
            steps.push(run_step(
                self.toolchain,
                &ToolCommand::add_reference(layout, edge),
            )?);
            references.push(WiredReference {
                from: layout.project(edge.from).name.clone(),
                to: layout.project(edge.to).name.clone(),
            });
        }

        info!(steps = steps.len(), "Solution composed");
        Ok(Composition { steps, references })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockToolchain, ToolOutcome},
    };
    use crate::domain::GameName;
    use crate::error::GamestrapError;

    fn layout() -> SolutionLayout {
        SolutionLayout::new(GameName::parse("Pong").unwrap(), "r")
    }

    #[test]
    fn composes_solution_registrations_and_two_references() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        let mut toolchain = MockToolchain::new();
        toolchain.expect_run().times(6).returning(move |cmd| {
            log.lock().unwrap().push(cmd.describe());
            Ok(ToolOutcome::success())
        });

        let composition = SolutionComposer::new(&toolchain).compose(&layout()).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            [
                "create solution 'Pong'",
                "register project 'Pong.Core' in solution",
                "register project 'Pong.ConsoleGui' in solution",
                "register project 'Pong.Core.Tests' in solution",
                "add reference 'Pong.ConsoleGui' -> 'Pong.Core'",
                "add reference 'Pong.Core.Tests' -> 'Pong.Core'",
            ]
        );
        assert_eq!(
            composition.references,
            [
                WiredReference {
                    from: "Pong.ConsoleGui".into(),
                    to: "Pong.Core".into()
                },
                WiredReference {
                    from: "Pong.Core.Tests".into(),
                    to: "Pong.Core".into()
                },
            ]
        );
    }

    #[test]
    fn failed_registration_stops_before_references() {
        let mut toolchain = MockToolchain::new();
        toolchain
            .expect_run()
            .withf(|cmd| !matches!(cmd, ToolCommand::AddReference { .. }))
            .times(2)
            .returning(|cmd| match cmd {
                ToolCommand::NewSolution { .. } => Ok(ToolOutcome::success()),
                _ => Ok(ToolOutcome::failure(1, "solution file is locked")),
            });
        toolchain
            .expect_run()
            .withf(|cmd| matches!(cmd, ToolCommand::AddReference { .. }))
            .never();

        let err = SolutionComposer::new(&toolchain)
            .compose(&layout())
            .unwrap_err();
        assert!(matches!(
            err,
            GamestrapError::Application(ApplicationError::ToolFailed { ref step, .. })
                if step == "register project 'Pong.Core' in solution"
        ));
    }

    #[test]
    fn failed_reference_names_the_edge() {
        let mut toolchain = MockToolchain::new();
        toolchain.expect_run().returning(|cmd| match cmd {
            ToolCommand::AddReference { manifest, .. }
                if manifest.ends_with("Pong.Core.Tests.csproj") =>
            {
                Ok(ToolOutcome::failure(1, "project not found"))
            }
            _ => Ok(ToolOutcome::success()),
        });

        let err = SolutionComposer::new(&toolchain)
            .compose(&layout())
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("add reference 'Pong.Core.Tests' -> 'Pong.Core'")
        );
    }
}
