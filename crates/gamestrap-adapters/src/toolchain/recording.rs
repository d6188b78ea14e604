//! Recording toolchain for testing.
//!
//! Records every command it is asked to run and answers with success, unless
//! told to fail at a given call. When given a [`MemoryFilesystem`], it also
//! writes the artifacts the real tool would leave behind (manifests, the
//! solution file, registrations and references) so tests can assert on them.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use gamestrap_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ToolOutcome, Toolchain},
    },
    domain::{MANIFEST_EXTENSION, SOLUTION_EXTENSION, ToolCommand},
    error::GamestrapResult,
};

use crate::filesystem::MemoryFilesystem;

#[derive(Debug, Clone, Default)]
pub struct RecordingToolchain {
    inner: Arc<Mutex<RecordingInner>>,
    filesystem: Option<MemoryFilesystem>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<ToolCommand>,
    fail_at: Option<(usize, ToolOutcome)>,
}

impl RecordingToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialise artifacts into `filesystem` as commands succeed.
    pub fn simulating(filesystem: MemoryFilesystem) -> Self {
        Self {
            filesystem: Some(filesystem),
            ..Self::default()
        }
    }

    /// Answer the call with this zero-based index with `outcome`.
    pub fn failing_at(self, index: usize, outcome: ToolOutcome) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_at = Some((index, outcome));
        }
        self
    }

    /// Commands received so far, in order.
    pub fn calls(&self) -> Vec<ToolCommand> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }

    /// `(from, to)` manifest pairs of every reference command received.
    pub fn references(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ToolCommand::AddReference {
                    manifest,
                    reference,
                } => Some((manifest, reference)),
                _ => None,
            })
            .collect()
    }

    fn materialise(&self, command: &ToolCommand) -> GamestrapResult<()> {
        let Some(fs) = &self.filesystem else {
            return Ok(());
        };

        match command {
            ToolCommand::NewProject { kind, name, output } => {
                fs.create_dir_all(output)?;
                fs.write_file(
                    &output.join(format!("{name}.{MANIFEST_EXTENSION}")),
                    &format!("<Project template=\"{}\" />\n", kind.template()),
                )
            }
            ToolCommand::NewSolution { name, output } => {
                fs.create_dir_all(output)?;
                fs.write_file(&output.join(format!("{name}.{SOLUTION_EXTENSION}")), "")
            }
            ToolCommand::AddToSolution { solution, manifest } => {
                require(fs, solution)?;
                require(fs, manifest)?;
                fs.append_file(solution, &format!("Project = {}\n", manifest.display()))
            }
            ToolCommand::AddReference {
                manifest,
                reference,
            } => {
                require(fs, manifest)?;
                require(fs, reference)?;
                fs.append_file(
                    manifest,
                    &format!("<ProjectReference Include=\"{}\" />\n", reference.display()),
                )
            }
        }
    }
}

fn require(fs: &MemoryFilesystem, path: &Path) -> GamestrapResult<()> {
    if fs.exists(path) {
        Ok(())
    } else {
        Err(ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "file not found".into(),
        }
        .into())
    }
}

impl Toolchain for RecordingToolchain {
    fn run(&self, command: &ToolCommand) -> GamestrapResult<ToolOutcome> {
        let scripted = {
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApplicationError::LockPoisoned)?;
            let index = inner.calls.len();
            inner.calls.push(command.clone());
            inner
                .fail_at
                .as_ref()
                .filter(|(at, _)| *at == index)
                .map(|(_, outcome)| outcome.clone())
        };

        if let Some(outcome) = scripted {
            return Ok(outcome);
        }

        if let Err(e) = self.materialise(command) {
            return Ok(ToolOutcome::failure(1, e.to_string()));
        }
        Ok(ToolOutcome::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamestrap_core::domain::{GameName, SolutionLayout};

    fn layout() -> SolutionLayout {
        SolutionLayout::new(GameName::parse("Pong").unwrap(), "r")
    }

    #[test]
    fn records_calls_in_order() {
        let toolchain = RecordingToolchain::new();
        let l = layout();
        let first = ToolCommand::new_solution(&l);
        let second = ToolCommand::new_project(&l.projects()[0]);

        toolchain.run(&first).unwrap();
        toolchain.run(&second).unwrap();

        assert_eq!(toolchain.calls(), vec![first, second]);
    }

    #[test]
    fn scripted_failure_applies_to_one_call() {
        let toolchain = RecordingToolchain::new().failing_at(1, ToolOutcome::failure(2, "nope"));
        let cmd = ToolCommand::new_solution(&layout());

        assert!(toolchain.run(&cmd).unwrap().succeeded());
        assert_eq!(toolchain.run(&cmd).unwrap().code, Some(2));
        assert!(toolchain.run(&cmd).unwrap().succeeded());
    }

    #[test]
    fn simulation_rejects_registration_of_missing_manifest() {
        let fs = MemoryFilesystem::new();
        let toolchain = RecordingToolchain::simulating(fs.clone());
        let l = layout();

        toolchain.run(&ToolCommand::new_solution(&l)).unwrap();
        let outcome = toolchain
            .run(&ToolCommand::add_to_solution(&l, &l.projects()[0]))
            .unwrap();

        assert!(!outcome.succeeded());
        assert!(outcome.diagnostic().contains("Pong.Core.csproj"));
    }
}
