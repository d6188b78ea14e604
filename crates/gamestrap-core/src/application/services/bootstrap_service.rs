//! Bootstrap Service - main application orchestrator.
//!
//! This service coordinates the whole run:
//! 1. Ensure directories
//! 2. Provision the three projects
//! 3. Compose the solution and wire references
//! 4. Stub the wiki design document (advisory)
//!
//! Phases 1-3 are fatal on error and stop the run where they fail. Phase 4
//! never fails the run.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{
    DirectoryEnsurer, ExecutedStep, ProjectProvisioner, SolutionComposer, WikiOutcome,
    WikiStubWriter, WiredReference,
};
use crate::{
    application::ports::{Filesystem, Toolchain},
    domain::{BootstrapPlan, GameName, SolutionLayout},
    error::GamestrapResult,
};

/// Summary of a completed bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub game: GameName,
    pub solution: PathBuf,
    pub created_directories: Vec<PathBuf>,
    pub steps: Vec<ExecutedStep>,
    pub references: Vec<WiredReference>,
    pub wiki: WikiOutcome,
}

/// Main bootstrap service.
pub struct BootstrapService {
    filesystem: Box<dyn Filesystem>,
    toolchain: Box<dyn Toolchain>,
}

impl BootstrapService {
    /// Create a new bootstrap service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use gamestrap_core::application::{BootstrapService, ports::*};
    ///
    /// let service = BootstrapService::new(
    ///     filesystem, // impl Filesystem
    ///     toolchain,  // impl Toolchain
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, toolchain: Box<dyn Toolchain>) -> Self {
        Self {
            filesystem,
            toolchain,
        }
    }

    /// Describe the run without performing it.
    pub fn plan(&self, layout: &SolutionLayout) -> BootstrapPlan {
        BootstrapPlan::for_layout(layout)
    }

    /// Run all four phases.
    #[instrument(
        skip_all,
        fields(
            game = %layout.game(),
            root = %layout.root().display()
        )
    )]
    pub fn run(&self, layout: &SolutionLayout) -> GamestrapResult<BootstrapReport> {
        info!("Bootstrapping solution for {}", layout.game());

        // 1. Directories
        let created_directories =
            DirectoryEnsurer::new(self.filesystem.as_ref()).ensure(&layout.directories())?;

        // 2. Projects
        let mut steps = ProjectProvisioner::new(self.toolchain.as_ref()).provision(layout)?;

        // 3. Solution + references
        let composition = SolutionComposer::new(self.toolchain.as_ref()).compose(layout)?;
        steps.extend(composition.steps);

        // 4. Wiki (advisory)
        let wiki = WikiStubWriter::new(self.filesystem.as_ref()).write(layout);
        if wiki.is_advisory() {
            debug!(outcome = ?wiki, "Wiki stub was not written");
        }

        info!(steps = steps.len(), "Bootstrap completed successfully");
        Ok(BootstrapReport {
            game: layout.game().clone(),
            solution: layout.solution_file().to_path_buf(),
            created_directories,
            steps,
            references: composition.references,
            wiki,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockToolchain, ToolOutcome},
    };
    use crate::domain::{LayoutOptions, ToolCommand, WikiLocation};

    fn layout() -> SolutionLayout {
        let options = LayoutOptions {
            wiki: WikiLocation::At(PathBuf::from("wiki")),
            ..LayoutOptions::default()
        };
        SolutionLayout::with_options(GameName::parse("Pong").unwrap(), "r", options).unwrap()
    }

    #[test]
    fn directory_failure_stops_before_toolchain() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().times(1).returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        let mut toolchain = MockToolchain::new();
        toolchain.expect_run().never();

        let service = BootstrapService::new(Box::new(fs), Box::new(toolchain));
        assert!(service.run(&layout()).is_err());
    }

    #[test]
    fn missing_wiki_still_reports_success() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().times(6).returning(|_| Ok(()));
        fs.expect_write_file().never();
        let mut toolchain = MockToolchain::new();
        toolchain
            .expect_run()
            .times(9)
            .returning(|_| Ok(ToolOutcome::success()));

        let service = BootstrapService::new(Box::new(fs), Box::new(toolchain));
        let report = service.run(&layout()).unwrap();

        assert_eq!(report.created_directories.len(), 6);
        assert_eq!(report.steps.len(), 9);
        assert_eq!(report.references.len(), 2);
        assert_eq!(
            report.wiki,
            WikiOutcome::WikiMissing {
                root: PathBuf::from("wiki")
            }
        );
    }

    #[test]
    fn plan_matches_executed_commands() {
        let service =
            BootstrapService::new(Box::new(MockFilesystem::new()), Box::new(MockToolchain::new()));
        let plan = service.plan(&layout());
        let first = plan.commands().next().unwrap();
        assert!(matches!(first, ToolCommand::NewProject { name, .. } if name == "Pong.Core"));
        assert_eq!(
            plan.wiki_document,
            Some(PathBuf::from("wiki/Games/Pong/Pong-GDD.md"))
        );
    }

    #[test]
    fn report_serialises_wiki_outcome_with_status_tag() {
        let report = BootstrapReport {
            game: GameName::parse("Pong").unwrap(),
            solution: PathBuf::from("r/src/Pong/Pong.sln"),
            created_directories: vec![],
            steps: vec![],
            references: vec![],
            wiki: WikiOutcome::Disabled,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["game"], "Pong");
        assert_eq!(json["wiki"]["status"], "disabled");
    }
}
