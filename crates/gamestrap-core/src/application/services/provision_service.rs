//! Project Provisioner - phase 2.
//!
//! Scaffolds the library, executable and test projects in that order. Each
//! call uses force semantics, so an existing project is overwritten without a
//! prompt. The first failure stops the phase; later projects are never tried.

use tracing::instrument;

use super::{ExecutedStep, run_step};
use crate::{
    application::ports::Toolchain,
    domain::{SolutionLayout, plan::provisioning_commands},
    error::GamestrapResult,
};

pub struct ProjectProvisioner<'a> {
    toolchain: &'a dyn Toolchain,
}

impl<'a> ProjectProvisioner<'a> {
    pub fn new(toolchain: &'a dyn Toolchain) -> Self {
        Self { toolchain }
    }

    #[instrument(skip_all, fields(game = %layout.game()))]
    pub fn provision(&self, layout: &SolutionLayout) -> GamestrapResult<Vec<ExecutedStep>> {
        provisioning_commands(layout)
            .iter()
            .map(|command| run_step(self.toolchain, command))
            .collect()
    }
}
