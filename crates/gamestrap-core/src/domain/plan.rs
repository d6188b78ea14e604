use std::path::PathBuf;

use super::{REFERENCE_EDGES, SolutionLayout, ToolCommand};

/// Everything a bootstrap run would do, in order, without doing any of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub directories: Vec<PathBuf>,
    pub provisioning: Vec<ToolCommand>,
    pub composition: Vec<ToolCommand>,
    pub wiki_document: Option<PathBuf>,
}

impl BootstrapPlan {
    pub fn for_layout(layout: &SolutionLayout) -> Self {
        Self {
            directories: layout.directories(),
            provisioning: provisioning_commands(layout),
            composition: composition_commands(layout),
            wiki_document: layout.wiki().map(|w| w.document.clone()),
        }
    }

    /// All toolchain commands in execution order.
    pub fn commands(&self) -> impl Iterator<Item = &ToolCommand> {
        self.provisioning.iter().chain(&self.composition)
    }
}

/// One `new <template>` per project: library, executable, test.
pub fn provisioning_commands(layout: &SolutionLayout) -> Vec<ToolCommand> {
    layout
        .projects()
        .iter()
        .map(ToolCommand::new_project)
        .collect()
}

/// Solution creation, three registrations, then the two reference edges.
pub fn composition_commands(layout: &SolutionLayout) -> Vec<ToolCommand> {
    let mut commands = vec![ToolCommand::new_solution(layout)];
    commands.extend(
        layout
            .projects()
            .iter()
            .map(|p| ToolCommand::add_to_solution(layout, p)),
    );
    commands.extend(
        REFERENCE_EDGES
            .iter()
            .map(|edge| ToolCommand::add_reference(layout, *edge)),
    );
    commands
}
