//! Toolchain commands.
//!
//! Each variant is one invocation of the external project/solution toolchain.
//! [`ToolCommand::args`] renders the argument vector (without the program
//! name); [`ToolCommand::describe`] renders the step name used in progress
//! output and failure diagnostics.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use super::{ProjectKind, ProjectSpec, ReferenceEdge, SolutionLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCommand {
    /// `new <template> -n <name> -o <dir> --force`
    NewProject {
        kind: ProjectKind,
        name: String,
        output: PathBuf,
    },
    /// `new sln -n <name> -o <dir> --force`
    NewSolution { name: String, output: PathBuf },
    /// `sln <solution> add <manifest>`
    AddToSolution { solution: PathBuf, manifest: PathBuf },
    /// `add <manifest> reference <reference>`
    AddReference { manifest: PathBuf, reference: PathBuf },
}

impl ToolCommand {
    pub fn new_project(spec: &ProjectSpec) -> Self {
        Self::NewProject {
            kind: spec.kind,
            name: spec.name.clone(),
            output: spec.dir.clone(),
        }
    }

    pub fn new_solution(layout: &SolutionLayout) -> Self {
        Self::NewSolution {
            name: layout.names().solution.clone(),
            output: layout.solution_dir().to_path_buf(),
        }
    }

    pub fn add_to_solution(layout: &SolutionLayout, spec: &ProjectSpec) -> Self {
        Self::AddToSolution {
            solution: layout.solution_file().to_path_buf(),
            manifest: spec.manifest_path(),
        }
    }

    pub fn add_reference(layout: &SolutionLayout, edge: ReferenceEdge) -> Self {
        Self::AddReference {
            manifest: layout.project(edge.from).manifest_path(),
            reference: layout.project(edge.to).manifest_path(),
        }
    }

    /// Argument vector, program name excluded.
    pub fn args(&self) -> Vec<OsString> {
        match self {
            Self::NewProject { kind, name, output } => vec![
                "new".into(),
                kind.template().into(),
                "-n".into(),
                name.into(),
                "-o".into(),
                output.into(),
                "--force".into(),
            ],
            Self::NewSolution { name, output } => vec![
                "new".into(),
                "sln".into(),
                "-n".into(),
                name.into(),
                "-o".into(),
                output.into(),
                "--force".into(),
            ],
            Self::AddToSolution { solution, manifest } => vec![
                "sln".into(),
                solution.into(),
                "add".into(),
                manifest.into(),
            ],
            Self::AddReference {
                manifest,
                reference,
            } => vec![
                "add".into(),
                manifest.into(),
                "reference".into(),
                reference.into(),
            ],
        }
    }

    /// Human-readable step name, e.g. `create library project 'Pong.Core'`.
    pub fn describe(&self) -> String {
        match self {
            Self::NewProject { kind, name, .. } => format!("create {kind} project '{name}'"),
            Self::NewSolution { name, .. } => format!("create solution '{name}'"),
            Self::AddToSolution { manifest, .. } => {
                format!("register project '{}' in solution", stem(manifest))
            }
            Self::AddReference {
                manifest,
                reference,
            } => format!(
                "add reference '{}' -> '{}'",
                stem(manifest),
                stem(reference)
            ),
        }
    }

    /// Arguments as display strings, for logs and JSON reports.
    pub fn display_args(&self) -> Vec<String> {
        self.args()
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
