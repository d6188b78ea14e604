use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// File extension of a project manifest.
pub const MANIFEST_EXTENSION: &str = "csproj";

/// File extension of a solution container.
pub const SOLUTION_EXTENSION: &str = "sln";

/// The three kinds of project a game solution is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    /// Game logic, referenced by everything else.
    Library,
    /// Console front-end.
    Executable,
    /// Unit tests for the library.
    TestFramework,
}

impl ProjectKind {
    /// Provisioning order. Also the order projects are registered in the solution.
    pub const ALL: [ProjectKind; 3] = [Self::Library, Self::Executable, Self::TestFramework];

    /// Short name of the toolchain template used to scaffold this kind.
    pub fn template(self) -> &'static str {
        match self {
            Self::Library => "classlib",
            Self::Executable => "console",
            Self::TestFramework => "xunit",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Library => write!(f, "library"),
            Self::Executable => write!(f, "executable"),
            Self::TestFramework => write!(f, "test"),
        }
    }
}

/// One project to provision: what kind, what name, where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSpec {
    pub kind: ProjectKind,
    pub name: String,
    pub dir: PathBuf,
}

impl ProjectSpec {
    pub fn new(kind: ProjectKind, name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            name: name.into(),
            dir: dir.into(),
        }
    }

    /// `<dir>/<name>.csproj`
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.name, MANIFEST_EXTENSION))
    }
}

/// A declared build-time dependency between two projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceEdge {
    pub from: ProjectKind,
    pub to: ProjectKind,
}

/// The complete reference graph: both front-ends depend on the library and
/// nothing else is wired.
pub const REFERENCE_EDGES: [ReferenceEdge; 2] = [
    ReferenceEdge {
        from: ProjectKind::Executable,
        to: ProjectKind::Library,
    },
    ReferenceEdge {
        from: ProjectKind::TestFramework,
        to: ProjectKind::Library,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_match_kinds() {
        assert_eq!(ProjectKind::Library.template(), "classlib");
        assert_eq!(ProjectKind::Executable.template(), "console");
        assert_eq!(ProjectKind::TestFramework.template(), "xunit");
    }

    #[test]
    fn manifest_lives_in_project_dir() {
        let spec = ProjectSpec::new(ProjectKind::Library, "Pong.Core", "src/Pong/Pong.Core");
        assert_eq!(
            spec.manifest_path(),
            PathBuf::from("src/Pong/Pong.Core/Pong.Core.csproj")
        );
    }

    #[test]
    fn library_has_no_outgoing_edges() {
        assert!(REFERENCE_EDGES.iter().all(|e| e.from != ProjectKind::Library));
    }

    #[test]
    fn front_ends_are_not_wired_to_each_other() {
        assert!(REFERENCE_EDGES.iter().all(|e| e.to == ProjectKind::Library));
        assert_eq!(REFERENCE_EDGES.len(), 2);
    }
}
