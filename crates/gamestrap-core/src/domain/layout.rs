//! Solution layout: every path the bootstrap touches, computed once.
//!
//! ```text
//! <root>/
//! ├── src/<Game>/
//! │   ├── <Game>.sln
//! │   ├── <Game>.Core/<Game>.Core.csproj
//! │   └── <Game>.ConsoleGui/<Game>.ConsoleGui.csproj
//! └── tests/<Game>.Core.Tests/<Game>.Core.Tests.csproj
//!
//! <root>/../wiki/Games/<Game>/<Game>-GDD.md   (only if the wiki checkout exists)
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{
    DomainError, GameName, ProjectKind, ProjectNames, ProjectSpec, SOLUTION_EXTENSION,
};

/// Name of the directory under the wiki root that holds per-game pages.
pub const WIKI_GAMES_DIR: &str = "Games";

/// Where the wiki checkout lives, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WikiLocation {
    /// A directory with this name next to the root directory.
    Sibling(String),
    /// An explicit path.
    At(PathBuf),
    /// Skip the wiki phase entirely.
    Disabled,
}

impl Default for WikiLocation {
    fn default() -> Self {
        Self::Sibling("wiki".into())
    }
}

/// Tunable parts of the layout. Defaults reproduce the conventional tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub source_dir: PathBuf,
    pub test_dir: PathBuf,
    pub wiki: WikiLocation,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            test_dir: PathBuf::from("tests"),
            wiki: WikiLocation::default(),
        }
    }
}

/// Paths of the optional wiki stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WikiLayout {
    pub root: PathBuf,
    pub games_dir: PathBuf,
    pub game_dir: PathBuf,
    pub document: PathBuf,
}

impl WikiLayout {
    fn new(root: PathBuf, game: &GameName) -> Self {
        let games_dir = root.join(WIKI_GAMES_DIR);
        let game_dir = games_dir.join(game.as_str());
        let document = game_dir.join(format!("{game}-GDD.md"));
        Self {
            root,
            games_dir,
            game_dir,
            document,
        }
    }
}

/// Immutable description of the solution to bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionLayout {
    game: GameName,
    names: ProjectNames,
    root: PathBuf,
    source_root: PathBuf,
    test_root: PathBuf,
    solution_dir: PathBuf,
    solution_file: PathBuf,
    projects: [ProjectSpec; 3],
    wiki: Option<WikiLayout>,
}

impl SolutionLayout {
    /// Layout with default options rooted at `root`.
    pub fn new(game: GameName, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self::build(game, root, LayoutOptions::default())
    }

    /// Layout with custom source/test directories and wiki location.
    ///
    /// Source and test directories must be relative to the root.
    pub fn with_options(
        game: GameName,
        root: impl Into<PathBuf>,
        options: LayoutOptions,
    ) -> Result<Self, DomainError> {
        for (label, dir) in [("source", &options.source_dir), ("test", &options.test_dir)] {
            if dir.is_absolute() {
                return Err(DomainError::InvalidLayout(format!(
                    "{label} directory must be relative to the root: {}",
                    dir.display()
                )));
            }
            if dir.as_os_str().is_empty() {
                return Err(DomainError::InvalidLayout(format!(
                    "{label} directory cannot be empty"
                )));
            }
        }
        if options.source_dir == options.test_dir {
            return Err(DomainError::InvalidLayout(
                "source and test directories must differ".into(),
            ));
        }

        Ok(Self::build(game, root.into(), options))
    }

    fn build(game: GameName, root: PathBuf, options: LayoutOptions) -> Self {
        let names = ProjectNames::derive(&game);

        let source_root = root.join(&options.source_dir);
        let test_root = root.join(&options.test_dir);
        let solution_dir = source_root.join(game.as_str());
        let solution_file =
            solution_dir.join(format!("{}.{}", names.solution, SOLUTION_EXTENSION));

        let projects = [
            ProjectSpec::new(
                ProjectKind::Library,
                &names.core,
                solution_dir.join(&names.core),
            ),
            ProjectSpec::new(
                ProjectKind::Executable,
                &names.console,
                solution_dir.join(&names.console),
            ),
            ProjectSpec::new(
                ProjectKind::TestFramework,
                &names.tests,
                test_root.join(&names.tests),
            ),
        ];

        let wiki = match options.wiki {
            WikiLocation::Sibling(dir_name) => {
                Some(WikiLayout::new(root.join("..").join(dir_name), &game))
            }
            WikiLocation::At(path) => Some(WikiLayout::new(path, &game)),
            WikiLocation::Disabled => None,
        };

        Self {
            game,
            names,
            root,
            source_root,
            test_root,
            solution_dir,
            solution_file,
            projects,
            wiki,
        }
    }

    pub fn game(&self) -> &GameName {
        &self.game
    }

    pub fn names(&self) -> &ProjectNames {
        &self.names
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn test_root(&self) -> &Path {
        &self.test_root
    }

    pub fn solution_dir(&self) -> &Path {
        &self.solution_dir
    }

    pub fn solution_file(&self) -> &Path {
        &self.solution_file
    }

    /// Projects in provisioning order: library, executable, test.
    pub fn projects(&self) -> &[ProjectSpec] {
        &self.projects
    }

    pub fn project(&self, kind: ProjectKind) -> &ProjectSpec {
        match kind {
            ProjectKind::Library => &self.projects[0],
            ProjectKind::Executable => &self.projects[1],
            ProjectKind::TestFramework => &self.projects[2],
        }
    }

    pub fn wiki(&self) -> Option<&WikiLayout> {
        self.wiki.as_ref()
    }

    /// Directories the Directory Ensurer must guarantee, parents first.
    pub fn directories(&self) -> Vec<PathBuf> {
        let mut dirs = vec![
            self.source_root.clone(),
            self.test_root.clone(),
            self.solution_dir.clone(),
        ];
        dirs.extend(self.projects.iter().map(|p| p.dir.clone()));
        dirs
    }
}
