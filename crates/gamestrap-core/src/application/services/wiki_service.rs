//! Wiki Stub Writer - phase 4.
//!
//! Best-effort: nothing here can fail the run. Problems are returned as a
//! [`WikiOutcome`] and logged, and the caller decides how loudly to report
//! them.
//!
//! ```text
//! wiki root missing? ──yes──▶ WikiMissing
//!        │ no
//!        ▼
//! ensure Games/ ─▶ ensure Games/<Game>/ ──not a dir──▶ Failed
//!        │
//!        ▼
//! document exists? ──yes──▶ AlreadyExists (untouched)
//!        │ no
//!        ▼
//! render + write ──error──▶ Failed
//!        │
//!        ▼
//!     Created
//! ```

use std::path::PathBuf;

use serde::Serialize;
use tracing::{error, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{SolutionLayout, render_design_document},
};

/// What the wiki phase did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WikiOutcome {
    /// The wiki phase was switched off.
    Disabled,
    /// No wiki checkout at the expected location.
    WikiMissing { root: PathBuf },
    /// The design document was written.
    Created { path: PathBuf },
    /// The design document was already there and was left alone.
    AlreadyExists { path: PathBuf },
    /// Directory creation or the write failed.
    Failed { path: PathBuf, reason: String },
}

impl WikiOutcome {
    /// `true` for outcomes the user should be warned about.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::WikiMissing { .. } | Self::Failed { .. })
    }
}

pub struct WikiStubWriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> WikiStubWriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    #[instrument(skip_all, fields(game = %layout.game()))]
    pub fn write(&self, layout: &SolutionLayout) -> WikiOutcome {
        let Some(wiki) = layout.wiki() else {
            info!("Wiki stub disabled");
            return WikiOutcome::Disabled;
        };

        if !self.filesystem.is_dir(&wiki.root) {
            warn!(root = %wiki.root.display(), "Wiki directory not found, skipping design document");
            return WikiOutcome::WikiMissing {
                root: wiki.root.clone(),
            };
        }

        for dir in [&wiki.games_dir, &wiki.game_dir] {
            if self.filesystem.is_dir(dir) {
                continue;
            }
            if let Err(e) = self.filesystem.create_dir_all(dir) {
                error!(path = %dir.display(), error = %e, "Failed to create wiki directory");
                return WikiOutcome::Failed {
                    path: dir.clone(),
                    reason: e.to_string(),
                };
            }
        }

        if !self.filesystem.is_dir(&wiki.game_dir) {
            error!(path = %wiki.game_dir.display(), "Wiki directory missing after creation");
            return WikiOutcome::Failed {
                path: wiki.game_dir.clone(),
                reason: "directory does not exist after creation".into(),
            };
        }

        if self.filesystem.exists(&wiki.document) {
            info!(path = %wiki.document.display(), "Design document already exists, leaving it untouched");
            return WikiOutcome::AlreadyExists {
                path: wiki.document.clone(),
            };
        }

        let content = render_design_document(layout);
        match self.filesystem.write_file(&wiki.document, &content) {
            Ok(()) => {
                info!(path = %wiki.document.display(), "Design document created");
                WikiOutcome::Created {
                    path: wiki.document.clone(),
                }
            }
            Err(e) => {
                error!(path = %wiki.document.display(), error = %e, "Failed to write design document");
                WikiOutcome::Failed {
                    path: wiki.document.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::domain::{GameName, LayoutOptions, WikiLocation};

    fn layout() -> SolutionLayout {
        let options = LayoutOptions {
            wiki: WikiLocation::At(PathBuf::from("wiki")),
            ..LayoutOptions::default()
        };
        SolutionLayout::with_options(GameName::parse("Pong").unwrap(), "r", options).unwrap()
    }

    #[test]
    fn missing_wiki_creates_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .with(eq(PathBuf::from("wiki")))
            .return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        assert_eq!(
            WikiStubWriter::new(&fs).write(&layout()),
            WikiOutcome::WikiMissing {
                root: PathBuf::from("wiki")
            }
        );
    }

    #[test]
    fn post_creation_check_failure_is_reported_not_raised() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .with(eq(PathBuf::from("wiki")))
            .return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().never();

        let outcome = WikiStubWriter::new(&fs).write(&layout());
        assert_eq!(
            outcome,
            WikiOutcome::Failed {
                path: PathBuf::from("wiki/Games/Pong"),
                reason: "directory does not exist after creation".into(),
            }
        );
        assert!(outcome.is_advisory());
    }

    #[test]
    fn directory_creation_error_is_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .with(eq(PathBuf::from("wiki")))
            .return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        assert!(matches!(
            WikiStubWriter::new(&fs).write(&layout()),
            WikiOutcome::Failed { path, .. } if path == PathBuf::from("wiki/Games")
        ));
    }

    #[test]
    fn existing_document_is_not_rewritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists()
            .with(eq(PathBuf::from("wiki/Games/Pong/Pong-GDD.md")))
            .return_const(true);
        fs.expect_write_file().never();

        assert!(matches!(
            WikiStubWriter::new(&fs).write(&layout()),
            WikiOutcome::AlreadyExists { .. }
        ));
    }

    #[test]
    fn new_document_gets_rendered_template() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .withf(|path, content| {
                path.ends_with("Pong-GDD.md") && content.starts_with("# Pong - Game Design Document")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        assert_eq!(
            WikiStubWriter::new(&fs).write(&layout()),
            WikiOutcome::Created {
                path: PathBuf::from("wiki/Games/Pong/Pong-GDD.md")
            }
        );
    }

    #[test]
    fn disabled_wiki_touches_nothing() {
        let options = LayoutOptions {
            wiki: WikiLocation::Disabled,
            ..LayoutOptions::default()
        };
        let layout =
            SolutionLayout::with_options(GameName::parse("Pong").unwrap(), "r", options).unwrap();
        let fs = MockFilesystem::new();

        assert_eq!(WikiStubWriter::new(&fs).write(&layout), WikiOutcome::Disabled);
    }
}
