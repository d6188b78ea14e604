//! Directory Ensurer - phase 1.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{application::ports::Filesystem, error::GamestrapResult};

/// Creates missing directories; existing ones are left alone.
pub struct DirectoryEnsurer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryEnsurer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Ensure every path exists as a directory, creating ancestors as needed.
    ///
    /// Returns the paths that did not exist before. The first creation
    /// failure aborts with an error naming the path.
    #[instrument(skip_all)]
    pub fn ensure<P: AsRef<Path>>(&self, dirs: &[P]) -> GamestrapResult<Vec<PathBuf>> {
        let mut created = Vec::new();

        for dir in dirs {
            let dir = dir.as_ref();
            if self.filesystem.is_dir(dir) {
                debug!(path = %dir.display(), "Directory already exists");
                continue;
            }

            self.filesystem.create_dir_all(dir)?;
            info!(path = %dir.display(), "Created directory");
            created.push(dir.to_path_buf());
        }

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};
    use crate::error::GamestrapError;

    #[test]
    fn existing_directories_are_not_recreated() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();

        let created = DirectoryEnsurer::new(&fs).ensure(&["src", "tests"]).unwrap();
        assert!(created.is_empty());
    }

    #[test]
    fn missing_directories_are_created_and_reported() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .with(eq(PathBuf::from("src")))
            .return_const(true);
        fs.expect_is_dir()
            .with(eq(PathBuf::from("tests")))
            .return_const(false);
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("tests")))
            .times(1)
            .returning(|_| Ok(()));

        let created = DirectoryEnsurer::new(&fs).ensure(&["src", "tests"]).unwrap();
        assert_eq!(created, vec![PathBuf::from("tests")]);
    }

    #[test]
    fn creation_failure_aborts_and_names_path() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_create_dir_all()
            .with(eq(PathBuf::from("src")))
            .times(1)
            .returning(|p| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "read-only filesystem".into(),
                }
                .into())
            });

        let err = DirectoryEnsurer::new(&fs)
            .ensure(&["src", "tests"])
            .unwrap_err();
        match err {
            GamestrapError::Application(ApplicationError::FilesystemError { path, .. }) => {
                assert_eq!(path, PathBuf::from("src"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
