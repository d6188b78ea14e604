//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gamestrap-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ToolCommand;
use crate::error::GamestrapResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gamestrap_adapters::filesystem::LocalFilesystem` (production)
/// - `gamestrap_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> GamestrapResult<()>;

    /// Write content to a file, replacing anything already there.
    fn write_file(&self, path: &Path, content: &str) -> GamestrapResult<()>;
}

/// Port for the external project/solution toolchain.
///
/// Implemented by:
/// - `gamestrap_adapters::toolchain::ProcessToolchain` (spawns the real tool)
/// - `gamestrap_adapters::toolchain::RecordingToolchain` (testing)
///
/// `Err` means the tool could not be run at all. A tool that ran and reported
/// failure is an `Ok` outcome whose [`ToolOutcome::succeeded`] is `false`.
#[cfg_attr(test, mockall::automock)]
pub trait Toolchain: Send + Sync {
    fn run(&self, command: &ToolCommand) -> GamestrapResult<ToolOutcome>;
}

/// What the toolchain reported for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutcome {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutcome {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stderr: stderr.into(),
            ..Self::default()
        }
    }

    pub fn succeeded(&self) -> bool {
        self.code == Some(0)
    }

    /// Best available explanation of a failure: stderr, else stdout.
    pub fn diagnostic(&self) -> String {
        [&self.stderr, &self.stdout]
            .into_iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
            .unwrap_or("the tool produced no output")
            .to_string()
    }
}
