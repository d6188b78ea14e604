//! Toolchain adapter that spawns the external tool as a child process.

use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

use tracing::{debug, instrument, trace};

use gamestrap_core::{
    application::{
        ApplicationError,
        ports::{ToolOutcome, Toolchain},
    },
    domain::ToolCommand,
    error::GamestrapResult,
};

/// Runs each [`ToolCommand`] as `<program> <args...>` and waits for it.
///
/// Stdout and stderr are captured so failures can be reported with the
/// tool's own diagnostic. Stdin is closed; the tool must not prompt.
#[derive(Debug, Clone)]
pub struct ProcessToolchain {
    program: OsString,
    envs: Vec<(OsString, OsString)>,
}

impl ProcessToolchain {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            envs: Vec::new(),
        }
    }

    /// The `dotnet` CLI with its first-run banner suppressed.
    pub fn dotnet() -> Self {
        Self::new("dotnet").with_env("DOTNET_NOLOGO", "1")
    }

    pub fn with_env(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }
}

impl Default for ProcessToolchain {
    fn default() -> Self {
        Self::dotnet()
    }
}

impl Toolchain for ProcessToolchain {
    #[instrument(skip_all, fields(step = %command))]
    fn run(&self, command: &ToolCommand) -> GamestrapResult<ToolOutcome> {
        let args = command.args();
        debug!(program = ?self.program, args = ?args, "Spawning toolchain");

        let output = Command::new(&self.program)
            .args(&args)
            .envs(self.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::ToolUnavailable {
                program: self.program.to_string_lossy().into_owned(),
                reason: e.to_string(),
            })?;

        let outcome = ToolOutcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(code = ?outcome.code, stderr = %outcome.stderr.trim(), "Toolchain exited");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamestrap_core::domain::{GameName, SolutionLayout};
    use gamestrap_core::error::GamestrapError;

    fn command() -> ToolCommand {
        let layout = SolutionLayout::new(GameName::parse("Pong").unwrap(), ".");
        ToolCommand::new_solution(&layout)
    }

    #[test]
    fn default_is_dotnet() {
        assert_eq!(ProcessToolchain::default().program(), "dotnet");
    }

    #[test]
    fn missing_program_is_unavailable() {
        let toolchain = ProcessToolchain::new("gamestrap-definitely-not-installed");
        let err = toolchain.run(&command()).unwrap_err();
        assert!(matches!(
            err,
            GamestrapError::Application(ApplicationError::ToolUnavailable { ref program, .. })
                if program == "gamestrap-definitely-not-installed"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_captured() {
        // `false` ignores its arguments and exits 1.
        let outcome = ProcessToolchain::new("false").run(&command()).unwrap();
        assert_eq!(outcome.code, Some(1));
        assert!(!outcome.succeeded());

        let outcome = ProcessToolchain::new("true").run(&command()).unwrap();
        assert!(outcome.succeeded());
    }

    #[cfg(unix)]
    #[test]
    fn stdout_is_captured() {
        let outcome = ProcessToolchain::new("echo").run(&command()).unwrap();
        assert!(outcome.stdout.starts_with("new sln -n Pong"));
    }
}
