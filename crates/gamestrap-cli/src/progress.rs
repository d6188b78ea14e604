//! Spinner decorator for the toolchain port.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use gamestrap_core::{
    application::ports::{ToolOutcome, Toolchain},
    domain::ToolCommand,
    error::GamestrapResult,
};

/// Wraps a [`Toolchain`] and shows a spinner while each command runs.
///
/// Finished steps are printed above the spinner as `✓ <step>`.
pub struct ProgressToolchain {
    inner: Box<dyn Toolchain>,
    spinner: ProgressBar,
}

impl ProgressToolchain {
    pub fn new(inner: Box<dyn Toolchain>) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        Self { inner, spinner }
    }

    #[cfg(test)]
    fn hidden(inner: Box<dyn Toolchain>) -> Self {
        Self {
            inner,
            spinner: ProgressBar::hidden(),
        }
    }
}

impl Toolchain for ProgressToolchain {
    fn run(&self, command: &ToolCommand) -> GamestrapResult<ToolOutcome> {
        self.spinner.set_message(format!("{}...", command.describe()));
        self.spinner.enable_steady_tick(Duration::from_millis(100));

        let result = self.inner.run(command);

        self.spinner.disable_steady_tick();
        match &result {
            Ok(outcome) if outcome.succeeded() => {
                self.spinner.println(format!("\u{2713} {}", command.describe()));
            }
            _ => self.spinner.println(format!("\u{2717} {}", command.describe())),
        }
        self.spinner.set_message("");
        result
    }
}

impl Drop for ProgressToolchain {
    fn drop(&mut self) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamestrap_adapters::RecordingToolchain;
    use gamestrap_core::domain::{GameName, SolutionLayout};

    #[test]
    fn forwards_commands_and_outcomes() {
        let recorder =
            RecordingToolchain::new().failing_at(1, ToolOutcome::failure(3, "boom"));
        let toolchain = ProgressToolchain::hidden(Box::new(recorder.clone()));
        let layout = SolutionLayout::new(GameName::parse("Pong").unwrap(), ".");
        let command = ToolCommand::new_solution(&layout);

        assert!(toolchain.run(&command).unwrap().succeeded());
        assert_eq!(toolchain.run(&command).unwrap().code, Some(3));
        assert_eq!(recorder.calls().len(), 2);
    }
}
