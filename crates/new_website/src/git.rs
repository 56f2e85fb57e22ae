// crates/new_website/src/git.rs

use run_command::{CommandError, CommandOutput, CommandRunner};
use tracing::debug;

use crate::logging::DUMP;

/// The handful of git operations the scaffolder needs, run through a [`CommandRunner`].
pub struct Git<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> Git<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    pub fn init(&self) -> Result<CommandOutput, CommandError> {
        self.git(&["init"])
    }

    pub fn submodule_add(&self, url: &str, path: &str) -> Result<CommandOutput, CommandError> {
        self.git(&["submodule", "add", url, path])
    }

    pub fn add(&self, path: &str) -> Result<CommandOutput, CommandError> {
        self.git(&["add", path])
    }

    pub fn commit(&self, message: &str) -> Result<CommandOutput, CommandError> {
        self.git(&["commit", "-m", message])
    }

    fn git(&self, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let output = self.runner.run("git", args)?;
        let stdout = output.stdout.trim_end();
        if !stdout.is_empty() {
            debug!(target: DUMP, "{}", stdout);
        }
        Ok(output)
    }
}
