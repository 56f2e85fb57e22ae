// crates/run_command/src/lib.rs

//! Thin wrapper around `std::process::Command` that captures output and
//! turns a nonzero exit status into an error value.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Captured output of a command that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Failure to run an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process ran but exited with a nonzero status (or was killed by a signal,
    /// in which case `exit_code` is `None`).
    #[error("`{command}` failed with {}", describe_exit(.exit_code))]
    CommandFailed {
        command: String,
        stdout: String,
        stderr: String,
        exit_code: Option<i32>,
    },
    /// The process could not be started at all.
    #[error("could not run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

impl CommandError {
    /// Captured stdout/stderr, if the process got far enough to produce any.
    pub fn captured_output(&self) -> Option<(&str, &str)> {
        match self {
            CommandError::CommandFailed { stdout, stderr, .. } => Some((stdout, stderr)),
            CommandError::Spawn { .. } => None,
        }
    }
}

/// Executes external programs.
///
/// The scaffolding steps only ever talk to this trait, so tests can swap in a
/// recorder instead of spawning real processes.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError>;
}

/// Runs commands as child processes inside a fixed working directory.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    workdir: PathBuf,
}

impl ProcessRunner {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, CommandError> {
        let command = CommandLine { program, args };
        // Shown by `--debug` in the CLI.
        debug!(target: "dump", "running {}", command);

        let output = Command::new(program)
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(CommandOutput { stdout, stderr })
        } else {
            Err(CommandError::CommandFailed {
                command: command.to_string(),
                stdout,
                stderr,
                exit_code: output.status.code(),
            })
        }
    }
}

/// Display helper that renders `program arg1 arg2 ...`.
pub struct CommandLine<'a> {
    pub program: &'a str,
    pub args: &'a [&'a str],
}

impl fmt::Display for CommandLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program)?;
        for arg in self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
