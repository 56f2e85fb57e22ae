// crates/new_website/src/lib.rs

pub mod config;
pub mod git;
pub mod logging;
pub mod preflight;
pub mod steps;

use anyhow::{Context, Result};
use std::env;
use std::fmt::Write as _;
use tracing::debug;

use crate::logging::DUMP;

pub use config::ScaffoldConfig;
use prepare_destination::prepare_destination;
use run_command::{CommandError, ProcessRunner};
pub use steps::Scaffolder;

/// Printed when the run is cut short with Ctrl-C.
pub const INTERRUPTED_MESSAGE: &str = "...interrupted by user, exiting.";

/// Creates the project described by `config`.
///
/// The destination is checked and created before anything else is written,
/// then becomes the process working directory for the remaining steps.
pub fn run(config: &ScaffoldConfig) -> Result<()> {
    preflight::ensure_git()?;

    let root = prepare_destination(&config.destination)?;

    debug!(target: DUMP, "Changing work-dir to destination directory.");
    env::set_current_dir(&root)
        .with_context(|| format!("Failed to change directory to {}", root.display()))?;

    debug!(target: DUMP, "Using \"{}\" as project name.", config.project_name);
    let runner = ProcessRunner::new(&root);
    Scaffolder::new(&root, config, &runner).run_all()
}

/// Formats an error for the terminal: the message chain, then any output the
/// failing command produced.
pub fn render_error(err: &anyhow::Error) -> String {
    let mut out = err.to_string();
    for cause in err.chain().skip(1) {
        let _ = write!(out, "\n  caused by: {}", cause);
    }

    let captured = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<CommandError>())
        .and_then(CommandError::captured_output);
    if let Some((stdout, stderr)) = captured {
        for stream in [stdout, stderr] {
            let stream = stream.trim_end();
            if !stream.is_empty() {
                out.push('\n');
                out.push_str(stream);
            }
        }
    }
    out
}
