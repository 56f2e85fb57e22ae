// crates/new_website/src/preflight.rs

//! Checks that run before anything is written to disk.

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::logging::DUMP;

/// Locates the `git` executable on `PATH`.
pub fn ensure_git() -> Result<PathBuf> {
    let git = which::which("git").map_err(|err| {
        anyhow!(
            "git was not found on PATH ({}). Install git before creating a project.",
            err
        )
    })?;
    debug!(target: DUMP, binary = %git.display(), "git detected");
    Ok(git)
}
