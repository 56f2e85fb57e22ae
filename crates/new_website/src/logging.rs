// crates/new_website/src/logging.rs

use anyhow::{anyhow, Result};
use std::io::IsTerminal;
use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::prelude::*;

/// Target of step-by-step progress messages, enabled by `--verbose`.
///
/// The lower-level crates log under the same literal targets.
pub const PROGRESS: &str = "progress";

/// Target of external command output and other diagnostics, enabled by `--debug`.
pub const DUMP: &str = "dump";

/// Each flag switches on its own target; warnings and errors always show.
pub fn output_filter(verbose: bool, debug: bool) -> Targets {
    let mut targets = Targets::new().with_default(Level::WARN);
    if verbose {
        targets = targets.with_target(PROGRESS, Level::INFO);
    }
    if debug {
        targets = targets.with_target(DUMP, Level::DEBUG);
    }
    targets
}

/// Installs the global stdout subscriber. Call once, before the first step runs.
pub fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(output_filter(verbose, debug))
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_filter_only_shows_warnings() {
        let filter = output_filter(false, false);
        assert!(!filter.would_enable(PROGRESS, &Level::INFO));
        assert!(!filter.would_enable(DUMP, &Level::DEBUG));
        assert!(filter.would_enable(PROGRESS, &Level::WARN));
        assert!(filter.would_enable("new_website::steps", &Level::ERROR));
    }

    #[test]
    fn test_verbose_does_not_enable_dumps() {
        let filter = output_filter(true, false);
        assert!(filter.would_enable(PROGRESS, &Level::INFO));
        assert!(!filter.would_enable(DUMP, &Level::DEBUG));
    }

    #[test]
    fn test_debug_does_not_enable_progress() {
        let filter = output_filter(false, true);
        assert!(!filter.would_enable(PROGRESS, &Level::INFO));
        assert!(filter.would_enable(DUMP, &Level::DEBUG));
    }

    #[test]
    fn test_both_flags() {
        let filter = output_filter(true, true);
        assert!(filter.would_enable(PROGRESS, &Level::INFO));
        assert!(filter.would_enable(DUMP, &Level::DEBUG));
    }
}
