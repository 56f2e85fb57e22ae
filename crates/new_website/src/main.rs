// crates/new_website/src/main.rs

use std::process::{self, ExitCode};

use new_website::config::{build_cli, ScaffoldConfig};
use new_website::logging::init_logging;
use new_website::{render_error, INTERRUPTED_MESSAGE};

/// Any panic is reported with a backtrace and exits 1 instead of Rust's default 101.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_hook(info);
        eprintln!("{}", std::backtrace::Backtrace::force_capture());
        process::exit(1);
    }));
}

fn main() -> ExitCode {
    install_panic_hook();

    if let Err(err) = ctrlc::set_handler(|| {
        eprintln!("{}", INTERRUPTED_MESSAGE);
        process::exit(1);
    }) {
        eprintln!("Warning: could not install interrupt handler: {}", err);
    }

    let matches = build_cli().get_matches();
    let config = match ScaffoldConfig::from_matches(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            return ExitCode::from(1);
        }
    };

    if config.debug {
        println!("Enabling debugging output.");
    }
    if config.verbose {
        println!("Enabling verbose output.");
    }

    if let Err(err) = init_logging(config.verbose, config.debug) {
        eprintln!("{}", render_error(&err));
        return ExitCode::from(1);
    }

    match new_website::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            ExitCode::from(1)
        }
    }
}
