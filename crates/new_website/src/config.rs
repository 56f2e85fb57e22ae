// crates/new_website/src/config.rs

use anyhow::{bail, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};

/// Repository added as the `website` submodule unless overridden.
pub const DEFAULT_TEMPLATE_URL: &str = "https://bitbucket.org/fret/website.git";

/// Environment variable that can stand in for `--template-url`.
pub const TEMPLATE_URL_ENV: &str = "NEW_WEBSITE_TEMPLATE_URL";

/// Runtime configuration, built once from the command line and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub destination: PathBuf,
    pub project_name: String,
    pub template_url: String,
    pub verbose: bool,
    pub debug: bool,
}

pub fn build_cli() -> Command {
    Command::new("new_website")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create a new website project.")
        .arg(
            Arg::new("destination")
                .value_name("PROJECT_DIR")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Destination to build your new project in."),
        )
        .arg(
            Arg::new("project_name")
                .long("project-name")
                .value_name("NAME")
                .num_args(1)
                .help(
                    "Use this to specify a project name in case it differs from the \
                     given destination directory.",
                ),
        )
        .arg(
            Arg::new("template_url")
                .long("template-url")
                .value_name("URL")
                .num_args(1)
                .env(TEMPLATE_URL_ENV)
                .default_value(DEFAULT_TEMPLATE_URL)
                .help("Repository to add as the website submodule."),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debugging output.")
                .action(ArgAction::SetTrue),
        )
}

impl ScaffoldConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let destination = matches
            .get_one::<PathBuf>("destination")
            .cloned()
            .unwrap_or_default();

        // An empty --project-name behaves as if it was never given.
        let project_name = match matches.get_one::<String>("project_name") {
            Some(name) if !name.is_empty() => name.clone(),
            _ => derive_project_name(&destination)?,
        };

        let template_url = matches
            .get_one::<String>("template_url")
            .cloned()
            .unwrap_or_else(|| DEFAULT_TEMPLATE_URL.to_string());

        Ok(Self {
            destination,
            project_name,
            template_url,
            verbose: matches.get_flag("verbose"),
            debug: matches.get_flag("debug"),
        })
    }
}

/// The project name implied by a destination path: its final component.
pub fn derive_project_name(destination: &Path) -> Result<String> {
    match destination.file_name() {
        Some(name) => Ok(name.to_string_lossy().into_owned()),
        None => bail!(
            "Cannot derive a project name from '{}'; pass --project-name.",
            destination.display()
        ),
    }
}
