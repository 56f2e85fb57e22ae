// crates/new_website/src/steps.rs

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::ScaffoldConfig;
use crate::git::Git;
use crate::logging::PROGRESS;
use rewrite_template::{copy_file, rewrite_file};
use run_command::CommandRunner;

/// Path of the template submodule inside the new project.
pub const TEMPLATE_DIR: &str = "website";

/// Placeholder names used throughout the template repository.
const TEMPLATE_JS: &str = "website.js";
const TEMPLATE_CSS: &str = "website.css";

pub const README_FILE: &str = "README.rst";
pub const MAKEFILE: &str = "makefile";
pub const ROLLUP_CONFIG: &str = "rollup.config.js";
pub const NODE_MODULES: &str = "node_modules";

const SRC_DIRS: [&str; 4] = ["src", "src/pages", "src/css", "src/js"];

/// Title block plus placeholder body for `README.rst`.
///
/// The rule lines are as long as the name is in characters, not bytes.
pub fn readme_contents(project_name: &str) -> String {
    let bar = "=".repeat(project_name.chars().count());
    format!(
        "{bar}\n{name}\n{bar}\n\nTODO: add your readme content here.\n",
        bar = bar,
        name = project_name
    )
}

/// Runs each scaffolding step against a freshly created project root.
///
/// Every step writes its files and then commits them, so a failure part-way
/// leaves the history of every step that finished.
pub struct Scaffolder<'a, R: CommandRunner> {
    root: &'a Path,
    config: &'a ScaffoldConfig,
    git: Git<'a, R>,
}

impl<'a, R: CommandRunner> Scaffolder<'a, R> {
    pub fn new(root: &'a Path, config: &'a ScaffoldConfig, runner: &'a R) -> Self {
        Self {
            root,
            config,
            git: Git::new(runner),
        }
    }

    pub fn run_all(&self) -> Result<()> {
        self.init_repository()?;
        self.create_readme()?;
        self.copy_makefile()?;
        self.add_rollup_config()?;
        self.add_node_modules_link()?;
        self.add_src_files()?;
        Ok(())
    }

    fn project_path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    fn template_path(&self, rel: &str) -> PathBuf {
        self.root.join(TEMPLATE_DIR).join(rel)
    }

    fn js_name(&self) -> String {
        format!("{}.js", self.config.project_name)
    }

    /// `git init`, add the template as a submodule, commit.
    pub fn init_repository(&self) -> Result<()> {
        info!(target: PROGRESS, "Initializing new git repository");
        self.git
            .init()
            .context("Error encountered initializing git repository.")?;

        info!(target: PROGRESS, "Adding website repo as submodule.");
        self.git
            .submodule_add(&self.config.template_url, TEMPLATE_DIR)
            .context("Error encountered adding git submodule.")?;

        info!(target: PROGRESS, "Committing the new submodule into the repo.");
        self.git
            .commit("Add website submodule.")
            .context("Error encountered committing submodule.")?;
        Ok(())
    }

    pub fn create_readme(&self) -> Result<()> {
        info!(target: PROGRESS, "Writing a template README file for the project.");
        let path = self.project_path(README_FILE);
        fs::write(&path, readme_contents(&self.config.project_name))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(target: PROGRESS, "Committing README to repository.");
        self.git
            .add(README_FILE)
            .context("Failed to stage readme in repo.")?;
        self.git
            .commit("Add readme template.")
            .context("Failed to commit readme to repo.")?;
        Ok(())
    }

    pub fn copy_makefile(&self) -> Result<()> {
        info!(target: PROGRESS, "Copying project makefile from submodule into project repo.");
        copy_file(
            &self.template_path("project.mk"),
            &self.project_path(MAKEFILE),
        )?;

        info!(target: PROGRESS, "Committing makefile to repository.");
        self.git
            .add(MAKEFILE)
            .context("Failed to stage makefile in repo.")?;
        self.git
            .commit("Add project makefile template.")
            .context("Failed to commit makefile to repo.")?;
        Ok(())
    }

    pub fn add_rollup_config(&self) -> Result<()> {
        info!(target: PROGRESS, "Adding configuration file for rollup.js");
        let js_name = self.js_name();
        rewrite_file(
            &self.template_path(ROLLUP_CONFIG),
            &self.project_path(ROLLUP_CONFIG),
            &[(TEMPLATE_JS, js_name.as_str())],
        )?;

        info!(target: PROGRESS, "Committing rollup config to repository.");
        self.git
            .add(ROLLUP_CONFIG)
            .context("Failed to stage rollup config in repo.")?;
        self.git
            .commit("Add rollup.js configuration file.")
            .context("Failed to commit rollup config to repo.")?;
        Ok(())
    }

    pub fn add_node_modules_link(&self) -> Result<()> {
        info!(target: PROGRESS, "Creating node_modules link.");
        let target = Path::new(TEMPLATE_DIR).join(NODE_MODULES);
        let link = self.project_path(NODE_MODULES);
        symlink_dir(&target, &link).with_context(|| {
            format!(
                "Failed to create link to node_modules dir: {} -> {}",
                link.display(),
                target.display()
            )
        })?;

        info!(target: PROGRESS, "Committing node_modules link to repository.");
        self.git
            .add(NODE_MODULES)
            .context("Failed to stage node_modules link in repo.")?;
        self.git
            .commit("Add link to node_modules dir in submodule.")
            .context("Failed to commit node_modules link to repo.")?;
        Ok(())
    }

    pub fn add_src_files(&self) -> Result<()> {
        info!(target: PROGRESS, "Creating src directory structure.");
        for dir in SRC_DIRS {
            let path = self.project_path(dir);
            fs::create_dir(&path)
                .with_context(|| format!("Failed to create directory {}", path.display()))?;
        }

        let name = &self.config.project_name;

        info!(target: PROGRESS, "Adding main css file template.");
        copy_file(
            &self.template_path("src/css/website.scss"),
            &self.project_path(&format!("src/css/{}.scss", name)),
        )?;

        info!(target: PROGRESS, "Adding main javascript file template.");
        let js_name = self.js_name();
        copy_file(
            &self.template_path("src/js/website.js"),
            &self.project_path(&format!("src/js/{}", js_name)),
        )?;

        info!(target: PROGRESS, "Adding index.html template.");
        let css_name = format!("{}.css", name);
        rewrite_file(
            &self.template_path("src/pages/index.html"),
            &self.project_path("src/pages/index.html"),
            &[(TEMPLATE_CSS, css_name.as_str()), (TEMPLATE_JS, js_name.as_str())],
        )?;

        info!(target: PROGRESS, "Committing new src files to repository.");
        self.git
            .add("src")
            .context("Failed to stage src dir in repo.")?;
        self.git
            .commit("Add template source files.")
            .context("Failed to commit src dir to repo.")?;
        Ok(())
    }
}

#[cfg(unix)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_dir(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}
