// src/workflow.rs
//! The project initialization workflow.
//!
//! Phases run strictly in order and the first failure aborts the rest:
//! help, name, repository, validation, directory preparation, emptiness
//! check, clone, manifest rewrite, cleanup, completion notice, editor.

#![deny(missing_docs)]

use crate::cli::{InvocationArgs, USAGE};
use crate::config::Config;
use crate::error::{ScaffoldError, ScaffoldResult};
use crate::naming::{is_valid_package_name, resolve_project_name};
use crate::normalize::{self, LOCKFILES, MANIFEST};
use crate::prompt::{Prompter, name_or_default};
use crate::registry::TemplateRegistry;
use crate::shell::Shell;
use crate::target::TargetDir;
use colored::Colorize;
use std::path::PathBuf;

/// How a run ended when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Usage text was printed; nothing else happened.
    HelpShown,
    /// A project was created.
    Scaffolded {
        /// Name written to the manifest.
        name: String,
        /// Directory the template was cloned into.
        path: PathBuf,
        /// Whether the editor was launched.
        opened_in_editor: bool,
    },
}

/// One invocation of the scaffolder with its collaborators.
pub struct Workflow<'a> {
    cwd: PathBuf,
    config: &'a Config,
    registry: &'a TemplateRegistry,
    prompter: &'a dyn Prompter,
    shell: &'a dyn Shell,
}

impl<'a> Workflow<'a> {
    /// Bind a workflow to `cwd` and its collaborators.
    pub fn new(
        cwd: PathBuf,
        config: &'a Config,
        registry: &'a TemplateRegistry,
        prompter: &'a dyn Prompter,
        shell: &'a dyn Shell,
    ) -> Self {
        Self {
            cwd,
            config,
            registry,
            prompter,
            shell,
        }
    }

    /// Run every phase for `args`.
    pub fn run(&self, args: &InvocationArgs) -> ScaffoldResult<Outcome> {
        if args.help {
            println!("{USAGE}");
            return Ok(Outcome::HelpShown);
        }

        let raw_name = self.project_name(args)?;
        let source = self.repo_source(args)?;

        let name = resolve_project_name(&raw_name, &self.cwd);
        if !is_valid_package_name(&name) {
            return Err(ScaffoldError::InvalidProjectName(name).into());
        }

        let target = TargetDir::new(&raw_name, &self.cwd);
        target.prepare()?;
        target.ensure_empty()?;

        println!("{}", "Copying files...".blue());
        tracing::info!(source, dest = %target.path().display(), "cloning");
        self.shell.clone_repo(source, target.path())?;

        println!("{}", "Parsing files...".blue());
        normalize::rewrite_manifest_name(&target.path().join(MANIFEST), &name)?;

        println!("{}", "Performing cleanup...".blue());
        let mut artifacts = vec![target.path().join(".git")];
        artifacts.extend(LOCKFILES.iter().map(|f| target.path().join(f)));
        normalize::remove_artifacts(&artifacts)?;
        let bin_removal = normalize::remove_in_background(target.path().join("bin"));

        println!(
            "{}",
            format!("The setup is done in \"{name}\" directory!").green()
        );

        let opened = self.offer_editor(&target);
        if bin_removal.join().is_err() {
            tracing::debug!("background removal panicked");
        }

        Ok(Outcome::Scaffolded {
            name,
            path: target.path().to_path_buf(),
            opened_in_editor: opened?,
        })
    }

    fn project_name(&self, args: &InvocationArgs) -> ScaffoldResult<String> {
        match args.project_name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => {
                let default = &self.config.default_name;
                let answer = self.prompter.project_name(default)?;
                Ok(name_or_default(&answer, default))
            }
        }
    }

    /// A template alias takes precedence over a direct repo link.
    fn repo_source<'b>(&'b self, args: &'b InvocationArgs) -> ScaffoldResult<&'b str> {
        if let Some(alias) = args.template.as_deref() {
            return self.registry.lookup(alias).map_err(|e| {
                tracing::debug!(
                    alias,
                    known = ?self.registry.aliases().collect::<Vec<_>>(),
                    "unknown template"
                );
                e.into()
            });
        }
        match args.repo.as_deref() {
            Some(repo) => Ok(repo),
            None => Err(ScaffoldError::MissingRepoSource.into()),
        }
    }

    fn offer_editor(&self, target: &TargetDir) -> ScaffoldResult<bool> {
        let editor = &self.config.editor;
        if !self.prompter.confirm_open(&editor.label)? {
            return Ok(false);
        }
        self.shell.open_editor(&editor.command, target.path())?;
        Ok(true)
    }
}
