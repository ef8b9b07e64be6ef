//! CLI argument parser for repo-scaffold.

#![deny(missing_docs)]

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Fixed usage text printed for `help`, `-h` and `--help`.
pub const USAGE: &str = "Usage: [options] [value]

Options:
  -h, --help          display help for command
  -t, --template      template name to install
  -r, --repo          repo link to install from

Commands:
  help  [options]     display help for options
  [arg] [options]     first command is used as repo folder";

/// Scaffold a new project from a template repository.
#[derive(Parser, Debug)]
#[command(
    name = "repo-scaffold",
    version,
    about = "Scaffold a new project from a template repository",
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Project folder to create, or `help`.
    pub name: Option<String>,

    /// Template name to install.
    #[arg(short = 't', long = "template", value_name = "ALIAS")]
    pub template: Option<String>,

    /// Repo link to install from.
    #[arg(short = 'r', long = "repo", value_name = "URL")]
    pub repo: Option<String>,

    /// Display help for command.
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Raise diagnostic verbosity: -v, -vv, -vvv.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, hide = true)]
    pub verbose: u8,

    /// Silence diagnostics (overrides -v).
    #[arg(short, long, hide = true)]
    pub quiet: bool,

    /// TOML file with extra templates and editor settings.
    #[arg(long, env = "REPO_SCAFFOLD_CONFIG", value_name = "PATH", hide = true)]
    pub config: Option<PathBuf>,
}

/// Shape-only view of the command line handed to the workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationArgs {
    /// Positional project name, unless it was the `help` token.
    pub project_name: Option<String>,
    /// `--template` alias.
    pub template: Option<String>,
    /// `--repo` location.
    pub repo: Option<String>,
    /// Help requested by flag or by the positional `help` token.
    pub help: bool,
}

impl Cli {
    /// Split the parsed command line into workflow input.
    pub fn invocation(&self) -> InvocationArgs {
        let help_token = self.name.as_deref() == Some("help");
        InvocationArgs {
            project_name: if help_token { None } else { self.name.clone() },
            template: self.template.clone(),
            repo: self.repo.clone(),
            help: self.help || help_token,
        }
    }
}
