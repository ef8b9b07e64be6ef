// src/shell.rs
//! External programs: `git clone` and the editor launcher.

#![deny(missing_docs)]

use crate::error::{ScaffoldError, ScaffoldResult};
use anyhow::Context;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Programs the workflow hands work off to.
pub trait Shell {
    /// Shallow-clone `source` into `dest`.
    fn clone_repo(&self, source: &str, dest: &Path) -> ScaffoldResult<()>;

    /// Open `path` with the editor launcher `command`.
    fn open_editor(&self, command: &str, path: &Path) -> ScaffoldResult<()>;
}

/// Output of a finished external command.
#[derive(Debug)]
pub struct CommandOutput {
    /// Exit status.
    pub status: ExitStatus,
    /// Captured stdout.
    pub stdout: String,
    /// Captured stderr.
    pub stderr: String,
}

/// [`Shell`] backed by programs on `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl SystemShell {
    /// Run `command`, blocking until it exits, and fail on a non-zero status.
    pub fn run(mut command: Command) -> ScaffoldResult<CommandOutput> {
        let line = Self::display(&command);
        tracing::debug!(command = %line, "running");
        let output = command
            .output()
            .with_context(|| format!("running {line}"))?;
        let out = CommandOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        if !out.stdout.is_empty() {
            tracing::trace!(command = %line, stdout = %out.stdout.trim_end(), "output");
        }
        if !out.status.success() {
            return Err(ScaffoldError::ExternalCommandFailure {
                command: line,
                status: out.status.to_string(),
                stderr: out.stderr.trim().to_string(),
            }
            .into());
        }
        Ok(out)
    }

    /// `git clone` invocation for `source`. `--` keeps a source starting with
    /// `-` from being read as an option.
    pub fn clone_command(source: &str, dest: &Path) -> Command {
        let mut command = Command::new("git");
        command
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg("--")
            .arg(source)
            .arg(dest);
        command
    }

    fn display(command: &Command) -> String {
        std::iter::once(command.get_program())
            .chain(command.get_args())
            .map(|s| s.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Shell for SystemShell {
    fn clone_repo(&self, source: &str, dest: &Path) -> ScaffoldResult<()> {
        Self::run(Self::clone_command(source, dest))?;
        Ok(())
    }

    fn open_editor(&self, command: &str, path: &Path) -> ScaffoldResult<()> {
        let mut cmd = Command::new(command);
        cmd.arg(path);
        Self::run(cmd)?;
        Ok(())
    }
}
