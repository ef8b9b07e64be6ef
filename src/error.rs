// src/error.rs
//! Error handling for repo-scaffold.

#![deny(missing_docs)]

use thiserror::Error;

/// ScaffoldResult is alias for anyhow
pub type ScaffoldResult<T> = anyhow::Result<T>;

/// Failures the scaffolding workflow reports to the user.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The `--template` alias is not registered.
    #[error("Given template key is invalid.")]
    UnknownTemplate(String),

    /// Neither `--template` nor `--repo` was given.
    #[error("Template key or repo link is required.")]
    MissingRepoSource,

    /// The resolved project name fails the package naming grammar.
    #[error("Given project name \"{0}\" doesn't match package.json naming convention.")]
    InvalidProjectName(String),

    /// The user aborted an interactive prompt.
    #[error("✖ Process cancelled")]
    PromptCancelled,

    /// An external program exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    ExternalCommandFailure {
        /// The command line that was run.
        command: String,
        /// Exit status as reported by the OS.
        status: String,
        /// Captured error output of the program.
        stderr: String,
    },

    /// The target directory holds something other than a lone `.git`.
    #[error("{} is not empty.", describe_target(.0))]
    NonEmptyTargetDirectory(String),
}

impl ScaffoldError {
    /// Exit status the binary uses for this error.
    ///
    /// Only a non-empty target directory forces a failing status; every other
    /// handled error is printed and the process exits normally.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::NonEmptyTargetDirectory(_) => 1,
            _ => 0,
        }
    }
}

fn describe_target(raw_name: &str) -> String {
    if raw_name == "." {
        "Current directory".to_string()
    } else {
        format!("Target directory \"{raw_name}\"")
    }
}
