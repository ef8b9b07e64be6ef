// src/prompt.rs
//! Interactive questions asked during a run.

#![deny(missing_docs)]

use crate::error::{ScaffoldError, ScaffoldResult};
use dialoguer::{Confirm, Input};

/// Source of answers for the workflow's two questions.
pub trait Prompter {
    /// Ask for a project name. `default` is offered as the initial answer.
    fn project_name(&self, default: &str) -> ScaffoldResult<String>;

    /// Ask whether to open the finished project in the editor called `label`.
    fn confirm_open(&self, label: &str) -> ScaffoldResult<bool>;
}

/// [`Prompter`] that asks on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn project_name(&self, default: &str) -> ScaffoldResult<String> {
        let answer = Input::<String>::new()
            .with_prompt("Project name:")
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| {
                tracing::debug!(error = %e, "name prompt aborted");
                ScaffoldError::PromptCancelled
            })?;
        Ok(answer)
    }

    fn confirm_open(&self, label: &str) -> ScaffoldResult<bool> {
        let answer = Confirm::new()
            .with_prompt(format!("Open in {label}"))
            .default(false)
            .interact_opt()
            .map_err(|e| {
                tracing::debug!(error = %e, "confirm prompt aborted");
                ScaffoldError::PromptCancelled
            })?;
        Ok(answer.unwrap_or(false))
    }
}

/// Apply the blank-input fallback to a raw prompt answer.
pub fn name_or_default(answer: &str, default: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
