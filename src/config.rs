// src/config.rs
//! Configuration file for repo-scaffold

#![deny(missing_docs)]

use crate::error::ScaffoldResult;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::{fs, path::Path};

/// Fallback project name when the prompt is left blank.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Config struct for repo-scaffold.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Project name used when the prompt is answered with blank input.
    pub default_name: String,
    /// Extra template aliases, layered over the built-in table.
    pub templates: BTreeMap<String, String>,
    /// Editor offered at the end of a successful run.
    pub editor: EditorConfig,
}

/// Editor launcher settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Program invoked with the project path as its only argument.
    pub command: String,
    /// Human name shown in the confirmation prompt.
    pub label: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_name: DEFAULT_PROJECT_NAME.into(),
            templates: BTreeMap::new(),
            editor: EditorConfig::default(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: "code".into(),
            label: "VS Code".into(),
        }
    }
}

impl Config {
    /// Load the TOML file at `path`, or the defaults when no path is given.
    /// A blank `default_name` in the file falls back to [`DEFAULT_PROJECT_NAME`].
    pub fn load_or_default(path: Option<&Path>) -> ScaffoldResult<Self> {
        let Some(file) = path else {
            return Ok(Config::default());
        };
        let s = fs::read_to_string(file)
            .with_context(|| format!("reading config {}", file.display()))?;
        let mut cfg: Config =
            toml::from_str(&s).with_context(|| format!("parsing config {}", file.display()))?;
        if cfg.default_name.trim().is_empty() {
            cfg.default_name = Config::default().default_name;
        }
        tracing::debug!(path = %file.display(), aliases = cfg.templates.len(), "loaded config");
        Ok(cfg)
    }
}
