// src/target.rs
//! Target directory for the new project.

#![deny(missing_docs)]

use crate::error::{ScaffoldError, ScaffoldResult};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the template is cloned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDir {
    raw_name: String,
    path: PathBuf,
}

impl TargetDir {
    /// Resolve the raw project name against `cwd`.
    ///
    /// `.` is `cwd` itself, not `cwd/<basename of cwd>`, so the directory that
    /// is checked for emptiness is the one that gets cloned into.
    pub fn new(raw_name: &str, cwd: &Path) -> Self {
        let path = if raw_name == "." {
            cwd.to_path_buf()
        } else {
            cwd.join(raw_name)
        };
        Self {
            raw_name: raw_name.to_string(),
            path,
        }
    }

    /// Absolute path of the directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name as typed by the user.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Create the directory (and parents) unless it already exists.
    pub fn prepare(&self) -> ScaffoldResult<()> {
        if !self.path.exists() {
            fs::create_dir_all(&self.path)
                .with_context(|| format!("creating {}", self.path.display()))?;
            tracing::debug!(path = %self.path.display(), "created target directory");
        }
        Ok(())
    }

    /// Whether the directory is empty, counting a lone `.git` entry as empty.
    pub fn is_empty(&self) -> ScaffoldResult<bool> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.path)
            .with_context(|| format!("listing {}", self.path.display()))?
        {
            names.push(entry?.file_name());
            if names.len() > 1 {
                return Ok(false);
            }
        }
        Ok(names.is_empty() || names[0] == ".git")
    }

    /// Fail with [`ScaffoldError::NonEmptyTargetDirectory`] unless [`Self::is_empty`].
    pub fn ensure_empty(&self) -> ScaffoldResult<()> {
        if self.is_empty()? {
            Ok(())
        } else {
            Err(ScaffoldError::NonEmptyTargetDirectory(self.raw_name.clone()).into())
        }
    }
}
