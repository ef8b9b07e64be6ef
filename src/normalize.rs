// src/normalize.rs
//! Post-clone fixups: manifest name and leftover template artifacts.

#![deny(missing_docs)]

use crate::error::ScaffoldResult;
use anyhow::{Context, bail};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// Manifest file rewritten after cloning.
pub const MANIFEST: &str = "package.json";

/// Lockfiles describing the template's dependency tree, not the new project's.
pub const LOCKFILES: [&str; 2] = ["yarn.lock", "package-lock.json"];

/// Set the `name` field of the JSON manifest at `path` and write it back
/// with 2-space indentation. Other fields keep their order and values.
pub fn rewrite_manifest_name(path: &Path, name: &str) -> ScaffoldResult<()> {
    let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut manifest: Value =
        serde_json::from_str(&s).with_context(|| format!("parsing {}", path.display()))?;
    let Some(fields) = manifest.as_object_mut() else {
        bail!("{} is not a JSON object", path.display());
    };
    fields.insert("name".into(), Value::String(name.to_string()));
    let out = serde_json::to_string_pretty(&manifest)?;
    fs::write(path, out).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Remove each path recursively. Paths that do not exist are skipped.
pub fn remove_artifacts<P: AsRef<Path>>(paths: &[P]) -> ScaffoldResult<()> {
    for p in paths {
        let p = p.as_ref();
        remove_path(p).with_context(|| format!("removing {}", p.display()))?;
        tracing::debug!(path = %p.display(), "removed");
    }
    Ok(())
}

/// Start removing `dir` on a background thread. The result is never surfaced;
/// joining the handle only waits for the attempt to finish.
pub fn remove_in_background(dir: PathBuf) -> JoinHandle<()> {
    thread::spawn(move || {
        if let Err(e) = fs::remove_dir_all(&dir) {
            tracing::debug!(path = %dir.display(), error = %e, "background removal skipped");
        }
    })
}

fn remove_path(p: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(p) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if meta.is_dir() {
        fs::remove_dir_all(p)
    } else {
        fs::remove_file(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_sets_name_and_keeps_other_fields() -> ScaffoldResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(MANIFEST);
        fs::write(
            &path,
            r#"{"version":"1.2.3","name":"template","scripts":{"dev":"vite"},"private":true}"#,
        )?;

        rewrite_manifest_name(&path, "demo-app")?;

        let s = fs::read_to_string(&path)?;
        let v: Value = serde_json::from_str(&s)?;
        assert_eq!(v["name"], "demo-app");
        assert_eq!(v["version"], "1.2.3");
        assert_eq!(v["scripts"]["dev"], "vite");
        assert_eq!(v["private"], true);
        let keys: Vec<_> = v.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();
        assert_eq!(keys, ["version", "name", "scripts", "private"]);
        assert!(s.contains("\n  \"version\": \"1.2.3\""), "not 2-space indented: {s}");
        Ok(())
    }

    #[test]
    fn rewrite_adds_missing_name() -> ScaffoldResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(MANIFEST);
        fs::write(&path, "{}")?;
        rewrite_manifest_name(&path, "@scope/pkg")?;
        let v: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(v["name"], "@scope/pkg");
        Ok(())
    }

    #[test]
    fn rewrite_rejects_non_object_manifest() -> ScaffoldResult<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(MANIFEST);
        fs::write(&path, "[1, 2]")?;
        let err = rewrite_manifest_name(&path, "x").unwrap_err();
        assert!(format!("{err}").contains("not a JSON object"), "got: {err}");
        Ok(())
    }

    #[test]
    fn rewrite_reports_missing_manifest() -> ScaffoldResult<()> {
        let dir = tempfile::tempdir()?;
        let err = rewrite_manifest_name(&dir.path().join(MANIFEST), "x").unwrap_err();
        assert!(format!("{err}").contains("reading"), "got: {err}");
        Ok(())
    }

    #[test]
    fn remove_artifacts_handles_files_dirs_and_missing() -> ScaffoldResult<()> {
        let dir = tempfile::tempdir()?;
        let git = dir.path().join(".git");
        fs::create_dir_all(git.join("objects"))?;
        fs::write(git.join("HEAD"), "ref: refs/heads/main")?;
        let lock = dir.path().join("yarn.lock");
        fs::write(&lock, "# lock")?;
        let missing = dir.path().join("package-lock.json");

        remove_artifacts(&[&git, &lock, &missing])?;

        assert!(!git.exists());
        assert!(!lock.exists());
        Ok(())
    }

    #[test]
    fn background_removal_ignores_missing_dir() -> ScaffoldResult<()> {
        let dir = tempfile::tempdir()?;
        let bin = dir.path().join("bin");
        assert!(remove_in_background(bin.clone()).join().is_ok());

        fs::create_dir_all(bin.join("nested"))?;
        fs::write(bin.join("nested/run.js"), "")?;
        assert!(remove_in_background(bin.clone()).join().is_ok());
        assert!(!bin.exists());
        Ok(())
    }
}
