// src/naming.rs
//! Project name resolution and package-name validation.

#![deny(missing_docs)]

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static PACKAGE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:@[a-z0-9\-*~][a-z0-9\-*._~]*/)?[a-z0-9\-~][a-z0-9\-._~]*$")
        .expect("package name pattern is valid")
});

/// Whether `name` is acceptable as the `name` field of a `package.json`.
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Resolve the raw project name against `cwd`.
///
/// `.` means "scaffold into the current directory", so it resolves to the
/// directory's base name. Anything else is returned unchanged.
pub fn resolve_project_name(raw: &str, cwd: &Path) -> String {
    if raw == "." {
        cwd.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_scoped_names() {
        for name in [
            "my-app",
            "demo-app",
            "a",
            "app2",
            "~tilde",
            "-dash",
            "with.dots_and_underscores",
            "@scope/pkg",
            "@my-org*/pkg.name",
            "@~s/x",
        ] {
            assert!(is_valid_package_name(name), "expected valid: {name}");
        }
    }

    #[test]
    fn rejects_bad_names() {
        for name in [
            "",
            "Invalid Name!",
            "UPPER",
            ".hidden",
            "_private",
            "has space",
            "@scope",
            "@scope/",
            "@/pkg",
            "@.scope/pkg",
            "a/b",
            "my-app\n",
        ] {
            assert!(!is_valid_package_name(name), "expected invalid: {name:?}");
        }
    }

    #[test]
    fn dot_resolves_to_cwd_basename() {
        let cwd = Path::new("/home/user/projects/cool-thing");
        assert_eq!(resolve_project_name(".", cwd), "cool-thing");
    }

    #[test]
    fn other_names_pass_through() {
        let cwd = Path::new("/tmp/work");
        assert_eq!(resolve_project_name("demo-app", cwd), "demo-app");
        assert_eq!(resolve_project_name("Invalid Name!", cwd), "Invalid Name!");
    }
}
