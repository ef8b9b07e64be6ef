// src/registry.rs
//! Template aliases and the repositories they point to.

#![deny(missing_docs)]

use crate::config::Config;
use crate::error::ScaffoldError;
use std::collections::BTreeMap;

/// Aliases shipped with the tool. Config files may add to or override these.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("react", "https://github.com/org/react-template"),
    ("vue", "https://github.com/org/vue-template"),
    ("svelte", "https://github.com/org/svelte-template"),
    ("node", "https://github.com/org/node-template"),
];

/// Immutable alias → repository lookup table.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    repos: BTreeMap<String, String>,
}

impl TemplateRegistry {
    /// Registry holding only the built-in aliases.
    pub fn builtin() -> Self {
        Self::from_entries(
            BUILTIN_TEMPLATES
                .iter()
                .map(|(alias, url)| (alias.to_string(), url.to_string())),
        )
    }

    /// Built-in aliases with the config's `[templates]` table layered on top.
    pub fn from_config(cfg: &Config) -> Self {
        let mut registry = Self::builtin();
        registry
            .repos
            .extend(cfg.templates.iter().map(|(k, v)| (k.clone(), v.clone())));
        registry
    }

    /// Registry built from arbitrary `(alias, url)` pairs.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            repos: entries.into_iter().collect(),
        }
    }

    /// Repository location registered under `alias`.
    pub fn lookup(&self, alias: &str) -> Result<&str, ScaffoldError> {
        self.repos
            .get(alias)
            .map(String::as_str)
            .ok_or_else(|| ScaffoldError::UnknownTemplate(alias.to_string()))
    }

    /// Registered aliases in sorted order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.repos.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_alias_resolves() {
        let registry = TemplateRegistry::builtin();
        for (alias, url) in BUILTIN_TEMPLATES {
            assert_eq!(registry.lookup(alias).ok(), Some(*url));
        }
    }

    #[test]
    fn unknown_alias_fails() {
        let registry = TemplateRegistry::builtin();
        for alias in ["", "angular", "React", "react "] {
            assert!(matches!(
                registry.lookup(alias),
                Err(ScaffoldError::UnknownTemplate(a)) if a == alias
            ));
        }
    }

    #[test]
    fn config_entries_extend_and_override() {
        let mut cfg = Config::default();
        cfg.templates
            .insert("react".into(), "https://example.com/my-react".into());
        cfg.templates
            .insert("solid".into(), "https://example.com/solid".into());

        let registry = TemplateRegistry::from_config(&cfg);
        assert_eq!(registry.lookup("react").ok(), Some("https://example.com/my-react"));
        assert_eq!(registry.lookup("solid").ok(), Some("https://example.com/solid"));
        assert_eq!(registry.lookup("vue").ok(), Some("https://github.com/org/vue-template"));
        assert_eq!(
            registry.aliases().collect::<Vec<_>>(),
            ["node", "react", "solid", "svelte", "vue"]
        );
    }
}
