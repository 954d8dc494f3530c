//! The set of identifier names eligible for rewriting.
//!
//! The registry is read-only to the scanning/rewriting core; how it gets
//! populated (symbol table, configuration file, prior analysis pass) is the
//! caller's business. This module only offers the in-memory set plus a small
//! YAML file format for the CLI.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Known identifier names. Membership is the only question the rewriter asks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    pub id_set: HashSet<String>,
}

/// On-disk registry format:
///
/// ```yaml
/// ids:
///   - player
///   - hud
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub ids: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id_set: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the YAML registry format.
    pub fn from_yaml_str(text: &str) -> Result<Self, Box<dyn Error>> {
        let file: RegistryFile = serde_yaml::from_str(text)?;
        Ok(Self::from_names(file.ids))
    }

    /// Load a YAML registry file from disk.
    pub fn load_yaml_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("failed to read registry {}: {e}", path.display()))?;
        Self::from_yaml_str(&text)
    }

    /// Add further names (CLI `--id` flags stack on top of the file).
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.id_set.extend(names.into_iter().map(Into::into));
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.id_set.contains(name)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.id_set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_registry_parses_ids() {
        let reg = Registry::from_yaml_str("ids:\n  - player\n  - hud\n").unwrap();
        assert!(reg.contains("player"));
        assert!(reg.contains("hud"));
        assert!(!reg.contains("score"));
    }

    #[test]
    fn yaml_registry_tolerates_missing_ids_key() {
        let reg = Registry::from_yaml_str("{}").unwrap();
        assert!(reg.is_empty());
    }

    #[test]
    fn extend_stacks_names_on_top() {
        let mut reg = Registry::from_names(["a"]);
        reg.extend(["b"]);
        assert!(reg.contains("a") && reg.contains("b"));
    }
}
