//! Site configuration management for `strata.yaml`.
//!
//! The configuration is a flat mapping of option name to value. A fixed
//! set of defaults is always present; an optional user file overlays its
//! top-level entries one by one (entry-level merge, never a wholesale
//! replacement), and unrecognized keys pass through unvalidated for the
//! rendering stage to pick up.
//!
//! | Key                   | Default              | Purpose                   |
//! |-----------------------|----------------------|---------------------------|
//! | `date_input`          | `%d/%m/%Y`           | date parse pattern        |
//! | `date_output`         | `%A, %d. %B %Y`      | date render pattern       |
//! | `markdown_extensions` | `[codehilite, extra]`| markdown processor addons |
//!
//! # Example
//!
//! ```yaml
//! date_output: "%Y-%m-%d"
//! markdown_extensions:
//!   - codehilite
//!   - toc
//! author: alice
//! ```
//!
//! Loaded once at startup, read-only afterwards; consumers only ever see
//! the merged view.

pub mod defaults;
mod error;

use error::ConfigError;

use anyhow::{Result, bail};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::{fs, path::Path};

/// Merged configuration mapping.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Config {
    entries: Mapping,
}

impl Default for Config {
    fn default() -> Self {
        let mut entries = Mapping::new();
        entries.insert(
            Value::from("date_input"),
            Value::from(defaults::date_input()),
        );
        entries.insert(
            Value::from("date_output"),
            Value::from(defaults::date_output()),
        );
        entries.insert(
            Value::from("markdown_extensions"),
            Value::Sequence(
                defaults::markdown_extensions()
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            ),
        );
        Self { entries }
    }
}

impl Config {
    /// Load the configuration file at `path` and merge it over the
    /// defaults.
    ///
    /// A missing file yields the defaults unchanged, unless `strict` is
    /// set, in which case it is fatal. A file that exists but does not
    /// parse as a YAML mapping is always fatal.
    pub fn load(path: &Path, strict: bool) -> Result<Self> {
        let mut config = Self::default();

        if path.is_file() {
            let content =
                fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
            let overrides = match serde_yaml::from_str::<Value>(&content)
                .map_err(|err| ConfigError::Yaml(path.to_path_buf(), err))?
            {
                // An empty file overrides nothing.
                Value::Null => Mapping::new(),
                Value::Mapping(mapping) => mapping,
                _ => bail!(ConfigError::NotAMapping(path.to_path_buf())),
            };

            for (key, value) in overrides {
                config.entries.insert(key, value);
            }
        } else if strict {
            bail!(ConfigError::NotFound(path.to_path_buf()));
        }

        Ok(config)
    }

    /// Look up a top-level entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// `date_input` pattern, when it is a string (the default is).
    #[allow(unused)]
    pub fn date_input(&self) -> Option<&str> {
        self.get("date_input").and_then(Value::as_str)
    }

    /// `date_output` pattern, when it is a string (the default is).
    #[allow(unused)]
    pub fn date_output(&self) -> Option<&str> {
        self.get("date_output").and_then(Value::as_str)
    }

    /// Markdown processor extension names.
    #[allow(unused)]
    pub fn markdown_extensions(&self) -> Vec<&str> {
        self.get("markdown_extensions")
            .and_then(Value::as_sequence)
            .map(|seq| seq.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("strata.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.date_input(), Some("%d/%m/%Y"));
        assert_eq!(config.date_output(), Some("%A, %d. %B %Y"));
        assert_eq!(config.markdown_extensions(), ["codehilite", "extra"]);
    }

    #[test]
    fn test_load_missing_file_non_strict() {
        let dir = tempdir().unwrap();
        let config = Config::load(&dir.path().join("strata.yaml"), false).unwrap();
        assert_eq!(config.date_input(), Some("%d/%m/%Y"));
    }

    #[test]
    fn test_load_missing_file_strict() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("strata.yaml"), true).unwrap_err();
        assert!(format!("{err}").contains("config file not found"));
    }

    #[test]
    fn test_load_overrides_entry_by_entry() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "date_output: \"%Y-%m-%d\"\n");

        let config = Config::load(&path, false).unwrap();
        // Overridden entry takes the file's value...
        assert_eq!(config.date_output(), Some("%Y-%m-%d"));
        // ...while untouched defaults survive the merge.
        assert_eq!(config.date_input(), Some("%d/%m/%Y"));
        assert_eq!(config.markdown_extensions(), ["codehilite", "extra"]);
    }

    #[test]
    fn test_load_unknown_keys_pass_through() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "author: alice\nsite:\n  url: https://example.com\n");

        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.get("author").and_then(Value::as_str), Some("alice"));

        let site = config.get("site").and_then(Value::as_mapping).unwrap();
        assert_eq!(
            site.get("url").and_then(Value::as_str),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "");

        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.date_input(), Some("%d/%m/%Y"));
    }

    #[test]
    fn test_load_malformed_file_always_fatal() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "date_input: [unclosed\n");

        assert!(Config::load(&path, false).is_err());
        assert!(Config::load(&path, true).is_err());
    }

    #[test]
    fn test_load_scalar_document_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "just a string\n");

        let err = Config::load(&path, false).unwrap_err();
        assert!(format!("{err}").contains("not a mapping"));
    }

    #[test]
    fn test_load_extensions_override() {
        let dir = tempdir().unwrap();
        let path = write_config(dir.path(), "markdown_extensions: [toc]\n");

        let config = Config::load(&path, false).unwrap();
        // Sequence values replace as one entry, they do not append.
        assert_eq!(config.markdown_extensions(), ["toc"]);
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("date_input"));
        assert!(yaml.contains("markdown_extensions"));
    }
}
