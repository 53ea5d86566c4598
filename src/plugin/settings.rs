//! Plugin configuration: default `config.yml` merged with the user's copy.
//!
//! Merging is permissive. Missing files, unparsable YAML, unknown disable
//! categories and unsupported disable values all degrade to "no effect".

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value as JsonValue;
use serde_yml::{Mapping, Value};

use super::category::Category;
use crate::log;

/// Config key holding disable directives.
pub const DISABLE_KEY: &str = "disable";

// ============================================================================
// DisabledSet
// ============================================================================

/// Canonical disable rules.
///
/// Entries are either a bare category (`css`) or `category/file`
/// (`css/print.css`). Sorted for stable output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisabledSet(BTreeSet<String>);

impl DisabledSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a `disable` map.
    ///
    /// | Value              | Adds                          |
    /// |--------------------|-------------------------------|
    /// | `true`             | `category`                    |
    /// | `"file"`           | `category/file`               |
    /// | `["a", "b"]`       | `category/a`, `category/b`    |
    /// | anything else      | nothing                       |
    ///
    /// Keys outside [`DISABLE_KEYS`](super::category::DISABLE_KEYS) are dropped.
    pub fn from_directives(directives: &Mapping) -> Self {
        let mut set = Self::new();
        for (key, value) in directives {
            let Some(category) = key.as_str() else {
                continue;
            };
            if !Category::can_disable(category) {
                continue;
            }
            match value {
                Value::Bool(true) => set.insert(category.to_string()),
                Value::String(file) => set.insert(format!("{category}/{file}")),
                Value::Sequence(files) => {
                    for file in files.iter().filter_map(Value::as_str) {
                        set.insert(format!("{category}/{file}"));
                    }
                }
                _ => {}
            }
        }
        set
    }

    pub fn insert(&mut self, entry: String) {
        self.0.insert(entry);
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.0.contains(entry)
    }

    /// Whether the whole category is disabled.
    pub fn disables_category(&self, category: Category) -> bool {
        self.contains(category.name())
    }

    /// Whether a file of `category` at `relative` (slash separated) is disabled.
    pub fn disables(&self, category: Category, relative: &str) -> bool {
        self.disables_category(category) || self.contains(&format!("{category}/{relative}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// PluginConfig
// ============================================================================

/// Result of merging default and user configuration.
#[derive(Debug, Clone, Default)]
pub struct PluginConfig {
    /// Merged keys in insertion order, without `disable`.
    values: Mapping,
    disabled: DisabledSet,
}

impl PluginConfig {
    /// Merge `user` over `defaults`.
    ///
    /// Top-level keys are replaced wholesale, except `disable`, whose
    /// per-category entries are merged (user entries win) before being
    /// normalized into a [`DisabledSet`].
    pub fn resolve(defaults: Mapping, user: Mapping) -> Self {
        let mut values = Mapping::new();
        let mut directives = Mapping::new();

        for source in [defaults, user] {
            for (key, value) in source {
                if key.as_str() == Some(DISABLE_KEY) {
                    if let Value::Mapping(map) = value {
                        directives.extend(map);
                    }
                    continue;
                }
                values.insert(key, value);
            }
        }

        Self {
            values,
            disabled: DisabledSet::from_directives(&directives),
        }
    }

    /// Read and merge the two config files. Missing files count as empty.
    pub fn load(default_path: &Path, user_path: &Path) -> Self {
        Self::resolve(read_yaml_mapping(default_path), read_yaml_mapping(user_path))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn disabled(&self) -> &DisabledSet {
        &self.disabled
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.disabled.is_empty()
    }

    /// Merged configuration with `disable` rewritten to its canonical list.
    pub fn merged(&self) -> Mapping {
        let mut merged = self.values.clone();
        if !self.disabled.is_empty() {
            let entries = self
                .disabled
                .iter()
                .map(|e| Value::String(e.to_string()))
                .collect();
            merged.insert(Value::String(DISABLE_KEY.into()), Value::Sequence(entries));
        }
        merged
    }

    /// Merged configuration as JSON, for the template payload.
    ///
    /// Keys that have no JSON form (non-string map keys) turn the whole
    /// value into `null` rather than failing the export.
    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self.merged()).unwrap_or(JsonValue::Null)
    }

    /// Merged configuration rendered as YAML lines, for listings.
    pub fn to_yaml_lines(&self) -> Vec<String> {
        if self.is_empty() {
            return Vec::new();
        }
        serde_yml::to_string(&self.merged())
            .unwrap_or_default()
            .lines()
            .filter(|line| !line.trim().is_empty() && *line != "---")
            .map(str::to_string)
            .collect()
    }
}

/// Read a YAML file expected to hold a mapping.
///
/// A missing file, a non-mapping document and unparsable YAML all yield an
/// empty mapping; the latter two are logged.
pub fn read_yaml_mapping(path: &Path) -> Mapping {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Mapping::new(),
        Err(e) => {
            log!("warning"; "cannot read {}: {}", path.display(), e);
            return Mapping::new();
        }
    };

    match serde_yml::from_str::<Value>(&content) {
        Ok(Value::Mapping(map)) => map,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => {
            log!("warning"; "{} is not a mapping, ignoring it", path.display());
            Mapping::new()
        }
        Err(e) => {
            log!("warning"; "invalid YAML in {}: {}", path.display(), e);
            Mapping::new()
        }
    }
}
