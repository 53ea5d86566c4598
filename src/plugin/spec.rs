//! Declarative description of a plugin, as written in `inkpot.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::slugify;

/// Reserved slug every theme answers to.
pub const THEME_SLUG: &str = "theme";

/// Plugin flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginKind {
    #[default]
    Plugin,
    Theme,
}

/// Everything needed to create a [`Plugin`](super::Plugin).
///
/// # Fields
///
/// | Field         | Description                                       |
/// |---------------|---------------------------------------------------|
/// | `name`        | Display name                                      |
/// | `slug`        | URL/dir name; defaults to the slugified name      |
/// | `type`        | `plugin` (default) or `theme`                     |
/// | `version`     | Shown in listings                                 |
/// | `description` | Shown in listings                                 |
/// | `website`     | Shown in detailed listings                        |
/// | `path`        | Package root                                      |
/// | `assets`      | Asset root (default: `<path>/assets`)             |
///
/// Unrecognized keys are kept in `extra` and exported with the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: PluginKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<PathBuf>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

impl PluginSpec {
    /// Effective slug. Themes always resolve to [`THEME_SLUG`].
    pub fn slug(&self) -> String {
        match self.kind {
            PluginKind::Theme => THEME_SLUG.to_string(),
            PluginKind::Plugin => slugify(self.slug.as_deref().unwrap_or(&self.name)),
        }
    }

    /// Directory holding the plugin's asset subdirectories and `config.yml`.
    pub fn assets_root(&self) -> PathBuf {
        self.assets
            .clone()
            .unwrap_or_else(|| self.path.join("assets"))
    }

    /// Anchor relative `path`/`assets` at `base` (the config file's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        self.path = crate::utils::resolve_from(&self.path, base);
        if let Some(assets) = self.assets.take() {
            self.assets = Some(crate::utils::resolve_from(&assets, base));
        }
    }
}

/// Builders for declaring plugins in code.
#[cfg(test)]
impl PluginSpec {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn theme(mut self) -> Self {
        self.kind = PluginKind::Theme;
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}
