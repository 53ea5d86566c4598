//! Site configuration management for `inkpot.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── context   # SiteContext handed to registry and plugins
//! ├── error     # ConfigError
//! ├── util      # config file discovery
//! └── mod.rs    # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section       | Purpose                                          |
//! |---------------|--------------------------------------------------|
//! | `[site]`      | Source dir, override dir, documentation mode     |
//! | `[[plugins]]` | Plugin packages, registered in declaration order |

mod context;
mod error;
mod util;

pub use context::{DEFAULT_CUSTOM_DIR, PLUGIN_CONFIG_FILE, SiteContext};
pub use error::ConfigError;
use util::find_config_file;

use crate::{cli::Cli, log, plugin::PluginSpec, utils::resolve_from};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing inkpot.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site settings
    #[serde(default)]
    pub site: SiteSection,

    /// Plugin packages, in registration order
    #[serde(default)]
    pub plugins: Vec<PluginSpec>,
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site source directory, relative to the config file.
    pub source: PathBuf,
    /// Override directory inside the site source.
    pub custom_dir: PathBuf,
    /// Keep plugin pages out of the build and export the doc page index.
    pub docs_mode: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            custom_dir: PathBuf::from(DEFAULT_CUSTOM_DIR),
            docs_mode: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cli.config, &cwd)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {} (ignored): {}", display_path, fields.join(", "));
    }

    /// Resolve paths against the config file's directory and apply CLI options.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.apply_root(&root);

        if let Some(source) = &cli.source {
            self.site.source = resolve_from(source, &root);
        }
        if cli.docs_mode {
            self.site.docs_mode = true;
        }
    }

    /// Anchor every relative path at `root`.
    pub fn apply_root(&mut self, root: &Path) {
        self.site.source = resolve_from(&self.site.source, root);
        for spec in &mut self.plugins {
            spec.resolve_paths(root);
        }
    }

    /// Build the context passed to the registry and plugins.
    pub fn context(&self) -> SiteContext {
        SiteContext::new(self.site.source.clone())
            .with_custom_dir(self.site.custom_dir.clone())
            .with_docs_mode(self.site.docs_mode)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate plugin declarations.
    ///
    /// Nameless plugins are errors. A missing plugin directory is only a
    /// warning: the plugin registers with zero assets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.custom_dir.is_absolute() {
            return Err(ConfigError::Validation(format!(
                "site.custom_dir must be relative to the site source, got '{}'",
                self.site.custom_dir.display()
            )));
        }

        for (i, spec) in self.plugins.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "plugins[{i}] has no name"
                )));
            }
            if !spec.path.as_os_str().is_empty() && !spec.path.exists() {
                log!("warning"; "plugin '{}': directory {} not found", spec.name, spec.path.display());
            }
        }
        Ok(())
    }
}

// ============================================================================
// tests
// ============================================================================
