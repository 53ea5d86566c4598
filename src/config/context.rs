//! Explicit build context handed to the registry and every plugin.

use std::path::{Path, PathBuf};

/// Name of the per-plugin configuration file, both inside a plugin's asset
/// root (defaults) and inside the user override directory.
pub const PLUGIN_CONFIG_FILE: &str = "config.yml";

/// Default directory (inside the site source) holding user overrides.
pub const DEFAULT_CUSTOM_DIR: &str = "_plugins";

/// Site-wide facts a plugin needs while registering and building.
///
/// Replaces ambient site state: everything that depends on where the site
/// lives or how it is built reads it from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    /// Absolute site source directory.
    pub source: PathBuf,
    /// Override directory, relative to `source`.
    pub custom_dir: PathBuf,
    /// Documentation mode: plugin pages stay out of the build and the
    /// payload carries the doc page index.
    pub docs_mode: bool,
}

impl SiteContext {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            custom_dir: PathBuf::from(DEFAULT_CUSTOM_DIR),
            docs_mode: false,
        }
    }

    pub fn with_custom_dir(mut self, custom_dir: impl Into<PathBuf>) -> Self {
        self.custom_dir = custom_dir.into();
        self
    }

    pub fn with_docs_mode(mut self, docs_mode: bool) -> Self {
        self.docs_mode = docs_mode;
        self
    }

    /// `<source>/<custom_dir>/<slug>`: where users override a plugin.
    pub fn override_root(&self, slug: &str) -> PathBuf {
        self.source.join(&self.custom_dir).join(slug)
    }

    /// `<source>/<custom_dir>/<slug>/config.yml`
    pub fn user_config_path(&self, slug: &str) -> PathBuf {
        self.override_root(slug).join(PLUGIN_CONFIG_FILE)
    }

    /// Join a path onto the site source.
    pub fn source_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.source.join(path)
    }
}
