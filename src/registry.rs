//! Ordered registry of every plugin in the site.

use rustc_hash::FxHashMap;

use crate::config::SiteContext;
use crate::error::InkError;
use crate::log;
use crate::plugin::{BuildSet, CategoryRequest, DocPage, Plugin, PluginSpec};
use crate::utils::slugify;

/// Plugins in registration order.
///
/// Lookup is by slug. When two plugins share a slug both are kept and the
/// first registered answers lookups.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: Vec<Plugin>,
    by_slug: FxHashMap<String, usize>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(specs: impl IntoIterator<Item = PluginSpec>) -> Self {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec);
        }
        registry
    }

    /// Append a plugin. Registration of its assets happens in
    /// [`register_all`](Self::register_all).
    pub fn register(&mut self, spec: PluginSpec) {
        let plugin = Plugin::new(spec);
        let slug = plugin.slug().to_string();

        if let Some(&existing) = self.by_slug.get(&slug) {
            log!(
                "warning";
                "plugin '{}' uses slug '{}' already taken by '{}'; lookups return '{}'",
                plugin.name(),
                slug,
                self.plugins[existing].name(),
                self.plugins[existing].name()
            );
        } else {
            self.by_slug.insert(slug, self.plugins.len());
        }
        self.plugins.push(plugin);
    }

    /// Register every plugin, in order.
    pub fn register_all(&mut self, ctx: &SiteContext) {
        for plugin in &mut self.plugins {
            plugin.register(ctx);
        }
    }

    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Find a plugin by slug, slugified query, then exact name.
    pub fn plugin(&self, query: &str) -> Result<&Plugin, InkError> {
        self.by_slug
            .get(query)
            .or_else(|| self.by_slug.get(&slugify(query)))
            .map(|&index| &self.plugins[index])
            .or_else(|| self.plugins.iter().find(|p| p.name() == query))
            .ok_or_else(|| InkError::NotFound(query.to_string()))
    }

    /// First registered theme.
    pub fn theme(&self) -> Option<&Plugin> {
        self.plugins.iter().find(|p| p.is_theme())
    }

    /// Every plugin's doc pages, in registration order.
    pub fn doc_pages(&self) -> Vec<DocPage> {
        self.plugins
            .iter()
            .flat_map(|p| p.doc_pages().iter().cloned())
            .collect()
    }

    /// Gather every plugin's build contribution into one set.
    pub fn add_asset_files(&self, ctx: &SiteContext) -> BuildSet {
        let mut build = BuildSet::new();
        let request = CategoryRequest::all();
        for plugin in &self.plugins {
            plugin.add_asset_files(&mut build, &request, ctx);
        }
        build
    }
}
