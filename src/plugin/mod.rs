//! Plugin asset pipeline.
//!
//! A [`Plugin`] is created from a [`PluginSpec`] and filled in by
//! [`Plugin::register`]:
//!
//! ```text
//! PluginSpec ──► register(ctx)
//!                  ├── PluginConfig::load   (config.yml + user config.yml)
//!                  ├── AssetCatalog::scan   (classify, disable, override)
//!                  └── docs::index          (doc pages, shallowest first)
//! ```
//!
//! After registration a plugin is read-only. Listing and copying go through
//! [`Selection`]; build inclusion uses the enabled-asset accessors.

mod build;
mod catalog;
mod category;
mod copy;
mod docs;
mod front_matter;
mod list;
mod overrides;
mod record;
mod select;
mod settings;
mod spec;

use std::path::PathBuf;

pub use build::BuildSet;
pub use category::Category;
pub use docs::{DocPage, copy_doc};
pub use select::CategoryRequest;
pub use spec::{PluginKind, PluginSpec};

use catalog::AssetCatalog;
use docs::docs_base_path;
use overrides::OverrideResolver;
use record::AssetRecord;
use select::Selection;
use settings::PluginConfig;

use crate::config::{PLUGIN_CONFIG_FILE, SiteContext};
use crate::debug;

/// One registered plugin: metadata, merged config and asset catalog.
#[derive(Debug, Clone)]
pub struct Plugin {
    spec: PluginSpec,
    slug: String,
    config: PluginConfig,
    catalog: AssetCatalog,
    doc_pages: Vec<DocPage>,
    registered: bool,
}

impl Plugin {
    pub fn new(spec: PluginSpec) -> Self {
        let slug = spec.slug();
        Self {
            spec,
            slug,
            config: PluginConfig::default(),
            catalog: AssetCatalog::new(),
            doc_pages: Vec::new(),
            registered: false,
        }
    }

    /// Resolve configuration, then catalog assets. Runs once.
    pub fn register(&mut self, ctx: &SiteContext) {
        if self.registered {
            return;
        }
        self.registered = true;

        let assets_root = self.assets_root();
        self.config = PluginConfig::load(
            &assets_root.join(PLUGIN_CONFIG_FILE),
            &ctx.user_config_path(&self.slug),
        );

        let overrides = OverrideResolver::new(ctx, &self.slug);
        self.catalog = AssetCatalog::scan(&assets_root, &overrides, self.config.disabled());
        self.doc_pages = docs::index(&self.docs_base_path(), self.catalog.enabled(Category::Docs));

        debug!(
            "register";
            "{} ({}): {} asset(s), {} disable rule(s)",
            self.name(),
            self.slug,
            self.catalog.len(),
            self.config.disabled().len()
        );
    }

    // ========================================================================
    // Metadata
    // ========================================================================

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn kind(&self) -> PluginKind {
        self.spec.kind
    }

    pub fn is_theme(&self) -> bool {
        self.spec.kind == PluginKind::Theme
    }

    pub fn version(&self) -> Option<&str> {
        non_empty(self.spec.version.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.spec.description.as_deref())
    }

    pub fn website(&self) -> Option<&str> {
        non_empty(self.spec.website.as_deref())
    }

    pub fn assets_root(&self) -> PathBuf {
        self.spec.assets_root()
    }

    /// `docs/theme` or `docs/plugins/<slug>`.
    pub fn docs_base_path(&self) -> String {
        docs_base_path(self.kind(), &self.slug)
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    // ========================================================================
    // Assets
    // ========================================================================

    /// Enabled assets of one category.
    pub fn assets(&self, category: Category) -> Vec<&AssetRecord> {
        self.catalog.enabled(category).collect()
    }

    /// Enabled CSS plus enabled, non-partial Sass.
    pub fn stylesheets(&self) -> Vec<&AssetRecord> {
        self.catalog
            .enabled(Category::Css)
            .chain(self.catalog.enabled(Category::Sass).filter(|r| !r.is_partial()))
            .collect()
    }

    /// Enabled JavaScript plus enabled CoffeeScript.
    pub fn javascripts(&self) -> Vec<&AssetRecord> {
        self.catalog
            .enabled(Category::Js)
            .chain(self.catalog.enabled(Category::Coffee))
            .collect()
    }

    /// Effective path of the include named `file` (e.g. `nav.html`).
    pub fn include(&self, file: &str) -> Option<PathBuf> {
        self.assets(Category::Includes)
            .into_iter()
            .find(|r| r.relative_key() == file)
            .map(AssetRecord::path)
    }

    /// Catalog subset for `request`, disabled records included.
    pub fn select(&self, request: &CategoryRequest) -> Selection<'_> {
        Selection::select(&self.catalog, &self.config, request)
    }

    /// Documentation index, shallowest first.
    pub fn doc_pages(&self) -> &[DocPage] {
        &self.doc_pages
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
