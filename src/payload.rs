//! Template payload: plugin configs, the active theme and the doc index.
//!
//! ```json
//! {
//!   "plugins": { "feeds": { ... }, "theme": { ... } },
//!   "theme": { ... },
//!   "inkpot": { "version": "0.3.0" },
//!   "doc_pages": [ { "title": "...", "url": "..." } ]
//! }
//! ```
//!
//! `doc_pages` is only present in docs mode.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::SiteContext;
use crate::plugin::DocPage;
use crate::registry::PluginRegistry;

#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    /// Merged config per plugin slug, in registration order.
    pub plugins: Map<String, Value>,
    /// Merged config of the first theme.
    pub theme: Option<Value>,
    pub inkpot: VersionInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_pages: Option<Vec<DocPage>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: String,
}

impl Payload {
    pub fn build(registry: &PluginRegistry, ctx: &SiteContext) -> Self {
        let mut plugins = Map::new();
        for plugin in registry.plugins() {
            plugins
                .entry(plugin.slug())
                .or_insert_with(|| plugin.config().to_json());
        }

        Self {
            plugins,
            theme: registry.theme().map(|t| t.config().to_json()),
            inkpot: VersionInfo {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            doc_pages: ctx.docs_mode.then(|| registry.doc_pages()),
        }
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginSpec;
    use std::fs;
    use tempfile::TempDir;

    fn registry(root: &std::path::Path) -> PluginRegistry {
        let theme = root.join("classic/assets");
        fs::create_dir_all(theme.join("docs")).unwrap();
        fs::write(theme.join("config.yml"), "color: teal\n").unwrap();
        fs::write(theme.join("docs/index.md"), "---\ntitle: Classic\n---\n").unwrap();

        PluginRegistry::from_specs([
            PluginSpec::new("Feeds", root.join("feeds")),
            PluginSpec::new("Classic", root.join("classic")).theme(),
        ])
    }

    #[test]
    fn test_payload_shape() {
        let temp = TempDir::new().unwrap();
        let ctx = SiteContext::new(temp.path().join("site"));
        let mut registry = registry(temp.path());
        registry.register_all(&ctx);

        let json: Value = serde_json::from_str(&Payload::build(&registry, &ctx).to_json(false).unwrap()).unwrap();

        let slugs: Vec<_> = json["plugins"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(slugs, vec!["feeds", "theme"]);
        assert_eq!(json["theme"]["color"], "teal");
        assert_eq!(json["inkpot"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(json.get("doc_pages").is_none());
    }

    #[test]
    fn test_payload_docs_mode() {
        let temp = TempDir::new().unwrap();
        let ctx = SiteContext::new(temp.path().join("site")).with_docs_mode(true);
        let mut registry = registry(temp.path());
        registry.register_all(&ctx);

        let payload = Payload::build(&registry, &ctx);
        let pages = payload.doc_pages.unwrap();
        assert_eq!(pages, vec![DocPage { title: "Classic".into(), url: "/docs/theme/".into() }]);
    }

    #[test]
    fn test_no_theme_is_null() {
        let registry = PluginRegistry::from_specs([PluginSpec::new("Feeds", "/nowhere")]);
        let payload = Payload::build(&registry, &SiteContext::new("/site"));
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["theme"].is_null());
    }
}
