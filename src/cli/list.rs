//! `list` command: installed plugins and their assets.

use anyhow::Result;

use super::{CategoryArgs, banner, not_found};
use crate::config::SiteContext;
use crate::registry::PluginRegistry;

/// Print one plugin's detailed listing, or every plugin.
///
/// Without a plugin and without category flags the listing is minimal (one
/// line per plugin); any flag switches every plugin to the detailed view.
pub fn list_plugins(
    registry: &PluginRegistry,
    ctx: &SiteContext,
    plugin: Option<&str>,
    categories: &CategoryArgs,
) -> Result<()> {
    let output = match plugin {
        Some(name) => match registry.plugin(name) {
            Ok(plugin) => plugin.detailed_list(ctx, &categories.request()),
            Err(_) => not_found(registry, name),
        },
        None => render_all(registry, ctx, categories),
    };
    print!("{output}");
    Ok(())
}

/// Banner plus every plugin's listing, in registration order.
pub fn render_all(registry: &PluginRegistry, ctx: &SiteContext, categories: &CategoryArgs) -> String {
    let mut message = banner();
    if registry.is_empty() {
        message.push_str("You have no plugins installed.\n");
        return message;
    }

    let minimal = categories.is_empty();
    let request = categories.request();
    for plugin in registry.plugins() {
        message.push_str(&plugin.list(ctx, &request, minimal));
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginSpec;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_empty() {
        let output = render_all(&PluginRegistry::new(), &SiteContext::new("/site"), &CategoryArgs::default());
        assert_eq!(output, format!("{}You have no plugins installed.\n", banner()));
    }

    #[test]
    fn test_render_minimal_then_detailed() {
        let temp = TempDir::new().unwrap();
        let layouts = temp.path().join("classic/assets/layouts");
        fs::create_dir_all(&layouts).unwrap();
        fs::write(layouts.join("post.html"), "").unwrap();

        let ctx = SiteContext::new(temp.path().join("site"));
        let mut registry = PluginRegistry::from_specs([
            PluginSpec::new("Classic", temp.path().join("classic")).theme(),
            PluginSpec::new("Feeds", temp.path().join("feeds")),
        ]);
        registry.register_all(&ctx);

        let minimal = render_all(&registry, &ctx, &CategoryArgs::default());
        assert!(minimal.contains(" Classic (theme)\n Feeds (feeds)\n"));

        let layouts_only = CategoryArgs {
            layouts: true,
            ..CategoryArgs::default()
        };
        let detailed = render_all(&registry, &ctx, &layouts_only);
        assert!(detailed.contains("Plugin: Classic (theme)"));
        assert!(detailed.contains(" layouts:\n   - post.html\n"));
        assert!(!detailed.contains("Plugin: Feeds"));
    }
}
