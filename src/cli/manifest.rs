//! `manifest` command: what plugins add to one build.

use anyhow::Result;

use crate::config::SiteContext;
use crate::plugin::BuildSet;
use crate::registry::PluginRegistry;

pub fn print_manifest(registry: &PluginRegistry, ctx: &SiteContext) -> Result<()> {
    let build = registry.add_asset_files(ctx);
    print!("{}", render(&build, ctx));
    Ok(())
}

/// ```text
/// pages (1):
///   /about/                          theme  _plugins/theme/pages/about/index.md
/// files (1):
///   feeds/javascripts/feed.js               /vendor/feeds/assets/javascripts/feed.js
/// ```
pub fn render(build: &BuildSet, ctx: &SiteContext) -> String {
    if build.is_empty() {
        return "No plugin assets in the build.\n".to_string();
    }

    let shown = |path: &std::path::Path| {
        path.strip_prefix(&ctx.source)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    };

    let mut out = String::new();
    if !build.pages.is_empty() {
        out.push_str(&format!("pages ({}):\n", build.pages.len()));
        for page in &build.pages {
            out.push_str(&format!("  {:<32} {}  {}\n", page.url, page.plugin, shown(&page.source)));
        }
    }
    if !build.files.is_empty() {
        out.push_str(&format!("files ({}):\n", build.files.len()));
        for file in &build.files {
            let name = format!("{}/{}", file.plugin, file.relative_path.display());
            out.push_str(&format!("  {:<40} {}\n", name, shown(&file.source)));
        }
    }
    out
}
