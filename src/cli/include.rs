//! `include` command: which file a plugin include resolves to.

use anyhow::{Result, bail};

use super::not_found;
use crate::config::SiteContext;
use crate::registry::PluginRegistry;

/// Print the effective path of `file` in a plugin's includes.
///
/// A user override under the plugin's override directory wins over the
/// bundled include.
pub fn print_include(registry: &PluginRegistry, ctx: &SiteContext, name: &str, file: &str) -> Result<()> {
    let Ok(plugin) = registry.plugin(name) else {
        not_found(registry, name)
    };

    let Some(path) = plugin.include(file) else {
        bail!("include '{}' not found in {}", file, plugin.name());
    };
    println!("{}", path.strip_prefix(&ctx.source).unwrap_or(&path).display());
    Ok(())
}
