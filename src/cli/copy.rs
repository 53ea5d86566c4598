//! `copy` command: copy plugin assets into the site for customization.

use std::path::Path;

use anyhow::{Context, Result};

use super::{CategoryArgs, not_found};
use crate::config::SiteContext;
use crate::error::InkError;
use crate::log;
use crate::registry::PluginRegistry;

/// Copy a plugin's selected assets.
///
/// With `path` the target is `<source>/<path>` and must be empty unless
/// `force` is given. Without it the target is the plugin's override
/// directory, which is written into as is.
pub fn copy_plugin_assets(
    registry: &PluginRegistry,
    ctx: &SiteContext,
    name: &str,
    path: Option<&Path>,
    force: bool,
    categories: &CategoryArgs,
) -> Result<()> {
    let Ok(plugin) = registry.plugin(name) else {
        not_found(registry, name)
    };

    let target = match path {
        Some(path) => ctx.source_join(path),
        None => ctx.override_root(plugin.slug()),
    };
    let force = force || path.is_none();

    let copied = match plugin.copy_asset_files(&target, &categories.request(), force) {
        Ok(copied) => copied,
        Err(e @ InkError::NotEmpty(_)) => {
            log!("error"; "{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to copy assets of {}", plugin.name()));
        }
    };

    print!("{}", render_copied(ctx, plugin.name(), &copied));
    Ok(())
}

/// `Copied files:` followed by one path per line, or a "nothing copied" note.
pub fn render_copied(ctx: &SiteContext, name: &str, copied: &[impl AsRef<Path>]) -> String {
    if copied.is_empty() {
        return format!("No files copied from {name}.\n");
    }

    let mut message = String::from("Copied files:\n");
    for path in copied {
        let path = path.as_ref();
        let shown = path.strip_prefix(&ctx.source).unwrap_or(path);
        message.push_str(&shown.to_string_lossy());
        message.push('\n');
    }
    message
}
