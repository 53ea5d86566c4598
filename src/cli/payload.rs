//! `payload` command: the JSON exported to templates.

use anyhow::{Context, Result};

use crate::config::SiteContext;
use crate::payload::Payload;
use crate::registry::PluginRegistry;

pub fn print_payload(registry: &PluginRegistry, ctx: &SiteContext, pretty: bool) -> Result<()> {
    let json = Payload::build(registry, ctx)
        .to_json(pretty)
        .context("failed to serialize payload")?;
    println!("{json}");
    Ok(())
}
