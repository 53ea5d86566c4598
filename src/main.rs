//! inkpot - plugin asset pipeline for static sites.

mod cli;
mod config;
mod error;
mod logger;
mod payload;
mod plugin;
mod registry;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use registry::PluginRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        // Works on plain files; no site configuration needed
        Commands::CopyDoc {
            source,
            dest,
            permalink,
        } => cli::copy_doc::copy_doc(source, dest, permalink.as_deref()),
        _ => run_site_command(&cli),
    }
}

/// Load the site, register its plugins and run a plugin command.
fn run_site_command(cli: &Cli) -> Result<()> {
    let config = SiteConfig::load(cli)?;
    let ctx = config.context();

    let mut registry = PluginRegistry::from_specs(config.plugins.iter().cloned());
    registry.register_all(&ctx);
    debug!("register"; "{} plugin(s) from {}", registry.len(), config.config_path.display());

    match &cli.command {
        Commands::List { plugin, categories } => {
            cli::list::list_plugins(&registry, &ctx, plugin.as_deref(), categories)
        }
        Commands::Copy {
            plugin,
            path,
            force,
            categories,
        } => cli::copy::copy_plugin_assets(
            &registry,
            &ctx,
            plugin,
            path.as_deref(),
            *force,
            categories,
        ),
        Commands::Payload { pretty } => cli::payload::print_payload(&registry, &ctx, *pretty),
        Commands::Manifest => cli::manifest::print_manifest(&registry, &ctx),
        Commands::Include { plugin, file } => {
            cli::include::print_include(&registry, &ctx, plugin, file)
        }
        // Dispatched in main before the site loads
        Commands::CopyDoc { .. } => Ok(()),
    }
}
