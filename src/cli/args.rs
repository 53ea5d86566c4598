//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// inkpot plugin asset pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: inkpot.toml)
    #[arg(short = 'C', long, global = true, default_value = "inkpot.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Site source directory (overrides `[site] source`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Enable documentation mode (overrides `[site] docs_mode`)
    #[arg(long, global = true)]
    pub docs_mode: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List installed plugins, or the assets of one plugin
    #[command(visible_alias = "l")]
    List {
        /// Plugin slug or name. If omitted, lists every plugin.
        plugin: Option<String>,

        #[command(flatten)]
        categories: CategoryArgs,
    },

    /// Copy plugin assets into the site so they can be customized
    #[command(visible_alias = "c")]
    Copy {
        /// Plugin slug or name
        plugin: String,

        /// Destination directory, relative to the site source
        /// (default: the plugin's override directory)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        path: Option<PathBuf>,

        /// Overwrite files in a non-empty destination
        #[arg(short, long)]
        force: bool,

        #[command(flatten)]
        categories: CategoryArgs,
    },

    /// Print the build payload exported to templates as JSON
    #[command(visible_alias = "p")]
    Payload {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the pages and files plugins contribute to the build
    #[command(visible_alias = "m")]
    Manifest,

    /// Print the file an include resolves to (user override or bundled)
    #[command(visible_alias = "i")]
    Include {
        /// Plugin slug or name
        plugin: String,

        /// Include name, e.g. `nav.html`
        file: String,
    },

    /// Turn a Markdown file (README, CHANGELOG, ...) into a doc page,
    /// moving its first `# Heading` into front matter
    CopyDoc {
        /// Markdown file to read
        #[arg(value_hint = clap::ValueHint::FilePath)]
        source: PathBuf,

        /// Doc page to write, e.g. `assets/docs/index.md`
        #[arg(value_hint = clap::ValueHint::FilePath)]
        dest: PathBuf,

        /// Permalink written into the front matter
        #[arg(short, long)]
        permalink: Option<String>,
    },
}

/// Category filter flags shared by `list` and `copy`.
///
/// No flag selects every category.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CategoryArgs {
    /// Select layouts
    #[arg(long)]
    pub layouts: bool,
    /// Select includes
    #[arg(long)]
    pub includes: bool,
    /// Select pages
    #[arg(long)]
    pub pages: bool,
    /// Select files
    #[arg(long)]
    pub files: bool,
    /// Select images
    #[arg(long)]
    pub images: bool,
    /// Select fonts
    #[arg(long)]
    pub fonts: bool,
    /// Select CSS and Sass (partials excluded)
    #[arg(long)]
    pub stylesheets: bool,
    /// Select CSS
    #[arg(long)]
    pub css: bool,
    /// Select Sass and SCSS
    #[arg(long)]
    pub sass: bool,
    /// Select JavaScript and CoffeeScript
    #[arg(long)]
    pub javascripts: bool,
    /// Select JavaScript
    #[arg(long)]
    pub js: bool,
    /// Select CoffeeScript
    #[arg(long)]
    pub coffee: bool,
    /// Select documentation pages
    #[arg(long)]
    pub docs: bool,
    /// Select the default configuration
    #[arg(long)]
    pub defaults: bool,
}

impl CategoryArgs {
    /// Names of the selected categories, in flag order.
    pub fn requested(&self) -> Vec<&'static str> {
        [
            (self.layouts, "layouts"),
            (self.includes, "includes"),
            (self.pages, "pages"),
            (self.files, "files"),
            (self.images, "images"),
            (self.fonts, "fonts"),
            (self.stylesheets, "stylesheets"),
            (self.css, "css"),
            (self.sass, "sass"),
            (self.javascripts, "javascripts"),
            (self.js, "js"),
            (self.coffee, "coffee"),
            (self.docs, "docs"),
            (self.defaults, "defaults"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.requested().is_empty()
    }
}
