//! Human-readable plugin listings.

use std::path::Path;

use super::category::Category;
use super::docs::doc_url;
use super::front_matter::PageMeta;
use super::overrides::record_url;
use super::record::AssetRecord;
use super::select::{CategoryRequest, Selection};
use super::Plugin;
use crate::config::SiteContext;

const MINIMAL_WIDTH: usize = 30;
const INFO_WIDTH: usize = 35;
const RULE_WIDTH: usize = 80;

impl Plugin {
    /// One line: ` Name (slug) - v1.0            - description`.
    pub fn minimal_list(&self) -> String {
        let mut line = format!(" {} ({})", self.name(), self.slug());
        if let Some(version) = self.version() {
            line.push_str(&format!(" - v{version}"));
        }
        if let Some(description) = self.description() {
            line = format!("{line:<MINIMAL_WIDTH$} - {description}");
        }
        line.push('\n');
        line
    }

    /// Header plus one block per non-empty selected category.
    ///
    /// Empty when the selection holds nothing.
    pub fn detailed_list(&self, ctx: &SiteContext, request: &CategoryRequest) -> String {
        let assets = self.assets_list(ctx, &self.select(request));
        if assets.is_empty() {
            return String::new();
        }

        let mut header = format!("Plugin: {}", self.name());
        if self.is_theme() {
            header.push_str(" (theme)");
        }
        if let Some(version) = self.version() {
            header.push_str(&format!(" - v{version}"));
        }
        header.push_str(&format!("\nSlug: {}", self.slug()));
        if let Some(description) = self.description() {
            header.push_str(&format!("\n{description}"));
        }
        if let Some(website) = self.website() {
            header.push_str(&format!("\n{website}"));
        }

        format!("\n{header}\n{}\n{assets}\n", "=".repeat(RULE_WIDTH))
    }

    /// Minimal or detailed listing.
    pub fn list(&self, ctx: &SiteContext, request: &CategoryRequest, minimal: bool) -> String {
        if minimal {
            self.minimal_list()
        } else {
            self.detailed_list(ctx, request)
        }
    }

    fn assets_list(&self, ctx: &SiteContext, selection: &Selection<'_>) -> String {
        let mut message = String::new();

        for (category, records) in selection.groups() {
            let heading = match category {
                Category::Docs => format!("documentation: /{}/", self.docs_base_path()),
                other => other.name().to_string(),
            };
            let lines = records.iter().map(|r| self.info_line(ctx, r));
            message.push_str(&block(&heading, lines));
            message.push('\n');
        }

        if let Some(config) = selection.defaults() {
            let mut lines = config.to_yaml_lines();
            if lines.is_empty() {
                lines.push("{}".to_string());
            }
            let lines = lines.into_iter().map(|l| format!("   {l}"));
            message.push_str(&block("default configuration", lines));
            message.push('\n');
        }

        message
    }

    /// `   - file.css                            <status>`
    ///
    /// Status is `-disabled-`, the override source, or the page URL.
    fn info_line(&self, ctx: &SiteContext, record: &AssetRecord) -> String {
        let status = if record.is_disabled() {
            "-disabled-".to_string()
        } else if let Some(path) = record.override_path() {
            format!("from: {}", relative_to(path, &ctx.source))
        } else {
            match record.category() {
                Category::Pages => record_url(record),
                Category::Docs => {
                    let meta = PageMeta::read(&record.path());
                    doc_url(&self.docs_base_path(), &record.relative_key(), &meta)
                }
                _ => String::new(),
            }
        };

        let line = format!("   - {:<INFO_WIDTH$} {status}", record.relative_key());
        line.trim_end().to_string()
    }
}

fn block(heading: &str, lines: impl Iterator<Item = String>) -> String {
    let mut block = format!(" {heading}:\n");
    for line in lines {
        block.push_str(&line);
        block.push('\n');
    }
    block
}

fn relative_to(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::catalog::tests::write_tree;
    use crate::plugin::spec::PluginSpec;
    use crate::plugin::tests::plugin_at;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_minimal_list() {
        let plugin = Plugin::new(
            PluginSpec::new("Feeds", "/p")
                .with_version("1.2.0")
                .with_description("RSS feeds"),
        );
        assert_eq!(plugin.minimal_list(), " Feeds (feeds) - v1.2.0        - RSS feeds\n");

        let bare = Plugin::new(PluginSpec::new("Feeds", "/p"));
        assert_eq!(bare.minimal_list(), " Feeds (feeds)\n");
    }

    #[test]
    fn test_detailed_list_header_and_blocks() {
        let temp = TempDir::new().unwrap();
        let spec = PluginSpec::new("Classic", "")
            .theme()
            .with_version("2.0")
            .with_website("https://example.com");
        let (plugin, ctx) = plugin_at(
            temp.path(),
            spec,
            &["assets/layouts/post.html", "assets/pages/about/index.md"],
        );

        let listing = plugin.detailed_list(&ctx, &CategoryRequest::all());
        let expected_header = format!(
            "\nPlugin: Classic (theme) - v2.0\nSlug: theme\nhttps://example.com\n{}\n",
            "=".repeat(80)
        );
        assert!(listing.starts_with(&expected_header), "{listing}");
        assert!(listing.contains(" layouts:\n   - post.html\n"));
        assert!(listing.contains(" pages:\n   - about/index.md"));
        assert!(listing.contains("/about/"));
    }

    #[test]
    fn test_detailed_list_marks_disabled() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &["pkg/assets/config.yml"]);
        fs::write(temp.path().join("pkg/assets/config.yml"), "disable:\n  css: true\n").unwrap();
        let (plugin, ctx) = plugin_at(
            temp.path(),
            PluginSpec::new("Styles", ""),
            &["assets/stylesheets/site.css"],
        );

        let listing = plugin.detailed_list(&ctx, &"css".into());
        let line = listing.lines().find(|l| l.contains("site.css")).unwrap();
        assert!(line.ends_with("-disabled-"));
        assert_eq!(line.find("-disabled-"), Some(5 + INFO_WIDTH + 1));
    }

    #[test]
    fn test_detailed_list_shows_override_source() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &["site/_plugins/styles/stylesheets/site.css"]);
        let (plugin, ctx) = plugin_at(
            temp.path(),
            PluginSpec::new("Styles", ""),
            &["assets/stylesheets/site.css"],
        );

        let listing = plugin.detailed_list(&ctx, &"stylesheets".into());
        assert!(listing.contains("from: _plugins/styles/stylesheets/site.css"));
    }

    #[test]
    fn test_detailed_list_docs_and_defaults() {
        let temp = TempDir::new().unwrap();
        write_tree(temp.path(), &["pkg/assets/config.yml"]);
        fs::write(temp.path().join("pkg/assets/config.yml"), "title: Feed\n").unwrap();
        let (plugin, ctx) = plugin_at(
            temp.path(),
            PluginSpec::new("Feeds", ""),
            &["assets/docs/index.md"],
        );

        let listing = plugin.detailed_list(&ctx, &CategoryRequest::all());
        assert!(listing.contains(" documentation: /docs/plugins/feeds/:\n"));
        assert!(listing.contains("/docs/plugins/feeds/\n"));
        assert!(listing.contains(" default configuration:\n   title: Feed\n"));
    }

    #[test]
    fn test_detailed_list_bare_plugin_shows_defaults() {
        let temp = TempDir::new().unwrap();
        let (plugin, ctx) = plugin_at(temp.path(), PluginSpec::new("Bare", ""), &[]);

        let listing = plugin.detailed_list(&ctx, &CategoryRequest::all());
        assert!(listing.starts_with("\nPlugin: Bare\nSlug: bare\n"), "{listing}");
        assert!(listing.ends_with(" default configuration:\n   {}\n\n\n"), "{listing}");
    }

    #[test]
    fn test_detailed_list_empty_selection() {
        let temp = TempDir::new().unwrap();
        let (plugin, ctx) = plugin_at(
            temp.path(),
            PluginSpec::new("Feeds", ""),
            &["assets/images/a.png"],
        );
        assert_eq!(plugin.detailed_list(&ctx, &"fonts".into()), "");
        assert!(plugin.list(&ctx, &"fonts".into(), true).starts_with(" Feeds"));
    }
}
