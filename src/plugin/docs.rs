//! Documentation page index, and turning project files into doc pages.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use super::front_matter::PageMeta;
use super::overrides::page_url;
use super::record::AssetRecord;
use super::spec::PluginKind;
use crate::error::InkError;

/// First level-one Markdown heading.
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

/// One entry of the documentation index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocPage {
    pub title: String,
    pub url: String,
}

/// Where a plugin's docs are hosted, without slashes around it.
///
/// - theme: `docs/theme`
/// - plugin: `docs/plugins/<slug>`
pub fn docs_base_path(kind: PluginKind, slug: &str) -> String {
    match kind {
        PluginKind::Theme => "docs/theme".to_string(),
        PluginKind::Plugin => format!("docs/plugins/{slug}"),
    }
}

/// URL of a doc at `relative` (slash separated) under `base`.
pub fn doc_url(base: &str, relative: &str, meta: &PageMeta) -> String {
    let page = page_url(relative, meta.permalink.as_deref());
    format!("/{}{}", base.trim_matches('/'), page)
}

impl DocPage {
    /// Build the index entry for a docs record, reading its front matter.
    pub fn from_record(base: &str, record: &AssetRecord) -> Self {
        let meta = PageMeta::read(&record.path());
        let url = doc_url(base, &record.relative_key(), &meta);
        let title = meta
            .link_title
            .or(meta.title)
            .unwrap_or_else(|| record.file_stem());
        Self { title, url }
    }

    /// Number of URL segments, ignoring a trailing slash.
    pub fn depth(&self) -> usize {
        self.url.trim_end_matches('/').split('/').count()
    }
}

/// Index a plugin's docs, shallowest first.
///
/// The sort is stable, so pages at the same depth keep discovery order.
pub fn index<'a>(base: &str, docs: impl IntoIterator<Item = &'a AssetRecord>) -> Vec<DocPage> {
    let mut pages: Vec<_> = docs
        .into_iter()
        .map(|record| DocPage::from_record(base, record))
        .collect();
    pages.sort_by_key(DocPage::depth);
    pages
}

/// Replace the first `# Heading` with doc front matter.
///
/// ```text
/// # Feed Tools        ---
/// Some text     ->    title: "Feed Tools"
///                     permalink: /docs/feeds/
///                     ---
///                     Some text
/// ```
///
/// Content without a level-one heading is returned unchanged.
pub fn doc_front_matter(content: &str, permalink: Option<&str>) -> String {
    HEADING
        .replace(content, |caps: &Captures| {
            let title = caps[1].trim().replace('\\', "\\\\").replace('"', "\\\"");
            let mut yaml = format!("---\ntitle: \"{title}\"\n");
            if let Some(permalink) = permalink.map(str::trim).filter(|p| !p.is_empty()) {
                yaml.push_str(&format!("permalink: {permalink}\n"));
            }
            yaml.push_str("---");
            yaml
        })
        .into_owned()
}

/// Write `source` (a README, CHANGELOG, ...) to `dest` as a doc page.
///
/// Parent directories of `dest` are created.
pub fn copy_doc(source: &Path, dest: &Path, permalink: Option<&str>) -> Result<(), InkError> {
    let content = fs::read_to_string(source).map_err(|e| InkError::io(source, e))?;

    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| InkError::io(parent, e))?;
    }
    fs::write(dest, doc_front_matter(&content, permalink)).map_err(|e| InkError::io(dest, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::catalog::tests::write_tree;
    use crate::plugin::category::Category;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_docs_base_path() {
        assert_eq!(docs_base_path(PluginKind::Theme, "theme"), "docs/theme");
        assert_eq!(docs_base_path(PluginKind::Plugin, "feeds"), "docs/plugins/feeds");
    }

    #[test]
    fn test_doc_url() {
        let none = PageMeta::default();
        assert_eq!(doc_url("docs/theme", "index.md", &none), "/docs/theme/");
        assert_eq!(doc_url("docs/theme", "guide/index.md", &none), "/docs/theme/guide/");
        assert_eq!(doc_url("docs/theme", "setup.md", &none), "/docs/theme/setup.html");

        let meta = PageMeta {
            permalink: Some("/usage/".into()),
            ..PageMeta::default()
        };
        assert_eq!(doc_url("docs/plugins/feeds", "x.md", &meta), "/docs/plugins/feeds/usage/");
    }

    #[test]
    fn test_title_fallbacks() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");
        write_tree(temp.path(), &["docs/plain.md"]);
        fs::write(root.join("titled.md"), "---\ntitle: Titled\n---\n").unwrap();
        fs::write(root.join("linked.md"), "---\ntitle: T\nlink_title: Linked\n---\n").unwrap();

        let title = |file: &str| DocPage::from_record("docs/theme", &AssetRecord::new(Category::Docs, &root, file)).title;
        assert_eq!(title("plain.md"), "plain");
        assert_eq!(title("titled.md"), "Titled");
        assert_eq!(title("linked.md"), "Linked");
    }

    #[test]
    fn test_index_sorted_by_depth_stable() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");
        write_tree(
            temp.path(),
            &[
                "docs/a/b/deep.md",
                "docs/guide/setup.md",
                "docs/index.md",
                "docs/zeta.md",
                "docs/alpha.md",
            ],
        );
        let records: Vec<_> = ["a/b/deep.md", "guide/setup.md", "index.md", "zeta.md", "alpha.md"]
            .into_iter()
            .map(|f| AssetRecord::new(Category::Docs, &root, f))
            .collect();

        let urls: Vec<_> = index("docs/theme", &records)
            .into_iter()
            .map(|p| p.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "/docs/theme/",
                "/docs/theme/zeta.html",
                "/docs/theme/alpha.html",
                "/docs/theme/guide/setup.html",
                "/docs/theme/a/b/deep.html",
            ]
        );
    }

    #[test]
    fn test_doc_front_matter() {
        let readme = "Intro\n# Feed Tools \nUsage\n# Second\n";
        assert_eq!(
            doc_front_matter(readme, Some("/docs/feeds/")),
            "Intro\n---\ntitle: \"Feed Tools\"\npermalink: /docs/feeds/\n---\nUsage\n# Second\n"
        );
        assert_eq!(
            doc_front_matter("# Say \"hi\"\n", None),
            "---\ntitle: \"Say \\\"hi\\\"\"\n---\n"
        );
        assert_eq!(doc_front_matter("## Not a title\n", None), "## Not a title\n");
    }

    #[test]
    fn test_copy_doc_writes_page() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("CHANGELOG.md");
        fs::write(&source, "# Changelog\n\n## 1.0\n").unwrap();
        let dest = temp.path().join("assets/docs/changelog.md");

        copy_doc(&source, &dest, Some("/changelog/")).unwrap();

        let content = fs::read_to_string(&dest).unwrap();
        assert_eq!(content, "---\ntitle: \"Changelog\"\npermalink: /changelog/\n---\n\n## 1.0\n");
        let meta = PageMeta::parse(&content);
        assert_eq!(meta.title.as_deref(), Some("Changelog"));
        assert_eq!(meta.permalink.as_deref(), Some("/changelog/"));
    }

    #[test]
    fn test_copy_doc_missing_source() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("README.md");
        let err = copy_doc(&missing, &temp.path().join("out.md"), None).unwrap_err();
        assert!(matches!(err, InkError::Io(path, _) if path == missing));
    }
}
