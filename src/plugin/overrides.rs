//! User override lookup and first-registered-wins URL claims.
//!
//! ```text
//! <source>/<custom_dir>/<slug>/
//! ├── config.yml           # merged over the plugin's defaults
//! ├── layouts/post.html    # replaces assets/layouts/post.html
//! └── stylesheets/site.css # replaces assets/stylesheets/site.css
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use super::category::{AssetDir, Category};
use super::front_matter::PageMeta;
use super::record::AssetRecord;
use crate::config::SiteContext;

/// Resolves user files that supersede a plugin's bundled assets.
#[derive(Debug, Clone)]
pub struct OverrideResolver {
    root: PathBuf,
}

impl OverrideResolver {
    pub fn new(ctx: &SiteContext, slug: &str) -> Self {
        Self {
            root: ctx.override_root(slug),
        }
    }

    /// Where a user file for this asset would live.
    pub fn user_path(&self, dir: AssetDir, relative: &Path) -> PathBuf {
        self.root.join(dir.name()).join(relative)
    }

    /// Existing user file superseding the bundled asset, if any.
    ///
    /// Documentation is never overridden.
    pub fn resolve(&self, category: Category, relative: &Path) -> Option<PathBuf> {
        if category == Category::Docs {
            return None;
        }
        let candidate = self.user_path(category.dir(), relative);
        candidate.is_file().then_some(candidate)
    }
}

/// Destination URLs already taken during one build pass.
///
/// Append-only: the first claimant of a URL keeps it.
#[derive(Debug, Default)]
pub struct ClaimedUrls(FxHashSet<String>);

impl ClaimedUrls {
    /// Claim `url`. Returns `false` when it was already taken.
    pub fn claim(&mut self, url: &str) -> bool {
        self.0.insert(url.to_string())
    }

    #[cfg(test)]
    pub fn is_claimed(&self, url: &str) -> bool {
        self.0.contains(url)
    }
}

/// Markup extensions rendered to `.html`.
const MARKUP_EXTENSIONS: &[&str] = &["md", "markdown", "mkd", "mkdn", "textile"];

/// Destination URL of a page at `relative` (slash separated).
///
/// A `permalink` wins. Otherwise markup extensions become `.html` and a
/// trailing `index.html` collapses to its directory.
///
/// # Examples
///
/// - `page_url("about.md", None)` -> `/about.html`
/// - `page_url("blog/index.html", None)` -> `/blog/`
/// - `page_url("feed.xml", Some("/atom.xml"))` -> `/atom.xml`
pub fn page_url(relative: &str, permalink: Option<&str>) -> String {
    if let Some(permalink) = permalink.map(str::trim).filter(|p| !p.is_empty()) {
        return if permalink.starts_with('/') {
            permalink.to_string()
        } else {
            format!("/{permalink}")
        };
    }

    let mut url = format!("/{}", relative.trim_start_matches('/'));
    if let Some((stem, ext)) = url.rsplit_once('.')
        && !stem.ends_with('/')
        && MARKUP_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
    {
        url = format!("{stem}.html");
    }
    if let Some(dir) = url.strip_suffix("index.html")
        && dir.ends_with('/')
    {
        url = dir.to_string();
    }
    url
}

/// Destination URL of a page record, honoring its front matter permalink.
pub fn record_url(record: &AssetRecord) -> String {
    let meta = PageMeta::read(&record.path());
    page_url(&record.relative_key(), meta.permalink.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_existing_override() {
        let temp = TempDir::new().unwrap();
        let ctx = SiteContext::new(temp.path());
        let resolver = OverrideResolver::new(&ctx, "theme");

        let user_file = temp.path().join("_plugins/theme/layouts/post.html");
        fs::create_dir_all(user_file.parent().unwrap()).unwrap();
        fs::write(&user_file, "mine").unwrap();

        assert_eq!(
            resolver.resolve(Category::Layouts, Path::new("post.html")),
            Some(user_file)
        );
        assert_eq!(resolver.resolve(Category::Layouts, Path::new("page.html")), None);
    }

    #[test]
    fn test_resolve_uses_asset_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = SiteContext::new(temp.path());
        let resolver = OverrideResolver::new(&ctx, "feeds");

        let user_file = temp.path().join("_plugins/feeds/stylesheets/site.scss");
        fs::create_dir_all(user_file.parent().unwrap()).unwrap();
        fs::write(&user_file, "").unwrap();

        assert_eq!(
            resolver.resolve(Category::Sass, Path::new("site.scss")),
            Some(user_file)
        );
    }

    #[test]
    fn test_docs_never_overridden() {
        let temp = TempDir::new().unwrap();
        let ctx = SiteContext::new(temp.path());
        let resolver = OverrideResolver::new(&ctx, "feeds");

        let user_file = temp.path().join("_plugins/feeds/docs/index.md");
        fs::create_dir_all(user_file.parent().unwrap()).unwrap();
        fs::write(&user_file, "").unwrap();

        assert_eq!(resolver.resolve(Category::Docs, Path::new("index.md")), None);
    }

    #[test]
    fn test_claims_first_wins() {
        let mut claimed = ClaimedUrls::default();
        assert!(claimed.claim("/about/"));
        assert!(!claimed.claim("/about/"));
        assert!(claimed.claim("/blog/"));
        assert!(claimed.is_claimed("/about/"));
        assert!(!claimed.is_claimed("/contact/"));
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("about.md", None), "/about.html");
        assert_eq!(page_url("about.html", None), "/about.html");
        assert_eq!(page_url("index.html", None), "/");
        assert_eq!(page_url("blog/index.markdown", None), "/blog/");
        assert_eq!(page_url("feed.xml", None), "/feed.xml");
        assert_eq!(page_url("robots.txt", None), "/robots.txt");
        assert_eq!(page_url("notindex.html", None), "/notindex.html");
    }

    #[test]
    fn test_record_url_reads_permalink() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("pages");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("feed.xml"), "---\npermalink: /atom.xml\n---\n").unwrap();
        fs::write(root.join("about.md"), "# About\n").unwrap();

        let feed = AssetRecord::new(Category::Pages, &root, "feed.xml");
        let about = AssetRecord::new(Category::Pages, &root, "about.md");
        assert_eq!(record_url(&feed), "/atom.xml");
        assert_eq!(record_url(&about), "/about.html");
    }

    #[test]
    fn test_page_url_permalink() {
        assert_eq!(page_url("feed.xml", Some("/atom.xml")), "/atom.xml");
        assert_eq!(page_url("about.md", Some("me/")), "/me/");
        assert_eq!(page_url("about.md", Some("  ")), "/about.html");
    }
}
