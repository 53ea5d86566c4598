//! A single discovered plugin asset.

use std::path::{Path, PathBuf};

use super::category::{AssetDir, Category};
use super::settings::DisabledSet;

/// One file found in a plugin's asset tree.
///
/// Immutable once cataloged: the disabled flag and the override path are
/// resolved when the record is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    category: Category,
    /// Path relative to the category's directory (e.g. `blog/index.html`).
    relative_path: PathBuf,
    /// `<assets_root>/<dir>` the file was found in.
    source_root: PathBuf,
    disabled: bool,
    /// User file superseding the bundled one, when present.
    override_path: Option<PathBuf>,
}

impl AssetRecord {
    pub fn new(
        category: Category,
        source_root: impl Into<PathBuf>,
        relative_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            category,
            relative_path: relative_path.into(),
            source_root: source_root.into(),
            disabled: false,
            override_path: None,
        }
    }

    /// Resolve the disabled flag against the plugin's disable rules.
    pub fn with_disabled(mut self, disabled: &DisabledSet) -> Self {
        self.disabled = disabled.disables(self.category, &self.relative_key());
        self
    }

    pub fn with_override(mut self, override_path: Option<PathBuf>) -> Self {
        self.override_path = override_path;
        self
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn dir(&self) -> AssetDir {
        self.category.dir()
    }

    #[inline]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    #[cfg(test)]
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[inline]
    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }

    /// Relative path with `/` separators, as used in disable rules and URLs.
    pub fn relative_key(&self) -> String {
        self.relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// File name without directories.
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name without its extension.
    pub fn file_stem(&self) -> String {
        self.relative_path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Sass partials (`_name.scss`) are only ever imported, never built.
    pub fn is_partial(&self) -> bool {
        self.file_name().starts_with('_')
    }

    /// Bundled file inside the plugin package.
    pub fn plugin_path(&self) -> PathBuf {
        self.source_root.join(&self.relative_path)
    }

    /// File the build should read: the user override when present.
    pub fn path(&self) -> PathBuf {
        self.override_path
            .clone()
            .unwrap_or_else(|| self.plugin_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yml::Mapping;

    fn disabled(yaml: &str) -> DisabledSet {
        let map: Mapping = serde_yml::from_str(yaml).unwrap();
        DisabledSet::from_directives(&map)
    }

    #[test]
    fn test_paths() {
        let record = AssetRecord::new(Category::Pages, "/pkg/assets/pages", "blog/index.html");
        assert_eq!(record.plugin_path(), PathBuf::from("/pkg/assets/pages/blog/index.html"));
        assert_eq!(record.path(), record.plugin_path());
        assert_eq!(record.relative_key(), "blog/index.html");
        assert_eq!(record.file_name(), "index.html");
        assert_eq!(record.file_stem(), "index");
        assert_eq!(record.dir(), AssetDir::Pages);
    }

    #[test]
    fn test_override_wins() {
        let record = AssetRecord::new(Category::Layouts, "/pkg/assets/layouts", "post.html")
            .with_override(Some(PathBuf::from("/site/_plugins/theme/layouts/post.html")));
        assert!(record.override_path().is_some());
        assert_eq!(record.path(), PathBuf::from("/site/_plugins/theme/layouts/post.html"));
    }

    #[test]
    fn test_disabled_by_category_or_file() {
        let rules = disabled("css: true\nsass: [theme/_vars.scss]");
        let css = AssetRecord::new(Category::Css, "/s", "a.css").with_disabled(&rules);
        let sass = AssetRecord::new(Category::Sass, "/s", "theme/_vars.scss").with_disabled(&rules);
        let other = AssetRecord::new(Category::Sass, "/s", "site.scss").with_disabled(&rules);
        assert!(css.is_disabled());
        assert!(sass.is_disabled());
        assert!(!other.is_disabled());
    }

    #[test]
    fn test_partial() {
        assert!(AssetRecord::new(Category::Sass, "/s", "lib/_mixins.scss").is_partial());
        assert!(!AssetRecord::new(Category::Sass, "/s", "_lib/site.scss").is_partial());
    }
}
