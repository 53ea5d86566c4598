//! Asset categories and the directories they are discovered in.

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// Classification bucket of a discovered asset.
///
/// Declaration order is the order categories appear in listings and
/// selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Docs,
    Layouts,
    Includes,
    Pages,
    Sass,
    Css,
    Js,
    Coffee,
    Images,
    Fonts,
    Files,
}

/// Category names accepted as keys of the `disable` config map.
///
/// `stylesheets` and `javascripts` are accepted but match no record, since
/// records always carry a concrete category.
pub const DISABLE_KEYS: &[&str] = &[
    "pages",
    "sass",
    "css",
    "stylesheets",
    "javascripts",
    "js",
    "coffee",
    "images",
    "fonts",
    "files",
];

impl Category {
    /// Every category, in listing order.
    pub const ALL: [Self; 11] = [
        Self::Docs,
        Self::Layouts,
        Self::Includes,
        Self::Pages,
        Self::Sass,
        Self::Css,
        Self::Js,
        Self::Coffee,
        Self::Images,
        Self::Fonts,
        Self::Files,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Docs => "docs",
            Self::Layouts => "layouts",
            Self::Includes => "includes",
            Self::Pages => "pages",
            Self::Sass => "sass",
            Self::Css => "css",
            Self::Js => "js",
            Self::Coffee => "coffee",
            Self::Images => "images",
            Self::Fonts => "fonts",
            Self::Files => "files",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Directory (under the asset root) this category is discovered in.
    pub const fn dir(self) -> AssetDir {
        match self {
            Self::Docs => AssetDir::Docs,
            Self::Layouts => AssetDir::Layouts,
            Self::Includes => AssetDir::Includes,
            Self::Pages => AssetDir::Pages,
            Self::Sass | Self::Css => AssetDir::Stylesheets,
            Self::Js | Self::Coffee => AssetDir::Javascripts,
            Self::Images => AssetDir::Images,
            Self::Fonts => AssetDir::Fonts,
            Self::Files => AssetDir::Files,
        }
    }

    /// Whether `name` is accepted as a `disable` key.
    pub fn can_disable(name: &str) -> bool {
        DISABLE_KEYS.contains(&name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conventional subdirectory of a plugin's asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetDir {
    Layouts,
    Includes,
    Pages,
    Files,
    Images,
    Fonts,
    Javascripts,
    Stylesheets,
    Docs,
}

impl AssetDir {
    /// Order directories are cataloged in during registration.
    pub const REGISTER_ORDER: [Self; 9] = [
        Self::Layouts,
        Self::Includes,
        Self::Javascripts,
        Self::Fonts,
        Self::Images,
        Self::Docs,
        Self::Files,
        Self::Pages,
        Self::Stylesheets,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Layouts => "layouts",
            Self::Includes => "includes",
            Self::Pages => "pages",
            Self::Files => "files",
            Self::Images => "images",
            Self::Fonts => "fonts",
            Self::Javascripts => "javascripts",
            Self::Stylesheets => "stylesheets",
            Self::Docs => "docs",
        }
    }

    /// Classify a file found under this directory.
    ///
    /// Returns `None` for files that are not assets: scripts that are
    /// neither `.js` nor `.coffee`, and private docs (base name starting
    /// with `_`).
    pub fn classify(self, relative: &Path) -> Option<Category> {
        let ext = relative
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match self {
            Self::Stylesheets if is_sass_ext(ext) => Some(Category::Sass),
            Self::Stylesheets => Some(Category::Css),
            Self::Javascripts => match ext {
                "js" => Some(Category::Js),
                "coffee" => Some(Category::Coffee),
                _ => None,
            },
            Self::Docs if is_private(relative) => None,
            Self::Docs => Some(Category::Docs),
            Self::Layouts => Some(Category::Layouts),
            Self::Includes => Some(Category::Includes),
            Self::Pages => Some(Category::Pages),
            Self::Files => Some(Category::Files),
            Self::Images => Some(Category::Images),
            Self::Fonts => Some(Category::Fonts),
        }
    }
}

impl fmt::Display for AssetDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_sass_ext(ext: &str) -> bool {
    matches!(ext, "scss" | "sass")
}

fn is_private(relative: &Path) -> bool {
    relative
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
        assert_eq!(Category::from_name("stylesheets"), None);
        assert_eq!(Category::from_name("defaults"), None);
    }

    #[test]
    fn test_classify_stylesheets() {
        let dir = AssetDir::Stylesheets;
        assert_eq!(dir.classify(Path::new("site.scss")), Some(Category::Sass));
        assert_eq!(dir.classify(Path::new("_mixins.sass")), Some(Category::Sass));
        assert_eq!(dir.classify(Path::new("print.css")), Some(Category::Css));
        assert_eq!(dir.classify(Path::new("vendor/reset")), Some(Category::Css));
    }

    #[test]
    fn test_classify_javascripts() {
        let dir = AssetDir::Javascripts;
        assert_eq!(dir.classify(Path::new("app.js")), Some(Category::Js));
        assert_eq!(dir.classify(Path::new("lib/util.coffee")), Some(Category::Coffee));
        assert_eq!(dir.classify(Path::new("app.ts")), None);
        assert_eq!(dir.classify(Path::new("README")), None);
    }

    #[test]
    fn test_classify_docs_skips_private() {
        let dir = AssetDir::Docs;
        assert_eq!(dir.classify(Path::new("index.md")), Some(Category::Docs));
        assert_eq!(dir.classify(Path::new("guide/setup.md")), Some(Category::Docs));
        assert_eq!(dir.classify(Path::new("_draft.md")), None);
        assert_eq!(dir.classify(Path::new("guide/_note.md")), None);
        assert_eq!(dir.classify(Path::new("_partials/note.md")), Some(Category::Docs));
    }

    #[test]
    fn test_dirs_cover_categories() {
        assert_eq!(Category::Sass.dir(), AssetDir::Stylesheets);
        assert_eq!(Category::Coffee.dir(), AssetDir::Javascripts);
        assert_eq!(Category::Files.dir().name(), "files");
    }

    #[test]
    fn test_can_disable() {
        assert!(Category::can_disable("css"));
        assert!(Category::can_disable("stylesheets"));
        assert!(!Category::can_disable("layouts"));
        assert!(!Category::can_disable("docs"));
    }
}
