//! Build inclusion: what each plugin contributes to one site build.
//!
//! Pages are claimed by destination URL, first registered wins. Everything
//! else is collected as a file with its effective source path.
//!
//! | Category      | Normal build         | Docs mode              |
//! |---------------|----------------------|------------------------|
//! | pages         | claimed by URL       | skipped                |
//! | docs          | skipped              | claimed by doc URL     |
//! | sass partials | skipped              | skipped                |
//! | others        | collected as files   | collected as files     |

use std::path::PathBuf;

use super::Plugin;
use super::category::Category;
use super::docs::doc_url;
use super::front_matter::PageMeta;
use super::overrides::{ClaimedUrls, record_url};
use super::record::AssetRecord;
use super::select::CategoryRequest;
use crate::config::SiteContext;
use crate::debug;

/// Categories collected as-is. Stylesheets and javascripts go through
/// their own accessors.
const STATIC_CATEGORIES: [Category; 5] = [
    Category::Layouts,
    Category::Includes,
    Category::Images,
    Category::Fonts,
    Category::Files,
];

/// A page added to the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPage {
    /// Slug of the contributing plugin.
    pub plugin: String,
    pub url: String,
    pub source: PathBuf,
}

/// A non-page asset added to the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    pub plugin: String,
    /// `<dir>/<relative_path>`, as the asset sits in the plugin package.
    pub relative_path: PathBuf,
    pub source: PathBuf,
}

/// Pages and files gathered across plugins for one build pass.
#[derive(Debug, Default)]
pub struct BuildSet {
    claimed: ClaimedUrls,
    pub pages: Vec<BuildPage>,
    pub files: Vec<BuildFile>,
}

impl BuildSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page unless its URL is already taken.
    pub fn claim_page(&mut self, plugin: &str, url: String, source: PathBuf) -> bool {
        if !self.claimed.claim(&url) {
            debug!("build"; "{} already claimed, skipping {}", url, source.display());
            return false;
        }
        self.pages.push(BuildPage {
            plugin: plugin.to_string(),
            url,
            source,
        });
        true
    }

    pub fn add_file(&mut self, plugin: &str, record: &AssetRecord) {
        self.files.push(BuildFile {
            plugin: plugin.to_string(),
            relative_path: PathBuf::from(record.dir().name()).join(record.relative_path()),
            source: record.path(),
        });
    }

    #[cfg(test)]
    pub fn is_claimed(&self, url: &str) -> bool {
        self.claimed.is_claimed(url)
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.files.is_empty()
    }
}

impl Plugin {
    /// Add the enabled assets selected by `request` to `build`.
    ///
    /// Stylesheets and javascripts come from [`Plugin::stylesheets`] and
    /// [`Plugin::javascripts`], so Sass partials never reach the build.
    pub fn add_asset_files(&self, build: &mut BuildSet, request: &CategoryRequest, ctx: &SiteContext) {
        let wanted = |record: &&AssetRecord| request.includes(record.category());

        if ctx.docs_mode {
            for record in self.assets(Category::Docs).into_iter().filter(wanted) {
                let meta = PageMeta::read(&record.path());
                let url = doc_url(&self.docs_base_path(), &record.relative_key(), &meta);
                build.claim_page(self.slug(), url, record.path());
            }
        } else {
            for record in self.assets(Category::Pages).into_iter().filter(wanted) {
                build.claim_page(self.slug(), record_url(record), record.path());
            }
        }

        let files = STATIC_CATEGORIES
            .into_iter()
            .flat_map(|category| self.assets(category))
            .chain(self.stylesheets())
            .chain(self.javascripts());
        for record in files.filter(wanted) {
            build.add_file(self.slug(), record);
        }
    }
}
