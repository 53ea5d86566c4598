//! Asset discovery and classification (reads the filesystem, no side effects).
//!
//! ```text
//! assets/
//! ├── config.yml             -> (defaults, not an asset)
//! ├── layouts/post.html      -> layouts  post.html
//! ├── stylesheets/
//! │   ├── site.scss          -> sass     site.scss
//! │   └── print.css          -> css      print.css
//! ├── javascripts/
//! │   ├── app.js             -> js       app.js
//! │   ├── menu.coffee        -> coffee   menu.coffee
//! │   └── app.ts             -> (skipped)
//! └── docs/
//!     ├── index.md           -> docs     index.md
//!     ├── _partials/note.md  -> docs     _partials/note.md
//!     └── _note.md           -> (skipped)
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use super::category::{AssetDir, Category};
use super::overrides::OverrideResolver;
use super::record::AssetRecord;
use super::settings::DisabledSet;
use crate::debug;

/// Per-category, discovery-ordered asset records of one plugin.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    records: BTreeMap<Category, Vec<AssetRecord>>,
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog every conventional directory under `assets_root`.
    ///
    /// Directories are visited in [`AssetDir::REGISTER_ORDER`]. A missing
    /// asset root or subdirectory contributes nothing.
    pub fn scan(assets_root: &Path, overrides: &OverrideResolver, disabled: &DisabledSet) -> Self {
        let mut catalog = Self::new();
        for dir in AssetDir::REGISTER_ORDER {
            catalog.scan_dir(assets_root, dir, overrides, disabled);
        }
        catalog
    }

    fn scan_dir(
        &mut self,
        assets_root: &Path,
        dir: AssetDir,
        overrides: &OverrideResolver,
        disabled: &DisabledSet,
    ) {
        let source_root = assets_root.join(dir.name());
        let files = find_assets(&source_root);
        debug!("catalog"; "{}: {} file(s) in {}", dir, files.len(), source_root.display());

        for relative in files {
            let Some(category) = dir.classify(&relative) else {
                continue;
            };
            let override_path = overrides.resolve(category, &relative);
            let record = AssetRecord::new(category, &source_root, relative)
                .with_override(override_path)
                .with_disabled(disabled);
            self.push(record);
        }
    }

    /// Append a record to its category.
    pub fn push(&mut self, record: AssetRecord) {
        self.records.entry(record.category()).or_default().push(record);
    }

    /// Every record of `category`, disabled ones included.
    pub fn get(&self, category: Category) -> &[AssetRecord] {
        self.records
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Enabled records of `category`.
    pub fn enabled(&self, category: Category) -> impl Iterator<Item = &AssetRecord> {
        self.get(category).iter().filter(|r| !r.is_disabled())
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Regular files under `dir`, relative to it, sorted by name per directory.
fn find_assets(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .sort(true)
        .skip_hidden(false)
        .parallelism(Parallelism::Serial)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| !e.file_type().is_dir())
        .map(|e| e.path())
        .filter(|path| path.is_file())
        .filter_map(|path| path.strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect()
}
