//! Category selection with `stylesheets`/`javascripts` aliasing.

use std::collections::BTreeSet;

use super::catalog::AssetCatalog;
use super::category::Category;
use super::record::AssetRecord;
use super::settings::PluginConfig;

/// Name of the synthetic category carrying the merged configuration.
pub const DEFAULTS: &str = "defaults";

/// Parsed set of requested categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRequest {
    categories: BTreeSet<Category>,
    defaults: bool,
    /// Sass partials are dropped when sass only came in through `stylesheets`.
    sass_partials: bool,
}

impl CategoryRequest {
    /// Every category, defaults included.
    pub fn all() -> Self {
        Self {
            categories: Category::ALL.into_iter().collect(),
            defaults: true,
            sass_partials: true,
        }
    }

    /// Expand requested names.
    ///
    /// | Name          | Selects                                  |
    /// |---------------|------------------------------------------|
    /// | `stylesheets` | `css`, `sass` (partials need `sass` too) |
    /// | `javascripts` | `js`, `coffee`                           |
    /// | `defaults`    | merged configuration                     |
    /// | category name | that category                            |
    ///
    /// Unknown names are dropped. Nothing left selects everything.
    pub fn parse<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories = BTreeSet::new();
        let mut defaults = false;
        let mut stylesheets = false;
        let mut sass = false;

        for name in names {
            match name.as_ref().trim() {
                "stylesheets" => {
                    stylesheets = true;
                    categories.extend([Category::Css, Category::Sass]);
                }
                "javascripts" => categories.extend([Category::Js, Category::Coffee]),
                DEFAULTS => defaults = true,
                other => {
                    if let Some(category) = Category::from_name(other) {
                        sass |= category == Category::Sass;
                        categories.insert(category);
                    }
                }
            }
        }

        if categories.is_empty() && !defaults {
            return Self::all();
        }

        Self {
            categories,
            defaults,
            sass_partials: sass || !stylesheets,
        }
    }

    #[cfg(test)]
    pub fn is_all(&self) -> bool {
        *self == Self::all()
    }

    pub fn includes(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn includes_defaults(&self) -> bool {
        self.defaults
    }

    fn accepts(&self, record: &AssetRecord) -> bool {
        self.includes(record.category())
            && (self.sass_partials || record.category() != Category::Sass || !record.is_partial())
    }
}

impl Default for CategoryRequest {
    fn default() -> Self {
        Self::all()
    }
}

impl From<&str> for CategoryRequest {
    fn from(name: &str) -> Self {
        Self::parse([name])
    }
}

/// Records chosen from one plugin's catalog, grouped by category.
///
/// Groups appear in listing order and empty groups are left out. Disabled
/// records are kept; callers building the site skip them.
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    groups: Vec<(Category, Vec<&'a AssetRecord>)>,
    defaults: Option<&'a PluginConfig>,
}

impl<'a> Selection<'a> {
    pub fn select(
        catalog: &'a AssetCatalog,
        config: &'a PluginConfig,
        request: &CategoryRequest,
    ) -> Self {
        let groups = Category::ALL
            .into_iter()
            .filter(|c| request.includes(*c))
            .map(|c| {
                let records: Vec<_> = catalog.get(c).iter().filter(|r| request.accepts(r)).collect();
                (c, records)
            })
            .filter(|(_, records)| !records.is_empty())
            .collect();

        let defaults = request.includes_defaults().then_some(config);

        Self { groups, defaults }
    }

    /// Non-empty groups in listing order.
    pub fn groups(&self) -> &[(Category, Vec<&'a AssetRecord>)] {
        &self.groups
    }

    #[cfg(test)]
    pub fn get(&self, category: Category) -> &[&'a AssetRecord] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, records)| records.as_slice())
            .unwrap_or_default()
    }

    /// Every selected record in listing order.
    pub fn records(&self) -> impl Iterator<Item = &'a AssetRecord> + '_ {
        self.groups.iter().flat_map(|(_, records)| records.iter().copied())
    }

    /// Merged configuration, when `defaults` was selected.
    pub fn defaults(&self) -> Option<&'a PluginConfig> {
        self.defaults
    }
}
