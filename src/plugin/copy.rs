//! Copying bundled assets into the site for customization.

use std::fs;
use std::path::{Path, PathBuf};

use super::Plugin;
use super::category::Category;
use super::record::AssetRecord;
use super::select::CategoryRequest;
use crate::error::InkError;
use crate::utils::is_empty_dir;
use crate::{debug, log};

impl Plugin {
    /// Copy the selected assets to `target/<dir>/<relative_path>`.
    ///
    /// Docs and the default configuration are never copied. Disabled
    /// assets are, so users can re-enable an edited copy. Without `force`,
    /// a non-empty `target` aborts before anything is written.
    pub fn copy_asset_files(
        &self,
        target: &Path,
        request: &CategoryRequest,
        force: bool,
    ) -> Result<Vec<PathBuf>, InkError> {
        let selection = self.select(request);
        copy_assets(target, selection.records(), force)
    }
}

/// Copy `records` (docs skipped) under `target`, returning the written paths.
pub fn copy_assets<'a>(
    target: &Path,
    records: impl IntoIterator<Item = &'a AssetRecord>,
    force: bool,
) -> Result<Vec<PathBuf>, InkError> {
    if !force && !is_empty_dir(target).map_err(|e| InkError::io(target, e))? {
        return Err(InkError::NotEmpty(target.to_path_buf()));
    }

    let mut copied = Vec::new();
    for record in records {
        if record.category() == Category::Docs {
            continue;
        }
        let dest = target.join(record.dir().name()).join(record.relative_path());
        copy_file(&record.plugin_path(), &dest)?;
        debug!("copy"; "{} -> {}", record.plugin_path().display(), dest.display());
        copied.push(dest);
    }

    if !copied.is_empty() {
        log!("copy"; "{} file(s) to {}", copied.len(), target.display());
    }
    Ok(copied)
}

fn copy_file(from: &Path, to: &Path) -> Result<(), InkError> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| InkError::io(parent, e))?;
    }
    fs::copy(from, to).map_err(|e| InkError::io(from, e))?;
    Ok(())
}
