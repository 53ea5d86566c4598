//! `copy-doc` command: publish a project file as plugin documentation.

use std::path::Path;

use anyhow::{Context, Result};

use crate::plugin;

pub fn copy_doc(source: &Path, dest: &Path, permalink: Option<&str>) -> Result<()> {
    plugin::copy_doc(source, dest, permalink)
        .with_context(|| format!("failed to copy {} to {}", source.display(), dest.display()))?;
    println!("{}", updated_message(source, dest));
    Ok(())
}

fn updated_message(source: &Path, dest: &Path) -> String {
    format!("Updated {} from {}", dest.display(), source.display())
}
