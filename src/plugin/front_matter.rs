//! YAML front matter of page and doc assets.
//!
//! Only the keys that affect URLs and doc titles are read. Anything
//! unreadable degrades to empty metadata.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::debug;

const DELIMITER: &str = "---";

/// Page metadata read from front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub link_title: Option<String>,
    pub permalink: Option<String>,
}

impl PageMeta {
    /// Read the front matter of the file at `path`.
    pub fn read(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(e) => {
                debug!("front_matter"; "cannot read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse front matter at the start of `content`.
    ///
    /// Returns empty metadata when the block is missing, unterminated or
    /// not valid YAML.
    pub fn parse(content: &str) -> Self {
        let Some(block) = front_matter_block(content) else {
            return Self::default();
        };
        if block.trim().is_empty() {
            return Self::default();
        }
        serde_yml::from_str(block).unwrap_or_else(|e| {
            debug!("front_matter"; "ignoring invalid front matter: {}", e);
            Self::default()
        })
    }
}

/// Text between the opening and closing `---` lines.
fn front_matter_block(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let rest = content.strip_prefix(DELIMITER)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}
