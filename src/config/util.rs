//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/_plugins/theme/  ← start
/// /home/user/site/inkpot.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_start_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("inkpot.toml"), "").unwrap();

        let found = find_config_file(Path::new("inkpot.toml"), temp.path());
        assert_eq!(found, Some(temp.path().join("inkpot.toml")));
    }

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("inkpot.toml"), "").unwrap();
        let nested = temp.path().join("_plugins/theme");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(Path::new("inkpot.toml"), &nested);
        assert_eq!(found, Some(temp.path().join("inkpot.toml")));
    }

    #[test]
    fn test_find_config_absolute_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        assert_eq!(find_config_file(&missing, temp.path()), None);
    }
}
