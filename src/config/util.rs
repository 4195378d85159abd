//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
///
/// # Example
/// ```text
/// /home/user/app/assets/icons/  ← start
/// /home/user/app/svgcomp.toml   ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are taken as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
