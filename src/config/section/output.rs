//! `[output]` section configuration.
//!
//! Where batch runs write generated components.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "src/icons"    # relative to the config file, `~` expanded
//! extension = "tsx"    # component file extension, without the dot
//! overwrite = false    # replace existing component files
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Output settings for generated component files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory.
    pub dir: PathBuf,

    /// File extension of generated components.
    pub extension: String,

    /// Replace files that already exist.
    pub overwrite: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "components".into(),
            extension: "tsx".into(),
            overwrite: false,
        }
    }
}

impl OutputConfig {
    pub const FIELD_DIR: FieldPath = FieldPath::new("output.dir");
    pub const FIELD_EXTENSION: FieldPath = FieldPath::new("output.extension");

    /// Output path for a component: `<dir>/<name>.<extension>`.
    pub fn component_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", self.extension))
    }

    /// Expand a leading `~` in an output directory.
    pub fn expand_dir(dir: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&dir.to_string_lossy()).into_owned())
    }

    /// Resolve `dir` against `root`, expanding a leading `~`.
    pub fn normalize(&mut self, root: &Path) {
        let dir = Self::expand_dir(&self.dir);
        let dir = if dir.is_relative() { root.join(dir) } else { dir };
        self.dir = crate::utils::path::normalize_path(&dir);
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let ext = self.extension.as_str();
        if ext.is_empty() {
            diag.error_with_hint(
                Self::FIELD_EXTENSION,
                "extension must not be empty",
                "use `tsx` or `jsx`",
            );
        } else if ext.starts_with('.') {
            diag.error_with_hint(
                Self::FIELD_EXTENSION,
                format!("extension `{ext}` must not start with a dot"),
                format!("use `{}`", ext.trim_start_matches('.')),
            );
        } else if ext.contains(['/', '\\']) {
            diag.error(
                Self::FIELD_EXTENSION,
                format!("extension `{ext}` must not contain path separators"),
            );
        }

        if self.dir.is_file() {
            diag.error(
                Self::FIELD_DIR,
                format!("`{}` exists and is not a directory", self.dir.display()),
            );
        }
    }
}
