//! Tool configuration management for `svgcomp.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [convert], [output], [batch]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup
//! └── mod.rs         # ToolConfig (this file)
//! ```
//!
//! The config file is optional: without one, defaults apply and the output
//! directory is resolved against the current directory.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BatchConfig, ConvertConfig, OutputConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BatchArgs, Cli, Commands, ConvertArgs},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing svgcomp.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Directory relative paths are resolved against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Conversion settings
    #[serde(default)]
    pub convert: ConvertConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Batch settings
    #[serde(default)]
    pub batch: BatchConfig,
}

impl ToolConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The root is the config
    /// file's parent directory, or cwd when there is no config file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let path = normalize_path(&path);
                crate::debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config
            }
            None => {
                crate::debug!("config"; "no {} found, using defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.finalize(cli);
        config.validate()?;
        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = normalize_path(&self.root);
        self.output.normalize(&root);
        self.root = root;
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Convert { args } => self.apply_convert_args(args),
            Commands::Batch { args } => self.apply_batch_args(args),
            Commands::Name { .. } => {}
        }
    }

    /// Apply convert arguments from CLI.
    fn apply_convert_args(&mut self, args: &ConvertArgs) {
        Self::update_option(&mut self.convert.strict, args.strict.as_ref());
    }

    /// Apply batch arguments from CLI.
    ///
    /// A CLI output directory is relative to cwd, not to the config root.
    fn apply_batch_args(&mut self, args: &BatchArgs) {
        Self::update_option(&mut self.convert.strict, args.strict.as_ref());
        Self::update_option(&mut self.output.overwrite, args.overwrite.as_ref());
        Self::update_option(&mut self.batch.parallel, args.parallel.as_ref());
        if let Some(dir) = &args.output {
            self.output.dir = normalize_path(&OutputConfig::expand_dir(dir));
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.output.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ToolConfig {
    let (parsed, ignored) = ToolConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = test_parse_config(
            r#"
[convert]
strict = true

[output]
dir = "src/icons"
extension = "jsx"
overwrite = true

[batch]
parallel = false
"#,
        );
        assert!(config.convert.strict);
        assert_eq!(config.output.dir, PathBuf::from("src/icons"));
        assert_eq!(config.output.extension, "jsx");
        assert!(config.output.overwrite);
        assert!(!config.batch.parallel);
    }

    #[test]
    fn test_unknown_fields_collected() {
        let (config, ignored) =
            ToolConfig::parse_with_ignored("[output]\nextention = \"jsx\"\n[extra]\nx = 1")
                .unwrap();
        assert_eq!(config.output.extension, "tsx");
        assert!(ignored.contains(&"output.extention".to_string()));
        assert!(ignored.iter().any(|f| f.starts_with("extra")));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(ToolConfig::from_str("[output\ndir = 1").is_err());
        assert!(ToolConfig::from_str("[convert]\nstrict = \"yes\"").is_err());
    }

    #[test]
    fn test_from_path_missing() {
        let err = ToolConfig::from_path(Path::new("/nonexistent/svgcomp.toml")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_batch_args_override() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");
        let cli = Cli::parse_from([
            "svgcomp",
            "batch",
            "icons",
            "-o",
            out.to_str().unwrap(),
            "--strict",
            "--overwrite",
            "--parallel=false",
        ]);

        let mut config = ToolConfig {
            root: tmp.path().to_path_buf(),
            ..ToolConfig::default()
        };
        config.finalize(&cli);

        assert!(config.convert.strict);
        assert!(config.output.overwrite);
        assert!(!config.batch.parallel);
        assert!(config.output.dir.ends_with("out"));
    }

    #[test]
    fn test_batch_output_expands_tilde() {
        let cli = Cli::parse_from(["svgcomp", "batch", "icons", "-o", "~/icons"]);
        let mut config = ToolConfig::default();
        config.finalize(&cli);

        assert!(config.output.dir.is_absolute());
        assert!(!config.output.dir.starts_with("~"));
        assert!(config.output.dir.ends_with("icons"));
        assert!(!config.output.dir.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_finalize_resolves_output_against_root() {
        let tmp = TempDir::new().unwrap();
        let cli = Cli::parse_from(["svgcomp", "convert", "a.svg"]);
        let mut config = ToolConfig {
            root: tmp.path().to_path_buf(),
            ..ToolConfig::default()
        };
        config.finalize(&cli);

        assert!(config.output.dir.is_absolute());
        assert!(config.output.dir.ends_with("components"));
        assert!(!config.convert.strict);
    }

    #[test]
    fn test_validate_reports_extension() {
        let mut config = test_parse_config("[output]\nextension = \".tsx\"");
        config.output.dir = PathBuf::from("/nonexistent/out");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("output.extension"));
    }
}
