//! Batch conversion of many SVG files.
//!
//! Each file is read, named via [`normalize`] and converted independently.
//! A file that cannot be read (or, in strict mode, fails the boundary checks)
//! becomes a [`BatchFailure`]; the rest of the batch is unaffected.
//!
//! ```text
//! paths ─► collect ─► read ─► normalize ─► transform ─► ConvertedFile
//!                       └──────── error ─────────────► BatchFailure
//! ```

mod collect;
mod write;

pub use collect::{
    ParallelCollector, collect_svg_dir, collect_svg_files, is_svg_file, read_paths_from_stdin,
};
pub use write::{WriteReport, write_components};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::ToolConfig;
use crate::convert::{convert_checked, normalize, transform};
use crate::debug;
use crate::logger::ProgressLine;
use crate::utils::path::file_name_lossy;

/// Progress counter name used by [`convert_files`].
pub const PROGRESS_CONVERT: &str = "convert";

/// One successfully converted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedFile {
    /// Input path as given.
    pub path: PathBuf,
    /// File name of the input (e.g. `icon-arrow.svg`).
    pub original_name: String,
    /// Name derived from `original_name`.
    pub component_name: String,
    /// Generated component source.
    pub code: String,
}

/// One skipped input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl BatchFailure {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result of a batch run, sorted by input path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<BatchFailure>,
}

impl BatchReport {
    /// Number of inputs processed.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// True when there were inputs and none of them converted.
    pub fn all_failed(&self) -> bool {
        self.converted.is_empty() && !self.failed.is_empty()
    }
}

/// Batch run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    /// Run boundary checks before transforming.
    pub strict: bool,
    /// Convert on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            strict: false,
            parallel: true,
        }
    }
}

impl From<&ToolConfig> for BatchOptions {
    fn from(config: &ToolConfig) -> Self {
        Self {
            strict: config.convert.strict,
            parallel: config.batch.parallel,
        }
    }
}

enum Outcome {
    Converted(ConvertedFile),
    Failed(BatchFailure),
}

/// Read and convert a single file.
///
/// The component name is derived from the file name.
pub fn convert_file(path: &Path, strict: bool) -> Result<ConvertedFile> {
    let svg = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let original_name = file_name_lossy(path);
    let component_name = normalize(&original_name);
    let code = if strict {
        convert_checked(&svg, &component_name)?
    } else {
        transform(&svg, &component_name)
    };

    Ok(ConvertedFile {
        path: path.to_path_buf(),
        original_name,
        component_name,
        code,
    })
}

/// Convert every path, never stopping at a failed file.
///
/// `progress`, when given, gets one [`PROGRESS_CONVERT`] tick per file.
pub fn convert_files(
    paths: &[PathBuf],
    options: BatchOptions,
    progress: Option<&ProgressLine>,
) -> BatchReport {
    let collector = ParallelCollector::new();

    let run = |path: &PathBuf| {
        let outcome = match convert_file(path, options.strict) {
            Ok(file) => {
                debug!("batch"; "{} -> {}", file.original_name, file.component_name);
                Outcome::Converted(file)
            }
            Err(e) => {
                debug!("batch"; "skipped {}: {:#}", path.display(), e);
                Outcome::Failed(BatchFailure::new(path, format!("{e:#}")))
            }
        };
        collector.push(outcome);
        if let Some(progress) = progress {
            progress.inc(PROGRESS_CONVERT);
        }
    };

    if options.parallel {
        paths.par_iter().for_each(run);
    } else {
        paths.iter().for_each(run);
    }

    let mut report = BatchReport::default();
    for outcome in collector.drain_with_capacity(paths.len()) {
        match outcome {
            Outcome::Converted(file) => report.converted.push(file),
            Outcome::Failed(failure) => report.failed.push(failure),
        }
    }
    report.converted.sort_by(|a, b| a.path.cmp(&b.path));
    report.failed.sort_by(|a, b| a.path.cmp(&b.path));
    report
}
