//! Writing generated components to the output directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::{BatchFailure, ConvertedFile};
use crate::config::OutputConfig;
use crate::debug;

/// Outcome of [`write_components`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct WriteReport {
    /// Files written.
    pub written: Vec<PathBuf>,
    /// Existing files left alone (overwrite disabled).
    pub skipped: Vec<PathBuf>,
    /// Components that could not be written, keyed by input path.
    pub failed: Vec<BatchFailure>,
}

/// Write each component to `<dir>/<ComponentName>.<extension>`.
///
/// Only a failure to create the output directory is fatal. Empty names,
/// name collisions within `files` and write errors are recorded per file.
pub fn write_components(files: &[ConvertedFile], output: &OutputConfig) -> Result<WriteReport> {
    fs::create_dir_all(&output.dir)
        .with_context(|| format!("failed to create {}", output.dir.display()))?;

    let mut report = WriteReport::default();
    let mut names = FxHashSet::default();

    for file in files {
        let name = file.component_name.as_str();
        if name.is_empty() {
            report
                .failed
                .push(BatchFailure::new(&file.path, "empty component name"));
            continue;
        }

        let target = output.component_path(name);
        if !names.insert(name) {
            report.failed.push(BatchFailure::new(
                &file.path,
                format!("name collision: {} is already written", target.display()),
            ));
            continue;
        }

        if target.exists() && !output.overwrite {
            debug!("batch"; "exists, skipped: {}", target.display());
            report.skipped.push(target);
            continue;
        }

        match fs::write(&target, &file.code) {
            Ok(()) => report.written.push(target),
            Err(e) => report.failed.push(BatchFailure::new(
                &file.path,
                format!("failed to write {}: {e}", target.display()),
            )),
        }
    }

    Ok(report)
}
