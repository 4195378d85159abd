//! `svgcomp batch`: convert many files and write components.

use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::Serialize;

use super::BatchArgs;
use crate::batch::{
    BatchFailure, BatchOptions, BatchReport, ConvertedFile, PROGRESS_CONVERT, WriteReport,
    collect_svg_files, convert_files, write_components,
};
use crate::config::ToolConfig;
use crate::logger::ProgressLine;
use crate::utils::plural::plural_count;
use crate::{debug, log};

/// JSON shape printed by `--json`.
#[derive(Serialize)]
struct JsonReport<'a> {
    converted: &'a [ConvertedFile],
    failed: Vec<&'a BatchFailure>,
    written: &'a [PathBuf],
    skipped: &'a [PathBuf],
}

/// Run the batch command.
pub fn run_batch(args: &BatchArgs, config: &ToolConfig) -> Result<()> {
    let files = collect_svg_files(&args.paths)?;
    if files.is_empty() {
        log!("batch"; "no svg files found");
        return Ok(());
    }
    debug!("batch"; "{} to convert", plural_count(files.len(), "file"));

    let options = BatchOptions::from(config);
    let report = if args.json {
        convert_files(&files, options, None)
    } else {
        let progress = ProgressLine::new(&[(PROGRESS_CONVERT, files.len())]);
        let report = convert_files(&files, options, Some(&progress));
        progress.finish();
        report
    };

    let writes = if args.dry {
        WriteReport::default()
    } else {
        write_components(&report.converted, &config.output)?
    };

    if args.json {
        print_json(&report, &writes)?;
    } else {
        print_summary(&report, &writes, config, args.dry);
    }

    if all_failed(&report, &writes, args.dry) {
        bail!("none of the {} converted", plural_count(report.total(), "file"));
    }
    Ok(())
}

/// True when there were inputs and none of them produced a component.
///
/// Outside dry runs, a converted file whose write failed counts as failed.
/// Existing files skipped for lack of `--overwrite` do not.
fn all_failed(report: &BatchReport, writes: &WriteReport, dry: bool) -> bool {
    if dry {
        return report.all_failed();
    }
    report.total() > 0 && report.converted.len() == writes.failed.len()
}

fn print_json(report: &BatchReport, writes: &WriteReport) -> Result<()> {
    let json = JsonReport {
        converted: &report.converted,
        failed: report.failed.iter().chain(&writes.failed).collect(),
        written: &writes.written,
        skipped: &writes.skipped,
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_summary(report: &BatchReport, writes: &WriteReport, config: &ToolConfig, dry: bool) {
    for failure in report.failed.iter().chain(&writes.failed) {
        log!("error"; "{}: {}", failure.path.display(), failure.reason);
    }

    log!(
        "batch";
        "converted {}, failed {}",
        plural_count(report.converted.len().saturating_sub(writes.failed.len()), "file"),
        report.failed.len() + writes.failed.len()
    );

    if dry {
        return;
    }
    if !writes.written.is_empty() {
        log!(
            "batch";
            "wrote {} to {}",
            plural_count(writes.written.len(), "component"),
            config.output.dir.display()
        );
    }
    if !writes.skipped.is_empty() {
        log!(
            "warning";
            "{} already exist, use --overwrite to replace",
            plural_count(writes.skipped.len(), "file")
        );
    }
}
