//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Convert SVG files into React components
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: svgcomp.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "svgcomp.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert a single SVG into a component
    #[command(visible_alias = "c")]
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Convert many SVG files and write one component file each
    #[command(visible_alias = "b")]
    Batch {
        #[command(flatten)]
        args: BatchArgs,
    },

    /// Print the component name derived from each file name
    #[command(visible_alias = "n")]
    Name {
        /// File names (e.g. `icon-arrow-right.svg`)
        #[arg(required = true, value_name = "FILE")]
        files: Vec<String>,
    },
}

/// Convert command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// SVG file to convert. Omit or use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Component name (default: derived from the input file name)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Write the component to this file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Reject empty/non-SVG input and invalid component names
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub strict: Option<bool>,
}

impl ConvertArgs {
    /// True when the SVG comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_ref().is_none_or(|p| p.as_os_str() == "-")
    }
}

/// Batch command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BatchArgs {
    /// SVG files or directories (searched recursively for `*.svg`).
    /// Use `-` to read paths from stdin.
    #[arg(required = true, value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Output directory (overrides `output.dir`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Replace existing component files
    #[arg(short = 'f', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub overwrite: Option<bool>,

    /// Reject empty/non-SVG files and invalid derived names
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub strict: Option<bool>,

    /// Convert files in parallel
    #[arg(short = 'j', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub parallel: Option<bool>,

    /// Convert without writing files
    #[arg(short, long)]
    pub dry: bool,

    /// Print the batch report as JSON to stdout
    #[arg(long)]
    pub json: bool,
}
