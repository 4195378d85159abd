//! svgcomp - convert SVG icons and illustrations into React components.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use svgcomp::cli::{self, Cli, Commands};
use svgcomp::config::ToolConfig;
use svgcomp::{log, logger};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Name { files } => {
            cli::name::run_name(files);
            Ok(())
        }
        Commands::Convert { args } => {
            let config = ToolConfig::load(&cli)?;
            cli::convert::run_convert(args, &config)
        }
        Commands::Batch { args } => {
            let config = ToolConfig::load(&cli)?;
            cli::batch::run_batch(args, &config)
        }
    }
}
