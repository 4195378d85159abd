//! `svgcomp convert`: convert a single SVG.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::ConvertArgs;
use crate::config::ToolConfig;
use crate::convert::{
    NameLint, check_component_name, check_svg_source, convert_checked, normalize, transform,
};
use crate::utils::path::file_name_lossy;
use crate::{debug, log};

/// Run the convert command.
pub fn run_convert(args: &ConvertArgs, config: &ToolConfig) -> Result<()> {
    let name = component_name(args)?;
    debug!("convert"; "component name: {}", name);
    let svg = read_input(args)?;

    let code = convert_source(&svg, &name, config.convert.strict)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &code).with_context(|| format!("failed to write {}", path.display()))?;
            log!("convert"; "wrote {}", path.display());
        }
        None => println!("{code}"),
    }
    Ok(())
}

/// Convert with checks: rejected in strict mode, warned about otherwise.
pub fn convert_source(svg: &str, name: &str, strict: bool) -> Result<String> {
    if strict {
        if let Ok(Some(NameLint::LowercaseStart)) = check_component_name(name) {
            log!("warning"; "`{}` starts lowercase, React will treat it as a DOM tag", name);
        }
        return Ok(convert_checked(svg, name)?);
    }

    if let Err(e) = check_component_name(name) {
        log!("warning"; "{}", e);
    }
    if let Err(e) = check_svg_source(svg) {
        log!("warning"; "{}", e);
    }
    Ok(transform(svg, name))
}

/// Read SVG text from the input file or stdin.
fn read_input(args: &ConvertArgs) -> Result<String> {
    match &args.input {
        Some(path) if !args.reads_stdin() => read_svg(path),
        _ => io::read_to_string(io::stdin()).context("failed to read stdin"),
    }
}

fn read_svg(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// `--name`, or the name derived from the input file.
fn component_name(args: &ConvertArgs) -> Result<String> {
    if let Some(name) = &args.name {
        return Ok(name.clone());
    }
    match &args.input {
        Some(path) if !args.reads_stdin() => Ok(normalize(&file_name_lossy(path))),
        _ => bail!("--name is required when reading from stdin"),
    }
}
