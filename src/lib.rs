//! svgcomp - convert SVG markup into React components.
//!
//! The conversion itself lives in [`convert`] and is pure text in, text out.
//! [`batch`], [`config`] and [`cli`] wrap it into the `svgcomp` tool.

pub mod batch;
pub mod cli;
pub mod config;
pub mod convert;
pub mod logger;
pub mod utils;
