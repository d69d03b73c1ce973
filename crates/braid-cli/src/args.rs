//! Command-line argument definitions for the Braid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the document or built-in sample to render,
//! the output path, configuration file and logging verbosity.

use clap::{ArgGroup, Parser};

use braid::samples::Sample;

/// Command-line arguments for the Braid string-diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "sample"])))]
pub struct Args {
    /// Path to the input JSON document
    #[arg(help = "Path to the input file")]
    pub input: Option<String>,

    /// Render a built-in sample instead of reading a file
    #[arg(long, value_name = "NAME")]
    pub sample: Option<Sample>,

    /// Treat the input as a brick workflow document
    #[arg(long, conflicts_with = "sample")]
    pub brick: bool,

    /// Render despite validation errors, skipping the offending items
    #[arg(long)]
    pub lenient: bool,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the diagram metadata as JSON to stdout
    #[arg(long)]
    pub summary: bool,
}
