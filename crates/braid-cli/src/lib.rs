//! CLI logic for the Braid string-diagram renderer.
//!
//! This module contains the core CLI logic: pick the composition named on the
//! command line, run it through [`DiagramBuilder`] and write the SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::{debug, info};

use braid::{BraidError, DiagramBuilder, ParseOptions, semantic::Composition};

/// Run the Braid CLI application
///
/// Reads the input document (or builds the requested sample), renders it and
/// writes the resulting SVG to the output file. With `--summary` the diagram
/// metadata is also printed to stdout as JSON.
///
/// # Errors
///
/// Returns `BraidError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing and validation errors
/// - Neither or both of an input file and a sample
pub fn run(args: &Args) -> Result<(), BraidError> {
    info!(
        input_path:? = args.input,
        sample:? = args.sample,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    let composition = load_composition(&builder, args)?;
    let result = builder.build(&composition);

    fs::write(&args.output, result.svg())?;
    info!(output_file = args.output; "SVG exported successfully");

    if args.summary {
        let summary = serde_json::to_string_pretty(result.metadata()).map_err(io::Error::from)?;
        println!("{summary}");
    }

    Ok(())
}

fn load_composition(builder: &DiagramBuilder, args: &Args) -> Result<Composition, BraidError> {
    match (&args.input, args.sample) {
        (Some(path), None) => {
            let source = fs::read_to_string(path)?;
            if args.brick {
                if args.lenient {
                    debug!("Lenient mode does not apply to brick documents");
                }
                return builder.parse_brick(&source);
            }

            let options = if args.lenient {
                ParseOptions::lenient()
            } else {
                ParseOptions::strict()
            };
            builder.parse_with(&source, options)
        }
        (None, Some(sample)) => {
            info!(sample = sample.as_str(); "Rendering built-in sample");
            Ok(sample.composition())
        }
        _ => Err(BraidError::Config(
            "expected exactly one of INPUT or --sample".to_string(),
        )),
    }
}
