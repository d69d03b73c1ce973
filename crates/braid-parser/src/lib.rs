//! # Braid Parser
//!
//! Reads composition documents into the semantic model of
//! [`braid_core::semantic`]. The pipeline is:
//!
//! 1. **Deserialize** - JSON into wire-format types (serde_json)
//! 2. **Validate** - collect structural errors and visual-hint warnings
//! 3. **Elaborate** - convert to a [`Composition`]
//!
//! ## Usage
//!
//! ```
//! # use braid_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{
//!         "nodes": [{"id": "parse", "name": "Parse"}, {"id": "emit", "name": "Emit"}],
//!         "edges": [{"source": "parse", "target": "emit", "label": "Structured"}]
//!     }"#;
//!
//!     let composition = parse(source)?;
//!     assert_eq!(composition.nodes().len(), 2);
//!     Ok(())
//! }
//! ```

mod brick;
mod elaborate;
pub mod error;
mod parser_types;
mod span;
mod validate;

pub use span::Span;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use braid_core::semantic::Composition;

use error::{Diagnostic, ErrorCode, ParseError};
use parser_types::{RawBrickComposition, RawComposition};

/// Options controlling how strictly documents are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Log validation errors instead of failing.
    ///
    /// The layout engine skips duplicate nodes and dangling edges, and unknown
    /// enumerated hints fall back to their defaults.
    pub lenient: bool,
}

impl ParseOptions {
    /// Strict parsing: any validation error fails the parse.
    pub fn strict() -> Self {
        Self { lenient: false }
    }

    /// Lenient parsing: only syntax errors fail the parse.
    pub fn lenient() -> Self {
        Self { lenient: true }
    }
}

/// Parse a JSON composition document, rejecting it on any validation error.
///
/// # Errors
///
/// Returns a [`ParseError`] with one diagnostic for a JSON syntax or
/// structure problem, or one diagnostic per validation error.
pub fn parse(source: &str) -> Result<Composition, ParseError> {
    parse_with(source, ParseOptions::strict())
}

/// Parse a JSON composition document with explicit [`ParseOptions`].
pub fn parse_with(source: &str, options: ParseOptions) -> Result<Composition, ParseError> {
    info!(bytes = source.len(), lenient = options.lenient; "Parsing composition");

    let raw: RawComposition = deserialize(source)?;
    debug!(nodes = raw.nodes.len(), edges = raw.edges.len(); "Document deserialized");

    let collector = validate::validate_document(&raw, source);
    if options.lenient {
        collector.finish_lenient();
    } else {
        collector.finish()?;
    }

    Ok(elaborate::elaborate(raw))
}

/// Parse a brick workflow document and adapt it into a composition.
///
/// Brick validation always runs; lenient mode does not apply to it.
pub fn parse_brick(source: &str) -> Result<Composition, ParseError> {
    info!(bytes = source.len(); "Parsing brick workflow");

    let raw: RawBrickComposition = deserialize(source)?;
    debug!(
        bricks = raw.bricks.len(),
        connections = raw.connections.len();
        "Brick document deserialized"
    );

    brick::validate_bricks(&raw, source).finish()?;
    Ok(brick::bricks_to_composition(raw))
}

/// Validate a composition built in code.
///
/// Reports duplicate ids, dangling edges and out-of-range visual hints.
/// Diagnostics carry no source labels.
pub fn validate(composition: &Composition) -> Result<(), ParseError> {
    validate::validate_composition(composition).finish()
}

fn deserialize<T: DeserializeOwned>(source: &str) -> Result<T, ParseError> {
    serde_json::from_str(source).map_err(|err| syntax_diagnostic(&err, source).into())
}

/// Convert a serde_json error into a diagnostic pointing at its position.
fn syntax_diagnostic(err: &serde_json::Error, source: &str) -> Diagnostic {
    let (code, label) = match err.classify() {
        Category::Eof => (ErrorCode::E002, "input ends here"),
        Category::Data => (ErrorCode::E003, "unexpected value"),
        Category::Syntax | Category::Io => (ErrorCode::E001, "invalid syntax"),
    };

    let full = err.to_string();
    let location = format!(" at line {} column {}", err.line(), err.column());
    let message = full.strip_suffix(&location).unwrap_or(&full);

    let diagnostic = Diagnostic::error(message).with_code(code);
    let span = Span::at_line_column(source, err.line(), err.column());
    let diagnostic = diagnostic.with_label(span, label);

    match code {
        ErrorCode::E003 => diagnostic.with_help(
            "nodes need `id` and `name`, edges need `source` and `target`",
        ),
        _ => diagnostic,
    }
}
