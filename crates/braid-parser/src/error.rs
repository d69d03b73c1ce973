//! Diagnostics produced while reading composition documents.
//!
//! A [`Diagnostic`] is a single error or warning with an optional
//! [`ErrorCode`], labeled source spans and help text. Failed parses return a
//! [`ParseError`] carrying every diagnostic found, so a document with three
//! dangling edges reports all three at once.
//!
//! # Example
//!
//! ```
//! # use braid_parser::error::{Diagnostic, ErrorCode};
//! # use braid_parser::Span;
//!
//! let diag = Diagnostic::error("node id `parse` is defined multiple times")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(120..127), "duplicate id")
//!     .with_secondary_label(Span::new(14..21), "first defined here")
//!     .with_help("node ids must be unique within a composition");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
