//! Bridge from [`BraidError`] to miette reports.
//!
//! A [`braid_parser::error::ParseError`] usually carries every problem found
//! in a document, so each of its diagnostics becomes a separate
//! [`Reportable`]. Other errors have no source location and map to exactly
//! one.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use braid::BraidError;
use braid_parser::error::{Diagnostic, Severity};

/// One renderable report.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parser diagnostic together with the document it points into.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// An error without source location, such as I/O or configuration.
    Error(&'a BraidError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Self::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Diagnostic { .. } => None,
            Self::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: Box<dyn fmt::Display> = match self {
            Self::Diagnostic { diag, .. } => Box::new(diag.code()?),
            Self::Error(BraidError::Io(_)) => Box::new("braid::io"),
            Self::Error(BraidError::Config(_)) => Box::new("braid::config"),
            Self::Error(BraidError::Parse { .. }) => return None,
        };
        Some(code)
    }

    fn severity(&self) -> Option<miette::Severity> {
        let Self::Diagnostic { diag, .. } = self else {
            return None;
        };
        Some(match diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Self::Diagnostic { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Self::Error(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Self::Diagnostic { src, .. } => Some(src as &dyn miette::SourceCode),
            Self::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Self::Diagnostic { diag, .. } = self else {
            return None;
        };
        let labels = diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Splits `err` into the reports to render, one per parser diagnostic.
pub fn to_reportables(err: &BraidError) -> Vec<Reportable<'_>> {
    match err {
        BraidError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic { diag, src })
            .collect(),
        _ => vec![Reportable::Error(err)],
    }
}

#[cfg(test)]
mod tests {
    use braid_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("unknown target node `ghost`")
            .with_code(ErrorCode::E202)
            .with_label(Span::new(0..5), "no node with this id")
            .with_help("define the node or fix the id");
        let err = BraidError::new_parse_error(ParseError::from(diag), "ghost");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let report = &reportables[0];
        assert!(matches!(report, Reportable::Diagnostic { .. }));
        assert_eq!(report.to_string(), "unknown target node `ghost`");
        assert_eq!(report.code().unwrap().to_string(), "E202");
        assert_eq!(report.help().unwrap().to_string(), "define the node or fix the id");
        assert_eq!(report.severity(), Some(miette::Severity::Error));
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("first error")
                .with_code(ErrorCode::E200)
                .with_label(Span::new(0..5), "first"),
            Diagnostic::error("second error")
                .with_code(ErrorCode::E201)
                .with_label(Span::new(10..15), "second"),
            Diagnostic::error("third error").with_label(Span::new(20..25), "third"),
        ];
        let err = BraidError::new_parse_error(ParseError::from(diags), "source document here");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 3);
        assert_eq!(reportables[0].to_string(), "first error");
        assert_eq!(reportables[1].to_string(), "second error");
        assert_eq!(reportables[2].to_string(), "third error");
        assert!(reportables[2].code().is_none());
    }

    #[test]
    fn test_config_error() {
        let err = BraidError::Config("Missing configuration file: a.toml".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        let report = &reportables[0];
        assert!(matches!(report, Reportable::Error(_)));
        assert_eq!(
            report.to_string(),
            "Configuration error: Missing configuration file: a.toml"
        );
        assert_eq!(report.code().unwrap().to_string(), "braid::config");
        assert!(report.source_code().is_none());
        assert!(report.labels().is_none());
    }

    #[test]
    fn test_warning_without_labels() {
        let diag = Diagnostic::warning("opacity 1.5 on `a` is outside [0, 1]");
        let report = Reportable::Diagnostic { diag: &diag, src: "{}" };

        assert_eq!(report.severity(), Some(miette::Severity::Warning));
        assert!(report.labels().is_none());
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let diag = Diagnostic::error("node id `a` is defined multiple times")
            .with_label(Span::new(0..5), "duplicate node")
            .with_secondary_label(Span::new(10..15), "first defined here");
        let report = Reportable::Diagnostic {
            diag: &diag,
            src: "some source document",
        };

        let labels: Vec<_> = report.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("duplicate node"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }
}
