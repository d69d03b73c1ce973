//! Collector for accumulating diagnostics during validation.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so a validation pass can report every problem in
/// a document instead of stopping at the first one.
///
/// ```text
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(Diagnostic::error("edge references unknown source `x`").with_code(ErrorCode::E201));
/// collector.emit(Diagnostic::warning("opacity 1.4 is outside [0, 1]").with_code(ErrorCode::E207));
/// let result = collector.finish();
/// ```
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub(crate) fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `true` if an error-severity diagnostic was emitted.
    pub(crate) fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Finish collection and return a result.
    ///
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics,
    ///   warnings included.
    /// - Otherwise every warning is logged and `Ok(())` is returned.
    pub(crate) fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }

        for diagnostic in &self.diagnostics {
            warn!(code:? = diagnostic.code(); "{}", diagnostic.message());
        }
        Ok(())
    }

    /// Finish collection, logging every diagnostic and never failing.
    ///
    /// Used in lenient mode, where structural problems are left for the
    /// layout engine to skip.
    pub(crate) fn finish_lenient(self) {
        for diagnostic in &self.diagnostics {
            warn!(
                code:? = diagnostic.code(),
                severity:% = diagnostic.severity();
                "{}", diagnostic.message()
            );
        }
    }
}
