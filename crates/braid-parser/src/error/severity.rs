//! How seriously a diagnostic affects the composition.

use std::fmt;

/// Severity of a [`Diagnostic`](super::Diagnostic).
///
/// Warnings cover hints the renderer can replace with a default, such as an
/// out-of-range opacity. Errors cover documents the layout cannot use as
/// written, such as an edge to a missing node; lenient parsing drops those
/// edges and keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    pub fn is_warning(self) -> bool {
        self == Self::Warning
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
