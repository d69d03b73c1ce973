//! Error codes for the Braid diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - JSON syntax errors
//! - `E2xx` - Composition validation
//! - `E3xx` - Brick workflow validation

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E0xx)
    // =========================================================================
    /// Invalid JSON syntax.
    E001,

    /// Unexpected end of input.
    ///
    /// The document ended before the JSON value was complete.
    E002,

    /// Invalid document structure.
    ///
    /// The JSON is well formed but a field is missing or has the wrong type.
    E003,

    // =========================================================================
    // Composition Validation (E2xx)
    // =========================================================================
    /// Duplicate node id.
    E200,

    /// Edge references an unknown source node.
    E201,

    /// Edge references an unknown target node.
    E202,

    /// Invalid node shape.
    E203,

    /// Invalid node size.
    E204,

    /// Invalid wire style.
    E205,

    /// Unparseable color (warning).
    ///
    /// The renderer falls back to the palette default.
    E206,

    /// Opacity outside `[0, 1]` (warning).
    E207,

    /// Wire weight outside the typical `0.5..=3.0` range (warning).
    E208,

    /// More ring arcs than are drawn (warning).
    ///
    /// Only the first eight ring colors are rendered.
    E209,

    // =========================================================================
    // Brick Validation (E3xx)
    // =========================================================================
    /// Duplicate brick id.
    E300,

    /// Connection references an unknown source brick.
    E301,

    /// Connection references an unknown target brick.
    E302,

    /// Brick does not have exactly four layers.
    E303,

    /// Brick layers are not foundation, structure, relational, contextual.
    E304,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
            ErrorCode::E207 => "E207",
            ErrorCode::E208 => "E208",
            ErrorCode::E209 => "E209",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
            ErrorCode::E303 => "E303",
            ErrorCode::E304 => "E304",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E209.to_string(), "E209");
        assert_eq!(ErrorCode::E304.to_string(), "E304");
    }
}
