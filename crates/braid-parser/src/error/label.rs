//! Source spans attached to a diagnostic.

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// The offending value itself.
    Culprit,
    /// Related context, such as the earlier definition of a duplicate id.
    Context,
}

/// A span of the JSON document with a short note.
///
/// ```text
/// error[E200]: node id `parse` is defined multiple times
///   --> pipeline.json:9:13
///    |
///  9 |       "id": "parse",
///    |             ^^^^^^^ duplicate id
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    role: Role,
}

impl Label {
    /// Marks the value the diagnostic is about.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::with_role(span, message, Role::Culprit)
    }

    /// Points at context for the diagnostic.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::with_role(span, message, Role::Context)
    }

    fn with_role(span: Span, message: impl Into<String>, role: Role) -> Self {
        Self {
            span,
            message: message.into(),
            role,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.role == Role::Culprit
    }

    pub fn is_secondary(&self) -> bool {
        self.role == Role::Context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(3..9), "unknown node");

        assert_eq!(label.span(), Span::new(3..9));
        assert_eq!(label.message(), "unknown node");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(0..4), "first defined here");

        assert!(label.is_secondary());
        assert!(!label.is_primary());
        assert_eq!(label.message(), "first defined here");
    }
}
