//! Labeled source spans for issues.

use crate::span::Span;

/// How prominently a label is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// Marks where the problem is.
    Primary,
    /// Points at related text, such as the first definition of a duplicated id.
    Secondary,
}

/// A message attached to a span of the imported text.
///
/// Spans are byte offsets into the whole input, not into a single line.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    style: LabelStyle,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>, style: LabelStyle) -> Self {
        Self {
            span,
            message: message.into(),
            style,
        }
    }

    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, LabelStyle::Primary)
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, LabelStyle::Secondary)
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn style(&self) -> LabelStyle {
        self.style
    }

    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }

    pub fn is_secondary(&self) -> bool {
        self.style == LabelStyle::Secondary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_styles() {
        let primary = Label::primary(Span::new(23..28), "invalid position");
        assert_eq!(primary.span(), Span::new(23..28));
        assert_eq!(primary.message(), "invalid position");
        assert_eq!(primary.style(), LabelStyle::Primary);
        assert!(primary.is_primary());

        let secondary = Label::secondary(Span::new(17..20), "first defined here");
        assert!(secondary.is_secondary());
        assert!(!secondary.is_primary());
    }
}
