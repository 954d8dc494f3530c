use crate::report::Span;
use serde::{Deserialize, Serialize};

/// What kind of literal-forming syntax a classified span covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// A quoted string literal, delimiters included.
    String,
    /// A `//` comment, trailing newline excluded.
    LineComment,
    /// A `/* ... */` comment, both delimiters included.
    BlockComment,
}

/// One region the scanner marked as off-limits for rewriting.
///
/// The rewriter only consults the interval; `kind` exists for the JSON
/// report and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSpan {
    pub span: Span,
    pub kind: SpanKind,
}

impl ClassifiedSpan {
    #[inline]
    pub fn new(start: u64, end: u64, kind: SpanKind) -> Self {
        Self {
            span: Span::new(start, end),
            kind,
        }
    }
}
