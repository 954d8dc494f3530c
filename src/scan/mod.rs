//! Script source -> classified literal/comment spans.
//!
//! This scanner is intentionally **single-pass** and **error-tolerant**.
//! It aims to provide:
//! - Stable byte `Span`s into the raw input.
//! - Exactly one context at any offset (normal, string, line comment,
//!   block comment), enforced by the state enum.
//! - Reasonable recovery for malformed input: a region still open at end of
//!   input yields no span, only a diagnostic.
//!
//! The scanner knows nothing about the rewrite pass; it only marks the
//! regions a substitution must not touch.

use crate::report::{
    ClassifiedSpan, Diagnostic, DiagnosticPhase, Severity, Span, SpanKind,
};

/// Result of classifying a script source.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    /// Every closed string-literal and comment region, in discovery order.
    /// Non-overlapping and sorted by construction.
    pub spans: Vec<ClassifiedSpan>,
    pub diagnostics: Vec<Diagnostic>,
    /// Length of the scanned input in bytes.
    pub byte_len: u64,
}

/// Lexical context at the current offset.
///
/// Modeled as one tagged value rather than independent boolean flags so the
/// scanner cannot be inside two contexts at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    /// Inside a string literal opened by `quote` (`"` or `'`) at `start`.
    /// Only the same quote byte closes it.
    InString { quote: u8, start: usize },
    InLineComment { start: usize },
    InBlockComment { start: usize },
}

/// Classify every string literal and comment in `src`.
///
/// Spans are byte offsets into the raw `src` input, half-open `[start, end)`:
/// - string literals include both delimiters;
/// - `//` comments end at (and exclude) the following newline;
/// - `/* ... */` comments include both delimiters.
///
/// All trigger bytes are ASCII, so walking bytes is equivalent to walking
/// characters here; UTF-8 continuation bytes never match a trigger.
pub fn scan_source(src: &str) -> ScanOutput {
    let bytes = src.as_bytes();
    let mut spans: Vec<ClassifiedSpan> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut state = State::Normal;

    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        match state {
            State::Normal => {
                // quote detection wins over comment detection at the same offset.
                if b == b'"' || b == b'\'' {
                    state = State::InString { quote: b, start: i };
                } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
                    state = State::InLineComment { start: i };
                } else if b == b'/' && bytes.get(i + 1) == Some(&b'*') {
                    state = State::InBlockComment { start: i };
                }
            }
            State::InString { quote, start } => {
                if b == b'\\' {
                    // the escaped byte is consumed unconditionally, including
                    // a matching quote. A backslash as the last byte simply
                    // leaves the string unterminated.
                    i += 1;
                } else if b == quote {
                    spans.push(ClassifiedSpan::new(
                        start as u64,
                        (i + 1) as u64,
                        SpanKind::String,
                    ));
                    state = State::Normal;
                }
                // comment-start sequences inside a string stay string content.
            }
            State::InLineComment { start } => {
                if b == b'\n' {
                    // newline excluded from the span.
                    spans.push(ClassifiedSpan::new(
                        start as u64,
                        i as u64,
                        SpanKind::LineComment,
                    ));
                    state = State::Normal;
                }
            }
            State::InBlockComment { start } => {
                if b == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    spans.push(ClassifiedSpan::new(
                        start as u64,
                        (i + 2) as u64,
                        SpanKind::BlockComment,
                    ));
                    state = State::Normal;
                    // the `/` of `*/` is part of the comment; don't let it
                    // start a new comment.
                    i += 1;
                }
            }
        }
        i += 1;
    }

    // a region still open at end of input yields no span. The rewriter will
    // therefore see its contents as ordinary text; surface that in the
    // diagnostics so it is visible in the JSON report.
    match state {
        State::Normal => {}
        State::InString { start, .. } => diagnostics.push(open_region_diagnostic(
            Severity::Warning,
            "scan.string.unterminated",
            "Unterminated string literal at end of input",
            start,
            src.len(),
        )),
        State::InLineComment { start } => diagnostics.push(open_region_diagnostic(
            Severity::Info,
            "scan.line_comment.at_eof",
            "Line comment terminated by end of input rather than a newline",
            start,
            src.len(),
        )),
        State::InBlockComment { start } => diagnostics.push(open_region_diagnostic(
            Severity::Warning,
            "scan.block_comment.unterminated",
            "Unterminated block comment at end of input",
            start,
            src.len(),
        )),
    }

    ScanOutput {
        spans,
        diagnostics,
        byte_len: src.len() as u64,
    }
}

fn open_region_diagnostic(
    severity: Severity,
    code: &str,
    message: &str,
    start: usize,
    end: usize,
) -> Diagnostic {
    Diagnostic {
        severity,
        phase: Some(DiagnosticPhase::Scan),
        code: Some(code.to_string()),
        message: message.to_string(),
        span: Some(Span::new(start as u64, end as u64)),
        notes: vec!["no span emitted; the open region is not shielded from rewriting".to_string()],
    }
}
