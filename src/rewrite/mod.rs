//! Identifier-dot substitution over the original script text.
//!
//! Every occurrence of `<identifier>.` is located against the **raw** input;
//! each match is decided independently (registry membership + chain
//! position) and replacements never re-match generated text. By default a
//! match that starts inside a scanned string/comment span is left untouched.

use crate::registry::Registry;
use crate::report::ClassifiedSpan;
use crate::scan::{self, ScanOutput};
use regex::{Captures, Regex};

/// Rewriting options that control substitution decisions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RewriteOptions {
    /// If true, matches that start inside a string literal or comment are
    /// rewritten anyway. This reproduces the legacy tool's output, which ran
    /// the substitution without consulting the scanner's spans.
    pub rewrite_inside_literals: bool,
}

/// Scan `src` and rewrite every recognized `identifier.` occurrence.
///
/// Total over any input: unknown identifiers and shielded matches pass
/// through unchanged, and nothing here can fail.
pub fn rewrite_source(src: &str, registry: &Registry, opts: &RewriteOptions) -> String {
    let scan_out = scan::scan_source(src);
    rewrite_scanned(src, &scan_out, registry, opts)
}

/// Like [`rewrite_source`], but reuses an existing scan of the same `src`
/// (the CLI scans once for the JSON report and once more would be wasted).
pub fn rewrite_scanned(
    src: &str,
    scan_out: &ScanOutput,
    registry: &Registry,
    opts: &RewriteOptions,
) -> String {
    // one letter, then word characters, then a literal dot.
    let id_re = Regex::new(r"([A-Za-z]\w*)\.").unwrap();

    id_re
        .replace_all(src, |caps: &Captures| {
            let m = caps.get(0).unwrap();
            let name = &caps[1];

            if !opts.rewrite_inside_literals
                && starts_inside_span(&scan_out.spans, m.start() as u64)
            {
                return m.as_str().to_string();
            }
            if !registry.contains(name) {
                return m.as_str().to_string();
            }

            // first in a dotted chain = not preceded by a dot. A match at
            // offset 0 has no preceding byte and counts as first.
            let first = !src[..m.start()].ends_with('.');
            if first {
                format!("this.get('{name}').")
            } else {
                format!("get('{name}').")
            }
        })
        .into_owned()
}

/// Interval membership over the scanner's sorted, non-overlapping spans.
fn starts_inside_span(spans: &[ClassifiedSpan], pos: u64) -> bool {
    let idx = spans.partition_point(|c| c.span.end <= pos);
    spans.get(idx).is_some_and(|c| c.span.contains(pos))
}
