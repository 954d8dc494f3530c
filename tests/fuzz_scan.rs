//! Lightweight fuzz-style tests; no external fuzz harness required.

use getcall::registry::Registry;
use getcall::report::Span;
use getcall::rewrite::{RewriteOptions, rewrite_scanned};
use getcall::scan::{ScanOutput, scan_source};

fn check_span(span: &Span, len: usize) {
    let s = span.start as usize;
    let e = span.end as usize;
    assert!(s <= e, "invalid span: start > end: {span:?}");
    assert!(e <= len, "span out of bounds (len={len}): {span:?}");
}

fn check_scan(out: &ScanOutput, len: usize) {
    let mut prev_end = 0u64;
    for c in &out.spans {
        check_span(&c.span, len);
        assert!(!c.span.is_empty(), "empty classified span: {c:?}");
        assert!(
            c.span.start >= prev_end,
            "spans overlap or are unsorted: {c:?} after end {prev_end}"
        );
        prev_end = c.span.end;
    }
    for d in &out.diagnostics {
        if let Some(s) = &d.span {
            check_span(s, len);
        }
    }
}

fn exercise(src: &str) {
    let out = scan_source(src);
    check_scan(&out, src.len());

    // the rewriter must be total in both filter modes.
    let registry = Registry::from_names(["a", "b", "x", "foo", "get", "this"]);
    let _ = rewrite_scanned(src, &out, &registry, &RewriteOptions::default());
    let _ = rewrite_scanned(
        src,
        &out,
        &registry,
        &RewriteOptions {
            rewrite_inside_literals: true,
        },
    );
}

#[test]
fn adversarial_delimiter_soups_hold_the_span_invariants() {
    let cases: &[&str] = &[
        "",
        "\\",
        "\"",
        "'",
        "\"\\",
        "'\\'",
        "\"'\"'",
        "//",
        "/*",
        "*/",
        "/*/",
        "/**/",
        "/*/**/*/",
        "///*\n*/",
        "/*//*/",
        "\"/*\"*/",
        "'//'//\n",
        "a.'b.'c.\"d.\"//e.\n/*f.*/g.",
        "\\\"a.\\\"",
        "\"unclosed // not a comment",
        "/* unclosed ' \" ",
        "x.\n\"\n\"\n//\n",
    ];
    for src in cases {
        exercise(src);
    }
}

#[test]
fn long_runs_of_delimiters_stay_linear_and_in_bounds() {
    // pathological runs: every second byte re-triggers a state change.
    let quotes = "\"".repeat(10_000);
    exercise(&quotes);

    let singles = "'".repeat(10_001);
    exercise(&singles);

    let escapes = format!("\"{}", "\\\\".repeat(5_000));
    exercise(&escapes);

    let comments = "/**/".repeat(5_000);
    let out = scan_source(&comments);
    assert_eq!(out.spans.len(), 5_000);
    check_scan(&out, comments.len());

    let stars = format!("/*{}", "*".repeat(10_000));
    exercise(&stars);
}

#[test]
fn alternating_quote_runs_pair_up() {
    // "" "" "" ... every pair forms one two-byte string span.
    let src = "\"\"".repeat(1_000);
    let out = scan_source(&src);
    assert_eq!(out.spans.len(), 1_000);
    for (i, c) in out.spans.iter().enumerate() {
        assert_eq!(c.span.start, (i * 2) as u64);
        assert_eq!(c.span.end, (i * 2 + 2) as u64);
    }
}

#[test]
fn rewriting_never_changes_shielded_bytes() {
    // every classified span's bytes must appear verbatim in the output.
    let src = "a./*a.*/'a.'//a.\nb.\"a.\"";
    let out = scan_source(src);
    let registry = Registry::from_names(["a", "b"]);
    let rewritten = rewrite_scanned(src, &out, &registry, &RewriteOptions::default());
    for c in &out.spans {
        let shielded = &src[c.span.start as usize..c.span.end as usize];
        assert!(
            rewritten.contains(shielded),
            "span text {shielded:?} missing from output {rewritten:?}"
        );
    }
}
