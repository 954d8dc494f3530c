//! AFL++ fuzz target for `getcall`.
//!
//! This binary is intentionally stdin-driven, so it can be used with AFL++.
//! Build and run it via `cargo-afl`:
//!
//! ```bash
//! cargo install cargo-afl
//!
//! cargo afl build --release --features afl_fuzz --bin getcall_afl_scan
//!
//! mkdir -p fuzz/afl/out
//!
//! cargo afl fuzz \
//!   -i fuzz/afl/in \
//!   -o fuzz/afl/out \
//!   target/release/getcall_afl_scan
//! ```
//!
//! Rust panics normally unwind and exit with a non-crashing status code.
//! AFL++ only treats crashes as signals/aborts. We therefore catch any unwind
//! and turn it into `abort()`.

use std::io::Read;

use getcall::registry::Registry;
use getcall::report::*;
use getcall::rewrite::{self, RewriteOptions};
use getcall::scan;

const MAX_INPUT_LEN: usize = 1_000_000; // 1MB guardrail; AFL++ will typically cap this anyway.

fn check_span(span: &Span, len: usize) {
    let s = span.start as usize;
    let e = span.end as usize;
    assert!(s <= e, "invalid span: start > end: {span:?}");
    assert!(e <= len, "span out of bounds (len={len}): {span:?}");
}

fn validate_scan(out: &scan::ScanOutput, src_len: usize) {
    let mut prev_end = 0u64;
    for c in &out.spans {
        check_span(&c.span, src_len);
        assert!(
            !c.span.is_empty(),
            "classified span must be non-empty: {c:?}"
        );
        assert!(
            c.span.start >= prev_end,
            "spans must be sorted and disjoint: {c:?} after end {prev_end}"
        );
        prev_end = c.span.end;
    }
    for d in &out.diagnostics {
        if let Some(s) = &d.span {
            check_span(s, src_len);
        }
    }
}

fn run_one_input(data: &[u8]) {
    if data.len() > MAX_INPUT_LEN {
        // guardrail: avoid pathological memory use on enormous inputs.
        return;
    }

    // script sources should be UTF-8, but AFL++ will happily hand us arbitrary bytes.
    // lossy conversion keeps the harness total (no early returns that reduce coverage).
    let src = String::from_utf8_lossy(data).to_string();

    let out = scan::scan_source(&src);

    // invariants that must hold for any input (valid or invalid):
    // - spans never go out of bounds, never overlap, stay ordered
    // - the rewriter never panics, in either filter mode
    validate_scan(&out, src.len());

    let registry = Registry::from_names(["a", "x", "foo", "get", "this"]);
    let _ = rewrite::rewrite_scanned(&src, &out, &registry, &RewriteOptions::default());
    let _ = rewrite::rewrite_scanned(
        &src,
        &out,
        &registry,
        &RewriteOptions {
            rewrite_inside_literals: true,
        },
    );

    // build a full envelope to exercise JSON serialization.
    let scan_file = ScanFile {
        schema_version: SCHEMA_VERSION,
        scanner: ScannerInfo {
            name: SCANNER_NAME.to_string(),
            version: SCANNER_VERSION.to_string(),
        },
        span_encoding: SpanEncoding::default(),
        source: SourceInfo {
            path: None,
            byte_len: src.len() as u64,
        },
        diagnostics: out.diagnostics,
        spans: out.spans,
    };

    // JSON round-trip must never panic.
    let json = serde_json::to_vec(&scan_file).unwrap();
    let _back: ScanFile = serde_json::from_slice(&json).unwrap();
}

fn main() {
    let mut data = Vec::new();
    std::io::stdin().read_to_end(&mut data).unwrap();

    // convert any panic into an abort().
    if std::panic::catch_unwind(|| run_one_input(&data)).is_err() {
        std::process::abort();
    }
}
