pub mod registry;
pub mod report;
pub mod rewrite;
pub mod scan;

use registry::Registry;
use rewrite::RewriteOptions;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

/// Options controlling how rewritten scripts are written on disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// If true, overwrite the input file with the rewritten text. Otherwise
    /// nothing is written and the caller decides what to do with the result.
    pub in_place: bool,

    /// If true, also write the scan classification envelope next to the
    /// input as `{file}.scan.json`.
    pub write_scan_json: bool,
}

/// Rewrite a complete in-memory text with default options.
///
/// This is the whole core pipeline: classify literal/comment spans, then
/// substitute recognized `identifier.` occurrences outside them.
pub fn process(src: &str, registry: &Registry) -> String {
    rewrite::rewrite_source(src, registry, &RewriteOptions::default())
}

/// Like [`process`], but allows callers to customize substitution decisions.
pub fn process_with_options(src: &str, registry: &Registry, opts: &RewriteOptions) -> String {
    rewrite::rewrite_source(src, registry, opts)
}

/// Single file mode: read, rewrite, optionally write back.
pub fn run(path: &Path, registry: &Registry) -> Result<String, Box<dyn Error>> {
    run_with_options(
        path,
        registry,
        &RewriteOptions::default(),
        &WriteOptions::default(),
    )
}

/// Single file mode: like [`run`], but also controls substitution decisions
/// and how results land on disk.
pub fn run_with_options(
    path: &Path,
    registry: &Registry,
    rewrite_opts: &RewriteOptions,
    write_opts: &WriteOptions,
) -> Result<String, Box<dyn Error>> {
    let src = read_source(path)?;
    let scan_out = scan::scan_source(&src);

    if write_opts.write_scan_json {
        write_scan_json(path, &scan_out)?;
    }

    let rewritten = rewrite::rewrite_scanned(&src, &scan_out, registry, rewrite_opts);

    if write_opts.in_place {
        fs::write(path, &rewritten)?;
    }

    Ok(rewritten)
}

/// Bulk mode: walk `src_root` and rewrite every `*.{ext}` file, either in
/// place or mirrored under `out_root` with the same directory structure.
pub fn rewrite_all_in_dirs(
    src_root: &Path,
    out_root: Option<&Path>,
    ext: &str,
    registry: &Registry,
    rewrite_opts: &RewriteOptions,
    write_opts: &WriteOptions,
) -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();

    if !src_root.exists() {
        return Err(format!("Script source directory not found: {}", src_root.display()).into());
    }

    let mut entries: Vec<_> = WalkDir::new(src_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.path().extension().is_some_and(|x| x == ext))
        .collect();

    entries.sort_by(|a, b| a.path().cmp(b.path()));

    let total = entries.len();
    let mut count = 0;

    for entry in entries {
        let path = entry.path();

        let src = read_source(path)?;
        let scan_out = scan::scan_source(&src);

        if write_opts.write_scan_json {
            write_scan_json(path, &scan_out)?;
        }

        let rewritten = rewrite::rewrite_scanned(&src, &scan_out, registry, rewrite_opts);

        let dest: PathBuf = match out_root {
            Some(root) => {
                // keep the same structure relative to the source root.
                let relative = path.strip_prefix(src_root)?;
                let dest = root.join(relative);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                dest
            }
            None => path.to_path_buf(),
        };
        fs::write(&dest, &rewritten)?;

        count += 1;

        let elapsed = start_time.elapsed();
        let total_ms = elapsed.as_millis();
        let mins = total_ms / 60_000;
        let secs = (total_ms % 60_000) / 1_000;
        let ms = total_ms % 1_000;
        eprintln!(
            "[{:>4}/{:>4}] [{:02}:{:02}.{:03}] Rewrote: {:?}",
            count, total, mins, secs, ms, dest
        );
    }

    let total_elapsed = start_time.elapsed();
    let total_secs = total_elapsed.as_secs_f64();
    let avg_str = if count > 0 {
        format!("{:.3}s", total_secs / count as f64)
    } else {
        "-".to_string()
    };

    eprintln!(
        "Done. Rewrote {} files in {:.3}s (avg {}/file).",
        count, total_secs, avg_str
    );
    Ok(())
}

fn read_source(path: &Path) -> Result<String, Box<dyn Error>> {
    let bytes = fs::read(path)?;

    // if we ever encounter invalid UTF-8, fallback to lossy conversion
    Ok(String::from_utf8(bytes.clone())
        .unwrap_or_else(|e| String::from_utf8_lossy(&e.into_bytes()).to_string()))
}

fn write_scan_json(path: &Path, scan_out: &scan::ScanOutput) -> Result<(), Box<dyn Error>> {
    let scan_file = report::ScanFile {
        schema_version: report::SCHEMA_VERSION,
        scanner: report::ScannerInfo {
            name: report::SCANNER_NAME.to_string(),
            version: report::SCANNER_VERSION.to_string(),
        },
        span_encoding: report::SpanEncoding::default(),
        source: report::SourceInfo {
            path: Some(path.to_string_lossy().to_string()),
            byte_len: scan_out.byte_len,
        },
        diagnostics: scan_out.diagnostics.clone(),
        spans: scan_out.spans.clone(),
    };

    // prettify JSON so it's easy to inspect / diff.
    let json = serde_json::to_string_pretty(&scan_file)?;
    let json_path = PathBuf::from(format!("{}.scan.json", path.display()));
    fs::write(json_path, json)?;
    Ok(())
}
