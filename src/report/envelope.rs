use crate::report::{ClassifiedSpan, Diagnostic};
use serde::{Deserialize, Serialize};

/// Top-level JSON file written next to a scanned script (`{file}.scan.json`).
///
/// This wraps the scanner's span list with metadata that makes debugging
/// easier (schema versioning, span encoding, source info, diagnostics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFile {
    /// Schema version for this JSON payload.
    pub schema_version: u32,

    pub scanner: ScannerInfo,

    /// How to interpret all `Span` values contained in this file.
    pub span_encoding: SpanEncoding,

    pub source: SourceInfo,

    /// Scanner diagnostics (unterminated regions and the like).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,

    /// Every string-literal and comment region, in discovery order.
    pub spans: Vec<ClassifiedSpan>,
}

/// Identifies the program that produced the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerInfo {
    pub name: String,
    pub version: String,
}

/// Captures how `Span` offsets should be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanEncoding {
    pub unit: SpanUnit,
    pub base: SpanBase,
}

impl Default for SpanEncoding {
    fn default() -> Self {
        Self {
            unit: SpanUnit::Byte,
            base: SpanBase::RawInput,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanUnit {
    /// Byte offsets (UTF-8).
    Byte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanBase {
    /// Offsets are measured against the raw input bytes as read from disk
    /// (no normalization pass was applied before spanning).
    RawInput,
}

/// Optional information about the input source that was classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// If available, a path to the script file used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Length of the input in bytes.
    pub byte_len: u64,
}
