//! Classification report types and JSON envelope.
//!
//! This module defines the **contract** between:
//! 1) scanning script source -> classified literal/comment spans, and
//! 2) rewriting script source -> output text.
//!
//! Design goals:
//! - Stable JSON representation for on-disk inspection.
//! - Precise span offsets into the **raw input bytes** (no pre-normalization).
//! - Clear separation between *span classification* and *identifier rewriting*.

mod classified;
mod diagnostic;
mod envelope;
mod span;

pub use classified::*;
pub use diagnostic::*;
pub use envelope::*;
pub use span::*;

/// JSON schema version for the scan envelope.
///
/// Bump this when making non-backwards-compatible changes to the JSON structure.
pub const SCHEMA_VERSION: u32 = 1;

/// The scanner name stored in the JSON envelope.
pub const SCANNER_NAME: &str = "getcall";

/// The scanner version stored in the JSON envelope.
pub const SCANNER_VERSION: &str = env!("CARGO_PKG_VERSION");
