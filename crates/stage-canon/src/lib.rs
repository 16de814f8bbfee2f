//! Funding-stage canonicalization for the UK microbiome landscape.
//!
//! Spreadsheet funding-stage labels arrive hand-typed: mixed case, stray
//! whitespace, zero-width paste artifacts, `/` and `-` used interchangeably,
//! `grant` written where `seed` is meant. This crate collapses them into a
//! small set of categories suitable for grouping and counting.
//!
//! Unrecognised but present labels are Title-Cased rather than folded into
//! `Unknown`, so new spellings show up in breakdowns.
//!
//! # Example
//!
//! ```
//! use stage_canon::canonicalize;
//!
//! assert_eq!(canonicalize(Some("  pre-seed ")), "Seed");
//! assert_eq!(canonicalize(Some("public/private")), "Public/Private");
//! assert_eq!(canonicalize(Some("bridge round")), "Bridge Round");
//! assert_eq!(canonicalize(None), "Unknown");
//! ```

mod canonicalizer;
mod normalize;
mod stage;

use std::sync::LazyLock;

pub use canonicalizer::StageCanonicalizer;
pub use normalize::{collapse_whitespace, normalize_stage_input, title_case};
pub use stage::CanonicalStage;

static DEFAULT: LazyLock<StageCanonicalizer> = LazyLock::new(StageCanonicalizer::default);

/// The process-wide canonicalizer with the built-in synonym table.
pub fn default_canonicalizer() -> &'static StageCanonicalizer {
    &DEFAULT
}

/// Canonicalize a raw funding-stage label with the built-in table.
pub fn canonicalize(raw: Option<&str>) -> String {
    DEFAULT.canonicalize(raw)
}

/// Classify a raw funding-stage label with the built-in table.
pub fn classify(raw: Option<&str>) -> CanonicalStage {
    DEFAULT.classify(raw)
}

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
