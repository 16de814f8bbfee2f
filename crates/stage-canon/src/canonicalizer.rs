//! Synonym-table lookup over normalized funding-stage labels.

use std::collections::HashMap;

use tracing::debug;

use crate::normalize::{normalize_stage_input, title_case};
use crate::stage::CanonicalStage;

/// Normalized keys recognised out of the box.
///
/// `seed / grant` cannot survive normalization (`grant` is already read as
/// `seed`), but stays listed so the table documents every spelling seen in
/// the source data.
static DEFAULT_SYNONYMS: &[(&str, CanonicalStage)] = &[
    ("seed", CanonicalStage::Seed),
    ("seed / seed", CanonicalStage::Seed),
    ("seed / grant", CanonicalStage::Seed),
    ("series a", CanonicalStage::SeriesA),
    ("series b", CanonicalStage::SeriesB),
    ("series c", CanonicalStage::SeriesC),
    ("public / private", CanonicalStage::PublicPrivate),
    ("public", CanonicalStage::Public),
    ("private", CanonicalStage::Private),
    ("acquired", CanonicalStage::Acquired),
    ("unknown", CanonicalStage::Unknown),
];

/// Maps raw funding-stage labels onto canonical categories.
///
/// Immutable once built, so a single instance can be shared across threads.
///
/// # Example
///
/// ```
/// use stage_canon::{CanonicalStage, StageCanonicalizer};
///
/// let canon = StageCanonicalizer::default()
///     .with_synonym("Series D", CanonicalStage::Other("Series D".to_string()));
///
/// assert_eq!(canon.canonicalize(Some("seed/grant")), "Seed");
/// assert_eq!(canon.canonicalize(None), "Unknown");
/// ```
#[derive(Debug, Clone)]
pub struct StageCanonicalizer {
    synonyms: HashMap<String, CanonicalStage>,
}

impl StageCanonicalizer {
    /// Create a canonicalizer with an empty synonym table.
    ///
    /// Every present label falls through to Title-Case. Mostly useful as a
    /// base for [`with_synonym`](Self::with_synonym).
    pub fn empty() -> Self {
        Self {
            synonyms: HashMap::new(),
        }
    }

    /// Add a synonym. The key is normalized the same way inputs are, so
    /// `"Series-D"` and `"series d"` register the same entry.
    pub fn with_synonym(mut self, raw: &str, stage: CanonicalStage) -> Self {
        let key = normalize_stage_input(raw);
        if key.is_empty() {
            return self;
        }
        self.synonyms.insert(key, stage);
        self
    }

    /// Number of normalized keys in the table.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Classify a raw label. Total: absent, empty and garbage input all
    /// produce a stage.
    pub fn classify(&self, raw: Option<&str>) -> CanonicalStage {
        let Some(raw) = raw else {
            return CanonicalStage::Unknown;
        };

        let cleaned = normalize_stage_input(raw);
        if cleaned.is_empty() {
            return CanonicalStage::Unknown;
        }

        if let Some(stage) = self.synonyms.get(&cleaned) {
            return stage.clone();
        }

        let fallback = title_case(&cleaned);
        debug!(raw = %raw, fallback = %fallback, "Unrecognised funding stage");
        CanonicalStage::Other(fallback)
    }

    /// Canonicalize a raw label to its display string. Never empty.
    pub fn canonicalize(&self, raw: Option<&str>) -> String {
        self.classify(raw).into()
    }
}

impl Default for StageCanonicalizer {
    fn default() -> Self {
        DEFAULT_SYNONYMS
            .iter()
            .fold(Self::empty(), |canon, (key, stage)| {
                canon.with_synonym(key, stage.clone())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_size() {
        // "seed / grant" normalizes onto "seed / seed"
        let canon = StageCanonicalizer::default();
        assert_eq!(canon.len(), DEFAULT_SYNONYMS.len() - 1);
    }

    #[test]
    fn test_empty_table_title_cases_everything() {
        let canon = StageCanonicalizer::empty();
        assert!(canon.is_empty());
        assert_eq!(canon.canonicalize(Some("seed")), "Seed");
        assert_eq!(canon.canonicalize(Some("series a")), "Series A");
        assert_eq!(
            canon.classify(Some("seed")),
            CanonicalStage::Other("Seed".to_string())
        );
    }

    #[test]
    fn test_with_synonym_normalizes_key() {
        let canon = StageCanonicalizer::default()
            .with_synonym("Series-D", CanonicalStage::SeriesC);
        assert_eq!(canon.classify(Some("series d")), CanonicalStage::SeriesC);
        assert_eq!(canon.classify(Some("SERIES D")), CanonicalStage::SeriesC);
    }

    #[test]
    fn test_with_synonym_overrides_default() {
        let canon = StageCanonicalizer::default()
            .with_synonym("acquired", CanonicalStage::Private);
        assert_eq!(canon.classify(Some("Acquired")), CanonicalStage::Private);
    }

    #[test]
    fn test_with_blank_synonym_ignored() {
        let canon = StageCanonicalizer::default().with_synonym("  ", CanonicalStage::Seed);
        assert_eq!(canon.len(), StageCanonicalizer::default().len());
        assert_eq!(canon.canonicalize(Some("")), "Unknown");
    }

    #[test]
    fn test_classify_fallback() {
        let canon = StageCanonicalizer::default();
        let stage = canon.classify(Some("bridge round"));
        assert_eq!(stage, CanonicalStage::Other("Bridge Round".to_string()));
        assert!(!stage.is_recognized());
    }

    #[test]
    fn test_classify_missing() {
        let canon = StageCanonicalizer::default();
        assert_eq!(canon.classify(None), CanonicalStage::Unknown);
        assert_eq!(canon.classify(Some("")), CanonicalStage::Unknown);
        assert_eq!(canon.classify(Some("\u{200B}\u{00A0} ")), CanonicalStage::Unknown);
    }

    #[test]
    fn test_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StageCanonicalizer>();
    }
}
