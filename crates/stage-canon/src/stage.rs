//! Canonical funding-stage categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A canonical funding stage.
///
/// Named variants are the categories the synonym table recognises.
/// `Other` carries the Title-Case form of a label that matched nothing,
/// so unseen labels stay visible in breakdowns instead of folding into
/// `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CanonicalStage {
    Seed,
    SeriesA,
    SeriesB,
    SeriesC,
    Public,
    Private,
    PublicPrivate,
    Acquired,
    Unknown,
    /// Title-Cased fallback for an unrecognised label. Never empty.
    Other(String),
}

impl CanonicalStage {
    /// The recognised categories in display order.
    pub const ALL: [CanonicalStage; 9] = [
        CanonicalStage::Seed,
        CanonicalStage::SeriesA,
        CanonicalStage::SeriesB,
        CanonicalStage::SeriesC,
        CanonicalStage::Public,
        CanonicalStage::Private,
        CanonicalStage::PublicPrivate,
        CanonicalStage::Acquired,
        CanonicalStage::Unknown,
    ];

    /// Get the display label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Seed => "Seed",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
            Self::SeriesC => "Series C",
            Self::Public => "Public",
            Self::Private => "Private",
            Self::PublicPrivate => "Public/Private",
            Self::Acquired => "Acquired",
            Self::Unknown => "Unknown",
            Self::Other(label) => label,
        }
    }

    /// Whether this is one of the named categories rather than a fallback.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Map an exact display label back to its named variant.
    fn from_display(label: &str) -> Option<Self> {
        Self::ALL.iter().find(|stage| stage.as_str() == label).cloned()
    }
}

impl fmt::Display for CanonicalStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact display labels map back to their variant; anything else goes
/// through the built-in canonicalizer, so `Other` always holds a Title-Cased
/// label.
impl From<String> for CanonicalStage {
    fn from(label: String) -> Self {
        Self::from_display(&label).unwrap_or_else(|| crate::classify(Some(&label)))
    }
}

impl From<CanonicalStage> for String {
    fn from(stage: CanonicalStage) -> Self {
        match stage {
            CanonicalStage::Other(label) => label,
            named => named.as_str().to_string(),
        }
    }
}
