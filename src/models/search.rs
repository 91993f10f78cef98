use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::message::Message;

/// How a result matched: Exact iff the full normalized query appeared
/// verbatim in the body or file name, Semantic otherwise. The original data
/// model reserves a third "Related" tag; the engine never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchKind {
    Exact,
    Semantic,
}

/// Short human-readable label explaining one reason a result matched.
/// Kept in a `BTreeSet` so repeated evidence deduplicates and display
/// order is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Badge {
    #[serde(rename = "Exact Match")]
    ExactMatch,
    #[serde(rename = "OCR")]
    Ocr,
    Semantic,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Badge::ExactMatch => write!(f, "Exact Match"),
            Badge::Ocr => write!(f, "OCR"),
            Badge::Semantic => write!(f, "Semantic"),
        }
    }
}

/// One ranked hit. Borrows the matched message from the corpus; results
/// live only for the duration of a single query evaluation and are never
/// cached or mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    pub message: &'a Message,
    /// Higher is more relevant. Field weights accumulate additively, plus a
    /// sub-unit recency addend that only separates otherwise-equal scores.
    pub score: f64,
    pub badges: BTreeSet<Badge>,
    pub classification: MatchKind,
}
