//! Query-to-ranked-results evaluation.

use crate::models::{MatchKind, Message, SearchResult};

use super::scoring;
use super::synonyms::SynonymTable;
use super::tokenizer::{MIN_QUERY_LEN, normalize, tokenize};

/// Keeps the recency addend below the smallest field weight (5.0) for any
/// timestamp this side of roughly year 2500, so recency can only separate
/// otherwise-equal scores, never reorder messages that differ by score.
pub const RECENCY_DIVISOR: f64 = 1.0e13;

/// The search-and-rank engine: a pure function of
/// (query, message corpus, synonym table) into an ordered result list.
///
/// The synonym table is injected at construction; the engine holds no
/// other state and performs no I/O. Every invocation re-scans the given
/// corpus from scratch, so callers issuing a query per keystroke should
/// debounce.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    synonyms: SynonymTable,
}

impl SearchEngine {
    pub fn new(synonyms: SynonymTable) -> Self {
        Self { synonyms }
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    /// Rank `messages` by relevance to `query`, best first.
    ///
    /// Messages with no evidence at all are absent from the output (a
    /// zero score is no result, not a low-relevance result). Queries
    /// shorter than [`MIN_QUERY_LEN`] after trimming return an empty
    /// list for any corpus. This function never fails: malformed or
    /// missing optional message fields match as empty strings.
    pub fn rank<'a>(&self, query: &str, messages: &'a [Message]) -> Vec<SearchResult<'a>> {
        let normalized = normalize(query);
        if normalized.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let tokens = tokenize(query);

        let mut results: Vec<SearchResult<'a>> = messages
            .iter()
            .filter_map(|message| {
                let evidence = scoring::evaluate(message, &normalized, &tokens, &self.synonyms);
                if evidence.score <= 0.0 {
                    return None;
                }
                let recency = message.timestamp.timestamp_millis() as f64 / RECENCY_DIVISOR;
                Some(SearchResult {
                    message,
                    score: evidence.score + recency,
                    badges: evidence.badges,
                    classification: if evidence.exact {
                        MatchKind::Exact
                    } else {
                        MatchKind::Semantic
                    },
                })
            })
            .collect();

        // Stable sort: residual exact ties keep corpus iteration order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }
}
