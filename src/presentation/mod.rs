//! Consumer-side grouping and pagination over the engine's ranked output.
//!
//! The engine returns one complete ranked list; splitting it into Exact and
//! Semantic sections and truncating each section for display is purely a
//! presentation concern and lives here, outside the engine.

use crate::models::{MatchKind, SearchResult};

/// How many results a collapsed section shows before "show all".
pub const SECTION_PREVIEW_COUNT: usize = 3;

/// Ranked results partitioned by classification. Each section preserves
/// the engine's rank order.
#[derive(Debug, Clone, Default)]
pub struct GroupedResults<'a> {
    pub exact: Vec<SearchResult<'a>>,
    pub semantic: Vec<SearchResult<'a>>,
}

impl<'a> GroupedResults<'a> {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.semantic.is_empty()
    }

    pub fn total(&self) -> usize {
        self.exact.len() + self.semantic.len()
    }
}

/// Partition a ranked list into Exact and Semantic sections.
pub fn group_results(results: Vec<SearchResult<'_>>) -> GroupedResults<'_> {
    let mut grouped = GroupedResults::default();
    for result in results {
        match result.classification {
            MatchKind::Exact => grouped.exact.push(result),
            MatchKind::Semantic => grouped.semantic.push(result),
        }
    }
    grouped
}

/// A section's visible slice plus how many entries stay hidden while
/// collapsed.
pub fn preview<'r, 'a>(
    section: &'r [SearchResult<'a>],
    expanded: bool,
) -> (&'r [SearchResult<'a>], usize) {
    if expanded || section.len() <= SECTION_PREVIEW_COUNT {
        (section, 0)
    } else {
        (&section[..SECTION_PREVIEW_COUNT], section.len() - SECTION_PREVIEW_COUNT)
    }
}
