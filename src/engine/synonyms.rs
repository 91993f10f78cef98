//! Hand-authored synonym configuration.

use std::collections::HashMap;

use serde::Deserialize;

/// Mapping from a canonical lowercase term to an ordered list of related
/// lowercase terms.
///
/// Entries are authored independently: relation is neither symmetric nor
/// transitive, and no closure is ever computed; each entry is consulted
/// exactly as stored. The table is an explicitly constructed, immutable
/// configuration object handed to the engine, so tests and callers can
/// supply their own without hidden global state.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "HashMap<String, Vec<String>>")]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one authored entry. Key and values are lowercased; value
    /// order is preserved.
    pub fn insert<I, S>(&mut self, term: &str, related: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.entries.insert(
            term.to_lowercase(),
            related.into_iter().map(|s| s.as_ref().to_lowercase()).collect(),
        );
    }

    /// Related terms for a token, if an entry keyed by it exists.
    pub fn related(&self, token: &str) -> Option<&[String]> {
        self.entries.get(token).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for SynonymTable {
    fn from(raw: HashMap<String, Vec<String>>) -> Self {
        let mut table = SynonymTable::new();
        for (term, related) in raw {
            table.insert(&term, related);
        }
        table
    }
}
