//! Query tokenization with naive singular/plural stemming.

/// Queries shorter than this (after trimming) produce no tokens and the
/// engine short-circuits to an empty result set. A hard gate, not a
/// scoring penalty.
pub const MIN_QUERY_LEN: usize = 2;

/// Trim and lowercase the full query; the same normalization feeds both
/// tokenization and the exact-phrase check.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Split a normalized query into search tokens.
///
/// Each whitespace-separated word is stemmed by stripping one trailing
/// "s"; when stripping changes the word, both the original and the
/// stripped form are emitted, in that order. Tokens are deliberately not
/// deduplicated: repeated tokens score their evidence repeatedly
/// downstream, matching the authored ranking behavior.
pub fn tokenize(query: &str) -> Vec<String> {
    let normalized = normalize(query);
    if normalized.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    normalized
        .split_whitespace()
        .flat_map(|word| match word.strip_suffix('s') {
            Some(base) => vec![word.to_string(), base.to_string()],
            None => vec![word.to_string()],
        })
        .collect()
}
