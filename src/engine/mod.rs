//! The in-chat search-and-rank engine.
//!
//! A pure function of (query, message corpus, synonym table) into an
//! ordered result list, built from four pieces:
//!
//! - [`tokenizer`] - normalization, whitespace splitting, and naive
//!   trailing-"s" stemming, behind a hard 2-character minimum-query gate
//! - [`scoring`] - per-field substring checks with fixed additive weights,
//!   plus synonym expansion at a flat weight per hitting related term
//! - [`synonyms`] - the hand-authored, asymmetric [`SynonymTable`]
//! - [`ranker`] - the [`SearchEngine`] that folds evidence per message,
//!   applies the recency tiebreak, and sorts
//!
//! There is no index and no cached state: each query re-scans the corpus.
//! Exact-vs-semantic grouping and display truncation live in the
//! `presentation` module, outside the engine.

pub mod ranker;
pub mod scoring;
pub mod synonyms;
pub mod tokenizer;

pub use ranker::{RECENCY_DIVISOR, SearchEngine};
pub use scoring::{
    WEIGHT_BODY, WEIGHT_EXACT_PHRASE, WEIGHT_FILE_NAME, WEIGHT_LINK_TITLE,
    WEIGHT_RECOGNIZED_TEXT, WEIGHT_SENDER, WEIGHT_SYNONYM,
};
pub use synonyms::SynonymTable;
pub use tokenizer::{MIN_QUERY_LEN, tokenize};
