//! Chat Intent Search - weighted keyword search over chat message history
//!
//! This library ranks the messages of a chat by how well they match a typed
//! query, the way an in-chat "smart search" does. It supports:
//!
//! - Normalizing and tokenizing queries, with naive plural stemming
//! - Field-weighted scoring across body, file names, link titles,
//!   recognized image text, and sender names
//! - Synonym expansion through a configurable lookup table
//! - Classifying each hit as an exact or semantic match, with badges
//!   describing where the evidence came from
//! - A recency component small enough to only break score ties
//!
//! # Example
//!
//! ```
//! use chat_intent_search::corpus::{default_synonyms, demo_messages};
//! use chat_intent_search::engine::SearchEngine;
//!
//! let engine = SearchEngine::new(default_synonyms());
//! let messages = demo_messages();
//! let results = engine.rank("electricity bill", &messages);
//! for result in &results {
//!     println!("{:.1}  {}", result.score, result.message.preview());
//! }
//! ```

pub mod cli;
pub mod clipboard;
pub mod corpus;
pub mod engine;
pub mod models;
pub mod presentation;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use engine::{SearchEngine, SynonymTable};
pub use models::{Badge, MatchKind, Message, SearchResult};
pub use presentation::{GroupedResults, group_results};
