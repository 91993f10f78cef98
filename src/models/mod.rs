//! Data models for the chat corpus and search results.
//!
//! - [`Message`] - a single chat message (text, image, document, or link)
//! - [`ChatSession`] - a named conversation holding its message history
//! - [`SearchResult`] - one ranked hit, borrowing the matched message
//! - [`Badge`] / [`MatchKind`] - match-reason labels and classification
//!
//! Messages deserialize with custom timestamp handling in the
//! `corpus::deserializers` module: corpora in the wild carry epoch
//! milliseconds, RFC3339, or naive local strings, and a bad timestamp must
//! degrade to the epoch instead of failing the load.

pub mod chat;
pub mod message;
pub mod search;

pub use chat::ChatSession;
pub use message::{Direction, Message, MessageKind};
pub use search::{Badge, MatchKind, SearchResult};
