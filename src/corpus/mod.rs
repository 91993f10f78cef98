//! Corpus supply: the built-in demo dataset and loaders for user-supplied
//! corpora.
//!
//! # Error Handling Strategy
//!
//! Loading follows a graceful-degradation approach suitable for CLI tools:
//! malformed JSONL lines are logged to stderr and skipped so one bad record
//! cannot break a load, while systematic corruption (>50% of lines failing,
//! or >100 consecutive failures) turns into an error. Unparseable
//! timestamps are not errors at all - they degrade to the Unix epoch, which
//! sorts as the earliest possible time in the recency tiebreak.

pub mod demo;
pub mod deserializers;
pub mod loader;

pub use demo::{default_synonyms, demo_chats, demo_messages};
pub use loader::{load_messages, load_synonyms};
