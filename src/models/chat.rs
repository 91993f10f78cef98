use serde::{Deserialize, Serialize};

use super::message::Message;

/// A named conversation: the unit the chat list and chat screen work with.
/// The search engine itself never sees sessions, only message slices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub status: String,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub unread_count: Option<u32>,
}

impl ChatSession {
    pub fn new(id: impl Into<String>, name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: String::new(),
            messages,
            unread_count: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_unread(mut self, count: u32) -> Self {
        self.unread_count = Some(count);
        self
    }

    /// Most recent message by corpus order (sessions are stored oldest
    /// first, as the original export writes them).
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}
