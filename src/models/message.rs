use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a message carries besides (or instead of) plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    /// PDF statements, tickets, scans. Exported corpora may still tag these
    /// as "pdf", which is accepted as an alias.
    #[serde(alias = "pdf")]
    Document,
    Link,
}

/// Whether a message was received or sent. Inert for search (only the
/// surrounding UI cares), carried so a corpus round-trips losslessly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// A single chat message as supplied by the corpus.
///
/// The searchable surface is the union of `body`, `recognized_text`,
/// `link_title`, `file_name`, and `sender`; every other field is inert for
/// search purposes. Optional fields absent from a record are treated as
/// empty strings when matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: String,
    /// Used only for the deterministic recency tiebreak. Unparseable
    /// timestamps deserialize to the Unix epoch rather than failing.
    #[serde(deserialize_with = "crate::corpus::deserializers::deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    /// Free-text content; may be empty for media-only messages.
    #[serde(default)]
    pub body: String,
    /// Present for image/document kinds.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Present for link kind.
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub link_title: Option<String>,
    /// OCR-equivalent text extracted from an attachment.
    #[serde(default)]
    pub recognized_text: Option<String>,
    pub direction: Direction,
    #[serde(default)]
    pub forwarded: bool,
}

impl Message {
    /// Plain text message with no attachments.
    pub fn text(
        id: impl Into<String>,
        sender: impl Into<String>,
        timestamp: DateTime<Utc>,
        body: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            id: id.into(),
            sender: sender.into(),
            timestamp,
            kind: MessageKind::Text,
            body: body.into(),
            file_name: None,
            link_url: None,
            link_title: None,
            recognized_text: None,
            direction,
            forwarded: false,
        }
    }

    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_link(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        self.kind = MessageKind::Link;
        self.link_url = Some(url.into());
        self.link_title = Some(title.into());
        self
    }

    pub fn with_recognized_text(mut self, text: impl Into<String>) -> Self {
        self.recognized_text = Some(text.into());
        self
    }

    pub fn forwarded(mut self) -> Self {
        self.forwarded = true;
        self
    }

    /// One-line preview for list surfaces: body if present, otherwise the
    /// most descriptive attachment field.
    pub fn preview(&self) -> &str {
        if !self.body.is_empty() {
            return &self.body;
        }
        match self.kind {
            MessageKind::Image => self
                .recognized_text
                .as_deref()
                .or(self.file_name.as_deref())
                .unwrap_or("Image"),
            MessageKind::Document => self.file_name.as_deref().unwrap_or("Document"),
            MessageKind::Link => self
                .link_title
                .as_deref()
                .or(self.link_url.as_deref())
                .unwrap_or("Link"),
            MessageKind::Text => "",
        }
    }
}
