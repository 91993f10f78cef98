//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for one JSONL message record.
pub struct MessageRecord {
    value: Value,
}

impl MessageRecord {
    /// Text message with sane defaults; epoch-millis timestamp.
    pub fn text(id: &str, sender: &str, timestamp_ms: i64, body: &str) -> Self {
        Self {
            value: json!({
                "id": id,
                "sender": sender,
                "timestamp": timestamp_ms,
                "kind": "text",
                "body": body,
                "direction": "incoming",
            }),
        }
    }

    pub fn kind(mut self, kind: &str) -> Self {
        self.value["kind"] = json!(kind);
        self
    }

    pub fn file_name(mut self, name: &str) -> Self {
        self.value["fileName"] = json!(name);
        self
    }

    pub fn link(mut self, url: &str, title: &str) -> Self {
        self.value["kind"] = json!("link");
        self.value["linkUrl"] = json!(url);
        self.value["linkTitle"] = json!(title);
        self
    }

    pub fn recognized_text(mut self, text: &str) -> Self {
        self.value["recognizedText"] = json!(text);
        self
    }

    pub fn timestamp_string(mut self, ts: &str) -> Self {
        self.value["timestamp"] = json!(ts);
        self
    }

    pub fn outgoing(mut self) -> Self {
        self.value["direction"] = json!("outgoing");
        self
    }

    pub fn to_json_line(&self) -> String {
        self.value.to_string()
    }
}

/// Builder for temp corpus files consumed by the loader and the CLI.
pub struct CorpusDirBuilder {
    temp_dir: TempDir,
}

impl CorpusDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a messages.jsonl from records and return its path.
    pub fn with_messages(&self, records: &[MessageRecord]) -> PathBuf {
        let content =
            records.iter().map(|r| r.to_json_line()).collect::<Vec<_>>().join("\n");
        self.with_raw_messages(&content)
    }

    /// Write a messages.jsonl with raw content (for malformed-line tests).
    pub fn with_raw_messages(&self, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join("messages.jsonl");
        fs::write(&path, content).expect("Failed to write messages.jsonl");
        path
    }

    /// Write a synonyms.json mapping and return its path.
    pub fn with_synonyms(&self, table: Value) -> PathBuf {
        let path = self.temp_dir.path().join("synonyms.json");
        fs::write(&path, table.to_string()).expect("Failed to write synonyms.json");
        path
    }
}
