// tests/support/builders.rs
use serde_json::{Value, json};

/// JSON content record as the editor would submit it.
pub struct RecordBuilder {
    record: Value,
}

impl RecordBuilder {
    /// A draft post that passes validation.
    pub fn new() -> Self {
        Self {
            record: json!({
                "kind": "post",
                "title": "Getting Started With Rust",
                "slug": "getting-started-with-rust",
                "excerpt": "A short tour of the language.",
                "content": "<h2>Why</h2><p>Rust is fast and memory safe.</p>",
                "author": "Sam Writer",
                "tags": ["rust", "tutorial"],
                "status": "draft"
            }),
        }
    }

    /// Every field blank, with an out-of-range status.
    pub fn empty() -> Self {
        Self {
            record: json!({
                "title": "",
                "slug": "",
                "excerpt": "",
                "content": null,
                "author": "",
                "status": "archived"
            }),
        }
    }

    pub fn set(mut self, key: &str, value: Value) -> Self {
        if let Some(map) = self.record.as_object_mut() {
            map.insert(key.to_string(), value);
        }
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        if let Some(map) = self.record.as_object_mut() {
            map.remove(key);
        }
        self
    }

    pub fn build(self) -> Value {
        self.record
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
