// src/domain/content/rich_text.rs
//! Rich-text document tree produced by the block editor.
//!
//! The editor emits JSON nodes shaped like `{ "type", "attrs", "marks", "text",
//! "content" }`. Known node types map onto [`NodeKind`]; anything else is kept
//! as [`NodeKind::Other`] so newer editor versions never break extraction.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NodeKind {
    #[default]
    Doc,
    Heading {
        level: u8,
    },
    Paragraph,
    Text,
    BulletList,
    OrderedList,
    ListItem,
    Blockquote,
    CodeBlock,
    HardBreak,
    Image,
    Other(String),
}

impl NodeKind {
    fn from_type(tag: &str, attrs: &Map<String, Value>) -> Self {
        match tag {
            "doc" => Self::Doc,
            "heading" => Self::Heading {
                level: heading_level(attrs.get("level")),
            },
            "paragraph" => Self::Paragraph,
            "text" => Self::Text,
            "bulletList" => Self::BulletList,
            "orderedList" => Self::OrderedList,
            "listItem" => Self::ListItem,
            "blockquote" => Self::Blockquote,
            "codeBlock" => Self::CodeBlock,
            "hardBreak" => Self::HardBreak,
            "image" => Self::Image,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Doc => "doc",
            Self::Heading { .. } => "heading",
            Self::Paragraph => "paragraph",
            Self::Text => "text",
            Self::BulletList => "bulletList",
            Self::OrderedList => "orderedList",
            Self::ListItem => "listItem",
            Self::Blockquote => "blockquote",
            Self::CodeBlock => "codeBlock",
            Self::HardBreak => "hardBreak",
            Self::Image => "image",
            Self::Other(tag) => tag,
        }
    }
}

/// Heading levels arrive as numbers or numeric strings; anything else is level 1.
fn heading_level(raw: Option<&Value>) -> u8 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    parsed
        .and_then(|level| u8::try_from(level).ok())
        .filter(|level| *level > 0)
        .unwrap_or(1)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RichTextNode {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub attrs: Map<String, Value>,
    pub marks: Vec<Value>,
    pub content: Vec<RichTextNode>,
}

impl RichTextNode {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text,
            text: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn heading(level: u8, content: Vec<Self>) -> Self {
        let mut attrs = Map::new();
        attrs.insert("level".into(), Value::from(level));
        Self {
            kind: NodeKind::Heading { level },
            attrs,
            content,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: Vec<Self>) -> Self {
        self.content = content;
        self
    }

    /// Build a node from editor JSON. Never fails: a non-object value yields an
    /// empty document and malformed children are skipped.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::default();
        };

        let attrs = map
            .get("attrs")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        let kind = map
            .get("type")
            .and_then(Value::as_str)
            .map_or_else(
                || {
                    if map.contains_key("text") {
                        NodeKind::Text
                    } else {
                        NodeKind::Doc
                    }
                },
                |tag| NodeKind::from_type(tag, &attrs),
            );
        let text = map.get("text").and_then(Value::as_str).map(str::to_string);
        let marks = map
            .get("marks")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        let content = map
            .get("content")
            .and_then(Value::as_array)
            .map(|children| {
                children
                    .iter()
                    .filter(|child| child.is_object())
                    .map(Self::from_value)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            kind,
            text,
            attrs,
            marks,
            content,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".into(), Value::from(self.kind.type_name()));
        if !self.attrs.is_empty() {
            map.insert("attrs".into(), Value::Object(self.attrs.clone()));
        }
        if !self.marks.is_empty() {
            map.insert("marks".into(), Value::Array(self.marks.clone()));
        }
        if let Some(text) = &self.text {
            map.insert("text".into(), Value::from(text.as_str()));
        }
        if !self.content.is_empty() {
            map.insert(
                "content".into(),
                Value::Array(self.content.iter().map(Self::to_value).collect()),
            );
        }
        Value::Object(map)
    }

    /// Visit every node in document order, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Self)) {
        visit(self);
        for child in &self.content {
            child.walk(visit);
        }
    }

    pub const fn heading_level(&self) -> Option<u8> {
        match self.kind {
            NodeKind::Heading { level } => Some(level),
            _ => None,
        }
    }
}
