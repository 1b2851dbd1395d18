// src/domain/content/services/text.rs
use crate::domain::content::rich_text::RichTextNode;

/// Flatten a rich-text tree to plain text in reading order.
///
/// Every node that carries text contributes its text followed by a single
/// space; the result is trimmed. A missing tree yields an empty string.
pub fn extract_plain_text<'a>(tree: impl Into<Option<&'a RichTextNode>>) -> String {
    let Some(tree) = tree.into() else {
        return String::new();
    };

    let mut out = String::new();
    tree.walk(&mut |node| {
        if let Some(text) = &node.text {
            out.push_str(text);
            out.push(' ');
        }
    });
    out.trim().to_string()
}
