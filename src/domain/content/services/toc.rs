// src/domain/content/services/toc.rs
use crate::domain::content::rich_text::RichTextNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub id: String,
    pub level: u8,
    pub text: String,
}

/// Collect the headings of a rich-text tree into a flat outline.
///
/// Ids are `heading-<n>` where `n` counts emitted headings from zero, so they
/// only stay stable while no heading is added, removed or moved.
pub fn generate_table_of_contents<'a>(
    tree: impl Into<Option<&'a RichTextNode>>,
) -> Vec<TocEntry> {
    let Some(tree) = tree.into() else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    tree.walk(&mut |node| {
        let Some(level) = node.heading_level() else {
            return;
        };
        let text: String = node
            .content
            .iter()
            .filter_map(|child| child.text.as_deref())
            .collect();
        if text.is_empty() {
            return;
        }
        entries.push(TocEntry {
            id: format!("heading-{}", entries.len()),
            level,
            text,
        });
    });
    entries
}
