//! Markdown scanning.
//!
//! Extracts the heading structure of a markdown document. Heading
//! detection is delegated to `turbovault-parser`, which skips headings
//! inside fenced code blocks.

mod document;

pub use document::{Document, Heading};

use std::path::Path;

/// Parse a markdown file and extract its headings.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn parse_file(path: &Path) -> std::io::Result<Document> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_markdown(&content))
}

/// Parse markdown content and extract headings with byte offsets and lines.
pub fn parse_markdown(content: &str) -> Document {
    let headings = turbovault_parser::parse_headings(content)
        .into_iter()
        .filter(|h| (1..=6).contains(&(h.level as usize)))
        .map(|h| {
            let offset = h.position.offset;
            Heading {
                level: h.level as usize,
                slug: turbovault_parser::slugify(&h.text),
                text: h.text,
                offset,
                line: document::line_at_offset(content, offset),
            }
        })
        .collect();

    Document::new(content.to_string(), headings)
}
