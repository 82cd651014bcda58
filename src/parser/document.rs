use crate::nav::{HeadingDescriptor, HeadingTag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A heading found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: usize,
    /// Heading text with inline formatting removed
    pub text: String,
    /// URL-friendly slug of the text
    pub slug: String,
    /// Byte offset of the heading line
    pub offset: usize,
    /// Line number of the heading (0-indexed)
    pub line: usize,
}

impl Heading {
    pub fn tag(&self) -> Option<HeadingTag> {
        HeadingTag::from_level(self.level)
    }
}

/// A parsed markdown document.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub headings: Vec<Heading>,
}

impl Document {
    pub fn new(content: String, headings: Vec<Heading>) -> Self {
        Self { content, headings }
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Headings whose tag is one of `levels`, in document order.
    pub fn headings_of_interest<'a>(
        &'a self,
        levels: &'a [HeadingTag],
    ) -> impl Iterator<Item = (&'a Heading, HeadingTag)> + 'a {
        self.headings
            .iter()
            .filter_map(|h| h.tag().map(|tag| (h, tag)))
            .filter(move |(_, tag)| levels.contains(tag))
    }

    /// Heading descriptors for the levels of interest.
    ///
    /// Indices are consecutive over the kept headings and each offset is
    /// `line * line_height` pixels.
    pub fn descriptors(&self, levels: &[HeadingTag], line_height: f64) -> Vec<HeadingDescriptor> {
        self.headings_of_interest(levels)
            .enumerate()
            .map(|(index, (heading, tag))| HeadingDescriptor {
                index,
                tag,
                offset: heading.line as f64 * line_height,
                text: heading.text.clone(),
            })
            .collect()
    }

    /// Heading counts keyed by level.
    pub fn heading_count_by_level(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for heading in &self.headings {
            *counts.entry(heading.level).or_insert(0) += 1;
        }
        counts
    }
}

/// 0-indexed line containing byte `offset`.
pub(crate) fn line_at_offset(content: &str, offset: usize) -> usize {
    let end = offset.min(content.len());
    content.as_bytes()[..end]
        .iter()
        .filter(|b| **b == b'\n')
        .count()
}
