//! Terminal host binding.
//!
//! [`OutlineView`] plays the part of the page for [`crate::adapter::Anchor`]:
//! the markdown lines are the content region, each line is `line_height`
//! pixels tall, and marker classes are kept in a set that the renderer
//! consults.

use crate::adapter::{MarkerTarget, NavigationHost, ScrollAnimator};
use crate::config::DOCUMENT_SELECTOR;
use crate::nav::{HeadingDescriptor, HeadingEntry, HeadingTag};
use crate::parser::Document;
use std::collections::HashSet;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Outline,
    Heading,
}

/// One rendered outline entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineRow {
    pub id: String,
    pub text: String,
    pub href: String,
    /// Nesting depth used for indentation (0 for h1)
    pub depth: usize,
    pub font_size: String,
    pub bold: bool,
    /// Content line of the heading
    pub line: usize,
}

pub struct OutlineView {
    document: Document,
    line_height: f64,
    lines: Vec<String>,
    rows: Vec<OutlineRow>,
    scanned_lines: Vec<usize>,
    markers: HashSet<(MarkerKind, String, String)>,
    scroll_row: usize,
    viewport_rows: usize,
    animator: ScrollAnimator,
}

impl OutlineView {
    pub fn new(document: Document, line_height: f64, smooth_scroll: Duration) -> Self {
        let lines = document.content.lines().map(str::to_string).collect();
        Self {
            document,
            line_height,
            lines,
            rows: Vec::new(),
            scanned_lines: Vec::new(),
            markers: HashSet::new(),
            scroll_row: 0,
            viewport_rows: 1,
            animator: ScrollAnimator::new(smooth_scroll),
        }
    }

    /// Swap in new content. The caller must rescan afterwards.
    pub fn replace_document(&mut self, document: Document) {
        self.lines = document.content.lines().map(str::to_string).collect();
        self.document = document;
        self.animator.cancel();
        self.scroll_row = self.scroll_row.min(self.max_scroll());
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn rows(&self) -> &[OutlineRow] {
        &self.rows
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
    }

    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    pub fn is_marked(&self, kind: MarkerKind, id: &str, class: &str) -> bool {
        self.markers
            .contains(&(kind, id.to_string(), class.to_string()))
    }

    /// Content line carrying the given heading marker, if any.
    pub fn marked_heading_line(&self, class: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| self.is_marked(MarkerKind::Heading, &row.id, class))
            .map(|row| row.line)
    }

    /// Manual scroll by `delta` rows. Cancels any running smooth scroll.
    pub fn scroll_by(&mut self, delta: isize) {
        self.animator.cancel();
        let target = self.scroll_row.saturating_add_signed(delta);
        self.scroll_row = target.min(self.max_scroll());
    }

    /// Manual jump to a row. Cancels any running smooth scroll.
    pub fn scroll_to_row(&mut self, row: usize) {
        self.animator.cancel();
        self.scroll_row = row.min(self.max_scroll());
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Advance the smooth scroll. Returns true if the scroll row moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(position) = self.animator.tick(now) else {
            return false;
        };
        let row = (position.round().max(0.0) as usize).min(self.max_scroll());
        let moved = row != self.scroll_row;
        self.scroll_row = row;
        moved
    }

    /// First row at or below `pixels`, so a heading's threshold is reached.
    fn row_for(&self, pixels: f64) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        let row = (pixels / self.line_height).ceil().max(0.0) as usize;
        row.min(self.max_scroll())
    }

    fn answers_to(selector: &str) -> bool {
        let selector = selector.trim();
        let target = selector
            .strip_prefix('.')
            .or_else(|| selector.strip_prefix('#'))
            .unwrap_or(selector);
        target == DOCUMENT_SELECTOR
    }
}

impl NavigationHost for OutlineView {
    fn scan(
        &mut self,
        content_selector: &str,
        levels: &[HeadingTag],
    ) -> Option<Vec<HeadingDescriptor>> {
        if !Self::answers_to(content_selector) {
            return None;
        }

        self.rows.clear();
        self.markers.clear();
        self.scanned_lines = self
            .document
            .headings_of_interest(levels)
            .map(|(heading, _)| heading.line)
            .collect();

        Some(self.document.descriptors(levels, self.line_height))
    }

    fn apply_entry(&mut self, position: usize, entry: &HeadingEntry, href: &str) {
        let Some(&line) = self.scanned_lines.get(position) else {
            return;
        };
        self.rows.push(OutlineRow {
            id: entry.id.clone(),
            text: entry.text.clone(),
            href: href.to_string(),
            depth: entry.level.level().unwrap_or(1).saturating_sub(1),
            font_size: entry.font_size.clone(),
            bold: is_bold(&entry.font_weight),
            line,
        });
    }

    fn set_marker(&mut self, target: MarkerTarget<'_>, class: &str, on: bool) {
        let (kind, id) = match target {
            MarkerTarget::OutlineEntry(id) => (MarkerKind::Outline, id),
            MarkerTarget::Heading(id) => (MarkerKind::Heading, id),
        };
        let key = (kind, id.to_string(), class.to_string());
        if on {
            self.markers.insert(key);
        } else {
            self.markers.remove(&key);
        }
    }

    fn heading_position(&self, id: &str) -> Option<f64> {
        let row = self.rows.iter().find(|row| row.id == id)?;
        // The content may have shrunk under a stale entry
        if row.line >= self.lines.len() {
            return None;
        }
        Some(row.line as f64 * self.line_height)
    }

    fn scroll_position(&self) -> f64 {
        self.scroll_row as f64 * self.line_height
    }

    fn scroll_to(&mut self, destination: f64) {
        let target = self.row_for(destination);
        self.animator
            .start(self.scroll_row as f64, target as f64, Instant::now());
    }
}

/// CSS-style weights that render bold in the terminal.
fn is_bold(weight: &str) -> bool {
    match weight.trim().to_ascii_lowercase().as_str() {
        "bold" | "bolder" => true,
        numeric => numeric.parse::<u16>().map(|w| w >= 600).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{Anchor, AnchorOptions};
    use crate::nav::{NavigationConfig, NavigationIndex};
    use crate::parser::parse_markdown;

    fn sample() -> OutlineView {
        let mut md = String::from("## Intro\n");
        md.push_str(&"text\n".repeat(24));
        md.push_str("## Usage\n");
        md.push_str(&"text\n".repeat(34));
        md.push_str("## API\n");
        md.push_str(&"text\n".repeat(40));
        OutlineView::new(parse_markdown(&md), 20.0, Duration::from_millis(100))
    }

    #[test]
    fn test_is_bold() {
        assert!(is_bold("bold"));
        assert!(is_bold("700"));
        assert!(is_bold(" Bolder "));
        assert!(!is_bold("normal"));
        assert!(!is_bold("400"));
        assert!(!is_bold("heavy-ish"));
    }

    #[test]
    fn test_unknown_selector_is_missing() {
        let mut view = sample();
        assert!(view.scan(".sidebar", &HeadingTag::STANDARD).is_none());
        assert!(view.scan("#document", &HeadingTag::STANDARD).is_some());
    }

    #[test]
    fn test_mount_builds_rows() {
        let mut view = sample();
        let anchor = Anchor::mount(AnchorOptions::new(DOCUMENT_SELECTOR), &mut view).unwrap();

        assert_eq!(anchor.entries().len(), 3);
        let lines: Vec<_> = view.rows().iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![0, 25, 60]);
        assert_eq!(view.rows()[2].href, "#heading-3");
        assert_eq!(view.rows()[0].depth, 1);
        assert!(view.is_marked(MarkerKind::Outline, "heading-1", "active"));
        assert_eq!(view.marked_heading_line("highlight"), Some(0));
    }

    #[test]
    fn test_scroll_position_is_in_pixels() {
        let mut view = sample();
        let mut anchor = Anchor::mount(AnchorOptions::new(DOCUMENT_SELECTOR), &mut view).unwrap();

        // Usage sits at 500px; its threshold is 400px = row 20
        view.scroll_to_row(19);
        let position = view.scroll_position();
        anchor.on_scroll(&mut view, position);
        assert_eq!(anchor.active_id(), Some("heading-1"));

        view.scroll_to_row(20);
        let position = view.scroll_position();
        anchor.on_scroll(&mut view, position);
        assert_eq!(anchor.active_id(), Some("heading-2"));
        assert!(view.is_marked(MarkerKind::Outline, "heading-2", "active"));
        assert!(!view.is_marked(MarkerKind::Outline, "heading-1", "active"));
    }

    #[test]
    fn test_navigate_animates_to_destination() {
        let mut view = sample();
        let anchor = Anchor::mount(AnchorOptions::new(DOCUMENT_SELECTOR), &mut view).unwrap();

        assert_eq!(anchor.navigate(&mut view, "heading-3"), Some(1100.0));
        assert!(view.is_animating());

        let later = Instant::now() + Duration::from_secs(1);
        assert!(view.tick(later));
        assert_eq!(view.scroll_row(), 55);
        assert!(!view.is_animating());
    }

    #[test]
    fn test_navigate_activates_target_with_uneven_offset() {
        let mut view = sample();
        let mut options = AnchorOptions::new(DOCUMENT_SELECTOR);
        options.offset_top = 35.0;
        let mut anchor = Anchor::mount(options, &mut view).unwrap();

        // API at 1200px: destination 1165px lands on row 59, not 58
        assert_eq!(anchor.navigate(&mut view, "heading-3"), Some(1165.0));
        view.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(view.scroll_row(), 59);

        let position = view.scroll_position();
        assert!(position >= 1165.0);
        anchor.on_scroll(&mut view, position);
        assert_eq!(anchor.active_id(), Some("heading-3"));
    }

    #[test]
    fn test_supplied_core_levels_pin_rows_to_their_lines() {
        let mut md = String::from("# Title\n");
        md.push_str(&"text\n".repeat(24));
        md.push_str("## Usage\n");
        md.push_str(&"text\n".repeat(34));
        md.push_str("## API\n");
        let mut view = OutlineView::new(parse_markdown(&md), 20.0, Duration::ZERO);

        let core = NavigationIndex::new(NavigationConfig {
            levels_of_interest: [HeadingTag::H2].into_iter().collect(),
            ..Default::default()
        });
        let anchor = Anchor::builder()
            .options(AnchorOptions::new(DOCUMENT_SELECTOR))
            .core(core)
            .build(&mut view)
            .unwrap();

        let rows: Vec<_> = view
            .rows()
            .iter()
            .map(|r| (r.id.as_str(), r.text.as_str(), r.line))
            .collect();
        assert_eq!(rows, vec![("heading-1", "Usage", 25), ("heading-2", "API", 60)]);
        assert_eq!(view.heading_position("heading-1"), Some(500.0));
        assert_eq!(anchor.entries()[0].offset, 500.0);
    }

    #[test]
    fn test_navigate_above_top_clamps() {
        let mut view = sample();
        view.scroll_to_row(30);
        let anchor = Anchor::mount(AnchorOptions::new(DOCUMENT_SELECTOR), &mut view).unwrap();

        assert_eq!(anchor.navigate(&mut view, "heading-1"), Some(-100.0));
        view.tick(Instant::now() + Duration::from_secs(1));
        assert_eq!(view.scroll_row(), 0);
    }

    #[test]
    fn test_manual_scroll_interrupts_animation() {
        let mut view = sample();
        let anchor = Anchor::mount(AnchorOptions::new(DOCUMENT_SELECTOR), &mut view).unwrap();

        anchor.navigate(&mut view, "heading-3");
        view.scroll_by(3);
        assert!(!view.is_animating());
        assert_eq!(view.scroll_row(), 3);
        assert!(!view.tick(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut view = sample();
        view.scroll_by(-5);
        assert_eq!(view.scroll_row(), 0);
        view.scroll_by(10_000);
        assert_eq!(view.scroll_row(), view.max_scroll());
    }

    #[test]
    fn test_replace_document_then_rescan() {
        let mut view = sample();
        let mut anchor = Anchor::mount(AnchorOptions::new(DOCUMENT_SELECTOR), &mut view).unwrap();
        view.scroll_to_row(80);
        let position = view.scroll_position();
        anchor.on_scroll(&mut view, position);
        assert_eq!(anchor.active_id(), Some("heading-3"));

        view.replace_document(parse_markdown("# Only\nshort"));
        anchor.rescan(&mut view).unwrap();

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.scroll_row(), 1);
        assert_eq!(anchor.active_id(), Some("heading-1"));
        assert!(!view.is_marked(MarkerKind::Outline, "heading-3", "active"));
    }
}
