//! Navigation index: heading identity, style resolution and active-heading
//! tracking.
//!
//! Everything in this module is pure. Given the same configuration, the
//! same descriptors and the same scroll offset, the results are the same.
//!
//! ## Example
//!
//! ```rust
//! use anchornav::nav::{HeadingDescriptor, HeadingTag, NavigationConfig, NavigationIndex};
//!
//! let index = NavigationIndex::new(NavigationConfig::default());
//! let entries = index.build_entries(vec![
//!     HeadingDescriptor { index: 0, tag: HeadingTag::H2, offset: 0.0, text: "Intro".into() },
//!     HeadingDescriptor { index: 1, tag: HeadingTag::H2, offset: 500.0, text: "Usage".into() },
//! ]);
//!
//! assert_eq!(index.resolve_active(450.0, &entries), Some("heading-2"));
//! ```

mod heading;
mod state;

pub use heading::{HeadingDescriptor, HeadingEntry, HeadingStyle, HeadingTag};
pub use state::{ActivationState, Transition};

use indexmap::{IndexMap, IndexSet};

/// Font size used when a level has no configured size.
pub const DEFAULT_FONT_SIZE: &str = "14px";
/// Font weight used when a level has no configured weight.
pub const DEFAULT_FONT_WEIGHT: &str = "normal";
/// Pixels subtracted from heading positions before comparison.
pub const DEFAULT_ACTIVATION_OFFSET: f64 = 100.0;

/// Immutable configuration of a [`NavigationIndex`].
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    pub levels_of_interest: IndexSet<HeadingTag>,
    pub font_size_by_level: IndexMap<HeadingTag, String>,
    pub font_weight_by_level: IndexMap<HeadingTag, String>,
    pub activation_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            levels_of_interest: HeadingTag::STANDARD.into_iter().collect(),
            font_size_by_level: IndexMap::new(),
            font_weight_by_level: IndexMap::new(),
            activation_offset: DEFAULT_ACTIVATION_OFFSET,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationIndex {
    config: NavigationConfig,
    namespace: Option<String>,
}

impl NavigationIndex {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            namespace: None,
        }
    }

    /// Prefix every generated id with `namespace`, so that widgets sharing a
    /// page never hand out the same id.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn activation_offset(&self) -> f64 {
        self.config.activation_offset
    }

    /// Whether headings with this tag participate in the outline.
    pub fn is_of_interest(&self, tag: &HeadingTag) -> bool {
        self.config.levels_of_interest.contains(tag)
    }

    /// Id for the heading at `index`: `heading-{index + 1}`.
    pub fn generate_id(&self, index: usize) -> String {
        match &self.namespace {
            Some(ns) => format!("{}-heading-{}", ns, index + 1),
            None => format!("heading-{}", index + 1),
        }
    }

    /// Display style for a level, falling back to `14px` / `normal`
    /// for levels missing from the configured maps.
    pub fn resolve_style(&self, level: &HeadingTag) -> HeadingStyle {
        let font_size = self
            .config
            .font_size_by_level
            .get(level)
            .map(String::as_str)
            .unwrap_or(DEFAULT_FONT_SIZE);
        let font_weight = self
            .config
            .font_weight_by_level
            .get(level)
            .map(String::as_str)
            .unwrap_or(DEFAULT_FONT_WEIGHT);

        HeadingStyle {
            font_size: font_size.to_string(),
            font_weight: font_weight.to_string(),
        }
    }

    /// Id of the last entry whose `offset - activation_offset` is at or
    /// below the scroll position, or `None` if no threshold was crossed.
    pub fn resolve_active<'a>(
        &self,
        scroll_position: f64,
        entries: &'a [HeadingEntry],
    ) -> Option<&'a str> {
        entries
            .iter()
            .rev()
            .find(|entry| entry.offset - self.config.activation_offset <= scroll_position)
            .map(|entry| entry.id.as_str())
    }

    /// Turn scanned descriptors into outline entries, in document order.
    ///
    /// Descriptors whose tag is not a level of interest are skipped.
    pub fn build_entries<I>(&self, descriptors: I) -> Vec<HeadingEntry>
    where
        I: IntoIterator<Item = HeadingDescriptor>,
    {
        descriptors
            .into_iter()
            .filter(|d| self.is_of_interest(&d.tag))
            .map(|d| {
                let style = self.resolve_style(&d.tag);
                HeadingEntry {
                    id: self.generate_id(d.index),
                    level: d.tag,
                    font_size: style.font_size,
                    font_weight: style.font_weight,
                    offset: d.offset,
                    text: d.text,
                }
            })
            .collect()
    }

    /// Scroll position that places a heading at `offset` just below the
    /// activation threshold.
    pub fn scroll_destination(&self, offset: f64) -> f64 {
        offset - self.config.activation_offset
    }
}
