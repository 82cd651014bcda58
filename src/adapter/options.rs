//! Configuration surface recognized by every host binding.

use crate::adapter::namespace;
use crate::nav::{
    DEFAULT_ACTIVATION_OFFSET, HeadingTag, NavigationConfig, NavigationIndex,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorOptions {
    /// Identifies the scroll container to scan (a selector, class or id)
    #[serde(default, alias = "contentSelector")]
    pub content_selector: String,

    /// Marker placed on the active outline entry
    #[serde(default = "default_active_class", alias = "activeClass")]
    pub active_class: String,

    /// Marker placed on the active content heading. Empty disables it.
    #[serde(default = "default_head_class", alias = "headClass")]
    pub head_class: String,

    /// Heading levels that participate in the outline
    #[serde(default = "default_list_head", alias = "listHead")]
    pub list_head: Vec<HeadingTag>,

    #[serde(default, alias = "defaultFontSize")]
    pub default_font_size: IndexMap<HeadingTag, String>,

    #[serde(default, alias = "defaultFontWeight")]
    pub default_font_weight: IndexMap<HeadingTag, String>,

    /// Pixels subtracted from heading positions for activation and for
    /// navigation destinations
    #[serde(
        default = "default_offset_top",
        alias = "offsetTop",
        alias = "activation_offset",
        alias = "activationOffset"
    )]
    pub offset_top: f64,

    /// Prefix for fragment links, e.g. the path of a `<base>` element
    #[serde(default, alias = "baseUrl")]
    pub base_url: String,

    /// Explicit id namespace for this widget instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Allocate a fresh namespace per instance when none is given
    #[serde(default, alias = "uniqueIds")]
    pub unique_ids: bool,
}

fn default_active_class() -> String {
    "active".to_string()
}

fn default_head_class() -> String {
    "highlight".to_string()
}

fn default_list_head() -> Vec<HeadingTag> {
    HeadingTag::STANDARD.to_vec()
}

fn default_offset_top() -> f64 {
    DEFAULT_ACTIVATION_OFFSET
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            content_selector: String::new(),
            active_class: default_active_class(),
            head_class: default_head_class(),
            list_head: default_list_head(),
            default_font_size: IndexMap::new(),
            default_font_weight: IndexMap::new(),
            offset_top: default_offset_top(),
            base_url: String::new(),
            namespace: None,
            unique_ids: false,
        }
    }
}

impl AnchorOptions {
    pub fn new(content_selector: impl Into<String>) -> Self {
        Self {
            content_selector: content_selector.into(),
            ..Default::default()
        }
    }

    /// The selector without a single leading `.` or `#`.
    pub fn content_class(&self) -> &str {
        let selector = self.content_selector.trim();
        selector
            .strip_prefix('.')
            .or_else(|| selector.strip_prefix('#'))
            .unwrap_or(selector)
    }

    /// Fragment link for a heading id.
    pub fn href(&self, id: &str) -> String {
        format!("{}#{}", self.base_url, id)
    }

    pub fn to_navigation_config(&self) -> NavigationConfig {
        NavigationConfig {
            levels_of_interest: self.list_head.iter().cloned().collect(),
            font_size_by_level: self.default_font_size.clone(),
            font_weight_by_level: self.default_font_weight.clone(),
            activation_offset: self.offset_top,
        }
    }

    /// Construct the navigation index this widget instance will own.
    pub fn build_core(&self) -> NavigationIndex {
        let core = NavigationIndex::new(self.to_navigation_config());
        match namespace::resolve(self.namespace.as_deref(), self.unique_ids) {
            Some(ns) => core.with_namespace(ns),
            None => core,
        }
    }
}
