//! Heading descriptors and the entries derived from them.

use crate::error::AnchorError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A heading level tag: `h1` through `h6`, or any other element tag a host
/// treats as a heading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    /// Generic level tag, stored lowercased
    Custom(String),
}

impl HeadingTag {
    /// The six standard levels in document-outline order.
    pub const STANDARD: [HeadingTag; 6] = [
        HeadingTag::H1,
        HeadingTag::H2,
        HeadingTag::H3,
        HeadingTag::H4,
        HeadingTag::H5,
        HeadingTag::H6,
    ];

    /// Map a numeric markdown level (1-6) to its tag.
    pub fn from_level(level: usize) -> Option<Self> {
        match level {
            1 => Some(HeadingTag::H1),
            2 => Some(HeadingTag::H2),
            3 => Some(HeadingTag::H3),
            4 => Some(HeadingTag::H4),
            5 => Some(HeadingTag::H5),
            6 => Some(HeadingTag::H6),
            _ => None,
        }
    }

    /// Numeric level, `None` for custom tags.
    pub fn level(&self) -> Option<usize> {
        match self {
            HeadingTag::H1 => Some(1),
            HeadingTag::H2 => Some(2),
            HeadingTag::H3 => Some(3),
            HeadingTag::H4 => Some(4),
            HeadingTag::H5 => Some(5),
            HeadingTag::H6 => Some(6),
            HeadingTag::Custom(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
            HeadingTag::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for HeadingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeadingTag {
    type Err = AnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        match tag.as_str() {
            "" => Err(AnchorError::InvalidTag(s.to_string())),
            "h1" => Ok(HeadingTag::H1),
            "h2" => Ok(HeadingTag::H2),
            "h3" => Ok(HeadingTag::H3),
            "h4" => Ok(HeadingTag::H4),
            "h5" => Ok(HeadingTag::H5),
            "h6" => Ok(HeadingTag::H6),
            _ if is_element_name(&tag) => Ok(HeadingTag::Custom(tag)),
            _ => Err(AnchorError::InvalidTag(s.to_string())),
        }
    }
}

/// Custom tags must be usable as element selectors.
fn is_element_name(tag: &str) -> bool {
    static ELEMENT_NAME: OnceLock<Regex> = OnceLock::new();
    ELEMENT_NAME
        .get_or_init(|| Regex::new(r"^[a-z][a-z0-9-]*$").unwrap())
        .is_match(tag)
}

impl TryFrom<String> for HeadingTag {
    type Error = AnchorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HeadingTag> for String {
    fn from(tag: HeadingTag) -> Self {
        match tag {
            HeadingTag::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

/// A heading as captured by a scanning adapter.
///
/// `offset` is the document-relative vertical position in pixels. The
/// descriptor is immutable for the duration of one scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingDescriptor {
    /// Position of the heading among the scanned headings (0-based)
    pub index: usize,
    pub tag: HeadingTag,
    pub offset: f64,
    /// Text content of the heading
    pub text: String,
}

/// Inline display style resolved for a heading level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingStyle {
    #[serde(rename = "fontSize")]
    pub font_size: String,
    #[serde(rename = "fontWeight")]
    pub font_weight: String,
}

/// One outline entry, generated from a [`HeadingDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingEntry {
    pub id: String,
    pub level: HeadingTag,
    #[serde(rename = "fontSize")]
    pub font_size: String,
    #[serde(rename = "fontWeight")]
    pub font_weight: String,
    pub offset: f64,
    pub text: String,
}

impl HeadingEntry {
    pub fn style(&self) -> HeadingStyle {
        HeadingStyle {
            font_size: self.font_size.clone(),
            font_weight: self.font_weight.clone(),
        }
    }
}
