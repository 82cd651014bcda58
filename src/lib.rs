//! # anchornav
//!
//! Scroll-synchronized heading navigation.
//!
//! The library builds a navigation outline from the headings of a
//! document, decides which heading is active for a scroll position, and
//! computes where to scroll when an outline entry is followed. The core is
//! host-agnostic; a host binding implements [`adapter::NavigationHost`] and
//! drives an [`adapter::Anchor`].
//!
//! ## Example
//!
//! ```rust
//! use anchornav::nav::{HeadingDescriptor, HeadingTag, NavigationConfig, NavigationIndex};
//!
//! let index = NavigationIndex::new(NavigationConfig::default());
//! let entries = index.build_entries(vec![
//!     HeadingDescriptor { index: 0, tag: HeadingTag::H2, offset: 200.0, text: "Intro".into() },
//!     HeadingDescriptor { index: 1, tag: HeadingTag::H2, offset: 800.0, text: "Usage".into() },
//! ]);
//!
//! assert_eq!(index.resolve_active(450.0, &entries), Some("heading-1"));
//! assert_eq!(index.scroll_destination(entries[1].offset), 700.0);
//! ```

/// Navigation core: ids, styles and active-heading resolution.
pub mod nav;

/// Host adapter contract and the mounted widget.
pub mod adapter;

/// Error types shared by the core and the adapters.
pub mod error;

/// Markdown scanning into heading descriptors.
pub mod parser;

/// Configuration file handling.
pub mod config;

/// Keybindings for the terminal viewer.
pub mod keybindings;

/// Terminal viewer binding.
pub mod tui;

pub use adapter::{Anchor, AnchorOptions, NavigationHost};
pub use config::Config;
pub use error::AnchorError;
pub use nav::{HeadingEntry, NavigationIndex};
pub use parser::{Document, Heading, parse_file, parse_markdown};
