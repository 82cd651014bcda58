//! Instance-scoped id namespaces.
//!
//! Widgets mounted side by side on one page must not hand out the same
//! heading ids. Each instance either names its namespace explicitly or
//! draws the next value from a process-wide counter.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(1);

/// Allocate the next automatic namespace (`nav1`, `nav2`, ...).
pub fn next() -> String {
    format!("nav{}", NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
}

/// Pick the namespace for a new instance.
///
/// An explicit, non-blank key always wins. Otherwise a counter value is
/// allocated only when `unique` is set.
pub fn resolve(explicit: Option<&str>, unique: bool) -> Option<String> {
    match explicit.map(str::trim) {
        Some(key) if !key.is_empty() => Some(key.to_string()),
        _ if unique => Some(next()),
        _ => None,
    }
}
