//! The adapter layer between a host document and the navigation index.
//!
//! A host binding (a terminal viewer, a test double, a browser bridge)
//! implements [`NavigationHost`]. [`Anchor`] owns the navigation index and
//! the activation state, and translates scroll samples and navigation
//! requests into the minimal set of host calls.
//!
//! ## Example
//!
//! ```ignore
//! use anchornav::adapter::{Anchor, AnchorOptions};
//!
//! let mut anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host)?;
//! anchor.on_scroll(&mut host, 450.0);
//! anchor.navigate(&mut host, "heading-3");
//! ```

pub mod namespace;
mod options;
pub mod sampler;
pub mod scroll;

pub use options::AnchorOptions;
pub use sampler::ScrollSampler;
pub use scroll::{ScrollAnimator, SmoothScroll};

use crate::error::AnchorError;
use crate::nav::{
    ActivationState, HeadingDescriptor, HeadingEntry, HeadingTag, NavigationIndex, Transition,
};

/// The two kinds of element a marker class can be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerTarget<'a> {
    /// The outline entry linking to the heading with this id
    OutlineEntry(&'a str),
    /// The content heading element carrying this id
    Heading(&'a str),
}

/// Operations a host binding provides to [`Anchor`].
pub trait NavigationHost {
    /// Headings under `content_selector` restricted to `levels`, in
    /// document order with consecutive indices. `None` when the selector
    /// matches nothing.
    fn scan(
        &mut self,
        content_selector: &str,
        levels: &[HeadingTag],
    ) -> Option<Vec<HeadingDescriptor>>;

    /// Attach an entry's id and inline style to the scanned heading at
    /// `position`, and create its outline entry linking to `href`.
    fn apply_entry(&mut self, position: usize, entry: &HeadingEntry, href: &str);

    /// Add (`on`) or remove a marker class.
    fn set_marker(&mut self, target: MarkerTarget<'_>, class: &str, on: bool);

    /// Current document position of a heading, if it still exists.
    fn heading_position(&self, id: &str) -> Option<f64>;

    fn scroll_position(&self) -> f64;

    /// Begin a smooth scroll to `destination`.
    fn scroll_to(&mut self, destination: f64);
}

/// Builder for [`Anchor`], for hosts that construct the navigation index
/// themselves.
#[derive(Debug, Default)]
pub struct AnchorBuilder {
    options: Option<AnchorOptions>,
    core: Option<NavigationIndex>,
}

impl AnchorBuilder {
    pub fn options(mut self, options: AnchorOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn core(mut self, core: NavigationIndex) -> Self {
        self.core = Some(core);
        self
    }

    /// Scan the host and produce a mounted widget.
    ///
    /// Fails without touching the host when a dependency is missing, and
    /// after the scan when the content target does not exist.
    pub fn build<H: NavigationHost + ?Sized>(self, host: &mut H) -> Result<Anchor, AnchorError> {
        let result = self.try_build(host);
        if let Err(ref e) = result {
            log::error!("anchornav: initialization aborted: {}", e);
        }
        result
    }

    fn try_build<H: NavigationHost + ?Sized>(self, host: &mut H) -> Result<Anchor, AnchorError> {
        let options = self
            .options
            .ok_or(AnchorError::MissingDependency("anchor options"))?;
        let core = self
            .core
            .ok_or(AnchorError::MissingDependency("navigation index"))?;

        if options.content_selector.trim().is_empty() {
            return Err(AnchorError::MissingContentTarget(
                "<empty selector>".to_string(),
            ));
        }

        let mut anchor = Anchor {
            options,
            core,
            entries: Vec::new(),
            state: ActivationState::default(),
        };
        anchor.scan(host)?;

        let position = host.scroll_position();
        anchor.on_scroll(host, position);
        Ok(anchor)
    }
}

/// A mounted navigation widget.
#[derive(Debug)]
pub struct Anchor {
    options: AnchorOptions,
    core: NavigationIndex,
    entries: Vec<HeadingEntry>,
    state: ActivationState,
}

impl Anchor {
    pub fn builder() -> AnchorBuilder {
        AnchorBuilder::default()
    }

    /// Mount with a navigation index built from `options`.
    pub fn mount<H: NavigationHost + ?Sized>(
        options: AnchorOptions,
        host: &mut H,
    ) -> Result<Self, AnchorError> {
        let core = options.build_core();
        Self::builder().options(options).core(core).build(host)
    }

    pub fn options(&self) -> &AnchorOptions {
        &self.options
    }

    pub fn core(&self) -> &NavigationIndex {
        &self.core
    }

    pub fn entries(&self) -> &[HeadingEntry] {
        &self.entries
    }

    pub fn state(&self) -> &ActivationState {
        &self.state
    }

    pub fn active_id(&self) -> Option<&str> {
        self.state.active_id()
    }

    pub fn active_entry(&self) -> Option<&HeadingEntry> {
        let id = self.state.active_id()?;
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn href(&self, id: &str) -> String {
        self.options.href(id)
    }

    fn scan<H: NavigationHost + ?Sized>(&mut self, host: &mut H) -> Result<(), AnchorError> {
        self.entries.clear();

        // The core decides the levels; `options.list_head` only seeds
        // `build_core` and may differ when a core is supplied directly.
        let levels: Vec<HeadingTag> = self
            .core
            .config()
            .levels_of_interest
            .iter()
            .cloned()
            .collect();
        let descriptors = host
            .scan(&self.options.content_selector, &levels)
            .ok_or_else(|| AnchorError::MissingContentTarget(self.options.content_selector.clone()))?;

        self.entries = self.core.build_entries(descriptors);
        for (position, entry) in self.entries.iter().enumerate() {
            host.apply_entry(position, entry, &self.options.href(&entry.id));
        }

        if self.entries.is_empty() {
            log::debug!(
                "anchornav: no headings under '{}'",
                self.options.content_selector
            );
        } else {
            log::debug!(
                "anchornav: registered {} headings under '{}'",
                self.entries.len(),
                self.options.content_selector
            );
        }
        Ok(())
    }

    /// Resolve the active heading for a scroll sample and apply marker
    /// changes. Returns the transition, or `None` if nothing changed.
    pub fn on_scroll<H: NavigationHost + ?Sized>(
        &mut self,
        host: &mut H,
        position: f64,
    ) -> Option<Transition> {
        let resolved = self.core.resolve_active(position, &self.entries);
        let transition = self.state.advance(resolved)?;

        if let Some(previous) = transition.previous.as_deref() {
            self.set_markers(host, previous, false);
        }
        if let Some(current) = transition.current.as_deref() {
            self.set_markers(host, current, true);
        }

        log::trace!(
            "anchornav: active {:?} -> {:?} at {}",
            transition.previous,
            transition.current,
            position
        );
        Some(transition)
    }

    fn set_markers<H: NavigationHost + ?Sized>(&self, host: &mut H, id: &str, on: bool) {
        host.set_marker(MarkerTarget::OutlineEntry(id), &self.options.active_class, on);
        if !self.options.head_class.is_empty() {
            host.set_marker(MarkerTarget::Heading(id), &self.options.head_class, on);
        }
    }

    /// Re-scan after the host content changed.
    ///
    /// Markers of the previously active heading are cleared first. If the
    /// content target is gone the widget is left empty and inactive.
    pub fn rescan<H: NavigationHost + ?Sized>(&mut self, host: &mut H) -> Result<(), AnchorError> {
        if let Some(previous) = self.state.reset() {
            self.set_markers(host, &previous, false);
        }

        if let Err(e) = self.scan(host) {
            log::error!("anchornav: rescan failed: {}", e);
            return Err(e);
        }

        let position = host.scroll_position();
        self.on_scroll(host, position);
        Ok(())
    }

    /// Scroll the host so the heading sits just below the activation
    /// offset. Returns the destination.
    pub fn try_navigate<H: NavigationHost + ?Sized>(
        &self,
        host: &mut H,
        id: &str,
    ) -> Result<f64, AnchorError> {
        let position = host
            .heading_position(id)
            .ok_or_else(|| AnchorError::MissingTargetHeading(id.to_string()))?;
        let destination = self.core.scroll_destination(position);
        host.scroll_to(destination);
        Ok(destination)
    }

    /// Like [`Anchor::try_navigate`], but a missing heading is a silent
    /// no-op.
    pub fn navigate<H: NavigationHost + ?Sized>(&self, host: &mut H, id: &str) -> Option<f64> {
        match self.try_navigate(host, id) {
            Ok(destination) => Some(destination),
            Err(e) => {
                log::debug!("anchornav: navigation ignored: {}", e);
                None
            }
        }
    }

    /// Navigate to the outline entry at `position`.
    pub fn navigate_to_entry<H: NavigationHost + ?Sized>(
        &self,
        host: &mut H,
        position: usize,
    ) -> Option<f64> {
        let id = self.entries.get(position)?.id.clone();
        self.navigate(host, &id)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingHost;
    use super::*;
    use crate::nav::NavigationConfig;

    fn three_h2() -> RecordingHost {
        RecordingHost::new(
            ".article",
            &[
                (HeadingTag::H2, 0.0),
                (HeadingTag::H2, 500.0),
                (HeadingTag::H2, 1200.0),
            ],
        )
    }

    #[test]
    fn test_mount_registers_entries() {
        let mut host = three_h2();
        let anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();

        assert_eq!(anchor.entries().len(), 3);
        assert_eq!(host.applied.len(), 3);
        assert_eq!(host.applied[2], (2, "heading-3".to_string(), "#heading-3".to_string()));
        for entry in anchor.entries() {
            assert_eq!(entry.font_size, "14px");
            assert_eq!(entry.font_weight, "normal");
        }
    }

    #[test]
    fn test_mount_resolves_initial_state() {
        let mut host = three_h2();
        host.scroll = 450.0;
        let anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();

        assert_eq!(anchor.active_id(), Some("heading-2"));
        assert!(host.has_marker(MarkerTarget::OutlineEntry("heading-2"), "active"));
        assert!(host.has_marker(MarkerTarget::Heading("heading-2"), "highlight"));
    }

    #[test]
    fn test_scroll_moves_markers_between_two_targets() {
        let mut host = three_h2();
        let mut anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();
        assert_eq!(anchor.active_id(), Some("heading-1"));

        let calls_before = host.marker_calls;
        let transition = anchor.on_scroll(&mut host, 1150.0).unwrap();
        assert_eq!(transition.previous.as_deref(), Some("heading-1"));
        assert_eq!(transition.current.as_deref(), Some("heading-3"));

        // remove + add on both the outline entry and the heading
        assert_eq!(host.marker_calls - calls_before, 4);
        assert!(!host.has_marker(MarkerTarget::OutlineEntry("heading-1"), "active"));
        assert!(!host.has_marker(MarkerTarget::Heading("heading-1"), "highlight"));
        assert!(host.has_marker(MarkerTarget::OutlineEntry("heading-3"), "active"));
        assert!(host.has_marker(MarkerTarget::Heading("heading-3"), "highlight"));
        assert_eq!(host.marker_count(), 2);
    }

    #[test]
    fn test_unchanged_scroll_does_not_touch_host() {
        let mut host = three_h2();
        host.scroll = 600.0;
        let mut anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();

        let calls_before = host.marker_calls;
        assert!(anchor.on_scroll(&mut host, 650.0).is_none());
        assert!(anchor.on_scroll(&mut host, 600.0).is_none());
        assert_eq!(host.marker_calls, calls_before);
    }

    #[test]
    fn test_scroll_above_all_thresholds_deactivates() {
        let mut host = RecordingHost::new(".article", &[(HeadingTag::H1, 400.0)]);
        host.scroll = 350.0;
        let mut anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();
        assert_eq!(anchor.active_id(), Some("heading-1"));

        let transition = anchor.on_scroll(&mut host, 0.0).unwrap();
        assert_eq!(transition.current, None);
        assert_eq!(anchor.state(), &ActivationState::Inactive);
        assert_eq!(host.marker_count(), 0);
    }

    #[test]
    fn test_empty_head_class_skips_heading_marker() {
        let mut host = three_h2();
        let mut options = AnchorOptions::new(".article");
        options.head_class = String::new();
        let anchor = Anchor::mount(options, &mut host).unwrap();

        assert_eq!(anchor.active_id(), Some("heading-1"));
        assert!(host.has_marker(MarkerTarget::OutlineEntry("heading-1"), "active"));
        assert_eq!(host.marker_count(), 1);
    }

    #[test]
    fn test_navigate_computes_destination() {
        let mut host = three_h2();
        let anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();

        assert_eq!(anchor.navigate(&mut host, "heading-3"), Some(1100.0));
        assert_eq!(host.scrolled_to, vec![1100.0]);
    }

    #[test]
    fn test_navigate_uses_current_heading_position() {
        let mut host = three_h2();
        let anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();

        host.moved.insert("heading-2".to_string(), 760.0);
        assert_eq!(anchor.navigate_to_entry(&mut host, 1), Some(660.0));
    }

    #[test]
    fn test_navigate_missing_heading_is_noop() {
        let mut host = three_h2();
        let anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();

        host.removed.insert("heading-2".to_string());
        assert_eq!(anchor.navigate(&mut host, "heading-2"), None);
        assert_eq!(anchor.navigate(&mut host, "heading-99"), None);
        assert!(host.scrolled_to.is_empty());
        assert_eq!(
            anchor.try_navigate(&mut host, "heading-99"),
            Err(AnchorError::MissingTargetHeading("heading-99".to_string()))
        );
        assert_eq!(anchor.navigate_to_entry(&mut host, 10), None);
    }

    #[test]
    fn test_missing_content_target_aborts() {
        let mut host = three_h2();
        let result = Anchor::mount(AnchorOptions::new(".sidebar"), &mut host);
        assert_eq!(
            result.unwrap_err(),
            AnchorError::MissingContentTarget(".sidebar".to_string())
        );
        assert!(host.applied.is_empty());
        assert_eq!(host.marker_count(), 0);
    }

    #[test]
    fn test_missing_dependencies() {
        let mut host = three_h2();

        let err = Anchor::builder()
            .options(AnchorOptions::new(".article"))
            .build(&mut host)
            .unwrap_err();
        assert_eq!(err, AnchorError::MissingDependency("navigation index"));

        let err = Anchor::builder()
            .core(NavigationIndex::new(NavigationConfig::default()))
            .build(&mut host)
            .unwrap_err();
        assert_eq!(err, AnchorError::MissingDependency("anchor options"));
        assert!(host.applied.is_empty());
    }

    #[test]
    fn test_blank_selector_rejected() {
        let mut host = three_h2();
        let err = Anchor::mount(AnchorOptions::new("  "), &mut host).unwrap_err();
        assert!(matches!(err, AnchorError::MissingContentTarget(_)));
    }

    #[test]
    fn test_empty_heading_set_is_not_an_error() {
        let mut host = RecordingHost::new(".article", &[]);
        host.scroll = 900.0;
        let anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();
        assert!(anchor.entries().is_empty());
        assert_eq!(anchor.active_id(), None);
    }

    #[test]
    fn test_list_head_filters_levels() {
        let mut host = RecordingHost::new(
            ".article",
            &[
                (HeadingTag::H1, 0.0),
                (HeadingTag::H2, 200.0),
                (HeadingTag::H3, 300.0),
                (HeadingTag::H2, 800.0),
            ],
        );
        let mut options = AnchorOptions::new(".article");
        options.list_head = vec![HeadingTag::H2];
        let anchor = Anchor::mount(options, &mut host).unwrap();

        let ids: Vec<_> = anchor.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["heading-1", "heading-2"]);
        assert_eq!(anchor.entries()[1].offset, 800.0);
    }

    #[test]
    fn test_supplied_core_levels_drive_the_scan() {
        let mut host = RecordingHost::new(
            ".article",
            &[
                (HeadingTag::H1, 0.0),
                (HeadingTag::H2, 500.0),
                (HeadingTag::H2, 1200.0),
            ],
        );
        // Options still list h1..h6; the core only cares about h2
        let core = NavigationIndex::new(NavigationConfig {
            levels_of_interest: [HeadingTag::H2].into_iter().collect(),
            ..Default::default()
        });
        let anchor = Anchor::builder()
            .options(AnchorOptions::new(".article"))
            .core(core)
            .build(&mut host)
            .unwrap();

        let ids: Vec<_> = anchor.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["heading-1", "heading-2"]);
        assert_eq!(host.applied[0], (0, "heading-1".to_string(), "#heading-1".to_string()));
        assert_eq!(host.heading_position("heading-1"), Some(500.0));
        assert_eq!(host.heading_position("heading-2"), Some(1200.0));
        assert_eq!(anchor.navigate(&mut host, "heading-1"), Some(400.0));
    }

    #[test]
    fn test_rescan_clears_old_markers() {
        let mut host = three_h2();
        host.scroll = 1300.0;
        let mut anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();
        assert_eq!(anchor.active_id(), Some("heading-3"));

        // Content shrank to a single heading
        host.headings.truncate(1);
        anchor.rescan(&mut host).unwrap();

        assert_eq!(anchor.entries().len(), 1);
        assert_eq!(anchor.active_id(), Some("heading-1"));
        assert!(!host.has_marker(MarkerTarget::OutlineEntry("heading-3"), "active"));
        assert!(host.has_marker(MarkerTarget::OutlineEntry("heading-1"), "active"));
        assert_eq!(host.marker_count(), 2);
    }

    #[test]
    fn test_rescan_with_missing_target_leaves_widget_empty() {
        let mut host = three_h2();
        let mut anchor = Anchor::mount(AnchorOptions::new(".article"), &mut host).unwrap();

        host.content_selector = ".moved".to_string();
        assert!(anchor.rescan(&mut host).is_err());
        assert!(anchor.entries().is_empty());
        assert_eq!(anchor.active_id(), None);
        assert_eq!(host.marker_count(), 0);
    }

    #[test]
    fn test_two_instances_do_not_collide() {
        let mut left = three_h2();
        let mut right = three_h2();

        let mut options = AnchorOptions::new(".article");
        options.unique_ids = true;
        let a = Anchor::mount(options.clone(), &mut left).unwrap();
        let b = Anchor::mount(options, &mut right).unwrap();

        assert_ne!(a.entries()[0].id, b.entries()[0].id);
        assert!(a.entries()[0].id.ends_with("-heading-1"));
    }

    #[test]
    fn test_base_url_in_hrefs() {
        let mut host = three_h2();
        let mut options = AnchorOptions::new(".article");
        options.base_url = "/guide/".to_string();
        let anchor = Anchor::mount(options, &mut host).unwrap();

        assert_eq!(host.applied[0].2, "/guide/#heading-1");
        assert_eq!(anchor.href("heading-2"), "/guide/#heading-2");
    }
}
