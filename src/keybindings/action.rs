//! Action definitions for keybindings

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// All bindable actions in the viewer
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum Action {
    // === Outline ===
    /// Select next outline entry
    Next,
    /// Select previous outline entry
    Previous,
    /// Select first outline entry
    First,
    /// Select last outline entry
    Last,
    /// Scroll to the selected heading
    Activate,
    /// Move the outline selection to the active heading
    SelectActive,
    /// Toggle outline visibility
    ToggleOutline,

    // === Content ===
    /// Scroll content down one line
    ScrollDown,
    /// Scroll content up one line
    ScrollUp,
    /// Scroll content down by page
    PageDown,
    /// Scroll content up by page
    PageUp,
    /// Jump to top of content
    Top,
    /// Jump to end of content
    Bottom,

    // === Application ===
    ToggleHelp,
    Quit,
}

impl Action {
    /// Get a human-readable description for help text
    pub fn description(&self) -> &'static str {
        match self {
            Action::Next => "Next heading",
            Action::Previous => "Previous heading",
            Action::First => "First heading",
            Action::Last => "Last heading",
            Action::Activate => "Go to selected heading",
            Action::SelectActive => "Select active heading",
            Action::ToggleOutline => "Toggle outline",
            Action::ScrollDown => "Scroll down",
            Action::ScrollUp => "Scroll up",
            Action::PageDown => "Page down",
            Action::PageUp => "Page up",
            Action::Top => "Top of document",
            Action::Bottom => "End of document",
            Action::ToggleHelp => "Toggle help",
            Action::Quit => "Quit",
        }
    }

    /// Get the category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::Next
            | Action::Previous
            | Action::First
            | Action::Last
            | Action::Activate
            | Action::SelectActive
            | Action::ToggleOutline => "Outline",

            Action::ScrollDown
            | Action::ScrollUp
            | Action::PageDown
            | Action::PageUp
            | Action::Top
            | Action::Bottom => "Content",

            Action::ToggleHelp | Action::Quit => "Application",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_action_is_described() {
        for action in Action::iter() {
            assert!(!action.description().is_empty());
            assert!(!action.category().is_empty());
        }
    }

    #[test]
    fn test_action_names_round_trip() {
        assert_eq!(Action::SelectActive.to_string(), "SelectActive");
        assert_eq!("PageDown".parse::<Action>().unwrap(), Action::PageDown);
    }
}
