//! Default keybindings, in keybinds-rs key string syntax.

use super::{Action, KeybindingMode, Keybindings};

/// Create the default keybindings configuration
pub fn default_keybindings() -> Keybindings {
    let mut kb = Keybindings::new();
    add_normal_mode(&mut kb);
    add_help_mode(&mut kb);
    kb
}

/// Bind a key, panicking on invalid key syntax (only used for built-in defaults)
fn bind(kb: &mut Keybindings, mode: KeybindingMode, key: &str, action: Action) {
    kb.bind(mode, key, action)
        .unwrap_or_else(|e| panic!("Invalid default keybinding '{}': {}", key, e));
}

fn add_normal_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Normal;

    // Outline
    bind(kb, Normal, "Tab", Next);
    bind(kb, Normal, "n", Next);
    bind(kb, Normal, "Shift+Tab", Previous);
    bind(kb, Normal, "N", Previous);
    bind(kb, Normal, "g", First);
    bind(kb, Normal, "G", Last);
    bind(kb, Normal, "Enter", Activate);
    bind(kb, Normal, "a", SelectActive);
    bind(kb, Normal, "w", ToggleOutline);

    // Content
    bind(kb, Normal, "j", ScrollDown);
    bind(kb, Normal, "Down", ScrollDown);
    bind(kb, Normal, "k", ScrollUp);
    bind(kb, Normal, "Up", ScrollUp);
    bind(kb, Normal, "d", PageDown);
    bind(kb, Normal, "PageDown", PageDown);
    bind(kb, Normal, "u", PageUp);
    bind(kb, Normal, "PageUp", PageUp);
    bind(kb, Normal, "Home", Top);
    bind(kb, Normal, "End", Bottom);

    // Application
    bind(kb, Normal, "?", ToggleHelp);
    bind(kb, Normal, "q", Quit);
    bind(kb, Normal, "Ctrl+c", Quit);
}

fn add_help_mode(kb: &mut Keybindings) {
    use Action::*;
    use KeybindingMode::Help;

    bind(kb, Help, "?", ToggleHelp);
    bind(kb, Help, "Escape", ToggleHelp);
    bind(kb, Help, "q", Quit);
}
