use crate::adapter::AnchorOptions;
use crate::keybindings::{Keybindings, KeybindingsConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Content selector the terminal viewer answers to.
pub const DOCUMENT_SELECTOR: &str = "document";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_anchor")]
    pub anchor: AnchorOptions,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            scan: ScanConfig::default(),
            ui: UiConfig::default(),
            keybindings: KeybindingsConfig::default(),
        }
    }
}

fn default_anchor() -> AnchorOptions {
    AnchorOptions::new(DOCUMENT_SELECTOR)
}

/// How markdown lines map onto document pixels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_line_height")]
    pub line_height: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            line_height: default_line_height(),
        }
    }
}

fn default_line_height() -> f64 {
    20.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Outline pane width as a percentage
    #[serde(default = "default_outline_width")]
    pub outline_width: u16,

    /// Minimum time between resolved scroll samples
    #[serde(default = "default_scroll_interval_ms")]
    pub scroll_interval_ms: u64,

    /// Duration of the smooth scroll toward a heading (0 jumps)
    #[serde(default = "default_smooth_scroll_ms")]
    pub smooth_scroll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            outline_width: default_outline_width(),
            scroll_interval_ms: default_scroll_interval_ms(),
            smooth_scroll_ms: default_smooth_scroll_ms(),
        }
    }
}

fn default_outline_width() -> u16 {
    30
}

fn default_scroll_interval_ms() -> u64 {
    16
}

fn default_smooth_scroll_ms() -> u64 {
    300
}

impl Config {
    /// Get the platform-specific config file path
    /// - macOS: ~/Library/Application Support/anchornav/config.toml
    /// - Linux: ~/.config/anchornav/config.toml
    /// - Windows: %APPDATA%/anchornav/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("anchornav").join("config.toml"))
    }

    /// Load config from file, or return default if file doesn't exist
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from a specific file. Unreadable or invalid files fall
    /// back to defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get keybindings with user customizations applied
    pub fn keybindings(&self) -> Keybindings {
        self.keybindings.to_keybindings()
    }
}
