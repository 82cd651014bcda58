use crate::adapter::{Anchor, NavigationHost, ScrollSampler};
use crate::config::Config;
use crate::error::AnchorError;
use crate::keybindings::{Action, KeybindingMode, Keybindings};
use crate::nav::{HeadingEntry, Transition};
use crate::parser::{Document, parse_file};
use crate::tui::view::OutlineView;
use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::time::{Duration, Instant};

pub struct App {
    pub view: OutlineView,
    pub anchor: Anchor,
    pub outline_state: ListState,
    pub mode: KeybindingMode,
    pub show_outline: bool,
    pub outline_width: u16, // Percentage
    pub filename: String,
    pub path: PathBuf,
    pub status_message: Option<String>,
    sampler: ScrollSampler,
    keybindings: Keybindings,
}

impl App {
    /// Mount the navigation widget over `document`.
    pub fn new(document: Document, path: PathBuf, config: &Config) -> Result<Self, AnchorError> {
        let mut view = OutlineView::new(
            document,
            config.scan.line_height,
            Duration::from_millis(config.ui.smooth_scroll_ms),
        );
        let anchor = Anchor::mount(config.anchor.clone(), &mut view)?;

        let mut outline_state = ListState::default();
        if !anchor.entries().is_empty() {
            outline_state.select(Some(0));
        }

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document")
            .to_string();

        Ok(Self {
            view,
            anchor,
            outline_state,
            mode: KeybindingMode::Normal,
            show_outline: true,
            outline_width: config.ui.outline_width,
            filename,
            path,
            status_message: None,
            sampler: ScrollSampler::new(Duration::from_millis(config.ui.scroll_interval_ms)),
            keybindings: config.keybindings(),
        })
    }

    pub fn keybindings(&self) -> &Keybindings {
        &self.keybindings
    }

    pub fn show_help(&self) -> bool {
        self.mode == KeybindingMode::Help
    }

    pub fn selected(&self) -> Option<usize> {
        self.outline_state.selected()
    }

    pub fn selected_entry(&self) -> Option<&HeadingEntry> {
        self.anchor.entries().get(self.selected()?)
    }

    pub fn active_position(&self) -> Option<usize> {
        let id = self.anchor.active_id()?;
        self.anchor.entries().iter().position(|e| e.id == id)
    }

    /// Dispatch a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.keybindings.dispatch(self.mode, key) {
            Some(action) => self.handle_action(action),
            None => false,
        }
    }

    /// Apply an action. Returns true when the app should quit.
    pub fn handle_action(&mut self, action: Action) -> bool {
        self.status_message = None;

        match action {
            Action::Next => self.select_offset(1),
            Action::Previous => self.select_offset(-1),
            Action::First => self.select_index(0),
            Action::Last => {
                let len = self.anchor.entries().len();
                self.select_index(len.saturating_sub(1));
            }
            Action::Activate => self.activate_selected(),
            Action::SelectActive => match self.active_position() {
                Some(position) => self.select_index(position),
                None => self.status_message = Some("No active heading".to_string()),
            },
            Action::ToggleOutline => self.show_outline = !self.show_outline,
            Action::ScrollDown => self.scroll_by(1),
            Action::ScrollUp => self.scroll_by(-1),
            Action::PageDown => self.scroll_by(self.page_rows()),
            Action::PageUp => self.scroll_by(-self.page_rows()),
            Action::Top => self.scroll_to_row(0),
            Action::Bottom => self.scroll_to_row(self.view.max_scroll()),
            Action::ToggleHelp => self.toggle_help(),
            Action::Quit => return true,
        }
        false
    }

    fn page_rows(&self) -> isize {
        self.view.viewport_rows().saturating_sub(2).max(1) as isize
    }

    fn select_offset(&mut self, delta: isize) {
        let len = self.anchor.entries().len();
        if len == 0 {
            return;
        }
        let next = match self.selected() {
            Some(i) => i.saturating_add_signed(delta),
            None => 0,
        };
        self.select_index(next.min(len - 1));
    }

    fn select_index(&mut self, index: usize) {
        if self.anchor.entries().is_empty() {
            self.outline_state.select(None);
        } else {
            let last = self.anchor.entries().len() - 1;
            self.outline_state.select(Some(index.min(last)));
        }
    }

    fn activate_selected(&mut self) {
        let Some(position) = self.selected() else {
            return;
        };
        if self.anchor.navigate_to_entry(&mut self.view, position).is_none() {
            self.status_message = Some("Heading no longer exists".to_string());
        }
    }

    fn scroll_by(&mut self, delta: isize) {
        self.view.scroll_by(delta);
        self.sampler.record(self.view.scroll_position());
    }

    fn scroll_to_row(&mut self, row: usize) {
        self.view.scroll_to_row(row);
        self.sampler.record(self.view.scroll_position());
    }

    fn toggle_help(&mut self) {
        self.mode = match self.mode {
            KeybindingMode::Normal => KeybindingMode::Help,
            KeybindingMode::Help => KeybindingMode::Normal,
        };
        self.keybindings.reset_sequences();
    }

    /// Per-frame update: advance the smooth scroll and resolve the newest
    /// scroll sample.
    ///
    /// Samples are coalesced while an animation runs; once the view is at
    /// rest the last sample is resolved immediately.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        if self.view.tick(now) {
            self.sampler.record(self.view.scroll_position());
        }

        let position = if self.view.is_animating() {
            self.sampler.take_due(now)
        } else {
            self.sampler.flush(now)
        }?;
        self.anchor.on_scroll(&mut self.view, position)
    }

    pub fn is_busy(&self) -> bool {
        self.view.is_animating() || self.sampler.has_pending()
    }

    /// Re-read the file and rescan its headings.
    pub fn reload(&mut self) -> Result<(), String> {
        let document =
            parse_file(&self.path).map_err(|e| format!("Failed to reload file: {}", e))?;
        self.view.replace_document(document);

        let result = self.anchor.rescan(&mut self.view).map_err(|e| e.to_string());
        let selection = self.selected().unwrap_or(0);
        self.select_index(selection);
        result
    }
}
