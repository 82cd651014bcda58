//! Terminal viewer: an outline pane that tracks the heading under the
//! activation line while the document scrolls.

mod app;
mod ui;
mod view;
mod watcher;

pub use app::App;
pub use view::{MarkerKind, OutlineRow, OutlineView};
pub use watcher::DocumentWatcher;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Poll timeout while a smooth scroll or a scroll sample is pending.
const FRAME: Duration = Duration::from_millis(16);
/// Poll timeout while idle, short enough to notice file changes.
const IDLE: Duration = Duration::from_millis(100);

/// Run the viewer until the user quits.
///
/// Each iteration draws, waits for input (briefly while animating), updates
/// scroll state and checks the file watcher.
pub fn run(terminal: &mut DefaultTerminal, app: App) -> Result<()> {
    let mut app = app;

    let mut watcher = match DocumentWatcher::new(&app.path) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            log::warn!("live reload disabled for {}: {}", app.path.display(), e);
            None
        }
    };

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        let timeout = if app.is_busy() { FRAME } else { IDLE };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());

        if let Some(ref mut watcher) = watcher {
            if watcher.poll() {
                match app.reload() {
                    Ok(()) => app.status_message = Some("✓ Reloaded".to_string()),
                    Err(e) => app.status_message = Some(format!("✗ Reload failed: {}", e)),
                }
                watcher.rewatch();
            }
        }
    }
}
