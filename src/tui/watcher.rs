//! Live reload for the open document.
//!
//! Watches the file for writes and tells the viewer when to re-parse and
//! rescan. Bursts of events inside the debounce window collapse into one
//! reload, fired once the window has elapsed.

use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{AccessKind, AccessMode, ModifyKind},
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

const DEBOUNCE: Duration = Duration::from_millis(100);

pub struct DocumentWatcher {
    watcher: RecommendedWatcher,
    receiver: Receiver<Result<Event, notify::Error>>,
    path: PathBuf,
    last_reload: Instant,
    debounce: Duration,
    /// A change arrived inside the debounce window and is still owed a reload
    pending: bool,
}

impl DocumentWatcher {
    pub fn new(path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(path, RecursiveMode::NonRecursive)?;

        Ok(Self {
            watcher,
            receiver: rx,
            path: path.to_path_buf(),
            last_reload: Instant::now(),
            debounce: DEBOUNCE,
            pending: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drain pending events. Returns true when a reload is due.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        loop {
            match self.receiver.try_recv() {
                Ok(Ok(event)) => changed |= is_relevant(&event, &self.path),
                Ok(Err(e)) => log::debug!("watch error on {}: {}", self.path.display(), e),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }

        self.settle(changed, Instant::now())
    }

    fn settle(&mut self, changed: bool, now: Instant) -> bool {
        self.pending |= changed;
        if !self.pending || now.duration_since(self.last_reload) < self.debounce {
            return false;
        }
        self.pending = false;
        self.last_reload = now;
        true
    }

    /// Re-arm the watch, e.g. after an editor replaced the file.
    pub fn rewatch(&mut self) {
        let _ = self.watcher.unwatch(&self.path);
        if let Err(e) = self.watcher.watch(&self.path, RecursiveMode::NonRecursive) {
            log::warn!("cannot watch {}: {}", self.path.display(), e);
        }
    }
}

/// Events that mean the file's content may have changed.
fn is_relevant(event: &Event, path: &Path) -> bool {
    if !event.paths.iter().any(|p| p == path) {
        return false;
    }

    matches!(
        event.kind,
        EventKind::Modify(ModifyKind::Data(_))
            | EventKind::Modify(ModifyKind::Any)
            | EventKind::Access(AccessKind::Close(AccessMode::Write))
            | EventKind::Create(_)
    )
}
