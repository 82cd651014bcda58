//! Scroll sample coalescing.
//!
//! Hosts can produce scroll samples far faster than they need to be
//! resolved. The sampler keeps only the newest sample and releases it at
//! most once per interval. Dropping intermediate samples is safe because
//! active-heading resolution depends on the position alone.

use std::time::{Duration, Instant};

/// Default interval between resolved samples (one 60 Hz frame).
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub struct ScrollSampler {
    interval: Duration,
    pending: Option<f64>,
    last_emit: Option<Instant>,
}

impl Default for ScrollSampler {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_INTERVAL)
    }
}

impl ScrollSampler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            pending: None,
            last_emit: None,
        }
    }

    /// Record a sample, replacing any sample not yet taken.
    pub fn record(&mut self, position: f64) {
        self.pending = Some(position);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the newest sample if the interval since the last one has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<f64> {
        let due = match self.last_emit {
            Some(last) => now.saturating_duration_since(last) >= self.interval,
            None => true,
        };
        if !due {
            return None;
        }

        let position = self.pending.take()?;
        self.last_emit = Some(now);
        Some(position)
    }

    /// Take the newest sample regardless of the interval.
    pub fn flush(&mut self, now: Instant) -> Option<f64> {
        let position = self.pending.take()?;
        self.last_emit = Some(now);
        Some(position)
    }
}
