//! Smooth scrolling toward a navigation destination.
//!
//! Animations are evaluated at caller-supplied instants so that hosts drive
//! them from their own frame loop. Starting a new animation replaces the
//! running one and a manual scroll cancels it: the last request wins.

use std::time::{Duration, Instant};

pub const DEFAULT_SMOOTH_SCROLL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(from: f64, to: f64, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn position_at(&self, now: Instant) -> f64 {
        let t = ease_in_out(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Holds at most one running animation.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    duration: Duration,
    active: Option<SmoothScroll>,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTH_SCROLL)
    }
}

impl ScrollAnimator {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    pub fn start(&mut self, from: f64, to: f64, now: Instant) {
        self.active = Some(SmoothScroll::new(from, to, now, self.duration));
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn target(&self) -> Option<f64> {
        self.active.as_ref().map(SmoothScroll::target)
    }

    /// Position for this frame. The animation is dropped once it has
    /// produced its final position.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let animation = self.active.as_ref()?;
        let position = animation.position_at(now);
        if animation.is_finished(now) {
            self.active = None;
        }
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_animation_reaches_target() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(0.0, 1100.0, start, Duration::from_millis(300));

        assert_eq!(scroll.position_at(start), 0.0);
        let midway = scroll.position_at(start + Duration::from_millis(150));
        assert!(midway > 0.0 && midway < 1100.0);
        assert_eq!(scroll.position_at(start + Duration::from_millis(300)), 1100.0);
        assert!(scroll.is_finished(start + Duration::from_millis(301)));
    }

    #[test]
    fn test_animation_moves_upward() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(800.0, 200.0, start, Duration::from_millis(100));
        let quarter = scroll.position_at(start + Duration::from_millis(25));
        assert!(quarter < 800.0 && quarter > 200.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let start = Instant::now();
        let scroll = SmoothScroll::new(0.0, 40.0, start, Duration::ZERO);
        assert_eq!(scroll.position_at(start), 40.0);
        assert!(scroll.is_finished(start));
    }

    #[test]
    fn test_animator_last_request_wins() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::new(Duration::from_millis(100));

        animator.start(0.0, 500.0, start);
        animator.tick(start + Duration::from_millis(40));
        animator.start(200.0, 1000.0, start + Duration::from_millis(50));
        assert_eq!(animator.target(), Some(1000.0));

        assert_eq!(
            animator.tick(start + Duration::from_millis(150)),
            Some(1000.0)
        );
        assert!(!animator.is_running());
        assert_eq!(animator.tick(start + Duration::from_millis(200)), None);
    }

    #[test]
    fn test_animator_cancel() {
        let start = Instant::now();
        let mut animator = ScrollAnimator::default();
        animator.start(0.0, 300.0, start);
        animator.cancel();
        assert_eq!(animator.tick(start + Duration::from_millis(10)), None);
    }
}
