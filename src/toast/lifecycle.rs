// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle: entry animation, duration countdown, exit.
//!
//! Each visible toast gets one `Lifecycle`, owned by the overlay layer and
//! driven by the UI tick. The state machine has two phases only: a toast is
//! either entering/visible (`Entry`, with the countdown running once the
//! entry animation finished) or exiting (`Exit`). Dropping the `Lifecycle`
//! when the toast leaves the store implicitly cancels its timers.

use super::{ENTRY_ANIMATION, EXIT_ANIMATION, FAST_EVICTION_DELAY};
use std::time::{Duration, Instant};

/// Animation phase of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entry,
    Exit,
}

/// Event produced by [`Lifecycle::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The countdown finished; the toast should be removed from the store.
    Expired,
}

/// Animation and timer state for one toast.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    phase: Phase,
    entry_started: Instant,
    /// Set when the entry animation completes (or eviction fast-tracks it).
    countdown_started: Option<Instant>,
    /// Remaining countdown; shortened to the fast-eviction delay when the
    /// toast is flagged exceeded.
    countdown: Duration,
    exceeded: bool,
    exit_started: Option<Instant>,
}

impl Lifecycle {
    /// Starts a lifecycle in the `Entry` phase with the toast's resolved
    /// display duration.
    #[must_use]
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            phase: Phase::Entry,
            entry_started: now,
            countdown_started: None,
            countdown: duration,
            exceeded: false,
            exit_started: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Marks the toast as capacity-evicted: opacity drops to zero at once
    /// and the remaining countdown is replaced with the short fixed delay,
    /// so eviction feels fast but not abrupt.
    pub fn mark_exceeded(&mut self, now: Instant) {
        if self.exceeded || self.phase == Phase::Exit {
            return;
        }
        self.exceeded = true;
        self.countdown = FAST_EVICTION_DELAY;
        self.countdown_started = Some(now);
    }

    /// Switches to the `Exit` phase, e.g. when the store marked the toast
    /// as exiting. No-op if already exiting.
    pub fn begin_exit(&mut self, now: Instant) {
        if self.phase == Phase::Exit {
            return;
        }
        self.phase = Phase::Exit;
        self.exit_started = Some(now);
    }

    /// Advances timers. Completion of the entry animation starts the
    /// countdown; completion of the countdown switches to `Exit` and
    /// reports [`Event::Expired`] so the owner can fire the removal.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        if self.phase == Phase::Exit {
            return None;
        }
        if self.countdown_started.is_none() {
            let entry_elapsed = now.duration_since(self.entry_started);
            if entry_elapsed >= ENTRY_ANIMATION {
                self.countdown_started = Some(self.entry_started + ENTRY_ANIMATION);
            }
        }
        if let Some(started) = self.countdown_started {
            if now.duration_since(started) >= self.countdown {
                self.begin_exit(now);
                return Some(Event::Expired);
            }
        }
        None
    }

    /// Remaining countdown fraction for the progress bar, from 1.0 down
    /// to 0.0. Stays at 1.0 until the entry animation completes.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.countdown_started else {
            return 1.0;
        };
        if self.countdown.is_zero() {
            return 0.0;
        }
        let elapsed = now.duration_since(started).as_secs_f32();
        (1.0 - elapsed / self.countdown.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Current opacity: fades in during entry, out during exit, and is
    /// forced to zero for capacity-evicted toasts.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        if self.exceeded {
            return 0.0;
        }
        match self.phase {
            Phase::Entry => {
                let elapsed = now.duration_since(self.entry_started).as_secs_f32();
                (elapsed / ENTRY_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
            }
            Phase::Exit => {
                let started = self.exit_started.unwrap_or(now);
                let elapsed = now.duration_since(started).as_secs_f32();
                (1.0 - elapsed / EXIT_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(5000);

    #[test]
    fn starts_in_entry_with_full_progress() {
        let now = Instant::now();
        let lifecycle = Lifecycle::new(DURATION, now);
        assert_eq!(lifecycle.phase(), Phase::Entry);
        assert_eq!(lifecycle.progress(now), 1.0);
    }

    #[test]
    fn countdown_starts_after_entry_animation() {
        let now = Instant::now();
        let mut lifecycle = Lifecycle::new(DURATION, now);

        assert!(lifecycle.tick(now + Duration::from_millis(100)).is_none());
        assert_eq!(lifecycle.progress(now + Duration::from_millis(100)), 1.0);

        assert!(lifecycle.tick(now + Duration::from_millis(450)).is_none());
        let progress = lifecycle.progress(now + Duration::from_millis(450));
        assert!(progress < 1.0 && progress > 0.9);
    }

    #[test]
    fn expires_after_entry_plus_duration() {
        let now = Instant::now();
        let mut lifecycle = Lifecycle::new(DURATION, now);
        lifecycle.tick(now + Duration::from_millis(500));

        assert!(lifecycle.tick(now + Duration::from_millis(5000)).is_none());
        let event = lifecycle.tick(now + Duration::from_millis(5500));
        assert_eq!(event, Some(Event::Expired));
        assert_eq!(lifecycle.phase(), Phase::Exit);

        // Terminal: no further events.
        assert!(lifecycle.tick(now + Duration::from_millis(9000)).is_none());
    }

    #[test]
    fn exceeded_toast_fades_and_exits_fast() {
        let now = Instant::now();
        let mut lifecycle = Lifecycle::new(DURATION, now);
        lifecycle.tick(now + Duration::from_millis(50));
        lifecycle.mark_exceeded(now + Duration::from_millis(50));

        assert_eq!(lifecycle.opacity(now + Duration::from_millis(50)), 0.0);
        assert!(lifecycle.tick(now + Duration::from_millis(100)).is_none());
        let event = lifecycle.tick(now + Duration::from_millis(200));
        assert_eq!(event, Some(Event::Expired));
    }

    #[test]
    fn user_dismissal_preempts_countdown() {
        let now = Instant::now();
        let mut lifecycle = Lifecycle::new(DURATION, now);
        lifecycle.tick(now + Duration::from_millis(600));
        lifecycle.begin_exit(now + Duration::from_millis(700));

        assert_eq!(lifecycle.phase(), Phase::Exit);
        assert!(lifecycle.tick(now + Duration::from_millis(6000)).is_none());
    }

    #[test]
    fn opacity_fades_out_during_exit() {
        let now = Instant::now();
        let mut lifecycle = Lifecycle::new(DURATION, now);
        lifecycle.begin_exit(now + Duration::from_millis(500));

        let mid = lifecycle.opacity(now + Duration::from_millis(700));
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(lifecycle.opacity(now + Duration::from_millis(1000)), 0.0);
    }

    #[test]
    fn mark_exceeded_after_exit_is_ignored() {
        let now = Instant::now();
        let mut lifecycle = Lifecycle::new(DURATION, now);
        lifecycle.begin_exit(now);
        lifecycle.mark_exceeded(now);
        assert!(!lifecycle.is_exceeded());
    }
}
