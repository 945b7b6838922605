// SPDX-License-Identifier: MPL-2.0
//! FLIP-style reposition animation for toast stacks.
//!
//! When a toast is added or removed, the remaining toasts in that stack
//! change their vertical slot. Before each layout commit the overlay
//! records every toast's offset; the `Repositioner` compares the new
//! offsets against the previous ones and, for every toast that moved,
//! plays a fixed-duration translation from the old offset back to zero
//! with an overshoot-then-settle easing. Starting a new slide for a toast
//! cancels and replaces any in-flight one. Purely cosmetic: no effect on
//! store state or ordering.

use super::SLIDE_ANIMATION;
use super::notification::ToastId;
use std::collections::HashMap;
use std::time::Instant;

/// Overshoot easing: accelerates past the target then settles back to 1.0.
#[must_use]
pub fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    let t = t.clamp(0.0, 1.0);
    let shifted = t - 1.0;
    1.0 + C3 * shifted * shifted * shifted + C1 * shifted * shifted
}

#[derive(Debug, Clone, Copy)]
struct Slide {
    /// Vertical delta from the old offset to the new one, in logical
    /// pixels. The rendered translation decays from this value to zero.
    delta: f32,
    started: Instant,
}

/// Tracks committed vertical offsets and in-flight slides per toast.
#[derive(Debug, Default)]
pub struct Repositioner {
    previous: HashMap<ToastId, f32>,
    active: HashMap<ToastId, Slide>,
}

impl Repositioner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a new layout: `layout` holds each visible toast's vertical
    /// offset in screen space. Toasts whose offset changed start a slide
    /// from their previous offset; toasts no longer present are dropped,
    /// cancelling their slides.
    pub fn commit(&mut self, layout: &[(ToastId, f32)], now: Instant) {
        for &(id, offset) in layout {
            if let Some(&previous) = self.previous.get(&id) {
                let delta = previous - offset;
                if delta.abs() > f32::EPSILON {
                    // Replaces any in-flight slide for this toast.
                    self.active.insert(id, Slide { delta, started: now });
                }
            }
        }

        self.previous = layout.iter().copied().collect();
        let previous = &self.previous;
        self.active.retain(|id, _| previous.contains_key(id));
    }

    /// Current transient translation for a toast, decaying from the old
    /// offset delta to zero over the slide duration.
    #[must_use]
    pub fn offset(&self, id: ToastId, now: Instant) -> f32 {
        let Some(slide) = self.active.get(&id) else {
            return 0.0;
        };
        let elapsed = now.duration_since(slide.started).as_secs_f32();
        let t = elapsed / SLIDE_ANIMATION.as_secs_f32();
        if t >= 1.0 {
            return 0.0;
        }
        slide.delta * (1.0 - ease_out_back(t))
    }

    /// Whether any slide is still visibly in flight.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active
            .values()
            .any(|slide| now.duration_since(slide.started) < SLIDE_ANIMATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn id(value: u64) -> ToastId {
        ToastId(value)
    }

    #[test]
    fn easing_starts_at_zero_and_settles_at_one() {
        assert!(ease_out_back(0.0).abs() < 1e-5);
        assert!((ease_out_back(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn easing_overshoots_before_settling() {
        let overshoots = (1..100)
            .map(|i| ease_out_back(i as f32 / 100.0))
            .any(|value| value > 1.0);
        assert!(overshoots);
    }

    #[test]
    fn first_commit_starts_no_slides() {
        let now = Instant::now();
        let mut repositioner = Repositioner::new();
        repositioner.commit(&[(id(1), 0.0), (id(2), 80.0)], now);
        assert_eq!(repositioner.offset(id(1), now), 0.0);
        assert_eq!(repositioner.offset(id(2), now), 0.0);
        assert!(!repositioner.is_animating(now));
    }

    #[test]
    fn moved_toast_slides_from_old_offset_to_zero() {
        let now = Instant::now();
        let mut repositioner = Repositioner::new();
        repositioner.commit(&[(id(1), 0.0), (id(2), 80.0)], now);

        // Toast 1 was removed; toast 2 moves up into slot 0.
        repositioner.commit(&[(id(2), 0.0)], now);
        let start = repositioner.offset(id(2), now);
        assert!((start - 80.0).abs() < 1e-3, "slide starts at the old delta");

        let settled = repositioner.offset(id(2), now + Duration::from_millis(500));
        assert_eq!(settled, 0.0);
    }

    #[test]
    fn new_slide_replaces_in_flight_one() {
        let now = Instant::now();
        let mut repositioner = Repositioner::new();
        repositioner.commit(&[(id(1), 160.0)], now);
        repositioner.commit(&[(id(1), 80.0)], now);
        assert!((repositioner.offset(id(1), now) - 80.0).abs() < 1e-3);

        // A second move mid-flight replaces the slide with one measured
        // from the last committed offset.
        let later = now + Duration::from_millis(100);
        repositioner.commit(&[(id(1), 0.0)], later);
        assert!((repositioner.offset(id(1), later) - 80.0).abs() < 1e-3);
        assert!(repositioner.is_animating(later));
    }

    #[test]
    fn removed_toast_loses_its_slide() {
        let now = Instant::now();
        let mut repositioner = Repositioner::new();
        repositioner.commit(&[(id(1), 0.0), (id(2), 80.0)], now);
        repositioner.commit(&[(id(2), 0.0)], now);
        repositioner.commit(&[], now);
        assert_eq!(repositioner.offset(id(2), now), 0.0);
        assert!(!repositioner.is_animating(now));
    }

    #[test]
    fn unchanged_offsets_do_not_animate() {
        let now = Instant::now();
        let mut repositioner = Repositioner::new();
        repositioner.commit(&[(id(1), 0.0)], now);
        repositioner.commit(&[(id(1), 0.0)], now);
        assert!(!repositioner.is_animating(now));
    }
}
