// SPDX-License-Identifier: MPL-2.0
//! Full-viewport toast overlay.
//!
//! Mounted once near the application root, the overlay renders every
//! position's toast stack layered above all other content. It owns the
//! per-toast [`Lifecycle`] controllers and the [`Repositioner`], drives
//! them from the periodic UI tick, and feeds expirations back into the
//! store's removal path.

use super::design_tokens::{sizing, spacing};
use super::toast_card::{self, ToastCard};
use crate::toast::lifecycle::Event as LifecycleEvent;
use crate::toast::{Buckets, Lifecycle, Position, Repositioner, Toast, ToastId, ToastStore};
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length, Padding};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Messages for toast interactions.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user pressed a toast's dismiss button.
    Dismiss(ToastId, Position),
    /// The user pressed a toast's action button.
    ActionPressed(ToastId, Position),
}

/// Overlay state: view-bound animation bookkeeping for the current
/// snapshot of the store.
pub struct State {
    lifecycles: HashMap<ToastId, Lifecycle>,
    repositioner: Repositioner,
    snapshot: Arc<Buckets>,
    last_tick: Instant,
}

impl State {
    #[must_use]
    pub fn new(store: &ToastStore) -> Self {
        Self {
            lifecycles: HashMap::new(),
            repositioner: Repositioner::new(),
            snapshot: store.snapshot(),
            last_tick: Instant::now(),
        }
    }

    /// Handles a toast interaction.
    pub fn update(&mut self, store: &mut ToastStore, message: Message) {
        match message {
            Message::Dismiss(id, position) => {
                if let Some(lifecycle) = self.lifecycles.get_mut(&id) {
                    lifecycle.begin_exit(Instant::now());
                }
                store.remove(id, position);
                self.snapshot = store.snapshot();
            }
            Message::ActionPressed(id, position) => {
                if let Some(action) = self
                    .snapshot
                    .get(id, position)
                    .and_then(|toast| toast.action.as_ref())
                {
                    if let Some(callback) = &action.on_press {
                        callback();
                    }
                }
            }
        }
    }

    /// Advances all animation and timer state by one tick.
    ///
    /// Runs the store's scheduled work, syncs lifecycles against the
    /// current snapshot, feeds countdown expirations back into the store's
    /// removal path, and commits the new layout to the repositioner.
    pub fn tick(&mut self, store: &mut ToastStore, now: Instant) {
        store.tick(now);
        let snapshot = store.snapshot();

        let mut expired: Vec<(ToastId, Position)> = Vec::new();
        for (position, bucket) in snapshot.iter() {
            for toast in bucket {
                let lifecycle = self
                    .lifecycles
                    .entry(toast.id)
                    .or_insert_with(|| Lifecycle::new(toast.duration, now));
                if toast.exceeded {
                    lifecycle.mark_exceeded(now);
                }
                if toast.exiting {
                    lifecycle.begin_exit(now);
                }
                if let Some(LifecycleEvent::Expired) = lifecycle.tick(now) {
                    expired.push((toast.id, position));
                }
            }
        }
        for (id, position) in expired {
            store.remove(id, position);
        }

        // Deleted toasts drop their lifecycle, implicitly cancelling any
        // remaining timers and animations.
        let snapshot = store.snapshot();
        self.lifecycles.retain(|id, _| {
            snapshot
                .iter()
                .any(|(_, bucket)| bucket.iter().any(|toast| toast.id == *id))
        });

        if !Arc::ptr_eq(&snapshot, &self.snapshot) {
            let layout = Self::layout_offsets(&snapshot);
            self.repositioner.commit(&layout, now);
        }
        self.snapshot = snapshot;
        self.last_tick = now;
    }

    /// Whether the overlay still needs ticks: toasts on screen, scheduled
    /// store work, or an in-flight reposition slide.
    #[must_use]
    pub fn needs_ticks(&self, store: &ToastStore) -> bool {
        !self.snapshot.is_empty()
            || store.has_pending_work()
            || self.repositioner.is_animating(self.last_tick)
    }

    /// Renders all toast stacks as stacked full-viewport layers.
    pub fn view(&self) -> Element<'_, Message> {
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);
        for (position, bucket) in self.snapshot.iter() {
            layers = layers.push(self.position_layer(position, bucket));
        }
        layers.into()
    }

    fn position_layer<'a>(
        &'a self,
        position: Position,
        bucket: &'a [Toast],
    ) -> Element<'a, Message> {
        let now = self.last_tick;
        let horizontal = match position {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        };
        let vertical = if position.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        };

        // Newest toast renders nearest the anchored edge.
        let ordered: Vec<&Toast> = if position.is_top() {
            bucket.iter().rev().collect()
        } else {
            bucket.iter().collect()
        };

        let mut column = Column::new().spacing(spacing::SM).align_x(horizontal);
        for toast in ordered {
            let offset = self.repositioner.offset(toast.id, now);
            let card = ToastCard::view(toast_card::ViewContext {
                toast,
                lifecycle: self.lifecycles.get(&toast.id),
                now,
            });
            // Transient reposition translation, rendered as one-sided
            // padding so it works for both stack directions.
            let wrapper = Container::new(card).padding(Padding {
                top: offset.max(0.0),
                right: 0.0,
                bottom: (-offset).max(0.0),
                left: 0.0,
            });
            column = column.push(wrapper);
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(spacing::MD)
            .into()
    }

    /// Screen-space vertical offset of every toast, measured from its
    /// stack's anchored edge (positive downward for top stacks, negative
    /// upward for bottom stacks).
    fn layout_offsets(buckets: &Buckets) -> Vec<(ToastId, f32)> {
        let slot = sizing::TOAST_SLOT_HEIGHT + spacing::SM;
        let mut layout = Vec::with_capacity(buckets.total());
        for (position, bucket) in buckets.iter() {
            let len = bucket.len();
            for (index, toast) in bucket.iter().enumerate() {
                let edge_distance = (len - 1 - index) as f32;
                let offset = if position.is_top() {
                    edge_distance * slot
                } else {
                    -edge_distance * slot
                };
                layout.push((toast.id, offset));
            }
        }
        layout
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("overlay::State")
            .field("lifecycles", &self.lifecycles.len())
            .field("toasts", &self.snapshot.total())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::{Phase, ToastOptions};
    use std::time::Duration;

    #[test]
    fn tick_creates_lifecycles_for_new_toasts() {
        let mut store = ToastStore::new();
        let mut state = State::new(&store);
        let id = store.add("hello");

        state.tick(&mut store, Instant::now());
        let lifecycle = state.lifecycles.get(&id).expect("lifecycle created");
        assert_eq!(lifecycle.phase(), Phase::Entry);
    }

    #[test]
    fn countdown_expiry_flows_back_into_the_store() {
        let mut store = ToastStore::new();
        let mut state = State::new(&store);
        let now = Instant::now();
        let id = store.add(ToastOptions::new("short").duration(Duration::from_millis(100)));
        state.tick(&mut store, now);

        // Entry animation (400ms) plus countdown (100ms) have elapsed.
        state.tick(&mut store, now + Duration::from_millis(600));
        assert!(store
            .snapshot()
            .get(id, Position::TopRight)
            .is_some_and(|toast| toast.exiting));

        // The deletion deferral runs out; lifecycle is dropped with it.
        state.tick(&mut store, now + Duration::from_millis(1500));
        assert!(store.snapshot().get(id, Position::TopRight).is_none());
        assert!(!state.lifecycles.contains_key(&id));
    }

    #[test]
    fn dismiss_message_starts_exit() {
        let mut store = ToastStore::new();
        let mut state = State::new(&store);
        let id = store.add("hello");
        state.tick(&mut store, Instant::now());

        state.update(&mut store, Message::Dismiss(id, Position::TopRight));
        assert!(store
            .snapshot()
            .get(id, Position::TopRight)
            .is_some_and(|toast| toast.exiting));
        assert_eq!(state.lifecycles[&id].phase(), Phase::Exit);
    }

    #[test]
    fn layout_offsets_point_away_from_the_anchored_edge() {
        let mut store = ToastStore::new();
        store.add(ToastOptions::new("a").position(Position::TopRight));
        store.add(ToastOptions::new("b").position(Position::TopRight));
        store.add(ToastOptions::new("c").position(Position::BottomLeft));
        store.add(ToastOptions::new("d").position(Position::BottomLeft));

        let snapshot = store.snapshot();
        let layout: HashMap<ToastId, f32> = State::layout_offsets(&snapshot).into_iter().collect();

        let top = snapshot.bucket(Position::TopRight);
        assert!(layout[&top[0].id] > 0.0, "older top toast sits below the edge");
        assert_eq!(layout[&top[1].id], 0.0, "newest top toast sits at the edge");

        let bottom = snapshot.bucket(Position::BottomLeft);
        assert!(layout[&bottom[0].id] < 0.0, "older bottom toast sits above the edge");
        assert_eq!(layout[&bottom[1].id], 0.0);
    }

    #[test]
    fn needs_ticks_goes_quiet_when_everything_settles() {
        let mut store = ToastStore::new();
        let mut state = State::new(&store);
        assert!(!state.needs_ticks(&store));

        let id = store.add("hello");
        state.tick(&mut store, Instant::now());
        assert!(state.needs_ticks(&store));

        store.remove(id, Position::TopRight);
        state.tick(&mut store, Instant::now() + Duration::from_secs(2));
        state.tick(&mut store, Instant::now() + Duration::from_secs(3));
        assert!(!state.needs_ticks(&store));
    }
}
