// SPDX-License-Identifier: MPL-2.0
//! The toast store: single source of truth for all toasts across all six
//! screen positions.
//!
//! The store is an explicit service object constructed once at application
//! start and passed by reference to whoever needs it. It exposes mutation
//! operations (`add`, `remove`, `configure`, `enforce_capacity`), a
//! subscription bridge, and copy-on-write snapshots for the view layer.
//!
//! Removal is two-phase: `remove` marks the toast as exiting and notifies
//! subscribers so the exit animation can play, then `tick` deletes the
//! bucket entry once the exit duration has elapsed. Capacity evictions go
//! through the same path after a short fixed delay.

use super::config::{ConfigOverrides, ToastConfig};
use super::notification::{Position, Toast, ToastId, ToastInput, ToastOptions};
use super::{EXIT_ANIMATION, FAST_EVICTION_DELAY};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::time::Instant;

/// All toasts, partitioned by screen position. Within one bucket,
/// insertion order is display order (oldest first).
#[derive(Debug, Clone, Default)]
pub struct Buckets {
    by_position: [Vec<Toast>; 6],
}

impl Buckets {
    /// Returns the bucket for a position, oldest toast first.
    #[must_use]
    pub fn bucket(&self, position: Position) -> &[Toast] {
        &self.by_position[position.index()]
    }

    fn bucket_mut(&mut self, position: Position) -> &mut Vec<Toast> {
        &mut self.by_position[position.index()]
    }

    /// Looks up a toast by id within a position bucket.
    #[must_use]
    pub fn get(&self, id: ToastId, position: Position) -> Option<&Toast> {
        self.bucket(position).iter().find(|toast| toast.id == id)
    }

    /// Whether the given toast is the most recently added one at its
    /// position. Derived on read; true for exactly the last element of a
    /// non-empty bucket.
    #[must_use]
    pub fn is_newest(&self, id: ToastId, position: Position) -> bool {
        self.bucket(position)
            .last()
            .is_some_and(|toast| toast.id == id)
    }

    /// Total number of toasts across all positions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_position.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_position.iter().all(Vec::is_empty)
    }

    /// Iterates non-empty buckets in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Toast])> {
        Position::ALL
            .into_iter()
            .map(|position| (position, self.bucket(position)))
            .filter(|(_, bucket)| !bucket.is_empty())
    }
}

type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct SubscriberSet {
    next_id: u64,
    /// Callback slots; `None` means the callback is currently being invoked.
    entries: Vec<(u64, Option<Callback>)>,
}

impl SubscriberSet {
    fn insert(&mut self, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, Some(callback)));
        id
    }

    fn remove(&mut self, id: u64) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    fn take(&mut self, id: u64) -> Option<Callback> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| *entry_id == id)
            .and_then(|(_, slot)| slot.take())
    }

    fn restore(&mut self, id: u64, callback: Callback) {
        // The slot is gone if the callback unsubscribed itself; drop it.
        if let Some((_, slot)) = self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            *slot = Some(callback);
        }
    }
}

/// Handle returned by [`ToastStore::subscribe`]; unsubscribes the
/// associated callback when consumed.
pub struct SubscriberHandle {
    set: Weak<RefCell<SubscriberSet>>,
    id: u64,
}

impl SubscriberHandle {
    /// Removes the callback from the store. Safe to call from within the
    /// callback itself; removal takes effect for the next notification
    /// cycle.
    pub fn unsubscribe(self) {
        if let Some(set) = self.set.upgrade() {
            set.borrow_mut().remove(self.id);
        }
    }
}

impl std::fmt::Debug for SubscriberHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberHandle").field("id", &self.id).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskKind {
    /// Capacity eviction: start the standard removal path when due.
    Evict,
    /// Phase two of removal: delete the bucket entry when due.
    Delete,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    id: ToastId,
    position: Position,
    due: Instant,
    kind: TaskKind,
}

/// View-agnostic notification store.
pub struct ToastStore {
    next_id: u64,
    config: ToastConfig,
    buckets: Arc<Buckets>,
    subscribers: Rc<RefCell<SubscriberSet>>,
    scheduled: Vec<Scheduled>,
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastStore {
    /// Creates an empty store with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            config: ToastConfig::default(),
            buckets: Arc::new(Buckets::default()),
            subscribers: Rc::new(RefCell::new(SubscriberSet::default())),
            scheduled: Vec::new(),
        }
    }

    /// Creates a store with the given configuration.
    #[must_use]
    pub fn with_config(config: ToastConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> ToastConfig {
        self.config
    }

    /// Shallow-merges partial configuration. Only toasts added afterward
    /// pick up a changed default duration; displayed toasts keep the
    /// duration resolved when they were added.
    pub fn configure(&mut self, overrides: ConfigOverrides) {
        self.config.merge(overrides);
    }

    /// Current snapshot of all buckets.
    ///
    /// The returned `Arc` is pointer-distinct from a previously obtained
    /// snapshot if and only if any bucket changed in between, so consumers
    /// can use [`Arc::ptr_eq`] as a cheap "did anything change" check.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Buckets> {
        Arc::clone(&self.buckets)
    }

    /// Registers a change callback, invoked synchronously after every
    /// committed mutation. Returns a handle for unsubscribing.
    pub fn subscribe(&mut self, callback: impl FnMut() + 'static) -> SubscriberHandle {
        let id = self.subscribers.borrow_mut().insert(Box::new(callback));
        SubscriberHandle {
            set: Rc::downgrade(&self.subscribers),
            id,
        }
    }

    /// Adds a toast and returns its id.
    ///
    /// Accepts a bare text title (which becomes the toast's title) or a
    /// structured [`ToastOptions`]. Capacity enforcement for the target
    /// position runs before the toast is appended, so a newly added toast
    /// is never evicted by its own `add`.
    pub fn add(&mut self, input: impl Into<ToastInput>) -> ToastId {
        let options = input.into().into_options();
        let position = options.position.unwrap_or_default();
        self.enforce_capacity(position);

        let id = ToastId(self.next_id);
        self.next_id += 1;
        let toast = Toast::from_options(id, options, self.config.duration);
        Arc::make_mut(&mut self.buckets).bucket_mut(position).push(toast);
        self.notify();
        id
    }

    /// Three-argument form of [`add`](Self::add): when `input` is bare
    /// text, `message` and `options` fill in the rest (an explicit message
    /// inside `options` wins over the `message` argument, and any title in
    /// `options` is overwritten by the bare text, so callers can pass
    /// `ToastOptions::default()`); when `input` is already structured,
    /// both are ignored.
    pub fn add_with(
        &mut self,
        input: impl Into<ToastInput>,
        message: Option<&str>,
        options: ToastOptions,
    ) -> ToastId {
        let options = match input.into() {
            ToastInput::Title(title) => {
                let mut options = options;
                options.title = title;
                if options.message.is_none() {
                    options.message = message.map(str::to_string);
                }
                options
            }
            ToastInput::Options(options) => options,
        };
        self.add(options)
    }

    /// Begins removal of a toast: marks it exiting, fires its close
    /// callback, and schedules the bucket deletion for when the exit
    /// animation has finished.
    ///
    /// Idempotent: a missing or already-exiting toast is a silent no-op,
    /// since timer-driven and user-driven removal can race.
    pub fn remove(&mut self, id: ToastId, position: Position) {
        self.remove_at(id, position, Instant::now());
    }

    /// [`remove`](Self::remove) with an explicit time anchor; the deletion
    /// deadline is `now + EXIT_ANIMATION`. Used by `tick` so deadlines
    /// chain from the caller-supplied instant.
    fn remove_at(&mut self, id: ToastId, position: Position, now: Instant) {
        let Some(toast) = self.buckets.get(id, position) else {
            return;
        };
        if toast.exiting {
            return;
        }
        let on_close = toast.on_close.clone();

        let bucket = Arc::make_mut(&mut self.buckets).bucket_mut(position);
        if let Some(toast) = bucket.iter_mut().find(|toast| toast.id == id) {
            toast.exiting = true;
        }
        if let Some(callback) = on_close {
            callback();
        }
        self.schedule(id, position, now + EXIT_ANIMATION, TaskKind::Delete);
        self.notify();
    }

    /// Re-marks the `exceeded` flag across a position bucket.
    ///
    /// With bucket length N and limit M (1 for center positions, otherwise
    /// the configured `max_toasts`), the oldest `N - (M - 1)` toasts are
    /// flagged: enforcement runs just before one new toast is appended, so
    /// the bucket must shrink to leave exactly one free slot. Every newly
    /// flagged toast is scheduled for the standard removal path after the
    /// fast-eviction delay.
    pub fn enforce_capacity(&mut self, position: Position) {
        self.enforce_capacity_at(position, Instant::now());
    }

    fn enforce_capacity_at(&mut self, position: Position, now: Instant) {
        let limit = if position.is_center() {
            1
        } else {
            self.config.max_toasts
        };
        let bucket = self.buckets.bucket(position);
        let len = bucket.len();
        let flag_count = (len + 1).saturating_sub(limit).min(len);

        let changed = bucket
            .iter()
            .enumerate()
            .any(|(index, toast)| toast.exceeded != (index < flag_count));
        if !changed {
            return;
        }

        let newly_flagged: Vec<ToastId> = bucket
            .iter()
            .enumerate()
            .filter(|(index, toast)| *index < flag_count && !toast.exceeded)
            .map(|(_, toast)| toast.id)
            .collect();

        let bucket = Arc::make_mut(&mut self.buckets).bucket_mut(position);
        for (index, toast) in bucket.iter_mut().enumerate() {
            toast.exceeded = index < flag_count;
        }
        self.notify();

        let due = now + FAST_EVICTION_DELAY;
        for id in newly_flagged {
            self.schedule(id, position, due, TaskKind::Evict);
        }
    }

    /// Runs all scheduled tasks whose deadline has passed: due evictions
    /// start the standard removal path, due deletions drop the bucket
    /// entry and notify subscribers.
    pub fn tick(&mut self, now: Instant) {
        while let Some(index) = self.scheduled.iter().position(|task| task.due <= now) {
            let task = self.scheduled.remove(index);
            match task.kind {
                TaskKind::Evict => self.remove_at(task.id, task.position, now),
                TaskKind::Delete => {
                    if self.buckets.get(task.id, task.position).is_none() {
                        continue;
                    }
                    Arc::make_mut(&mut self.buckets)
                        .bucket_mut(task.position)
                        .retain(|toast| toast.id != task.id);
                    self.notify();
                }
            }
        }
    }

    /// Whether any scheduled eviction or deletion is still pending.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.scheduled.is_empty()
    }

    /// Schedules a task keyed by toast id. A deletion supersedes a pending
    /// eviction for the same toast; any other re-schedule is a no-op, so
    /// superseding is safe and idempotent.
    fn schedule(&mut self, id: ToastId, position: Position, due: Instant, kind: TaskKind) {
        if let Some(existing) = self.scheduled.iter_mut().find(|task| task.id == id) {
            if existing.kind == TaskKind::Evict && kind == TaskKind::Delete {
                existing.kind = kind;
                existing.due = due;
                existing.position = position;
            }
            return;
        }
        self.scheduled.push(Scheduled {
            id,
            position,
            due,
            kind,
        });
    }

    /// Invokes every subscriber registered at the start of this cycle,
    /// exactly once each. A callback may unsubscribe itself or others;
    /// removal takes effect for the next cycle.
    fn notify(&mut self) {
        let ids: Vec<u64> = self
            .subscribers
            .borrow()
            .entries
            .iter()
            .map(|(id, _)| *id)
            .collect();
        for id in ids {
            let callback = self.subscribers.borrow_mut().take(id);
            if let Some(mut callback) = callback {
                callback();
                self.subscribers.borrow_mut().restore(id, callback);
            }
        }
    }
}

impl std::fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastStore")
            .field("next_id", &self.next_id)
            .field("config", &self.config)
            .field("total", &self.buckets.total())
            .field("scheduled", &self.scheduled.len())
            .finish()
    }
}
