// SPDX-License-Identifier: MPL-2.0
//! Toast notification core.
//!
//! This module holds the view-agnostic half of the toast system:
//!
//! - [`notification`] - The `Toast` record, positions, intents, and the
//!   bare-text / structured input union
//! - [`config`] - Runtime defaults (`max_toasts`, default duration)
//! - [`store`] - `ToastStore`, the single source of truth for all toasts
//!   across all six positions, with capacity enforcement, two-phase removal,
//!   and a subscription bridge
//! - [`lifecycle`] - Per-toast entry/countdown/exit state machine
//! - [`reposition`] - FLIP-style vertical slide animation when the stack
//!   composition changes
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::toast::{ToastOptions, ToastStore, Intent, Position};
//!
//! let mut store = ToastStore::new();
//!
//! // Bare text form: default intent, top-right position.
//! store.add("Saved");
//!
//! // Structured form.
//! store.add(
//!     ToastOptions::new("Upload complete")
//!         .message("Your document has been uploaded")
//!         .intent(Intent::Success)
//!         .position(Position::BottomCenter),
//! );
//! ```
//!
//! The store performs no timekeeping of its own beyond recording deadlines;
//! drive it with [`ToastStore::tick`] from a periodic UI tick.

pub mod config;
pub mod lifecycle;
pub mod notification;
pub mod reposition;
pub mod store;

pub use config::{ConfigOverrides, ToastConfig};
pub use lifecycle::{Lifecycle, Phase};
pub use notification::{Intent, Position, Toast, ToastAction, ToastId, ToastInput, ToastOptions, ToastSize};
pub use reposition::Repositioner;
pub use store::{Buckets, SubscriberHandle, ToastStore};

use std::time::Duration;

/// Duration of the entry slide/fade animation.
pub const ENTRY_ANIMATION: Duration = Duration::from_millis(400);

/// Duration of the exit animation; also the delay between marking a toast
/// for removal and deleting it from its bucket.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(400);

/// Delay before a capacity-evicted toast starts its exit, replacing the
/// remainder of its countdown. Keeps eviction fast but not abrupt.
pub const FAST_EVICTION_DELAY: Duration = Duration::from_millis(100);

/// Duration of the vertical reposition slide played when surrounding
/// toasts are added or removed.
pub const SLIDE_ANIMATION: Duration = Duration::from_millis(400);
