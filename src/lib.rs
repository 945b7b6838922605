// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a stacked toast notification system for the Iced GUI toolkit.
//!
//! It provides a view-agnostic notification store with per-position capacity
//! limits, a subscription bridge for change observation, and an overlay layer
//! that animates toast entry, exit, and reposition slides.

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;
