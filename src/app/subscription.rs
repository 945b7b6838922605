// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for toast timers and animations.
///
/// Active only while the overlay has visible toasts, scheduled store work,
/// or an in-flight slide; otherwise the application goes fully idle.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(16)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
