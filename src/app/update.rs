// SPDX-License-Identifier: MPL-2.0
//! Message handling for the demo application.

use super::{App, Message};
use crate::toast::{Intent, ToastAction, ToastOptions};
use iced::Task;

fn sample_message(intent: Intent) -> &'static str {
    match intent {
        Intent::Default => "Something happened that you may want to know about",
        Intent::Success => "The operation completed successfully",
        Intent::Warning => "Something needs your attention",
        Intent::Danger => "The operation failed",
    }
}

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Overlay(message) => {
                self.overlay.update(&mut self.store, message);
            }
            Message::Tick(now) => {
                self.overlay.tick(&mut self.store, now);
            }
            Message::SpawnToast => {
                self.spawned += 1;
                let timestamp = chrono::Local::now().format("%H:%M").to_string();
                self.store.add(
                    ToastOptions::new(format!("Notification #{}", self.spawned))
                        .message(sample_message(self.intent))
                        .intent(self.intent)
                        .position(self.position)
                        .filled(self.filled)
                        .timestamp(timestamp)
                        .action(ToastAction::new("Undo")),
                );
            }
            Message::SpawnBare => {
                self.spawned += 1;
                self.store.add_with(
                    "Saved",
                    Some("Changes written to disk"),
                    ToastOptions::default()
                        .intent(Intent::Success)
                        .position(self.position),
                );
            }
            Message::IntentSelected(intent) => {
                self.intent = intent;
            }
            Message::PositionSelected(position) => {
                self.position = position;
            }
            Message::FilledToggled(filled) => {
                self.filled = filled;
            }
        }
        Task::none()
    }
}
