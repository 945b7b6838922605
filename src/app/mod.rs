// SPDX-License-Identifier: MPL-2.0
//! Application root state for the toast demo.
//!
//! The `App` struct owns the [`ToastStore`] and the overlay view state, and
//! wires the periodic tick subscription to them. The demo surface itself is
//! a small control panel for spawning toasts with different intents,
//! positions, and styles.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, ThemeMode};
use crate::toast::{Intent, Position, SubscriberHandle, ToastOptions, ToastStore};
use crate::ui::overlay;
use iced::{window, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// Root Iced application state.
pub struct App {
    store: ToastStore,
    overlay: overlay::State,
    theme_mode: ThemeMode,
    /// Control panel selections for the next spawned toast.
    intent: Intent,
    position: Position,
    filled: bool,
    /// Running count of spawned toasts, used for demo titles.
    spawned: u32,
    /// Store mutations observed through the subscription bridge.
    mutations: Rc<Cell<u64>>,
    /// Keeps the mutation counter subscribed for the app's lifetime.
    _store_subscription: SubscriberHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("store", &self.store)
            .field("spawned", &self.spawned)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the store from persisted configuration. A corrupted
    /// config file is reported as a warning toast rather than an error.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir);

        let mut store = ToastStore::new();
        store.configure(config.toast.overrides());

        let mutations = Rc::new(Cell::new(0u64));
        let counter = Rc::clone(&mutations);
        let handle = store.subscribe(move || counter.set(counter.get() + 1));

        if let Some(warning) = config_warning {
            store.add(
                ToastOptions::new("Settings not loaded")
                    .message(warning)
                    .intent(Intent::Warning)
                    .position(Position::TopCenter),
            );
        }

        let overlay = overlay::State::new(&store);
        let app = App {
            store,
            overlay,
            theme_mode: config.general.theme_mode,
            intent: Intent::Default,
            position: Position::default(),
            filled: false,
            spawned: 0,
            mutations,
            _store_subscription: handle,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Toasts")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            // System detection is not wired up; fall back to dark.
            ThemeMode::Dark | ThemeMode::System => Theme::Dark,
        }
    }

    fn subscription(&self) -> iced::Subscription<Message> {
        subscription::create_tick_subscription(self.overlay.needs_ticks(&self.store))
    }
}
