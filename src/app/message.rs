// SPDX-License-Identifier: MPL-2.0
//! Top-level message and launch flags for the demo application.

use crate::toast::{Intent, Position};
use crate::ui::overlay;
use std::path::PathBuf;
use std::time::Instant;

/// Launch flags parsed in `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Custom config directory from the `--config-dir` CLI flag.
    pub config_dir: Option<PathBuf>,
}

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toast interactions forwarded from the overlay.
    Overlay(overlay::Message),
    /// Periodic tick driving toast timers and animations.
    Tick(Instant),
    /// Spawn a structured toast from the current control settings.
    SpawnToast,
    /// Spawn a bare-text toast.
    SpawnBare,
    IntentSelected(Intent),
    PositionSelected(Position),
    FilledToggled(bool),
}
