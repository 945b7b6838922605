// SPDX-License-Identifier: MPL-2.0
//! Runtime configuration for the toast store.

use std::time::Duration;

/// Default cap on simultaneously visible toasts per non-center position.
pub const DEFAULT_MAX_TOASTS: usize = 5;

/// Default display duration before a toast auto-dismisses.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

/// Process-wide toast defaults. Held by the store; changes affect only
/// toasts added afterward, since each toast resolves its duration at add
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// Maximum visible toasts per non-center position. Center positions
    /// are always capped at 1.
    pub max_toasts: usize,
    /// Default display duration for toasts that do not specify one.
    pub duration: Duration,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_toasts: DEFAULT_MAX_TOASTS,
            duration: DEFAULT_DURATION,
        }
    }
}

/// Partial configuration, shallow-merged into [`ToastConfig`] by
/// `ToastStore::configure`. Unset fields leave the current value in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub max_toasts: Option<usize>,
    pub duration: Option<Duration>,
}

impl ConfigOverrides {
    #[must_use]
    pub fn max_toasts(mut self, max_toasts: usize) -> Self {
        self.max_toasts = Some(max_toasts);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl ToastConfig {
    /// Applies a shallow merge of the given overrides.
    pub fn merge(&mut self, overrides: ConfigOverrides) {
        if let Some(max_toasts) = overrides.max_toasts {
            self.max_toasts = max_toasts;
        }
        if let Some(duration) = overrides.duration {
            self.duration = duration;
        }
    }
}
