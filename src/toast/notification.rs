// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `Toast` record along with its identifier, intent,
//! position, and the input union accepted by `ToastStore::add`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a toast, assigned by the store at creation time.
///
/// Ids are monotonically increasing and never reused for the lifetime of
/// the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub(crate) u64);

impl ToastId {
    /// Returns the raw id value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Visual intent of a toast, determining accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Intent {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::Default,
        Intent::Success,
        Intent::Warning,
        Intent::Danger,
    ];

    /// Fallback icon glyph for this intent, used when the toast does not
    /// carry a custom one.
    #[must_use]
    pub fn icon(self) -> char {
        match self {
            Intent::Default => 'ℹ',
            Intent::Success => '✔',
            Intent::Warning => '⚠',
            Intent::Danger => '⚠',
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::Default => "Default",
            Intent::Success => "Success",
            Intent::Warning => "Warning",
            Intent::Danger => "Danger",
        };
        write!(f, "{label}")
    }
}

/// Screen position of a toast stack.
///
/// Center positions hold at most one visible toast; the others are capped
/// by the configured `max_toasts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Stable index into per-position storage.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::BottomLeft => 3,
            Position::BottomCenter => 4,
            Position::BottomRight => 5,
        }
    }

    /// Whether this is one of the two center positions (capacity 1).
    #[must_use]
    pub fn is_center(self) -> bool {
        matches!(self, Position::TopCenter | Position::BottomCenter)
    }

    /// Whether the stack is anchored to the top edge of the viewport.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Position::TopLeft | Position::TopCenter | Position::TopRight
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Position::TopLeft => "Top left",
            Position::TopCenter => "Top center",
            Position::TopRight => "Top right",
            Position::BottomLeft => "Bottom left",
            Position::BottomCenter => "Bottom center",
            Position::BottomRight => "Bottom right",
        };
        write!(f, "{label}")
    }
}

/// Card width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastSize {
    Xs,
    Sm,
    #[default]
    Default,
}

impl ToastSize {
    /// Maximum card width in logical pixels.
    #[must_use]
    pub fn max_width(self) -> f32 {
        match self {
            ToastSize::Xs => 240.0,
            ToastSize::Sm => 280.0,
            ToastSize::Default => 320.0,
        }
    }
}

/// Shared zero-argument callback attached to a toast.
pub type ToastCallback = Arc<dyn Fn() + Send + Sync>;

/// Action button configuration: a label plus an optional callback invoked
/// when the button is pressed.
#[derive(Clone)]
pub struct ToastAction {
    pub label: String,
    pub on_press: Option<ToastCallback>,
}

impl ToastAction {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            on_press: None,
        }
    }

    #[must_use]
    pub fn on_press(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_press = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .field("has_callback", &self.on_press.is_some())
            .finish()
    }
}

/// Structured configuration for a toast, built with chained setters.
#[derive(Clone, Default)]
pub struct ToastOptions {
    pub(crate) title: String,
    pub(crate) message: Option<String>,
    pub(crate) intent: Option<Intent>,
    pub(crate) filled: bool,
    pub(crate) duration: Option<Duration>,
    pub(crate) timestamp: Option<String>,
    pub(crate) size: Option<ToastSize>,
    pub(crate) position: Option<Position>,
    pub(crate) icon: Option<char>,
    pub(crate) action: Option<ToastAction>,
    pub(crate) on_close: Option<ToastCallback>,
}

impl ToastOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn intent(mut self, intent: Intent) -> Self {
        self.intent = Some(intent);
        self
    }

    /// Uses the solid intent color as the card background.
    #[must_use]
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    /// Overrides the configured default display duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn size(mut self, size: ToastSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: char) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Registers a callback invoked once when the toast begins closing,
    /// whether by timer, user dismissal, or capacity eviction.
    #[must_use]
    pub fn on_close(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for ToastOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastOptions")
            .field("title", &self.title)
            .field("intent", &self.intent)
            .field("position", &self.position)
            .finish()
    }
}

/// Input accepted by `ToastStore::add`: either a bare text title or a
/// structured configuration. Normalized into a [`Toast`] immediately on add.
#[derive(Debug, Clone)]
pub enum ToastInput {
    Title(String),
    Options(ToastOptions),
}

impl ToastInput {
    /// Folds the bare-text form into the structured one.
    pub(crate) fn into_options(self) -> ToastOptions {
        match self {
            ToastInput::Title(title) => ToastOptions::new(title),
            ToastInput::Options(options) => options,
        }
    }
}

impl From<&str> for ToastInput {
    fn from(title: &str) -> Self {
        ToastInput::Title(title.to_string())
    }
}

impl From<String> for ToastInput {
    fn from(title: String) -> Self {
        ToastInput::Title(title)
    }
}

impl From<ToastOptions> for ToastInput {
    fn from(options: ToastOptions) -> Self {
        ToastInput::Options(options)
    }
}

/// A toast as held by the store: fully resolved, with runtime flags.
#[derive(Clone)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub message: String,
    pub intent: Intent,
    pub filled: bool,
    /// Display duration, resolved against the configured default at add
    /// time. Later configuration changes do not affect it.
    pub duration: Duration,
    pub timestamp: Option<String>,
    pub size: ToastSize,
    pub position: Position,
    pub icon: char,
    pub action: Option<ToastAction>,
    pub(crate) on_close: Option<ToastCallback>,
    /// Set by capacity enforcement when this toast overflows its bucket.
    pub exceeded: bool,
    /// Set when removal has begun; the exit animation is playing and the
    /// bucket entry will be deleted shortly.
    pub exiting: bool,
}

impl Toast {
    pub(crate) fn from_options(id: ToastId, options: ToastOptions, default_duration: Duration) -> Self {
        let intent = options.intent.unwrap_or_default();
        Self {
            id,
            title: options.title,
            message: options.message.unwrap_or_default(),
            intent,
            filled: options.filled,
            duration: options.duration.unwrap_or(default_duration),
            timestamp: options.timestamp,
            size: options.size.unwrap_or_default(),
            position: options.position.unwrap_or_default(),
            icon: options.icon.unwrap_or_else(|| intent.icon()),
            action: options.action,
            on_close: options.on_close,
            exceeded: false,
            exiting: false,
        }
    }
}

impl fmt::Debug for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("intent", &self.intent)
            .field("position", &self.position)
            .field("exceeded", &self.exceeded)
            .field("exiting", &self.exiting)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_text_input_becomes_title() {
        let options = ToastInput::from("Saved").into_options();
        assert_eq!(options.title, "Saved");
        assert!(options.message.is_none());
        assert!(options.position.is_none());
    }

    #[test]
    fn toast_resolves_defaults() {
        let toast = Toast::from_options(
            ToastId(1),
            ToastOptions::new("hello"),
            Duration::from_millis(5000),
        );
        assert_eq!(toast.title, "hello");
        assert_eq!(toast.message, "");
        assert_eq!(toast.intent, Intent::Default);
        assert_eq!(toast.position, Position::TopRight);
        assert_eq!(toast.duration, Duration::from_millis(5000));
        assert!(!toast.exceeded);
        assert!(!toast.exiting);
    }

    #[test]
    fn explicit_duration_wins_over_default() {
        let toast = Toast::from_options(
            ToastId(1),
            ToastOptions::new("hello").duration(Duration::from_millis(1000)),
            Duration::from_millis(5000),
        );
        assert_eq!(toast.duration, Duration::from_millis(1000));
    }

    #[test]
    fn center_positions_are_detected() {
        assert!(Position::TopCenter.is_center());
        assert!(Position::BottomCenter.is_center());
        assert!(!Position::TopRight.is_center());
        assert!(!Position::BottomLeft.is_center());
    }

    #[test]
    fn default_position_is_top_right() {
        assert_eq!(Position::default(), Position::TopRight);
    }

    #[test]
    fn position_indices_are_distinct() {
        let mut seen = [false; 6];
        for position in Position::ALL {
            let index = position.index();
            assert!(!seen[index]);
            seen[index] = true;
        }
    }
}
